//! Field-by-field mapping between domain entities and commands.
//!
//! Every conversion is a `From` impl over references, so an absent source maps
//! to an absent target through `Option::map` instead of failing.

mod category;
mod ingredient;
mod notes;
mod recipe;
mod unit_of_measure;
