fn main() {
    recipe_api::main();
}
