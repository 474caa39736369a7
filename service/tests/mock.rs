use entity::unit_of_measure;
use pretty_assertions::assert_eq;
use recipe_service::{
    UnitOfMeasureService,
    commands::UnitOfMeasureCommand,
    sea_orm::{DatabaseBackend, MockDatabase},
};

#[tokio::test]
async fn lists_all_units_of_measure() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![
            unit_of_measure::Model {
                id: 1,
                description: "Teaspoon".to_owned(),
            },
            unit_of_measure::Model {
                id: 2,
                description: "Tablespoon".to_owned(),
            },
        ]])
        .into_connection();

    let units = UnitOfMeasureService::new(db).list_all_uoms().await.unwrap();

    assert_eq!(
        units,
        vec![
            UnitOfMeasureCommand {
                id: Some(1),
                description: Some("Teaspoon".to_owned()),
            },
            UnitOfMeasureCommand {
                id: Some(2),
                description: Some("Tablespoon".to_owned()),
            },
        ]
    );
}
