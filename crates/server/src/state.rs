use sea_orm::DatabaseConnection;

/// Shared application state: the single long-lived database handle, opened in
/// `main` and cloned cheaply into each handler.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
}
