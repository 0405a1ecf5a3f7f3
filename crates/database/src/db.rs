use sea_orm::{Database, DatabaseConnection, DbErr};

/// Opens a database connection for the given URL. The caller owns the handle;
/// the server keeps one in its shared state and passes it into every service
/// call.
pub async fn connect(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    Database::connect(database_url).await
}
