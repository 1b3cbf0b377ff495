use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbErr, Schema};

use crate::infrastructure::entity::users;

/// Open the connection pool
pub async fn connect(url: &str, max_connections: u32) -> Result<DatabaseConnection, DbErr> {
    let mut opt = ConnectOptions::new(url);
    opt.max_connections(max_connections)
        .min_connections(1)
        .sqlx_logging(true);

    let db = Database::connect(opt).await?;
    tracing::info!(max_connections, "connected to database");
    Ok(db)
}

/// Create the `users` table, with its unique `userID` column, if it is missing
pub async fn create_schema(db: &DatabaseConnection) -> Result<(), DbErr> {
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);

    let mut statement = schema.create_table_from_entity(users::Entity);
    statement.if_not_exists();
    db.execute(backend.build(&statement)).await?;

    Ok(())
}

#[cfg(test)]
pub async fn connect_in_memory() -> DatabaseConnection {
    // every in-memory connection is its own database, so the pool holds one
    let db = connect("sqlite::memory:", 1).await.unwrap();
    create_schema(&db).await.unwrap();
    db
}
