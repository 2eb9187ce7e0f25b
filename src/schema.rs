//! Table creation for the inventory store.

use crate::entities::inventory_item;
use crate::errors::ServiceError;
use sea_orm::{ConnectionTrait, DatabaseConnection, Schema};
use tracing::info;

/// Creates the `inventory_item` table if it does not already exist.
/// Existing tables and rows are left untouched, so this is safe to call
/// any number of times.
pub async fn create_tables(db: &DatabaseConnection) -> Result<(), ServiceError> {
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);

    let mut stmt = schema.create_table_from_entity(inventory_item::Entity);
    stmt.if_not_exists();

    db.execute(backend.build(&stmt))
        .await
        .map_err(ServiceError::from_db)?;

    info!("Ensured table {} exists", "inventory_item");
    Ok(())
}
