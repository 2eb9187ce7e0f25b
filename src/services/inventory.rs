use crate::{
    db::{self, DbPool},
    entities::inventory_item::{self, Entity as InventoryItemEntity},
    errors::ServiceError,
};
use sea_orm::{
    ActiveModelTrait, EntityTrait, IntoActiveModel, ModelTrait, QueryOrder, Set, TransactionTrait,
};
use std::sync::Arc;
use tracing::{info, instrument};

/// Fields supplied when adding an item.
#[derive(Debug, Clone)]
pub struct NewInventoryItem {
    pub name: String,
    pub quantity: i32,
}

/// Create/read/update/delete operations over the inventory table.
#[derive(Clone)]
pub struct InventoryService {
    db_pool: Arc<DbPool>,
}

impl InventoryService {
    pub fn new(db_pool: Arc<DbPool>) -> Self {
        Self { db_pool }
    }

    /// All items in storage order (ascending id).
    #[instrument(skip(self))]
    pub async fn list_items(&self) -> Result<Vec<inventory_item::Model>, ServiceError> {
        let db = &*self.db_pool;
        db::timed(
            "list_items",
            InventoryItemEntity::find()
                .order_by_asc(inventory_item::Column::Id)
                .all(db),
        )
        .await
        .map_err(ServiceError::from_db)
    }

    #[instrument(skip(self))]
    pub async fn get_item(&self, id: i32) -> Result<Option<inventory_item::Model>, ServiceError> {
        let db = &*self.db_pool;
        db::timed("get_item", InventoryItemEntity::find_by_id(id).one(db))
            .await
            .map_err(ServiceError::from_db)
    }

    /// Inserts a new row. A duplicate name is rejected by the UNIQUE
    /// constraint and surfaces as `ServiceError::ConstraintViolation`.
    #[instrument(skip(self), fields(name = %item.name))]
    pub async fn add_item(
        &self,
        item: NewInventoryItem,
    ) -> Result<inventory_item::Model, ServiceError> {
        let db = &*self.db_pool;
        let active = inventory_item::ActiveModel {
            name: Set(item.name),
            quantity: Set(item.quantity),
            ..Default::default()
        };

        let created = db::timed("add_item", active.insert(db))
            .await
            .map_err(ServiceError::from_db)?;

        info!(id = created.id, "Added {}", created);
        Ok(created)
    }

    /// Overwrites the quantity of an existing item. The lookup and the
    /// write share one transaction; a missing id writes nothing.
    #[instrument(skip(self))]
    pub async fn update_quantity(
        &self,
        id: i32,
        quantity: i32,
    ) -> Result<inventory_item::Model, ServiceError> {
        let txn = self.db_pool.begin().await.map_err(ServiceError::from_db)?;

        let existing = db::timed(
            "update_quantity.find",
            InventoryItemEntity::find_by_id(id).one(&txn),
        )
        .await
        .map_err(ServiceError::from_db)?
        .ok_or_else(|| ServiceError::item_not_found(id))?;

        let mut active = existing.into_active_model();
        active.quantity = Set(quantity);
        let updated = db::timed("update_quantity.write", active.update(&txn))
            .await
            .map_err(ServiceError::from_db)?;

        txn.commit().await.map_err(ServiceError::from_db)?;

        info!(id, quantity, "Updated quantity of {}", updated);
        Ok(updated)
    }

    /// Permanently removes an item.
    #[instrument(skip(self))]
    pub async fn delete_item(&self, id: i32) -> Result<(), ServiceError> {
        let txn = self.db_pool.begin().await.map_err(ServiceError::from_db)?;

        let existing = db::timed(
            "delete_item.find",
            InventoryItemEntity::find_by_id(id).one(&txn),
        )
        .await
        .map_err(ServiceError::from_db)?
        .ok_or_else(|| ServiceError::item_not_found(id))?;

        let label = existing.to_string();
        db::timed("delete_item.write", existing.delete(&txn))
            .await
            .map_err(ServiceError::from_db)?;

        txn.commit().await.map_err(ServiceError::from_db)?;

        info!(id, "Deleted {}", label);
        Ok(())
    }
}
