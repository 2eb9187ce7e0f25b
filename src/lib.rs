//! Inventory tracker
//!
//! A small web application that lists stock items and lets a user add,
//! update and delete them. Items live in a single SQLite table accessed
//! through sea-orm; handlers receive the store through [`AppState`].
#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![allow(elided_lifetimes_in_paths)]
#![warn(clippy::all, clippy::perf, clippy::dbg_macro)]

pub mod config;
pub mod db;
pub mod entities;
pub mod errors;
pub mod forms;
pub mod handlers;
pub mod health;
pub mod middleware_helpers;
pub mod schema;
pub mod services;
pub mod tracing;
pub mod views;

use axum::{
    routing::{get, post},
    Router,
};
use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::errors::ServiceError;
use crate::services::inventory::InventoryService;

/// Shared application state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<DatabaseConnection>,
    pub inventory_service: InventoryService,
    pub views: Arc<views::Views>,
}

impl AppState {
    pub fn new(db: Arc<DatabaseConnection>) -> Result<Self, ServiceError> {
        Ok(Self {
            inventory_service: InventoryService::new(db.clone()),
            views: Arc::new(views::Views::new()?),
            db,
        })
    }
}

/// Form-driven pages plus the schema bootstrap endpoint.
pub fn inventory_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::items::list_items))
        .route("/add", post(handlers::items::add_item))
        .route("/update/:id", post(handlers::items::update_item))
        .route("/delete/:id", post(handlers::items::delete_item))
        .route("/init_db", get(handlers::system::init_db))
}

pub fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .route("/items", get(handlers::api::list_items))
        .route("/items/:id", get(handlers::api::get_item))
}

/// Full router with tracing and request-id layers applied.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .merge(inventory_routes())
        .route("/health", get(health::health_check))
        .nest("/api/v1", api_v1_routes())
        .layer(tracing::configure_http_tracing())
        .layer(axum::middleware::from_fn(
            middleware_helpers::request_id::request_id_middleware,
        ))
        .with_state(state)
}
