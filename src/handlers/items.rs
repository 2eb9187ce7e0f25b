//! Browser-facing list page and the form posts it submits.

use crate::{
    errors::ServiceError,
    forms::{parse_quantity, AddItemForm, UpdateQuantityForm},
    services::inventory::NewInventoryItem,
    AppState,
};
use axum::{
    extract::{rejection::FormRejection, Form, Path, State},
    response::{Html, Redirect},
};

/// GET / — every item, in storage order.
pub async fn list_items(State(state): State<AppState>) -> Result<Html<String>, ServiceError> {
    let items = state.inventory_service.list_items().await?;
    let page = state.views.render_inventory(&items)?;
    Ok(Html(page))
}

/// POST /add
pub async fn add_item(
    State(state): State<AppState>,
    form: Result<Form<AddItemForm>, FormRejection>,
) -> Result<Redirect, ServiceError> {
    let Form(form) = form?;
    let quantity = parse_quantity(&form.quantity)?;
    state
        .inventory_service
        .add_item(NewInventoryItem {
            name: form.name,
            quantity,
        })
        .await?;
    Ok(Redirect::to("/"))
}

/// POST /update/:id
///
/// The item is looked up before the body is read, so an unknown id is a
/// 404 whatever the form contains.
pub async fn update_item(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    form: Result<Form<UpdateQuantityForm>, FormRejection>,
) -> Result<Redirect, ServiceError> {
    if state.inventory_service.get_item(id).await?.is_none() {
        return Err(ServiceError::item_not_found(id));
    }

    let Form(form) = form?;
    let quantity = parse_quantity(&form.quantity)?;
    state.inventory_service.update_quantity(id, quantity).await?;
    Ok(Redirect::to("/"))
}

/// POST /delete/:id
pub async fn delete_item(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Redirect, ServiceError> {
    state.inventory_service.delete_item(id).await?;
    Ok(Redirect::to("/"))
}
