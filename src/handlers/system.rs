use crate::{errors::ServiceError, schema, AppState};
use axum::extract::State;

/// GET /init_db — ensures the inventory table exists. Never drops data.
pub async fn init_db(State(state): State<AppState>) -> Result<&'static str, ServiceError> {
    schema::create_tables(&state.db).await?;
    Ok("Database tables created!")
}
