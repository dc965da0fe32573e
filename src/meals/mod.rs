mod dto;
pub mod handlers;
pub mod model;
pub mod services;

use crate::state::AppState;
use axum::Router;

pub use model::{Meal, MealDraft, MAX_RATING, MIN_RATING};

pub fn router(state: &AppState) -> Router<AppState> {
    Router::new()
        .merge(handlers::read_routes())
        .merge(handlers::write_routes(state.config.max_body_bytes))
}
