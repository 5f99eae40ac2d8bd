//! Figures Router

use crate::domain::repository::FigureRepository;
use crate::presentation::handlers::{self, FiguresAppState};
use axum::{Router, routing::get};
use std::sync::Arc;

/// Create the figures router for any repository implementation.
///
/// Mounted under `/figures` by the application; the paths here are
/// relative to that prefix.
pub fn figures_router<R>(repo: R) -> Router
where
    R: FigureRepository + Clone + Send + Sync + 'static,
{
    let state = FiguresAppState {
        repo: Arc::new(repo),
    };

    Router::new()
        .route(
            "/",
            get(handlers::list_figures::<R>).post(handlers::create_figure::<R>),
        )
        .route(
            "/{id}",
            get(handlers::get_figure::<R>)
                .put(handlers::update_figure::<R>)
                .delete(handlers::delete_figure::<R>),
        )
        .with_state(state)
}
