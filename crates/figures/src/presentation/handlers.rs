//! HTTP Handlers
//!
//! Each handler is one validate -> store call -> respond sequence.
//! Identifier validation happens before the use case is built, so a
//! malformed identifier never reaches the store.

use crate::application::{
    CreateFigureUseCase, DeleteFigureUseCase, GetFigureUseCase, ListFiguresUseCase,
    UpdateFigureUseCase,
};
use crate::domain::repository::FigureRepository;
use crate::error::{FigureError, FigureResult};
use crate::presentation::dto::{DeleteResponse, FigureBody, FigureResponse};
use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use kernel::id::FigureId;
use std::sync::Arc;

/// Shared state for figure handlers
#[derive(Clone)]
pub struct FiguresAppState<R>
where
    R: FigureRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
}

/// GET /figures
pub async fn list_figures<R>(
    State(state): State<FiguresAppState<R>>,
) -> FigureResult<Json<Vec<FigureResponse>>>
where
    R: FigureRepository + Clone + Send + Sync + 'static,
{
    let use_case = ListFiguresUseCase::new(state.repo.clone());

    let figures = use_case.execute().await?;

    Ok(Json(figures.into_iter().map(FigureResponse::from).collect()))
}

/// GET /figures/{id}
pub async fn get_figure<R>(
    State(state): State<FiguresAppState<R>>,
    Path(id): Path<String>,
) -> FigureResult<Json<FigureResponse>>
where
    R: FigureRepository + Clone + Send + Sync + 'static,
{
    let figure_id = FigureId::parse_str(&id).map_err(FigureError::InvalidId)?;

    let use_case = GetFigureUseCase::new(state.repo.clone());

    let figure = use_case.execute(figure_id).await?;

    Ok(Json(figure.into()))
}

/// POST /figures
pub async fn create_figure<R>(
    State(state): State<FiguresAppState<R>>,
    body: Result<Json<FigureBody>, JsonRejection>,
) -> FigureResult<impl IntoResponse>
where
    R: FigureRepository + Clone + Send + Sync + 'static,
{
    let Json(body) = body.map_err(FigureError::InvalidBody)?;

    let use_case = CreateFigureUseCase::new(state.repo.clone());

    let figure = use_case.execute(body.into_content()).await?;

    Ok((StatusCode::CREATED, Json(FigureResponse::from(figure))))
}

/// PUT /figures/{id}
pub async fn update_figure<R>(
    State(state): State<FiguresAppState<R>>,
    Path(id): Path<String>,
    body: Result<Json<FigureBody>, JsonRejection>,
) -> FigureResult<Json<FigureResponse>>
where
    R: FigureRepository + Clone + Send + Sync + 'static,
{
    // Identifier first, body second, same as the lookup handlers
    let figure_id = FigureId::parse_str(&id).map_err(FigureError::InvalidId)?;
    let Json(body) = body.map_err(FigureError::InvalidBody)?;

    let use_case = UpdateFigureUseCase::new(state.repo.clone());

    let figure = use_case.execute(figure_id, body.into_content()).await?;

    Ok(Json(figure.into()))
}

/// DELETE /figures/{id}
pub async fn delete_figure<R>(
    State(state): State<FiguresAppState<R>>,
    Path(id): Path<String>,
) -> FigureResult<Json<DeleteResponse>>
where
    R: FigureRepository + Clone + Send + Sync + 'static,
{
    let figure_id = FigureId::parse_str(&id).map_err(FigureError::InvalidId)?;

    let use_case = DeleteFigureUseCase::new(state.repo.clone());

    use_case.execute(figure_id).await?;

    Ok(Json(DeleteResponse {
        message: "Figure deleted",
    }))
}
