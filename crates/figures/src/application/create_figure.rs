//! Create Figure Use Case

use crate::domain::entities::{FigureContent, HistoricalFigure};
use crate::domain::repository::FigureRepository;
use crate::error::FigureResult;
use std::sync::Arc;

/// Create Figure Use Case
pub struct CreateFigureUseCase<R>
where
    R: FigureRepository,
{
    repo: Arc<R>,
}

impl<R> CreateFigureUseCase<R>
where
    R: FigureRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Insert the content; the store assigns the identifier.
    pub async fn execute(&self, content: FigureContent) -> FigureResult<HistoricalFigure> {
        let figure = self.repo.insert(&content).await?;

        tracing::info!(figure_id = %figure.figure_id, "Figure created");

        Ok(figure)
    }
}
