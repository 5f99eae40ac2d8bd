//! Get Figure Use Case

use crate::domain::entities::HistoricalFigure;
use crate::domain::query::FigureFilter;
use crate::domain::repository::FigureRepository;
use crate::error::{FigureError, FigureResult};
use kernel::id::FigureId;
use std::sync::Arc;

/// Get Figure Use Case
pub struct GetFigureUseCase<R>
where
    R: FigureRepository,
{
    repo: Arc<R>,
}

impl<R> GetFigureUseCase<R>
where
    R: FigureRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Direct lookup. Zero matches is the one place not-found applies.
    pub async fn execute(&self, figure_id: FigureId) -> FigureResult<HistoricalFigure> {
        self.repo
            .find_one(FigureFilter::by_id(figure_id))
            .await?
            .ok_or(FigureError::NotFound)
    }
}
