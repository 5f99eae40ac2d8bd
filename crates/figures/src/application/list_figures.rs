//! List Figures Use Case

use crate::domain::entities::HistoricalFigure;
use crate::domain::query::FigureFilter;
use crate::domain::repository::FigureRepository;
use crate::error::FigureResult;
use std::sync::Arc;

/// List Figures Use Case
pub struct ListFiguresUseCase<R>
where
    R: FigureRepository,
{
    repo: Arc<R>,
}

impl<R> ListFiguresUseCase<R>
where
    R: FigureRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Full scan. Order is whatever the store returns.
    pub async fn execute(&self) -> FigureResult<Vec<HistoricalFigure>> {
        let figures = self.repo.find(FigureFilter::All).await?;

        tracing::debug!(count = figures.len(), "Listed figures");

        Ok(figures)
    }
}
