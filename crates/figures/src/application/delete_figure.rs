//! Delete Figure Use Case

use crate::domain::repository::FigureRepository;
use crate::error::FigureResult;
use kernel::id::FigureId;
use std::sync::Arc;

/// Delete Figure Use Case
pub struct DeleteFigureUseCase<R>
where
    R: FigureRepository,
{
    repo: Arc<R>,
}

impl<R> DeleteFigureUseCase<R>
where
    R: FigureRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Idempotent delete: success whether or not a record existed.
    /// Only a failing store call is an error.
    pub async fn execute(&self, figure_id: FigureId) -> FigureResult<()> {
        let removed = self.repo.delete(figure_id).await?;

        tracing::info!(figure_id = %figure_id, removed, "Figure delete issued");

        Ok(())
    }
}
