//! Update Figure Use Case

use crate::domain::entities::{FigureContent, HistoricalFigure};
use crate::domain::repository::FigureRepository;
use crate::error::FigureResult;
use kernel::id::FigureId;
use std::sync::Arc;

/// Update Figure Use Case
pub struct UpdateFigureUseCase<R>
where
    R: FigureRepository,
{
    repo: Arc<R>,
}

impl<R> UpdateFigureUseCase<R>
where
    R: FigureRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Full replacement keyed by the path identifier.
    ///
    /// Existence is not verified: replacing an absent identifier is a
    /// store-level no-op and still succeeds. The returned record is the
    /// given content with the path identifier attached, matching the
    /// documented contract either way.
    pub async fn execute(
        &self,
        figure_id: FigureId,
        content: FigureContent,
    ) -> FigureResult<HistoricalFigure> {
        let replaced = self.repo.replace(figure_id, &content).await?;

        if replaced == 0 {
            tracing::debug!(figure_id = %figure_id, "Update matched no record");
        } else {
            tracing::info!(figure_id = %figure_id, "Figure updated");
        }

        Ok(HistoricalFigure::new(figure_id, content))
    }
}
