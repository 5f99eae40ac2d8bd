//! Repository Trait
//!
//! Interface for figure persistence. Implementations are in the
//! infrastructure layer.

use crate::domain::entities::{FigureContent, HistoricalFigure};
use crate::domain::query::FigureFilter;
use crate::error::FigureResult;
use kernel::id::FigureId;

/// Figure repository trait
#[trait_variant::make(FigureRepository: Send)]
pub trait LocalFigureRepository {
    /// Fetch every record matching the filter, in store order
    async fn find(&self, filter: FigureFilter) -> FigureResult<Vec<HistoricalFigure>>;

    /// Fetch at most one record matching the filter
    async fn find_one(&self, filter: FigureFilter) -> FigureResult<Option<HistoricalFigure>>;

    /// Insert a new record; the store assigns the identifier
    async fn insert(&self, content: &FigureContent) -> FigureResult<HistoricalFigure>;

    /// Replace every content field of the record with this identifier.
    /// Targeting an absent identifier is a no-op. Returns how many
    /// records were replaced (0 or 1).
    async fn replace(&self, figure_id: FigureId, content: &FigureContent) -> FigureResult<u64>;

    /// Delete the record with this identifier, if any. Returns how many
    /// records were removed (0 or 1).
    async fn delete(&self, figure_id: FigureId) -> FigureResult<u64>;
}
