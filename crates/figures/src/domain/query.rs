//! Typed Query Filter
//!
//! The service supports exactly two predicates: match everything (list)
//! and equality on the identifier (direct lookup). Encoding them as an
//! enum keeps the store surface closed; there is no way to express a
//! query the handlers do not need.

use crate::domain::entities::HistoricalFigure;
use kernel::id::FigureId;

/// Filter for figure queries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FigureFilter {
    /// Match every record (full scan)
    All,
    /// Match the single record with this identifier
    ById(FigureId),
}

impl FigureFilter {
    pub fn by_id(figure_id: FigureId) -> Self {
        FigureFilter::ById(figure_id)
    }

    /// Whether a record satisfies this filter
    pub fn matches(&self, figure: &HistoricalFigure) -> bool {
        match self {
            FigureFilter::All => true,
            FigureFilter::ById(figure_id) => figure.figure_id == *figure_id,
        }
    }
}
