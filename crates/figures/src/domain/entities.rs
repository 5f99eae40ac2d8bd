//! HistoricalFigure Entity

use kernel::id::FigureId;

/// The replaceable portion of a figure record.
///
/// Everything except the identifier. Create and update both take this
/// shape, which makes "the body's id is ignored" structural: there is no
/// identifier field to smuggle in.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FigureContent {
    /// Display name (required by convention, not enforced)
    pub name: String,
    /// Free-form text, not validated as a date
    pub birthdate: String,
    /// Ordered sequence of field-of-work tags
    pub fields: Vec<String>,
    /// Free text biography
    pub bio: String,
    /// Not validated as a URL
    pub image_url: String,
    /// Not validated as a URL
    pub source_url: String,
}

/// One stored figure record.
///
/// The identifier is assigned by the store on insert and never changes
/// afterwards; updates replace the content wholesale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoricalFigure {
    pub figure_id: FigureId,
    pub content: FigureContent,
}

impl HistoricalFigure {
    pub fn new(figure_id: FigureId, content: FigureContent) -> Self {
        Self { figure_id, content }
    }
}
