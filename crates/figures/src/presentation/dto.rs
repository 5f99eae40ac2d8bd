//! API DTOs (Data Transfer Objects)

use crate::domain::entities::{FigureContent, HistoricalFigure};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Request body for POST /figures and PUT /figures/{id}
///
/// Unknown fields are ignored, absent fields default to empty. An `id`
/// in the body is accepted and discarded: create lets the store assign
/// one, update takes it from the path.
#[derive(Debug, Clone, Deserialize)]
pub struct FigureBody {
    #[serde(default)]
    pub id: Option<Uuid>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub birthdate: String,
    #[serde(default)]
    pub fields: Vec<String>,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub source_url: String,
}

impl FigureBody {
    /// Drop the (ignored) body identifier and keep the record content
    pub fn into_content(self) -> FigureContent {
        FigureContent {
            name: self.name,
            birthdate: self.birthdate,
            fields: self.fields,
            bio: self.bio,
            image_url: self.image_url,
            source_url: self.source_url,
        }
    }
}

/// One figure record on the wire
#[derive(Debug, Clone, Serialize)]
pub struct FigureResponse {
    pub id: Uuid,
    pub name: String,
    pub birthdate: String,
    pub fields: Vec<String>,
    pub bio: String,
    pub image_url: String,
    pub source_url: String,
}

impl From<HistoricalFigure> for FigureResponse {
    fn from(figure: HistoricalFigure) -> Self {
        let HistoricalFigure { figure_id, content } = figure;
        Self {
            id: figure_id.into_uuid(),
            name: content.name,
            birthdate: content.birthdate,
            fields: content.fields,
            bio: content.bio,
            image_url: content.image_url,
            source_url: content.source_url,
        }
    }
}

/// Confirmation for DELETE /figures/{id}
#[derive(Debug, Clone, Serialize)]
pub struct DeleteResponse {
    pub message: &'static str,
}
