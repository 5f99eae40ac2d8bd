//! In-Memory Repository Implementation
//!
//! Backs the unit tests and ad-hoc demos. Same contract as the
//! PostgreSQL implementation: store-assigned identifiers, no-op replace
//! and delete on absent identifiers.

use crate::domain::entities::{FigureContent, HistoricalFigure};
use crate::domain::query::FigureFilter;
use crate::domain::repository::FigureRepository;
use crate::error::FigureResult;
use kernel::id::FigureId;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// In-memory figure store. Cloning shares the underlying records.
#[derive(Clone, Default)]
pub struct InMemoryFigureRepository {
    records: Arc<RwLock<Vec<HistoricalFigure>>>,
}

impl InMemoryFigureRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records currently stored
    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    fn read(&self) -> RwLockReadGuard<'_, Vec<HistoricalFigure>> {
        self.records.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<HistoricalFigure>> {
        self.records.write().unwrap_or_else(|e| e.into_inner())
    }
}

impl FigureRepository for InMemoryFigureRepository {
    async fn find(&self, filter: FigureFilter) -> FigureResult<Vec<HistoricalFigure>> {
        Ok(self
            .read()
            .iter()
            .filter(|figure| filter.matches(figure))
            .cloned()
            .collect())
    }

    async fn find_one(&self, filter: FigureFilter) -> FigureResult<Option<HistoricalFigure>> {
        Ok(self
            .read()
            .iter()
            .find(|figure| filter.matches(figure))
            .cloned())
    }

    async fn insert(&self, content: &FigureContent) -> FigureResult<HistoricalFigure> {
        let figure = HistoricalFigure::new(FigureId::new(), content.clone());
        self.write().push(figure.clone());
        Ok(figure)
    }

    async fn replace(&self, figure_id: FigureId, content: &FigureContent) -> FigureResult<u64> {
        let mut records = self.write();
        match records
            .iter_mut()
            .find(|figure| figure.figure_id == figure_id)
        {
            Some(figure) => {
                figure.content = content.clone();
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete(&self, figure_id: FigureId) -> FigureResult<u64> {
        let mut records = self.write();
        let before = records.len();
        records.retain(|figure| figure.figure_id != figure_id);
        Ok((before - records.len()) as u64)
    }
}
