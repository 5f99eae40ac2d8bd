//! PostgreSQL Repository Implementation

use crate::domain::entities::{FigureContent, HistoricalFigure};
use crate::domain::query::FigureFilter;
use crate::domain::repository::FigureRepository;
use crate::error::{FigureError, FigureResult, StoreOp};
use kernel::id::FigureId;
use sqlx::PgPool;
use uuid::Uuid;

/// PostgreSQL-backed repository
///
/// The pool is injected once at startup and shared read-only by every
/// request; sqlx serializes access internally.
#[derive(Clone)]
pub struct PgFigureRepository {
    pool: PgPool,
}

impl PgFigureRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl FigureRepository for PgFigureRepository {
    async fn find(&self, filter: FigureFilter) -> FigureResult<Vec<HistoricalFigure>> {
        let rows = match filter {
            FigureFilter::All => {
                sqlx::query_as::<_, FigureRow>(
                    r#"
                    SELECT figure_id, name, birthdate, fields, bio, image_url, source_url
                    FROM figures
                    "#,
                )
                .fetch_all(&self.pool)
                .await
            }
            FigureFilter::ById(figure_id) => {
                sqlx::query_as::<_, FigureRow>(
                    r#"
                    SELECT figure_id, name, birthdate, fields, bio, image_url, source_url
                    FROM figures
                    WHERE figure_id = $1
                    "#,
                )
                .bind(figure_id.into_uuid())
                .fetch_all(&self.pool)
                .await
            }
        }
        .map_err(|e| FigureError::store(StoreOp::Fetch, e))?;

        Ok(rows.into_iter().map(FigureRow::into_figure).collect())
    }

    async fn find_one(&self, filter: FigureFilter) -> FigureResult<Option<HistoricalFigure>> {
        let row = match filter {
            FigureFilter::All => {
                sqlx::query_as::<_, FigureRow>(
                    r#"
                    SELECT figure_id, name, birthdate, fields, bio, image_url, source_url
                    FROM figures
                    LIMIT 1
                    "#,
                )
                .fetch_optional(&self.pool)
                .await
            }
            FigureFilter::ById(figure_id) => {
                sqlx::query_as::<_, FigureRow>(
                    r#"
                    SELECT figure_id, name, birthdate, fields, bio, image_url, source_url
                    FROM figures
                    WHERE figure_id = $1
                    "#,
                )
                .bind(figure_id.into_uuid())
                .fetch_optional(&self.pool)
                .await
            }
        }
        .map_err(|e| FigureError::store(StoreOp::Fetch, e))?;

        Ok(row.map(FigureRow::into_figure))
    }

    async fn insert(&self, content: &FigureContent) -> FigureResult<HistoricalFigure> {
        // figure_id comes from the table default; the application never
        // chooses identifiers
        let row = sqlx::query_as::<_, FigureRow>(
            r#"
            INSERT INTO figures (name, birthdate, fields, bio, image_url, source_url)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING figure_id, name, birthdate, fields, bio, image_url, source_url
            "#,
        )
        .bind(&content.name)
        .bind(&content.birthdate)
        .bind(&content.fields)
        .bind(&content.bio)
        .bind(&content.image_url)
        .bind(&content.source_url)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| FigureError::store(StoreOp::Insert, e))?;

        Ok(row.into_figure())
    }

    async fn replace(&self, figure_id: FigureId, content: &FigureContent) -> FigureResult<u64> {
        let result = sqlx::query(
            r#"
            UPDATE figures
            SET name = $1, birthdate = $2, fields = $3, bio = $4, image_url = $5, source_url = $6
            WHERE figure_id = $7
            "#,
        )
        .bind(&content.name)
        .bind(&content.birthdate)
        .bind(&content.fields)
        .bind(&content.bio)
        .bind(&content.image_url)
        .bind(&content.source_url)
        .bind(figure_id.into_uuid())
        .execute(&self.pool)
        .await
        .map_err(|e| FigureError::store(StoreOp::Update, e))?;

        Ok(result.rows_affected())
    }

    async fn delete(&self, figure_id: FigureId) -> FigureResult<u64> {
        let result = sqlx::query("DELETE FROM figures WHERE figure_id = $1")
            .bind(figure_id.into_uuid())
            .execute(&self.pool)
            .await
            .map_err(|e| FigureError::store(StoreOp::Delete, e))?;

        Ok(result.rows_affected())
    }
}

#[derive(sqlx::FromRow)]
struct FigureRow {
    figure_id: Uuid,
    name: String,
    birthdate: String,
    fields: Vec<String>,
    bio: String,
    image_url: String,
    source_url: String,
}

impl FigureRow {
    fn into_figure(self) -> HistoricalFigure {
        HistoricalFigure::new(
            FigureId::from_uuid(self.figure_id),
            FigureContent {
                name: self.name,
                birthdate: self.birthdate,
                fields: self.fields,
                bio: self.bio,
                image_url: self.image_url,
                source_url: self.source_url,
            },
        )
    }
}
