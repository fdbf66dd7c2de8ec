use sqlx::{PgPool, Postgres, QueryBuilder};
use tracing::instrument;
use uuid::Uuid;

use scholaris_core::{AppError, FilterSet, Paginated, PaginationParams};

use super::model::{CreateSectionDto, Section, UpdateSectionDto};

pub struct SectionService;

impl SectionService {
    #[instrument(skip(db, filters))]
    pub async fn list(
        db: &PgPool,
        pagination: &PaginationParams,
        filters: &FilterSet,
    ) -> Result<Paginated<Section>, AppError> {
        let mut count_query: QueryBuilder<'_, Postgres> =
            QueryBuilder::new("SELECT COUNT(*) FROM sections WHERE TRUE");
        filters.push_where(&mut count_query);

        let total: i64 = count_query
            .build_query_scalar()
            .fetch_one(db)
            .await
            .map_err(|e| AppError::from_sqlx(e, "Section"))?;

        let mut query: QueryBuilder<'_, Postgres> = QueryBuilder::new(
            "SELECT id, name, class_id, created_at, updated_at FROM sections WHERE TRUE",
        );
        filters.push_where(&mut query);
        query.push(" ORDER BY created_at DESC LIMIT ");
        query.push_bind(pagination.limit());
        query.push(" OFFSET ");
        query.push_bind(pagination.offset());

        let sections = query
            .build_query_as::<Section>()
            .fetch_all(db)
            .await
            .map_err(|e| AppError::from_sqlx(e, "Section"))?;

        Ok(Paginated::new(sections, pagination, total))
    }

    #[instrument(skip(db))]
    pub async fn get_by_id(db: &PgPool, id: Uuid) -> Result<Section, AppError> {
        sqlx::query_as::<_, Section>(
            "SELECT id, name, class_id, created_at, updated_at FROM sections WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Section not found")))
    }

    #[instrument(skip(db, dto))]
    pub async fn create(db: &PgPool, dto: CreateSectionDto) -> Result<Section, AppError> {
        sqlx::query_as::<_, Section>(
            r#"
            INSERT INTO sections (name, class_id)
            VALUES ($1, $2)
            RETURNING id, name, class_id, created_at, updated_at
            "#,
        )
        .bind(&dto.name)
        .bind(dto.class_id)
        .fetch_one(db)
        .await
        .map_err(|e| AppError::from_sqlx(e, "Section"))
    }

    #[instrument(skip(db, dto))]
    pub async fn update(db: &PgPool, id: Uuid, dto: UpdateSectionDto) -> Result<Section, AppError> {
        sqlx::query_as::<_, Section>(
            r#"
            UPDATE sections
            SET name = COALESCE($2, name),
                class_id = COALESCE($3, class_id),
                updated_at = NOW()
            WHERE id = $1
            RETURNING id, name, class_id, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(dto.name)
        .bind(dto.class_id)
        .fetch_optional(db)
        .await
        .map_err(|e| AppError::from_sqlx(e, "Section"))?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Section not found")))
    }

    #[instrument(skip(db))]
    pub async fn delete(db: &PgPool, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM sections WHERE id = $1")
            .bind(id)
            .execute(db)
            .await
            .map_err(|e| AppError::from_sqlx(e, "Section"))?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow::anyhow!("Section not found")));
        }

        Ok(())
    }
}
