use sqlx::{PgPool, Postgres, QueryBuilder};
use tracing::instrument;
use uuid::Uuid;

use scholaris_core::{AppError, FilterSet, Paginated, PaginationParams};

use super::model::{Class, CreateClassDto, UpdateClassDto};

pub struct ClassService;

impl ClassService {
    #[instrument(skip(db, filters))]
    pub async fn list(
        db: &PgPool,
        pagination: &PaginationParams,
        filters: &FilterSet,
    ) -> Result<Paginated<Class>, AppError> {
        let mut count_query: QueryBuilder<'_, Postgres> =
            QueryBuilder::new("SELECT COUNT(*) FROM classes WHERE TRUE");
        filters.push_where(&mut count_query);

        let total: i64 = count_query
            .build_query_scalar()
            .fetch_one(db)
            .await
            .map_err(|e| AppError::from_sqlx(e, "Class"))?;

        let mut query: QueryBuilder<'_, Postgres> = QueryBuilder::new(
            "SELECT id, name, branch_id, created_at, updated_at FROM classes WHERE TRUE",
        );
        filters.push_where(&mut query);
        query.push(" ORDER BY created_at DESC LIMIT ");
        query.push_bind(pagination.limit());
        query.push(" OFFSET ");
        query.push_bind(pagination.offset());

        let classes = query
            .build_query_as::<Class>()
            .fetch_all(db)
            .await
            .map_err(|e| AppError::from_sqlx(e, "Class"))?;

        Ok(Paginated::new(classes, pagination, total))
    }

    #[instrument(skip(db))]
    pub async fn get_by_id(db: &PgPool, id: Uuid) -> Result<Class, AppError> {
        sqlx::query_as::<_, Class>(
            "SELECT id, name, branch_id, created_at, updated_at FROM classes WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Class not found")))
    }

    #[instrument(skip(db, dto))]
    pub async fn create(db: &PgPool, dto: CreateClassDto) -> Result<Class, AppError> {
        sqlx::query_as::<_, Class>(
            r#"
            INSERT INTO classes (name, branch_id)
            VALUES ($1, $2)
            RETURNING id, name, branch_id, created_at, updated_at
            "#,
        )
        .bind(&dto.name)
        .bind(dto.branch_id)
        .fetch_one(db)
        .await
        .map_err(|e| AppError::from_sqlx(e, "Class"))
    }

    #[instrument(skip(db, dto))]
    pub async fn update(db: &PgPool, id: Uuid, dto: UpdateClassDto) -> Result<Class, AppError> {
        sqlx::query_as::<_, Class>(
            r#"
            UPDATE classes
            SET name = COALESCE($2, name),
                branch_id = COALESCE($3, branch_id),
                updated_at = NOW()
            WHERE id = $1
            RETURNING id, name, branch_id, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(dto.name)
        .bind(dto.branch_id)
        .fetch_optional(db)
        .await
        .map_err(|e| AppError::from_sqlx(e, "Class"))?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Class not found")))
    }

    #[instrument(skip(db))]
    pub async fn delete(db: &PgPool, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM classes WHERE id = $1")
            .bind(id)
            .execute(db)
            .await
            .map_err(|e| AppError::from_sqlx(e, "Class"))?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow::anyhow!("Class not found")));
        }

        Ok(())
    }
}
