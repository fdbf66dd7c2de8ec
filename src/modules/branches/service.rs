use sqlx::{PgPool, Postgres, QueryBuilder};
use tracing::instrument;
use uuid::Uuid;

use scholaris_core::{AppError, FilterSet, Paginated, PaginationParams};

use super::model::{Branch, CreateBranchDto, UpdateBranchDto};

pub struct BranchService;

impl BranchService {
    #[instrument(skip(db, filters))]
    pub async fn list(
        db: &PgPool,
        pagination: &PaginationParams,
        filters: &FilterSet,
    ) -> Result<Paginated<Branch>, AppError> {
        let mut count_query: QueryBuilder<'_, Postgres> =
            QueryBuilder::new("SELECT COUNT(*) FROM branches WHERE TRUE");
        filters.push_where(&mut count_query);

        let total: i64 = count_query
            .build_query_scalar()
            .fetch_one(db)
            .await
            .map_err(|e| AppError::from_sqlx(e, "Branch"))?;

        let mut query: QueryBuilder<'_, Postgres> = QueryBuilder::new(
            "SELECT id, name, address, phone, created_at, updated_at FROM branches WHERE TRUE",
        );
        filters.push_where(&mut query);
        query.push(" ORDER BY created_at DESC LIMIT ");
        query.push_bind(pagination.limit());
        query.push(" OFFSET ");
        query.push_bind(pagination.offset());

        let branches = query
            .build_query_as::<Branch>()
            .fetch_all(db)
            .await
            .map_err(|e| AppError::from_sqlx(e, "Branch"))?;

        Ok(Paginated::new(branches, pagination, total))
    }

    #[instrument(skip(db))]
    pub async fn get_by_id(db: &PgPool, id: Uuid) -> Result<Branch, AppError> {
        sqlx::query_as::<_, Branch>(
            "SELECT id, name, address, phone, created_at, updated_at FROM branches WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Branch not found")))
    }

    #[instrument(skip(db, dto))]
    pub async fn create(db: &PgPool, dto: CreateBranchDto) -> Result<Branch, AppError> {
        sqlx::query_as::<_, Branch>(
            r#"
            INSERT INTO branches (name, address, phone)
            VALUES ($1, $2, $3)
            RETURNING id, name, address, phone, created_at, updated_at
            "#,
        )
        .bind(&dto.name)
        .bind(dto.address)
        .bind(dto.phone)
        .fetch_one(db)
        .await
        .map_err(|e| AppError::from_sqlx(e, "Branch"))
    }

    #[instrument(skip(db, dto))]
    pub async fn update(db: &PgPool, id: Uuid, dto: UpdateBranchDto) -> Result<Branch, AppError> {
        sqlx::query_as::<_, Branch>(
            r#"
            UPDATE branches
            SET name = COALESCE($2, name),
                address = COALESCE($3, address),
                phone = COALESCE($4, phone),
                updated_at = NOW()
            WHERE id = $1
            RETURNING id, name, address, phone, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(dto.name)
        .bind(dto.address)
        .bind(dto.phone)
        .fetch_optional(db)
        .await
        .map_err(|e| AppError::from_sqlx(e, "Branch"))?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Branch not found")))
    }

    #[instrument(skip(db))]
    pub async fn delete(db: &PgPool, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM branches WHERE id = $1")
            .bind(id)
            .execute(db)
            .await
            .map_err(|e| AppError::from_sqlx(e, "Branch"))?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow::anyhow!("Branch not found")));
        }

        Ok(())
    }
}
