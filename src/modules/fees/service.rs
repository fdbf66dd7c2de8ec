use sqlx::{PgPool, Postgres, QueryBuilder};
use tracing::instrument;
use uuid::Uuid;

use scholaris_core::{AppError, FilterSet, Paginated, PaginationParams};

use super::model::{
    CreateFeeDto, CreateFeeTypeDto, Fee, FeeType, UpdateFeeDto, UpdateFeeTypeDto,
};

pub struct FeeService;

impl FeeService {
    #[instrument(skip(db, filters))]
    pub async fn list(
        db: &PgPool,
        pagination: &PaginationParams,
        filters: &FilterSet,
    ) -> Result<Paginated<Fee>, AppError> {
        let mut count_query: QueryBuilder<'_, Postgres> =
            QueryBuilder::new("SELECT COUNT(*) FROM fees WHERE TRUE");
        filters.push_where(&mut count_query);

        let total: i64 = count_query
            .build_query_scalar()
            .fetch_one(db)
            .await
            .map_err(|e| AppError::from_sqlx(e, "Fee"))?;

        let mut query: QueryBuilder<'_, Postgres> = QueryBuilder::new(
            "SELECT id, student_id, fee_type_id, amount, due_date, paid, created_at, updated_at \
             FROM fees WHERE TRUE",
        );
        filters.push_where(&mut query);
        query.push(" ORDER BY created_at DESC LIMIT ");
        query.push_bind(pagination.limit());
        query.push(" OFFSET ");
        query.push_bind(pagination.offset());

        let fees = query
            .build_query_as::<Fee>()
            .fetch_all(db)
            .await
            .map_err(|e| AppError::from_sqlx(e, "Fee"))?;

        Ok(Paginated::new(fees, pagination, total))
    }

    #[instrument(skip(db))]
    pub async fn get_by_id(db: &PgPool, id: Uuid) -> Result<Fee, AppError> {
        sqlx::query_as::<_, Fee>(
            r#"
            SELECT id, student_id, fee_type_id, amount, due_date, paid, created_at, updated_at
            FROM fees
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Fee not found")))
    }

    #[instrument(skip(db, dto))]
    pub async fn create(db: &PgPool, dto: CreateFeeDto) -> Result<Fee, AppError> {
        sqlx::query_as::<_, Fee>(
            r#"
            INSERT INTO fees (student_id, fee_type_id, amount, due_date, paid)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, student_id, fee_type_id, amount, due_date, paid, created_at, updated_at
            "#,
        )
        .bind(dto.student_id)
        .bind(dto.fee_type_id)
        .bind(dto.amount)
        .bind(dto.due_date)
        .bind(dto.paid)
        .fetch_one(db)
        .await
        .map_err(|e| AppError::from_sqlx(e, "Fee"))
    }

    #[instrument(skip(db, dto))]
    pub async fn update(db: &PgPool, id: Uuid, dto: UpdateFeeDto) -> Result<Fee, AppError> {
        sqlx::query_as::<_, Fee>(
            r#"
            UPDATE fees
            SET student_id = COALESCE($2, student_id),
                fee_type_id = COALESCE($3, fee_type_id),
                amount = COALESCE($4, amount),
                due_date = COALESCE($5, due_date),
                paid = COALESCE($6, paid),
                updated_at = NOW()
            WHERE id = $1
            RETURNING id, student_id, fee_type_id, amount, due_date, paid, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(dto.student_id)
        .bind(dto.fee_type_id)
        .bind(dto.amount)
        .bind(dto.due_date)
        .bind(dto.paid)
        .fetch_optional(db)
        .await
        .map_err(|e| AppError::from_sqlx(e, "Fee"))?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Fee not found")))
    }

    #[instrument(skip(db))]
    pub async fn delete(db: &PgPool, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM fees WHERE id = $1")
            .bind(id)
            .execute(db)
            .await
            .map_err(|e| AppError::from_sqlx(e, "Fee"))?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow::anyhow!("Fee not found")));
        }

        Ok(())
    }
}

pub struct FeeTypeService;

impl FeeTypeService {
    #[instrument(skip(db, filters))]
    pub async fn list(
        db: &PgPool,
        pagination: &PaginationParams,
        filters: &FilterSet,
    ) -> Result<Paginated<FeeType>, AppError> {
        let mut count_query: QueryBuilder<'_, Postgres> =
            QueryBuilder::new("SELECT COUNT(*) FROM fee_types WHERE TRUE");
        filters.push_where(&mut count_query);

        let total: i64 = count_query
            .build_query_scalar()
            .fetch_one(db)
            .await
            .map_err(|e| AppError::from_sqlx(e, "Fee type"))?;

        let mut query: QueryBuilder<'_, Postgres> = QueryBuilder::new(
            "SELECT id, name, description, created_at, updated_at FROM fee_types WHERE TRUE",
        );
        filters.push_where(&mut query);
        query.push(" ORDER BY name ASC LIMIT ");
        query.push_bind(pagination.limit());
        query.push(" OFFSET ");
        query.push_bind(pagination.offset());

        let fee_types = query
            .build_query_as::<FeeType>()
            .fetch_all(db)
            .await
            .map_err(|e| AppError::from_sqlx(e, "Fee type"))?;

        Ok(Paginated::new(fee_types, pagination, total))
    }

    #[instrument(skip(db))]
    pub async fn get_by_id(db: &PgPool, id: Uuid) -> Result<FeeType, AppError> {
        sqlx::query_as::<_, FeeType>(
            "SELECT id, name, description, created_at, updated_at FROM fee_types WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Fee type not found")))
    }

    #[instrument(skip(db, dto))]
    pub async fn create(db: &PgPool, dto: CreateFeeTypeDto) -> Result<FeeType, AppError> {
        sqlx::query_as::<_, FeeType>(
            r#"
            INSERT INTO fee_types (name, description)
            VALUES ($1, $2)
            RETURNING id, name, description, created_at, updated_at
            "#,
        )
        .bind(&dto.name)
        .bind(dto.description)
        .fetch_one(db)
        .await
        .map_err(|e| AppError::from_sqlx(e, "Fee type"))
    }

    #[instrument(skip(db, dto))]
    pub async fn update(db: &PgPool, id: Uuid, dto: UpdateFeeTypeDto) -> Result<FeeType, AppError> {
        sqlx::query_as::<_, FeeType>(
            r#"
            UPDATE fee_types
            SET name = COALESCE($2, name),
                description = COALESCE($3, description),
                updated_at = NOW()
            WHERE id = $1
            RETURNING id, name, description, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(dto.name)
        .bind(dto.description)
        .fetch_optional(db)
        .await
        .map_err(|e| AppError::from_sqlx(e, "Fee type"))?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Fee type not found")))
    }

    #[instrument(skip(db))]
    pub async fn delete(db: &PgPool, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM fee_types WHERE id = $1")
            .bind(id)
            .execute(db)
            .await
            .map_err(|e| AppError::from_sqlx(e, "Fee type"))?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow::anyhow!("Fee type not found")));
        }

        Ok(())
    }
}
