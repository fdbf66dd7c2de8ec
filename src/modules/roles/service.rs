use sqlx::{PgPool, Postgres, QueryBuilder};
use tracing::instrument;
use uuid::Uuid;

use scholaris_core::{AppError, FilterSet, Paginated, PaginationParams};

use super::model::{
    CreateRoleDto, CreateRoleGroupDto, Role, RoleGroup, UpdateRoleDto, UpdateRoleGroupDto,
    generate_slug,
};

pub struct RoleService;

impl RoleService {
    #[instrument(skip(db, filters))]
    pub async fn list(
        db: &PgPool,
        pagination: &PaginationParams,
        filters: &FilterSet,
    ) -> Result<Paginated<Role>, AppError> {
        let mut count_query: QueryBuilder<'_, Postgres> =
            QueryBuilder::new("SELECT COUNT(*) FROM roles WHERE TRUE");
        filters.push_where(&mut count_query);

        let total: i64 = count_query
            .build_query_scalar()
            .fetch_one(db)
            .await
            .map_err(|e| AppError::from_sqlx(e, "Role"))?;

        let mut query: QueryBuilder<'_, Postgres> = QueryBuilder::new(
            "SELECT id, name, slug, role_group_id, description, created_at, updated_at \
             FROM roles WHERE TRUE",
        );
        filters.push_where(&mut query);
        query.push(" ORDER BY name ASC LIMIT ");
        query.push_bind(pagination.limit());
        query.push(" OFFSET ");
        query.push_bind(pagination.offset());

        let roles = query
            .build_query_as::<Role>()
            .fetch_all(db)
            .await
            .map_err(|e| AppError::from_sqlx(e, "Role"))?;

        Ok(Paginated::new(roles, pagination, total))
    }

    #[instrument(skip(db))]
    pub async fn get_by_id(db: &PgPool, id: Uuid) -> Result<Role, AppError> {
        sqlx::query_as::<_, Role>(
            r#"
            SELECT id, name, slug, role_group_id, description, created_at, updated_at
            FROM roles
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Role not found")))
    }

    /// The slug is derived from the name, never supplied by the client.
    #[instrument(skip(db, dto))]
    pub async fn create(db: &PgPool, dto: CreateRoleDto) -> Result<Role, AppError> {
        let slug = generate_slug(&dto.name);

        sqlx::query_as::<_, Role>(
            r#"
            INSERT INTO roles (name, slug, role_group_id, description)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, slug, role_group_id, description, created_at, updated_at
            "#,
        )
        .bind(&dto.name)
        .bind(&slug)
        .bind(dto.role_group_id)
        .bind(dto.description)
        .fetch_one(db)
        .await
        .map_err(|e| AppError::from_sqlx(e, "Role"))
    }

    /// Renaming a role regenerates its slug to stay in sync with the name.
    #[instrument(skip(db, dto))]
    pub async fn update(db: &PgPool, id: Uuid, dto: UpdateRoleDto) -> Result<Role, AppError> {
        let slug = dto.name.as_deref().map(generate_slug);

        sqlx::query_as::<_, Role>(
            r#"
            UPDATE roles
            SET name = COALESCE($2, name),
                slug = COALESCE($3, slug),
                role_group_id = COALESCE($4, role_group_id),
                description = COALESCE($5, description),
                updated_at = NOW()
            WHERE id = $1
            RETURNING id, name, slug, role_group_id, description, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(dto.name)
        .bind(slug)
        .bind(dto.role_group_id)
        .bind(dto.description)
        .fetch_optional(db)
        .await
        .map_err(|e| AppError::from_sqlx(e, "Role"))?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Role not found")))
    }

    #[instrument(skip(db))]
    pub async fn delete(db: &PgPool, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM roles WHERE id = $1")
            .bind(id)
            .execute(db)
            .await
            .map_err(|e| AppError::from_sqlx(e, "Role"))?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow::anyhow!("Role not found")));
        }

        Ok(())
    }
}

pub struct RoleGroupService;

impl RoleGroupService {
    #[instrument(skip(db, filters))]
    pub async fn list(
        db: &PgPool,
        pagination: &PaginationParams,
        filters: &FilterSet,
    ) -> Result<Paginated<RoleGroup>, AppError> {
        let mut count_query: QueryBuilder<'_, Postgres> =
            QueryBuilder::new("SELECT COUNT(*) FROM role_groups WHERE TRUE");
        filters.push_where(&mut count_query);

        let total: i64 = count_query
            .build_query_scalar()
            .fetch_one(db)
            .await
            .map_err(|e| AppError::from_sqlx(e, "Role group"))?;

        let mut query: QueryBuilder<'_, Postgres> = QueryBuilder::new(
            "SELECT id, name, description, created_at, updated_at FROM role_groups WHERE TRUE",
        );
        filters.push_where(&mut query);
        query.push(" ORDER BY name ASC LIMIT ");
        query.push_bind(pagination.limit());
        query.push(" OFFSET ");
        query.push_bind(pagination.offset());

        let role_groups = query
            .build_query_as::<RoleGroup>()
            .fetch_all(db)
            .await
            .map_err(|e| AppError::from_sqlx(e, "Role group"))?;

        Ok(Paginated::new(role_groups, pagination, total))
    }

    #[instrument(skip(db))]
    pub async fn get_by_id(db: &PgPool, id: Uuid) -> Result<RoleGroup, AppError> {
        sqlx::query_as::<_, RoleGroup>(
            "SELECT id, name, description, created_at, updated_at FROM role_groups WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Role group not found")))
    }

    #[instrument(skip(db, dto))]
    pub async fn create(db: &PgPool, dto: CreateRoleGroupDto) -> Result<RoleGroup, AppError> {
        sqlx::query_as::<_, RoleGroup>(
            r#"
            INSERT INTO role_groups (name, description)
            VALUES ($1, $2)
            RETURNING id, name, description, created_at, updated_at
            "#,
        )
        .bind(&dto.name)
        .bind(dto.description)
        .fetch_one(db)
        .await
        .map_err(|e| AppError::from_sqlx(e, "Role group"))
    }

    #[instrument(skip(db, dto))]
    pub async fn update(
        db: &PgPool,
        id: Uuid,
        dto: UpdateRoleGroupDto,
    ) -> Result<RoleGroup, AppError> {
        sqlx::query_as::<_, RoleGroup>(
            r#"
            UPDATE role_groups
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
        .map_err(|e| AppError::from_sqlx(e, "Role group"))?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Role group not found")))
    }

    #[instrument(skip(db))]
    pub async fn delete(db: &PgPool, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM role_groups WHERE id = $1")
            .bind(id)
            .execute(db)
            .await
            .map_err(|e| AppError::from_sqlx(e, "Role group"))?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow::anyhow!("Role group not found")));
        }

        Ok(())
    }
}
