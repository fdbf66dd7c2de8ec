use sqlx::{PgPool, Postgres, QueryBuilder};
use tracing::instrument;
use uuid::Uuid;

use scholaris_core::{AppError, FilterSet, Paginated, PaginationParams};

use super::model::{CreateStudentDto, Student, UpdateStudentDto};

pub struct StudentService;

impl StudentService {
    #[instrument(skip(db, filters))]
    pub async fn list(
        db: &PgPool,
        pagination: &PaginationParams,
        filters: &FilterSet,
    ) -> Result<Paginated<Student>, AppError> {
        let mut count_query: QueryBuilder<'_, Postgres> =
            QueryBuilder::new("SELECT COUNT(*) FROM students WHERE TRUE");
        filters.push_where(&mut count_query);

        let total: i64 = count_query
            .build_query_scalar()
            .fetch_one(db)
            .await
            .map_err(|e| AppError::from_sqlx(e, "Student"))?;

        let mut query: QueryBuilder<'_, Postgres> = QueryBuilder::new(
            "SELECT id, first_name, last_name, email, date_of_birth, branch_id, class_id, \
             section_id, created_at, updated_at FROM students WHERE TRUE",
        );
        filters.push_where(&mut query);
        query.push(" ORDER BY created_at DESC LIMIT ");
        query.push_bind(pagination.limit());
        query.push(" OFFSET ");
        query.push_bind(pagination.offset());

        let students = query
            .build_query_as::<Student>()
            .fetch_all(db)
            .await
            .map_err(|e| AppError::from_sqlx(e, "Student"))?;

        Ok(Paginated::new(students, pagination, total))
    }

    #[instrument(skip(db))]
    pub async fn get_by_id(db: &PgPool, id: Uuid) -> Result<Student, AppError> {
        sqlx::query_as::<_, Student>(
            r#"
            SELECT id, first_name, last_name, email, date_of_birth, branch_id, class_id,
                   section_id, created_at, updated_at
            FROM students
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Student not found")))
    }

    #[instrument(skip(db, dto))]
    pub async fn create(db: &PgPool, dto: CreateStudentDto) -> Result<Student, AppError> {
        sqlx::query_as::<_, Student>(
            r#"
            INSERT INTO students (first_name, last_name, email, date_of_birth, branch_id,
                                  class_id, section_id)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, first_name, last_name, email, date_of_birth, branch_id, class_id,
                      section_id, created_at, updated_at
            "#,
        )
        .bind(&dto.first_name)
        .bind(&dto.last_name)
        .bind(&dto.email)
        .bind(dto.date_of_birth)
        .bind(dto.branch_id)
        .bind(dto.class_id)
        .bind(dto.section_id)
        .fetch_one(db)
        .await
        .map_err(|e| AppError::from_sqlx(e, "Student"))
    }

    #[instrument(skip(db, dto))]
    pub async fn update(db: &PgPool, id: Uuid, dto: UpdateStudentDto) -> Result<Student, AppError> {
        sqlx::query_as::<_, Student>(
            r#"
            UPDATE students
            SET first_name = COALESCE($2, first_name),
                last_name = COALESCE($3, last_name),
                email = COALESCE($4, email),
                date_of_birth = COALESCE($5, date_of_birth),
                branch_id = COALESCE($6, branch_id),
                class_id = COALESCE($7, class_id),
                section_id = COALESCE($8, section_id),
                updated_at = NOW()
            WHERE id = $1
            RETURNING id, first_name, last_name, email, date_of_birth, branch_id, class_id,
                      section_id, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(dto.first_name)
        .bind(dto.last_name)
        .bind(dto.email)
        .bind(dto.date_of_birth)
        .bind(dto.branch_id)
        .bind(dto.class_id)
        .bind(dto.section_id)
        .fetch_optional(db)
        .await
        .map_err(|e| AppError::from_sqlx(e, "Student"))?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Student not found")))
    }

    #[instrument(skip(db))]
    pub async fn delete(db: &PgPool, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM students WHERE id = $1")
            .bind(id)
            .execute(db)
            .await
            .map_err(|e| AppError::from_sqlx(e, "Student"))?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow::anyhow!("Student not found")));
        }

        Ok(())
    }
}
