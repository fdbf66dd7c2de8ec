use sqlx::PgPool;
use tracing::{instrument, warn};
use uuid::Uuid;

use scholaris_auth::{create_access_token, create_refresh_token, verify_refresh_token};
use scholaris_config::JwtConfig;
use scholaris_core::{AppError, verify_password};
use scholaris_models::users::UserWithPassword;

use super::model::{LoginRequest, LoginResponse, RefreshRequest, RefreshResponse, User};

pub struct AuthService;

impl AuthService {
    /// Both an unknown email and a wrong password produce the same 401 so
    /// login responses do not reveal which accounts exist.
    #[instrument(skip(db, jwt_config, dto))]
    pub async fn login(
        db: &PgPool,
        jwt_config: &JwtConfig,
        dto: LoginRequest,
    ) -> Result<LoginResponse, AppError> {
        let account = sqlx::query_as::<_, UserWithPassword>(
            r#"
            SELECT id, first_name, last_name, email, password, role, branch_id
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(&dto.email)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::unauthorized("Invalid email or password".to_string()))?;

        if !verify_password(&dto.password, &account.password)? {
            warn!(email = %dto.email, "Failed login attempt");
            return Err(AppError::unauthorized(
                "Invalid email or password".to_string(),
            ));
        }

        let access_token =
            create_access_token(account.id, &account.email, &account.role, jwt_config)?;
        let refresh_token = create_refresh_token(account.id, &account.email, jwt_config)?;

        let user = Self::load_user(db, account.id).await?;

        Ok(LoginResponse {
            access_token,
            refresh_token,
            user,
        })
    }

    #[instrument(skip(db, jwt_config, dto))]
    pub async fn refresh(
        db: &PgPool,
        jwt_config: &JwtConfig,
        dto: RefreshRequest,
    ) -> Result<RefreshResponse, AppError> {
        let claims = verify_refresh_token(&dto.refresh_token, jwt_config)?;

        let user_id = Uuid::parse_str(&claims.sub)
            .map_err(|_| AppError::unauthorized("Invalid refresh token".to_string()))?;

        // Reload the user so a deleted account or changed role cannot mint
        // fresh access tokens from an old refresh token.
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, first_name, last_name, email, role, branch_id, created_at, updated_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::unauthorized("User no longer exists".to_string()))?;

        let access_token = create_access_token(user.id, &user.email, &user.role, jwt_config)?;

        Ok(RefreshResponse { access_token })
    }

    #[instrument(skip(db))]
    pub async fn load_user(db: &PgPool, id: Uuid) -> Result<User, AppError> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, first_name, last_name, email, role, branch_id, created_at, updated_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("User not found")))
    }
}
