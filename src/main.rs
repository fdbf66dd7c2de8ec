use std::net::SocketAddr;

use dotenvy::dotenv;
use tracing::info;

use scholaris::logging::init_tracing;
use scholaris::router::init_router;
use scholaris::scholaris_config::ServerConfig;
use scholaris::scholaris_core::hash_password;
use scholaris::state::init_app_state;

#[tokio::main]
async fn main() {
    dotenv().ok();

    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 && args[1] == "create-admin" {
        handle_create_admin(args).await;
        return;
    }

    init_tracing();

    let state = init_app_state().await;

    sqlx::migrate!()
        .run(&state.db)
        .await
        .expect("Failed to run database migrations");

    let app = init_router(state);

    let addr = ServerConfig::from_env().bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    info!("Server running on http://{}", addr);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .unwrap();
}

/// Seed a super admin account. Assigning `super_admin` through the API
/// requires an existing super admin, so the first one is bootstrapped from
/// the command line.
async fn handle_create_admin(args: Vec<String>) {
    if args.len() != 6 {
        eprintln!(
            "Usage: {} create-admin <first_name> <last_name> <email> <password>",
            args[0]
        );
        std::process::exit(1);
    }

    let first_name = &args[2];
    let last_name = &args[3];
    let email = &args[4];
    let password = &args[5];

    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await
        .expect("Failed to connect to database");

    let password_hash = match hash_password(password) {
        Ok(hash) => hash,
        Err(e) => {
            eprintln!("Error hashing password: {}", e.error);
            std::process::exit(1);
        }
    };

    let result = sqlx::query(
        r#"
        INSERT INTO users (first_name, last_name, email, password, role)
        VALUES ($1, $2, $3, $4, 'super_admin')
        "#,
    )
    .bind(first_name)
    .bind(last_name)
    .bind(email)
    .bind(&password_hash)
    .execute(&pool)
    .await;

    match result {
        Ok(_) => {
            println!("Super admin created successfully");
            println!("  Email: {}", email);
            println!("  Name: {} {}", first_name, last_name);
        }
        Err(e) => {
            eprintln!("Error creating super admin: {}", e);
            std::process::exit(1);
        }
    }
}
