use anyhow::Context;
use notes_api::{AppState, app::router::build_router, config::Config, storage::Storage};
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "notes_api=debug,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env().context("invalid configuration")?;

    let storage = match &config.database_url {
        Some(database_url) => {
            let db = PgPoolOptions::new()
                .max_connections(config.database_max_connections)
                .connect(database_url)
                .await
                .context("failed to connect to Postgres")?;
            sqlx::migrate!("./migrations")
                .run(&db)
                .await
                .context("failed to run database migrations")?;
            tracing::info!("connected to Postgres, migrations applied");
            Storage::postgres(db)
        }
        None => {
            tracing::warn!("DATABASE_URL not set, notes are kept in memory only");
            Storage::in_memory()
        }
    };

    if !config.require_auth {
        tracing::warn!("REQUIRE_AUTH is off, every note is public");
    }

    let state = AppState::new(
        storage,
        &config.jwt_secret,
        config.token_ttl,
        config.require_auth,
    );
    let app = build_router(state);

    let addr = config.addr();
    tracing::info!("listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}
