use tokio::net::TcpListener;
use trivia_api::configuration::get_configuration;
use trivia_api::db::{establish_connection, run_migrations};
use trivia_api::server::app::run_server;
use trivia_api::telemetry::init_tracing;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    init_tracing();
    let settings = get_configuration().expect("Failed to read configuration");

    let pool = establish_connection(&settings.database.path).await?;
    tracing::info!("Running db migrations...");
    run_migrations(&pool).await?;

    let listener = TcpListener::bind(settings.application.address()).await?;
    run_server(listener, pool).await?;
    Ok(())
}
