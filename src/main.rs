use anyhow::Result;
use meeting_relay::{create_router, AppState, Config, OpenAiClient};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cfg = Config::load("config/meeting-relay")?;

    let openai = OpenAiClient::new(&cfg.openai);
    let app = create_router(AppState::new(openai));

    let addr = format!("{}:{}", cfg.http.bind, cfg.http.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("Meeting relay listening on {}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
