use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use yayasan_web::{
    about::AboutService,
    news::HttpNewsClient,
    routes::create_router,
    state::{AppState, Config},
    toast::ToastQueue,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,yayasan_web=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Arc::new(Config::from_env());

    // Remote news service
    let news_client = HttpNewsClient::new(config.news_api_url.clone(), config.news_api_timeout)?;
    tracing::info!("News service at {}", config.news_api_url);

    let about_service = AboutService::new(config.about.clone(), Arc::new(news_client));

    // One toast queue for the whole app, provided to every handler
    let toasts = ToastQueue::new(config.toast_lifetime);

    let state = AppState {
        config: config.clone(),
        about_service,
    };

    // Create router
    let app = create_router(state, toasts);

    // Start server
    let addr = config.addr();

    tracing::info!("Server starting on http://{}", addr);
    tracing::info!("Swagger UI available at http://{}/swagger-ui", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
