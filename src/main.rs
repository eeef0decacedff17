use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tutorbase::config::server::ServerConfig;
use tutorbase::router::init_router;
use tutorbase::state::init_app_state;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                // axum logs rejections from built-in extractors with the `axum::rejection`
                // target, at `TRACE` level. `axum::rejection=trace` enables showing those events
                format!(
                    "{}=debug,tower_http=debug,axum::rejection=trace",
                    env!("CARGO_CRATE_NAME")
                )
                .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let state = init_app_state().await;

    // Destination directories for uploads are created once here, not as a
    // side effect of the first upload.
    if let Err(e) = state.storage.init_dirs().await {
        tracing::error!(error = %e, "Failed to create upload directories");
        std::process::exit(1);
    }

    let server_config = ServerConfig::from_env();
    let app = init_router(state);

    let addr = format!("0.0.0.0:{}", server_config.port);
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(error = %e, addr = %addr, "Failed to bind listener");
            std::process::exit(1);
        }
    };

    println!("🚀 Server running on http://localhost:{}", server_config.port);
    println!(
        "📚 Swagger UI available at http://localhost:{}/swagger-ui",
        server_config.port
    );
    println!(
        "📖 Scalar UI available at http://localhost:{}/scalar",
        server_config.port
    );

    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!(error = %e, "Server error");
        std::process::exit(1);
    }
}
