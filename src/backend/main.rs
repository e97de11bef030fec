/**
 * Document Bridge Server Entry Point
 *
 * Loads configuration, initializes tracing, bootstraps directories and
 * serves the Axum application on all interfaces.
 */

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file if present
    dotenv::dotenv().ok();

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,docbridge=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .init();

    let config = docbridge::backend::server::config::load_config()?;
    let port = config.port;

    let app = docbridge::backend::server::create_app(config).await?;

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("Backend running at http://localhost:{}", port);
    tracing::info!("Open http://localhost:{}/editor.html?file=example.docx", port);

    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(not(feature = "ssr"))]
fn main() {
    eprintln!("Server requires the 'ssr' feature to be enabled.");
    eprintln!("Run with: cargo run --bin docbridge-server --features ssr");
    std::process::exit(1);
}
