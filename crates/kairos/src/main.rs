//! The `kairosd` binary.

use tracing_subscriber::EnvFilter;

use kairos_server::{Server, ServerConfig, DEFAULT_HTTP_ADDR};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let addr =
        std::env::var("KAIROS_HTTP_ADDR").unwrap_or_else(|_| DEFAULT_HTTP_ADDR.to_string());
    let config = ServerConfig::builder().http_addr(addr).build();

    let dispatcher = kairos::app::build_dispatcher()?;
    let server = Server::new(config, dispatcher);
    server.run().await?;
    Ok(())
}
