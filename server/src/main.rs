use std::net::SocketAddr;

use http_example::{telemetry, Config};
use http_example_core::TriggerBinding;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    telemetry::init()?;

    let config = Config::from_env()?;
    let addr = SocketAddr::from(([127, 0, 0, 1], config.port));
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(
        %addr,
        path = %TriggerBinding::http_example().path(&config.route_prefix),
        "listening"
    );

    http_example::serve_until(
        listener,
        http_example::app(&config),
        http_example::shutdown_signal(),
    )
    .await?;
    tracing::info!("shut down");
    Ok(())
}
