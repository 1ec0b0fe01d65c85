use anyhow::Result;
use std::env;
use tokio::net::TcpListener;
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

use hr::routes;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    info!("Starting HR service");

    let app = routes::create_router();

    #[cfg(feature = "devtools")]
    let (app, dev_log) = wire_dev_tooling(app)?;

    let bind_addr = env::var("HR_BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
    let listener = TcpListener::bind(&bind_addr).await?;
    info!("HR service listening on {}", bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    #[cfg(feature = "devtools")]
    if let Some(log) = dev_log {
        if let Err(e) = log.info("dev server stopped") {
            tracing::warn!("Failed to write dev log line: {}", e);
        }
    }

    info!("HR service stopped");

    Ok(())
}

/// Attach the dev log middleware and the `/api` proxy when configured.
#[cfg(feature = "devtools")]
fn wire_dev_tooling(
    app: axum::Router,
) -> Result<(axum::Router, Option<std::sync::Arc<hr::devlog::DevServerLog>>)> {
    use hr::devlog::{self, DevLogConfig, DevServerLog};
    use hr::proxy::{self, DevProxyConfig, ProxyContext};
    use std::sync::Arc;

    let mut app = app;

    let proxy_config = DevProxyConfig::from_env();
    if let Some(origin) = proxy_config.origin {
        info!("Dev proxy forwarding /api to {}", origin);
        let context = Arc::new(ProxyContext::new(origin, proxy_config.max_body_bytes)?);
        app = app.merge(proxy::router(context));
    }

    let log_config = DevLogConfig::from_env();
    let dev_log = if log_config.enabled {
        let log = Arc::new(DevServerLog::open(&log_config)?);
        log.info("dev server started")?;
        info!("Dev log file: {}", log.current_path().display());
        Some(log)
    } else {
        None
    };

    // Layered last so proxied requests show up in the log too.
    if let Some(log) = &dev_log {
        app = app.layer(axum::middleware::from_fn_with_state(
            log.clone(),
            devlog::http_log,
        ));
    }

    Ok((app, dev_log))
}

/// Resolve when Ctrl-C is received.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}
