use std::sync::Arc;

use anyhow::Context;
use todo_core::{Config, ResourceClient, Session};
use todo_app::{render_loop, Command, Dispatcher, UreqTransport};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("todo_app=info,todo_core=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env().context("invalid configuration")?;
    tracing::info!(base_url = %config.base_url, user_id = config.user_id, "starting");

    let session = Session::new(ResourceClient::new(&config, UreqTransport::new()));
    let renderer = tokio::spawn(render_loop(session.subscribe()));
    let mut dispatcher = Dispatcher::new(Arc::new(session));
    dispatcher.load();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("reading stdin")? {
        if line.trim().is_empty() {
            continue;
        }
        match line.parse::<Command>() {
            Ok(command) => {
                if dispatcher.dispatch(command).is_break() {
                    break;
                }
            }
            Err(e) => eprintln!("{e}"),
        }
    }

    // The renderer stops once the last session handle is gone.
    dispatcher.finish().await;
    renderer.await.context("render task")?;
    Ok(())
}
