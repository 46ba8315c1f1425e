//! Signal quote bot - main entry point.

use anyhow::Context;
use hastebot::config::{Config, StoreBackend, StoreConfig};
use hastebot::error::AppResult;
use hastebot::{Bot, Dispatcher};
use quote_store::{read_quote_file, FileStore, MemoryStore, StateStore};
use signal_client::{MessageReceiver, SignalClient};
use std::sync::Arc;
use tokio::signal;
use tokio_stream::StreamExt;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> AppResult<()> {
    // Load configuration
    let config = Config::load().context("Failed to load configuration")?;

    // Initialize logging
    init_logging(&config.bot.log_level);

    info!("Starting hastebot...");

    let store = open_store(&config.store).await?;

    let quotes = store.quotes().await?;
    let pending = store.pending().await?;
    info!(
        "State ready: {} quotes available, {} pending",
        quotes.len(),
        pending.len()
    );

    let signal = SignalClient::new(&config.signal.service_url, &config.signal.phone_number)
        .context("Failed to create Signal client")?;

    if !signal.health_check().await {
        error!("Signal API not reachable at {}", config.signal.service_url);
        return Err(anyhow::anyhow!("Signal API not reachable").into());
    }
    signal.ensure_registered().await?;
    info!("Signal API healthy - self account: {}", signal.phone_number());

    let dispatcher = Dispatcher::new(store);
    info!("Registered {} command handlers", dispatcher.handlers().len());

    let bot = Bot::new(dispatcher, signal.clone(), config.bot.debug);

    info!("Listening for messages...");
    let receiver = MessageReceiver::new(
        signal,
        config.signal.poll_interval,
        config.signal.reconnect_delay,
    );
    let mut stream = Box::pin(receiver.stream());

    // Main message loop: one event at a time
    loop {
        tokio::select! {
            Some(event) = stream.next() => {
                bot.handle(&event).await;
            }
            _ = signal::ctrl_c() => {
                info!("Shutdown signal received");
                break;
            }
        }
    }

    info!("Shutting down...");
    Ok(())
}

async fn open_store(config: &StoreConfig) -> AppResult<Arc<dyn StateStore>> {
    let store: Arc<dyn StateStore> = match config.backend {
        StoreBackend::File => {
            info!("Using state file {:?}", config.path);
            Arc::new(FileStore::open(&config.path).await?)
        }
        StoreBackend::Memory => {
            warn!("Using in-memory state - nothing survives a restart");
            Arc::new(MemoryStore::new())
        }
    };

    if let Some(path) = &config.quotes_path {
        let quotes = read_quote_file(path)
            .await
            .with_context(|| format!("Failed to read quotes from {:?}", path))?;
        let total = quotes.len();
        let added = store.import_quotes(quotes).await?;
        info!("Imported {} of {} quotes from {:?}", added, total, path);
    }

    Ok(store)
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
