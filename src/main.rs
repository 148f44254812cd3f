use color_eyre::eyre::Result;
use dotenv::dotenv;
use std::sync::Arc;

use slotbook_api::config::ApiConfig;
use slotbook_store::memory::MemorySlotStore;
use slotbook_store::remote::RemoteSlotStore;
use slotbook_store::repository::SlotRepository;
use slotbook_store::session::Agenda;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Load environment variables
    dotenv().ok();

    // Load configuration
    let config = ApiConfig::from_env()?;

    // Connect to the remote slot store, or run in-memory in dev mode
    let store: Arc<dyn SlotRepository> = match &config.store_url {
        Some(url) => Arc::new(RemoteSlotStore::new(url.clone())),
        None => Arc::new(MemorySlotStore::new()),
    };

    // Initial reconcile; an unreachable store degrades to an empty view
    let mut agenda = Agenda::new(store);
    if let Err(err) = agenda.refresh().await {
        eprintln!("Initial fetch failed, starting with an empty view: {err}");
    }

    // Start API server
    slotbook_api::start_server(config, agenda).await?;

    Ok(())
}
