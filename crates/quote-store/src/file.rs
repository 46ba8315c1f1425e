//! JSON file backed state store.

use crate::error::StoreError;
use crate::store::StateStore;
use crate::types::{QuoteFile, StateData};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::sync::RwLock;
use tracing::{debug, info, instrument};

/// State store that writes the whole document to disk on every change.
///
/// A change is committed in memory only after the file write succeeded.
pub struct FileStore {
    data: RwLock<StateData>,
    storage_path: PathBuf,
}

impl FileStore {
    /// Open the store, loading existing state if the file exists.
    pub async fn open(storage_path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let storage_path = storage_path.into();
        let data = load(&storage_path).await?;

        Ok(Self {
            data: RwLock::new(data),
            storage_path,
        })
    }

    pub fn path(&self) -> &Path {
        &self.storage_path
    }

    /// Apply `f` to a copy of the state, persist it if anything changed,
    /// then commit it.
    async fn mutate<T, F>(&self, f: F) -> Result<T, StoreError>
    where
        F: FnOnce(&mut StateData) -> T + Send,
        T: Send,
    {
        let mut data = self.data.write().await;
        let mut next = data.clone();
        let result = f(&mut next);

        if next != *data {
            save(&self.storage_path, &next).await?;
            *data = next;
        }

        Ok(result)
    }
}

async fn load(path: &Path) -> Result<StateData, StoreError> {
    if !fs::try_exists(path).await? {
        info!("State file not found at {:?}, starting fresh", path);
        return Ok(StateData::default());
    }

    let bytes = fs::read(path).await?;
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(StateData::default());
    }

    let data: StateData = serde_json::from_slice(&bytes)?;
    info!(
        "Loaded state: {} conversations, {} quotes, {} pending",
        data.bot_conversations.len(),
        data.quotes_stored.len(),
        data.quotes_pending.len()
    );
    Ok(data)
}

async fn save(path: &Path, data: &StateData) -> Result<(), StoreError> {
    let json = serde_json::to_vec_pretty(data)?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).await?;
        }
    }

    // Write atomically using temp file + rename
    let temp_path = path.with_extension("json.tmp");
    fs::write(&temp_path, &json).await?;
    fs::rename(&temp_path, path).await?;

    debug!("Saved state to {:?} ({} bytes)", path, json.len());
    Ok(())
}

/// Read a seed quotes file (`{ "quotes": [...] }`).
pub async fn read_quote_file(path: impl AsRef<Path>) -> Result<Vec<String>, StoreError> {
    let bytes = fs::read(path.as_ref()).await?;
    let file: QuoteFile = serde_json::from_slice(&bytes)?;
    Ok(file.quotes)
}

#[async_trait]
impl StateStore for FileStore {
    async fn is_enabled(&self, conversation_id: &str) -> Result<bool, StoreError> {
        Ok(self.data.read().await.is_enabled(conversation_id))
    }

    #[instrument(skip(self))]
    async fn enable(&self, conversation_id: &str) -> Result<bool, StoreError> {
        self.mutate(|data| data.enable(conversation_id)).await
    }

    #[instrument(skip(self))]
    async fn disable(&self, conversation_id: &str) -> Result<bool, StoreError> {
        self.mutate(|data| data.disable(conversation_id)).await
    }

    async fn quotes(&self) -> Result<Vec<String>, StoreError> {
        Ok(self.data.read().await.quotes_stored.clone())
    }

    async fn pending(&self) -> Result<Vec<String>, StoreError> {
        Ok(self.data.read().await.quotes_pending.clone())
    }

    #[instrument(skip(self, text))]
    async fn add_pending(&self, text: &str) -> Result<bool, StoreError> {
        self.mutate(|data| data.add_pending(text)).await
    }

    #[instrument(skip(self, quotes), fields(count = quotes.len()))]
    async fn import_quotes(&self, quotes: Vec<String>) -> Result<usize, StoreError> {
        self.mutate(|data| data.import_quotes(quotes)).await
    }
}
