//! Bot state: enabled conversations, stored quotes and pending quotes.
//!
//! Two backends implement [`StateStore`]: [`MemoryStore`] for tests and
//! throwaway deployments, and [`FileStore`] which writes a JSON document
//! synchronously on every change.

mod error;
mod file;
mod memory;
mod store;
mod types;

pub use error::StoreError;
pub use file::{read_quote_file, FileStore};
pub use memory::MemoryStore;
pub use store::StateStore;
pub use types::*;
