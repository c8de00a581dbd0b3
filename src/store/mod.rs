pub mod memory;
pub mod sqlite;

use crate::app::Result;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

/// Device-local string storage addressed by namespaced keys.
///
/// Values are opaque text; serialization lives one layer up in
/// [`ExpiringStore`](crate::cache::ExpiringStore).
pub trait Store: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
    /// Removing an absent key is not an error.
    fn remove(&self, key: &str) -> Result<()>;
}
