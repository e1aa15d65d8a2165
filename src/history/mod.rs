//! Recent-question history persisted on the local device
//!
//! - `types`: the persisted record and error type
//! - `store`: bounded, deduplicated, atomically written JSON list
//! - `format`: relative timestamps for listings

mod format;
mod store;
mod types;

pub use format::format_relative;
pub use store::HistoryStore;
pub use types::{HistoryError, HistoryResult, RecentQuestion};
