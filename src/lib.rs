pub mod cli;
pub mod config;
pub mod history;
pub mod sheets;
pub mod translate;
pub mod utils;

pub use config::LookupConfig;
pub use history::{HistoryError, HistoryStore, RecentQuestion, format_relative};
pub use sheets::{
    LookupError, LookupOutcome, LookupResult, RetryConfig, SheetRow, SheetsClient, VideoEntry,
};
pub use translate::{Translation, Translator};
pub use utils::convert_drive_url_to_direct_link;
