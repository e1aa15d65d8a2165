pub mod constants;
pub mod drive_url;
pub mod url_utils;

pub use constants::*;
pub use drive_url::{convert_drive_url_to_direct_link, extract_drive_file_id};
pub use url_utils::{is_valid_url, sheet_edit_url, truncate_detail};
