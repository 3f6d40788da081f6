mod path_validator;
mod photo_scanner;
mod volume_locator;

pub use path_validator::{ensure_directory_exists, validate_photo_folder};
pub use photo_scanner::{PhotoFile, scan_photo_files};
pub use volume_locator::{find_destination_volume, find_source_volume};
