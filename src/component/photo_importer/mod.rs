//! 記憶卡照片匯入元件
//!
//! 找到記憶卡與備份硬碟，將照片複製到 `<日期>/<記憶卡名稱>` 後刪除原檔

mod file_organizer;
mod main;
mod photo_mover;

pub use file_organizer::{FileOrganizer, OrganizeResult, destination_folder};
pub use main::{ImportOutcome, PhotoImporter};
pub use photo_mover::{MoveFailure, MoveResult, MovedFile, PhotoMover};
