//! 整合測試 - 以暫存資料夾模擬 `/Volumes` 掛載點驗證整個匯入流程

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::AtomicBool;

use auto_photo_import::component::photo_importer::{FileOrganizer, PhotoMover, destination_folder};
use auto_photo_import::config::{Config, FailurePolicy, ImportProfile};
use auto_photo_import::tools::{find_destination_volume, find_source_volume};
use chrono::NaiveDate;
use tempfile::TempDir;

/// 建立 `<root>/RAWPHOTOS_A/DCIM/102_FUJI` 與 `<root>/PHOTODRIVE`
fn create_mount_root() -> (TempDir, PathBuf, PathBuf) {
    let mount_root = TempDir::new().unwrap();
    let card = mount_root.path().join("RAWPHOTOS_A");
    let drive = mount_root.path().join("PHOTODRIVE");
    fs::create_dir_all(card.join("DCIM").join("102_FUJI")).unwrap();
    fs::create_dir(&drive).unwrap();
    (mount_root, card, drive)
}

fn test_profile(mount_root: &Path) -> ImportProfile {
    let mut profile = Config::new().unwrap().import_profile;
    profile.mount_root = mount_root.to_path_buf();
    profile
}

fn create_organizer(profile: &ImportProfile) -> FileOrganizer {
    let mover = PhotoMover::new(profile, Arc::new(AtomicBool::new(false)));
    FileOrganizer::new(profile.clone(), mover)
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// 測試 1: 所有符合副檔名（任意大小寫）的檔案都被搬到目標並從來源刪除
#[test]
fn test_all_matching_files_are_moved() {
    let (mount_root, card, drive) = create_mount_root();
    let profile = test_profile(mount_root.path());
    let photo_folder = profile.photo_folder(&card);

    let names = ["DSCF0001.JPG", "DSCF0001.RAF", "DSCF0002.jpg", "clip.Mov", "x.raf"];
    for name in names {
        fs::write(photo_folder.join(name), format!("content of {name}")).unwrap();
    }

    let source = find_source_volume(&profile.mount_root, &profile.source_markers).unwrap();
    let destination =
        find_destination_volume(&profile.mount_root, &profile.destination_volume).unwrap();
    let result = create_organizer(&profile)
        .organize_photos_on(&source, &destination, date(2024, 3, 5))
        .unwrap();

    assert_eq!(result.move_result.files_moved(), names.len());
    let dated = drive.join("2024-03-05").join("RAWPHOTOS_A");
    for name in names {
        assert_eq!(
            fs::read_to_string(dated.join(name)).unwrap(),
            format!("content of {name}")
        );
        assert!(!photo_folder.join(name).exists());
    }
}

/// 測試 2: 其他副檔名的檔案留在原處，也不會出現在目標
#[test]
fn test_other_files_stay_on_card() {
    let (mount_root, card, drive) = create_mount_root();
    let profile = test_profile(mount_root.path());
    let photo_folder = profile.photo_folder(&card);

    fs::write(photo_folder.join("DSCF0001.JPG"), "jpeg").unwrap();
    fs::write(photo_folder.join("DSCF0001.xmp"), "sidecar").unwrap();
    fs::write(photo_folder.join("README.txt"), "notes").unwrap();

    let result = create_organizer(&profile)
        .organize_photos_on(&card, &drive, date(2024, 3, 5))
        .unwrap();

    assert_eq!(result.move_result.files_moved(), 1);
    assert_eq!(fs::read_dir(&photo_folder).unwrap().count(), 2);
    for name in ["DSCF0001.xmp", "README.txt"] {
        assert!(photo_folder.join(name).exists());
        assert!(!result.destination_folder.join(name).exists());
    }
}

/// 測試 3: 目標資料夾路徑格式
#[test]
fn test_destination_folder_example() {
    let folder = destination_folder(
        Path::new("/Volumes/PHOTODRIVE"),
        Path::new("/Volumes/RAWPHOTOS_A"),
        date(2024, 3, 5),
    )
    .unwrap();

    assert_eq!(folder, Path::new("/Volumes/PHOTODRIVE/2024-03-05/RAWPHOTOS_A"));
}

/// 測試 4: 已清空的記憶卡再整理一次不做任何事
#[test]
fn test_second_run_on_empty_card_is_noop() {
    let (mount_root, card, drive) = create_mount_root();
    let profile = test_profile(mount_root.path());
    fs::write(profile.photo_folder(&card).join("DSCF0001.JPG"), "jpeg").unwrap();

    let organizer = create_organizer(&profile);
    let first = organizer
        .organize_photos_on(&card, &drive, date(2024, 3, 5))
        .unwrap();
    let second = organizer
        .organize_photos_on(&card, &drive, date(2024, 3, 5))
        .unwrap();

    assert_eq!(first.move_result.files_moved(), 1);
    assert_eq!(second.move_result.files_moved(), 0);
    assert_eq!(second.move_result.errors(), 0);
    assert!(first.destination_folder.join("DSCF0001.JPG").exists());
}

/// 測試 5: 掛載點不存在時兩個搜尋都找不到，且不建立任何資料夾
#[test]
fn test_missing_mount_root() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("Volumes");
    let profile = test_profile(&missing);

    assert_eq!(
        find_source_volume(&profile.mount_root, &profile.source_markers),
        None
    );
    assert_eq!(
        find_destination_volume(&profile.mount_root, &profile.destination_volume),
        None
    );
    assert!(!missing.exists());
    assert_eq!(fs::read_dir(temp_dir.path()).unwrap().count(), 0);
}

/// 測試 6: 同一天重複使用日期資料夾，換日則建立新的
#[test]
fn test_rerun_reuses_or_creates_dated_folder() {
    let (mount_root, card, drive) = create_mount_root();
    let profile = test_profile(mount_root.path());
    let photo_folder = profile.photo_folder(&card);
    let organizer = create_organizer(&profile);

    fs::write(photo_folder.join("DSCF0001.JPG"), "first").unwrap();
    let first = organizer
        .organize_photos_on(&card, &drive, date(2024, 3, 5))
        .unwrap();

    fs::write(photo_folder.join("DSCF0002.JPG"), "second").unwrap();
    let same_day = organizer
        .organize_photos_on(&card, &drive, date(2024, 3, 5))
        .unwrap();
    assert_eq!(same_day.destination_folder, first.destination_folder);
    assert!(first.destination_folder.join("DSCF0001.JPG").exists());
    assert!(first.destination_folder.join("DSCF0002.JPG").exists());

    fs::write(photo_folder.join("DSCF0003.JPG"), "third").unwrap();
    let next_day = organizer
        .organize_photos_on(&card, &drive, date(2024, 3, 6))
        .unwrap();
    assert_eq!(
        next_day.destination_folder,
        drive.join("2024-03-06").join("RAWPHOTOS_A")
    );
    assert!(next_day.destination_folder.join("DSCF0003.JPG").exists());
    assert!(!first.destination_folder.join("DSCF0003.JPG").exists());

    let mut dated: Vec<_> = fs::read_dir(&drive)
        .unwrap()
        .map(|e| e.unwrap().file_name())
        .collect();
    dated.sort();
    assert_eq!(dated, vec!["2024-03-05", "2024-03-06"]);
}

/// 測試 7: continue 模式下單一檔案失敗不影響其他檔案
#[test]
fn test_continue_policy_isolates_failures() {
    let (mount_root, card, drive) = create_mount_root();
    let mut profile = test_profile(mount_root.path());
    profile.failure_policy = FailurePolicy::Continue;
    let photo_folder = profile.photo_folder(&card);

    fs::write(photo_folder.join("DSCF0001.JPG"), "blocked").unwrap();
    fs::write(photo_folder.join("DSCF0002.JPG"), "fine").unwrap();
    let dated = destination_folder(&drive, &card, date(2024, 3, 5)).unwrap();
    fs::create_dir_all(dated.join("DSCF0001.JPG")).unwrap();

    let result = create_organizer(&profile)
        .organize_photos_on(&card, &drive, date(2024, 3, 5))
        .unwrap();

    assert_eq!(result.move_result.files_moved(), 1);
    assert_eq!(result.move_result.errors(), 1);
    assert!(photo_folder.join("DSCF0001.JPG").exists());
    assert!(dated.join("DSCF0002.JPG").is_file());
}
