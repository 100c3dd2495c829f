//! 設定・レポート保存テスト
//!
//! ファイルストアとメモリストアの両方で動作を検証

use chrono::{Duration, Local, TimeZone};
use kushti_post::error::KushtiError;
use kushti_post::platform::PostingStatus;
use kushti_post::store::{
    AppSettings, FileStore, KeyValueStore, MemoryStore, PostingReport, ReportStore, SettingsStore,
    Theme, MAX_REPORTS, REPORTS_KEY, SETTINGS_KEY,
};
use tempfile::tempdir;

fn report(n: i64) -> PostingReport {
    let base = Local.with_ymd_and_hms(2026, 1, 1, 9, 0, 0).unwrap();
    PostingReport::at(
        base + Duration::minutes(n),
        &format!("keyword {}", n),
        Some(&format!("title {}", n)),
        Some("Kolhapur Kushti"),
        PostingStatus::default(),
    )
}

// =============================================
// 設定
// =============================================

/// 空のストアではデフォルト設定
#[test]
fn test_settings_defaults_on_empty_store() {
    let kv = MemoryStore::new();
    let settings = SettingsStore::new(&kv).load().unwrap();

    assert!(settings.selected_fb_page.is_none());
    assert_eq!(settings.theme, Theme::Dark);
    assert!(!settings.saved_hashtags.is_empty());
    assert!(!settings.default_footer.is_empty());
    assert_eq!(settings, AppSettings::default());
}

/// 保存 → 読み込みで同じ値
#[test]
fn test_settings_round_trip_file_store() {
    let dir = tempdir().expect("Failed to create temp dir");
    let kv = FileStore::new(dir.path());
    let store = SettingsStore::new(&kv);

    let mut settings = AppSettings::default();
    settings.set_facebook_page("Kolhapur Kushti", "kolhapur.kushti").unwrap();
    settings.set_footer("जय हनुमान 🙏");
    settings.set_theme(Theme::Light);
    settings.add_hashtag("Pehelwan");
    store.save(&settings).unwrap();

    // 別インスタンスで再読み込み
    let reopened = FileStore::new(dir.path());
    assert_eq!(SettingsStore::new(&reopened).load().unwrap(), settings);
}

/// 保存は全体の上書き
#[test]
fn test_settings_save_overwrites() {
    let kv = MemoryStore::new();
    let store = SettingsStore::new(&kv);

    let mut settings = AppSettings::default();
    settings.set_facebook_page("Page", "1").unwrap();
    store.save(&settings).unwrap();

    settings.clear_facebook_page();
    settings.saved_hashtags.clear();
    store.save(&settings).unwrap();
    store.save(&settings).unwrap();

    let loaded = store.load().unwrap();
    assert!(loaded.selected_fb_page.is_none());
    assert!(loaded.saved_hashtags.is_empty());
}

/// 変更と同時に保存
#[test]
fn test_settings_update_writes_through() {
    let kv = MemoryStore::new();
    let store = SettingsStore::new(&kv);
    let mut settings = store.load().unwrap();

    let added = store.update(&mut settings, |s| s.add_hashtag("#Dangal")).unwrap();

    assert!(added);
    assert!(store.load().unwrap().saved_hashtags.contains(&"#Dangal".to_string()));
}

/// 元の形式のレコードも読める
#[test]
fn test_settings_reads_stored_record_format() {
    let kv = MemoryStore::new();
    kv.set(
        SETTINGS_KEY,
        r##"{"selectedFBPage":{"id":"123","name":"Kesari Page"},"defaultFooter":"f","theme":"light","savedHashtags":["#Kushti"]}"##,
    )
    .unwrap();

    let settings = SettingsStore::new(&kv).load().unwrap();
    assert_eq!(settings.facebook_page().map(|p| p.name.as_str()), Some("Kesari Page"));
    assert_eq!(settings.theme, Theme::Light);
}

/// 正規化前の表記で保存されたタグも削除できる
#[test]
fn test_settings_removes_stored_unnormalized_hashtags() {
    let kv = MemoryStore::new();
    kv.set(
        SETTINGS_KEY,
        r##"{"selectedFBPage":null,"defaultFooter":"f","theme":"dark","savedHashtags":["#Lal Mati","Kushti"]}"##,
    )
    .unwrap();

    let store = SettingsStore::new(&kv);
    let mut settings = store.load().unwrap();
    for tag in settings.saved_hashtags.clone() {
        assert!(store.update(&mut settings, |s| s.remove_hashtag(&tag)).unwrap());
    }

    assert!(store.load().unwrap().saved_hashtags.is_empty());
}

/// 壊れたレコードはエラーとして表に出す
#[test]
fn test_settings_corrupted_record() {
    let dir = tempdir().expect("Failed to create temp dir");
    let kv = FileStore::new(dir.path());
    std::fs::write(kv.record_path(SETTINGS_KEY), "{ invalid json }").unwrap();

    let result = SettingsStore::new(&kv).load();
    assert!(matches!(result, Err(KushtiError::JsonParse(_))));
}

// =============================================
// レポート
// =============================================

#[test]
fn test_reports_empty() {
    let kv = MemoryStore::new();
    assert!(ReportStore::new(&kv).list().unwrap().is_empty());
}

/// 追加したレポートが先頭に来る
#[test]
fn test_report_append_is_newest_first() {
    let kv = MemoryStore::new();
    let store = ReportStore::new(&kv);

    store.append(&report(1)).unwrap();
    store.append(&report(2)).unwrap();

    let list = store.list().unwrap();
    assert_eq!(list.len(), 2);
    assert_eq!(list[0], report(2));
    assert_eq!(list[1], report(1));
}

/// 同じ時刻のレポートでもIDは重ならない
#[test]
fn test_report_ids_stay_unique() {
    let kv = MemoryStore::new();
    let store = ReportStore::new(&kv);

    let first = store.append(&report(3)).unwrap();
    let second = store.append(&report(3)).unwrap();

    assert_eq!(first, report(3));
    assert_ne!(first.id, second.id);
    let list = store.list().unwrap();
    assert_eq!(list[0].id, second.id);
    assert_eq!(list[1].id, first.id);
}

/// 51件目で最古が消える
#[test]
fn test_report_history_capped() {
    let dir = tempdir().expect("Failed to create temp dir");
    let kv = FileStore::new(dir.path());
    let store = ReportStore::new(&kv);

    for n in 0..=MAX_REPORTS as i64 {
        store.append(&report(n)).unwrap();
    }

    let list = store.list().unwrap();
    assert_eq!(list.len(), MAX_REPORTS);
    assert_eq!(list[0], report(MAX_REPORTS as i64));
    assert_eq!(list[MAX_REPORTS - 1], report(1));
    assert!(!list.contains(&report(0)));
}

/// 設定とレポートは別レコード
#[test]
fn test_records_are_independent() {
    let dir = tempdir().expect("Failed to create temp dir");
    let kv = FileStore::new(dir.path());

    ReportStore::new(&kv).append(&report(7)).unwrap();
    assert_eq!(SettingsStore::new(&kv).load().unwrap(), AppSettings::default());
    assert!(kv.record_path(REPORTS_KEY).exists());
    assert!(!kv.record_path(SETTINGS_KEY).exists());
}
