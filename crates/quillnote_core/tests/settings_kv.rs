use quillnote_core::{
    load_backup_config, load_notes, load_settings, save_backup_config, save_notes, save_settings,
    seed_notes, BackupConfig, KvStore, Settings, SqliteKvStore, NOTES_KEY, SETTINGS_KEY,
};

#[test]
fn kv_set_then_get_roundtrips_and_overwrites() {
    let mut kv = SqliteKvStore::open_in_memory().unwrap();

    assert_eq!(kv.get("missing").unwrap(), None);

    kv.set("greeting", "hello").unwrap();
    assert_eq!(kv.get("greeting").unwrap().as_deref(), Some("hello"));

    kv.set("greeting", "goodbye").unwrap();
    assert_eq!(kv.get("greeting").unwrap().as_deref(), Some("goodbye"));
}

#[test]
fn settings_load_defaults_when_absent() {
    let kv = SqliteKvStore::open_in_memory().unwrap();
    assert_eq!(load_settings(&kv), Settings::default());
}

#[test]
fn settings_save_then_load_roundtrips() {
    let mut kv = SqliteKvStore::open_in_memory().unwrap();
    let settings = Settings {
        dark_mode: true,
        auto_save: false,
        auto_save_delay: 500,
        show_preview: false,
    };

    save_settings(&mut kv, &settings).unwrap();
    assert_eq!(load_settings(&kv), settings);
}

#[test]
fn corrupt_settings_blob_falls_back_to_defaults() {
    let mut kv = SqliteKvStore::open_in_memory().unwrap();
    kv.set(SETTINGS_KEY, "{not valid json").unwrap();

    assert_eq!(load_settings(&kv), Settings::default());
}

#[test]
fn partial_settings_blob_keeps_remaining_defaults() {
    let mut kv = SqliteKvStore::open_in_memory().unwrap();
    kv.set(SETTINGS_KEY, r#"{"darkMode":true,"autoSaveDelay":750}"#)
        .unwrap();

    let settings = load_settings(&kv);
    assert!(settings.dark_mode);
    assert_eq!(settings.auto_save_delay, 750);
    assert!(settings.auto_save);
    assert!(settings.show_preview);
}

#[test]
fn backup_config_roundtrips_with_wire_names() {
    let mut kv = SqliteKvStore::open_in_memory().unwrap();
    let mut config = BackupConfig {
        token: "secret".into(),
        username: "user".into(),
        repository: "notes-backup".into(),
        ..BackupConfig::default()
    };
    config.refresh_configured();
    save_backup_config(&mut kv, &config).unwrap();

    let loaded = load_backup_config(&kv);
    assert_eq!(loaded, config);
    assert!(loaded.is_configured);
    assert_eq!(loaded.file_path, "notes-data.xlsx");
}

#[test]
fn notes_snapshot_roundtrips_through_the_adapter() {
    let mut kv = SqliteKvStore::open_in_memory().unwrap();
    let notes = seed_notes();

    save_notes(&mut kv, &notes).unwrap();
    assert_eq!(load_notes(&kv), notes);
}

#[test]
fn missing_snapshot_falls_back_to_the_seed_set() {
    let kv = SqliteKvStore::open_in_memory().unwrap();
    assert_eq!(load_notes(&kv), seed_notes());
}

#[test]
fn corrupt_snapshot_falls_back_to_the_seed_set() {
    let mut kv = SqliteKvStore::open_in_memory().unwrap();
    kv.set(NOTES_KEY, "[{\"broken\":").unwrap();

    assert_eq!(load_notes(&kv), seed_notes());
}
