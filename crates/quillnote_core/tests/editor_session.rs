use quillnote_core::{
    EditorSession, NoteStore, SessionError, SessionState, ValidationError,
};
use std::time::{Duration, Instant};

const DELAY: Duration = Duration::from_millis(200);

fn session() -> EditorSession {
    EditorSession::new(true, DELAY)
}

#[test]
fn session_starts_empty_and_transitions_through_editing_states() {
    let mut store = NoteStore::new();
    let mut session = session();
    assert_eq!(session.state(), SessionState::Empty);

    session.start_new(&store);
    assert_eq!(session.state(), SessionState::Editing);

    session.save(&mut store, "My note", "body").unwrap();
    assert_eq!(session.state(), SessionState::EditingExisting);

    assert!(session.delete(&mut store));
    assert_eq!(session.state(), SessionState::Empty);
    assert!(store.is_empty());
}

#[test]
fn save_keeps_the_committed_note_active() {
    let mut store = NoteStore::new();
    let mut session = session();
    session.start_new(&store);

    let committed = session.save(&mut store, "", "content only").unwrap();
    let active = session.active_note().unwrap();
    assert_eq!(active.id, committed.id);
    assert_eq!(active.title, "Untitled Note");
}

#[test]
fn save_without_an_open_note_reports_no_active_note() {
    let mut store = NoteStore::new();
    let mut session = session();

    let err = session.save(&mut store, "t", "c").unwrap_err();
    assert_eq!(err, SessionError::NoActiveNote);
}

#[test]
fn failed_validation_leaves_store_and_session_untouched() {
    let mut store = NoteStore::new();
    let mut session = session();
    session.start_new(&store);

    let err = session.save(&mut store, "  ", "").unwrap_err();
    assert_eq!(err, SessionError::Validation(ValidationError::EmptyNote));
    assert!(store.is_empty());
    assert_eq!(session.state(), SessionState::Editing);
}

#[test]
fn open_unknown_id_is_a_silent_noop() {
    let mut store = NoteStore::new();
    let mut session = session();
    let stray = store.create();

    assert!(!session.open(&store, stray.id));
    assert_eq!(session.state(), SessionState::Empty);
}

#[test]
fn adding_a_duplicate_tag_is_a_noop() {
    let mut store = NoteStore::new();
    let mut session = session();
    session.start_new(&store);
    let now = Instant::now();

    assert!(session.add_tag("Work", now));
    assert!(!session.add_tag("  work  ", now));
    assert_eq!(session.active_note().unwrap().tags, vec!["work".to_string()]);
}

#[test]
fn removing_an_absent_tag_is_a_noop_without_scheduling() {
    let mut store = NoteStore::new();
    let mut session = session();
    session.start_new(&store);

    assert!(!session.remove_tag("ghost", Instant::now()));
    assert!(!session.has_pending_auto_save());
    assert!(session.active_note().unwrap().tags.is_empty());
}

#[test]
fn tag_changes_schedule_auto_save() {
    let mut store = NoteStore::new();
    let mut session = session();
    session.start_new(&store);

    session.add_tag("alpha", Instant::now());
    assert!(session.has_pending_auto_save());
}

#[test]
fn debounce_fires_once_with_the_latest_inputs() {
    let mut store = NoteStore::new();
    let mut session = session();
    session.start_new(&store);

    let t0 = Instant::now();
    session.schedule_auto_save("Draft", "first body", t0);
    session.schedule_auto_save("Draft", "second body", t0 + Duration::from_millis(100));

    // The first deadline (t0 + 200ms) was replaced; nothing fires there.
    assert!(session
        .poll_auto_save(&mut store, t0 + Duration::from_millis(250))
        .is_none());

    let fired = session
        .poll_auto_save(&mut store, t0 + Duration::from_millis(300))
        .unwrap()
        .unwrap();
    assert_eq!(fired.content, "second body");
    assert_eq!(store.len(), 1);

    // The deadline is consumed; later polls stay quiet.
    assert!(session
        .poll_auto_save(&mut store, t0 + Duration::from_secs(5))
        .is_none());
}

#[test]
fn switching_notes_cancels_the_pending_auto_save() {
    let mut store = NoteStore::new();
    let mut session = session();

    session.start_new(&store);
    let kept = session.save(&mut store, "kept", "original body").unwrap();

    session.start_new(&store);
    let other = session.save(&mut store, "other", "other body").unwrap();

    session.open(&store, kept.id);
    let t0 = Instant::now();
    session.schedule_auto_save("kept", "unsaved edit", t0);

    // Switching away must drop the stale deadline for `kept`.
    session.open(&store, other.id);
    assert!(!session.has_pending_auto_save());
    assert!(session
        .poll_auto_save(&mut store, t0 + Duration::from_secs(5))
        .is_none());
    assert_eq!(store.get(kept.id).unwrap().content, "original body");
}

#[test]
fn disabling_auto_save_cancels_and_stops_scheduling() {
    let mut store = NoteStore::new();
    let mut session = session();
    session.start_new(&store);

    let t0 = Instant::now();
    session.schedule_auto_save("t", "c", t0);
    assert!(session.has_pending_auto_save());

    session.set_auto_save(false);
    assert!(!session.has_pending_auto_save());

    session.schedule_auto_save("t", "c", t0 + Duration::from_millis(10));
    assert!(!session.has_pending_auto_save());
}

#[test]
fn deleting_an_unsaved_draft_returns_false_but_empties_the_session() {
    let mut store = NoteStore::new();
    let mut session = session();
    session.start_new(&store);

    assert!(!session.delete(&mut store));
    assert_eq!(session.state(), SessionState::Empty);
}
