use quillnote_core::{filter_notes, seed_notes, FilterState};

#[test]
fn neutral_filter_returns_all_seed_notes_in_order() {
    let notes = seed_notes();
    let filter = FilterState::new();

    let hits = filter_notes(&notes, &filter);
    assert_eq!(hits.len(), 3);
    assert_eq!(hits[0].title, "Getting Started with the Notes App");
    assert_eq!(hits[1].title, "Markdown Syntax Guide");
    assert_eq!(hits[2].title, "Project Ideas");
}

#[test]
fn content_search_matches_only_the_syntax_guide() {
    let notes = seed_notes();
    let mut filter = FilterState::new();
    filter.set_query("markdown");

    let hits = filter_notes(&notes, &filter);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].title, "Markdown Syntax Guide");
}

#[test]
fn search_is_case_insensitive() {
    let notes = seed_notes();
    let mut filter = FilterState::new();
    filter.set_query("MARKDOWN");

    let hits = filter_notes(&notes, &filter);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].title, "Markdown Syntax Guide");
}

#[test]
fn todo_tag_filter_matches_only_project_ideas() {
    let notes = seed_notes();
    let mut filter = FilterState::new();
    filter.toggle_tag("todo");

    let hits = filter_notes(&notes, &filter);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].title, "Project Ideas");
}

#[test]
fn multiple_required_tags_match_any_of_them() {
    let notes = seed_notes();
    let mut filter = FilterState::new();
    filter.toggle_tag("todo");
    filter.toggle_tag("markdown");

    let hits = filter_notes(&notes, &filter);
    assert_eq!(hits.len(), 2);
    assert_eq!(hits[0].title, "Markdown Syntax Guide");
    assert_eq!(hits[1].title, "Project Ideas");
}

#[test]
fn query_and_tags_compose_with_and_semantics() {
    let notes = seed_notes();
    let mut filter = FilterState::new();
    // "app" matches the welcome note and Project Ideas ("Web Applications");
    // the tag narrows it to the latter.
    filter.set_query("app");
    filter.toggle_tag("todo");

    let hits = filter_notes(&notes, &filter);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].title, "Project Ideas");
}

#[test]
fn clear_restores_the_neutral_filter() {
    let notes = seed_notes();
    let mut filter = FilterState::new();
    filter.set_query("nothing matches this");
    filter.toggle_tag("todo");
    assert!(filter_notes(&notes, &filter).is_empty());

    filter.clear();
    assert!(filter.is_neutral());
    assert_eq!(filter_notes(&notes, &filter).len(), 3);
}
