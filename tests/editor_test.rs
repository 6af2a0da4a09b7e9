// ABOUTME: Integration tests for the rich-text instruction editor
// ABOUTME: Covers the space rule, marks, lists, links, undo/redo, change callbacks, and external sync
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use cookbook_client::editor::{BlockKind, Command, Format, Key, Position, RichTextEditor};
use std::sync::{Arc, Mutex};

const LINK_OPEN: &str = r#"<a target="_blank" rel="noopener noreferrer nofollow" href="https://example.com/tips">"#;

/// Editor plus every HTML value its change callback received
fn recording_editor(content: &str) -> (RichTextEditor, Arc<Mutex<Vec<String>>>) {
    let changes = Arc::new(Mutex::new(Vec::new()));
    let sink = changes.clone();
    let editor = RichTextEditor::new(content, move |html| sink.lock().unwrap().push(html.to_owned()));
    (editor, changes)
}

fn change_count(changes: &Arc<Mutex<Vec<String>>>) -> usize {
    changes.lock().unwrap().len()
}

#[test]
fn test_double_space_becomes_non_breaking() {
    let (mut editor, changes) = recording_editor("");

    editor.type_text("Mix  well");
    assert_eq!(editor.html(), "<p>Mix &nbsp;well</p>");

    editor.type_text("   done");
    assert_eq!(editor.html(), "<p>Mix &nbsp;well &nbsp; done</p>");
    assert_eq!(change_count(&changes), 2);
    assert_eq!(changes.lock().unwrap()[1], editor.html());
}

#[test]
fn test_space_at_block_start_is_regular() {
    let (mut editor, _) = recording_editor("");
    editor.press_key(Key::Space);
    editor.press_key(Key::Space);
    assert_eq!(editor.document().text(), " \u{a0}");
}

#[test]
fn test_pasted_text_skips_the_space_rule() {
    let (mut editor, _) = recording_editor("");
    editor.insert_text("a  b");
    assert_eq!(editor.document().text(), "a  b");
}

#[test]
fn test_bold_selection_toggles() {
    let (mut editor, changes) = recording_editor("<p>Salt to taste</p>");
    editor.select(Position::new(0, 0), Position::new(0, 4));

    assert!(editor.execute(Command::ToggleBold));
    assert_eq!(editor.html(), "<p><strong>Salt</strong> to taste</p>");
    assert!(editor.is_active(Format::Bold));

    assert!(editor.execute(Command::ToggleBold));
    assert_eq!(editor.html(), "<p>Salt to taste</p>");
    assert!(!editor.is_active(Format::Bold));
    assert_eq!(change_count(&changes), 2);
}

#[test]
fn test_collapsed_toggle_applies_to_next_typed_text() {
    let (mut editor, changes) = recording_editor("");

    assert!(editor.execute(Command::ToggleItalic));
    assert_eq!(change_count(&changes), 0);

    editor.type_text("Hot");
    assert_eq!(editor.html(), "<p><em>Hot</em></p>");
    assert!(editor.is_active(Format::Italic));
}

#[test]
fn test_nested_marks_render_in_fixed_order() {
    let (mut editor, _) = recording_editor("<p>Careful</p>");
    editor.select_all();
    editor.execute(Command::ToggleUnderline);
    editor.execute(Command::ToggleBold);
    assert_eq!(editor.html(), "<p><strong><u>Careful</u></strong></p>");
}

#[test]
fn test_lists_from_typed_lines() {
    let (mut editor, _) = recording_editor("");
    editor.type_text("Flour\nMilk");
    editor.select_all();

    assert!(editor.execute(Command::ToggleBulletList));
    assert_eq!(
        editor.html(),
        "<ul><li><p>Flour</p></li><li><p>Milk</p></li></ul>"
    );
    assert!(editor.is_active(Format::BulletList));

    assert!(editor.execute(Command::ToggleOrderedList));
    assert_eq!(
        editor.html(),
        "<ol><li><p>Flour</p></li><li><p>Milk</p></li></ol>"
    );

    assert!(editor.execute(Command::ToggleOrderedList));
    assert_eq!(editor.html(), "<p>Flour</p><p>Milk</p>");
}

#[test]
fn test_enter_on_empty_list_item_leaves_the_list() {
    let (mut editor, _) = recording_editor("<ul><li><p>Eggs</p></li></ul>");
    editor.move_to_end();

    editor.press_key(Key::Enter);
    assert_eq!(editor.document().blocks().len(), 2);
    assert_eq!(editor.document().blocks()[1].kind, BlockKind::BulletItem);

    editor.press_key(Key::Enter);
    assert_eq!(editor.document().blocks()[1].kind, BlockKind::Paragraph);
    assert_eq!(editor.html(), "<ul><li><p>Eggs</p></li></ul><p></p>");
}

#[test]
fn test_backspace_lifts_list_item_then_merges() {
    let (mut editor, _) = recording_editor("<p>Step</p><ul><li><p>one</p></li></ul>");
    editor.set_cursor(Position::new(1, 0));

    editor.press_key(Key::Backspace);
    assert_eq!(editor.html(), "<p>Step</p><p>one</p>");

    editor.press_key(Key::Backspace);
    assert_eq!(editor.html(), "<p>Stepone</p>");
    assert_eq!(editor.selection().head, Position::new(0, 4));
}

#[test]
fn test_headings_toggle_and_reject_bad_levels() {
    let (mut editor, _) = recording_editor("<p>Dough</p>");

    assert!(editor.execute(Command::ToggleHeading(2)));
    assert_eq!(editor.html(), "<h2>Dough</h2>");
    assert!(editor.is_active(Format::Heading(2)));

    assert!(editor.execute(Command::ToggleHeading(2)));
    assert_eq!(editor.html(), "<p>Dough</p>");

    assert!(!editor.execute(Command::ToggleHeading(0)));
    assert!(!editor.execute(Command::ToggleHeading(7)));
}

#[test]
fn test_links_set_and_unset() {
    let (mut editor, _) = recording_editor("<p>Read the tips</p>");
    editor.select(Position::new(0, 9), Position::new(0, 13));

    assert!(editor.execute(Command::SetLink("https://example.com/tips".to_owned())));
    assert_eq!(editor.html(), format!("<p>Read the {LINK_OPEN}tips</a></p>"));

    editor.set_cursor(Position::new(0, 11));
    assert!(editor.is_active(Format::Link));
    assert!(editor.execute(Command::UnsetLink));
    assert_eq!(editor.html(), "<p>Read the tips</p>");

    editor.set_cursor(Position::new(0, 2));
    assert!(!editor.execute(Command::UnsetLink));
    assert!(!editor.execute(Command::SetLink("   ".to_owned())));
}

#[test]
fn test_typing_after_a_link_does_not_extend_it() {
    let html = format!("<p>{LINK_OPEN}tips</a></p>");
    let (mut editor, _) = recording_editor(&html);
    editor.move_to_end();
    editor.type_text("!");
    assert_eq!(editor.html(), format!("<p>{LINK_OPEN}tips</a>!</p>"));
}

#[test]
fn test_undo_and_redo() {
    let (mut editor, changes) = recording_editor("");
    assert!(!editor.can_undo());
    assert!(!editor.execute(Command::Undo));

    editor.type_text("Boil");
    editor.type_text(" water");
    assert!(editor.execute(Command::Undo));
    assert_eq!(editor.html(), "<p>Boil</p>");
    assert!(editor.can_redo());

    assert!(editor.execute(Command::Redo));
    assert_eq!(editor.html(), "<p>Boil water</p>");
    assert!(!editor.can_redo());
    assert_eq!(change_count(&changes), 4);
}

#[test]
fn test_history_is_bounded() {
    let (mut editor, _) = recording_editor("");
    for _ in 0..120 {
        editor.press_key(Key::Character('x'));
    }
    let mut undone = 0;
    while editor.execute(Command::Undo) {
        undone += 1;
    }
    assert_eq!(undone, 100);
    assert_eq!(editor.document().text().len(), 20);
}

#[test]
fn test_no_op_edits_do_not_notify() {
    let (mut editor, changes) = recording_editor("<p>Knead</p>");
    editor.set_cursor(Position::new(0, 0));
    editor.press_key(Key::Backspace);
    editor.execute(Command::SetParagraph);
    assert_eq!(change_count(&changes), 0);
    assert!(!editor.can_undo());
}

#[test]
fn test_sync_content_replaces_without_callback() {
    let (mut editor, changes) = recording_editor("");
    editor.type_text("local");
    assert_eq!(change_count(&changes), 1);

    assert!(editor.sync_content("<p>Remote draft</p>"));
    assert_eq!(editor.html(), "<p>Remote draft</p>");
    assert_eq!(editor.selection().head, Position::new(0, 12));
    assert!(!editor.can_undo());
    assert_eq!(change_count(&changes), 1);

    assert!(!editor.sync_content(""));
    assert!(!editor.sync_content("<p>Remote draft</p>"));
    assert_eq!(editor.html(), "<p>Remote draft</p>");
}

#[test]
fn test_toolbar_reflects_state() {
    let (mut editor, _) = recording_editor("<p>Garnish</p>");
    editor.select_all();

    let bold = editor
        .toolbar()
        .into_iter()
        .find(|button| button.title == "Bold (Ctrl+B)")
        .unwrap();
    assert!(!bold.active);
    assert!(editor.press(&bold, None));

    let toolbar = editor.toolbar();
    assert!(toolbar[0].active);
    let remove_link = toolbar.iter().find(|b| b.title == "Remove Link").unwrap();
    assert!(!remove_link.enabled);
    assert!(!editor.press(remove_link, None));

    let add_link = toolbar.iter().find(|b| b.title == "Add Link").unwrap();
    assert!(!editor.press(add_link, None));
    assert!(editor.press(add_link, Some("https://example.com/tips")));
    assert!(editor.is_active(Format::Link));
}
