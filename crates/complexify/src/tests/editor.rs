//! Editing buffer tests.

use crate::state::EditorState;

fn type_str(editor: &mut EditorState, s: &str) {
    for c in s.chars() {
        if c == '\n' {
            editor.insert_newline();
        } else {
            editor.insert_char(c);
        }
    }
}

#[test]
fn test_typing_builds_text() {
    let mut editor = EditorState::default();
    type_str(&mut editor, "def f():\n    return 1");

    assert_eq!(editor.text(), "def f():\n    return 1");
    assert_eq!(editor.cursor_row, 1);
    assert_eq!(editor.cursor_col, 12);
}

#[test]
fn test_newline_splits_line_at_cursor() {
    let mut editor = EditorState::default();
    type_str(&mut editor, "abcd");
    editor.move_left();
    editor.move_left();
    editor.insert_newline();

    assert_eq!(editor.lines, vec!["ab".to_string(), "cd".to_string()]);
    assert_eq!((editor.cursor_row, editor.cursor_col), (1, 0));
}

#[test]
fn test_backspace_joins_lines() {
    let mut editor = EditorState::default();
    type_str(&mut editor, "ab\ncd");
    editor.move_home();
    editor.backspace();

    assert_eq!(editor.text(), "abcd");
    assert_eq!((editor.cursor_row, editor.cursor_col), (0, 2));
}

#[test]
fn test_delete_at_line_end_joins_next_line() {
    let mut editor = EditorState::default();
    type_str(&mut editor, "ab\ncd");
    editor.move_up();
    editor.move_end();
    editor.delete();

    assert_eq!(editor.text(), "abcd");
}

#[test]
fn test_vertical_moves_clamp_column() {
    let mut editor = EditorState::default();
    type_str(&mut editor, "x\nlonger line");
    assert_eq!((editor.cursor_row, editor.cursor_col), (1, 11));

    editor.move_up();
    assert_eq!((editor.cursor_row, editor.cursor_col), (0, 1));
}

#[test]
fn test_tab_inserts_spaces() {
    let mut editor = EditorState::default();
    editor.insert_tab();
    assert_eq!(editor.current_line(), "    ");
    assert_eq!(editor.cursor_col, 4);
}

#[test]
fn test_multibyte_characters_edit_by_glyph() {
    let mut editor = EditorState::default();
    type_str(&mut editor, "héllo");
    editor.backspace();
    editor.backspace();

    assert_eq!(editor.text(), "hél");
    assert_eq!(editor.cursor_col, 3);
}
