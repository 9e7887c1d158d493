use std::rc::Rc;

use pretty_assertions::assert_eq;
use tasks_tui::{
    default_keybindings_handle, parse_input_events, Component, KeybindingsConfig,
    KeybindingsManager, TaskAction, TaskError, TaskItemTheme, TaskList,
};

const WIDTH: usize = 32;

fn plain_list(titles: &[&str]) -> TaskList {
    let mut list = TaskList::new(default_keybindings_handle(), Rc::new(TaskItemTheme::plain()));
    for title in titles {
        list.add_task(title).expect("add task");
    }
    list
}

fn send(list: &mut TaskList, data: &str) {
    for event in parse_input_events(data) {
        list.handle_event(&event);
    }
}

fn titles(list: &TaskList) -> Vec<String> {
    list.tasks().iter().map(|task| task.title.clone()).collect()
}

#[test]
fn renders_header_and_selected_prefix() {
    let mut list = plain_list(&["buy milk", "walk dog"]);
    let lines: Vec<String> = list
        .render(WIDTH)
        .into_iter()
        .map(|line| line.trim_end().to_string())
        .collect();

    assert_eq!(
        lines,
        vec![
            "2 tasks".to_string(),
            "→ [ ] buy milk             ✎ │ ⌫".to_string(),
            "  [ ] walk dog             ✎ │ ⌫".to_string(),
        ]
    );
}

#[test]
fn toggle_round_trips_through_the_store() {
    let mut list = plain_list(&["buy milk", "walk dog"]);
    send(&mut list, "j");
    send(&mut list, " ");
    assert!(!list.tasks()[0].done);
    assert!(list.tasks()[1].done);
    assert!(list.item(1).expect("row").item().done);

    assert!(list.press_test_id("marker-1"));
    assert!(!list.tasks()[1].done);
}

#[test]
fn edit_commits_title_and_keeps_row_identity() {
    let mut list = plain_list(&["buy milk", "walk dog"]);
    send(&mut list, "e");
    list.render(WIDTH);
    send(&mut list, "\x15buy oat milk\r");

    assert_eq!(titles(&list), vec!["buy oat milk", "walk dog"]);
    let row = list.item(0).expect("row");
    assert!(!row.is_editing());
    assert_eq!(row.item().title, "buy oat milk");
    assert_eq!(row.draft_title(), "buy oat milk");
}

#[test]
fn selection_keys_are_typed_while_editing() {
    let mut list = plain_list(&["buy milk", "walk dog"]);
    send(&mut list, "e");
    send(&mut list, " jk");
    assert_eq!(list.selected_index(), 0);
    assert_eq!(list.item(0).expect("row").draft_title(), "buy milk jk");

    send(&mut list, "\x1b");
    assert_eq!(titles(&list), vec!["buy milk", "walk dog"]);
}

#[test]
fn remove_unmounts_row_and_reindexes_the_rest() {
    let mut list = plain_list(&["buy milk", "walk dog", "pay rent"]);
    let walk_id = list.tasks()[1].id;

    // Start editing the last row so we can check its state survives re-indexing.
    assert!(list.press_test_id("edit-2"));
    assert!(list.item(2).expect("row").is_editing());

    assert!(list.press_test_id("trash-0"));
    assert_eq!(titles(&list), vec!["walk dog", "pay rent"]);
    assert_eq!(list.item(0).expect("row").item().id, walk_id);
    assert_eq!(list.item(0).expect("row").index(), 0);

    let rent = list.item(1).expect("row");
    assert_eq!(rent.index(), 1);
    assert!(rent.is_editing());
    assert_eq!(rent.test_id(tasks_tui::Control::Remove), "trash-1");
}

#[test]
fn delete_key_is_ignored_while_editing() {
    let mut list = plain_list(&["buy milk"]);
    send(&mut list, "e");
    send(&mut list, "\x1b");
    send(&mut list, "d");
    assert!(list.tasks().is_empty());
    assert_eq!(list.render(WIDTH)[1].trim_end(), "  No tasks yet");

    let mut list = plain_list(&["buy milk"]);
    send(&mut list, "e");
    assert!(list.press_test_id("trash-0"));
    assert_eq!(list.tasks().len(), 1);
}

#[test]
fn selection_is_clamped_after_removal() {
    let mut list = plain_list(&["buy milk", "walk dog"]);
    send(&mut list, "\x1b[B");
    assert_eq!(list.selected_index(), 1);
    send(&mut list, "d");
    assert_eq!(list.selected_index(), 0);
    assert_eq!(titles(&list), vec!["buy milk"]);
}

#[test]
fn add_task_validation() {
    let mut list = plain_list(&["buy milk"]);
    assert_eq!(list.add_task("  "), Err(TaskError::EmptyTitle));
    assert_eq!(
        list.add_task("buy milk"),
        Err(TaskError::DuplicateTitle("buy milk".to_string()))
    );
    assert_eq!(list.render(WIDTH)[0].trim_end(), "1 task");
}

#[test]
fn cursor_position_is_reported_in_list_coordinates() {
    let mut list = plain_list(&["buy milk", "walk dog"]);
    send(&mut list, "j");
    send(&mut list, "e");
    list.render(WIDTH);

    let pos = list.cursor_pos().expect("cursor while editing");
    assert_eq!(pos.row, 2);
    // prefix (2) + marker and space (4) + "walk dog"
    assert_eq!(pos.col, 2 + 4 + "walk dog".len());
}

#[test]
fn custom_keybindings_apply_to_rows() {
    let mut config = KeybindingsConfig::new();
    config.set(TaskAction::Remove, "x");
    let handle = default_keybindings_handle();
    *handle.lock().expect("keybindings lock") = KeybindingsManager::new(config);

    let mut list = TaskList::new(handle, Rc::new(TaskItemTheme::plain()));
    list.add_task("buy milk").expect("add task");
    send(&mut list, "d");
    assert_eq!(list.tasks().len(), 1);
    send(&mut list, "x");
    assert!(list.tasks().is_empty());
}
