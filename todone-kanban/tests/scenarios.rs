//! End-to-end reducer scenarios

use serde_json::json;
use todone_kanban::{
    apply, apply_json,
    column::ReorderColumn,
    form::TagInput,
    task::{AddTask, DeleteTask, MoveTask, UpdateTask},
    Board, ColumnId, FormError, Priority, ReduceContext, TaskId,
};

fn board_with(column: ColumnId, titles: &[&str]) -> Board {
    titles.iter().fold(Board::empty(), |board, title| {
        apply(&board, &AddTask::new(column, *title).into())
    })
}

fn titles(board: &Board, column: ColumnId) -> Vec<String> {
    board
        .column_tasks(column)
        .into_iter()
        .map(|task| task.title.clone())
        .collect()
}

#[test_log::test]
fn test_add_to_empty_board() {
    let board = apply(
        &Board::empty(),
        &AddTask::new(ColumnId::Todo, "Buy milk")
            .with_priority(Priority::Low)
            .into(),
    );

    let ids = board.column_ids(ColumnId::Todo);
    assert_eq!(ids.len(), 1);
    let task = board.task(&ids[0]).unwrap();
    assert_eq!(task.title, "Buy milk");
    assert_eq!(task.priority, Priority::Low);
    assert!(task.tags.is_empty());
    assert_eq!(task.column_id, ColumnId::Todo);
    assert_eq!(task.created_at, task.updated_at);
}

#[test]
fn test_reorder_first_to_last() {
    let board = board_with(ColumnId::Todo, &["A", "B", "C"]);
    let board = apply(&board, &ReorderColumn::new(ColumnId::Todo, 0, 2).into());
    assert_eq!(titles(&board, ColumnId::Todo), ["B", "C", "A"]);
}

#[test]
fn test_move_into_empty_column() {
    let board = board_with(ColumnId::Todo, &["A"]);
    let a = board.column_ids(ColumnId::Todo)[0].clone();

    let board = apply(
        &board,
        &MoveTask::new(a.clone(), ColumnId::Todo, ColumnId::InProgress, 0).into(),
    );

    assert!(board.column_ids(ColumnId::Todo).is_empty());
    assert_eq!(board.column_ids(ColumnId::InProgress), &[a.clone()]);
    assert_eq!(board.task(&a).unwrap().column_id, ColumnId::InProgress);
}

#[test]
fn test_delete_unknown_id_is_noop() {
    let board = board_with(ColumnId::Completed, &["done"]);
    let after = apply(&board, &DeleteTask::new("no-such-task").into());
    assert_eq!(after, board);
    assert!(after.ptr_eq(&board));
}

#[test]
fn test_tag_input_rejects_eleventh_and_long_tags() {
    let mut input = TagInput::new();
    for i in 0..10 {
        input.add(&format!("tag{i}")).unwrap();
    }
    let before = input.clone();

    assert_eq!(input.add("tag10"), Err(FormError::TooManyTags { max: 10 }));
    assert_eq!(input, before);

    let mut input = TagInput::new();
    assert!(matches!(
        input.add("abcdefghijklmnopqrstu"),
        Err(FormError::TagTooLong { .. })
    ));
    assert!(input.tags().is_empty());
}

#[test]
fn test_reorder_same_index_is_identity() {
    let board = board_with(ColumnId::Todo, &["A", "B", "C"]);
    for i in 0..3 {
        let after = apply(&board, &ReorderColumn::new(ColumnId::Todo, i, i).into());
        assert_eq!(after, board);
    }
}

#[test]
fn test_add_appends() {
    let board = board_with(ColumnId::InProgress, &["first", "second"]);
    let board = apply(&board, &AddTask::new(ColumnId::InProgress, "third").into());
    assert_eq!(
        titles(&board, ColumnId::InProgress).last().map(String::as_str),
        Some("third")
    );
}

#[test]
fn test_update_column_change_appends_to_new_column() {
    let board = board_with(ColumnId::Todo, &["A"]);
    let board = apply(&board, &AddTask::new(ColumnId::Completed, "Z").into());
    let a = board.column_ids(ColumnId::Todo)[0].clone();

    let board = apply(
        &board,
        &UpdateTask::new(a.clone())
            .with_title("A2")
            .with_column(ColumnId::Completed)
            .into(),
    );

    assert!(board.column_ids(ColumnId::Todo).is_empty());
    assert_eq!(titles(&board, ColumnId::Completed), ["Z", "A2"]);
    board.check_consistency().unwrap();
}

#[test]
fn test_prior_snapshots_stay_valid() {
    let before = board_with(ColumnId::Todo, &["A", "B"]);
    let a = before.column_ids(ColumnId::Todo)[0].clone();
    let after = apply(&before, &DeleteTask::new(a.clone()).into());

    assert!(before.contains_task(&a));
    assert!(!after.contains_task(&a));
    assert_eq!(titles(&before, ColumnId::Todo), ["A", "B"]);
}

#[test]
fn test_json_commands() {
    let ctx = ReduceContext::default();
    let board = apply_json(
        &Board::empty(),
        &json!({
            "type": "ADD_ITEM",
            "payload": {
                "columnId": "in-progress",
                "title": "From JSON",
                "description": "",
                "priority": "high",
                "tags": ["ui"]
            }
        }),
        &ctx,
    );
    let id: TaskId = board.column_ids(ColumnId::InProgress)[0].clone();
    assert_eq!(board.task(&id).unwrap().priority, Priority::High);

    let unchanged = apply_json(&board, &json!({"type": "ARCHIVE_ITEM", "payload": {}}), &ctx);
    assert!(unchanged.ptr_eq(&board));

    let unchanged = apply_json(&board, &json!({"type": "MOVE_ITEM"}), &ctx);
    assert!(unchanged.ptr_eq(&board));
}
