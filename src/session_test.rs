use std::io::Cursor;

use boards::BoardStore;
use order::OrderState;
use serde_json::{Value, json};

use super::*;

fn output_lines(out: &[u8]) -> Vec<Value> {
    String::from_utf8(out.to_vec())
        .expect("utf8 output")
        .lines()
        .map(|line| serde_json::from_str(line).expect("json line"))
        .collect()
}

#[allow(clippy::unnecessary_wraps)]
fn ignore<E>(_: &E) -> Result<(), CliError> {
    Ok(())
}

#[test]
fn board_session_writes_one_effect_per_line() {
    let input = r#"
# create two boards and work on the first
{"action":"create_board","title":"Work"}
{"action":"create_board","title":"Home"}
{"action":"add_task","board_id":1,"name":"report"}
{"action":"toggle_task","board_id":1,"task_id":1}
{"action":"remove_task","board_id":1,"task_id":9}
"#;
    let mut store = BoardStore::new();
    let mut out = Vec::new();

    let stats = run_session(&mut store, Cursor::new(input), &mut out, ignore).expect("session");

    assert_eq!(stats, SessionStats { actions: 5, skipped: 2, effects: 4 });
    let lines = output_lines(&out);
    assert_eq!(lines[0]["effect"], "render_board");
    assert_eq!(lines[0]["board"]["title"], "Work");
    assert_eq!(
        lines[3],
        json!({ "effect": "set_task_completed", "board_id": 1, "task_id": 1, "completed": true })
    );
    assert!(store.board(1).expect("board").tasks[0].completed);
}

#[test]
fn rejected_actions_are_reported_as_alerts() {
    let input = r#"{"action":"rename_board","board_id":3,"title":"x"}"#;
    let mut store = BoardStore::new();
    let mut out = Vec::new();

    run_session(&mut store, Cursor::new(input), &mut out, ignore).expect("session");

    let lines = output_lines(&out);
    assert_eq!(lines, vec![json!({ "effect": "alert", "code": "E_BOARD_NOT_FOUND", "message": "board not found: 3" })]);
}

#[test]
fn malformed_line_stops_with_line_number() {
    let input = "{\"action\":\"load\"}\n{\"action\":\"explode\"}\n";
    let mut store = BoardStore::new();
    let mut out = Vec::new();

    let err = run_session(&mut store, Cursor::new(input), &mut out, ignore).expect_err("bad action");
    assert!(matches!(err, CliError::InvalidAction { line: 2, .. }));
}

#[test]
fn order_session_passes_effects_to_hook() {
    let input = r#"
{"action":"select","category":"dish","name":"Asa de Boi"}
{"action":"select","category":"drink","name":"Caldo de Cana"}
{"action":"select","category":"dessert","name":"Pudim"}
{"action":"confirm"}
"#;
    let mut state = OrderState::default();
    let mut out = Vec::new();
    let mut opened = Vec::new();

    let stats = run_session(&mut state, Cursor::new(input), &mut out, |effect| {
        if let order::OrderEffect::OpenLink { url } = effect {
            opened.push(url.clone());
        }
        Ok(())
    })
    .expect("session");

    assert_eq!(stats.actions, 4);
    assert_eq!(opened.len(), 1);
    assert!(opened[0].starts_with("https://wa.me/553299999999?text="));
    let lines = output_lines(&out);
    assert_eq!(lines.last().expect("last line")["effect"], "open_link");
}
