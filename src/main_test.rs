use std::io::Write;

use super::*;

const MISSING_CATALOG: &str = "/nonexistent/driven-catalog.json";

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(args).expect("cli args")
}

#[test]
fn board_session_ignores_unreadable_catalog() {
    let mut input = tempfile::NamedTempFile::new().expect("temp input");
    writeln!(input, r#"{{"action":"create_board","title":"x"}}"#).expect("write input");
    let input_path = input.path().to_str().expect("utf8 path").to_owned();

    let cli = parse(&["driven", "--catalog", MISSING_CATALOG, "board-session", "--input", &input_path]);
    run(cli).expect("board session should not read the catalog");
}

#[test]
fn catalog_command_reports_unreadable_catalog() {
    let cli = parse(&["driven", "--catalog", MISSING_CATALOG, "catalog"]);
    let err = run(cli).expect_err("missing catalog");
    assert!(matches!(err, CliError::Io { action: "read", .. }));
}

#[test]
fn order_command_reports_unreadable_catalog() {
    let cli = parse(&[
        "driven",
        "--catalog",
        MISSING_CATALOG,
        "order",
        "--dish",
        "Asa de Boi",
        "--drink",
        "Caldo de Cana",
        "--dessert",
        "Pudim",
    ]);
    let err = run(cli).expect_err("missing catalog");
    assert!(matches!(err, CliError::Io { action: "read", .. }));
}
