use hebrewpp::{Error, Interpreter};
use pretty_assertions::assert_eq;

fn run_program(source: &str) -> (Result<(), Error>, String) {
    let mut interpreter = Interpreter::new(Vec::new());
    let result = interpreter.run(source);
    let output = String::from_utf8(interpreter.into_output()).unwrap();
    (result, output)
}

fn assert_prints(source: &str, expected: &str) {
    let (result, output) = run_program(source);
    if let Err(err) = result {
        panic!("Failed to run \"{source}\": {err}");
    }
    assert_eq!(output, expected, "\nUnexpected output for \"{source}\"");
}

#[test]
fn test_if() {
    assert_prints("\nאם 5 > 3:\n    הדפס שלום\n", "שלום\n");
}

#[test]
fn test_print() {
    assert_prints("הדפס מילים מלא", "מילים מלא\n");
}

#[test]
fn test_variable_definition() {
    assert_prints("\nא = 5\nהדפס א", "5\n");
}

#[test]
fn test_name_error() {
    let (result, output) = run_program("\nא = 5\nאם ב > 5:\n    הדפס שלום");
    match result {
        Err(err @ Error::Name(_)) => assert_eq!(err.to_string(), "ב not found"),
        other => panic!("expected a name error, got {other:?}"),
    }
    assert_eq!(output, "");
}

#[test]
fn test_blank_lines_are_inert() {
    let dense = "א = 3\nאם א < 4:\n    הדפס כן\nהדפס א";
    let sparse = "\n\nא = 3\n   \nאם א < 4:\n\n\t\n    הדפס כן\n\nהדפס א\n\n";
    let (_, expected) = run_program(dense);
    assert_eq!(expected, "כן\n3\n");
    assert_prints(sparse, &expected);
}

#[test]
fn test_longer_program() {
    let source = "\
שם = דנה
גיל = 30
אם גיל > 18:
    הדפס מבוגר
אם גיל < 18:
    הדפס ילד
אם שם == שם:
    הדפס שם
אם שקר:
    הדפס לעולם לא
הדפס סוף";
    assert_prints(source, "מבוגר\nדנה\nסוף\n");
}

#[test]
fn test_condition_can_bind_for_later_statements() {
    let source = "א = 1\nאם א < 2:\n    ב = כן\nאם ב == ב:\n    הדפס ב";
    assert_prints(source, "כן\n");
}

#[test]
fn test_stdout_entry_point() {
    assert!(hebrewpp::run("א = 5\nאם שקר:\n    הדפס א").is_ok());
    assert!(matches!(hebrewpp::run("???"), Err(Error::Syntax { .. })));
}
