use std::process::{Command, Output};

use pretty_assertions::assert_eq;
use temp_dir::TempDir;

const SEPARATOR: &str = "----------------------------------------------------";

fn pyrefactor(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_pyrefactor"))
        .args(args)
        .env_remove("PYREFACTOR_LOG")
        .output()
        .expect("failed to run pyrefactor")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn rewrites_the_requested_function() {
    let dir = TempDir::new().unwrap();
    let file = dir.child("sample.py");
    let original = "def f(): print(1); return 2\n";
    std::fs::write(&file, original).unwrap();
    let path = file.to_str().unwrap();

    let output = pyrefactor(&[path, "f"]);

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    let expected = format!(
        "--- Refactoring function 'f' in '{path}' ---\n\
         Refactored function:\n\
         def f():\n    return (2, [1])\n\
         {SEPARATOR}\n\
         \n\
         Note: This is a simplified refactoring. It has significant limitations,\n\
         such as only handling simple print statements and single return paths.\n"
    );
    assert_eq!(stdout(&output), expected);
    assert_eq!(std::fs::read_to_string(&file).unwrap(), original);
}

#[test]
fn unknown_function_exits_with_error() {
    let dir = TempDir::new().unwrap();
    let file = dir.child("only_f.py");
    std::fs::write(&file, "def f():\n    return 1\n").unwrap();
    let path = file.to_str().unwrap();

    let output = pyrefactor(&[path, "g"]);

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        stderr(&output),
        format!("Error: Function 'g' not found in '{path}'.\n")
    );
}

#[test]
fn unreadable_file_exits_with_error() {
    let dir = TempDir::new().unwrap();
    let missing = dir.child("missing.py");
    let path = missing.to_str().unwrap();

    let output = pyrefactor(&[path, "f"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(
        stderr(&output).starts_with(&format!("Error: Could not read file '{path}': ")),
        "stderr: {}",
        stderr(&output)
    );
}

#[test]
fn syntax_error_exits_with_error() {
    let dir = TempDir::new().unwrap();
    let file = dir.child("broken.py");
    std::fs::write(&file, "def f(:\n").unwrap();
    let path = file.to_str().unwrap();

    let output = pyrefactor(&[path, "f"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).starts_with(&format!("Error: Could not parse file '{path}': ")));
    assert!(stderr(&output).contains("at 1:7"));
}

#[test]
fn wrong_argument_count_prints_usage() {
    let output = pyrefactor(&["only-one-arg.py"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Usage:"), "stderr: {}", stderr(&output));
    assert!(stdout(&output).is_empty());
}

#[test]
fn json_report() {
    let dir = TempDir::new().unwrap();
    let file = dir.child("branches.py");
    std::fs::write(
        &file,
        "def f(x):\n    if x:\n        print('a')\n        return 1\n    print('b')\n    return 2\n",
    )
    .unwrap();
    let path = file.to_str().unwrap();

    let output = pyrefactor(&[path, "f", "--mode", "scoped", "--json"]);

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    let report: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(report["function"], "f");
    assert_eq!(report["file"], path);
    assert_eq!(report["mode"], "scoped");
    assert_eq!(report["removed_prints"], 2);
    assert_eq!(report["rewritten_returns"], 2);
    assert_eq!(
        report["source"],
        "def f(x):\n    if x:\n        return (1, ['a'])\n    return (2, ['b'])"
    );
}

#[test]
fn modern_syntax_elsewhere_in_the_file_is_accepted() {
    let dir = TempDir::new().unwrap();
    let file = dir.child("modern.py");
    std::fs::write(
        &file,
        "\
def other(cmd):
  match cmd:
    case 1: pass
  with (open(a) as x, open(b) as y):
    pass

def f():
    print('ok')
    return True
",
    )
    .unwrap();
    let path = file.to_str().unwrap();

    let output = pyrefactor(&[path, "f"]);

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("def f():\n    return (True, ['ok'])\n"));
}
