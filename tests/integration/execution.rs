use std::process::{Command, Output};

fn run_binary(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_fibseq"))
        .args(args)
        .output()
        .expect("Failed to spawn fibseq")
}

#[test]
fn test_prints_first_ten_numbers() {
    let output = run_binary(&[]);
    assert!(output.status.success());
    assert_eq!(output.status.code(), Some(0));

    let expected = "\
First 10 Fibonacci numbers:
F(0) = 0
F(1) = 1
F(2) = 1
F(3) = 2
F(4) = 3
F(5) = 5
F(6) = 8
F(7) = 13
F(8) = 21
F(9) = 34
";
    assert_eq!(String::from_utf8_lossy(&output.stdout), expected);
    assert!(output.stderr.is_empty());
}

#[test]
fn test_output_is_deterministic() {
    assert_eq!(run_binary(&[]).stdout, run_binary(&[]).stdout);
}

#[test]
fn test_verbose_logs_stay_on_stderr() {
    let quiet = run_binary(&[]);
    let verbose = run_binary(&["--verbose"]);
    assert!(verbose.status.success());
    assert_eq!(verbose.stdout, quiet.stdout);

    let stderr = String::from_utf8_lossy(&verbose.stderr);
    assert!(stderr.contains("DEBUG"), "stderr: {}", stderr);
    assert!(stderr.contains("generated fibonacci sequence"), "stderr: {}", stderr);
}
