//! End-to-end tests over real files.
//!
//! The library tests call the command handlers directly; the `binary`
//! module runs the built `comv` executable to check output and exit status.

use std::fs;
use std::path::{Path, PathBuf};

use comvc::commands::{check_script, explain_error, lex_script, render_results, run_files};
use comvc::{Problem, RunConfig};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

struct Fixture {
    dir: TempDir,
}

impl Fixture {
    fn new() -> Self {
        Fixture {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    fn file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    fn two_parties(&self) -> Vec<PathBuf> {
        vec![
            self.file("a.csv", "key,value\nA,10\nB,20\n"),
            self.file("b.csv", "key,value\nA,30\nC,40\n"),
        ]
    }
}

fn config() -> RunConfig {
    RunConfig {
        seed: Some(1),
        ..RunConfig::default()
    }
}

// === run ===

#[test]
fn join_over_two_parties() {
    let fx = Fixture::new();
    let script = fx.file("q.comv", "comv\nif 1 equal sum 2\n");
    assert_eq!(
        run_files(&fx.two_parties(), &script, &config()).unwrap(),
        vec![vec![40]]
    );
}

#[test]
fn aggregate_over_one_party() {
    let fx = Fixture::new();
    let script = fx.file("q.comv", "comv\nsum 2\n");
    let data = &fx.two_parties()[..1];
    assert_eq!(run_files(data, &script, &config()).unwrap(), vec![vec![30]]);
}

#[test]
fn several_statements_in_order() {
    let fx = Fixture::new();
    let script = fx.file("q.comv", "comv\nsum 2\nif 1 equal sum 2\n$Fsum 2\n");
    let sequential = RunConfig {
        parallel: false,
        ..config()
    };
    assert_eq!(
        run_files(&fx.two_parties(), &script, &sequential).unwrap(),
        vec![vec![100], vec![40], vec![100]]
    );
}

#[test]
fn results_render_per_statement() {
    assert_eq!(
        render_results(&[vec![40], vec![], vec![1, 2]]),
        "Current operation results:\n\tResult = 40\n\
         Current operation results:\n\
         Current operation results:\n\tResult = 1\n\tResult = 2\n"
    );
}

#[test]
fn bad_script_fails_before_reading_data() {
    let fx = Fixture::new();
    let script = fx.file("q.comv", "vmoc\nsum 2\n");
    let missing = vec![fx.dir.path().join("missing.csv")];
    assert!(matches!(
        run_files(&missing, &script, &config()),
        Err(Problem::Lex { .. })
    ));
}

#[test]
fn missing_data_file_names_the_path() {
    let fx = Fixture::new();
    let script = fx.file("q.comv", "comv\nsum 2\n");
    let missing = fx.dir.path().join("missing.csv");
    let Err(Problem::Read { path, .. }) = run_files(&[missing.clone()], &script, &config()) else {
        panic!("expected a read problem");
    };
    assert_eq!(path, missing);
}

#[test]
fn no_data_files() {
    let fx = Fixture::new();
    let script = fx.file("q.comv", "comv\nsum 2\n");
    assert!(matches!(
        run_files(&[], &script, &config()),
        Err(Problem::Eval(comv_eval::EvalError::NoRecords))
    ));
}

#[test]
fn classify_problem_names_the_failing_file() {
    let fx = Fixture::new();
    let script = fx.file("q.comv", "comv\nif 3 equal sum 2\n");
    let data = vec![
        fx.file("wide.csv", "a,b,c\n1,2,K\n"),
        fx.file("narrow.csv", "a,b\n1,2\n"),
    ];
    let Err(Problem::Classify { path, .. }) = run_files(&data, &script, &config()) else {
        panic!("expected a classify problem");
    };
    assert_eq!(path, data[1]);
}

#[test]
fn column_past_the_data_names_the_file() {
    let fx = Fixture::new();
    let script = fx.file("q.comv", "comv\nsum 5\n");
    let data = vec![fx.file("a.csv", "k,v\nA,10\n")];
    let problem = run_files(&data, &script, &config()).unwrap_err();
    assert_eq!(problem.code(), comv_diagnostic::ErrorCode::E1003);
    let Problem::Data { path, .. } = problem else {
        panic!("expected a data problem");
    };
    assert_eq!(path, data[0]);
}

#[test]
fn files_of_different_widths_name_the_odd_one() {
    let fx = Fixture::new();
    let script = fx.file("q.comv", "comv\nsum 2\n");
    let data = vec![
        fx.file("a.csv", "k,v\nA,10\n"),
        fx.file("b.csv", "k,v,w\nA,10,1\n"),
    ];
    let problem = run_files(&data, &script, &config()).unwrap_err();
    assert_eq!(problem.code(), comv_diagnostic::ErrorCode::E1006);
    let Problem::Data { path, .. } = problem else {
        panic!("expected a data problem");
    };
    assert_eq!(path, data[1]);
}

#[test]
fn ragged_row_is_rejected_before_sealing() {
    let fx = Fixture::new();
    let script = fx.file("q.comv", "comv\nsum 2\n");
    let data = vec![fx.file("a.csv", "k,v\nA,10\nB\n")];
    let problem = run_files(&data, &script, &config()).unwrap_err();
    assert_eq!(problem.code(), comv_diagnostic::ErrorCode::E1005);
}

#[test]
fn value_above_modulus_is_a_capability_problem() {
    let fx = Fixture::new();
    let script = fx.file("q.comv", "comv\nsum 1\n");
    let data = vec![fx.file("a.csv", "v\n100\n")];
    let small = RunConfig {
        plain_modulus: 97,
        ..config()
    };
    let problem = run_files(&data, &script, &small).unwrap_err();
    assert_eq!(problem.code(), comv_diagnostic::ErrorCode::E3001);
}

// === lex, check, explain ===

#[test]
fn lex_lists_tokens_with_lines() {
    let fx = Fixture::new();
    let script = fx.file("q.comv", "comv\nif 1 equal\n\nsum $F2\n");
    let out = lex_script(&script).unwrap();
    assert!(out.contains("(5 tokens)"));
    assert!(out.contains("     2  if\n"));
    assert!(out.contains("     4  2\n"));
}

#[test]
fn check_describes_statements_and_layout() {
    let fx = Fixture::new();
    let script = fx.file("q.comv", "comv\nif 1 equal sum 2\nsum 3\n");
    let out = check_script(&script).unwrap();
    assert!(out.contains("2 statement(s)"));
    assert!(out.contains("Public columns: 1\n"));
    assert!(out.contains("if 1 equal sum 2"));
    assert!(out.contains("aggregate"));
}

#[test]
fn check_reports_parse_problems() {
    let fx = Fixture::new();
    let script = fx.file("q.comv", "comv\navg 2\n");
    let problem = check_script(&script).unwrap_err();
    assert_eq!(problem.code(), comv_diagnostic::ErrorCode::E0007);
}

#[test]
fn explain_known_and_unknown_codes() {
    assert!(explain_error("e0001").unwrap().contains("Bad Script Header"));
    assert!(matches!(explain_error("E4242"), Err(Problem::Usage(_))));
}

mod binary {
    use std::process::{Command, Output};

    use super::{Fixture, Path};

    fn comv(args: &[&Path], flags: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_comv"))
            .args(flags)
            .args(args)
            .env_remove("RUST_LOG")
            .output()
            .unwrap()
    }

    #[test]
    fn run_prints_results() {
        let fx = Fixture::new();
        let data = fx.two_parties();
        let script = fx.file("q.comv", "comv\nif 1 equal sum 2\n");
        let output = comv(&[&data[0], &data[1], &script], &["run"]);
        assert!(output.status.success());
        assert_eq!(
            String::from_utf8(output.stdout).unwrap(),
            "Current operation results:\n\tResult = 40\n"
        );
    }

    #[test]
    fn run_is_the_default_command() {
        let fx = Fixture::new();
        let data = fx.two_parties();
        let script = fx.file("q.comv", "comv\nsum 2\n");
        let output = comv(&[&data[0], &script], &[]);
        assert!(output.status.success());
        assert!(String::from_utf8(output.stdout)
            .unwrap()
            .contains("Result = 30"));
    }

    fn assert_data_error(output: Output, code: &str, file: &str) {
        assert_eq!(output.status.code(), Some(1));
        let stderr = String::from_utf8(output.stderr).unwrap();
        assert!(stderr.contains(&format!("error[{code}]")), "{stderr}");
        assert!(stderr.contains(file), "{stderr}");
        assert!(!stderr.contains("bug in comv"), "{stderr}");
    }

    #[test]
    fn column_past_the_data_is_a_data_error() {
        let fx = Fixture::new();
        let data = fx.file("narrow.csv", "k,v\nA,10\n");
        let script = fx.file("q.comv", "comv\nsum 5\n");
        let output = comv(&[&data, &script], &["run", "--color=never"]);
        assert_data_error(output, "E1003", "narrow.csv");
    }

    #[test]
    fn width_mismatch_is_a_data_error() {
        let fx = Fixture::new();
        let narrow = fx.file("narrow.csv", "k,v\nA,10\n");
        let wide = fx.file("wide.csv", "k,v,w\nA,10,1\n");
        let script = fx.file("q.comv", "comv\nsum 2\n");
        let output = comv(&[&narrow, &wide, &script], &["run", "--color=never"]);
        assert_data_error(output, "E1006", "wide.csv");
    }

    #[test]
    fn failure_exits_with_diagnostic() {
        let fx = Fixture::new();
        let data = fx.two_parties();
        let script = fx.file("q.comv", "comv\nif 1 same sum 2\n");
        let output = comv(&[&data[0], &script], &["run", "--color=never"]);
        assert_eq!(output.status.code(), Some(1));
        let stderr = String::from_utf8(output.stderr).unwrap();
        assert!(stderr.contains("error[E0005]"));
        assert!(stderr.contains("q.comv"));
    }
}
