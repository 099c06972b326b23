//! comv CLI
//!
//! Joint aggregates over the sealed columns of several data files.

use std::io::IsTerminal;
use std::path::{Path, PathBuf};

use comv_diagnostic::{ColorMode, DiagnosticEmitter, TerminalEmitter};
use comvc::commands::{check_script, explain_error, lex_script, render_results, run_files};
use comvc::{init_tracing, Problem, RunConfig};

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "run" => run(&args[2..]),
        "lex" => {
            let (config, paths) = options(&args[2..]);
            let [path] = paths.as_slice() else {
                usage_error(&config, "Usage: comv lex <script>");
            };
            finish(&config, lex_script(Path::new(path)).map(|out| print!("{out}")));
        }
        "check" => {
            let (config, paths) = options(&args[2..]);
            let [path] = paths.as_slice() else {
                usage_error(&config, "Usage: comv check <script>");
            };
            finish(&config, check_script(Path::new(path)).map(|out| print!("{out}")));
        }
        "--explain" | "explain" => {
            let (config, codes) = options(&args[2..]);
            let [code] = codes.as_slice() else {
                usage_error(&config, "Usage: comv explain <ERROR_CODE>");
            };
            finish(&config, explain_error(code).map(|doc| println!("{doc}")));
        }
        "help" | "--help" | "-h" => print_usage(),
        "version" | "--version" | "-V" => {
            println!("comv {}", env!("CARGO_PKG_VERSION"));
        }
        // `comv a.csv b.csv query.comv` is `comv run a.csv b.csv query.comv`.
        _ => run(&args[1..]),
    }
}

fn run(args: &[String]) {
    let (config, mut paths) = options(args);
    let Some(script) = paths.pop() else {
        usage_error(&config, "Usage: comv run <data>... <script>");
    };
    let data: Vec<PathBuf> = paths.into_iter().map(PathBuf::from).collect();
    let result = run_files(&data, Path::new(&script), &config);
    finish(&config, result.map(|groups| print!("{}", render_results(&groups))));
}

/// Parse options, or report the problem and exit.
fn options(args: &[String]) -> (RunConfig, Vec<String>) {
    match RunConfig::from_args(args) {
        Ok(parsed) => parsed,
        Err(problem) => report(ColorMode::Auto, &problem),
    }
}

fn finish(config: &RunConfig, result: Result<(), Problem>) {
    if let Err(problem) = result {
        report(config.color, &problem);
    }
}

fn usage_error(config: &RunConfig, usage: &str) -> ! {
    report(config.color, &Problem::Usage(usage.to_owned()))
}

/// Print `problem` as a diagnostic on stderr and exit with status 1.
fn report(color: ColorMode, problem: &Problem) -> ! {
    let mut emitter = TerminalEmitter::stderr(color, std::io::stderr().is_terminal());
    emitter.emit(&problem.into_diagnostic());
    emitter.emit_summary(1);
    emitter.flush();
    std::process::exit(1);
}

fn print_usage() {
    println!("comv: joint aggregates over sealed columns");
    println!();
    println!("Usage: comv <command> [options]");
    println!();
    println!("Commands:");
    println!("  run <data>... <script>   Run a script over data files (default command)");
    println!("  check <script>           Parse a script and show its statements");
    println!("  lex <script>             Show a script's tokens");
    println!("  explain <code>           Explain an error code (e.g., E0005)");
    println!("  help                     Show this help message");
    println!("  version                  Show version information");
    println!();
    println!("Options:");
    println!("  --no-parallel            Classify data files one at a time");
    println!("  --color=<mode>           Diagnostics color: auto, always, never");
    println!("  --plain-modulus=<n>      Sealing plaintext modulus (default: 1032193)");
    println!("  --seed=<n>               Fixed key seed for reproducible runs");
    println!();
    println!("Logging:");
    println!("  RUST_LOG=comv_eval=debug comv run ...");
    println!();
    println!("Examples:");
    println!("  comv run a.csv b.csv query.comv");
    println!("  comv a.csv query.comv          # `run` is implied");
    println!("  comv check query.comv");
    println!("  comv explain E0005");
}
