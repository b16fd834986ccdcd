//! Keyline CLI entry point.

use keyline_dispatch::Dispatcher;
use keyline_runtime::{Repl, ReplConfig, register_demo_commands};
use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

/// CLI configuration parsed from arguments.
#[derive(Default)]
struct CliConfig {
    files: Vec<PathBuf>,
    batch_mode: bool,
    show_help: bool,
    show_version: bool,
    no_banner: bool,
    stop_on_error: bool,
    prompt: Option<String>,
    // Logging flags
    verbose: bool,
    trace_match: bool,
}

impl CliConfig {
    fn log_filter(&self) -> &'static str {
        if self.trace_match {
            "keyline_dispatch=trace"
        } else if self.verbose {
            "info"
        } else {
            "warn"
        }
    }

    fn repl_config(&self) -> ReplConfig {
        let mut config = if self.batch_mode {
            ReplConfig::batch()
        } else {
            ReplConfig::new()
        };
        if let Some(prompt) = &self.prompt {
            config = config.with_prompt(prompt.clone());
        }
        // Scripts establish context, so skip the banner after them
        if self.no_banner || !self.files.is_empty() {
            config = config.with_banner(false);
        }
        if self.stop_on_error {
            config = config.with_stop_on_error(true);
        }
        config
    }
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

fn parse_args(args: Vec<String>) -> Result<CliConfig, Box<dyn std::error::Error>> {
    let mut config = CliConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "-b" | "--batch" => config.batch_mode = true,
            "-v" | "--verbose" => config.verbose = true,
            "--no-banner" => config.no_banner = true,
            "--stop-on-error" => config.stop_on_error = true,
            "--trace-match" => config.trace_match = true,
            "--prompt" => {
                i += 1;
                if i >= args.len() {
                    return Err("--prompt requires a value".into());
                }
                config.prompt = Some(args[i].clone());
            }
            arg if arg.starts_with('-') => {
                return Err(format!("unknown option: {arg}").into());
            }
            path => config.files.push(PathBuf::from(path)),
        }
        i += 1;
    }

    Ok(config)
}

fn run(args: Vec<String>) -> Result<(), Box<dyn std::error::Error>> {
    let config = parse_args(args)?;

    if config.show_help {
        print_help();
        return Ok(());
    }

    if config.show_version {
        println!("keyline {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(config.log_filter()))
        .init();

    let dispatcher = Dispatcher::new();
    register_demo_commands(&dispatcher);
    log::info!("registered {} command keyword(s)", dispatcher.keywords().len());

    let mut repl = Repl::new(dispatcher, config.repl_config())?;

    let mut failed = 0;
    for file in &config.files {
        failed += repl.execute_script(file)?.failed;
    }

    if config.batch_mode {
        if failed > 0 {
            return Err(format!("{failed} line(s) failed").into());
        }
        return Ok(());
    }

    repl.run()?;
    Ok(())
}

fn print_help() {
    println!(
        "\x1b[1mKeyline\x1b[0m - Grammar-driven command dispatcher

\x1b[1mUSAGE:\x1b[0m
    keyline [OPTIONS] [FILES...]

\x1b[1mARGUMENTS:\x1b[0m
    [FILES...]    Command scripts to run before starting the REPL

\x1b[1mOPTIONS:\x1b[0m
    -h, --help          Print help information
    -V, --version       Print version information
    -b, --batch         Run scripts and exit (no REPL), stopping at the first failure
    --prompt TEXT       Use TEXT as the input prompt (default \">>> \")
    --no-banner         Do not print the welcome banner
    --stop-on-error     Stop a script at its first failing line

\x1b[1mLOGGING OPTIONS:\x1b[0m
    -v, --verbose       Log executed commands
    --trace-match       Trace overload elimination while matching
                        (RUST_LOG overrides both)

\x1b[1mEXAMPLES:\x1b[0m
    keyline                     Start interactive REPL
    keyline setup.kl            Run setup.kl, then start REPL
    keyline -b setup.kl         Run setup.kl and exit

\x1b[1mREPL COMMANDS:\x1b[0m
    help                 List every command signature
    help KEYWORD         List the overloads of KEYWORD
    exit, quit           Leave the REPL
    Ctrl+D               Exit REPL
    Ctrl+C               Cancel current input"
    );
}
