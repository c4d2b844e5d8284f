//! Fabula CLI entry point: plays the demo story in the terminal.

use std::env;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use fabula_engine::{Engine, EngineConfig};
use fabula_runtime::{FileStore, RustylineEditor, ScriptedEditor, Session, TerminalOutput};
use tracing_subscriber::EnvFilter;

/// CLI configuration parsed from arguments.
#[derive(Default)]
struct CliConfig {
    show_help: bool,
    show_version: bool,
    first_person: bool,
    print_location_names: bool,
    plain: bool,
    seed: Option<u64>,
    save: Option<PathBuf>,
    script: Option<PathBuf>,
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

    let mut args = args.into_iter().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "--first-person" => config.first_person = true,
            "--print-location-names" => config.print_location_names = true,
            "--plain" => config.plain = true,
            "--seed" => {
                let value = args.next().ok_or("--seed requires a value")?;
                config.seed = Some(
                    value
                        .parse()
                        .map_err(|_| format!("invalid --seed value: {value}"))?,
                );
            }
            "--save" => {
                let value = args.next().ok_or("--save requires a path")?;
                config.save = Some(PathBuf::from(value));
            }
            "--script" => {
                let value = args.next().ok_or("--script requires a path")?;
                config.script = Some(PathBuf::from(value));
            }
            other => return Err(format!("unknown option: {other}").into()),
        }
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
        println!("fabula {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let engine = build_engine(&config);

    if let Some(path) = &config.script {
        let script = fs::read_to_string(path)?;
        let editor = ScriptedEditor::new(script.lines()).with_echo();
        Session::new(engine, editor).run()?;
    } else {
        Session::new(engine, RustylineEditor::new()?).run()?;
    }
    Ok(())
}

fn build_engine(config: &CliConfig) -> Engine {
    let mut settings = EngineConfig::default()
        .with_third_person(!config.first_person)
        .with_print_location_names(config.print_location_names);
    if let Some(seed) = config.seed {
        settings = settings.with_rng_seed(seed);
    }

    let output = if config.plain {
        TerminalOutput::stdout().plain()
    } else {
        TerminalOutput::stdout()
    };
    let save = config
        .save
        .clone()
        .unwrap_or_else(|| PathBuf::from("fabula.sav"));

    let mut engine = Engine::new(settings)
        .with_output(Box::new(output))
        .with_store(Box::new(FileStore::new(save)));
    engine.add_module(fabula_stdlib::english());
    engine.add_module(fabula_runtime::demo());
    engine.start_game();
    engine
}

fn print_help() {
    println!(
        "\x1b[1mFabula\x1b[0m - Interactive fiction command interpreter

\x1b[1mUSAGE:\x1b[0m
    fabula [OPTIONS]

\x1b[1mOPTIONS:\x1b[0m
    -h, --help                Print this help message
    -V, --version             Print version information
    --first-person            Address the player as \"I\" instead of \"you\"
    --print-location-names    Print a location's name above its description
    --plain                   Do not style output with terminal escapes
    --seed <N>                Seed the random number generator
    --save <PATH>             Save slot file (default: fabula.sav)
    --script <FILE>           Read commands from a file instead of the terminal

\x1b[1mENVIRONMENT:\x1b[0m
    RUST_LOG                  Log filter for diagnostics on stderr (default: warn)

\x1b[1mEXAMPLES:\x1b[0m
    fabula
    fabula --first-person --seed 7
    fabula --script walkthrough.txt --plain"
    );
}
