use std::fmt;
use std::io;
use std::path::PathBuf;

use services::{AppServices, Clock};
use storage::DEFAULT_DATA_FILE;
use tracker_core::model::ProblemDraft;
use ui::views::{ViewError, dashboard_view, list_view, submit_draft};
use ui::{AppContext, Console, run_menu};

mod logging;

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    UnknownCommand(String),
    InvalidDataPath { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::UnknownCommand(cmd) => write!(f, "unknown subcommand: {cmd}"),
            ArgsError::InvalidDataPath { raw } => write!(f, "invalid --data value: {raw:?}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  app [menu]      [--data <file>] [--log <filter>]");
    eprintln!("  app add         --title <t> --date <YYYY-MM-DD>");
    eprintln!("                  [--difficulty <d>] [--tags <a,b>] [--notes <n>]");
    eprintln!("  app list        [--data <file>]");
    eprintln!("  app dashboard   [--data <file>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --data {DEFAULT_DATA_FILE}");
    eprintln!("  --log  {}", logging::DEFAULT_LOG_FILTER);
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  TRACKER_DATA_FILE, TRACKER_LOG");
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Menu,
    Add(ProblemDraft),
    List,
    Dashboard,
    Help,
}

#[derive(Debug)]
struct Args {
    command: Command,
    data_file: PathBuf,
    log_filter: String,
}

impl Args {
    /// Parse argv (without the program name) over environment defaults.
    fn parse(
        argv: impl IntoIterator<Item = String>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ArgsError> {
        let mut data_file = env("TRACKER_DATA_FILE")
            .filter(|value| !value.trim().is_empty())
            .map_or_else(|| PathBuf::from(DEFAULT_DATA_FILE), PathBuf::from);
        let mut log_filter =
            env("TRACKER_LOG").unwrap_or_else(|| logging::DEFAULT_LOG_FILTER.to_owned());

        let mut args = argv.into_iter().peekable();
        // Default behavior: the interactive menu when no subcommand is given.
        let has_subcommand = args.peek().is_some_and(|first| !first.starts_with('-'));
        let mut command = match args.next_if(|_| has_subcommand) {
            None => Command::Menu,
            Some(name) => match name.as_str() {
                "menu" => Command::Menu,
                "add" => Command::Add(ProblemDraft::default()),
                "list" => Command::List,
                "dashboard" => Command::Dashboard,
                "help" => Command::Help,
                _ => return Err(ArgsError::UnknownCommand(name)),
            },
        };

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--data" => {
                    let value = require_value(&mut args, "--data")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidDataPath { raw: value });
                    }
                    data_file = PathBuf::from(value);
                }
                "--log" => log_filter = require_value(&mut args, "--log")?,
                "--help" | "-h" => command = Command::Help,
                "--title" | "--difficulty" | "--tags" | "--date" | "--notes" => {
                    let Command::Add(draft) = &mut command else {
                        return Err(ArgsError::UnknownArg(arg));
                    };
                    let (flag, field) = match arg.as_str() {
                        "--title" => ("--title", &mut draft.title),
                        "--difficulty" => ("--difficulty", &mut draft.difficulty),
                        "--tags" => ("--tags", &mut draft.tags),
                        "--date" => ("--date", &mut draft.date),
                        _ => ("--notes", &mut draft.notes),
                    };
                    *field = require_value(&mut args, flag)?;
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self {
            command,
            data_file,
            log_filter,
        })
    }
}

/// Print the outcome of a one-shot command; failures go to stderr.
fn report(result: Result<String, ViewError>) -> bool {
    match result {
        Ok(text) => {
            println!("{}", text.trim_end());
            true
        }
        Err(err) => {
            eprintln!("{}", err.message());
            false
        }
    }
}

/// Exit status for the outcome of `run`: 0 on success, 1 when the action
/// failed, 2 when the command line was rejected.
fn exit_code(outcome: &Result<bool, Box<dyn std::error::Error>>) -> i32 {
    match outcome {
        Ok(true) => 0,
        Ok(false) => 1,
        Err(_) => 2,
    }
}

async fn run() -> Result<bool, Box<dyn std::error::Error>> {
    let parsed = Args::parse(std::env::args().skip(1), |key| std::env::var(key).ok()).map_err(
        |e| {
            eprintln!("{e}");
            print_usage();
            e
        },
    )?;

    if parsed.command == Command::Help {
        print_usage();
        return Ok(true);
    }

    if let Err(e) = logging::init_logging(&parsed.log_filter) {
        eprintln!("logging disabled: {e}");
    }
    tracing::debug!(data_file = %parsed.data_file.display(), "starting");

    let services = AppServices::json_file(&parsed.data_file, Clock::system());
    let ctx = AppContext::new(&services);

    let ok = match parsed.command {
        Command::Menu => {
            let stdin = io::stdin();
            let mut console = Console::new(stdin.lock(), io::stdout());
            match run_menu(&ctx, &mut console).await {
                Ok(()) => true,
                Err(e) => {
                    eprintln!("terminal error: {e}");
                    false
                }
            }
        }
        Command::Add(draft) => report(submit_draft(&ctx, draft).await),
        Command::List => report(list_view(&ctx).await),
        Command::Dashboard => report(dashboard_view(&ctx).await),
        Command::Help => true,
    };
    Ok(ok)
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let outcome = run().await;
    if let Err(err) = &outcome {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
    }
    let code = exit_code(&outcome);
    if code != 0 {
        std::process::exit(code);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Result<Args, ArgsError> {
        Args::parse(argv.iter().map(|s| (*s).to_owned()), |_| None)
    }

    #[test]
    fn no_arguments_opens_menu_with_defaults() {
        let args = parse(&[]).unwrap();
        assert_eq!(args.command, Command::Menu);
        assert_eq!(args.data_file, PathBuf::from(DEFAULT_DATA_FILE));
        assert_eq!(args.log_filter, logging::DEFAULT_LOG_FILTER);
    }

    #[test]
    fn global_flags_without_subcommand_open_menu() {
        let args = parse(&["--data", "/tmp/p.json", "--log", "debug"]).unwrap();
        assert_eq!(args.command, Command::Menu);
        assert_eq!(args.data_file, PathBuf::from("/tmp/p.json"));
        assert_eq!(args.log_filter, "debug");
    }

    #[test]
    fn add_collects_draft_fields() {
        let args = parse(&[
            "add",
            "--title",
            "Two Sum",
            "--difficulty",
            "Easy",
            "--tags",
            "array,hash map",
            "--date",
            "2024-01-01",
            "--data",
            "mine.json",
        ])
        .unwrap();
        let Command::Add(draft) = args.command else {
            panic!("expected add command");
        };
        assert_eq!(draft.title, "Two Sum");
        assert_eq!(draft.difficulty, "Easy");
        assert_eq!(draft.tags, "array,hash map");
        assert_eq!(draft.date, "2024-01-01");
        assert_eq!(draft.notes, "");
        assert_eq!(args.data_file, PathBuf::from("mine.json"));
    }

    #[test]
    fn add_flags_are_rejected_on_other_commands() {
        assert!(matches!(
            parse(&["list", "--title", "x"]),
            Err(ArgsError::UnknownArg(arg)) if arg == "--title"
        ));
    }

    #[test]
    fn env_supplies_defaults_and_flags_override() {
        let env = |key: &str| match key {
            "TRACKER_DATA_FILE" => Some("/env/problems.json".to_owned()),
            "TRACKER_LOG" => Some("info".to_owned()),
            _ => None,
        };
        let args = Args::parse(["list".to_owned()], env).unwrap();
        assert_eq!(args.data_file, PathBuf::from("/env/problems.json"));
        assert_eq!(args.log_filter, "info");

        let args = Args::parse(
            ["list".to_owned(), "--data".to_owned(), "cli.json".to_owned()],
            env,
        )
        .unwrap();
        assert_eq!(args.data_file, PathBuf::from("cli.json"));
    }

    #[test]
    fn bad_input_is_reported() {
        assert!(matches!(
            parse(&["frobnicate"]),
            Err(ArgsError::UnknownCommand(cmd)) if cmd == "frobnicate"
        ));
        assert!(matches!(
            parse(&["--data"]),
            Err(ArgsError::MissingValue { flag: "--data" })
        ));
        assert!(matches!(
            parse(&["--data", "  "]),
            Err(ArgsError::InvalidDataPath { .. })
        ));
    }

    #[test]
    fn report_tells_success_from_failure() {
        assert!(report(Ok("Total Problems Solved: 0".to_owned())));
        assert!(!report(Err(ViewError::Load("io error: denied".into()))));
        assert!(!report(Err(ViewError::InvalidDate)));
    }

    #[test]
    fn outcomes_map_to_exit_codes() {
        assert_eq!(exit_code(&Ok(true)), 0);
        assert_eq!(exit_code(&Ok(false)), 1);

        let rejected: Box<dyn std::error::Error> = Box::new(parse(&["frobnicate"]).unwrap_err());
        assert_eq!(exit_code(&Err(rejected)), 2);
    }

    #[test]
    fn help_flag_wins() {
        assert_eq!(parse(&["list", "-h"]).unwrap().command, Command::Help);
    }
}
