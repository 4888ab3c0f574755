// roicalc CLI - manual vs. AI-automated invoice processing cost comparison

mod exit_codes;

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use roicalc_cli::input::{parse_assignment, parse_watch_line, InputError, WatchCommand};
use roicalc_cli::report;
use roicalc_config::{ConfigError, Scenario, Settings};
use roicalc_engine::{
    Calculator, CurrencyFormat, ParamKey, RecalculatedEvent, ResultDisplay, RoiResult,
};

use exit_codes::{
    config_exit_code, EXIT_CONFIG_INVALID, EXIT_CONFIG_PARSE, EXIT_ERROR, EXIT_IO, EXIT_SUCCESS,
    EXIT_USAGE,
};

#[derive(Parser)]
#[command(name = "roicalc")]
#[command(about = "Compare manual and AI-automated invoice processing costs")]
#[command(long_version = long_version())]
#[command(version)]
#[command(subcommand_required = false)]
struct Cli {
    /// Settings file (default: <config dir>/roicalc/settings.json)
    #[arg(long, global = true, env = "ROICALC_SETTINGS", value_name = "FILE")]
    settings: Option<PathBuf>,

    /// Log more to stderr (-v info, -vv debug). RUST_LOG takes precedence.
    #[arg(long, short = 'v', global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the comparison once and print it
    #[command(after_help = "\
Examples:
  roicalc calc
  roicalc calc --set monthlyVolume=2500 --set hourlyCost=45
  roicalc calc --scenario high-volume.toml --json | jq .display")]
    Calc {
        /// Scenario file (TOML) applied on top of the defaults
        #[arg(long, value_name = "FILE")]
        scenario: Option<PathBuf>,

        /// Set one input, e.g. hourlyCost=45. Repeatable; applied in order.
        #[arg(long = "set", value_name = "KEY=VALUE")]
        set: Vec<String>,

        /// Print a single JSON object instead of the report
        #[arg(long)]
        json: bool,
    },

    /// Read KEY=VALUE lines from stdin and re-print results after each change
    #[command(after_help = "\
Input lines:
  KEY=VALUE   update one input and recalculate
  reset       restore the starting values
  show        print the current results again
  quit        stop (end of input also stops)

Examples:
  roicalc watch
  printf 'monthlyVolume=2000\\nhourlyCost=55\\n' | roicalc watch --json")]
    Watch {
        /// Scenario file (TOML) used as the starting values
        #[arg(long, value_name = "FILE")]
        scenario: Option<PathBuf>,

        /// Print one JSON object per update (NDJSON)
        #[arg(long)]
        json: bool,
    },

    /// List the input parameters with their defaults
    Params {
        #[arg(long)]
        json: bool,
    },

    /// Settings file management
    #[command(subcommand)]
    Config(ConfigCommands),
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Print the settings file path
    Path,
    /// Print the effective settings as JSON
    Show,
    /// Write a commented default settings file if none exists
    Init,
}

fn long_version() -> &'static str {
    if cfg!(debug_assertions) {
        concat!(
            env!("CARGO_PKG_VERSION"),
            " (", env!("GIT_COMMIT_HASH"), ")",
            "\nengine:  roicalc-engine ", env!("CARGO_PKG_VERSION"),
            "\nbuild:   debug",
            "\ntarget:  ", env!("TARGET"),
        )
    } else {
        concat!(
            env!("CARGO_PKG_VERSION"),
            " (", env!("GIT_COMMIT_HASH"), ")",
            "\nengine:  roicalc-engine ", env!("CARGO_PKG_VERSION"),
            "\nbuild:   release",
            "\ntarget:  ", env!("TARGET"),
        )
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let settings_path = cli.settings.as_deref();
    let result = match cli.command {
        None => {
            eprintln!("Usage: roicalc <command> [options]");
            eprintln!("       roicalc --help for more information");
            Ok(())
        }
        Some(Commands::Calc { scenario, set, json }) => {
            cmd_calc(settings_path, scenario.as_deref(), &set, json)
        }
        Some(Commands::Watch { scenario, json }) => {
            cmd_watch(settings_path, scenario.as_deref(), json)
        }
        Some(Commands::Params { json }) => cmd_params(json),
        Some(Commands::Config(command)) => match command {
            ConfigCommands::Path => cmd_config_path(settings_path),
            ConfigCommands::Show => cmd_config_show(settings_path),
            ConfigCommands::Init => cmd_config_init(settings_path),
        },
    };

    match result {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(CliError { code, message, hint }) => {
            if !message.is_empty() {
                eprintln!("error: {}", message);
            }
            if let Some(hint) = hint {
                eprintln!("hint:  {}", hint);
            }
            ExitCode::from(code)
        }
    }
}

#[derive(Debug)]
pub struct CliError {
    pub code: u8,
    pub message: String,
    pub hint: Option<String>,
}

impl CliError {
    pub fn io(msg: impl Into<String>) -> Self {
        Self { code: EXIT_IO, message: msg.into(), hint: None }
    }

    pub fn general(msg: impl Into<String>) -> Self {
        Self { code: EXIT_ERROR, message: msg.into(), hint: None }
    }

    pub fn config(err: ConfigError) -> Self {
        let code = config_exit_code(&err);
        let hint = match code {
            EXIT_CONFIG_PARSE => Some("check the file syntax".to_string()),
            EXIT_CONFIG_INVALID => match &err {
                ConfigError::UnknownParameter(_) => {
                    Some(format!("known parameters: {}", roicalc_cli::input::known_names()))
                }
                _ => None,
            },
            _ => None,
        };
        Self { code, message: err.to_string(), hint }
    }

    pub fn input(err: InputError) -> Self {
        let code = match &err {
            InputError::MissingEquals(_) => EXIT_USAGE,
            InputError::UnknownParameter(_) => EXIT_CONFIG_INVALID,
        };
        Self { code, message: err.to_string(), hint: err.hint() }
    }

    /// Add a hint to an existing error.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

// ============================================================================
// Setup shared by calc and watch
// ============================================================================

struct Setup {
    calc: Calculator,
    currency: CurrencyFormat,
    title: Option<String>,
}

fn load_settings(path: Option<&Path>) -> Result<Settings, CliError> {
    match path {
        Some(path) => Settings::load_from(path).map_err(CliError::config),
        None => Ok(Settings::load()),
    }
}

fn open_setup(settings_path: Option<&Path>, scenario: Option<&Path>) -> Result<Setup, CliError> {
    let settings = load_settings(settings_path)?;
    let mut defaults = settings.default_params().map_err(CliError::config)?;
    let mut assumptions = settings.assumptions;
    let mut title = None;

    if let Some(path) = scenario {
        let loaded = Scenario::load(path).map_err(CliError::config)?;
        defaults = loaded.apply(defaults).map_err(CliError::config)?;
        assumptions = loaded.assumptions_or(assumptions);
        title = Some(
            loaded
                .name
                .clone()
                .unwrap_or_else(|| path.display().to_string()),
        );
        log::info!("loaded scenario {}", path.display());
    }

    Ok(Setup {
        calc: Calculator::new(defaults, assumptions),
        currency: settings.display,
        title,
    })
}

fn write_stdout(text: &str) -> Result<(), CliError> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    handle
        .write_all(text.as_bytes())
        .and_then(|_| handle.flush())
        .map_err(|e| CliError::io(format!("stdout: {e}")))
}

fn to_json_string(value: &serde_json::Value, pretty: bool) -> Result<String, CliError> {
    let text = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    text.map_err(|e| CliError::general(format!("cannot serialize output: {e}")))
}

// ============================================================================
// calc
// ============================================================================

fn cmd_calc(
    settings_path: Option<&Path>,
    scenario: Option<&Path>,
    set: &[String],
    json: bool,
) -> Result<(), CliError> {
    let mut setup = open_setup(settings_path, scenario)?;

    for assignment in set {
        let (key, raw) = parse_assignment(assignment).map_err(CliError::input)?;
        setup.calc.set_input(key, &raw);
    }

    let calc = &setup.calc;
    let display = ResultDisplay::render(calc.result(), &setup.currency);

    if json {
        let value = report::calc_json(setup.title.as_deref(), calc.params(), calc.result(), &display);
        let mut text = to_json_string(&value, true)?;
        text.push('\n');
        write_stdout(&text)
    } else {
        let inputs: Vec<(ParamKey, String)> = ParamKey::ALL
            .iter()
            .map(|k| (*k, calc.input(*k).unwrap_or_default().to_string()))
            .collect();
        write_stdout(&report::render_report(setup.title.as_deref(), &inputs, &display))
    }
}

// ============================================================================
// watch
// ============================================================================

fn render_update(
    json: bool,
    revision: u64,
    changed: Option<ParamKey>,
    label: &str,
    result: &RoiResult,
    currency: &CurrencyFormat,
) -> Result<String, CliError> {
    let display = ResultDisplay::render(result, currency);
    if json {
        let value = report::update_json(revision, changed, result, &display);
        let mut line = to_json_string(&value, false)?;
        line.push('\n');
        Ok(line)
    } else {
        Ok(format!("{}\n", report::render_update(revision, label, &display)))
    }
}

fn cmd_watch(
    settings_path: Option<&Path>,
    scenario: Option<&Path>,
    json: bool,
) -> Result<(), CliError> {
    let mut setup = open_setup(settings_path, scenario)?;
    let currency = setup.currency.clone();

    write_stdout(&render_update(json, 0, None, "initial", setup.calc.result(), &currency)?)?;

    let event_currency = currency.clone();
    setup.calc.subscribe(Box::new(move |event: &RecalculatedEvent| {
        let changed = event.cause.key();
        let label = changed.map(|k| k.name()).unwrap_or("reset");
        let written = render_update(json, event.revision, changed, label, &event.result, &event_currency)
            .and_then(|text| write_stdout(&text));
        if let Err(e) = written {
            log::warn!("cannot print update {}: {}", event.revision, e.message);
        }
    }));

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut buf = Vec::new();
    let mut line_no = 0usize;
    loop {
        buf.clear();
        let read = reader
            .read_until(b'\n', &mut buf)
            .map_err(|e| CliError::io(format!("stdin: {e}")))?;
        if read == 0 {
            break;
        }
        line_no += 1;
        // Invalid UTF-8 becomes U+FFFD and coerces like any other bad value.
        let line = String::from_utf8_lossy(&buf);
        let line = line.trim_end_matches('\n').trim_end_matches('\r');
        match parse_watch_line(line) {
            Ok(WatchCommand::Set(key, raw)) => {
                setup.calc.set_input(key, &raw);
            }
            Ok(WatchCommand::Reset) => {
                setup.calc.reset();
            }
            Ok(WatchCommand::Show) => {
                let calc = &setup.calc;
                write_stdout(&render_update(
                    json,
                    calc.revision(),
                    None,
                    "current",
                    calc.result(),
                    &currency,
                )?)?;
            }
            Ok(WatchCommand::Quit) => break,
            Ok(WatchCommand::Skip) => {}
            Err(e) => {
                eprintln!("error: line {}: {}", line_no, e);
                if let Some(hint) = e.hint() {
                    eprintln!("hint:  {}", hint);
                }
            }
        }
    }

    Ok(())
}

// ============================================================================
// params
// ============================================================================

fn cmd_params(json: bool) -> Result<(), CliError> {
    if json {
        let list: Vec<serde_json::Value> = ParamKey::ALL
            .iter()
            .map(|k| {
                serde_json::json!({
                    "name": k.name(),
                    "default": k.default_value(),
                    "label": k.label(),
                })
            })
            .collect();
        let mut text = to_json_string(&serde_json::Value::Array(list), true)?;
        text.push('\n');
        return write_stdout(&text);
    }

    let name_width = ParamKey::ALL.iter().map(|k| k.name().len()).max().unwrap_or(0);
    let mut text = String::new();
    for key in ParamKey::ALL {
        let default = roicalc_engine::format::format_with_separators(&key.default_value().to_string());
        text.push_str(&format!(
            "{:<name_width$}  {:>8}  {}\n",
            key.name(),
            default,
            key.label(),
        ));
    }
    write_stdout(&text)
}

// ============================================================================
// config
// ============================================================================

fn settings_file(settings_path: Option<&Path>) -> PathBuf {
    settings_path
        .map(Path::to_path_buf)
        .unwrap_or_else(Settings::config_path)
}

fn cmd_config_path(settings_path: Option<&Path>) -> Result<(), CliError> {
    write_stdout(&format!("{}\n", settings_file(settings_path).display()))
}

fn cmd_config_show(settings_path: Option<&Path>) -> Result<(), CliError> {
    let settings = load_settings(settings_path)?;
    let value = serde_json::to_value(&settings)
        .map_err(|e| CliError::general(format!("cannot serialize settings: {e}")))?;
    let mut text = to_json_string(&value, true)?;
    text.push('\n');
    write_stdout(&text)
}

fn cmd_config_init(settings_path: Option<&Path>) -> Result<(), CliError> {
    let path = settings_file(settings_path);
    let created = Settings::init_at(&path).map_err(CliError::config)?;
    if created {
        write_stdout(&format!("created {}\n", path.display()))
    } else {
        Err(CliError::general(format!("{} already exists", path.display()))
            .with_hint("edit the existing file, or remove it and run init again"))
    }
}
