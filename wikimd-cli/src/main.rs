// Command-line interface for wikimd
//
// This binary converts wiki markup documents to Markdown using the wikimd-babel library.
// All conversion logic lives in the library; this layer only deals with files, stdin/stdout,
// configuration and logging.
//
// Converting:
//
// The source format is auto-detected from the file extension, and can be overridden with an
// explicit --from flag. Reading from stdin ("-") assumes the jira format.
// Usage:
//  wikimd <input> [--from <format>] [--output <file>]          - Convert to markdown (default)
//  wikimd convert <input> [--from <format>] [--output <file>]  - Same as above (explicit)
//  wikimd default-config                                       - Print the default configuration
//  wikimd --list-formats                                       - List available source formats
//
// Extra Parameters:
//
// Conversion rules can be overridden per run using --extra-<rule-name> <value>.
// Example:
//  wikimd page.wiki --extra-unordered-marker - --extra-fence "~~~"

use clap::{Arg, ArgAction, Command, ValueHint};
use std::collections::HashMap;
use std::fs;
use std::io::{self, Read};
use tracing_subscriber::EnvFilter;
use wikimd_babel::{ConversionRules, FormatRegistry};
use wikimd_config::{Loader, WikimdConfig};

const STDIN_PATH: &str = "-";
const STDIN_FORMAT: &str = "jira";

/// Parse extra-* arguments from command line args
/// Returns (cleaned_args_without_extras, extra_params_map)
///
/// Supports both:
/// - `--extra-<key> <value>` (explicit value)
/// - `--extra-<key>` (boolean flag, defaults to "true")
/// - `--extras-<key>` (alias for `--extra-<key>`)
fn parse_extra_args(args: &[String]) -> (Vec<String>, HashMap<String, String>) {
    let mut cleaned_args = Vec::new();
    let mut extra_params = HashMap::new();
    let mut i = 0;

    while i < args.len() {
        let arg = &args[i];

        let key_opt = if let Some(key) = arg.strip_prefix("--extra-") {
            Some(key)
        } else {
            arg.strip_prefix("--extras-")
        };

        if let Some(key) = key_opt {
            // A lone "-" is a value (the dash bullet), not a flag
            let has_value = if i + 1 < args.len() {
                let next = &args[i + 1];
                next == "-" || !next.starts_with('-')
            } else {
                false
            };

            if has_value {
                extra_params.insert(key.to_string(), args[i + 1].clone());
                i += 2;
            } else {
                extra_params.insert(key.to_string(), "true".to_string());
                i += 1;
            }
            continue;
        }

        cleaned_args.push(arg.clone());
        i += 1;
    }

    (cleaned_args, extra_params)
}

fn build_cli() -> Command {
    Command::new("wikimd")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert wiki markup to Markdown")
        .long_about(
            "wikimd converts Jira/Confluence wiki markup documents to CommonMark Markdown.\n\n\
            Commands:\n  \
            - convert: Convert a document (default command)\n  \
            - default-config: Print the built-in configuration\n\n\
            Extra Parameters:\n  \
            Use --extra-<name> <value> to override a conversion rule for one run.\n\n\
            Examples:\n  \
            wikimd page.wiki                         # Convert to markdown (stdout)\n  \
            wikimd page.wiki -o page.md              # Convert to a file\n  \
            cat page.wiki | wikimd -                 # Read from stdin\n  \
            wikimd page.wiki --extra-fence '~~~'     # Use tilde fences"
        )
        .arg_required_else_help(true)
        .subcommand_required(false)
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available source formats")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a wikimd.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log conversion details to stderr")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert a document to Markdown (default command)")
                .long_about(
                    "Convert a wiki markup document to Markdown.\n\n\
                    Supported source formats:\n  \
                    - jira: Jira/Confluence wiki markup (.jira, .wiki, .confluence)\n\n\
                    The source format is auto-detected from the file extension.\n\
                    Use - as the input to read from stdin.\n\
                    Output goes to stdout by default, or use -o to specify a file.\n\n\
                    Examples:\n  \
                    wikimd convert page.wiki                  # Convert to markdown (stdout)\n  \
                    wikimd convert notes.txt --from jira      # Explicit source format\n  \
                    wikimd page.wiki -o page.md               # 'convert' is optional"
                )
                .arg(
                    Arg::new("input")
                        .help("Input file path, or - for stdin")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("from")
                        .long("from")
                        .help("Source format (auto-detected from file extension if not specified)")
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Output file path (defaults to stdout)")
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(
            Command::new("default-config")
                .about("Output the default configuration")
                .long_about(
                    "Outputs the built-in configuration as TOML.\n\n\
                    Save it as wikimd.toml and edit the values you want to change.\n\n\
                    Examples:\n  \
                    wikimd default-config > wikimd.toml"
                ),
        )
}

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let (cleaned_args, mut extra_params) = parse_extra_args(&args);

    let cli = build_cli();
    let matches = match cli.clone().try_get_matches_from(&cleaned_args) {
        Ok(m) => m,
        Err(e) => {
            // A bare input path means the convert subcommand
            if cleaned_args.len() > 1
                && (cleaned_args[1] == STDIN_PATH || !cleaned_args[1].starts_with('-'))
                && cleaned_args[1] != "convert"
                && cleaned_args[1] != "default-config"
                && cleaned_args[1] != "help"
            {
                let mut new_args = vec![cleaned_args[0].clone(), "convert".to_string()];
                new_args.extend_from_slice(&cleaned_args[1..]);

                match cli.try_get_matches_from(&new_args) {
                    Ok(m) => m,
                    Err(e2) => e2.exit(),
                }
            } else {
                e.exit();
            }
        }
    };

    init_logging(matches.get_flag("verbose"));

    if matches.get_flag("list-formats") {
        handle_list_formats_command();
        return;
    }

    let mut config = load_cli_config(matches.get_one::<String>("config").map(|s| s.as_str()));
    apply_config_overrides(&mut config, &mut extra_params);
    if let Some(unknown) = extra_params.keys().next() {
        eprintln!("Error: Unknown parameter --extra-{unknown}");
        std::process::exit(1);
    }

    match matches.subcommand() {
        Some(("convert", sub_matches)) => {
            let input = sub_matches
                .get_one::<String>("input")
                .expect("input is required");
            let from = match sub_matches.get_one::<String>("from") {
                Some(f) => f.to_string(),
                None => detect_source_format(input),
            };
            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            handle_convert_command(input, &from, output, &config);
        }
        Some(("default-config", _)) => {
            print!("{}", wikimd_config::default_toml());
        }
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            std::process::exit(1);
        }
    }
}

/// Install the stderr logger; --verbose wins over RUST_LOG, which wins over the "warn" default
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn detect_source_format(input: &str) -> String {
    if input == STDIN_PATH {
        return STDIN_FORMAT.to_string();
    }
    let registry = FormatRegistry::default();
    match registry.detect_format_from_filename(input) {
        Some(detected) => detected,
        None => {
            eprintln!("Error: Could not detect format from filename '{input}'");
            eprintln!("Please specify --from explicitly");
            std::process::exit(1);
        }
    }
}

/// Handle the convert command
fn handle_convert_command(input: &str, from: &str, output: Option<&str>, config: &WikimdConfig) {
    let registry = FormatRegistry::default();

    if let Err(e) = registry.get(from) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    let source = read_input(input).unwrap_or_else(|e| {
        eprintln!("Error reading '{input}': {e}");
        std::process::exit(1);
    });

    let rules = ConversionRules::from(&config.convert);
    tracing::debug!(input, format = from, "converting");

    let markdown = registry
        .to_markdown(&source, from, &rules)
        .unwrap_or_else(|e| {
            eprintln!("Conversion error: {e}");
            std::process::exit(1);
        });

    match output {
        Some(path) => {
            fs::write(path, markdown).unwrap_or_else(|e| {
                eprintln!("Error writing file '{path}': {e}");
                std::process::exit(1);
            });
        }
        None => print!("{markdown}"),
    }
}

fn read_input(input: &str) -> io::Result<String> {
    if input == STDIN_PATH {
        let mut source = String::new();
        io::stdin().read_to_string(&mut source)?;
        Ok(source)
    } else {
        fs::read_to_string(input)
    }
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    println!("Available source formats:\n");
    let registry = FormatRegistry::default();
    for format_name in registry.list_formats() {
        let description = registry
            .get(&format_name)
            .map(|format| format.description().to_string())
            .unwrap_or_default();
        println!("  {format_name:<10} {description}");
    }
}

fn load_cli_config(explicit_path: Option<&str>) -> WikimdConfig {
    let loader = Loader::new().with_optional_file("wikimd.toml");
    let loader = if let Some(path) = explicit_path {
        loader.with_file(path)
    } else {
        loader
    };

    loader.build().unwrap_or_else(|err| {
        eprintln!("Failed to load configuration: {err}");
        std::process::exit(1);
    })
}

fn apply_config_overrides(config: &mut WikimdConfig, extra_params: &mut HashMap<String, String>) {
    if let Some(raw) = take_override(extra_params, &["unordered-marker", "bullet"]) {
        config.convert.lists.unordered_marker = parse_char_arg("unordered-marker", &raw);
    }
    if let Some(raw) = extra_params.remove("unordered-indent") {
        config.convert.lists.unordered_indent = raw;
    }
    if let Some(raw) = extra_params.remove("ordered-indent") {
        config.convert.lists.ordered_indent = raw;
    }
    if let Some(raw) = extra_params.remove("fence") {
        config.convert.code.fence = raw;
    }
}

fn take_override(map: &mut HashMap<String, String>, keys: &[&str]) -> Option<String> {
    for key in keys {
        if let Some(value) = map.remove(*key) {
            return Some(value);
        }
    }
    None
}

fn parse_char_arg(flag: &str, raw: &str) -> char {
    let mut chars = raw.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => c,
        _ => {
            eprintln!("Invalid value '{raw}' for --extra-{flag}: expected a single character");
            std::process::exit(1);
        }
    }
}
