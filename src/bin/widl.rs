//! Command-line interface for widl
//! Parses WebIDL files and inspects the result.
//!
//! Usage:
//!   widl check `<files>...`                                   - Verify reconstruction, print diagnostics
//!   widl format `<file>` [--format `<name>`] [--config `<file>`] - Render in a registered format
//!   widl find `<file>` `<path>`                                 - Resolve a lookup path
//!   widl normalize `<file>` `<method>` [--container `<name>`]   - Normalize a method reference
//!
//! Logging goes to stderr and is controlled by `WIDL_LOG` (default `warn`) or `-v`.

use anyhow::{bail, Context, Result};
use clap::{Arg, ArgAction, ArgMatches, Command};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use widl::widl::config::Config;
use widl::widl::formats::{markup, FormatRegistry, HtmlFormatter, NullMarker};
use widl::widl::parser::parse_with_config;

fn cli() -> Command {
    Command::new("widl")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for parsing and inspecting WebIDL files")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .action(ArgAction::Count)
                .global(true)
                .help("Log more (-v info, -vv debug)"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .global(true)
                .help("YAML or JSON configuration file"),
        )
        .subcommand(
            Command::new("check")
                .about("Parse files, verify exact reconstruction and print diagnostics")
                .arg(
                    Arg::new("files")
                        .help("WebIDL files to check")
                        .required(true)
                        .num_args(1..),
                ),
        )
        .subcommand(
            Command::new("format")
                .about("Render a file in one of the registered formats")
                .arg(
                    Arg::new("file")
                        .help("Path to the WebIDL file")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format (source, tag, html, outline)")
                        .default_value("tag"),
                ),
        )
        .subcommand(
            Command::new("find")
                .about("Resolve a lookup path such as `Foo.method/arg`")
                .arg(Arg::new("file").required(true).index(1))
                .arg(Arg::new("path").required(true).index(2)),
        )
        .subcommand(
            Command::new("normalize")
                .about("Normalize a method name or signature to its overload identity")
                .arg(Arg::new("file").required(true).index(1))
                .arg(Arg::new("method").required(true).index(2))
                .arg(
                    Arg::new("container")
                        .long("container")
                        .help("Only consider methods of constructs with this name"),
                ),
        )
}

fn main() -> Result<()> {
    let matches = cli().get_matches();
    init_logging(matches.get_count("verbose"));

    let config = match matches.get_one::<String>("config") {
        Some(path) => {
            Config::load(path).with_context(|| format!("loading configuration from {}", path))?
        }
        None => Config::default(),
    };

    match matches.subcommand() {
        Some(("check", sub)) => handle_check_command(sub, &config),
        Some(("format", sub)) => handle_format_command(sub, &config),
        Some(("find", sub)) => handle_find_command(sub, &config),
        Some(("normalize", sub)) => handle_normalize_command(sub, &config),
        _ => unreachable!("clap requires a subcommand"),
    }
}

fn init_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => EnvFilter::try_from_env("WIDL_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        _ => EnvFilter::new("debug"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn read(path: &str) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("reading {}", path))
}

fn required<'a>(matches: &'a ArgMatches, name: &str) -> &'a str {
    matches
        .get_one::<String>(name)
        .map(String::as_str)
        .unwrap_or_default()
}

/// Handle the check command
fn handle_check_command(matches: &ArgMatches, config: &Config) -> Result<()> {
    let mut failures = 0;
    for path in matches.get_many::<String>("files").into_iter().flatten() {
        let source = read(path)?;
        let doc = parse_with_config(&source, &config.parser);
        let location = doc.source_location();

        for diagnostic in doc.diagnostics() {
            println!("{}:{}", path, diagnostic.render(&location));
        }

        let reconstructed = doc.reconstruct() == source;
        let marked_up = markup(&doc, &mut NullMarker::new()) == source;
        if !reconstructed || !marked_up {
            failures += 1;
            println!(
                "{}: FAILED (reconstruction {}, null markup {})",
                path,
                if reconstructed { "ok" } else { "differs" },
                if marked_up { "ok" } else { "differs" },
            );
            continue;
        }
        println!(
            "{}: ok, {} constructs, {} diagnostics, complexity {}",
            path,
            doc.constructs().len(),
            doc.diagnostics().len(),
            doc.complexity_factor()
        );
    }
    if failures > 0 {
        bail!("{} file(s) did not round-trip", failures);
    }
    Ok(())
}

/// Handle the format command
fn handle_format_command(matches: &ArgMatches, config: &Config) -> Result<()> {
    let path = required(matches, "file");
    let format = required(matches, "format");
    let source = read(path)?;
    let doc = parse_with_config(&source, &config.parser);

    let mut registry = FormatRegistry::with_defaults();
    registry.register(HtmlFormatter::new(config.markup.clone()));
    debug!("available formats: {:?}", registry.list_formats());

    let output = registry.serialize(&doc, format)?;
    print!("{}", output);
    Ok(())
}

/// Handle the find command
fn handle_find_command(matches: &ArgMatches, config: &Config) -> Result<()> {
    let path = required(matches, "file");
    let lookup = required(matches, "path");
    let doc = parse_with_config(&read(path)?, &config.parser);

    let symbols = doc.find_all(lookup);
    info!("{} result(s) for {}", symbols.len(), lookup);
    if symbols.is_empty() {
        bail!("nothing found for `{}`", lookup);
    }
    for symbol in symbols {
        println!("{}\t{}", symbol.node.idl_type(), symbol.full_name());
    }
    Ok(())
}

/// Handle the normalize command
fn handle_normalize_command(matches: &ArgMatches, config: &Config) -> Result<()> {
    let path = required(matches, "file");
    let method = required(matches, "method");
    let container = matches.get_one::<String>("container").map(String::as_str);
    let doc = parse_with_config(&read(path)?, &config.parser);

    match doc.normalized_method_name(method, container) {
        Some(name) => {
            println!("{}", name);
            Ok(())
        }
        None => bail!("no method matches `{}`", method),
    }
}
