//! jsondiff: Semantic JSON diff tool
//!
//! Compares two JSON documents structurally, pairs array elements by content
//! and classifies every difference by business impact.

#![allow(clippy::struct_excessive_bools, clippy::needless_pass_by_value)]

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use jsondiff_tools::{
    cli,
    config::{AppConfig, DiffConfigBuilder, DiffPaths, ScoreConfig, CONFIG_FILE_NAMES},
    diff::Severity,
    matching::AssignmentMethod,
    pipeline::exit_codes,
    reports::ReportFormat,
};
use std::io;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "jsondiff")]
#[command(version)]
#[command(about = "Semantic JSON diff tool", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  No failing differences
    1  Differences detected (with --fail-on-change)
    2  Critical differences detected (with --fail-on-critical)
    3  Error occurred

EXAMPLES:
    # Compare two API responses, pairing array items by content
    jsondiff diff before.json after.json

    # Positional array comparison, JSON report
    jsondiff diff before.json after.json --order-sensitive -o json > diff.json

    # CI gate on critical differences inside a sub-document
    jsondiff diff expected.json actual.json --pointer /data --fail-on-critical

    # Explain how similar two records are
    jsondiff score a.json b.json --explain")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Disable colored output (also respects `NO_COLOR` env)
    #[arg(long, global = true)]
    no_color: bool,

    /// Path to configuration file
    #[arg(long, global = true, env = "JSONDIFF_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Arguments for the `diff` subcommand
#[derive(Parser)]
struct DiffArgs {
    /// Path to the left (baseline) document, or `-` for stdin
    left: PathBuf,

    /// Path to the right (candidate) document, or `-` for stdin
    right: PathBuf,

    /// Output format (auto: summary on a terminal, json otherwise)
    #[arg(short, long)]
    output: Option<ReportFormat>,

    /// Write the report to a file instead of stdout
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,

    /// Compare arrays index by index instead of pairing elements by content
    #[arg(long)]
    order_sensitive: bool,

    /// Matching preset: strict, balanced, lenient
    #[arg(long)]
    preset: Option<String>,

    /// Similarity above which array elements are paired (0.0-1.0)
    #[arg(long)]
    threshold: Option<f64>,

    /// Array pairing method
    #[arg(long, value_enum)]
    assignment: Option<AssignmentMethod>,

    /// Report differences inside pairs whose similarity saturates at 1.0
    #[arg(long)]
    descend_saturated: bool,

    /// Fail when the documents nest deeper than this
    #[arg(long)]
    max_depth: Option<usize>,

    /// JSON Pointer selecting the compared sub-document on both sides
    #[arg(long)]
    pointer: Option<String>,

    /// Minimum severity of reported differences
    #[arg(long, value_enum)]
    severity: Option<Severity>,

    /// Write no report when the documents are identical
    #[arg(long)]
    only_changes: bool,

    /// Emit compact JSON
    #[arg(long)]
    compact: bool,

    /// Exit with code 1 if any difference is reported
    #[arg(long)]
    fail_on_change: bool,

    /// Exit with code 2 if a critical difference is reported
    #[arg(long)]
    fail_on_critical: bool,
}

/// Arguments for the `score` subcommand
#[derive(Parser)]
struct ScoreArgs {
    /// Path to the left document, or `-` for stdin
    left: PathBuf,

    /// Path to the right document, or `-` for stdin
    right: PathBuf,

    /// JSON Pointer selecting the scored sub-document on both sides
    #[arg(long)]
    pointer: Option<String>,

    /// Show the per-key score breakdown
    #[arg(long)]
    explain: bool,

    /// Print the score as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare two JSON documents
    Diff(DiffArgs),

    /// Print the matching similarity of two JSON documents
    Score(ScoreArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Show, discover, or initialize configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Sub-subcommands for the `config` command
#[derive(Subcommand)]
enum ConfigAction {
    /// Print current effective configuration (merged from defaults + file)
    Show,
    /// Print config file search paths and discovered config file
    Path,
    /// Generate an example .jsondiff.yaml in the current directory
    Init,
    /// Generate JSON Schema for the config file format
    Schema {
        /// Write schema to file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(&cli);

    match run(cli) {
        Ok(code) => {
            if code != exit_codes::SUCCESS {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("Error: {e:#}");
            std::process::exit(exit_codes::ERROR);
        }
    }
}

/// Install the stderr subscriber so reports on stdout stay machine-readable.
fn init_logging(cli: &Cli) {
    let log_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "warn"
    } else {
        "info"
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .init();
}

fn run(cli: Cli) -> Result<i32> {
    match cli.command {
        Commands::Diff(args) => {
            let mut overrides = apply_matching_overrides(AppConfig::builder(), &args)
                .order_sensitive(args.order_sensitive)
                .max_depth(args.max_depth)
                .output_file(args.output_file)
                .no_color(cli.no_color)
                .min_severity(args.severity)
                .fail_on_change(args.fail_on_change)
                .fail_on_critical(args.fail_on_critical)
                .quiet(cli.quiet)
                .build();
            overrides.filtering.only_changes = args.only_changes;
            overrides.matching.descend_saturated_matches = args.descend_saturated;
            overrides.output.pretty = !args.compact;

            let (app_config, loaded_from) =
                AppConfig::from_file_with_overrides(cli.config.as_deref(), &overrides);
            if let Some(path) = loaded_from {
                tracing::debug!("Loaded config from {}", path.display());
            }

            let config = DiffConfigBuilder::from_app_config(app_config)
                .left_path(args.left)
                .right_path(args.right)
                .pointer(args.pointer)
                .build()?;

            cli::run_diff(config)
        }

        Commands::Score(args) => {
            let (app_config, _) = jsondiff_tools::config::load_or_default(cli.config.as_deref());
            let config = ScoreConfig {
                paths: DiffPaths {
                    left: args.left,
                    right: args.right,
                },
                pointer: args.pointer,
                explain: args.explain,
                json: args.json,
                matching: app_config.matching,
                quiet: cli.quiet,
            };
            cli::run_score(config)
        }

        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "jsondiff", &mut io::stdout());
            Ok(exit_codes::SUCCESS)
        }

        Commands::Config { action } => run_config(action, cli.config.as_deref()).map(|()| exit_codes::SUCCESS),
    }
}

fn apply_matching_overrides(
    mut builder: jsondiff_tools::config::AppConfigBuilder,
    args: &DiffArgs,
) -> jsondiff_tools::config::AppConfigBuilder {
    if let Some(preset) = &args.preset {
        builder = builder.matching_preset(preset.clone());
    }
    if let Some(threshold) = args.threshold {
        builder = builder.matching_threshold(threshold);
    }
    if let Some(assignment) = args.assignment {
        builder = builder.assignment(assignment);
    }
    if let Some(format) = args.output {
        builder = builder.output_format(format);
    }
    builder
}

fn run_config(action: ConfigAction, config_path: Option<&Path>) -> Result<()> {
    match action {
        ConfigAction::Show => {
            let (config, loaded_from) = jsondiff_tools::config::load_or_default(config_path);
            if let Some(path) = &loaded_from {
                eprintln!("# Loaded from: {}", path.display());
            } else {
                eprintln!("# No config file found; showing defaults");
            }
            let yaml = serde_yaml::to_string(&config).context("failed to serialize config")?;
            print!("{yaml}");
            Ok(())
        }
        ConfigAction::Path => {
            let search_paths: [Option<String>; 3] = [
                std::env::current_dir().ok().map(|p| p.display().to_string()),
                dirs::config_dir().map(|p| p.join("jsondiff").display().to_string()),
                dirs::home_dir().map(|p| p.display().to_string()),
            ];
            eprintln!("Config file search paths (in order):");
            for path in search_paths.into_iter().flatten() {
                eprintln!("  {path}");
            }
            eprintln!();
            eprintln!("Recognized file names:");
            for name in CONFIG_FILE_NAMES {
                eprintln!("  {name}");
            }
            eprintln!();
            match jsondiff_tools::config::discover_config_file(config_path) {
                Some(path) => eprintln!("Active config file: {}", path.display()),
                None => eprintln!("No config file found."),
            }
            Ok(())
        }
        ConfigAction::Init => {
            let target = std::env::current_dir()
                .context("cannot determine current directory")?
                .join(".jsondiff.yaml");
            if target.exists() {
                anyhow::bail!(
                    "{} already exists. Remove it first to re-initialize.",
                    target.display()
                );
            }
            let content = jsondiff_tools::config::generate_full_example_config();
            std::fs::write(&target, content)
                .with_context(|| format!("failed to write {}", target.display()))?;
            eprintln!("Created {}", target.display());
            Ok(())
        }
        ConfigAction::Schema { output } => {
            let schema = jsondiff_tools::config::generate_json_schema()
                .context("failed to serialize config schema")?;
            match output {
                Some(path) => {
                    std::fs::write(&path, &schema)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    eprintln!("Schema written to {}", path.display());
                }
                None => println!("{schema}"),
            }
            Ok(())
        }
    }
}
