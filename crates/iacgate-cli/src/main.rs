//! CLI entry point for iacgate.
//!
//! This module is intentionally thin: it handles argument parsing, I/O, and exit codes.
//! All business logic lives in the `iacgate-app` crate.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand};
use iacgate_app::{
    ConvertInput, ValidateInput, render_markdown, run_convert, run_validate, serialize_sarif,
    serialize_summary, verdict_exit_code,
};
use iacgate_settings::Overrides;
use iacgate_types::Verdict;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

const LOG_ENV: &str = "IACGATE_LOG";

#[derive(Parser, Debug)]
#[command(
    name = "iacgate",
    version,
    about = "Severity-threshold gate and SARIF converter for IaC security scan reports"
)]
struct Cli {
    /// Path to iacgate config TOML. A missing file means defaults.
    #[arg(long, global = true, default_value = "iacgate.toml")]
    config: Utf8PathBuf,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Evaluate a scan report against a failure expression.
    Validate {
        /// Path to the IaC validation report JSON.
        #[arg(long, alias = "inputFilePath")]
        input: Utf8PathBuf,

        /// Failure expression, e.g. `critical:1,high:3,operator:or`.
        #[arg(long, alias = "failure_expression")]
        failure_expression: Option<String>,

        /// Where to write the JSON validation summary.
        #[arg(long)]
        summary_out: Option<Utf8PathBuf>,

        /// Write a Markdown summary.
        #[arg(long)]
        write_markdown: bool,

        /// Where to write the Markdown summary (if enabled).
        #[arg(long, default_value = "artifacts/iacgate/comment.md")]
        markdown_out: Utf8PathBuf,
    },

    /// Convert a scan report to a SARIF 2.1.0 log.
    Sarif {
        /// Path to the IaC validation report JSON.
        #[arg(long, alias = "inputFilePath")]
        input: Utf8PathBuf,

        /// Where to write the SARIF log. Defaults to `sarif_out` from config, then `output.json`.
        #[arg(long, alias = "outputFilePath")]
        output: Option<Utf8PathBuf>,
    },
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    let result = match cli.cmd {
        Commands::Validate {
            input,
            failure_expression,
            summary_out,
            write_markdown,
            markdown_out,
        } => cmd_validate(
            &cli.config,
            &input,
            failure_expression,
            summary_out.as_deref(),
            write_markdown.then_some(markdown_out.as_path()),
        ),
        Commands::Sarif { input, output } => cmd_sarif(&cli.config, &input, output),
    };

    match result {
        Ok(0) => {}
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("iacgate error: {err:#}");
            std::process::exit(1);
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(filter)
        .init();
}

fn cmd_validate(
    config: &Utf8Path,
    input: &Utf8Path,
    failure_expression: Option<String>,
    summary_out: Option<&Utf8Path>,
    markdown_out: Option<&Utf8Path>,
) -> anyhow::Result<i32> {
    let cfg_text = read_config(config)?;
    let report_text = read_input(input)?;

    let output = run_validate(ValidateInput {
        report_text: &report_text,
        config_text: &cfg_text,
        overrides: Overrides {
            failure_expression,
            sarif_out: None,
        },
    })?;

    if let Some(path) = summary_out {
        let data = serialize_summary(&output.summary)?;
        write_text_file(path, &data).context("write validation summary")?;
    }
    if let Some(path) = markdown_out {
        let md = render_markdown(&output.summary);
        write_text_file(path, &md).context("write markdown")?;
    }

    match output.summary.verdict {
        Verdict::Pass => println!("Validation succeeded."),
        Verdict::Fail => println!("Validation failed: severity exceeding violation threshold."),
    }
    Ok(verdict_exit_code(output.summary.verdict))
}

fn cmd_sarif(
    config: &Utf8Path,
    input: &Utf8Path,
    output: Option<Utf8PathBuf>,
) -> anyhow::Result<i32> {
    let cfg_text = read_config(config)?;
    let report_text = read_input(input)?;

    let converted = run_convert(ConvertInput {
        report_text: &report_text,
        config_text: &cfg_text,
        overrides: Overrides {
            failure_expression: None,
            sarif_out: output.map(String::from),
        },
    })?;

    let data = serialize_sarif(&converted.log)?;
    let out_path = Utf8PathBuf::from(converted.sarif_out);
    write_text_file(&out_path, &data).context("write SARIF log")?;
    tracing::info!(path = %out_path, "wrote SARIF log");
    Ok(0)
}

/// Missing config is allowed (defaults apply). Any other read failure is an error.
fn read_config(path: &Utf8Path) -> anyhow::Result<String> {
    match std::fs::read_to_string(path) {
        Ok(text) => Ok(text),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(path = %path, "no config file; using defaults");
            Ok(String::new())
        }
        Err(err) => Err(err).with_context(|| format!("read config: {}", path)),
    }
}

fn read_input(path: &Utf8Path) -> anyhow::Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("read input: {}", path))
}

fn write_text_file(path: &Utf8Path, text: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_str().is_empty()
    {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {}", parent))?;
    }
    std::fs::write(path, text).with_context(|| format!("write text: {}", path))?;
    Ok(())
}
