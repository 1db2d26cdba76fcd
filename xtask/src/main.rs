//! Developer tasks (schema generation, fixture conformance).
//!
//! Keeping this separate avoids bloating the end-user CLI.

use anyhow::{Context, bail};
use schemars::schema_for;
use std::fs;
use std::path::{Path, PathBuf};

/// Get the project root (parent of xtask directory).
fn project_root() -> PathBuf {
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")));

    if manifest_dir.ends_with("xtask") {
        manifest_dir
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or(manifest_dir)
    } else {
        manifest_dir
    }
}

/// Get the schemas directory path.
fn schemas_dir() -> PathBuf {
    project_root().join("schemas")
}

/// Get the tests/fixtures directory path.
fn fixtures_dir() -> PathBuf {
    project_root().join("tests").join("fixtures")
}

/// Schema definition with its target filename.
struct SchemaSpec {
    filename: &'static str,
    generate: fn() -> schemars::Schema,
}

fn generate_scan_report_schema() -> schemars::Schema {
    schema_for!(iacgate_types::IacScanReport)
}

fn generate_sarif_schema() -> schemars::Schema {
    schema_for!(iacgate_types::SarifLog)
}

fn generate_summary_schema() -> schemars::Schema {
    schema_for!(iacgate_types::ValidationSummary)
}

fn generate_config_schema() -> schemars::Schema {
    schema_for!(iacgate_settings::IacgateConfigV1)
}

/// List of schemas to generate.
fn schema_specs() -> Vec<SchemaSpec> {
    vec![
        SchemaSpec {
            filename: "iacgate.scan-report.json",
            generate: generate_scan_report_schema,
        },
        SchemaSpec {
            filename: "iacgate.sarif-log.json",
            generate: generate_sarif_schema,
        },
        SchemaSpec {
            filename: "iacgate.validation.v1.json",
            generate: generate_summary_schema,
        },
        SchemaSpec {
            filename: "iacgate.config.v1.json",
            generate: generate_config_schema,
        },
    ]
}

/// Serialize a schema to pretty-printed JSON with trailing newline.
fn serialize_schema(schema: &schemars::Schema) -> anyhow::Result<String> {
    let mut json = serde_json::to_string_pretty(schema).context("Failed to serialize schema")?;
    json.push('\n');
    Ok(json)
}

/// Emit schemas to the schemas/ directory.
fn emit_schemas() -> anyhow::Result<()> {
    let dir = schemas_dir();
    fs::create_dir_all(&dir).context("Failed to create schemas directory")?;

    for spec in schema_specs() {
        let schema = (spec.generate)();
        let json = serialize_schema(&schema)?;
        let path = dir.join(spec.filename);

        fs::write(&path, &json)
            .with_context(|| format!("Failed to write schema to {}", path.display()))?;

        println!("Wrote {}", path.display());
    }

    println!("\nSchemas emitted successfully.");
    Ok(())
}

/// Validate that schemas in the repo match what would be generated.
fn validate_schemas() -> anyhow::Result<()> {
    let dir = schemas_dir();
    let mut missing = Vec::new();
    let mut mismatched = Vec::new();

    for spec in schema_specs() {
        let path = dir.join(spec.filename);

        if !path.exists() {
            missing.push(spec.filename);
            continue;
        }

        let expected = serialize_schema(&(spec.generate)())?;
        let actual = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        if expected != actual {
            mismatched.push(spec.filename);
        }
    }

    if missing.is_empty() && mismatched.is_empty() {
        println!("All schemas are up to date.");
        return Ok(());
    }

    if !missing.is_empty() {
        eprintln!("Missing schemas:");
        for name in &missing {
            eprintln!("  - {}", name);
        }
    }
    if !mismatched.is_empty() {
        eprintln!("Schemas out of date:");
        for name in &mismatched {
            eprintln!("  - {}", name);
        }
    }
    eprintln!("\nRun `cargo xtask emit-schemas` to regenerate.");
    bail!("Schema validation failed")
}

fn print_help() {
    eprintln!("xtask commands:");
    eprintln!("  help              Show this message");
    eprintln!("  emit-schemas      Generate JSON schemas from Rust types to schemas/");
    eprintln!("  validate-schemas  Check if schemas/ matches generated output (for CI)");
    eprintln!("  print-schema-ids  Print known schema IDs");
    eprintln!("  conform           Validate tests/fixtures against the generated schemas");
    eprintln!("  conform-full      conform + compare iacgate SARIF output with golden files");
}

fn compile(schema: schemars::Schema) -> anyhow::Result<jsonschema::Validator> {
    let value = serde_json::to_value(&schema).context("Failed to convert schema to JSON")?;
    jsonschema::validator_for(&value).map_err(|e| anyhow::anyhow!("Failed to compile schema: {e}"))
}

fn read_json(path: &Path) -> anyhow::Result<serde_json::Value> {
    let content =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse {} as JSON", path.display()))
}

/// Fixture directories, sorted by name.
fn fixture_dirs() -> anyhow::Result<Vec<PathBuf>> {
    let dir = fixtures_dir();
    let mut dirs = Vec::new();
    for entry in fs::read_dir(&dir).context("Failed to read tests/fixtures/")? {
        let path = entry?.path();
        if path.is_dir() {
            dirs.push(path);
        }
    }
    dirs.sort();
    Ok(dirs)
}

fn fixture_name(dir: &Path) -> String {
    dir.file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string()
}

/// Validate fixtures against the generated schemas.
///
/// - `report.json` against the scan report schema
/// - `expected.sarif.json` against the SARIF log schema
fn conform() -> anyhow::Result<()> {
    let report_schema = compile(generate_scan_report_schema())?;
    let sarif_schema = compile(generate_sarif_schema())?;
    println!("✓ schemas compile");

    let mut checked = 0;
    let mut errors = Vec::new();

    for dir in fixture_dirs()? {
        let name = fixture_name(&dir);

        let report = dir.join("report.json");
        if report.exists() {
            let value = read_json(&report)?;
            for err in report_schema.iter_errors(&value) {
                errors.push(format!("{}/report.json: {}", name, err));
            }
            checked += 1;
        }

        let golden = dir.join("expected.sarif.json");
        if golden.exists() {
            let value = read_json(&golden)?;
            for err in sarif_schema.iter_errors(&value) {
                errors.push(format!("{}/expected.sarif.json: {}", name, err));
            }
            checked += 1;
        }
    }

    if checked == 0 {
        bail!("No JSON fixtures found in {}", fixtures_dir().display());
    }

    if !errors.is_empty() {
        eprintln!("\nConformance errors:");
        for err in &errors {
            eprintln!("  - {}", err);
        }
        bail!("Conformance validation failed with {} errors", errors.len());
    }

    println!("\n✓ All {} fixture files pass conformance checks!", checked);
    Ok(())
}

/// Full conformance: fixture schemas plus iacgate binary output against golden files.
fn conform_full() -> anyhow::Result<()> {
    conform()?;

    println!("\n--- Full conformance: iacgate binary output ---\n");

    let iacgate_bin = project_root().join("target").join("debug").join("iacgate");

    #[cfg(target_os = "windows")]
    let iacgate_bin = iacgate_bin.with_extension("exe");

    if !iacgate_bin.exists() {
        bail!(
            "iacgate binary not found at {}.\n\
            Run `cargo build -p iacgate-cli` first.",
            iacgate_bin.display()
        );
    }

    let mut compared = 0;
    let mut errors = Vec::new();

    for dir in fixture_dirs()? {
        let golden = dir.join("expected.sarif.json");
        if !golden.exists() {
            continue;
        }
        let name = fixture_name(&dir);

        let temp_dir = tempfile::tempdir().context("Failed to create temp dir")?;
        let out = temp_dir.path().join("out.sarif");

        let output = std::process::Command::new(&iacgate_bin)
            .current_dir(temp_dir.path())
            .arg("sarif")
            .arg("--input")
            .arg(dir.join("report.json"))
            .arg("--output")
            .arg(&out)
            .output()
            .with_context(|| format!("Failed to run iacgate on fixture '{}'", name))?;

        if !output.status.success() {
            errors.push(format!(
                "fixture '{}': iacgate exited with {:?}: {}",
                name,
                output.status.code(),
                String::from_utf8_lossy(&output.stderr)
            ));
            continue;
        }

        if read_json(&out)? != read_json(&golden)? {
            errors.push(format!("fixture '{}': SARIF output differs from golden", name));
        } else {
            println!("  ✓ {} matches golden", name);
        }
        compared += 1;
    }

    if !errors.is_empty() {
        eprintln!("\nFull conformance errors:");
        for err in &errors {
            eprintln!("  - {}", err);
        }
        bail!("Full conformance failed with {} errors", errors.len());
    }

    println!("\n✓ {} golden comparisons passed!", compared);
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let cmd = args.get(1).map(|s| s.as_str()).unwrap_or("help");

    match cmd {
        "help" | "--help" | "-h" => {
            print_help();
            Ok(())
        }
        "emit-schemas" => emit_schemas(),
        "validate-schemas" => validate_schemas(),
        "conform" => conform(),
        "conform-full" => conform_full(),
        "print-schema-ids" => {
            for spec in schema_specs() {
                println!("{}", spec.filename.trim_end_matches(".json"));
            }
            Ok(())
        }
        other => bail!("unknown xtask command: {other}\n\nRun `cargo xtask help` for usage."),
    }
    .context("xtask failed")
}
