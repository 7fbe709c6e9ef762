//! Generate command CLI handler.

use super::GenerateArgs;
use anyhow::Context;
use sample_data_gen::config::{CliOverrides, GenerateSettings, GenerateYamlConfig, OutputTarget};
use sample_data_gen::{GeneratedData, Generator, Renderer};
use serde::Serialize;
use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

#[derive(Serialize)]
struct GenerateSummary {
    dialect: String,
    rows: usize,
    seed: u64,
    output: Option<String>,
    dry_run: bool,
    tables: Vec<TableSummary>,
}

#[derive(Serialize)]
struct TableSummary {
    table: &'static str,
    records: usize,
}

pub fn run(args: GenerateArgs) -> anyhow::Result<()> {
    // No flags at all: render everything with defaults to stdout
    let legacy = args == GenerateArgs::default();

    let file_config = match &args.config {
        Some(path) => GenerateYamlConfig::load(path)?,
        None => GenerateYamlConfig::default(),
    };

    let overrides = CliOverrides {
        dialect: args.dialect,
        tables: args.tables.clone(),
        rows: args.rows,
        seed: args.seed,
        output: args.output.clone(),
        stdout: legacy,
    };
    let settings = GenerateSettings::resolve(overrides, &file_config)?;

    if args.json && settings.output == OutputTarget::Stdout && !args.dry_run {
        anyhow::bail!("--json cannot be combined with SQL written to stdout");
    }

    let mut generator = Generator::new(settings.seed);
    let data = generator.generate(settings.rows)?;
    let renderer = Renderer::new(settings.dialect);

    if args.verbose || args.dry_run {
        print_stats(&settings, &data);
    }

    let written = if args.dry_run {
        None
    } else {
        Some(write_output(&renderer, &settings, &data)?)
    };

    if args.json {
        let summary = GenerateSummary {
            dialect: settings.dialect.to_string(),
            rows: settings.rows,
            seed: settings.seed,
            output: written
                .flatten()
                .map(|p| p.display().to_string()),
            dry_run: args.dry_run,
            tables: settings
                .tables
                .iter()
                .map(|&t| TableSummary {
                    table: t.key(),
                    records: data.count(t),
                })
                .collect(),
        };
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else if let Some(Some(path)) = written {
        println!("{}", path.display());
    }

    Ok(())
}

/// Write the script and return the resolved file path (`None` for stdout)
fn write_output(
    renderer: &Renderer,
    settings: &GenerateSettings,
    data: &GeneratedData,
) -> anyhow::Result<Option<PathBuf>> {
    match &settings.output {
        OutputTarget::Stdout => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            renderer.write_dataset(data, &settings.tables, &mut handle)?;
            handle.flush()?;
            Ok(None)
        }
        OutputTarget::File(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            renderer
                .write_dataset(data, &settings.tables, file)
                .with_context(|| format!("Failed to write output file: {}", path.display()))?;
            Ok(Some(resolve_path(path)))
        }
    }
}

fn resolve_path(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}

fn print_stats(settings: &GenerateSettings, data: &GeneratedData) {
    eprintln!("Dialect: {}", settings.dialect);
    eprintln!("Rows: {}", settings.rows);
    eprintln!("Seed: {}", settings.seed);
    eprintln!();
    eprintln!("Generated tables:");
    for &table in &settings.tables {
        eprintln!("  {:<14} {:>6} records", table.sql_name(), data.count(table));
    }
}
