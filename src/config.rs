//! Run settings: built-in defaults, optionally overlaid by a YAML file,
//! overlaid by command-line flags.
//!
//! ```yaml
//! dialect: postgres
//! tables: [customers, orders]   # or "customers,orders"
//! rows: 50
//! seed: 42
//! output: seed.sql              # "-" for stdout
//! ```

use crate::dialect::Dialect;
use crate::generator::validate_rows;
use crate::table::{parse_table_list, parse_table_selection, Table};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Nominal row count when none is configured
pub const DEFAULT_ROWS: usize = 100;

/// Table selection as written in the YAML file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TableList {
    /// `tables: "customers,orders"`
    Csv(String),
    /// `tables: [customers, orders]`
    List(Vec<String>),
}

impl TableList {
    fn parse(&self) -> Result<Vec<Table>, String> {
        match self {
            TableList::Csv(s) => parse_table_selection(s),
            TableList::List(names) => parse_table_list(names),
        }
    }
}

/// YAML configuration file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GenerateYamlConfig {
    pub dialect: Option<String>,
    pub tables: Option<TableList>,
    pub rows: Option<usize>,
    pub seed: Option<u64>,
    pub output: Option<PathBuf>,
}

impl GenerateYamlConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_yaml(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))
    }

    pub fn from_yaml(content: &str) -> anyhow::Result<Self> {
        Ok(serde_yaml_ng::from_str(content)?)
    }
}

/// Values given on the command line. `None` falls through to the file.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub dialect: Option<Dialect>,
    pub tables: Option<String>,
    pub rows: Option<usize>,
    pub seed: Option<u64>,
    pub output: Option<PathBuf>,
    /// Force stdout regardless of any configured output path
    pub stdout: bool,
}

/// Where the rendered script goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    Stdout,
    File(PathBuf),
}

impl OutputTarget {
    /// `-` means stdout
    pub fn from_path(path: PathBuf) -> Self {
        if path.as_os_str() == "-" {
            OutputTarget::Stdout
        } else {
            OutputTarget::File(path)
        }
    }
}

/// `sample_data_<dialect>.sql` in the working directory
pub fn default_output_path(dialect: Dialect) -> PathBuf {
    PathBuf::from(format!("sample_data_{}.sql", dialect.name()))
}

/// Fully resolved settings for one run
#[derive(Debug, Clone, PartialEq)]
pub struct GenerateSettings {
    pub dialect: Dialect,
    pub tables: Vec<Table>,
    pub rows: usize,
    pub seed: u64,
    pub output: OutputTarget,
}

impl GenerateSettings {
    /// Merge CLI values over file values over defaults, validating as we go.
    ///
    /// A missing seed is drawn at random so that it can be reported.
    pub fn resolve(cli: CliOverrides, file: &GenerateYamlConfig) -> anyhow::Result<Self> {
        let dialect = match (cli.dialect, &file.dialect) {
            (Some(d), _) => d,
            (None, Some(name)) => name.parse::<Dialect>().map_err(|e| anyhow::anyhow!(e))?,
            (None, None) => Dialect::default(),
        };

        let tables = match (&cli.tables, &file.tables) {
            (Some(list), _) => parse_table_selection(list),
            (None, Some(list)) => list.parse(),
            (None, None) => Ok(Table::ALL.to_vec()),
        }
        .map_err(|e| anyhow::anyhow!(e))?;

        let (rows, rows_source) = match (cli.rows, file.rows) {
            (Some(rows), _) => (rows, "--rows"),
            (None, Some(rows)) => (rows, "config file `rows`"),
            (None, None) => (DEFAULT_ROWS, "default row count"),
        };
        validate_rows(rows, rows_source)?;

        let seed = cli.seed.or(file.seed).unwrap_or_else(rand::random);

        let output = if cli.stdout {
            OutputTarget::Stdout
        } else {
            OutputTarget::from_path(
                cli.output
                    .or_else(|| file.output.clone())
                    .unwrap_or_else(|| default_output_path(dialect)),
            )
        };

        Ok(Self {
            dialect,
            tables,
            rows,
            seed,
            output,
        })
    }
}
