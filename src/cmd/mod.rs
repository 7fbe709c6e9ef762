mod generate;

use clap::{Args, CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use sample_data_gen::Dialect;
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sample-data-gen")]
#[command(version)]
#[command(
    about = "Generate bilingual sample data as SQL INSERT statements",
    long_about = "Generate bilingual (Korean/English) customers, products, employees, orders and \
                  order details as SQL INSERT statements for MSSQL, MySQL, PostgreSQL, Oracle \
                  or SQLite.\n\n\
                  Run without arguments to print every table for MSSQL to stdout."
)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub generate: GenerateArgs,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Options for the default generate action
#[derive(Args, Debug, Clone, Default, PartialEq)]
pub struct GenerateArgs {
    /// SQL dialect: mssql, mysql, postgresql, oracle, sqlite
    /// (aliases: postgres, pg, maria, mariadb)
    #[arg(short, long, visible_alias = "db", value_parser = parse_dialect)]
    pub dialect: Option<Dialect>,

    /// Tables to generate (comma-separated): customers, products, employees, orders, orderdetails
    #[arg(short, long)]
    pub tables: Option<String>,

    /// Nominal row count, 1 to 100000 (customers, products; employees, orders and order
    /// details derive from it)
    #[arg(short, long)]
    pub rows: Option<usize>,

    /// Output SQL file (default: sample_data_<dialect>.sql, "-" for stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// YAML config file with defaults for the options above
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Print per-table record counts and the seed to stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Generate and report without writing any SQL
    #[arg(long)]
    pub dry_run: bool,

    /// Print a JSON summary instead of the output path
    #[arg(long)]
    pub json: bool,
}

fn parse_dialect(s: &str) -> Result<Dialect, String> {
    s.parse()
}

pub fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        None => generate::run(cli.generate),
        Some(Commands::Completions { shell }) => {
            clap_complete::generate(
                shell,
                &mut Cli::command(),
                "sample-data-gen",
                &mut io::stdout(),
            );
            Ok(())
        }
    }
}
