use clap::{Parser, Subcommand};
use pc_core::{SymbolTable, format_uncertain_value};
use pc_emit::{EmitResult, ErrorPolicy, GenerateReport, GenerateRequest};
use pc_table::TableError;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Parser)]
#[command(name = "pc-cli")]
#[command(about = "physconst CLI - LaTeX declarations for physical constant tables", long_about = None)]
struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the LaTeX declarations file for a constant table
    Generate {
        /// Path to the constant table (.yaml, .yml or .json)
        table_path: PathBuf,
        /// Output .tex file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// YAML map of extra or replacement unit symbols
        #[arg(long)]
        units: Option<PathBuf>,
        /// Leave out constants that fail to format instead of aborting
        #[arg(long)]
        skip_invalid: bool,
    },
    /// Validate table syntax and structure
    Validate {
        /// Path to the constant table
        table_path: PathBuf,
    },
    /// Format a unit expression, e.g. "m^3 kg^-1 s^-2"
    Unit {
        expr: String,
        /// YAML map of extra or replacement unit symbols
        #[arg(long)]
        units: Option<PathBuf>,
    },
    /// Format a value with its uncertainty, e.g. 6.6743e-11 1.5e-15
    Value {
        #[arg(allow_hyphen_values = true)]
        value: String,
        #[arg(allow_hyphen_values = true)]
        uncertainty: String,
    },
    /// Print the unit symbol table as YAML
    Symbols {
        /// YAML map of extra or replacement unit symbols
        #[arg(long)]
        units: Option<PathBuf>,
    },
}

fn main() -> EmitResult<()> {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(log_directive(cli.verbose))),
        n => EnvFilter::new(log_directive(n)),
    };
    fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    match cli.command {
        Commands::Generate {
            table_path,
            output,
            units,
            skip_invalid,
        } => {
            let policy = if skip_invalid {
                ErrorPolicy::Skip
            } else {
                ErrorPolicy::Abort
            };
            cmd_generate(&table_path, output.as_deref(), units.as_deref(), policy)
        }
        Commands::Validate { table_path } => cmd_validate(&table_path),
        Commands::Unit { expr, units } => cmd_unit(&expr, units.as_deref()),
        Commands::Value { value, uncertainty } => cmd_value(&value, &uncertainty),
        Commands::Symbols { units } => cmd_symbols(units.as_deref()),
    }
}

/// Log level for `-v` count; `RUST_LOG` is only consulted without `-v`.
fn log_directive(verbose: u8) -> &'static str {
    match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    }
}

fn cmd_generate(
    table_path: &Path,
    output: Option<&Path>,
    units: Option<&Path>,
    policy: ErrorPolicy,
) -> EmitResult<()> {
    let report = match output {
        Some(output_path) => {
            let report = pc_emit::generate(&GenerateRequest {
                table_path,
                units_path: units,
                output_path,
                policy,
            })?;
            eprintln!(
                "✓ Wrote {} declarations to {}",
                report.declared,
                output_path.display()
            );
            report
        }
        None => {
            let table = pc_table::load_table(table_path)?;
            let symbols = pc_emit::resolve_symbols(&table, units)?;
            let (text, report) = pc_emit::render_table(&table, &symbols, policy)?;
            io::stdout().lock().write_all(text.as_bytes())?;
            tracing::info!(declared = report.declared, "wrote declarations to stdout");
            report
        }
    };

    print_skipped(&report);
    Ok(())
}

fn print_skipped(report: &GenerateReport) {
    if report.skipped.is_empty() {
        return;
    }
    eprintln!("Skipped {} constants:", report.skipped.len());
    for skipped in &report.skipped {
        eprintln!("  {} - {}", skipped.name, skipped.error);
    }
}

fn cmd_validate(table_path: &Path) -> EmitResult<()> {
    println!("Validating table: {}", table_path.display());
    let table = pc_table::load_table(table_path)?;
    println!("✓ Table '{}' is valid ({} constants)", table.name, table.constants.len());
    Ok(())
}

fn load_symbols(units: Option<&Path>) -> EmitResult<SymbolTable> {
    let mut symbols = SymbolTable::default();
    if let Some(path) = units {
        symbols.extend(pc_table::load_symbol_overrides(path)?);
    }
    Ok(symbols)
}

fn cmd_unit(expr: &str, units: Option<&Path>) -> EmitResult<()> {
    let symbols = load_symbols(units)?;
    println!("{}", symbols.format_unit(expr)?);
    Ok(())
}

fn cmd_value(value: &str, uncertainty: &str) -> EmitResult<()> {
    println!("{}", format_uncertain_value(value, uncertainty)?);
    Ok(())
}

fn cmd_symbols(units: Option<&Path>) -> EmitResult<()> {
    let symbols = load_symbols(units)?;
    let yaml = serde_yaml::to_string(&symbols).map_err(TableError::from)?;
    print!("{yaml}");
    Ok(())
}
