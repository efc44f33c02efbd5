use std::fs;
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use dynamic_css::{CssGenerator, StaticValue, init_logger, load_sheet};

#[derive(Parser)]
#[command(name = "dyncss", version)]
#[command(about = "Render CSS from a descriptor sheet and a setting value")]
struct Cli {
    /// Append debug logs to this file
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the sheet's rules for a value
    Render {
        /// Descriptor sheet
        sheet: PathBuf,

        /// Setting value substituted into every rule
        #[arg(long)]
        value: String,

        /// Write output to file instead of stdout
        #[arg(short)]
        o: Option<PathBuf>,
    },

    /// Parse a sheet and list its descriptors
    Check {
        /// Descriptor sheet
        sheet: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        if let Err(e) = init_logger(path) {
            eprintln!("error: cannot start logger: {e}");
            process::exit(1);
        }
    }

    match cli.command {
        Commands::Render { sheet, value, o } => {
            let properties = match load_sheet(&sheet) {
                Ok(p) => p,
                Err(e) => {
                    eprintln!("error: {}: {e}", sheet.display());
                    process::exit(1);
                }
            };

            let generator = CssGenerator::with_properties(StaticValue::new(value), properties);
            let css = generator.render();

            match o {
                Some(out_path) => {
                    if let Err(e) = fs::write(&out_path, &css) {
                        eprintln!("error: cannot write '{}': {e}", out_path.display());
                        process::exit(1);
                    }
                }
                None => print!("{css}"),
            }
        }

        Commands::Check { sheet } => {
            let properties = match load_sheet(&sheet) {
                Ok(p) => p,
                Err(e) => {
                    eprintln!("error: {}: {e}", sheet.display());
                    process::exit(1);
                }
            };

            for property in &properties {
                let modifier = match &property.modifier {
                    Some(m) => m.describe().unwrap_or_else(|| "custom".to_string()),
                    None => "-".to_string(),
                };
                println!(
                    "{}\t{} group(s)\t{}",
                    property.name,
                    property.selectors.len(),
                    modifier
                );
            }
            eprintln!("ok: {} descriptor(s)", properties.len());
        }
    }
}
