//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use super::commands;
use duet::config::{CONFIG_FILE, DuetConfig};
use duet::output::{OutputMode, Report, VersionInfo};

/// duet - small component pairs driven from the command line
#[derive(Parser, Debug)]
#[command(
    name = "duet",
    version,
    about = "Drive small collaborating component pairs",
    long_about = "Each subcommand wires a consumer to a real collaborator and runs one operation.\n\n\
                  Settings are read from duet.toml in the working directory, or from --config."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Configuration file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Add or subtract, recording the operation in the log file
    Calc {
        #[command(subcommand)]
        op: CalcOp,
    },

    /// Convert an amount between currencies
    Convert {
        /// Source currency code
        from: String,
        /// Target currency code
        to: String,
        /// Amount to convert
        #[arg(allow_negative_numbers = true)]
        amount: f64,
    },

    /// Export a JSON array of objects as CSV
    Export {
        /// JSON input file
        input: PathBuf,
        /// CSV output file
        output: PathBuf,
    },

    /// Look up the final price of a catalog product
    Price {
        /// Product ID
        product: String,
        /// Apply the discount rate
        #[arg(short, long)]
        discount: bool,
    },

    /// Rank documents by how many query words they contain
    Search {
        /// Query text
        query: String,
        /// Document as ID=CONTENT, repeatable
        #[arg(short, long = "doc", value_name = "ID=CONTENT", value_parser = parse_doc)]
        docs: Vec<(String, String)>,
    },

    /// Render a page template
    Render {
        /// Page name
        page: String,
    },

    /// Validate a sign-up form
    Validate {
        /// Email address
        email: String,
        /// Password
        password: String,
    },

    /// Show version
    Version,
}

#[derive(Subcommand, Debug, Clone, Copy)]
pub enum CalcOp {
    /// a + b
    Add {
        /// Left operand
        #[arg(allow_negative_numbers = true)]
        a: f64,
        /// Right operand
        #[arg(allow_negative_numbers = true)]
        b: f64,
    },
    /// a - b
    Sub {
        /// Left operand
        #[arg(allow_negative_numbers = true)]
        a: f64,
        /// Right operand
        #[arg(allow_negative_numbers = true)]
        b: f64,
    },
}

fn parse_doc(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .filter(|(id, _)| !id.is_empty())
        .map(|(id, content)| (id.to_string(), content.to_string()))
        .ok_or_else(|| format!("expected ID=CONTENT, got '{raw}'"))
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let config_path = cli.config.unwrap_or_else(|| PathBuf::from(CONFIG_FILE));
    let config = DuetConfig::load(&config_path)?;

    match cli.command {
        Some(Command::Calc { op }) => commands::calc(op, &config, output_mode),
        Some(Command::Convert { from, to, amount }) => {
            commands::convert(&from, &to, amount, &config, output_mode);
            Ok(())
        },
        Some(Command::Export { input, output }) => commands::export(&input, &output, output_mode),
        Some(Command::Price { product, discount }) => {
            commands::price(&product, discount, &config, output_mode);
            Ok(())
        },
        Some(Command::Search { query, docs }) => {
            commands::search(&query, &docs, output_mode);
            Ok(())
        },
        Some(Command::Render { page }) => commands::render(&page, output_mode),
        Some(Command::Validate { email, password }) => {
            commands::validate(&email, &password, output_mode);
            Ok(())
        },
        Some(Command::Version) => {
            VersionInfo {
                version: duet::VERSION,
            }
            .render(output_mode);
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": duet::VERSION,
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("duet v{}", duet::VERSION);
                println!("\nRun 'duet --help' for usage");
            }
            Ok(())
        },
    }
}
