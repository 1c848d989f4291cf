use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

use bru2oas_core::config::{self, Bru2OasConfig, CONFIG_FILE_NAME};
use bru2oas_core::emit::{self, OutputFormat};
use bru2oas_core::{Document, collection};

#[derive(Parser)]
#[command(
    name = "bru2oas",
    about = "Generate an OpenAPI 3.0 document from a Bruno collection",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate an OpenAPI document from a Bruno collection
    Generate {
        /// Path to the Bruno collection directory
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Path of the OpenAPI document to write
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format (defaults to the output file extension)
        #[arg(long)]
        format: Option<FormatArg>,
    },

    /// Print a summary of the operations found in a collection
    Inspect {
        /// Path to the Bruno collection directory
        #[arg(short, long)]
        input: PathBuf,

        /// Output format
        #[arg(long, default_value = "yaml")]
        format: FormatArg,
    },

    /// Initialize a new bru2oas configuration
    Init {
        /// Overwrite existing files
        #[arg(long)]
        force: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum FormatArg {
    Yaml,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Yaml => OutputFormat::Yaml,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            input,
            output,
            format,
        } => cmd_generate(input, output, format),

        Commands::Inspect { input, format } => cmd_inspect(input, format),

        Commands::Init { force } => cmd_init(force),

        Commands::Completions { shell } => {
            let mut cmd = <Cli as clap::CommandFactory>::command();
            clap_complete::generate(shell, &mut cmd, "bru2oas", &mut std::io::stdout());
            Ok(())
        }
    }
}

/// Try to load the project config file from the current directory.
fn try_load_config() -> Result<Option<Bru2OasConfig>> {
    let config_path = PathBuf::from(CONFIG_FILE_NAME);
    Ok(config::load_config(&config_path)?)
}

fn load_document(input: &Path) -> Result<(Document, usize)> {
    let files = collection::load(input)
        .with_context(|| format!("failed to load collection {}", input.display()))?;
    log::debug!("loaded {} files from {}", files.len(), input.display());
    let document = bru2oas_core::convert(&files);
    Ok((document, files.len()))
}

fn cmd_generate(
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    format: Option<FormatArg>,
) -> Result<()> {
    let cfg = try_load_config()?.unwrap_or_default();
    let input = input.unwrap_or_else(|| PathBuf::from(&cfg.input));
    let output = output.unwrap_or_else(|| PathBuf::from(&cfg.output));
    let format = format
        .map(OutputFormat::from)
        .or(cfg.format)
        .unwrap_or_else(|| OutputFormat::from_path(&output));

    let (document, file_count) = load_document(&input)?;
    let text = emit::render(&document, format)?;

    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory {}", parent.display()))?;
    }
    fs::write(&output, text).with_context(|| format!("failed to write {}", output.display()))?;

    eprintln!(
        "Read {} request files: {} paths, {} operations",
        file_count,
        document.paths.len(),
        document.operation_count()
    );
    eprintln!("OpenAPI generated: {}", output.display());
    Ok(())
}

fn cmd_inspect(input: PathBuf, format: FormatArg) -> Result<()> {
    let (document, _) = load_document(&input)?;
    let summary = build_inspect_summary(&document);

    match format {
        FormatArg::Yaml => {
            let yaml = serde_yaml_ng::to_string(&summary)?;
            print!("{}", yaml);
        }
        FormatArg::Json => {
            let json = serde_json::to_string_pretty(&summary)?;
            println!("{}", json);
        }
    }

    Ok(())
}

fn build_inspect_summary(document: &Document) -> serde_json::Value {
    let operations: Vec<serde_json::Value> = document
        .paths
        .iter()
        .flat_map(|(path, item)| {
            item.operations().map(move |(method, op)| {
                serde_json::json!({
                    "method": method.as_str(),
                    "path": path,
                    "summary": op.summary,
                    "tags": op.tags,
                    "parameters": op.parameters.iter().map(|p| &p.name).collect::<Vec<_>>(),
                    "body": op.request_body.as_ref().and_then(|b| b.content.keys().next()),
                })
            })
        })
        .collect();

    serde_json::json!({
        "servers": document.servers.iter().map(|s| &s.url).collect::<Vec<_>>(),
        "operations": operations,
    })
}

fn cmd_init(force: bool) -> Result<()> {
    let config_path = PathBuf::from(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        anyhow::bail!(
            "{} already exists. Use --force to overwrite.",
            config_path.display()
        );
    }

    fs::write(&config_path, config::default_config_content())?;
    eprintln!("Created {}", config_path.display());
    Ok(())
}
