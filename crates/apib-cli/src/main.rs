use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use clap_complete::Shell;

use apib_core::ast::{self, Blueprint};
use apib_core::config::{self, ApibConfig, CONFIG_FILE_NAME, Encoding};
use apib_core::{OutputFormat, transform};

#[derive(Parser)]
#[command(
    name = "apib",
    about = "API Blueprint to Swagger 2.0 converter",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a Blueprint AST into the requested format
    Convert {
        /// Path to the Blueprint AST (JSON or YAML); reads stdin when omitted
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Where to write the result; writes stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format
        #[arg(short, long)]
        format: Option<String>,

        /// Encode the result as YAML instead of JSON
        #[arg(long)]
        yaml: bool,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Check that a Blueprint AST converts cleanly
    Validate {
        /// Path to the Blueprint AST
        #[arg(short, long)]
        input: PathBuf,
    },

    /// Initialize a new apib configuration
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Convert {
            input,
            output,
            format,
            yaml,
            pretty,
        } => cmd_convert(input, output, format, yaml, pretty),

        Commands::Validate { input } => cmd_validate(input),

        Commands::Init { force } => cmd_init(force),

        Commands::Completions { shell } => {
            let mut cmd = <Cli as clap::CommandFactory>::command();
            clap_complete::generate(shell, &mut cmd, "apib", &mut io::stdout());
            Ok(())
        }
    }
}

/// Try to load the project config file from the current directory.
fn try_load_config() -> Result<Option<ApibConfig>> {
    let config_path = PathBuf::from(CONFIG_FILE_NAME);
    Ok(config::load_config(&config_path)?)
}

/// Read and decode the AST from a file, or from stdin when no path is given.
fn load_blueprint(path: Option<&Path>) -> Result<Blueprint> {
    let (content, is_yaml) = match path {
        Some(path) => {
            let content = fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("json");
            (content, matches!(ext, "yaml" | "yml"))
        }
        None => {
            let mut content = String::new();
            io::stdin()
                .read_to_string(&mut content)
                .context("failed to read stdin")?;
            (content, false)
        }
    };

    let blueprint = if is_yaml {
        ast::from_yaml(&content)?
    } else {
        ast::from_json(&content)?
    };
    Ok(blueprint)
}

fn cmd_convert(
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    format: Option<String>,
    yaml: bool,
    pretty: bool,
) -> Result<()> {
    let cfg = try_load_config()?.unwrap_or_default();

    let input = input.or_else(|| cfg.input.as_ref().map(PathBuf::from));
    let output = output.or_else(|| cfg.output.as_ref().map(PathBuf::from));
    let format: OutputFormat = match format {
        Some(name) => name.parse()?,
        None => cfg.format,
    };
    let encoding = if yaml { Encoding::Yaml } else { cfg.encoding };
    let pretty = pretty || cfg.pretty;

    let blueprint = load_blueprint(input.as_deref())?;
    log::info!("converting `{}` to {}", blueprint.name, format);
    let result = apib_core::render(&blueprint, format)?;

    let text = match encoding {
        Encoding::Yaml => serde_yaml_ng::to_string(&result)?,
        Encoding::Json if pretty => serde_json::to_string_pretty(&result)? + "\n",
        Encoding::Json => serde_json::to_string(&result)? + "\n",
    };

    match output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)
                    .with_context(|| format!("failed to create directory {}", parent.display()))?;
            }
            fs::write(&path, text).with_context(|| format!("failed to write {}", path.display()))?;
            eprintln!("  wrote {}", path.display());
        }
        None => print!("{text}"),
    }

    Ok(())
}

fn cmd_validate(input: PathBuf) -> Result<()> {
    let blueprint = load_blueprint(Some(&input))?;

    eprintln!("Valid Blueprint AST: {}", blueprint.name);
    eprintln!("  Resource groups: {}", blueprint.resource_groups.len());
    let resources: usize = blueprint
        .resource_groups
        .iter()
        .map(|g| g.resources.len())
        .sum();
    eprintln!("  Resources: {resources}");

    // Also validate that it converts successfully
    let spec = transform::convert(&blueprint)?;
    let operations: usize = spec.paths.values().map(|item| item.len()).sum();
    eprintln!("  Paths: {}", spec.paths.len());
    eprintln!("  Operations: {operations}");
    eprintln!(
        "  Definitions: {}",
        spec.definitions.as_ref().map_or(0, |d| d.len())
    );
    eprintln!("  Security schemes: {}", spec.security_definitions.len());

    eprintln!("Validation successful.");
    Ok(())
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
