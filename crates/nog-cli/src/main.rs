use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use clap_complete::Shell;

use nog_core::config::{self, CONFIG_FILE_NAME, NogConfig};
use nog_core::error::ParseError;
use nog_core::{CodeGenerator, output, parse, transform};
use nog_ngrx::{NgrxConfig, NgrxGenerator};

#[derive(Parser)]
#[command(
    name = "nog",
    about = "Generate an NgRx store from a Swagger/OpenAPI document",
    version
)]
struct Cli {
    /// Path to the Swagger/OpenAPI document (.json or .yaml)
    input: Option<PathBuf>,

    /// Output directory for the generated store
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Base URL for generated services, instead of the document's servers/host
    #[arg(long)]
    base_url: Option<String>,

    /// Project config file
    #[arg(long, default_value = CONFIG_FILE_NAME)]
    config: PathBuf,

    /// Skip index.ts barrel files
    #[arg(long)]
    no_index: bool,

    /// Write a default config file and exit
    #[arg(long)]
    init: bool,

    /// Overwrite an existing config file with --init
    #[arg(long, requires = "init")]
    force: bool,

    /// Print shell completions and exit
    #[arg(long, value_name = "SHELL")]
    completions: Option<Shell>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    // Failures are reported, not signalled through the exit status.
    if let Err(e) = run(cli) {
        eprintln!("error: {e:#}");
    }
}

fn run(cli: Cli) -> Result<()> {
    if let Some(shell) = cli.completions {
        let mut cmd = <Cli as clap::CommandFactory>::command();
        clap_complete::generate(shell, &mut cmd, "nog", &mut std::io::stdout());
        return Ok(());
    }

    if cli.init {
        return cmd_init(&cli.config, cli.force);
    }

    let cfg = match config::load_config(&cli.config)? {
        Some(cfg) => {
            log::debug!("loaded {}: {cfg:?}", cli.config.display());
            cfg
        }
        None => NogConfig::default(),
    };
    cmd_generate(cli, cfg)
}

fn cmd_generate(cli: Cli, cfg: NogConfig) -> Result<()> {
    let Some(input) = cli.input.or_else(|| cfg.input.as_ref().map(PathBuf::from)) else {
        eprintln!(
            "error: no input document; pass INPUT or set `input` in {}",
            cli.config.display()
        );
        return Ok(());
    };
    let output_dir = cli.output.unwrap_or_else(|| PathBuf::from(&cfg.output));

    let spec = match parse::load_file(&input) {
        Err(ParseError::NotFound(path)) => {
            eprintln!("error: input file '{}' not found", path.display());
            return Ok(());
        }
        other => other.with_context(|| format!("failed to load {}", input.display()))?,
    };

    eprintln!("Generating NgRx files from {}", input.display());
    eprintln!("Output directory: {}", output_dir.display());

    let ir = transform::transform(&spec)?;
    eprintln!("Found {} operations", ir.operations.len());

    let gen_config = NgrxConfig {
        base_url: cli.base_url.or(cfg.base_url),
        index: cfg.index && !cli.no_index,
    };
    let files = NgrxGenerator.generate(&ir, &gen_config)?;

    let written = output::write_files(&output_dir, &files)?;
    for file in &files {
        eprintln!("  wrote {}", output_dir.join(&file.path).display());
    }

    eprintln!("Generated {} files in {}", written, output_dir.display());
    Ok(())
}

fn cmd_init(config_path: &Path, force: bool) -> Result<()> {
    if config_path.exists() && !force {
        anyhow::bail!(
            "{} already exists. Use --force to overwrite.",
            config_path.display()
        );
    }

    fs::write(config_path, config::default_config_content())
        .with_context(|| format!("failed to write {}", config_path.display()))?;
    eprintln!("Created {}", config_path.display());
    Ok(())
}
