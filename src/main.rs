use clap::{Parser, Subcommand};
use deckmill::builder::SlidevBackend;
use deckmill::output::CheckEntry;
use deckmill::{batch, config, deck, manifest, output, task};
use std::path::{Path, PathBuf};

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup — trivial, called exactly once
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "deckmill")]
#[command(about = "Batch build orchestrator for slide decks")]
#[command(long_about = "\
Batch build orchestrator for slide decks

Each deck file is compiled by an external slide compiler (slidev by
default). deckmill derives the per-deck output directory and public base
URL from the filename, skips decks whose source is missing, and reports
one outcome per deck in input order.

Derivation, for deck decks/intro.md and base https://site.example:

  output     dist/intro/
  base URL   https://site.example/intro/index.html
  invocation slidev build decks/intro.md --out dist/intro \\
                 --base https://site.example/intro/index.html

When no deck files are passed, the decks directory (default: decks/) is
walked for .md files, sorted by path.

Run 'deckmill gen-config' to generate a documented deckmill.toml.")]
#[command(version = version_string())]
struct Cli {
    /// Config file
    #[arg(long, default_value = config::DEFAULT_CONFIG_FILE, global = true)]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

/// Shared positional deck arguments.
#[derive(clap::Args)]
struct DeckArgs {
    /// Slide deck files (discovered from the decks directory when omitted)
    decks: Vec<PathBuf>,
}

#[derive(Subcommand)]
enum Command {
    /// Build each deck with the external slide compiler
    Build {
        #[command(flatten)]
        decks: DeckArgs,
        /// Public base-URL prefix for built decks
        #[arg(long, short = 'b')]
        base: Option<String>,
        /// Output parent directory
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Verify decks exist and show their derived outputs without building
    Check {
        #[command(flatten)]
        decks: DeckArgs,
    },
    /// Print the deck and theory links from the slides manifest
    Links {
        /// Manifest file
        #[arg(long)]
        manifest: Option<PathBuf>,
    },
    /// Print a stock deckmill.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let cfg = config::load_or_default(&cli.config)?;

    match cli.command {
        Command::Build { decks, base, out } => {
            let inputs = resolve_decks(decks.decks, &cfg)?;
            let base = base
                .or_else(|| cfg.base_url.clone())
                .ok_or("no base URL: pass --base or set base_url in deckmill.toml")?;
            let out_root = out.unwrap_or_else(|| PathBuf::from(&cfg.build.out_root));

            let backend = SlidevBackend::new(&cfg.builder.command, cfg.builder.args.clone());
            let report = batch::run(&backend, &inputs, &base, &out_root);
            output::print_batch_report(&report);

            if !report.all_built() {
                std::process::exit(1);
            }
        }
        Command::Check { decks } => {
            let inputs = resolve_decks(decks.decks, &cfg)?;
            let out_root = PathBuf::from(&cfg.build.out_root);
            let base = cfg.base_url.clone().unwrap_or_default();

            let entries: Vec<CheckEntry> = inputs
                .iter()
                .map(|input| {
                    let task = task::derive_task(input, &base, &out_root);
                    let exists = task.input.exists();
                    let title = if exists {
                        deck::resolve_title(&task.input)
                    } else {
                        task.name.replace('-', " ")
                    };
                    CheckEntry {
                        task,
                        title,
                        exists,
                    }
                })
                .collect();
            output::print_check_output(&entries);
        }
        Command::Links { manifest: path } => {
            let path = path.unwrap_or_else(|| PathBuf::from(&cfg.manifest.path));
            let entries = manifest::load(&path)?;
            output::print_links_output(&entries);
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Resolve the decks for a command: explicit arguments as given, otherwise
/// discovery from the configured decks directory.
fn resolve_decks(
    given: Vec<PathBuf>,
    cfg: &config::DeckConfig,
) -> Result<Vec<PathBuf>, Box<dyn std::error::Error>> {
    if !given.is_empty() {
        return Ok(given);
    }
    let dir = Path::new(&cfg.build.decks_dir);
    let discovered = deck::discover(dir)?;
    if discovered.is_empty() {
        return Err(format!("no .md decks found in {}", dir.display()).into());
    }
    Ok(discovered)
}
