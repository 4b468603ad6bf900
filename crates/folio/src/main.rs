//! Folio command-line interface
//!
//! Pre-renders navigation and catalog markup for the static site.

use std::fs;
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use folio::catalog::hobbies;
use folio::{
    attach, CatalogKind, CatalogName, HtmlDocument, RenderContext, SidebarAssembler,
    SidebarRegistry, SiteConfig,
};

/// Folio - static portfolio navigation and catalog renderer
#[derive(Parser)]
#[command(name = "folio")]
#[command(version)]
#[command(about = "Render portfolio navigation and catalog markup")]
#[command(long_about = r#"
Folio renders the sidebar navigation and catalog cards of the portfolio site
ahead of time, so pages work without client-side scripting.

Examples:
  folio nav --location /pages/workspace.html      # Navigation for a page
  folio grid workspace                            # All workspace cards
  folio sidebar-data --page hobbies.html          # Secondary menu as JSON
  folio render --location /pages/bookmarks.html --input pages/bookmarks.html
"#)]
struct Cli {
    /// Site configuration file (JSON)
    #[arg(long, short, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(long, short, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the primary and secondary navigation for a page
    Nav {
        /// Page location, e.g. /pages/workspace.html
        #[arg(long, default_value = "/index.html")]
        location: String,
    },

    /// Print every card of a catalog
    Grid {
        /// Catalog name (workspace, hobbies, bookmarks)
        catalog: CatalogKind,
    },

    /// Print the hobby collections as titled sections
    Sections,

    /// Print a page's secondary menu as JSON
    SidebarData {
        /// Page file name, e.g. hobbies.html
        #[arg(long)]
        page: String,
    },

    /// Print a catalog's items grouped by category as JSON
    Export {
        /// Catalog name (workspace, hobbies, bookmarks)
        catalog: CatalogKind,
    },

    /// Insert navigation into an HTML page
    Render {
        /// Page location, e.g. /pages/workspace.html
        #[arg(long)]
        location: String,

        /// Page shell to fill
        #[arg(long)]
        input: PathBuf,

        /// Output file (defaults to stdout)
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = SiteConfig::load_or_default(cli.config.as_deref())
        .context("Failed to load site configuration")?;
    let registry = SidebarRegistry::with_builtin();
    let assembler = SidebarAssembler::new(&config, &registry);

    match cli.command {
        Command::Nav { location } => {
            let nav = assembler.assemble(&RenderContext::from_location(&location));
            println!("{}", nav.primary);
            if let Some(secondary) = nav.secondary {
                println!("{}", secondary.markup);
            }
        }

        Command::Grid { catalog } => {
            println!("{}", catalog.builtin().render_grid());
        }

        Command::Sections => {
            println!("{}", hobbies::render_sections(hobbies::catalog()));
        }

        Command::SidebarData { page } => {
            let name = CatalogName::for_page(&page)
                .ok_or_else(|| anyhow!("Page {} has no secondary menu", page))?;
            let data = registry.resolve(name);
            println!("{}", serde_json::to_string_pretty(&data)?);
        }

        Command::Export { catalog } => {
            let categories = catalog.builtin().by_category();
            println!("{}", serde_json::to_string_pretty(&categories)?);
        }

        Command::Render {
            location,
            input,
            output,
        } => {
            let html = fs::read_to_string(&input)
                .with_context(|| format!("Failed to read {}", input.display()))?;
            let mut doc = HtmlDocument::new(html);
            let nav = assembler.assemble(&RenderContext::from_location(&location));
            attach(&nav, &mut doc);

            match output {
                Some(path) => {
                    fs::write(&path, doc.as_str())
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    info!(output = %path.display(), "rendered page");
                }
                None => println!("{}", doc.as_str()),
            }
        }
    }

    Ok(())
}
