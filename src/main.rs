use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use papershelf::api::PaperApi;
use papershelf::config::{find_config_file, load_config, Config};
use papershelf::models::{ListQuery, Paper};
use papershelf::pages::PageContext;
use papershelf::router::Router;
use papershelf::ui;
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Papershelf - browse, search and manage a paper store from the terminal
#[derive(Parser, Debug)]
#[command(name = "papershelf")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Browse, search and manage a paper store from the terminal", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose logging (can be used multiple times: -v, -vv)
    #[arg(long, short, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(long, short)]
    quiet: bool,

    /// Output format
    #[arg(long, short, value_enum, global = true, default_value_t = OutputFormat::Auto)]
    output: OutputFormat,

    /// Configuration file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Base URL of the paper service (overrides configuration)
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Request timeout in seconds (overrides configuration)
    #[arg(long, global = true)]
    timeout: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

/// Output format for results
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum OutputFormat {
    /// Automatic based on terminal (table if TTY, JSON otherwise)
    Auto,
    /// Table format (human-readable)
    Table,
    /// JSON format (machine-readable)
    Json,
    /// Plain text format (one record per line)
    Plain,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List stored papers
    #[command(alias = "ls")]
    List {
        /// Maximum number of papers per page
        #[arg(long, short, default_value_t = 20)]
        limit: usize,

        /// Number of papers to skip
        #[arg(long, default_value_t = 0)]
        offset: usize,

        /// Sort field (server accepts created_at, title, published, updated, arxiv_id)
        #[arg(long, default_value = "created_at")]
        sort_by: String,

        /// Sort direction (server accepts asc, desc)
        #[arg(long, default_value = "desc")]
        order: String,
    },

    /// Show one paper version
    Get {
        /// Unique key of the paper version (arXiv id + version, e.g. 2401.12345v1)
        unique_key: String,
    },

    /// Delete one paper version
    #[command(alias = "rm")]
    Delete {
        /// Unique key of the paper version
        unique_key: String,
    },

    /// List every stored version of an arXiv id
    Versions {
        /// arXiv id without the version suffix
        arxiv_id: String,
    },

    /// Save papers from a JSON file (an array of paper records)
    Import {
        /// Path to the JSON file
        file: PathBuf,
    },

    /// Search the upstream index
    #[command(alias = "s")]
    Search {
        /// Search query string
        query: String,

        /// Maximum number of results
        #[arg(long, short, default_value_t = 10)]
        max_results: usize,
    },

    /// Subscribe to a category and fetch its current papers
    Subscribe {
        /// arXiv category (e.g. cs.LG)
        category: String,
    },

    /// Show store statistics
    Stats,

    /// Render the page behind a navigable path (/, /papers, /papers/:id, /stats)
    Open {
        /// Path to navigate to
        path: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity
    let log_level = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    let env_filter = if cli.quiet { "error" } else { log_level };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| format!("papershelf={}", env_filter)),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration from file if specified or found in default locations
    let config = if let Some(config_path) = &cli.config {
        load_config(config_path)?
    } else if let Some(config_path) = find_config_file() {
        tracing::info!("Using config file: {}", config_path.display());
        load_config(&config_path)?
    } else {
        Config::default()
    };

    let base_url = cli
        .base_url
        .clone()
        .unwrap_or_else(|| config.server.base_url.clone());
    let timeout = Duration::from_secs(cli.timeout.unwrap_or(config.server.timeout_secs));
    let api = PaperApi::with_timeout(base_url, timeout)?;

    let format = resolve_format(cli.output);

    match cli.command {
        Commands::List {
            limit,
            offset,
            sort_by,
            order,
        } => {
            let query = ListQuery::new()
                .limit(limit)
                .offset(offset)
                .sort_by(sort_by)
                .order(order);
            let response = api.list(&query).await?;

            match format {
                OutputFormat::Json => print_json(&response)?,
                OutputFormat::Plain => print_papers_plain(&response.papers),
                _ => {
                    println!("{}", ui::papers_table(&response.papers));
                    println!(
                        "Showing {} of {} papers (offset {})",
                        response.papers.len(),
                        response.total,
                        response.offset
                    );
                }
            }
        }

        Commands::Get { unique_key } => {
            let paper = api.get(&unique_key).await?;

            match format {
                OutputFormat::Json => print_json(&paper)?,
                OutputFormat::Plain => println!("{}\t{}", paper.key(), paper.title),
                _ => println!("{}", ui::paper_detail(&paper)),
            }
        }

        Commands::Delete { unique_key } => {
            api.delete(&unique_key).await?;
            if !cli.quiet {
                println!("Deleted {}", unique_key);
            }
        }

        Commands::Versions { arxiv_id } => {
            let response = api.versions(&arxiv_id).await?;

            match format {
                OutputFormat::Json => print_json(&response)?,
                OutputFormat::Plain => print_papers_plain(&response.versions),
                _ => println!("{}", ui::papers_table(&response.versions)),
            }
        }

        Commands::Import { file } => {
            let content = std::fs::read_to_string(&file)?;
            let papers: Vec<Paper> = serde_json::from_str(&content)?;
            tracing::debug!("Read {} papers from {}", papers.len(), file.display());

            let response = api.batch_save(&papers).await?;

            match format {
                OutputFormat::Json => print_json(&response)?,
                _ => println!("{} (count: {})", response.message, response.count),
            }
        }

        Commands::Search { query, max_results } => {
            let response = api.search(&query, max_results).await?;

            match format {
                OutputFormat::Json => print_json(&response)?,
                OutputFormat::Plain => print_papers_plain(&response.papers),
                _ => {
                    println!("{}", ui::papers_table(&response.papers));
                    println!("Found {} papers for \"{}\"", response.papers.len(), query);
                }
            }
        }

        Commands::Subscribe { category } => {
            let response = api.subscribe(&category).await?;

            match format {
                OutputFormat::Json => print_json(&response)?,
                OutputFormat::Plain => print_papers_plain(&response.papers),
                _ => {
                    println!("{}", ui::papers_table(&response.papers));
                    println!("Fetched {} papers for category {}", response.count, category);
                }
            }
        }

        Commands::Stats => {
            let stats = api.stats().await?;

            match format {
                OutputFormat::Json => print_json(&stats)?,
                OutputFormat::Plain => {
                    println!("total_papers\t{}", stats.total_papers);
                    println!("db_size_bytes\t{}", stats.db_size_bytes);
                    println!("db_size_mb\t{}", stats.db_size_mb);
                }
                _ => println!("{}", ui::stats_view(&stats)),
            }
        }

        Commands::Open { path } => {
            let mut router = Router::new();
            let Some((page, params)) = router.navigate(&path) else {
                anyhow::bail!("No route matches {}", path);
            };

            tracing::debug!("Resolved {} to page {}", path, page.name());
            let ctx = PageContext::with_params(api, params);
            let view = page.render(&ctx).await?;

            if !cli.quiet {
                println!("{}", ui::section(page.title()));
            }
            println!("{}", view);
        }
    }

    Ok(())
}

/// Pick the concrete format for `auto` based on TTY detection.
fn resolve_format(format: OutputFormat) -> OutputFormat {
    match format {
        OutputFormat::Auto => {
            if ui::is_terminal() {
                OutputFormat::Table
            } else {
                OutputFormat::Json
            }
        }
        other => other,
    }
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_papers_plain(papers: &[Paper]) {
    for paper in papers {
        println!("{}\t{}", paper.key(), paper.title);
    }
}
