use clap::{Parser, Subcommand};
use std::io;
use std::path::PathBuf;

use wiki_search::browser::{open_article, OpenOutcome, SystemBrowser};
use wiki_search::config::{self, Config};
use wiki_search::output;
use wiki_search::session::{Session, SessionOptions};
use wiki_search::wikipedia::{SearchService, WikipediaClient};

const EXIT_SUCCESS: i32 = 0;
const EXIT_FAILURE: i32 = 1;
const EXIT_NETWORK: i32 = 2;
const EXIT_CONFIG: i32 = 4;

#[derive(Subcommand, Debug)]
enum Commands {
    /// Interactive search menu (default if no subcommand)
    Interactive,
    /// Run a single search and print the results
    Search {
        /// Search terms, joined with spaces
        #[arg(required = true)]
        terms: Vec<String>,
    },
    /// Open an article in the browser by its page id
    Open {
        /// Page id as reported by the search API
        page_id: u64,
    },
    /// Write a config file with default settings
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Parser, Debug)]
#[command(name = "wiki-search")]
#[command(about = "Search Wikipedia from the terminal", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/wiki-search/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Wikipedia language edition, e.g. "en" or "ru"
    #[arg(long, global = true)]
    lang: Option<String>,

    /// Number of results per search
    #[arg(long, global = true)]
    limit: Option<u32>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

fn init_logging(verbose: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if verbose {
        builder.filter_module("wiki_search", log::LevelFilter::Debug);
    }
    builder.format_timestamp(None).init();
}

/// Load the config file, apply CLI overrides and validate
fn load_effective_config(
    path: Option<PathBuf>,
    lang: Option<String>,
    limit: Option<u32>,
) -> Result<Config, i32> {
    let mut config = match config::load_config(path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            return Err(EXIT_CONFIG);
        }
    };

    if let Some(lang) = lang {
        config.language = lang;
    }
    if let Some(limit) = limit {
        config.result_limit = limit;
    }

    if let Err(errors) = config::validate_config(&config) {
        eprintln!("Config errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        return Err(EXIT_CONFIG);
    }

    log::debug!(
        "Using {} (limit {}, timeouts {}s/{}s)",
        config.api_url(),
        config.result_limit,
        config.connect_timeout_secs,
        config.read_timeout_secs
    );

    Ok(config)
}

fn create_client(config: &Config) -> Result<WikipediaClient, i32> {
    WikipediaClient::new(config).map_err(|e| {
        eprintln!("{:#}", e);
        EXIT_NETWORK
    })
}

fn run_init(path: Option<PathBuf>, force: bool) -> i32 {
    match config::write_default_config(path, force) {
        Ok(path) => {
            println!("Config written to {}", path.display());
            EXIT_SUCCESS
        }
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            EXIT_CONFIG
        }
    }
}

fn run_open(config: &Config, page_id: u64) -> i32 {
    let (url, outcome) = open_article(&SystemBrowser, &config.page_url(), page_id);
    println!(
        "{}",
        output::format_open_outcome(&format!("page {}", page_id), &url, &outcome)
    );
    match outcome {
        OpenOutcome::Failed(_) => EXIT_NETWORK,
        OpenOutcome::Opened | OpenOutcome::Unsupported => EXIT_SUCCESS,
    }
}

fn run_search(config: &Config, terms: &[String], use_colors: bool) -> i32 {
    let query = terms.join(" ");
    if query.trim().is_empty() {
        eprintln!("Query must not be empty.");
        return EXIT_FAILURE;
    }

    let client = match create_client(config) {
        Ok(c) => c,
        Err(code) => return code,
    };

    match client.search(query.trim()) {
        Ok(response) if response.is_empty() => {
            println!("Nothing found for your query.");
            EXIT_SUCCESS
        }
        Ok(response) => {
            println!(
                "{}",
                output::format_results(&response, use_colors, output::get_terminal_width())
            );
            for (idx, result) in response.results.iter().enumerate() {
                log::debug!("  {}. {}", idx + 1, result.url(&config.page_url()));
            }
            EXIT_SUCCESS
        }
        Err(e) => {
            eprintln!("{}", output::format_search_error(&e));
            EXIT_NETWORK
        }
    }
}

fn run_interactive(config: &Config, use_colors: bool) -> i32 {
    let client = match create_client(config) {
        Ok(c) => c,
        Err(code) => return code,
    };

    let options = SessionOptions {
        page_url: config.page_url(),
        use_colors,
        width: output::get_terminal_width(),
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(stdin.lock(), stdout.lock(), &client, &SystemBrowser, options);

    match session.run() {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Terminal error: {}", e);
            EXIT_FAILURE
        }
    }
}

fn main() {
    // Install rustls crypto provider (required for rustls 0.23+)
    rustls::crypto::ring::default_provider()
        .install_default()
        .expect("Failed to install rustls crypto provider");

    let cli = Cli::parse();
    init_logging(cli.verbose);

    let command = cli.command.unwrap_or(Commands::Interactive);
    let config_path = cli.config.map(PathBuf::from);
    let use_colors = !cli.no_color && output::should_use_colors();

    let load = || load_effective_config(config_path.clone(), cli.lang.clone(), cli.limit);

    let code = match command {
        Commands::Init { force } => run_init(config_path.clone(), force),
        Commands::Open { page_id } => load().map_or_else(|code| code, |c| run_open(&c, page_id)),
        Commands::Search { terms } => {
            load().map_or_else(|code| code, |c| run_search(&c, &terms, use_colors))
        }
        Commands::Interactive => {
            load().map_or_else(|code| code, |c| run_interactive(&c, use_colors))
        }
    };

    std::process::exit(code);
}
