use anyhow::Result;
use clap::{CommandFactory, Parser, ValueEnum};
use clap_complete::Shell;
use std::io;
use std::time::Duration;

use staffdir::constants::{DEBOUNCE_WINDOW_MS, DEFAULT_PAGE_LIMIT};
use staffdir::{DirectoryApp, DirectoryClient, logging, output};

#[derive(Parser)]
#[command(
    name = "staffdir",
    version,
    about = "Search a remote employee directory from the terminal",
    long_about = None
)]
struct Cli {
    /// Search term for a one-shot, non-interactive lookup
    query: Option<String>,

    /// Base URL of the directory backend
    #[arg(long, env = "STAFFDIR_API_URL", default_value = "http://localhost:8000")]
    api_url: String,

    /// Maximum number of records per fetch
    #[arg(short = 'n', long, default_value_t = DEFAULT_PAGE_LIMIT)]
    limit: u32,

    /// Debounce window for interactive search, in milliseconds
    #[arg(long, default_value_t = DEBOUNCE_WINDOW_MS)]
    debounce_ms: u64,

    /// Output format for one-shot lookups
    #[arg(short = 'f', long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Probe the backend health endpoint and exit
    #[arg(long)]
    check_health: bool,

    /// Generate shell completions and exit
    #[arg(long, value_enum)]
    completions: Option<Shell>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(shell) = cli.completions {
        let mut command = Cli::command();
        let name = command.get_name().to_string();
        clap_complete::generate(shell, &mut command, name, &mut io::stdout());
        return Ok(());
    }

    if cli.no_color {
        colored::control::set_override(false);
    }

    let runtime = tokio::runtime::Runtime::new()?;
    let client = DirectoryClient::new(&cli.api_url);

    if cli.check_health {
        logging::init_tracing();
        return check_health(&runtime, &client);
    }

    // One-shot lookup
    if let Some(term) = cli.query.as_deref() {
        logging::init_tracing();
        let page = runtime.block_on(client.search_employees(term, cli.limit, 0))?;
        return match cli.format {
            OutputFormat::Text => {
                output::print_text(&page, term.trim());
                Ok(())
            }
            OutputFormat::Json => output::print_json(&page),
        };
    }

    // Interactive mode; tracing stays quiet while the alternate screen is up
    let mut app = DirectoryApp::new(
        client,
        runtime.handle().clone(),
        Duration::from_millis(cli.debounce_ms),
        cli.limit,
    );
    app.run()
}

fn check_health(runtime: &tokio::runtime::Runtime, client: &DirectoryClient) -> Result<()> {
    if runtime.block_on(client.health()) {
        println!("{} is healthy", client.base_url());
        Ok(())
    } else {
        println!("{} is unreachable or unhealthy", client.base_url());
        std::process::exit(1);
    }
}
