mod present;

use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;

use pcmap_app::{load, Directory};
use pcmap_core::{find_region, legal_doc, load_app_config, AppConfig, LegalKey, REGIONS};
use pcmap_feed::FeedClient;

use present::TerminalPresenter;

#[derive(Debug, Parser)]
#[command(name = "pcmap")]
#[command(about = "PC repair-shop directory")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Load the directory and print the listing for a region.
    Show {
        /// Top-level region name (defaults to 서울).
        #[arg(long)]
        region: Option<String>,
        /// Sub-region name; omit to list the whole region.
        #[arg(long)]
        sub_region: Option<String>,
        /// Skip the feed fetch and use the built-in seed data.
        #[arg(long)]
        offline: bool,
        /// Seed for the listing shuffle, for reproducible output.
        #[arg(long)]
        shuffle_seed: Option<u64>,
        /// Print the listing as JSON instead of text cards.
        #[arg(long)]
        json: bool,
    },
    /// Print the region taxonomy.
    Regions,
    /// Print a legal document.
    Legal {
        /// Document key: terms or privacy.
        key: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = load_app_config()?;
    init_tracing(&config);
    tracing::debug!(?config, "configuration loaded");

    let cli = Cli::parse();
    match cli.command {
        Commands::Show {
            region,
            sub_region,
            offline,
            shuffle_seed,
            json,
        } => show(&config, region, sub_region, offline, shuffle_seed, json).await?,
        Commands::Regions => print_regions(),
        Commands::Legal { key } => {
            let doc = legal_doc(key.parse::<LegalKey>()?);
            println!("{}\n\n{}", doc.title, doc.body);
        }
    }

    Ok(())
}

fn init_tracing(config: &AppConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

async fn show(
    config: &AppConfig,
    region: Option<String>,
    sub_region: Option<String>,
    offline: bool,
    shuffle_seed: Option<u64>,
    json: bool,
) -> anyhow::Result<()> {
    let presenter = TerminalPresenter::new(json);
    let mut directory = match shuffle_seed {
        Some(seed) => Directory::with_rng(presenter, StdRng::seed_from_u64(seed)),
        None => Directory::new(presenter),
    };

    // Regions are selectable only from the taxonomy; an unknown name is a
    // CLI usage error, not something the controller has to defend against.
    if let Some(name) = region {
        let region = find_region(&name)
            .ok_or_else(|| anyhow::anyhow!("unknown region \"{name}\"; run `pcmap regions`"))?;
        directory.select_region(region);
    }
    if sub_region.is_some() {
        directory.select_sub_region(sub_region);
    }

    if offline {
        directory.render();
    } else {
        let client = FeedClient::new(config.request_timeout_secs, &config.user_agent)?;
        load(&mut directory, &client, &config.feed_url).await;
    }

    directory.presenter().print();
    Ok(())
}

fn print_regions() {
    for region in REGIONS {
        println!("{}: {}", region.name, region.sub_regions.join(" "));
    }
}
