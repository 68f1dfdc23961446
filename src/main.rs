use anyhow::{Context, Result};
use clap::Parser;
use indicatif::ProgressBar;
use league_builds::analysis::fallback::FallbackCatalog;
use league_builds::analysis::recommender::{BuildRecommendation, BuildRecommender};
use league_builds::analysis::records::ItemCatalog;
use league_builds::api::client::DataDragonClient;
use league_builds::cache::CatalogCache;
use league_builds::config::Config;
use league_builds::display::output::{
    display_error, display_info, display_recommendation, display_success, display_warning,
};
use league_builds::error::AppError;
use std::thread;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "League Builds")]
#[command(about = "Recommend items and skill order for a champion", long_about = None)]
struct Args {
    /// Champion id as used by Data Dragon (e.g. Ahri, MonkeyKing)
    champion: String,

    /// Data Dragon version (default: DDRAGON_VERSION or 14.25.1)
    #[arg(short, long)]
    version: Option<String>,

    /// Locale for champion and item text (default: DDRAGON_LOCALE or en_US)
    #[arg(short, long)]
    locale: Option<String>,

    /// Print the recommendation as JSON instead of tables
    #[arg(long)]
    json: bool,

    /// Ignore the cached item catalog and fetch it again
    #[arg(long)]
    refresh: bool,

    /// Skip the item catalog and use the static fallback builds
    #[arg(long)]
    offline: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let args = Args::parse();

    if let Err(e) = run(args) {
        display_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let mut config = Config::from_env()?;
    if let Some(version) = args.version {
        config.version = version;
    }
    if let Some(locale) = args.locale {
        config.locale = locale;
    }

    display_info(&format!(
        "Fetching {} from Data Dragon {} ({})",
        args.champion, config.version, config.locale
    ));

    let client = DataDragonClient::new(config.clone());
    let cdn = client.cdn();
    let cache_dir = CatalogCache::cache_dir();

    let cached = if args.offline || args.refresh {
        None
    } else {
        load_cached_catalog(&config, &cache_dir)
    };
    let need_catalog = !args.offline && cached.is_none();

    let pb = ProgressBar::new(if need_catalog { 2 } else { 1 });
    pb.set_message("Fetching game data");

    // The champion and the catalog are independent, fetch them side by side.
    let (champion, fetched) = thread::scope(|s| {
        let catalog_handle = if need_catalog {
            Some(s.spawn(|| {
                let result = client.get_item_catalog();
                pb.inc(1);
                result
            }))
        } else {
            None
        };
        let champion = client.get_champion(&args.champion);
        pb.inc(1);
        let fetched = catalog_handle.map(|h| {
            h.join()
                .unwrap_or_else(|_| Err(AppError::HttpError("catalog fetch panicked".into())))
        });
        (champion, fetched)
    });
    pb.finish_and_clear();

    let champion = champion.with_context(|| format!("could not load champion '{}'", args.champion))?;
    display_success(&format!("Loaded {} ({})", champion.name, champion.role_tags.join(", ")));

    let catalog: Option<ItemCatalog> = match (cached, fetched) {
        (Some(items), _) => Some(items),
        (None, Some(Ok(items))) => {
            let cache = CatalogCache::new(&config.version, &config.locale, items);
            match cache.save(&cache_dir) {
                Ok(path) => info!(path = %path.display(), "cached item catalog"),
                Err(e) => warn!(error = %e, "could not cache item catalog"),
            }
            display_success(&format!("Loaded {} items", cache.items.len()));
            Some(cache.items)
        }
        (None, Some(Err(e))) => {
            display_warning(&format!("Item catalog unavailable ({}), using fallback builds", e));
            None
        }
        (None, None) => None,
    };

    let recommendation: BuildRecommendation = match catalog {
        Some(items) => BuildRecommender::recommend(&champion, &items, &cdn),
        None => {
            let fallback = load_fallback(&config)?;
            BuildRecommender::fallback(&champion, &fallback, &cdn)
        }
    };

    if args.json {
        let json = serde_json::to_string_pretty(&recommendation)
            .context("could not serialize recommendation")?;
        println!("{}", json);
    } else {
        display_recommendation(&recommendation);
    }

    Ok(())
}

fn load_cached_catalog(config: &Config, dir: &std::path::Path) -> Option<ItemCatalog> {
    match CatalogCache::load(dir, &config.version, &config.locale) {
        Ok(Some(cache)) if !cache.is_stale(config.cache_ttl_minutes) => {
            display_success("⚡ Using cached item catalog");
            Some(cache.items)
        }
        Ok(Some(_)) => {
            info!("cached item catalog is stale");
            None
        }
        Ok(None) => None,
        Err(e) => {
            display_warning(&format!("{}, refetching", e));
            None
        }
    }
}

fn load_fallback(config: &Config) -> Result<FallbackCatalog> {
    match &config.fallback_file {
        Some(path) => FallbackCatalog::load(path)
            .with_context(|| format!("could not load fallback builds from {}", path.display())),
        None => Ok(FallbackCatalog::embedded()?),
    }
}
