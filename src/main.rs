//! Seorion CLI.
//!
//! Validates a route manifest, audits SEO health per route, and generates
//! sitemap.xml / robots.txt.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use seorion::config::loader::{load_config, ConfigError};
use seorion::config::schema::SiteConfig;
use seorion::config::watcher::ManifestWatcher;
use seorion::observability::init_logging;
use seorion::seo::{self, ScoreBand};
use seorion::sitemap::{FileGenerator, HttpFetcher};

#[derive(Parser)]
#[command(name = "seorion")]
#[command(about = "SEO auditing and sitemap generation for route manifests", long_about = None)]
struct Cli {
    /// Path to the route manifest.
    #[arg(short, long, default_value = "seorion.toml", global = true)]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate the route manifest
    Check,
    /// Print the SEO report for each route
    Audit {
        /// Only audit the route with this exact path
        #[arg(long)]
        route: Option<String>,

        /// Re-audit whenever the manifest changes
        #[arg(long)]
        watch: bool,

        /// Emit reports as JSON
        #[arg(long)]
        json: bool,
    },
    /// Generate sitemap.xml and robots.txt
    Generate {
        /// Output directory (overrides the manifest's output_dir)
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// Bearer token for dynamic path endpoints
        #[arg(long)]
        token: Option<String>,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match load_config(&cli.config) {
        Ok(config) => config,
        Err(ConfigError::Validation(errors)) => {
            eprintln!("Manifest {} is invalid:", cli.config.display());
            for error in &errors {
                eprintln!("  - {error}");
            }
            return ExitCode::FAILURE;
        }
        Err(e) => {
            eprintln!("Failed to load {}: {e}", cli.config.display());
            return ExitCode::FAILURE;
        }
    };

    init_logging(&config.observability.log_level);
    tracing::info!(
        manifest = %cli.config.display(),
        routes = config.routes.len(),
        "Manifest loaded"
    );

    match cli.command {
        Commands::Check => {
            // Loading already validated; reaching here means the manifest is fine.
            println!(
                "{}: OK ({} routes)",
                cli.config.display(),
                config.routes.len()
            );
            ExitCode::SUCCESS
        }
        Commands::Audit { route, watch, json } => {
            run_audit(&config, route.as_deref(), json);
            if watch {
                watch_audit(&cli.config, route.as_deref(), json).await
            } else {
                ExitCode::SUCCESS
            }
        }
        Commands::Generate { out, token } => run_generate(&config, out, token).await,
    }
}

fn run_audit(config: &SiteConfig, only: Option<&str>, json: bool) {
    let routes = config
        .routes
        .iter()
        .filter(|r| only.is_none_or(|path| r.path == path));

    if json {
        let reports: Vec<_> = routes
            .map(|r| serde_json::json!({ "path": r.path, "report": seo::score(r) }))
            .collect();
        match serde_json::to_string_pretty(&reports) {
            Ok(text) => println!("{text}"),
            Err(e) => eprintln!("Failed to serialize reports: {e}"),
        }
        return;
    }

    for route in routes {
        let report = seo::score(route);
        let band = ScoreBand::for_score(report.score);
        println!(
            "{}  {}/{}  {}",
            route.path,
            report.score,
            seo::max_score(),
            band.as_str()
        );
        for item in &report.checklist {
            if item.passed {
                println!("  [x] {}", item.label);
            } else {
                println!("  [ ] {} - {}", item.label, item.hint);
            }
        }
        println!();
    }
}

async fn watch_audit(manifest: &Path, only: Option<&str>, json: bool) -> ExitCode {
    let (watcher, mut updates) = ManifestWatcher::new(manifest);
    let _watcher = match watcher.run() {
        Ok(w) => w,
        Err(e) => {
            eprintln!("Failed to watch {}: {e}", manifest.display());
            return ExitCode::FAILURE;
        }
    };

    while let Some(config) = updates.recv().await {
        run_audit(&config, only, json);
    }
    ExitCode::SUCCESS
}

async fn run_generate(
    config: &SiteConfig,
    out: Option<PathBuf>,
    token: Option<String>,
) -> ExitCode {
    if config.base_url.is_empty() {
        eprintln!("base_url must be set in the manifest to generate files");
        return ExitCode::FAILURE;
    }

    let output_dir = out.unwrap_or_else(|| {
        if config.output_dir.is_empty() {
            PathBuf::from("public")
        } else {
            PathBuf::from(&config.output_dir)
        }
    });

    let generator = match FileGenerator::new(&config.base_url, output_dir) {
        Ok(g) => g,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    // base_url already validated by the loader.
    let base = match config.base_url.parse() {
        Ok(base) => base,
        Err(e) => {
            eprintln!("Invalid base_url: {e}");
            return ExitCode::FAILURE;
        }
    };
    let fetcher = HttpFetcher::new(base, token);

    match generator
        .generate(&config.routes, &config.robots, &fetcher)
        .await
    {
        Ok(files) => {
            println!(
                "Wrote {} and {} ({} URLs)",
                files.sitemap.display(),
                files.robots.display(),
                files.url_count
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Generation failed: {e}");
            ExitCode::FAILURE
        }
    }
}
