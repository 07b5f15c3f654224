//! application entry point

use crate::store::model::config::StoreConfig;
use crate::store::model::lesson::SortKey;
use clap::{Args, Parser, Subcommand};
use derive_more::Display;
use log::info;
use std::env;
use std::path::Path;
use std::str::FromStr;

mod store;

const DEFAULT_API_BASE_URL: &str = "https://backend-gq5t.onrender.com";

#[derive(Parser, Debug)]
#[command(name = "storefront")]
#[command(about = "client cli used by customers to browse lessons, fill a cart and book classes", version, long_about = None
)]
struct Cli {
    /// backend base url, overrides STORE_API_BASE_URL
    #[arg(long, global = true, value_name = "URL")]
    host: Option<String>,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// interactive storefront session
    Browse,
    /// one-shot lesson listing
    Lessons(LessonsArgs),
}

#[derive(Debug, Args)]
struct LessonsArgs {
    #[arg(long, help = "Only show lessons matching the given text.", value_name = "TERM")]
    search: Option<String>,
    #[arg(long, help = "Sort by subject, location, price or seats.", value_name = "KEY")]
    sort: Option<SortKey>,
    #[arg(long, help = "Sort in descending order.")]
    desc: bool,
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    // bootstrap
    // a. env
    let env = env::var("APP_ENV")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(Env::Dev); // default dev env if absent

    match env {
        Env::Prod | Env::Stg => {} // load in CI
        Env::Dev => {
            // a missing .env.dev falls through to the defaults below
            dotenvy::from_path(Path::new(".env.dev")).ok();
        }
    };

    // b. logging
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    // c. run app
    let args = Cli::parse();
    let base_url = args
        .host
        .or_else(|| env::var("STORE_API_BASE_URL").ok())
        .unwrap_or(DEFAULT_API_BASE_URL.to_string());
    let config = StoreConfig::new(base_url);

    info!("Storefront is starting in env={}", env);

    match args.command.unwrap_or(Commands::Browse) {
        Commands::Browse => store::browse(config).await,
        Commands::Lessons(args) => store::list_lessons(config, args.search, args.sort, args.desc).await,
    }
}

#[derive(Debug, Display)]
#[non_exhaustive]
enum Env {
    Dev,
    Stg,
    Prod,
}

impl FromStr for Env {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dev" => Ok(Self::Dev),
            "stg" => Ok(Self::Stg),
            "prod" => Ok(Self::Prod),
            s => Err(format!("Invalid Env: {s}")),
        }
    }
}
