use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{bail, Context};
use clap::{Args, Parser, Subcommand};
use nb_bot::{commands, Command, JobConfig, NewsJob, Publisher, TelegramTransport};
use nb_core::logging::init_logging;
use nb_core::sources::default_sources;
use nb_core::PostedStore;
use nb_scrapers::cli::{handle_command, SourceArgs};
use nb_scrapers::{HttpFetcher, PageFetcher, ScraperManager};
use nb_storage::DEFAULT_DB_PATH;
use nb_web::AppState;
use teloxide::prelude::*;
use teloxide::update_listeners::webhooks;
use teloxide::utils::command::BotCommands;
use tokio::time::{Instant, MissedTickBehavior};
use tracing::{error, info};

mod duration;

use duration::HumanDuration;

const WEBHOOK_PATH: &str = "/webhook";

#[derive(Parser, Debug)]
#[command(name = "newsbot", author, version, about = "Posts fresh travel news to a Telegram channel", long_about = None)]
pub struct Cli {
    /// Deduplication store backend: sqlite or memory
    #[arg(long, default_value = "sqlite")]
    storage: String,
    /// SQLite database file
    #[arg(long, env = "DB_PATH", default_value = DEFAULT_DB_PATH)]
    db_path: PathBuf,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the webhook server, chat commands and the periodic check
    Serve {
        #[command(flatten)]
        bot: BotArgs,
        #[command(flatten)]
        serve: ServeArgs,
    },
    /// Run a single check of all sources and exit
    Check {
        #[command(flatten)]
        bot: BotArgs,
    },
    /// Inspect configured sources
    Sources(SourceArgs),
}

#[derive(Args, Debug, Clone)]
struct BotArgs {
    /// Telegram bot token
    #[arg(long, env = "BOT_TOKEN", hide_env_values = true)]
    bot_token: String,
    /// Target channel: @channelname or numeric id such as -1001234567890
    #[arg(long, env = "CHANNEL_ID")]
    channel_id: String,
}

#[derive(Args, Debug, Clone)]
struct ServeArgs {
    /// Public base URL Telegram delivers updates to, e.g. https://travel.example.com
    #[arg(long, env = "WEBHOOK_URL")]
    webhook_url: String,
    /// Port for the webhook and health endpoints
    #[arg(long, env = "PORT", default_value_t = 8443)]
    port: u16,
    /// Time between checks (e.g. 1h, 30m, 1h15m30s)
    #[arg(long, default_value = "1h")]
    interval: HumanDuration,
    /// Delay before the first check after startup
    #[arg(long, default_value = "10s")]
    first_run_delay: HumanDuration,
}

/// Everything a check pass needs, wired once at startup.
struct Runtime {
    bot: Bot,
    store: Arc<dyn PostedStore>,
    job: Arc<NewsJob>,
}

impl Runtime {
    async fn build(cli: &Cli, bot_args: &BotArgs) -> anyhow::Result<Self> {
        let store = nb_storage::create_storage(&cli.storage, &cli.db_path).await?;
        let fetcher: Arc<dyn PageFetcher> = Arc::new(HttpFetcher::new()?);

        let bot = Bot::new(&bot_args.bot_token);
        let transport = Arc::new(TelegramTransport::new(bot.clone(), &bot_args.channel_id)?);
        let publisher = Publisher::new(fetcher.clone(), transport, store.clone());

        let job = NewsJob::new(
            default_sources(),
            ScraperManager::new(fetcher),
            store.clone(),
            publisher,
            JobConfig::default(),
        );

        Ok(Self {
            bot,
            store,
            job: Arc::new(job),
        })
    }
}

fn webhook_endpoint(base: &str) -> anyhow::Result<url::Url> {
    let endpoint = format!("{}{}", base.trim_end_matches('/'), WEBHOOK_PATH);
    url::Url::parse(&endpoint).with_context(|| format!("Invalid webhook URL: {}", endpoint))
}

fn spawn_periodic_check(job: Arc<NewsJob>, first_run_delay: Duration, interval: Duration) {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval_at(Instant::now() + first_run_delay, interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            ticker.tick().await;
            job.run_once().await;
        }
    });
}

async fn serve(cli: &Cli, bot_args: &BotArgs, args: &ServeArgs) -> anyhow::Result<()> {
    if args.interval.0.is_zero() {
        bail!("--interval must be greater than zero");
    }

    let runtime = Runtime::build(cli, bot_args).await?;

    runtime
        .bot
        .set_my_commands(Command::bot_commands())
        .await
        .context("Failed to register bot commands")?;

    let addr = SocketAddr::from(([0, 0, 0, 0], args.port));
    let endpoint = webhook_endpoint(&args.webhook_url)?;
    let options = webhooks::Options::new(addr, endpoint.clone());
    let (listener, stop_flag, webhook_router) = webhooks::axum_to_router(runtime.bot.clone(), options)
        .await
        .context("Failed to set up the webhook")?;
    info!("🔗 Webhook set to {}", endpoint);

    let app = webhook_router.merge(nb_web::create_app(AppState {
        store: runtime.store.clone(),
        sources: runtime.job.sources().iter().map(|s| s.name.clone()).collect(),
    }));

    let tcp = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tokio::spawn(async move {
        if let Err(e) = axum::serve(tcp, app).with_graceful_shutdown(stop_flag).await {
            error!("HTTP server error: {}", e);
        }
    });

    info!(
        "⏰ Checking {} sources every {}s, first run in {}s",
        runtime.job.sources().len(),
        args.interval.0.as_secs(),
        args.first_run_delay.0.as_secs()
    );
    spawn_periodic_check(runtime.job.clone(), args.first_run_delay.0, args.interval.0);

    info!("🤖 Bot started, waiting for updates on port {}", args.port);
    Dispatcher::builder(runtime.bot.clone(), commands::schema())
        .dependencies(dptree::deps![runtime.job.clone()])
        .enable_ctrlc_handler()
        .build()
        .dispatch_with_listener(
            listener,
            LoggingErrorHandler::with_custom_text("An error from the update listener"),
        )
        .await;

    info!("Bot stopped");
    Ok(())
}

async fn check(cli: &Cli, bot_args: &BotArgs) -> anyhow::Result<()> {
    let runtime = Runtime::build(cli, bot_args).await?;
    let report = runtime.job.run_once().await;
    println!(
        "Checked {} sources: {} candidates, {} published, {} failed",
        report.sources, report.candidates, report.published, report.failed
    );
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match &cli.command {
        Commands::Serve { bot, serve: args } => serve(&cli, bot, args).await,
        Commands::Check { bot } => check(&cli, bot).await,
        Commands::Sources(args) => {
            let fetcher: Arc<dyn PageFetcher> = Arc::new(HttpFetcher::new()?);
            let manager = ScraperManager::new(fetcher);
            handle_command(args.clone(), &default_sources(), &manager).await?;
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_serve_args() {
        let cli = Cli::try_parse_from([
            "newsbot",
            "serve",
            "--bot-token",
            "123:abc",
            "--channel-id",
            "@travel",
            "--webhook-url",
            "https://travel.example.com/",
            "--interval",
            "30m",
        ])
        .unwrap();

        match cli.command {
            Commands::Serve { bot, serve } => {
                assert_eq!(bot.channel_id, "@travel");
                assert_eq!(serve.port, 8443);
                assert_eq!(serve.interval.0, Duration::from_secs(1800));
                assert_eq!(serve.first_run_delay.0, Duration::from_secs(10));
            }
            other => panic!("unexpected command {:?}", other),
        }
        assert_eq!(cli.storage, "sqlite");
    }

    #[test]
    fn test_sources_needs_no_token() {
        let cli = Cli::try_parse_from(["newsbot", "--storage", "memory", "sources", "list"]).unwrap();
        assert!(matches!(cli.command, Commands::Sources(_)));
    }

    #[test]
    fn test_webhook_endpoint() {
        assert_eq!(
            webhook_endpoint("https://travel.example.com/").unwrap().as_str(),
            "https://travel.example.com/webhook"
        );
        assert_eq!(
            webhook_endpoint("https://example.com/bots/travel").unwrap().as_str(),
            "https://example.com/bots/travel/webhook"
        );
        assert!(webhook_endpoint("not a url").is_err());
    }
}
