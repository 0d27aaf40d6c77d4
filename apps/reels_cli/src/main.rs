use std::{path::PathBuf, sync::Arc};

use anyhow::{bail, Result};
use clap::{Parser, Subcommand, ValueEnum};
use client_core::{
    mock_data, ClientContext, LoadOutcome, OnboardingStep, OnboardingWizard, StaticPostSource,
};
use serde_json::json;
use shared::{
    domain::{FeedFilter, InitialRoute, NewsMix, PostId, Topic},
    theme::{background_gradient, ColorScheme, ThemeToken},
};
use storage::Storage;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod config;

use config::{load_settings, normalize_database_url};

#[derive(Parser, Debug)]
#[command(name = "reels", about = "Drive the onboarding gate and the reels feed")]
struct Args {
    #[arg(long, default_value = "reels.toml")]
    config: PathBuf,
    #[arg(long)]
    database_url: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show the onboarding flag and the initial route.
    Status,
    /// Mark onboarding complete.
    Complete,
    /// Forget onboarding completion.
    Reset,
    /// Walk the first-run screens and finish onboarding.
    Wizard {
        #[arg(long, value_enum)]
        news_mix: NewsMixArg,
        #[arg(long = "drop-topic", value_enum)]
        drop_topics: Vec<TopicArg>,
        #[arg(long)]
        notifications: bool,
    },
    /// Load the feed and apply engagement actions.
    Feed {
        #[arg(long)]
        filter: Option<String>,
        #[arg(long)]
        like: Vec<String>,
        #[arg(long)]
        comment: Vec<String>,
        #[arg(long)]
        share: Vec<String>,
        #[arg(long)]
        refresh: bool,
    },
    /// Upgrade the mock user to premium.
    Upgrade,
    /// Print the resolved colour tokens.
    Theme {
        #[arg(long, value_enum, default_value = "dark")]
        scheme: SchemeArg,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum NewsMixArg {
    Trending,
    InDepth,
    Balanced,
}

impl From<NewsMixArg> for NewsMix {
    fn from(value: NewsMixArg) -> Self {
        match value {
            NewsMixArg::Trending => NewsMix::TrendingPopCulture,
            NewsMixArg::InDepth => NewsMix::InDepthAnalysis,
            NewsMixArg::Balanced => NewsMix::BalancedMix,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum TopicArg {
    UsNews,
    Politics,
    Sports,
    Business,
    Lifestyle,
    Entertainment,
    Education,
    World,
}

impl From<TopicArg> for Topic {
    fn from(value: TopicArg) -> Self {
        match value {
            TopicArg::UsNews => Topic::UsNews,
            TopicArg::Politics => Topic::Politics,
            TopicArg::Sports => Topic::Sports,
            TopicArg::Business => Topic::Business,
            TopicArg::Lifestyle => Topic::Lifestyle,
            TopicArg::Entertainment => Topic::Entertainment,
            TopicArg::Education => Topic::Education,
            TopicArg::World => Topic::World,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SchemeArg {
    Light,
    Dark,
}

impl From<SchemeArg> for ColorScheme {
    fn from(value: SchemeArg) -> Self {
        match value {
            SchemeArg::Light => ColorScheme::Light,
            SchemeArg::Dark => ColorScheme::Dark,
        }
    }
}

fn print_json(value: &serde_json::Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let mut settings = load_settings(&args.config);
    if let Some(database_url) = args.database_url {
        settings.database_url = database_url;
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&settings.log_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    let database_url = normalize_database_url(&settings.database_url);
    let storage = Storage::new(&database_url).await?;
    info!(database_url = %database_url, "storage ready");

    let context = ClientContext::new(
        Arc::new(storage),
        Arc::new(StaticPostSource::with_mock_data(settings.latency())),
        settings.feed_options(),
        Some(mock_data::mock_user()),
    );
    let status = context.onboarding.get_status().await;

    match args.command {
        Command::Status => {
            let route = context.onboarding.initial_route();
            print_json(&json!({
                "status": status,
                "route": route,
                "path": route.map(InitialRoute::path),
            }))?;
        }
        Command::Complete => {
            context.onboarding.complete_onboarding().await;
            print_json(&json!({ "status": context.onboarding.status() }))?;
        }
        Command::Reset => {
            context.onboarding.reset().await?;
            print_json(&json!({ "status": context.onboarding.status() }))?;
        }
        Command::Wizard {
            news_mix,
            drop_topics,
            notifications,
        } => {
            if status.is_onboarding_complete {
                warn!("onboarding already complete; walking the wizard again");
            }
            let mut wizard = OnboardingWizard::new();
            wizard.select_news_mix(news_mix.into());
            while wizard.step() != OnboardingStep::Notifications {
                if wizard.step() == OnboardingStep::Topics {
                    for topic in &drop_topics {
                        let topic = Topic::from(*topic);
                        if wizard.answers().topics.contains(&topic) {
                            wizard.toggle_topic(topic);
                        }
                    }
                }
                let step = wizard.advance()?;
                info!(step = ?step, route = step.route(), "wizard step");
            }
            let answers = wizard.finish(notifications, &context.onboarding).await?;
            print_json(&json!({
                "answers": answers,
                "route": context.onboarding.initial_route(),
            }))?;
        }
        Command::Feed {
            filter,
            like,
            comment,
            share,
            refresh,
        } => {
            if context.onboarding.initial_route() != Some(InitialRoute::Feed) {
                bail!("onboarding is not complete; run `reels wizard` or `reels complete` first");
            }
            let filter = filter
                .as_deref()
                .map(FeedFilter::from_label_lossy)
                .unwrap_or_else(|| context.feed.active_filter());
            let mut outcome = context.feed.set_active_filter(filter).await;
            if refresh {
                outcome = context.feed.refresh().await;
            }
            if let LoadOutcome::Failed(err) = &outcome {
                warn!(error = %err, "feed load failed; showing previous view");
            }

            for id in like.iter().map(|id| PostId::new(id.as_str())) {
                if !context.feed.like_post(&id) {
                    warn!(post_id = %id, "like ignored: post not in view");
                }
            }
            for id in comment.iter().map(|id| PostId::new(id.as_str())) {
                if !context.feed.comment_on_post(&id) {
                    warn!(post_id = %id, "comment ignored: post not in view");
                }
            }
            for id in share.iter().map(|id| PostId::new(id.as_str())) {
                if !context.feed.share_post(&id) {
                    warn!(post_id = %id, "share ignored: post not in view");
                }
            }

            print_json(&json!({
                "filter_label": context.feed.active_filter().label(),
                "feed": context.feed.snapshot(),
            }))?;
        }
        Command::Upgrade => {
            let upgraded = context.session.upgrade_to_premium();
            print_json(&json!({
                "upgraded": upgraded,
                "user": context.session.current_user(),
                "premium_features": context.session.premium_features(),
            }))?;
        }
        Command::Theme { scheme } => {
            let scheme = ColorScheme::from(scheme);
            let tokens: serde_json::Map<String, serde_json::Value> = ThemeToken::ALL
                .iter()
                .map(|token| {
                    (
                        serde_json::to_value(token)
                            .ok()
                            .and_then(|v| v.as_str().map(str::to_string))
                            .unwrap_or_else(|| format!("{token:?}")),
                        json!(token.resolve(scheme)),
                    )
                })
                .collect();
            print_json(&json!({
                "scheme": scheme,
                "tokens": tokens,
                "background_gradient": background_gradient(scheme),
            }))?;
        }
    }

    Ok(())
}
