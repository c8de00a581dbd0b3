use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use space_pulse::app::AppContext;
use space_pulse::cli::commands::{self, ArticleListOptions};
use space_pulse::cli::{Cli, Commands};
use space_pulse::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so listings stay pipeable.
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;
    let ctx = if cli.ephemeral {
        AppContext::ephemeral(config)?
    } else {
        AppContext::new(config, cli.db)?
    };

    match cli.command {
        Commands::Articles {
            site,
            featured,
            search,
            since,
            pages,
            refresh,
        } => {
            let opts = ArticleListOptions {
                site,
                featured,
                search,
                since_days: since,
                pages,
                refresh,
            };
            commands::list_articles(&ctx, opts).await?;
        }
        Commands::Blogs { search, pages } => {
            commands::list_blogs(&ctx, search.as_deref(), pages).await?;
        }
        Commands::Reports { search, pages } => {
            commands::list_reports(&ctx, search.as_deref(), pages).await?;
        }
        Commands::Show { kind, id, open } => {
            commands::show(&ctx, kind, id, open).await?;
        }
        Commands::Home => {
            commands::home(&ctx).await?;
        }
        Commands::Sites { select, clear } => {
            commands::sites(&ctx, select, clear).await?;
        }
        Commands::Save { kind, id } => {
            commands::save(&ctx, kind, id).await?;
        }
        Commands::Unsave { kind, id } => {
            commands::unsave(&ctx, kind, id)?;
        }
        Commands::Saved { clear: true, .. } => {
            commands::clear_saved(&ctx)?;
        }
        Commands::Saved { kind, clear: false } => {
            commands::list_saved(&ctx, kind)?;
        }
        Commands::Settings { action } => {
            commands::settings(&ctx, action)?;
        }
        Commands::ClearCache => {
            commands::clear_cache(&ctx)?;
        }
        Commands::History { clear } => {
            commands::history(&ctx, clear)?;
        }
    }

    Ok(())
}
