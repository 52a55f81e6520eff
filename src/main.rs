use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context};
use clap::Parser;

use profile_card::config::Config;
use profile_card::logging::{init_tracing, LogTarget};
use profile_card::source::{HttpUserSource, UserSource};
use profile_card::ui::profile::ProfileContainer;
use profile_card::ui::render::render_to_text;
use profile_card::ui::runtime;

#[derive(Debug, Parser)]
#[command(name = "profile-card", version, about = "Show the current user's profile card")]
struct Cli {
    /// Base URL of the profile service (overrides the config file)
    #[arg(long)]
    url: Option<String>,

    /// Path of the current-user resource (overrides the config file)
    #[arg(long)]
    path: Option<String>,

    /// Config file to read instead of the default location
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Fetch once, print the card as plain text and exit
    #[arg(long)]
    print: bool,

    /// Output width for --print
    #[arg(long, default_value_t = 60)]
    width: u16,

    /// Log file for the interactive UI
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,
}

fn resolve_config(cli: &Cli) -> anyhow::Result<Config> {
    let path = cli.config.clone().unwrap_or_else(Config::config_path);
    let mut config =
        Config::load_from(&path).with_context(|| format!("loading {}", path.display()))?;

    if let Some(url) = &cli.url {
        config.source.base_url = url.clone();
    }
    if let Some(user_path) = &cli.path {
        config.source.user_path = user_path.clone();
    }
    config.validate().context("invalid settings")?;
    Ok(config)
}

async fn print_once(source: Arc<dyn UserSource>, width: u16) -> anyhow::Result<()> {
    let mut container = ProfileContainer::new(source);
    container.activate();

    let interrupted = tokio::select! {
        _ = container.wait_for_update() => false,
        _ = tokio::signal::ctrl_c() => true,
    };
    if interrupted {
        container.teardown();
        bail!("interrupted before the profile loaded");
    }

    let height = container.preferred_height(width);
    println!("{}", render_to_text(&container, width, height));

    if let Some(reason) = container.state().failure() {
        bail!("{}", reason);
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_target = if cli.print {
        LogTarget::Stderr
    } else {
        cli.log_file
            .clone()
            .map(LogTarget::File)
            .unwrap_or_else(LogTarget::default_file)
    };
    init_tracing(log_target).context("setting up logging")?;

    let config = resolve_config(&cli)?;
    let source: Arc<dyn UserSource> =
        Arc::new(HttpUserSource::from_config(&config.source).context("building HTTP client")?);

    if cli.print {
        return print_once(source, cli.width).await;
    }

    tokio::task::spawn_blocking(move || runtime::run(&config, source))
        .await
        .context("UI thread panicked")?
        .context("terminal UI failed")?;
    Ok(())
}
