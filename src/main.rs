use rejuvana::cli::commands;
use rejuvana::cli::output::Output;
use rejuvana::cli::{Cli, Commands};
use rejuvana::SiteConfig;
use tracing_subscriber::{layer::SubscriberExt, reload, util::SubscriberInitExt, EnvFilter};

/// `RUST_LOG` wins, then `--verbose`, then the configured level
fn log_filter(verbose: bool, level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = if verbose { "debug" } else { level };
        EnvFilter::new(format!("rejuvana={}", level))
    })
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse_args();
    let output = if cli.no_color {
        Output::no_color()
    } else {
        Output::new()
    };

    // Installed before the config loads so its messages are not lost
    let (filter, filter_handle) = reload::Layer::new(log_filter(cli.verbose, "info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = match SiteConfig::load_or_default(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            output.error(&format!("Failed to load {}: {}", cli.config.display(), e));
            std::process::exit(1);
        }
    };

    if let Err(e) = filter_handle.reload(log_filter(cli.verbose, &config.server.log_level)) {
        tracing::warn!("Could not apply log level {}: {}", config.server.log_level, e);
    }

    let result = match cli.command {
        Commands::Feed { json } => commands::run_feed(&config, &output, json).await,
        Commands::Lead {
            name,
            email,
            message,
        } => commands::run_lead(&config, &output, &name, &email, &message).await,
        Commands::Guides { all } => {
            commands::list_guides(&output, all);
            Ok(())
        }
        Commands::Config { validate } => commands::show_config(&config, &output, validate),
        #[cfg(feature = "ui")]
        Commands::Serve { port } => {
            let mut config = config;
            if let Some(port) = port {
                config.server.port = port;
            }
            output.banner();
            rejuvana::api::serve(&config).await?;
            Ok(())
        }
    };

    if let Err(e) = result {
        output.error(&e.to_string());
        std::process::exit(1);
    }
    Ok(())
}
