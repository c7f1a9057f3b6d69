use std::path::PathBuf;

use chrono::Local;
use clap::Parser;
use fltk::app;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use daybook::app::domain::messages::Message;
use daybook::app::domain::settings::AppConfig;
use daybook::app::state::AppState;

/// Daybook - today's worries and journal, one keystroke from saved
#[derive(Parser, Debug)]
#[command(name = "Daybook")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Configuration file to read and write instead of the default
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Directory to keep pages in (stored in the configuration on exit)
    #[arg(short, long, value_name = "DIR")]
    save_dir: Option<PathBuf>,

    /// Verbose logging
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let log_level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_target(false).with_level(true))
        .with(tracing_subscriber::filter::LevelFilter::from_level(log_level))
        .init();
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    tracing::info!("Starting Daybook v{}", env!("CARGO_PKG_VERSION"));

    let config_path = args.config.unwrap_or_else(AppConfig::default_path);
    let mut config = AppConfig::load(&config_path);
    if let Some(dir) = args.save_dir {
        config.save_dir = dir;
    }

    let app = app::App::default();
    let (sender, receiver) = app::channel::<Message>();

    let mut state = AppState::new(config, config_path, sender, Local::now().naive_local());
    state.show();

    while app.wait() {
        if let Some(msg) = receiver.recv() {
            if !state.handle(msg) {
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_parsing() {
        let args = Args::parse_from(["Daybook"]);
        assert!(args.config.is_none());
        assert!(args.save_dir.is_none());
        assert_eq!(args.verbose, 0);
    }

    #[test]
    fn test_args_with_overrides() {
        let args = Args::parse_from([
            "Daybook",
            "--config",
            "/tmp/c.json",
            "-s",
            "/tmp/pages",
            "-vv",
        ]);
        assert_eq!(args.config, Some(PathBuf::from("/tmp/c.json")));
        assert_eq!(args.save_dir, Some(PathBuf::from("/tmp/pages")));
        assert_eq!(args.verbose, 2);
    }
}
