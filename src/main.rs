//! Container Compass binary entry point.

use std::process::ExitCode;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use container_compass::adapters::storage::FileThemeStore;
use container_compass::adapters::system::EnvThemeSignal;
use container_compass::adapters::terminal::{StdinChoiceInput, TerminalRenderer};
use container_compass::application::{RunQuestionnaireHandler, ThemeService};
use container_compass::config::AppConfig;
use container_compass::domain::flow::DEFAULT_CATALOG;

fn main() -> ExitCode {
    let config = match AppConfig::load().and_then(|config| {
        config.validate()?;
        Ok(config)
    }) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("configuration error: {}", err);
            return ExitCode::FAILURE;
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.ui.log_level.clone())),
        )
        .with_writer(std::io::stderr)
        .init();

    let theme = ThemeService::new(
        Arc::new(FileThemeStore::new(&config.theme.preference_file)),
        Arc::new(EnvThemeSignal::new(config.theme.fallback_scheme)),
    );
    let scheme = theme.init();
    tracing::debug!(%scheme, "color scheme selected");

    let mut args = std::env::args().skip(1);
    if let Some(arg) = args.next() {
        if arg == "toggle-theme" {
            return match theme.toggle(scheme) {
                Ok(next) => {
                    println!("theme set to {}", next);
                    ExitCode::SUCCESS
                }
                Err(err) => {
                    tracing::error!(error = %err, "failed to persist theme");
                    ExitCode::FAILURE
                }
            };
        }
        eprintln!("unknown argument '{}'; usage: container-compass [toggle-theme]", arg);
        return ExitCode::FAILURE;
    }

    let handler = RunQuestionnaireHandler::new(
        Arc::new(TerminalRenderer::new(
            scheme,
            config.ui.color,
            config.ui.show_hints,
        )),
        Arc::new(StdinChoiceInput::new()),
        Arc::new(DEFAULT_CATALOG.clone()),
    );

    match handler.handle() {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "questionnaire failed");
            ExitCode::FAILURE
        }
    }
}
