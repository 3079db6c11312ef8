//! CLI entrypoint for Wardrobe Stylist
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Result, bail};
use clap::Parser;
use std::io::IsTerminal;
use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use wardrobe_application::{
    AddItemUseCase, BehaviorConfig, ConversationLogger, NoConversationLogger, NoProgress,
    RequestSuggestionUseCase, StylistGateway, SuggestionOutcome, SuggestionProgress,
    ToggleSelectionUseCase, WardrobeSession,
};
use wardrobe_domain::{OutputFormat, WardrobeState};
use wardrobe_infrastructure::{
    ApiKey, ConfigLoader, ConfigurationError, FileConfig, GeminiGateway, GeminiSettings,
    ImageFileLoader, JsonlConversationLogger,
};
use wardrobe_presentation::{
    Cli, ConsoleConfig, ConsoleFormatter, ProgressReporter, SimpleProgress, WardrobeRepl,
};

/// Exit code for configuration problems (missing key, invalid config)
const EXIT_CONFIG: u8 = 2;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let _log_guard = match init_logging(cli.verbose, cli.log_file.as_deref()) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("{}", ConsoleFormatter::error_line(&e.to_string()));
            return ExitCode::FAILURE;
        }
    };

    if cli.no_color {
        colored::control::set_override(false);
    }

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return ExitCode::SUCCESS;
    }

    info!("Starting Wardrobe Stylist");

    let services = match Services::build(&cli) {
        Ok(services) => services,
        Err(e) => {
            warn!("Configuration error: {}", e);
            eprintln!("{}", ConsoleFormatter::configuration_error(&e));
            return ExitCode::from(EXIT_CONFIG);
        }
    };

    match run(&cli, services).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}", ConsoleFormatter::error_line(&format!("{:#}", e)));
            ExitCode::FAILURE
        }
    }
}

/// Initialize tracing: `-v` count picks the level, `RUST_LOG` applies when no
/// `-v` is given, and `--log-file` redirects output to a file.
fn init_logging(verbose: u8, log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    let Some(path) = log_file else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
        return Ok(None);
    };

    let Some(file_name) = path.file_name() else {
        bail!("--log-file must name a file: {}", path.display());
    };
    let directory = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    std::fs::create_dir_all(directory)?;

    let (writer, guard) =
        tracing_appender::non_blocking(tracing_appender::rolling::never(directory, file_name));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(writer)
        .init();

    Ok(Some(guard))
}

/// Everything the session needs, assembled from configuration
struct Services {
    session: Arc<WardrobeSession>,
    loader: Arc<ImageFileLoader>,
    add_item: AddItemUseCase,
    suggest: RequestSuggestionUseCase,
    console: ConsoleConfig,
}

impl Services {
    fn build(cli: &Cli) -> Result<Self, ConfigurationError> {
        let config = if cli.no_config {
            ConfigLoader::load_defaults()
        } else {
            ConfigLoader::load(cli.config.as_ref())?
        };

        let api_key = ApiKey::from_env()?;

        if !config.output.color {
            colored::control::set_override(false);
        }

        let mut settings = GeminiSettings::from(&config.gemini);
        if let Some(model) = &cli.model {
            settings = settings.with_model(model.clone());
        }
        info!("Using model {}", settings.model);

        // === Dependency Injection ===
        let gateway: Arc<dyn StylistGateway> = Arc::new(GeminiGateway::new(settings, api_key)?);
        let conversation_logger = Self::conversation_logger(&config);

        let limit = config.intake.max_image_bytes;
        let session = Arc::new(WardrobeSession::new(
            WardrobeState::new().with_max_image_bytes(limit),
        ));

        let add_item = AddItemUseCase::new().with_conversation_logger(conversation_logger.clone());
        let suggest = RequestSuggestionUseCase::new(gateway)
            .with_behavior(BehaviorConfig::from_timeout_seconds(
                config.gemini.timeout_seconds,
            ))
            .with_conversation_logger(conversation_logger);

        let format: OutputFormat = cli
            .output
            .map(Into::into)
            .or(config.output.format)
            .unwrap_or_default();
        let console = ConsoleConfig::default()
            .with_format(format)
            .with_progress(config.output.show_progress && !cli.quiet);

        Ok(Self {
            session,
            loader: Arc::new(ImageFileLoader::new(limit)),
            add_item,
            suggest,
            console,
        })
    }

    fn conversation_logger(config: &FileConfig) -> Arc<dyn ConversationLogger> {
        config
            .logging
            .conversation_log
            .as_ref()
            .and_then(JsonlConversationLogger::open)
            .map(|logger| {
                info!("Writing styling transcript to {}", logger.path().display());
                Arc::new(logger) as Arc<dyn ConversationLogger>
            })
            .unwrap_or_else(|| Arc::new(NoConversationLogger))
    }
}

async fn run(cli: &Cli, services: Services) -> Result<ExitCode> {
    let Services {
        session,
        loader,
        add_item,
        suggest,
        console,
    } = services;

    // Items given on the command line
    let sources = cli.intake_sources();
    let mut added = Vec::new();
    for (category, source) in &sources {
        match add_item.execute_source(&session, loader.as_ref(), *category, source) {
            Ok(id) => added.push(id),
            Err(e) => eprintln!(
                "{}",
                ConsoleFormatter::error_line(&format!("{} ({}): {}", source, category, e))
            ),
        }
    }

    if !cli.suggest {
        let repl = WardrobeRepl::new(session, loader, add_item, suggest).with_config(console);
        repl.run().await?;
        return Ok(ExitCode::SUCCESS);
    }

    // One-shot mode: select everything that was added and ask once
    if added.is_empty() {
        eprintln!(
            "{}",
            ConsoleFormatter::error_line(
                "No items could be added. Pass images with --tops, --bottoms or --shoes."
            )
        );
        return Ok(ExitCode::FAILURE);
    }

    let toggle = ToggleSelectionUseCase;
    for id in &added {
        toggle.execute(&session, id.as_str())?;
    }

    let spinner = ProgressReporter::new();
    let progress: &dyn SuggestionProgress = if !console.show_progress {
        &NoProgress
    } else if std::io::stderr().is_terminal() {
        &spinner
    } else {
        &SimpleProgress
    };

    let outcome = suggest.execute(&session, progress).await;
    println!(
        "{}",
        session.read(|state| ConsoleFormatter::suggestion(state, console.format))
    );

    Ok(match outcome {
        SuggestionOutcome::Suggested(_) => ExitCode::SUCCESS,
        SuggestionOutcome::Failed(failure) => {
            warn!("Suggestion failed ({}): {}", failure.kind, failure.detail);
            ExitCode::FAILURE
        }
        SuggestionOutcome::NoSelection | SuggestionOutcome::Skipped => ExitCode::FAILURE,
    })
}
