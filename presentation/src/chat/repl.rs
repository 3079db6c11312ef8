//! REPL (Read-Eval-Print Loop) for the interactive wardrobe

use crate::config::ConsoleConfig;
use crate::output::console::ConsoleFormatter;
use crate::progress::reporter::ProgressReporter;
use colored::Colorize;
use reedline::{DefaultPrompt, DefaultPromptSegment, FileBackedHistory, Reedline, Signal};
use std::sync::Arc;
use tracing::warn;
use wardrobe_application::{
    AddItemUseCase, ImageLoader, IntakeError, NoProgress, RequestSuggestionUseCase,
    SuggestionOutcome, SuggestionProgress, ToggleSelectionUseCase, WardrobeSession,
};
use wardrobe_domain::{Category, DomainError};

const HISTORY_SIZE: usize = 500;

const ADD_USAGE: &str = "Usage: add <tops|bottoms|shoes> <path|data-url>";
const TOGGLE_USAGE: &str = "Usage: toggle <number|id>...";

/// A parsed REPL line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    Add { category: Category, source: String },
    Toggle(Vec<String>),
    List,
    Selected,
    Suggest,
    Status,
    Help,
    Quit,
}

/// What a command printed, and whether the session should end
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReplReply {
    pub output: String,
    pub exit: bool,
}

impl ReplReply {
    fn print(output: impl Into<String>) -> Self {
        Self {
            output: output.into(),
            exit: false,
        }
    }
}

/// Parse one input line. A leading `/` is accepted on every command.
pub fn parse_command(line: &str) -> Result<ReplCommand, String> {
    let line = line.trim();
    let line = line.strip_prefix('/').unwrap_or(line);
    let (name, rest) = match line.split_once(char::is_whitespace) {
        Some((name, rest)) => (name, rest.trim()),
        None => (line, ""),
    };

    match name.to_lowercase().as_str() {
        "add" => {
            let (category, source) = rest
                .split_once(char::is_whitespace)
                .ok_or_else(|| ADD_USAGE.to_string())?;
            let category = category
                .parse::<Category>()
                .map_err(|e: DomainError| e.to_string())?;
            Ok(ReplCommand::Add {
                category,
                source: source.trim().to_string(),
            })
        }
        "toggle" | "t" => {
            if rest.is_empty() {
                return Err(TOGGLE_USAGE.to_string());
            }
            Ok(ReplCommand::Toggle(
                rest.split_whitespace().map(String::from).collect(),
            ))
        }
        "list" | "ls" => Ok(ReplCommand::List),
        "selected" => Ok(ReplCommand::Selected),
        "suggest" => Ok(ReplCommand::Suggest),
        "status" => Ok(ReplCommand::Status),
        "help" | "h" | "?" => Ok(ReplCommand::Help),
        "quit" | "exit" | "q" => Ok(ReplCommand::Quit),
        other => Err(format!("Unknown command: {} (type `help`)", other)),
    }
}

/// Interactive wardrobe REPL
pub struct WardrobeRepl {
    session: Arc<WardrobeSession>,
    loader: Arc<dyn ImageLoader>,
    add_item: AddItemUseCase,
    toggle: ToggleSelectionUseCase,
    suggest: RequestSuggestionUseCase,
    config: ConsoleConfig,
}

impl WardrobeRepl {
    pub fn new(
        session: Arc<WardrobeSession>,
        loader: Arc<dyn ImageLoader>,
        add_item: AddItemUseCase,
        suggest: RequestSuggestionUseCase,
    ) -> Self {
        Self {
            session,
            loader,
            add_item,
            toggle: ToggleSelectionUseCase,
            suggest,
            config: ConsoleConfig::default(),
        }
    }

    pub fn with_config(mut self, config: ConsoleConfig) -> Self {
        self.config = config;
        self
    }

    /// Run the interactive REPL until `quit` or Ctrl-D
    pub async fn run(&self) -> std::io::Result<()> {
        let mut editor = Reedline::create();

        if let Some(path) = self.config.history_path() {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            match FileBackedHistory::with_file(HISTORY_SIZE, path) {
                Ok(history) => editor = editor.with_history(Box::new(history)),
                Err(e) => warn!("REPL history disabled: {}", e),
            }
        }

        let prompt = DefaultPrompt::new(
            DefaultPromptSegment::Basic("wardrobe".to_string()),
            DefaultPromptSegment::Empty,
        );

        self.print_welcome();

        loop {
            match editor.read_line(&prompt)? {
                Signal::Success(line) => {
                    if line.trim().is_empty() {
                        continue;
                    }
                    let reply = match parse_command(&line) {
                        Ok(command) => self.execute(command).await,
                        Err(message) => ReplReply::print(ConsoleFormatter::error_line(&message)),
                    };
                    if !reply.output.is_empty() {
                        println!("{}", reply.output);
                    }
                    if reply.exit {
                        break;
                    }
                }
                Signal::CtrlD => {
                    println!("Bye!");
                    break;
                }
                _ => {
                    println!("^C");
                }
            }
        }

        Ok(())
    }

    /// Execute one command against the session
    pub async fn execute(&self, command: ReplCommand) -> ReplReply {
        match command {
            ReplCommand::Add { category, source } => ReplReply::print(self.add(category, &source)),
            ReplCommand::Toggle(references) => ReplReply::print(self.toggle(&references)),
            ReplCommand::List => {
                ReplReply::print(self.session.read(ConsoleFormatter::catalog))
            }
            ReplCommand::Selected => {
                ReplReply::print(self.session.read(ConsoleFormatter::selection))
            }
            ReplCommand::Suggest => ReplReply::print(self.request_suggestion().await),
            ReplCommand::Status => ReplReply::print(
                self.session
                    .read(|state| ConsoleFormatter::suggestion(state, self.config.format)),
            ),
            ReplCommand::Help => ReplReply::print(Self::help()),
            ReplCommand::Quit => ReplReply {
                output: "Bye!".to_string(),
                exit: true,
            },
        }
    }

    fn add(&self, category: Category, source: &str) -> String {
        match self
            .add_item
            .execute_source(&self.session, self.loader.as_ref(), category, source)
        {
            Ok(id) => {
                let number = self.session.read(|state| {
                    state
                        .display_order()
                        .iter()
                        .position(|item| item.id() == &id)
                        .map_or(0, |index| index + 1)
                });
                ConsoleFormatter::success_line(&format!("Added to {} as #{}", category, number))
            }
            Err(IntakeError::Rejected(DomainError::PayloadTooLarge { size, limit })) => {
                let message = self.session.read(|state| {
                    state.intake_error().map(str::to_string).unwrap_or_else(|| {
                        DomainError::PayloadTooLarge { size, limit }.to_string()
                    })
                });
                ConsoleFormatter::error_line(&message)
            }
            Err(e) => ConsoleFormatter::error_line(&e.to_string()),
        }
    }

    fn toggle(&self, references: &[String]) -> String {
        references
            .iter()
            .map(|reference| match self.toggle.execute(&self.session, reference) {
                Ok(output) if output.selected => {
                    ConsoleFormatter::success_line(&format!("Selected {}", reference))
                }
                Ok(_) => format!("{} Deselected {}", "-".dimmed(), reference),
                Err(e) => ConsoleFormatter::error_line(&e.to_string()),
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    async fn request_suggestion(&self) -> String {
        let spinner = ProgressReporter::new();
        let progress: &dyn SuggestionProgress = if self.config.show_progress {
            &spinner
        } else {
            &NoProgress
        };

        match self.suggest.execute(&self.session, progress).await {
            SuggestionOutcome::Skipped => "A suggestion is already in progress.".yellow().to_string(),
            SuggestionOutcome::Suggested(_)
            | SuggestionOutcome::Failed(_)
            | SuggestionOutcome::NoSelection => self
                .session
                .read(|state| ConsoleFormatter::suggestion(state, self.config.format)),
        }
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│       Wardrobe Stylist - Interactive        │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        println!(
            "Items in wardrobe: {}",
            self.session.read(|state| state.len())
        );
        println!("{}", Self::help());
    }

    fn help() -> String {
        [
            "Commands:",
            "  add <category> <path|data-url>  - Add a top, bottom or pair of shoes",
            "  toggle <n|id>...                - Select or deselect items",
            "  list                            - Show the wardrobe",
            "  selected                        - Show the current selection",
            "  suggest                         - Ask the stylist for an outfit",
            "  status                          - Show the latest suggestion",
            "  help                            - Show this help",
            "  quit                            - Exit",
        ]
        .join("\n")
    }
}
