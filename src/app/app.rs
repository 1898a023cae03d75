use super::event::{AppEvent, Setting};
use super::mode::AppMode;
use super::render_state::RenderState;
use crate::engine::config::Config;
use crate::engine::Lpu;
use crate::input::load_description;
use crate::vocabulary::Vocabulary;
use tracing::{debug, info};

/// REPL session: current mode plus the settings later descriptions use
pub struct App {
    pub mode: AppMode,
    pub config: Config,
    vocabulary: &'static Vocabulary,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    pub fn with_config(config: Config) -> Self {
        Self {
            mode: AppMode::Repl,
            config,
            vocabulary: Vocabulary::builtin(),
        }
    }

    pub fn mode(&self) -> AppMode {
        self.mode
    }

    fn lpu(&self) -> Lpu<'static> {
        Lpu::new(self.vocabulary, self.config.parser)
    }

    /// Craft a description and package every intermediate product
    pub fn describe(&self, source: &str, description: &str) -> RenderState {
        RenderState::Report {
            source: source.to_string(),
            report: self.lpu().report(description),
        }
    }

    pub fn handle_event(&mut self, event: AppEvent) -> RenderState {
        debug!(?event, "handling event");

        match event {
            AppEvent::Describe(description) => self.describe("input", &description),
            AppEvent::LoadFile(path) => match load_description(&path) {
                Ok(loaded) => {
                    info!(source = %loaded.source, "loaded description");
                    self.describe(&loaded.source, &loaded.text)
                }
                Err(err) => RenderState::Error(err.to_string()),
            },
            AppEvent::ShowVocabulary => RenderState::Vocabulary(self.vocabulary),
            AppEvent::Change(setting) => {
                self.apply(setting);
                RenderState::Notice(setting.to_string())
            }
            AppEvent::Help => RenderState::Help,
            AppEvent::Quit => {
                self.mode = AppMode::Quit;
                RenderState::Idle(self.mode)
            }
            AppEvent::InvalidCommand(input) => {
                RenderState::Error(format!("Invalid command: '{}' (:h for help)", input))
            }
        }
    }

    fn apply(&mut self, setting: Setting) {
        let parser = &mut self.config.parser;
        match setting {
            Setting::Symbolic(mode) => parser.symbolic_mode = mode,
            Setting::Inject(inject) => parser.inject_on_failure = inject,
            Setting::Merge(strategy) => parser.merge_strategy = strategy,
        }
    }
}
