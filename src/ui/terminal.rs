use crate::app::{mode::AppMode, App};
use crate::repl::{command_to_app_event, parse_repl_input};
use crate::ui::render::render;
use crate::ui::theme::colors;
use crossterm::style::Stylize;
use std::io::{self, BufRead, Write};

/// Line-oriented REPL driver over any reader/writer pair
pub struct ReplManager<R, W> {
    input: R,
    output: W,
}

impl ReplManager<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> ReplManager<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn prompt(&mut self, app: &App) -> io::Result<()> {
        write!(
            self.output,
            "{}",
            app.config.display.prompt.as_str().with(colors::accent())
        )?;
        self.output.flush()
    }

    /// Read lines until `:q` or end of input.
    pub fn run_event_loop(&mut self, app: &mut App) -> io::Result<AppMode> {
        let mut line = String::new();

        loop {
            if app.mode() == AppMode::Quit {
                return Ok(AppMode::Quit);
            }

            self.prompt(app)?;
            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                writeln!(self.output)?;
                return Ok(app.mode());
            }

            let event = command_to_app_event(parse_repl_input(&line));
            let state = app.handle_event(event);
            if let Some(text) = render(&state, &app.config.display) {
                writeln!(self.output, "{}", text)?;
            }
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
