//! REPL (Read-Eval-Print Loop) module
//!
//! Turns input lines into application events.
//!
//! ## Module Structure
//!
//! - **command.rs**: Command definitions and conversion to AppEvent
//! - **parser.rs**: Manual string parsing for `@` and `:` prefixes
//!
//! ## Usage
//!
//! ```rust
//! use lpu::app::{App, RenderState};
//! use lpu::repl::{command_to_app_event, parse_repl_input};
//!
//! let mut app = App::new();
//! let event = command_to_app_event(parse_repl_input("visual property is true"));
//! let state = app.handle_event(event);
//! assert!(matches!(state, RenderState::Report { .. }));
//! ```

pub mod command;
pub mod parser;

pub use command::{command_to_app_event, ReplCommand};
pub use parser::parse_repl_input;
