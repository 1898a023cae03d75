pub mod render;
pub mod terminal;
pub mod theme;

pub use render::{render, render_configuration, render_tokens, render_vocabulary};
pub use terminal::ReplManager;
