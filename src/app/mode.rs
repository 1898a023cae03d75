#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Repl,
    Quit,
}
