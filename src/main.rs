use lpu::app::{App, AppEvent};
use lpu::ui::{render, ReplManager};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut app = App::new();

    // Arguments form a single description crafted without entering the REPL
    let args: Vec<String> = std::env::args().skip(1).collect();
    if !args.is_empty() {
        let state = app.handle_event(AppEvent::Describe(args.join(" ")));
        if let Some(text) = render(&state, &app.config.display) {
            println!("{}", text);
        }
        return Ok(());
    }

    let mut repl = ReplManager::stdio();
    repl.run_event_loop(&mut app)?;

    Ok(())
}
