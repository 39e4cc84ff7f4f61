use std::io;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};

use terminal::app::{App, AppCommand};

fn main() -> Result<()> {
    init_tracing()?;

    let seed = std::env::var("SNAKE_REWIND_SEED")
        .ok()
        .and_then(|raw| raw.parse().ok())
        .unwrap_or_else(clock_seed);
    tracing::debug!(seed, "starting session");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(seed);
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    let mut last_update = std::time::Instant::now();

    loop {
        // Calculate delta time
        let now = std::time::Instant::now();
        let dt = now.duration_since(last_update);
        last_update = now;

        // Update simulation and effects
        app.update(dt);

        // Draw
        terminal.draw(|f| app.render(f))?;

        // Handle input
        if event::poll(Duration::from_millis(16))? {
            if let Event::Key(key) = event::read()? {
                if let Some(command) = app.handle_input(key) {
                    match command {
                        AppCommand::Quit => return Ok(()),
                        _ => app.handle_command(command)?,
                    }
                }
            }
        }
    }
}

/// Raw mode owns stdout, so logging stays off unless pointed at a file.
fn init_tracing() -> Result<()> {
    if let Ok(path) = std::env::var("SNAKE_REWIND_LOG") {
        let file = std::fs::File::create(path)?;
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_writer(Arc::new(file))
            .with_ansi(false)
            .init();
    }
    Ok(())
}

fn clock_seed() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or(0x5eed)
}
