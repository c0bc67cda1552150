use ratatui::{
    backend::CrosstermBackend,
    crossterm::{
        event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
        execute,
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    },
    Terminal,
};
use std::io;
use std::time::Duration;

mod actions;
mod auth;
mod capabilities;
mod command_id;
mod dispatcher;
mod domain_models;
mod keybindings;
mod keymap;
mod logger;
mod middleware;
mod palette;
mod reducers;
mod state;
mod store;
mod view_models;
mod views;

use actions::{Action, GlobalAction};
use middleware::{
    command_palette_middleware::CommandPaletteMiddleware, keyboard_middleware::KeyboardMiddleware,
    logging::LoggingMiddleware, pointer_middleware::PointerMiddleware,
    simulation_middleware::SimulationMiddleware, translation_middleware::TranslationMiddleware,
};
use netserve_config::AppConfig;
use state::AppState;
use store::Store;

fn main() -> anyhow::Result<()> {
    let log_file = logger::init()?;
    log::info!("Starting netserve-console, logging to {}", log_file.display());

    let config = AppConfig::load();

    let mut store = Store::new(AppState::new(config));

    // Middleware runs in this order
    store.add_middleware(Box::new(LoggingMiddleware::new()));
    store.add_middleware(Box::new(KeyboardMiddleware::new()));
    store.add_middleware(Box::new(PointerMiddleware::new()));
    store.add_middleware(Box::new(TranslationMiddleware::new()));
    store.add_middleware(Box::new(CommandPaletteMiddleware::new()));
    store.add_middleware(Box::new(SimulationMiddleware::new()?));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut store);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &result {
        log::error!("Event loop failed: {:#}", err);
    }
    log::info!("Exiting netserve-console");
    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    store: &mut Store,
) -> anyhow::Result<()> {
    let size = terminal.size()?;
    store.dispatch(Action::Global(GlobalAction::Resize(size.width, size.height)));

    loop {
        // Pick up results from background tasks
        store.process_pending();

        terminal.draw(|frame| {
            let area = frame.area();
            views::render(store.state(), area, frame);
        })?;

        if !store.state().running {
            break;
        }

        if event::poll(Duration::from_millis(100))? {
            let action = match event::read()? {
                // Only key presses; releases and repeats are ignored
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    Some(GlobalAction::KeyPressed(key))
                }
                Event::Mouse(mouse) => Some(GlobalAction::Mouse(mouse)),
                Event::Resize(width, height) => Some(GlobalAction::Resize(width, height)),
                _ => None,
            };
            if let Some(action) = action {
                store.dispatch(Action::Global(action));
            }
        }
    }

    Ok(())
}
