//! Terminal UI for Dot Escape

mod app;
mod input;
mod ui;

use std::io::{self, Stdout};

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use dotescape_core::{
    GameConfig, GameController, HistoryError, HistoryKind, JsonFileStore, RandomShuffler,
    Shuffler,
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::{debug, error, info, instrument};

use app::App;
use input::Action;

type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Run the terminal game until the player quits.
///
/// With `resume` set, a game saved at `config.save_path()` is picked up.
#[instrument(skip(config))]
pub fn run(config: GameConfig, resume: bool) -> Result<()> {
    let mut store = JsonFileStore::new(config.save_path());
    let shuffler = RandomShuffler::thread();
    let mut controller = if resume {
        GameController::resume(config, App::new(), shuffler, &mut store)
    } else {
        GameController::new(config, App::new(), shuffler)
    };

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    info!("Starting game loop");
    let res = run_game(&mut terminal, &mut controller, &mut store);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}

/// Draw, read one key, dispatch it to the controller. Repeat.
fn run_game<S: Shuffler>(
    terminal: &mut Tui,
    controller: &mut GameController<App, S>,
    store: &mut JsonFileStore,
) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, controller.presenter()))?;

        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }
        let Some(action) = input::action_for(key.code) else {
            debug!(key = ?key.code, "Unbound key");
            continue;
        };

        match action {
            Action::Cursor(code) => controller.presenter_mut().move_cursor(code),
            Action::Select => {
                let cell = controller.presenter().cursor();
                if let Err(e) = controller.select_cell(cell) {
                    controller.presenter_mut().set_message(e.to_string());
                }
            }
            Action::Undo => {
                if !controller.request_undo() {
                    let msg = HistoryError::Empty(HistoryKind::Undo).to_string();
                    controller.presenter_mut().set_message(msg);
                }
            }
            Action::Redo => {
                if !controller.request_redo() {
                    let msg = HistoryError::Empty(HistoryKind::Redo).to_string();
                    controller.presenter_mut().set_message(msg);
                }
            }
            Action::Reset => controller.request_reset(),
            Action::Quit => {
                controller.request_quit(store)?;
                info!("User quit");
                return Ok(());
            }
        }
    }
}
