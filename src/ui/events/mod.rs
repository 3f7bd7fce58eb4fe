// Event handling and main UI loop

use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend, layout::Position};
use std::io;
use std::sync::mpsc::{self, Receiver};
use std::thread;
use std::time::{Duration, Instant};

use crate::ui::state::{AppState, View};

mod analytics;
mod api;
mod calendar;
mod dashboard;
mod generate;
mod library;
mod modals;
mod settings;

/// Backend results applied per frame; the rest wait for the next one
const MESSAGES_PER_FRAME: usize = 10;

// Event types sent from dedicated event thread to main loop
enum UiEvent {
    Input(Event), // Keyboard, mouse, or other terminal events
    Tick,         // Drives timers and redraws
}

/// Spawn a dedicated thread for event polling.
fn spawn_event_thread(tx: mpsc::Sender<UiEvent>) {
    let tick_rate = Duration::from_millis(50);

    thread::spawn(move || {
        let mut last_tick = Instant::now();
        loop {
            let timeout = tick_rate
                .checked_sub(last_tick.elapsed())
                .unwrap_or(Duration::from_secs(0));

            if event::poll(timeout).unwrap_or(false) {
                if let Ok(evt) = event::read() {
                    if tx.send(UiEvent::Input(evt)).is_err() {
                        break; // Main thread dropped the receiver
                    }
                }
            }

            if last_tick.elapsed() >= tick_rate {
                if tx.send(UiEvent::Tick).is_err() {
                    break;
                }
                last_tick = Instant::now();
            }
        }
    });
}

/// Take over the terminal and run until the user quits
pub fn run_ui(state: &mut AppState) -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let (event_tx, event_rx) = mpsc::channel();
    spawn_event_thread(event_tx);

    let result = run_app(&mut terminal, state, event_rx);

    // Restore terminal even if the loop failed
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    state: &mut AppState,
    event_rx: Receiver<UiEvent>,
) -> io::Result<()> {
    loop {
        let mut pending_ticks: u64 = 0;
        let mut pending_inputs: Vec<Event> = Vec::new();

        // Block for one event, then drain the queue so tick bursts coalesce
        match event_rx.recv() {
            Ok(UiEvent::Tick) => pending_ticks += 1,
            Ok(UiEvent::Input(ev)) => pending_inputs.push(ev),
            Err(_) => return Ok(()),
        }

        while let Ok(evt) = event_rx.try_recv() {
            match evt {
                UiEvent::Tick => pending_ticks += 1,
                UiEvent::Input(ev) => pending_inputs.push(ev),
            }
        }

        // Inputs first so commands are never stuck behind a tick backlog
        for input in pending_inputs {
            match input {
                Event::Key(key) => {
                    if handle_key(key, state) {
                        return Ok(());
                    }
                }
                Event::Mouse(mouse) => handle_mouse(mouse, state),
                _ => {}
            }
        }

        if pending_ticks > 0 {
            state.tick(Instant::now());
        }

        state.drain_api_messages(MESSAGES_PER_FRAME);

        terminal.draw(|frame| crate::ui::draw(frame, state))?;
    }
}

fn should_quit(key: &KeyEvent) -> bool {
    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
}

/// Apply one key press. Returns true when the app should exit.
pub fn handle_key(key: KeyEvent, state: &mut AppState) -> bool {
    if key.kind == KeyEventKind::Release {
        return false;
    }

    if should_quit(&key) {
        return true;
    }

    // Open overlays capture all other input
    if state.posts_modal.is_some() {
        modals::handle_posts_key(key, state);
        return false;
    }
    if state.batch.visible {
        modals::handle_batch_key(key, state);
        return false;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => return true,
        KeyCode::Char(c @ '1'..='6') => {
            let idx = c as usize - '1' as usize;
            if let Some(view) = View::from_index(idx) {
                state.navigate(view);
            }
            return false;
        }
        KeyCode::Tab => {
            state.navigate(state.current_view.next());
            return false;
        }
        KeyCode::BackTab => {
            state.navigate(state.current_view.previous());
            return false;
        }
        KeyCode::Char(',') => {
            state.cycle_account(false);
            return false;
        }
        KeyCode::Char('.') => {
            state.cycle_account(true);
            return false;
        }
        KeyCode::Char('t') | KeyCode::Char('T') => {
            state.toggle_theme();
            return false;
        }
        KeyCode::Char('b') | KeyCode::Char('B') => {
            state.open_batch_dialog();
            return false;
        }
        _ => {}
    }

    match state.current_view {
        View::Dashboard => dashboard::handle_dashboard_key(key, state),
        View::Generate => generate::handle_generate_key(key, state),
        View::Analytics => analytics::handle_analytics_key(key, state),
        View::Calendar => calendar::handle_calendar_key(key, state),
        View::Library => library::handle_library_key(key, state),
        View::Settings => settings::handle_settings_key(key, state),
    }

    false
}

pub fn handle_mouse(mouse: MouseEvent, state: &mut AppState) {
    if state.modal_open() {
        return;
    }

    if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
        let pos = Position::new(mouse.column, mouse.row);
        let hit = state
            .nav_areas
            .iter()
            .find(|(_, rect)| rect.contains(pos))
            .map(|(view, _)| *view);

        if let Some(view) = hit {
            state.navigate(view);
        }
    }
}

/// Move a table/list selection by `delta` within `len` rows
pub(crate) fn step_selection(selected: Option<usize>, len: usize, delta: isize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let current = selected.unwrap_or(0) as isize;
    Some((current + delta).clamp(0, len as isize - 1) as usize)
}
