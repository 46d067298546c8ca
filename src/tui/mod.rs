//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the guide,
//! and translates terminal events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Scroll Flow
//!
//! ```text
//! key/wheel → TuiEvent → LayoutState::handle_event → ScrollEvent
//!           → Action::Scroll → update() → App.scroll_x/scroll_y → props
//! ```
//!
//! The layout clamps the offsets it is given. When the clamp changes them
//! (first frame, resize, toggles), the new offsets are reported back the
//! same way and the frame is redrawn.
//!
//! ## Redraw Strategy
//!
//! Redraws happen on events, on scroll corrections, and once per idle tick
//! so the now-line keeps moving.

pub mod component;
pub mod components;
pub mod event;
pub mod ui;

use log::{debug, info};
use std::io::stdout;
use std::time::Duration;

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;

use crate::core::action::{Action, Effect, Toggle, update};
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::LayoutState;
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// How long the loop sleeps when nothing happens.
const IDLE_TICK: Duration = Duration::from_secs(30);

/// TUI-specific presentation state (not part of core guide state)
#[derive(Default)]
pub struct TuiState {
    /// Persistent scroll box state
    pub layout: LayoutState,
    /// Whether the initial jump to the current time has happened
    pub scrolled_to_now: bool,
}

impl TuiState {
    pub fn new() -> Self {
        Self::default()
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableMouseCapture)?;
        info!("Terminal modes enabled (mouse)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture);
    }
}

/// Map a terminal event to a core action, consulting the layout for scroll
/// input and hit testing.
pub fn dispatch(event: TuiEvent, tui: &mut TuiState) -> Option<Action> {
    match event {
        TuiEvent::Quit => Some(Action::Quit),
        TuiEvent::ToggleSidebar => Some(Action::Toggle(Toggle::Sidebar)),
        TuiEvent::ToggleTimeline => Some(Action::Toggle(Toggle::Timeline)),
        TuiEvent::ToggleLine => Some(Action::Toggle(Toggle::Line)),
        TuiEvent::ToggleRtl => Some(Action::Toggle(Toggle::Rtl)),
        TuiEvent::ToggleTimeFormat => Some(Action::Toggle(Toggle::TimeFormat)),
        TuiEvent::MouseClick(column, row) => {
            let id = tui.layout.program_at(column, row).map(str::to_string);
            Some(Action::SelectProgram(id))
        }
        TuiEvent::Resize => None,
        _ => tui.layout.handle_event(&event).map(Action::Scroll),
    }
}

pub fn run(mut app: App) -> std::io::Result<()> {
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    let mut needs_redraw = true;

    let result = loop {
        if needs_redraw {
            if let Err(e) = terminal.draw(|f| ui::draw_ui(f, &app, &mut tui)) {
                break Err(e);
            }
            needs_redraw = false;

            // The layout knows where "now" is only after the first frame
            if !tui.scrolled_to_now {
                tui.scrolled_to_now = true;
                if let Some(event) = tui.layout.handle_event(&TuiEvent::ScrollToNow) {
                    update(&mut app, Action::Scroll(event));
                    needs_redraw = true;
                }
            }

            if let Some(event) = tui.layout.pending_scroll(app.scroll_x, app.scroll_y) {
                debug!("Scroll corrected to {:?}", event);
                update(&mut app, Action::Scroll(event));
                needs_redraw = true;
            }
            if needs_redraw {
                continue;
            }
        }

        let Some(first_event) = poll_event_timeout(IDLE_TICK) else {
            needs_redraw = true;
            continue;
        };
        needs_redraw = true;

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        for event in std::iter::once(first_event).chain(std::iter::from_fn(poll_event_immediate)) {
            if let Some(action) = dispatch(event, &mut tui)
                && update(&mut app, action) == Effect::Quit
            {
                should_quit = true;
                break;
            }
        }
        if should_quit {
            break Ok(());
        }
    };

    ratatui::restore();
    result
}
