use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind,
};
use log::warn;

/// TUI-specific input events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TuiEvent {
    // Core actions (passed to core::update)
    Quit,
    ToggleSidebar,
    ToggleTimeline,
    ToggleLine,
    ToggleRtl,
    ToggleTimeFormat,

    // Scroll box input (handled by LayoutState)
    ScrollUp,
    ScrollDown,
    ScrollLeft,
    ScrollRight,
    ScrollPageUp,
    ScrollPageDown,
    ScrollPageLeft,
    ScrollPageRight,
    ScrollHome,
    ScrollToNow,

    // TUI-local events
    MouseClick(u16, u16),
    Resize,
}

/// Poll for an event without blocking (returns immediately)
pub fn poll_event_immediate() -> Option<TuiEvent> {
    poll_event_timeout(std::time::Duration::ZERO)
}

/// Poll for an event, blocking up to `timeout`.
pub fn poll_event_timeout(timeout: std::time::Duration) -> Option<TuiEvent> {
    match event::poll(timeout) {
        Ok(true) => {}
        Ok(false) => return None,
        Err(e) => {
            warn!("Failed to poll terminal events: {}", e);
            return None;
        }
    }
    let event = match event::read() {
        Ok(event) => event,
        Err(e) => {
            warn!("Failed to read terminal event: {}", e);
            return None;
        }
    };
    match event {
        Event::Key(key_event) => {
            log::debug!(
                "Key event: {:?} with modifiers {:?}",
                key_event.code,
                key_event.modifiers
            );
            map_key(key_event)
        }
        Event::Mouse(mouse_event) => match mouse_event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                Some(TuiEvent::MouseClick(mouse_event.column, mouse_event.row))
            }
            MouseEventKind::ScrollUp if mouse_event.modifiers.contains(KeyModifiers::SHIFT) => {
                Some(TuiEvent::ScrollLeft)
            }
            MouseEventKind::ScrollDown if mouse_event.modifiers.contains(KeyModifiers::SHIFT) => {
                Some(TuiEvent::ScrollRight)
            }
            MouseEventKind::ScrollUp => Some(TuiEvent::ScrollUp),
            MouseEventKind::ScrollDown => Some(TuiEvent::ScrollDown),
            MouseEventKind::ScrollLeft => Some(TuiEvent::ScrollLeft),
            MouseEventKind::ScrollRight => Some(TuiEvent::ScrollRight),
            _ => None,
        },
        Event::Resize(_, _) => Some(TuiEvent::Resize),
        _ => None,
    }
}

/// Translate a key press into a guide event.
pub fn map_key(key_event: KeyEvent) -> Option<TuiEvent> {
    // Key releases arrive when the terminal reports event types
    if key_event.kind == KeyEventKind::Release {
        return None;
    }
    match (key_event.modifiers, key_event.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::Quit),
        (KeyModifiers::SHIFT, KeyCode::Left) => Some(TuiEvent::ScrollPageLeft),
        (KeyModifiers::SHIFT, KeyCode::Right) => Some(TuiEvent::ScrollPageRight),
        (_, KeyCode::Char('q')) | (_, KeyCode::Esc) => Some(TuiEvent::Quit),
        (_, KeyCode::Char('s')) => Some(TuiEvent::ToggleSidebar),
        (_, KeyCode::Char('t')) => Some(TuiEvent::ToggleTimeline),
        (_, KeyCode::Char('l')) => Some(TuiEvent::ToggleLine),
        (_, KeyCode::Char('r')) => Some(TuiEvent::ToggleRtl),
        (_, KeyCode::Char('f')) => Some(TuiEvent::ToggleTimeFormat),
        (_, KeyCode::Char('n')) => Some(TuiEvent::ScrollToNow),
        (_, KeyCode::Up) => Some(TuiEvent::ScrollUp),
        (_, KeyCode::Down) => Some(TuiEvent::ScrollDown),
        (_, KeyCode::Left) => Some(TuiEvent::ScrollLeft),
        (_, KeyCode::Right) => Some(TuiEvent::ScrollRight),
        (_, KeyCode::PageUp) => Some(TuiEvent::ScrollPageUp),
        (_, KeyCode::PageDown) => Some(TuiEvent::ScrollPageDown),
        (_, KeyCode::Home) => Some(TuiEvent::ScrollHome),
        _ => None,
    }
}
