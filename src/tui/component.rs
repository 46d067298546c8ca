use ratatui::Frame;
use ratatui::layout::Rect;

/// A reusable guide component.
///
/// Components receive data via props (struct fields) and may hold a
/// `&mut` reference to persistent state owned by the parent. They render
/// to a `Frame` within a given `Rect`.
///
/// # Mutability
///
/// The `render` method takes `&mut self` so components can update caches
/// (the content-height memo) and record region handles during rendering.
/// This aligns with Ratatui's `StatefulWidget` pattern.
pub trait Component {
    /// Render the component into the given area.
    fn render(&mut self, frame: &mut Frame, area: Rect);
}

/// A component that handles terminal events.
pub trait EventHandler {
    /// The type of high-level event this component emits.
    type Event;

    /// Handle a low-level `TuiEvent` and optionally return a high-level event.
    fn handle_event(&mut self, event: &super::event::TuiEvent) -> Option<Self::Event>;
}
