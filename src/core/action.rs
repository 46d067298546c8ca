//! # Actions
//!
//! Everything that can happen in the guide becomes an `Action`.
//! The scroll box moved? That's `Action::Scroll(event)`.
//! User pressed `s`? That's `Action::Toggle(Toggle::Sidebar)`.
//!
//! The `update()` function takes the current state and an action, mutates
//! the state and returns an `Effect` for the event loop. No I/O here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::debug;

use crate::core::state::{App, DEFAULT_STATUS};
use crate::core::time::format_range;

/// Scroll position reported by the guide's scroll box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollEvent {
    pub scroll_left: u16,
    pub scroll_top: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    Sidebar,
    Timeline,
    Line,
    Rtl,
    TimeFormat,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Scroll(ScrollEvent),
    Toggle(Toggle),
    SelectProgram(Option<String>),
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("update: {:?}", action);
    match action {
        Action::Scroll(event) => {
            app.scroll_x = event.scroll_left;
            app.scroll_y = event.scroll_top;
        }
        Action::Toggle(toggle) => {
            let flags = &mut app.flags;
            let (name, value) = match toggle {
                Toggle::Sidebar => {
                    flags.is_sidebar = !flags.is_sidebar;
                    ("Sidebar", flags.is_sidebar)
                }
                Toggle::Timeline => {
                    flags.is_timeline = !flags.is_timeline;
                    ("Timeline", flags.is_timeline)
                }
                Toggle::Line => {
                    flags.is_line = !flags.is_line;
                    ("Now line", flags.is_line)
                }
                Toggle::Rtl => {
                    flags.is_rtl = !flags.is_rtl;
                    ("Right-to-left", flags.is_rtl)
                }
                Toggle::TimeFormat => {
                    flags.is_base_time_format = !flags.is_base_time_format;
                    ("12-hour clock", flags.is_base_time_format)
                }
            };
            app.status_message = format!("{name}: {}", if value { "on" } else { "off" });
        }
        Action::SelectProgram(id) => {
            app.selected_program = id;
            app.status_message = match app.selected() {
                Some(program) => {
                    let range = format_range(
                        program.since,
                        program.till,
                        app.flags.is_base_time_format,
                    );
                    match &program.description {
                        Some(description) => {
                            format!("{} · {range} · {description}", program.title)
                        }
                        None => format!("{} · {range}", program.title),
                    }
                }
                None => DEFAULT_STATUS.to_string(),
            };
        }
        Action::Quit => return Effect::Quit,
    }
    Effect::None
}
