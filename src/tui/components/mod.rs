//! # TUI Components
//!
//! All UI components for the guide.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data as props:
//! - `TitleBar` / `StatusBar`: header and footer lines
//! - `Program`: one program block (widget)
//! - `Channel` / `Channels`: the sidebar
//! - `Timeline`: the hour topbar (widget)
//! - `Line`: the "now" marker (widget)
//!
//! ### Stateful Components (Event-Driven)
//!
//! - `Layout`: the scroll box composing all of the above, backed by
//!   `LayoutState` which handles scroll input and emits `ScrollEvent`s
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs        (this file)
//! ├── title_bar.rs  (header / footer)
//! ├── layout.rs     (scroll box, props, overrides, handles)
//! ├── program.rs    (default program block)
//! ├── channels.rs   (sidebar)
//! ├── timeline.rs   (topbar)
//! └── line.rs       (now marker)
//! ```
//!
//! Each file holds the component's props, state, rendering and tests.

pub mod channels;
pub mod layout;
pub mod line;
pub mod program;
pub mod timeline;
mod title_bar;

pub use channels::{Channel, Channels, RenderChannel};
pub use layout::{
    ContentHeight, Layout, LayoutAreas, LayoutHandle, LayoutProps, LayoutState,
    ProgramRenderProps, RenderProgram, RenderTimeline, RenderedProgram,
};
pub use line::Line;
pub use program::Program;
pub use timeline::{TIMELINE_HEIGHT, Timeline, TimelineProps};
pub use title_bar::{StatusBar, TitleBar};
