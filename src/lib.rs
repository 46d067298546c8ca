//! TV guide library: guide layout core and terminal adapter.

pub mod core;
pub mod tui;

#[cfg(test)]
pub mod test_support;
