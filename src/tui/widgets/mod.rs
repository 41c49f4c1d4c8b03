/// Buffer-rendering widget infrastructure.
///
/// Widgets draw themselves straight into a ratatui `Buffer`, which keeps them
/// composable and testable: tests render into an off-screen buffer and assert
/// on its text content.

#[cfg(test)]
pub mod testing;

pub mod status_bar;
pub mod tab_bar;

pub use status_bar::StatusBar;
pub use tab_bar::TabBar;

use ratatui::{buffer::Buffer, layout::Rect};

use crate::config::DisplayConfig;

/// Core trait for renderable widgets
pub trait RenderableWidget {
    fn render(&self, area: Rect, buf: &mut Buffer, display: &DisplayConfig);

    /// Fixed or preferred height, None when the widget adapts
    fn preferred_height(&self) -> Option<u16> {
        None
    }

    /// Fixed or preferred width, None when the widget adapts
    fn preferred_width(&self) -> Option<u16> {
        None
    }
}
