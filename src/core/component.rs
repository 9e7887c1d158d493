//! Component and Focusable traits.

use crate::core::cursor::CursorPos;
use crate::core::input_event::InputEvent;

/// Renderable component interface.
pub trait Component {
    /// Render to a list of lines at the given width.
    fn render(&mut self, width: usize) -> Vec<String>;

    /// Handle input events.
    fn handle_event(&mut self, _event: &InputEvent) {}

    /// Optional cursor position metadata for this component's last render.
    ///
    /// The cursor position is relative to the lines returned from `render()`.
    fn cursor_pos(&self) -> Option<CursorPos> {
        None
    }

    /// Invalidate any cached state.
    fn invalidate(&mut self) {}

    /// Optional focusable behavior.
    fn as_focusable(&mut self) -> Option<&mut dyn Focusable> {
        None
    }
}

/// Focusable behavior for components that track focus.
pub trait Focusable {
    fn set_focused(&mut self, focused: bool);
    fn is_focused(&self) -> bool;
}
