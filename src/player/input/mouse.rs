//! Mouse input handling for the native player.
//!
//! Left clicks on the main progress bar seek, clicks on toolbar buttons
//! press them. The sub bar and the canvas do not react.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use super::{InputResult, PlayerInput};
use crate::player::command::ControlCommand;

/// Handle a mouse event.
pub fn handle_mouse_event(mouse: MouseEvent, input: &mut PlayerInput) -> InputResult {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return InputResult::Continue;
    }
    if input.show_help {
        input.show_help = false;
        return InputResult::Continue;
    }

    let layout = input.layout;
    if mouse.row == layout.main_bar_row() {
        let fraction = layout.seek_fraction(mouse.column);
        return InputResult::Command(ControlCommand::SetFilePosition(fraction));
    }
    if mouse.row == layout.toolbar_row() {
        if let Some(action) = input.toolbar.button_at(mouse.column) {
            return input.press(action);
        }
    }
    InputResult::Continue
}
