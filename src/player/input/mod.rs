//! Input handling for the native player.
//!
//! This module handles keyboard and mouse input events and turns them into
//! control flow signals or [`ControlCommand`]s for the scheduler.

mod keyboard;
mod mouse;
mod toolbar;

pub use keyboard::{handle_key_event, SEEK_STEP};
pub use mouse::handle_mouse_event;
pub use toolbar::{Button, Toolbar, ToolbarAction, TOOLBAR_LEFT_MARGIN};

use crossterm::event::Event;

use crate::player::command::ControlCommand;
use crate::player::render::Layout;

/// Result of handling an input event
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputResult {
    /// Nothing for the scheduler
    Continue,
    /// Apply this command to the scheduler
    Command(ControlCommand),
    /// Exit the player
    Quit,
}

/// UI-side state that input handlers read and update.
#[derive(Debug, Clone)]
pub struct PlayerInput {
    pub toolbar: Toolbar,
    pub layout: Layout,
    pub show_help: bool,
    /// Log progress as of the last frame, for relative seeks
    pub progress: f64,
}

impl PlayerInput {
    pub fn new(toolbar: Toolbar, layout: Layout) -> Self {
        Self {
            toolbar,
            layout,
            show_help: false,
            progress: 0.0,
        }
    }

    fn press(&mut self, action: ToolbarAction) -> InputResult {
        InputResult::Command(self.toolbar.press(action))
    }

    fn seek_by(&self, delta: f64) -> InputResult {
        let target = (self.progress + delta).clamp(0.0, 1.0);
        InputResult::Command(ControlCommand::SetFilePosition(target))
    }
}

/// Handle any input event, dispatching to the appropriate handler.
pub fn handle_event(event: Event, input: &mut PlayerInput) -> InputResult {
    match event {
        Event::Key(key) => handle_key_event(key, input),
        Event::Mouse(mouse) => handle_mouse_event(mouse, input),
        Event::Resize(cols, rows) => {
            input.layout = Layout::new(cols, rows);
            InputResult::Continue
        }
        _ => InputResult::Continue, // Ignore focus events, etc.
    }
}
