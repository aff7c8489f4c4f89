//! Toolbar buttons of the native player.
//!
//! The toolbar mirrors the control state shown to the user (paused, speed)
//! and turns button presses into [`ControlCommand`]s. Button positions are
//! computed here so drawing and click hit-testing always agree.

use crate::player::command::ControlCommand;

/// Column of the first button on the toolbar row.
pub const TOOLBAR_LEFT_MARGIN: u16 = 1;

/// Gap between two buttons.
const BUTTON_GAP: u16 = 1;

/// What a toolbar button does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolbarAction {
    PlayPause,
    Skip,
    FastForward,
    Speed,
}

/// A laid-out button: its label and the columns it covers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    pub action: ToolbarAction,
    pub label: String,
    pub start_col: u16,
}

impl Button {
    pub fn end_col(&self) -> u16 {
        self.start_col + self.label.chars().count() as u16
    }

    pub fn contains(&self, col: u16) -> bool {
        col >= self.start_col && col < self.end_col()
    }
}

/// Control state behind the toolbar.
#[derive(Debug, Clone)]
pub struct Toolbar {
    paused: bool,
    speed: u32,
    max_speed: u32,
    fast_forward_events: usize,
}

impl Toolbar {
    pub fn new(speed: u32, max_speed: u32, fast_forward_events: usize) -> Self {
        let max_speed = max_speed.max(1);
        Self {
            paused: false,
            speed: speed.clamp(1, max_speed),
            max_speed,
            fast_forward_events,
        }
    }

    #[inline]
    pub fn paused(&self) -> bool {
        self.paused
    }

    #[inline]
    pub fn speed(&self) -> u32 {
        self.speed
    }

    #[inline]
    pub fn fast_forward_events(&self) -> usize {
        self.fast_forward_events
    }

    /// Press a button and get the command it issues.
    pub fn press(&mut self, action: ToolbarAction) -> ControlCommand {
        match action {
            ToolbarAction::PlayPause => {
                self.paused = !self.paused;
                ControlCommand::Paused(self.paused)
            }
            ToolbarAction::Skip => ControlCommand::SkipWaiting,
            ToolbarAction::FastForward => ControlCommand::SkipEvents(self.fast_forward_events),
            ToolbarAction::Speed => {
                self.speed = if self.speed >= self.max_speed {
                    1
                } else {
                    self.speed + 1
                };
                ControlCommand::SetPlaybackSpeedMultiplier(self.speed)
            }
        }
    }

    /// Buttons in display order with their column spans.
    pub fn buttons(&self) -> Vec<Button> {
        let labels = [
            (
                ToolbarAction::PlayPause,
                if self.paused { "[ Play ]" } else { "[Pause ]" }.to_string(),
            ),
            (ToolbarAction::Skip, "[Skip]".to_string()),
            (
                ToolbarAction::FastForward,
                format!("[FF {}]", self.fast_forward_events),
            ),
            (ToolbarAction::Speed, format!("[{:>2}x]", self.speed)),
        ];

        let mut col = TOOLBAR_LEFT_MARGIN;
        labels
            .into_iter()
            .map(|(action, label)| {
                let button = Button {
                    action,
                    label,
                    start_col: col,
                };
                col = button.end_col() + BUTTON_GAP;
                button
            })
            .collect()
    }

    /// The button under `col`, if any.
    pub fn button_at(&self, col: u16) -> Option<ToolbarAction> {
        self.buttons()
            .into_iter()
            .find(|b| b.contains(col))
            .map(|b| b.action)
    }

    /// Column right after the last button.
    pub fn width(&self) -> u16 {
        self.buttons()
            .last()
            .map_or(TOOLBAR_LEFT_MARGIN, Button::end_col)
    }
}
