//! Input edge detection.
//!
//! The driver samples raw button levels once per frame; commands are
//! emitted only on transitions between consecutive samples, never on
//! held levels. Fire triggers on the press edge; save and load trigger
//! on the release edge.

use std::path::PathBuf;

use cinder_core::commands::PlayerCommand;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonState {
    #[default]
    Released,
    Pressed,
}

/// Raw button levels for one frame.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputSample {
    pub fire: ButtonState,
    pub save: ButtonState,
    pub load: ButtonState,
}

/// Compares consecutive samples and emits edge-triggered commands.
#[derive(Debug)]
pub struct InputTracker {
    previous: InputSample,
    save_path: PathBuf,
}

impl InputTracker {
    pub fn new(save_path: impl Into<PathBuf>) -> Self {
        Self {
            previous: InputSample::default(),
            save_path: save_path.into(),
        }
    }

    /// Feed this frame's sample; returns the commands its edges trigger.
    pub fn poll(&mut self, current: InputSample) -> Vec<PlayerCommand> {
        let mut commands = Vec::new();

        if self.previous.fire == ButtonState::Released && current.fire == ButtonState::Pressed {
            commands.push(PlayerCommand::Fire);
        }
        if self.previous.save == ButtonState::Pressed && current.save == ButtonState::Released {
            commands.push(PlayerCommand::Save {
                path: self.save_path.clone(),
            });
        }
        if self.previous.load == ButtonState::Pressed && current.load == ButtonState::Released {
            commands.push(PlayerCommand::Load {
                path: self.save_path.clone(),
            });
        }

        self.previous = current;
        commands
    }
}
