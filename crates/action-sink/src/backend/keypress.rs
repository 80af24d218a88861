//! Simulated key presses and pointer moves through `xdotool`.
//!
//! Works with any presentation application that has keyboard focus.

use std::process::Command;

use palmdeck_common::error::PalmdeckResult;

use super::{command_exists, run_command};
use crate::{PointerBackend, SlideBackend};

pub struct KeyPressBackend {
    next_key: String,
    previous_key: String,
}

impl KeyPressBackend {
    /// Key names use X keysym spelling, e.g. `Right`, `Next`, `Page_Down`.
    pub fn new(next_key: impl Into<String>, previous_key: impl Into<String>) -> Self {
        Self {
            next_key: next_key.into(),
            previous_key: previous_key.into(),
        }
    }

    pub fn keys(&self) -> (&str, &str) {
        (&self.next_key, &self.previous_key)
    }

    fn press(&self, key: &str) -> PalmdeckResult<()> {
        tracing::debug!(key, "xdotool key");
        run_command(Command::new("xdotool").args(key_args(key)))
    }
}

fn key_args(key: &str) -> [&str; 3] {
    ["key", "--clearmodifiers", key]
}

fn mousemove_args(x: i32, y: i32) -> [String; 3] {
    ["mousemove".to_string(), x.to_string(), y.to_string()]
}

impl SlideBackend for KeyPressBackend {
    fn next_slide(&mut self) -> PalmdeckResult<()> {
        self.press(&self.next_key)
    }

    fn previous_slide(&mut self) -> PalmdeckResult<()> {
        self.press(&self.previous_key)
    }

    fn name(&self) -> &str {
        "key-press"
    }

    fn is_available(&self) -> bool {
        command_exists("xdotool")
    }
}

impl PointerBackend for KeyPressBackend {
    fn move_pointer_to(&mut self, x: i32, y: i32) -> PalmdeckResult<()> {
        run_command(Command::new("xdotool").args(mousemove_args(x, y)))
    }
}
