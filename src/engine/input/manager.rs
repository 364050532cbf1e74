// Input manager - turns winit events into action state

use super::action::{Action, InputSource};
use super::config::InputBindings;
use super::player::PlayerInput;
use std::collections::HashSet;
use winit::event::{ElementState, KeyEvent, MouseButton};
use winit::keyboard::PhysicalKey;

/// Coordinates bindings and the player's action state
#[derive(Debug, Default)]
pub struct InputManager {
    bindings: InputBindings,

    /// Physical sources currently held
    held_sources: HashSet<InputSource>,

    player: PlayerInput,
}

impl InputManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process a keyboard event from winit
    pub fn process_keyboard_event(&mut self, event: &KeyEvent) {
        if let PhysicalKey::Code(key_code) = event.physical_key {
            // Key repeats carry no new information for held-state input
            if event.repeat {
                return;
            }
            self.process_source(InputSource::key(key_code), event.state);
        }
    }

    /// Process a mouse button event from winit
    pub fn process_mouse_button(&mut self, button: MouseButton, state: ElementState) {
        self.process_source(InputSource::mouse(button), state);
    }

    /// Apply a press/release of one input source
    pub fn process_source(&mut self, source: InputSource, state: ElementState) {
        let Some(action) = self.bindings.get_action(source) else {
            return;
        };

        match state {
            ElementState::Pressed => {
                self.held_sources.insert(source);
                self.player.press(action);
            }
            ElementState::Released => {
                self.held_sources.remove(&source);
                // Another key bound to the same action keeps it held
                let still_held = self
                    .held_sources
                    .iter()
                    .any(|held| self.bindings.get_action(*held) == Some(action));
                if !still_held {
                    self.player.release(action);
                }
            }
        }
    }

    /// Start a new frame. Call once per frame after the game tick consumed
    /// this frame's input
    pub fn update(&mut self) {
        self.player.update();
    }

    /// Current action state
    pub fn player(&self) -> &PlayerInput {
        &self.player
    }

    /// Check if an action was pressed this frame
    pub fn just_pressed(&self, action: Action) -> bool {
        self.player.just_pressed(action)
    }

    /// Drop all held input (e.g. when the window loses focus)
    pub fn reset(&mut self) {
        self.held_sources.clear();
        self.player.reset();
    }
}
