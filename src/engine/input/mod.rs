// Input handling system
//
// Keyboard and mouse events are mapped to game actions through fixed key
// and button layouts. The player state machine only ever sees the resulting
// held and just-pressed action sets.
//
// ## Architecture
//
// - `action`: Defines game actions and default key bindings
// - `config`: Key and button layouts
// - `player`: Per-frame action state
// - `manager`: Turns winit events into action state
//
// ## Usage Example
//
// ```rust
// let mut input = InputManager::new();
//
// // In your event loop, process keyboard events
// input.process_keyboard_event(&key_event);
//
// // Run the game tick against the current state, then start a new frame
// level.update(input.player(), &game_loop)?;
// input.update();
// ```

pub mod action;
pub mod config;
pub mod manager;
pub mod player;

// Re-export commonly used types
pub use action::Action;
pub use manager::InputManager;
pub use player::PlayerInput;
