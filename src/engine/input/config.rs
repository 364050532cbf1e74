// Key and button layouts

use super::action::{default_bindings, global_bindings, Action, InputSource};
use std::collections::HashMap;

/// Maps input sources (keys/buttons) to game actions.
///
/// A source drives exactly one action; several sources may share one.
#[derive(Debug, Clone, Default)]
pub struct InputConfig {
    bindings: HashMap<InputSource, Action>,
}

impl InputConfig {
    /// Build a layout from `(source, action)` pairs; a repeated source keeps
    /// its last action
    pub fn from_bindings(bindings: Vec<(InputSource, Action)>) -> Self {
        Self {
            bindings: bindings.into_iter().collect(),
        }
    }

    /// The action bound to an input source
    pub fn get_action(&self, source: InputSource) -> Option<Action> {
        self.bindings.get(&source).copied()
    }
}

/// Character bindings plus global (menu/pause) bindings
#[derive(Debug)]
pub struct InputBindings {
    player: InputConfig,
    global: InputConfig,
}

impl InputBindings {
    pub fn new(player: InputConfig, global: InputConfig) -> Self {
        Self { player, global }
    }

    /// Character bindings win over global ones
    pub fn get_action(&self, source: InputSource) -> Option<Action> {
        self.player
            .get_action(source)
            .or_else(|| self.global.get_action(source))
    }
}

impl Default for InputBindings {
    fn default() -> Self {
        Self::new(
            InputConfig::from_bindings(default_bindings()),
            InputConfig::from_bindings(global_bindings()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::keyboard::KeyCode;

    #[test]
    fn test_defaults() {
        let bindings = InputBindings::default();
        assert_eq!(
            bindings.get_action(InputSource::key(KeyCode::Space)),
            Some(Action::Attack)
        );
        assert_eq!(
            bindings.get_action(InputSource::key(KeyCode::Escape)),
            Some(Action::Menu)
        );
        assert_eq!(bindings.get_action(InputSource::key(KeyCode::KeyZ)), None);
    }

    #[test]
    fn test_repeated_source_keeps_last_action() {
        let q = InputSource::key(KeyCode::KeyQ);
        let config =
            InputConfig::from_bindings(vec![(q, Action::SwitchWeapon), (q, Action::Roll)]);
        assert_eq!(config.get_action(q), Some(Action::Roll));
    }

    #[test]
    fn test_shared_action() {
        let config = InputConfig::from_bindings(vec![
            (InputSource::key(KeyCode::KeyA), Action::MoveLeft),
            (InputSource::key(KeyCode::ArrowLeft), Action::MoveLeft),
        ]);
        assert_eq!(config.get_action(InputSource::key(KeyCode::KeyA)), Some(Action::MoveLeft));
        assert_eq!(
            config.get_action(InputSource::key(KeyCode::ArrowLeft)),
            Some(Action::MoveLeft)
        );
    }

    #[test]
    fn test_player_binding_shadows_global() {
        let escape = InputSource::key(KeyCode::Escape);
        let bindings = InputBindings::new(
            InputConfig::from_bindings(vec![(escape, Action::Roll)]),
            InputConfig::from_bindings(global_bindings()),
        );
        assert_eq!(bindings.get_action(escape), Some(Action::Roll));
    }
}
