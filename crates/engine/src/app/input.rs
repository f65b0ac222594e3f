#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputAction {
    MoveLeft,
    MoveRight,
    Shoot,
    Quit,
}

const ACTION_COUNT: usize = 4;

#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct ActionStates {
    down: [bool; ACTION_COUNT],
}

impl ActionStates {
    pub(crate) fn set(&mut self, action: InputAction, is_down: bool) {
        self.down[action.index()] = is_down;
    }

    pub(crate) fn is_down(&self, action: InputAction) -> bool {
        self.down[action.index()]
    }
}

impl InputAction {
    const fn index(self) -> usize {
        match self {
            InputAction::MoveLeft => 0,
            InputAction::MoveRight => 1,
            InputAction::Shoot => 2,
            InputAction::Quit => 3,
        }
    }
}

/// Momentary held state sampled once per simulation tick. Rising-edge
/// detection is the consuming scene's responsibility.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputSnapshot {
    quit_requested: bool,
    actions: ActionStates,
}

impl InputSnapshot {
    pub fn empty() -> Self {
        Self::default()
    }

    pub(crate) fn new(quit_requested: bool, actions: ActionStates) -> Self {
        Self {
            quit_requested,
            actions,
        }
    }

    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    pub fn is_down(&self, action: InputAction) -> bool {
        self.actions.is_down(action)
    }

    pub fn with_action_down(mut self, action: InputAction, is_down: bool) -> Self {
        self.actions.set(action, is_down);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_states_set_and_clear_round_trip() {
        let mut states = ActionStates::default();
        states.set(InputAction::MoveLeft, true);
        states.set(InputAction::Shoot, true);

        assert!(states.is_down(InputAction::MoveLeft));
        assert!(states.is_down(InputAction::Shoot));
        assert!(!states.is_down(InputAction::MoveRight));

        states.set(InputAction::Shoot, false);
        assert!(!states.is_down(InputAction::Shoot));
    }

    #[test]
    fn empty_snapshot_has_nothing_down() {
        let snapshot = InputSnapshot::empty();
        for action in [
            InputAction::MoveLeft,
            InputAction::MoveRight,
            InputAction::Shoot,
            InputAction::Quit,
        ] {
            assert!(!snapshot.is_down(action));
        }
        assert!(!snapshot.quit_requested());
    }

    #[test]
    fn builder_sets_individual_actions() {
        let snapshot = InputSnapshot::empty()
            .with_action_down(InputAction::MoveRight, true)
            .with_action_down(InputAction::Shoot, true);

        assert!(snapshot.is_down(InputAction::MoveRight));
        assert!(snapshot.is_down(InputAction::Shoot));
        assert!(!snapshot.is_down(InputAction::MoveLeft));
    }
}
