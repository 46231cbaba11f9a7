use std::collections::HashMap;

/// Per-device state of the optimistic toggle protocol. A device is `Pending`
/// from the moment its switch flips locally until the backend answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleState {
    Idle,
    Pending { previous: bool },
}

/// Outcome of a toggle attempt, reported back to the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// Backend acknowledged; displayed state stays at the new value.
    Confirmed(bool),
    /// A request for this device is still in flight; the input was dropped.
    InFlight,
}

/// Tracks in-flight status updates per device id.
///
/// While an update is pending, further toggles of the same device are
/// refused. That closes the race where a second toggle captures the first
/// toggle's unconfirmed value as its rollback point, letting a failure of
/// the first request revert over the second.
#[derive(Debug, Default)]
pub struct ToggleCoordinator {
    states: HashMap<i64, ToggleState>,
}

impl ToggleCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self, id: i64) -> ToggleState {
        self.states.get(&id).copied().unwrap_or(ToggleState::Idle)
    }

    pub fn is_pending(&self, id: i64) -> bool {
        matches!(self.state(id), ToggleState::Pending { .. })
    }

    /// Start a toggle: capture the pre-toggle value and return the optimistic
    /// next one, or `None` when a request for this device is already pending.
    pub fn begin(&mut self, id: i64, current: bool) -> Option<bool> {
        if self.is_pending(id) {
            return None;
        }

        self.states
            .insert(id, ToggleState::Pending { previous: current });

        Some(!current)
    }

    /// Backend acknowledged: settle back to idle, keeping the new value.
    pub fn confirm(&mut self, id: i64) {
        self.states.insert(id, ToggleState::Idle);
    }

    /// Request failed or was refused: settle to idle and return the captured
    /// pre-toggle value the display must roll back to.
    pub fn fail(&mut self, id: i64) -> Option<bool> {
        match self.states.insert(id, ToggleState::Idle) {
            Some(ToggleState::Pending { previous }) => Some(previous),
            _ => None,
        }
    }
}
