//! Control event dispatch.
//!
//! Routes `ControlEvent`s reported by the panels into the controller, logging
//! each one and recording integration errors for the status bar.

use barview::ControlEvent;
use tracing::{debug, error};

use crate::app::AppState;

/// Applies control events to the application state.
pub struct ControlCoordinator;

impl ControlCoordinator {
    /// Applies one event.
    ///
    /// Returns true if the event was accepted. A rejected event leaves the
    /// controller untouched and is surfaced through `last_error`.
    pub fn apply(state: &mut AppState, event: ControlEvent) -> bool {
        match state.controller.handle_event(event) {
            Ok(_) => {
                debug!(?event, "Control event applied");
                true
            }
            Err(err) => {
                error!(?event, %err, "Control event rejected");
                state.last_error = Some(err.to_string());
                false
            }
        }
    }

    /// Applies events in the order they were reported.
    ///
    /// Returns true if at least one event was accepted.
    pub fn apply_all(state: &mut AppState, events: impl IntoIterator<Item = ControlEvent>) -> bool {
        let mut any_applied = false;
        for event in events {
            any_applied |= Self::apply(state, event);
        }
        any_applied
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use barview::{BarController, ConfigModel};

    fn state() -> AppState {
        AppState::new(BarController::new(ConfigModel::builtin().unwrap()))
    }

    #[test]
    fn test_apply_all_in_order() {
        let mut state = state();
        let applied = ControlCoordinator::apply_all(
            &mut state,
            [
                ControlEvent::SliderChanged(500),
                ControlEvent::CheckboxToggled { index: 0, value: true },
                ControlEvent::CheckboxToggled { index: 0, value: false },
                ControlEvent::CheckboxToggled { index: 2, value: true },
            ],
        );

        assert!(applied);
        assert_eq!(state.controller.left_value(), 500);
        assert_eq!(state.controller.right_value(), 30.0);
        assert!(state.last_error.is_none());
    }

    #[test]
    fn test_rejected_event_is_recorded() {
        let mut state = state();
        let applied = ControlCoordinator::apply(
            &mut state,
            ControlEvent::CheckboxToggled { index: 99, value: true },
        );

        assert!(!applied);
        assert!(state.last_error.as_deref().is_some_and(|msg| msg.contains("99")));
        assert_eq!(state.controller.right_value(), 0.0);
    }

    #[test]
    fn test_empty_batch_applies_nothing() {
        let mut state = state();
        assert!(!ControlCoordinator::apply_all(&mut state, Vec::new()));
    }
}
