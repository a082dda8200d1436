//! Reducer actions, side-effect intents, and transition logic for the
//! launcher session.

use launcher_host::{CounterAction, ShellView, StartOutcome, ViewChange};

use crate::model::{RunningSession, SessionPhase, StartError};

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_session`] to mutate [`SessionPhase`].
pub enum SessionAction {
    /// User pressed the start button.
    StartRequested,
    /// The bridge start call completed.
    StartFinished(Result<StartOutcome, String>),
    /// A counter read or mutation returned a fresh value.
    CounterLoaded {
        /// Value reported by the server.
        value: i64,
    },
    /// User pressed one of the counter buttons.
    AdjustCounter(CounterAction),
    /// User switched to the dashboard tab.
    OpenDashboardRequested,
    /// User switched back to the home tab.
    SwitchToHomeRequested,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Side-effect intents emitted by [`reduce_session`] for the shell runtime to
/// execute.
pub enum RuntimeEffect {
    /// Ask the host bridge to start the server process.
    StartServer,
    /// Read the counter from the server.
    FetchCounter {
        /// Port hosting the counter API.
        port: u16,
    },
    /// Apply a counter mutation on the server.
    ApplyCounter {
        /// Port hosting the counter API.
        port: u16,
        /// Mutation to apply.
        action: CounterAction,
    },
    /// Notify the host bridge of the active view.
    NotifyViewChange(ViewChange),
}

/// Applies a [`SessionAction`] to the session phase and collects the side
/// effects the runtime must execute.
///
/// Invalid or stale actions — a completion outside `Starting`, a counter
/// mutation with no running server — leave the phase untouched and emit
/// nothing. Every failure in this protocol either becomes idle-state error
/// text or is logged by the effect layer; none of them is fatal.
pub fn reduce_session(phase: &mut SessionPhase, action: SessionAction) -> Vec<RuntimeEffect> {
    let mut effects = Vec::new();
    match action {
        SessionAction::StartRequested => {
            if matches!(phase, SessionPhase::NotStarted { .. }) {
                *phase = SessionPhase::Starting;
                effects.push(RuntimeEffect::StartServer);
            }
        }
        SessionAction::StartFinished(result) => {
            if !phase.is_starting() {
                return effects;
            }
            *phase = match result {
                Ok(outcome) => match outcome.running_port() {
                    Some(port) => {
                        effects.push(RuntimeEffect::FetchCounter { port });
                        SessionPhase::Running(RunningSession::new(port))
                    }
                    // Started but portless: nothing to connect to, nothing to
                    // report. Back to the start screen.
                    None if outcome.started => SessionPhase::NotStarted { last_error: None },
                    None => SessionPhase::NotStarted {
                        last_error: Some(StartError::Rejected),
                    },
                },
                Err(message) => SessionPhase::NotStarted {
                    last_error: Some(StartError::Bridge(message)),
                },
            };
        }
        SessionAction::CounterLoaded { value } => {
            if let SessionPhase::Running(session) = phase {
                session.counter = Some(value);
            }
        }
        SessionAction::AdjustCounter(action) => {
            if let SessionPhase::Running(session) = phase {
                effects.push(RuntimeEffect::ApplyCounter {
                    port: session.port,
                    action,
                });
            }
        }
        SessionAction::OpenDashboardRequested => {
            if let SessionPhase::Running(session) = phase {
                session.view = ShellView::Dashboard;
                effects.push(RuntimeEffect::NotifyViewChange(ViewChange::dashboard(
                    session.port,
                )));
            }
        }
        SessionAction::SwitchToHomeRequested => {
            if let SessionPhase::Running(session) = phase {
                session.view = ShellView::Home;
                effects.push(RuntimeEffect::NotifyViewChange(ViewChange::home()));
            }
        }
    }
    effects
}

#[cfg(test)]
mod tests {
    use launcher_host::{CounterAction, ShellView, StartOutcome, ViewChange};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::{RunningSession, SessionPhase, StartError};

    fn started_outcome(port: u16) -> Result<StartOutcome, String> {
        Ok(StartOutcome {
            started: true,
            port: Some(port),
        })
    }

    fn running_phase(port: u16) -> SessionPhase {
        let mut phase = SessionPhase::idle();
        reduce_session(&mut phase, SessionAction::StartRequested);
        reduce_session(&mut phase, SessionAction::StartFinished(started_outcome(port)));
        phase
    }

    #[test]
    fn start_request_from_idle_enters_starting_and_launches() {
        let mut phase = SessionPhase::NotStarted {
            last_error: Some(StartError::Rejected),
        };

        let effects = reduce_session(&mut phase, SessionAction::StartRequested);

        assert_eq!(phase, SessionPhase::Starting);
        assert_eq!(effects, vec![RuntimeEffect::StartServer]);
    }

    #[test]
    fn start_request_while_starting_is_ignored() {
        let mut phase = SessionPhase::Starting;

        let effects = reduce_session(&mut phase, SessionAction::StartRequested);

        assert_eq!(phase, SessionPhase::Starting);
        assert_eq!(effects, Vec::new());
    }

    #[test]
    fn start_request_while_running_is_ignored() {
        let mut phase = running_phase(4173);
        let before = phase.clone();

        let effects = reduce_session(&mut phase, SessionAction::StartRequested);

        assert_eq!(phase, before);
        assert_eq!(effects, Vec::new());
    }

    #[test]
    fn successful_start_stores_port_and_fetches_counter() {
        let mut phase = SessionPhase::Starting;

        let effects =
            reduce_session(&mut phase, SessionAction::StartFinished(started_outcome(4173)));

        assert_eq!(phase, SessionPhase::Running(RunningSession::new(4173)));
        assert_eq!(effects, vec![RuntimeEffect::FetchCounter { port: 4173 }]);
    }

    #[test]
    fn rejected_start_reports_the_user_facing_error() {
        let mut phase = SessionPhase::Starting;

        let effects = reduce_session(
            &mut phase,
            SessionAction::StartFinished(Ok(StartOutcome {
                started: false,
                port: None,
            })),
        );

        assert_eq!(
            phase,
            SessionPhase::NotStarted {
                last_error: Some(StartError::Rejected),
            }
        );
        assert_eq!(phase.port(), None);
        assert_eq!(effects, Vec::new());
    }

    #[test]
    fn started_reply_without_port_returns_to_idle_without_error() {
        let mut phase = SessionPhase::Starting;

        let effects = reduce_session(
            &mut phase,
            SessionAction::StartFinished(Ok(StartOutcome {
                started: true,
                port: None,
            })),
        );

        assert_eq!(phase, SessionPhase::NotStarted { last_error: None });
        assert_eq!(effects, Vec::new());
    }

    #[test]
    fn thrown_start_failure_surfaces_the_bridge_message() {
        let mut phase = SessionPhase::Starting;

        reduce_session(
            &mut phase,
            SessionAction::StartFinished(Err("spawn ENOENT".to_string())),
        );

        assert_eq!(
            phase,
            SessionPhase::NotStarted {
                last_error: Some(StartError::Bridge("spawn ENOENT".to_string())),
            }
        );
    }

    #[test]
    fn start_completion_outside_starting_is_dropped() {
        let mut phase = running_phase(4173);
        let before = phase.clone();

        let effects =
            reduce_session(&mut phase, SessionAction::StartFinished(started_outcome(9000)));

        assert_eq!(phase, before);
        assert_eq!(effects, Vec::new());
    }

    #[test]
    fn counter_load_updates_the_running_session() {
        let mut phase = running_phase(4173);

        reduce_session(&mut phase, SessionAction::CounterLoaded { value: 7 });

        assert_eq!(phase.running().and_then(|s| s.counter), Some(7));

        // Last write wins; an increment reply replaces the cached value.
        reduce_session(&mut phase, SessionAction::CounterLoaded { value: 8 });
        assert_eq!(phase.running().and_then(|s| s.counter), Some(8));
    }

    #[test]
    fn counter_load_outside_a_running_session_is_dropped() {
        let mut phase = SessionPhase::idle();

        let effects = reduce_session(&mut phase, SessionAction::CounterLoaded { value: 7 });

        assert_eq!(phase, SessionPhase::idle());
        assert_eq!(effects, Vec::new());
    }

    #[test]
    fn counter_adjust_issues_a_request_only_while_running() {
        let mut phase = running_phase(4173);

        let effects = reduce_session(
            &mut phase,
            SessionAction::AdjustCounter(CounterAction::Increment),
        );

        assert_eq!(
            effects,
            vec![RuntimeEffect::ApplyCounter {
                port: 4173,
                action: CounterAction::Increment,
            }]
        );
    }

    #[test]
    fn counter_adjust_without_a_port_is_a_noop() {
        for mut phase in [SessionPhase::idle(), SessionPhase::Starting] {
            let before = phase.clone();

            let effects = reduce_session(
                &mut phase,
                SessionAction::AdjustCounter(CounterAction::Decrement),
            );

            assert_eq!(phase, before);
            assert_eq!(effects, Vec::new());
        }
    }

    #[test]
    fn opening_the_dashboard_notifies_the_bridge_with_the_port() {
        let mut phase = running_phase(4173);

        let effects = reduce_session(&mut phase, SessionAction::OpenDashboardRequested);

        assert_eq!(
            phase.running().map(|s| s.view),
            Some(ShellView::Dashboard)
        );
        assert_eq!(
            effects,
            vec![RuntimeEffect::NotifyViewChange(ViewChange::dashboard(4173))]
        );
    }

    #[test]
    fn switching_home_notifies_the_bridge_without_a_port() {
        let mut phase = running_phase(4173);
        reduce_session(&mut phase, SessionAction::OpenDashboardRequested);

        let effects = reduce_session(&mut phase, SessionAction::SwitchToHomeRequested);

        assert_eq!(phase.running().map(|s| s.view), Some(ShellView::Home));
        assert_eq!(
            effects,
            vec![RuntimeEffect::NotifyViewChange(ViewChange::home())]
        );
    }

    #[test]
    fn view_round_trip_preserves_the_counter_and_skips_refetch() {
        let mut phase = running_phase(4173);
        reduce_session(&mut phase, SessionAction::CounterLoaded { value: 7 });

        let mut effects = reduce_session(&mut phase, SessionAction::OpenDashboardRequested);
        effects.extend(reduce_session(&mut phase, SessionAction::SwitchToHomeRequested));

        assert_eq!(phase.running().and_then(|s| s.counter), Some(7));
        assert!(!effects
            .iter()
            .any(|effect| matches!(effect, RuntimeEffect::FetchCounter { .. })));
    }

    #[test]
    fn view_switches_outside_a_running_session_are_noops() {
        for action in [
            SessionAction::OpenDashboardRequested,
            SessionAction::SwitchToHomeRequested,
        ] {
            let mut phase = SessionPhase::idle();

            let effects = reduce_session(&mut phase, action);

            assert_eq!(phase, SessionPhase::idle());
            assert_eq!(effects, Vec::new());
        }
    }
}
