//! Host-side runtime helpers for executing reducer effects.
//!
//! Reducer semantics stay pure; this module runs the resulting bridge and
//! HTTP operations behind a typed boundary that native tests drive directly
//! with in-memory service doubles.

use std::rc::Rc;

use launcher_host::{
    CounterService, DashboardViewService, LaunchHostServices, ProcessLaunchService,
};
use leptos::{logging, spawn_local, Callable, Callback};

use crate::{
    reducer::{RuntimeEffect, SessionAction},
    scope::ScopeHandle,
};

#[derive(Clone)]
/// Host service bundle for launcher runtime side effects.
pub struct LauncherHostContext {
    launch: Rc<dyn ProcessLaunchService>,
    dashboard_view: Rc<dyn DashboardViewService>,
    counter: Rc<dyn CounterService>,
    host_strategy_name: &'static str,
}

impl LauncherHostContext {
    /// Wraps the injected host service bundle.
    pub fn new(services: LaunchHostServices) -> Self {
        Self {
            launch: services.launch,
            dashboard_view: services.dashboard_view,
            counter: services.counter,
            host_strategy_name: services.host_strategy.as_str(),
        }
    }

    /// Returns the stable name of the selected host strategy.
    pub fn host_strategy_name(&self) -> &'static str {
        self.host_strategy_name
    }

    /// Executes a single [`RuntimeEffect`] on the UI thread.
    ///
    /// Completions are delivered through `dispatch` unless `scope` was
    /// cancelled while the operation was in flight.
    pub fn run_runtime_effect(
        &self,
        scope: ScopeHandle,
        dispatch: Callback<SessionAction>,
        effect: RuntimeEffect,
    ) {
        let host = self.clone();
        spawn_local(async move {
            host.perform_effect(&scope, &|action| dispatch.call(action), effect)
                .await;
        });
    }

    /// Awaitable core of [`Self::run_runtime_effect`], driven directly by
    /// native tests.
    ///
    /// Counter and view failures are logged and dispatch nothing — the cached
    /// value stays on screen and no user-visible error is produced. Start
    /// completions always reach the reducer, success and failure alike.
    pub async fn perform_effect(
        &self,
        scope: &ScopeHandle,
        dispatch: &dyn Fn(SessionAction),
        effect: RuntimeEffect,
    ) {
        match effect {
            RuntimeEffect::StartServer => {
                let result = self.launch.start_server().await;
                if scope.is_active() {
                    dispatch(SessionAction::StartFinished(result));
                }
            }
            RuntimeEffect::FetchCounter { port } => match self.counter.fetch(port).await {
                Ok(value) if scope.is_active() => {
                    dispatch(SessionAction::CounterLoaded { value });
                }
                Ok(_) => {}
                Err(err) => logging::warn!("counter fetch on port {port} failed: {err}"),
            },
            RuntimeEffect::ApplyCounter { port, action } => {
                match self.counter.apply(port, action).await {
                    Ok(value) if scope.is_active() => {
                        dispatch(SessionAction::CounterLoaded { value });
                    }
                    Ok(_) => {}
                    Err(err) => logging::warn!(
                        "counter {} on port {port} failed: {err}",
                        action.path_segment()
                    ),
                }
            }
            RuntimeEffect::NotifyViewChange(change) => {
                if let Err(err) = self.dashboard_view.set_view(change).await {
                    logging::warn!("{} view switch failed: {err}", change.view.as_str());
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use futures::executor::block_on;
    use launcher_host::{
        CounterAction, HostStrategy, LaunchHostServices, MemoryCounterService,
        MemoryProcessLaunchService, NoopCounterService, NoopDashboardViewService,
        NoopProcessLaunchService, RecordingDashboardViewService, StartOutcome, ViewChange,
    };

    use super::*;

    struct Harness {
        host: LauncherHostContext,
        dispatched: Rc<RefCell<Vec<SessionAction>>>,
    }

    impl Harness {
        fn new(services: LaunchHostServices) -> Self {
            Self {
                host: LauncherHostContext::new(services),
                dispatched: Rc::new(RefCell::new(Vec::new())),
            }
        }

        fn perform(&self, scope: &ScopeHandle, effect: RuntimeEffect) {
            let dispatched = self.dispatched.clone();
            block_on(self.host.perform_effect(
                scope,
                &move |action| dispatched.borrow_mut().push(action),
                effect,
            ));
        }

        fn actions(&self) -> Vec<SessionAction> {
            self.dispatched.borrow().clone()
        }
    }

    fn services_with(
        launch: Rc<dyn launcher_host::ProcessLaunchService>,
        dashboard_view: Rc<dyn launcher_host::DashboardViewService>,
        counter: Rc<dyn launcher_host::CounterService>,
    ) -> LaunchHostServices {
        LaunchHostServices {
            launch,
            dashboard_view,
            counter,
            host_strategy: HostStrategy::DesktopStub,
        }
    }

    #[test]
    fn start_effect_dispatches_the_outcome() {
        let harness = Harness::new(services_with(
            Rc::new(MemoryProcessLaunchService::new(4173)),
            Rc::new(NoopDashboardViewService),
            Rc::new(NoopCounterService),
        ));

        harness.perform(&ScopeHandle::new(), RuntimeEffect::StartServer);

        assert_eq!(
            harness.actions(),
            vec![SessionAction::StartFinished(Ok(StartOutcome {
                started: true,
                port: Some(4173),
            }))]
        );
    }

    #[test]
    fn cancelled_scope_drops_the_start_completion() {
        let harness = Harness::new(services_with(
            Rc::new(MemoryProcessLaunchService::new(4173)),
            Rc::new(NoopDashboardViewService),
            Rc::new(NoopCounterService),
        ));

        let scope = ScopeHandle::new();
        scope.cancel();
        harness.perform(&scope, RuntimeEffect::StartServer);

        assert_eq!(harness.actions(), Vec::new());
    }

    #[test]
    fn counter_fetch_delivers_the_server_value() {
        let harness = Harness::new(services_with(
            Rc::new(NoopProcessLaunchService),
            Rc::new(NoopDashboardViewService),
            Rc::new(MemoryCounterService::new(7)),
        ));

        harness.perform(&ScopeHandle::new(), RuntimeEffect::FetchCounter { port: 4173 });

        assert_eq!(
            harness.actions(),
            vec![SessionAction::CounterLoaded { value: 7 }]
        );
    }

    #[test]
    fn counter_mutation_delivers_the_new_value() {
        let harness = Harness::new(services_with(
            Rc::new(NoopProcessLaunchService),
            Rc::new(NoopDashboardViewService),
            Rc::new(MemoryCounterService::new(7)),
        ));

        harness.perform(
            &ScopeHandle::new(),
            RuntimeEffect::ApplyCounter {
                port: 4173,
                action: CounterAction::Increment,
            },
        );

        assert_eq!(
            harness.actions(),
            vec![SessionAction::CounterLoaded { value: 8 }]
        );
    }

    #[test]
    fn failed_counter_calls_dispatch_nothing() {
        // NoopCounterService fails every call; the stale-value policy means
        // no action reaches the reducer and no error is surfaced.
        let harness = Harness::new(services_with(
            Rc::new(NoopProcessLaunchService),
            Rc::new(NoopDashboardViewService),
            Rc::new(NoopCounterService),
        ));

        let scope = ScopeHandle::new();
        harness.perform(&scope, RuntimeEffect::FetchCounter { port: 4173 });
        harness.perform(
            &scope,
            RuntimeEffect::ApplyCounter {
                port: 4173,
                action: CounterAction::Increment,
            },
        );

        assert_eq!(harness.actions(), Vec::new());
    }

    #[test]
    fn view_change_notifications_reach_the_bridge() {
        let recorder = Rc::new(RecordingDashboardViewService::default());
        let harness = Harness::new(services_with(
            Rc::new(NoopProcessLaunchService),
            recorder.clone(),
            Rc::new(NoopCounterService),
        ));

        let scope = ScopeHandle::new();
        harness.perform(
            &scope,
            RuntimeEffect::NotifyViewChange(ViewChange::dashboard(4173)),
        );
        harness.perform(&scope, RuntimeEffect::NotifyViewChange(ViewChange::home()));

        assert_eq!(
            recorder.changes(),
            vec![ViewChange::dashboard(4173), ViewChange::home()]
        );
        assert_eq!(harness.actions(), Vec::new());
    }
}
