//! Runtime provider and context wiring for the launcher shell.
//!
//! This module owns the long-lived reducer container, the runtime effect
//! queue, and the lifetime scope. UI composition stays in [`crate::shell`].

use launcher_host::LaunchHostServices;
use leptos::*;

use crate::{
    effect_executor,
    host::LauncherHostContext,
    model::SessionPhase,
    reducer::{reduce_session, RuntimeEffect, SessionAction},
    scope::ScopeHandle,
};

#[derive(Clone, Copy)]
/// Leptos context for reading session state and dispatching
/// [`SessionAction`] values.
pub struct SessionRuntimeContext {
    /// Host service bundle for executing runtime side effects.
    pub host: StoredValue<LauncherHostContext>,
    /// Reactive session phase signal.
    pub phase: RwSignal<SessionPhase>,
    /// Queue of runtime effects emitted by the reducer and processed by the
    /// executor.
    pub effects: RwSignal<Vec<RuntimeEffect>>,
    /// Lifetime scope cancelled when the provider is cleaned up.
    pub scope: StoredValue<ScopeHandle>,
    /// Reducer dispatch callback.
    pub dispatch: Callback<SessionAction>,
}

impl SessionRuntimeContext {
    /// Dispatches a reducer action through the runtime context callback.
    pub fn dispatch_action(&self, action: SessionAction) {
        self.dispatch.call(action);
    }
}

#[component]
/// Provides [`SessionRuntimeContext`] to descendant components.
pub fn SessionProvider(
    /// Injected browser or desktop host bundle assembled by the entry layer.
    host_services: LaunchHostServices,
    children: Children,
) -> impl IntoView {
    let host = store_value(LauncherHostContext::new(host_services));
    let phase = create_rw_signal(SessionPhase::default());
    let effects = create_rw_signal(Vec::<RuntimeEffect>::new());

    let lifetime = ScopeHandle::new();
    let scope = store_value(lifetime.clone());
    on_cleanup(move || lifetime.cancel());

    let dispatch = Callback::new(move |action: SessionAction| {
        let mut session = phase.get_untracked();
        let previous = session.clone();
        let new_effects = reduce_session(&mut session, action);

        if session != previous {
            phase.set(session);
        }
        if !new_effects.is_empty() {
            let mut queue = effects.get_untracked();
            queue.extend(new_effects);
            effects.set(queue);
        }
    });

    let runtime = SessionRuntimeContext {
        host,
        phase,
        effects,
        scope,
        dispatch,
    };

    provide_context(runtime);
    effect_executor::install(runtime);

    children().into_view()
}

/// Returns the current [`SessionRuntimeContext`].
///
/// # Panics
///
/// Panics if called outside [`SessionProvider`].
pub fn use_session_runtime() -> SessionRuntimeContext {
    use_context::<SessionRuntimeContext>().expect("SessionRuntimeContext not provided")
}
