//! Runtime effect-queue executor for reducer-emitted side effects.

use leptos::*;

use crate::runtime_context::SessionRuntimeContext;

/// Installs the effect executor that drains reducer-emitted runtime effects
/// in order.
pub fn install(runtime: SessionRuntimeContext) {
    // The queue is cleared before processing; a dispatch nested in a drained
    // effect then enqueues a fresh batch rather than racing the drain.
    create_effect(move |_| {
        let queued = runtime.effects.get();
        if queued.is_empty() {
            return;
        }

        runtime.effects.set(Vec::new());

        for effect in queued {
            runtime.host.get_value().run_runtime_effect(
                runtime.scope.get_value(),
                runtime.dispatch,
                effect,
            );
        }
    });
}
