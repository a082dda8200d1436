//! Shell components for the launcher session view.

use launcher_host::{CounterAction, ShellView};
use leptos::*;

use crate::{
    model::SessionPhase,
    reducer::SessionAction,
    runtime_context::use_session_runtime,
};

/// CSS display value for a pane given the active view.
///
/// Both panes stay mounted the whole time a session runs; only visibility
/// toggles, so pane state (including the cached counter) survives switching
/// away and back.
fn pane_display(active: ShellView, pane: ShellView) -> &'static str {
    if active == pane {
        "flex"
    } else {
        "none"
    }
}

#[component]
/// Root launcher view: the start screen until a session is running, then the
/// tabbed session shell.
pub fn LauncherShell() -> impl IntoView {
    let runtime = use_session_runtime();
    let phase = runtime.phase;

    view! {
        <Show
            when=move || phase.with(|phase| phase.running().is_some())
            fallback=move || view! { <StartPane /> }
        >
            <RunningShell />
        </Show>
    }
}

#[component]
fn StartPane() -> impl IntoView {
    let runtime = use_session_runtime();
    let phase = runtime.phase;
    let starting = move || phase.with(SessionPhase::is_starting);
    let error_text = move || {
        phase.with(|phase| match phase {
            SessionPhase::NotStarted {
                last_error: Some(error),
            } => Some(error.to_string()),
            _ => None,
        })
    };

    view! {
        <div class="card">
            <div class="title">"Pinokio"</div>
            <div class="subtitle">"Click to start the server"</div>
            <Show when=move || error_text().is_some()>
                <div class="error">{error_text}</div>
            </Show>
            <button
                class="btn"
                disabled=starting
                on:click=move |_| runtime.dispatch_action(SessionAction::StartRequested)
            >
                {move || if starting() { "Starting…" } else { "Start Pinokio" }}
            </button>
        </div>
    }
}

#[component]
fn RunningShell() -> impl IntoView {
    let runtime = use_session_runtime();
    let phase = runtime.phase;
    let active_view = move || {
        phase.with(|phase| {
            phase
                .running()
                .map(|session| session.view)
                .unwrap_or(ShellView::Home)
        })
    };
    let port_text = move || {
        phase.with(|phase| {
            phase
                .port()
                .map(|port| format!("Port: {port}"))
                .unwrap_or_default()
        })
    };
    let tab_class = move |tab: ShellView| {
        if active_view() == tab {
            "session-tab active"
        } else {
            "session-tab"
        }
    };

    view! {
        <div class="session-shell">
            <div class="session-tabs">
                <button
                    class=move || tab_class(ShellView::Home)
                    on:click=move |_| runtime.dispatch_action(SessionAction::SwitchToHomeRequested)
                >
                    "Home"
                </button>
                <button
                    class=move || tab_class(ShellView::Dashboard)
                    on:click=move |_| runtime.dispatch_action(SessionAction::OpenDashboardRequested)
                >
                    "Dashboard"
                </button>
                <div class="session-port">{port_text}</div>
            </div>

            <div class="session-content">
                <div
                    class="session-pane session-pane-home"
                    style:display=move || pane_display(active_view(), ShellView::Home)
                >
                    <HomePane />
                </div>
                // Dashboard content is overlaid by the host shell; this pane
                // only reserves the surface.
                <div
                    class="session-pane session-pane-dashboard"
                    style:display=move || pane_display(active_view(), ShellView::Dashboard)
                ></div>
            </div>
        </div>
    }
}

#[component]
fn HomePane() -> impl IntoView {
    let runtime = use_session_runtime();
    let phase = runtime.phase;
    let counter_text = move || {
        phase.with(|phase| {
            phase
                .running()
                .and_then(|session| session.counter)
                .map(|value| value.to_string())
                .unwrap_or_else(|| "...".to_string())
        })
    };

    view! {
        <div class="card">
            <div class="title">"Pinokio Running"</div>

            <div class="counter-card">
                <div class="subtitle">"Counter API Demo"</div>
                <div class="counter-value">{counter_text}</div>
                <div class="counter-buttons">
                    <button
                        class="btn"
                        on:click=move |_| {
                            runtime
                                .dispatch_action(
                                    SessionAction::AdjustCounter(CounterAction::Decrement),
                                )
                        }
                    >
                        "-"
                    </button>
                    <button
                        class="btn"
                        on:click=move |_| {
                            runtime
                                .dispatch_action(
                                    SessionAction::AdjustCounter(CounterAction::Increment),
                                )
                        }
                    >
                        "+"
                    </button>
                </div>
            </div>

            <button
                class="btn"
                on:click=move |_| runtime.dispatch_action(SessionAction::OpenDashboardRequested)
            >
                "Open Pinokio Dashboard"
            </button>
        </div>
    }
}
