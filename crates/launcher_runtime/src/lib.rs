//! Session state machine, effect pipeline, and Leptos shell for the Pinokio
//! launcher.

pub mod effect_executor;
pub mod host;
pub mod model;
pub mod reducer;
pub mod runtime_context;
pub mod scope;
pub mod shell;

pub use host::LauncherHostContext;
pub use model::{RunningSession, SessionPhase, StartError};
pub use reducer::{reduce_session, RuntimeEffect, SessionAction};
pub use runtime_context::{use_session_runtime, SessionProvider, SessionRuntimeContext};
pub use scope::ScopeHandle;
pub use shell::LauncherShell;
