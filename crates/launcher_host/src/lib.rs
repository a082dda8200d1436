//! Typed host-domain contracts and shared models for the Pinokio launcher shell.
//!
//! This crate is the API-first boundary for the capabilities the launcher UI
//! consumes: starting the local server process, notifying the host shell of
//! the active view, and reading/mutating the server-owned counter. Concrete
//! browser adapters live in `launcher_host_web`; the runtime crate only ever
//! sees the traits and the assembled [`LaunchHostServices`] bundle.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod counter;
pub mod launch;
pub mod services;
pub mod view;

pub use counter::{
    CounterAction, CounterFuture, CounterService, CounterSnapshot, MemoryCounterService,
    NoopCounterService,
};
pub use launch::{
    MemoryProcessLaunchService, NoopProcessLaunchService, ProcessLaunchFuture,
    ProcessLaunchService, StartOutcome,
};
pub use services::{HostStrategy, LaunchHostServices};
pub use view::{
    DashboardViewFuture, DashboardViewService, NoopDashboardViewService,
    RecordingDashboardViewService, ShellView, ViewChange,
};
