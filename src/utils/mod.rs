//! Utility helpers: diagnostics and batch operations.

pub mod logging;
pub mod parallel;

pub use logging::{DiagnosticSink, LogSink, NullSink, VolumeEvent};
pub use parallel::{rescale_volumes, rescale_volumes_each};
