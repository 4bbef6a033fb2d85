//! Diagnostic output for volume construction.
//!
//! Volumes never reach for a global logger directly: every operation that
//! reports something takes a [`DiagnosticSink`]. [`LogSink`] forwards to the
//! `log` facade and is what the convenience constructors use.

use std::fmt;

use log::{Level, info, log_enabled};

use crate::config::LOG_TARGET;
use crate::core::types::VolumeType;

/// Something worth telling an operator about while volumes are built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VolumeEvent {
    /// A descriptor was classified and a volume of this type is being built.
    Created(VolumeType),
    /// An ellipsoid with equal half-scales was reclassified as a sphere.
    PromotedToSphere,
}

impl fmt::Display for VolumeEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VolumeEvent::Created(ty) => write!(f, "New {}", ty.name()),
            VolumeEvent::PromotedToSphere => {
                f.write_str("auto-converting spherical ellipsoid to sphere")
            }
        }
    }
}

/// Receiver for [`VolumeEvent`]s. Silencing it has no semantic effect.
pub trait DiagnosticSink {
    fn emit(&mut self, event: VolumeEvent);
}

/// Forwards events to the `log` crate at info level.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn emit(&mut self, event: VolumeEvent) {
        if log_enabled!(target: LOG_TARGET, Level::Info) {
            info!(target: LOG_TARGET, "{event}");
        }
    }
}

/// Drops every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn emit(&mut self, _event: VolumeEvent) {}
}

/// Collects events in order, mostly useful in tests.
impl DiagnosticSink for Vec<VolumeEvent> {
    fn emit(&mut self, event: VolumeEvent) {
        self.push(event);
    }
}
