//! Per-VM pending error messages.
//!
//! Host functions called from a script cannot unwind across the interpreter,
//! so they record a message here instead and return normally. Calling code
//! checks [`ErrorRegistry::occurred`] (or drains with
//! [`ErrorRegistry::message`]) before trusting later results for that VM.
//!
//! Each VM has at most one pending message, and the first one wins: while a
//! message is pending, later messages for the same VM are dropped, so
//! follow-on failures do not hide the original cause. A message left
//! undrained therefore swallows every later failure for that VM.

use std::fmt;
use std::hash::Hash;

use rustc_hash::FxHashMap;

use crate::error::{BindError, BindResult};
use crate::vm::VmHandle;

/// What happens when an error is thrown while one is already pending.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ThrowMode {
    /// Keep the first message and silently drop the new one.
    #[default]
    FirstWins,
    /// Keep the first message and log the dropped one at `warn`.
    Strict,
}

/// Map from VM to its pending error message.
#[derive(Debug, Clone)]
pub struct ErrorRegistry<K = VmHandle> {
    pending: FxHashMap<K, String>,
    mode: ThrowMode,
}

impl<K> ErrorRegistry<K>
where
    K: Copy + Eq + Hash + fmt::Debug,
{
    /// Create an empty first-error-wins registry.
    pub fn new() -> Self {
        Self::with_mode(ThrowMode::FirstWins)
    }

    /// Create an empty registry using `mode` for rejected messages.
    pub fn with_mode(mode: ThrowMode) -> Self {
        Self {
            pending: FxHashMap::default(),
            mode,
        }
    }

    /// How a message thrown while one is pending is treated.
    pub fn mode(&self) -> ThrowMode {
        self.mode
    }

    /// Change how later rejected messages are treated.
    pub fn set_mode(&mut self, mode: ThrowMode) {
        self.mode = mode;
    }

    /// Whether an error is pending for `vm`.
    pub fn occurred(&self, vm: K) -> bool {
        self.pending.contains_key(&vm)
    }

    /// Record `message` for `vm` unless an error is already pending.
    ///
    /// Returns true if the message was recorded.
    #[cfg_attr(feature = "profiling", profiling::function)]
    pub fn throw(&mut self, vm: K, message: impl Into<String>) -> bool {
        if let Some(existing) = self.pending.get(&vm) {
            match self.mode {
                ThrowMode::FirstWins => tracing::trace!(?vm, "error already pending, dropped"),
                ThrowMode::Strict => {
                    let rejected = message.into();
                    tracing::warn!(?vm, %existing, %rejected, "error already pending, dropped");
                }
            }
            return false;
        }
        self.record(vm, message.into());
        true
    }

    /// Record `message` for `vm`, or fail with [`BindError::ErrorPending`].
    ///
    /// The pending message is never replaced.
    pub fn try_throw(&mut self, vm: K, message: impl Into<String>) -> BindResult<()> {
        if let Some(existing) = self.pending.get(&vm) {
            return Err(BindError::ErrorPending {
                existing: existing.clone(),
                rejected: message.into(),
            });
        }
        self.record(vm, message.into());
        Ok(())
    }

    fn record(&mut self, vm: K, message: String) {
        tracing::trace!(?vm, %message, "error recorded");
        self.pending.insert(vm, message);
    }

    /// Discard the pending error for `vm`, if any.
    pub fn clear(&mut self, vm: K) {
        self.pending.remove(&vm);
    }

    /// Remove and return the pending message for `vm`.
    ///
    /// Returns an empty string when nothing is pending. Use [`Self::take`]
    /// to tell that apart from a pending empty message.
    #[cfg_attr(feature = "profiling", profiling::function)]
    pub fn message(&mut self, vm: K) -> String {
        self.take(vm).unwrap_or_default()
    }

    /// Remove and return the pending message for `vm`, if any.
    pub fn take(&mut self, vm: K) -> Option<String> {
        self.pending.remove(&vm)
    }

    /// The pending message for `vm`, without draining it.
    pub fn peek(&self, vm: K) -> Option<&str> {
        self.pending.get(&vm).map(String::as_str)
    }

    /// Forget `vm` because the host is tearing it down.
    ///
    /// Returns the message that was still pending, if any.
    pub fn close(&mut self, vm: K) -> Option<String> {
        let dropped = self.pending.remove(&vm);
        if let Some(message) = &dropped {
            tracing::debug!(?vm, %message, "VM closed with an undrained error");
        }
        dropped
    }

    /// Number of VMs with a pending error.
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Whether no VM has a pending error.
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// VMs that currently have a pending error, in no particular order.
    pub fn contexts(&self) -> impl Iterator<Item = K> + '_ {
        self.pending.keys().copied()
    }
}

impl<K> Default for ErrorRegistry<K>
where
    K: Copy + Eq + Hash + fmt::Debug,
{
    fn default() -> Self {
        Self::new()
    }
}
