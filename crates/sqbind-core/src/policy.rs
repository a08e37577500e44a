//! Whether recorded errors are also raised inside the VM.

/// Error forwarding policy.
///
/// When enabled (the default), an error reported through
/// [`BindingState::report`](crate::BindingState::report) is raised through
/// the interpreter's own error channel as well as being left in the
/// registry, so a script sees a script-level error for a host-side failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrorHandling {
    enabled: bool,
}

impl ErrorHandling {
    /// Policy with forwarding set to `enabled`.
    pub const fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Whether reported errors are raised inside the VM.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Turn forwarding into the VM on or off.
    pub fn enable(&mut self, enabled: bool) {
        self.enabled = enabled;
    }
}

impl Default for ErrorHandling {
    fn default() -> Self {
        Self::new(true)
    }
}
