//! Settings for a [`BindingState`](crate::BindingState).

use crate::registry::ThrowMode;
use crate::vm::VmHandle;

/// Construction settings for a binding state.
///
/// Defaults: error forwarding enabled, first-error-wins, no default VM.
///
/// ```ignore
/// let config = BindConfig::new()
///     .error_handling(false)
///     .throw_mode(ThrowMode::Strict);
/// let state = BindingState::with_config(config);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BindConfig {
    pub error_handling: bool,
    pub throw_mode: ThrowMode,
    pub default_vm: Option<VmHandle>,
}

impl BindConfig {
    /// Settings with every default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether reported errors are also raised inside the VM.
    pub fn error_handling(mut self, enabled: bool) -> Self {
        self.error_handling = enabled;
        self
    }

    /// How an error thrown while one is pending is treated.
    pub fn throw_mode(mut self, mode: ThrowMode) -> Self {
        self.throw_mode = mode;
        self
    }

    /// VM to install as the default. Leaving it unset keeps the current one.
    pub fn default_vm(mut self, vm: VmHandle) -> Self {
        self.default_vm = Some(vm);
        self
    }
}

impl Default for BindConfig {
    fn default() -> Self {
        Self {
            error_handling: true,
            throw_mode: ThrowMode::FirstWins,
            default_vm: None,
        }
    }
}
