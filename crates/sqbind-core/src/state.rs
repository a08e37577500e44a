//! Error registry, forwarding policy and default VM, owned together.

use crate::config::BindConfig;
use crate::default_vm::DefaultVm;
use crate::diagnostics::format_type_error;
use crate::error::{BindError, BindResult};
use crate::policy::ErrorHandling;
use crate::registry::ErrorRegistry;
use crate::vm::{ScriptVm, VmHandle};

/// Binding-layer state for one host.
///
/// Bundles the pending-error registry, the error forwarding policy and the
/// default VM slot. Hosts hold one of these explicitly; the `sqbind` crate
/// offers a process-wide instance for code that cannot thread it through.
///
/// # Example
///
/// ```ignore
/// let mut state = BindingState::new();
///
/// // Inside a bound function: the argument had the wrong type.
/// state.report_type_error(&mut vm, 2, "string");
///
/// // Back in the caller, before trusting the result.
/// state.check(vm.handle())?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct BindingState {
    errors: ErrorRegistry<VmHandle>,
    error_handling: ErrorHandling,
    default_vm: DefaultVm,
}

impl BindingState {
    /// State with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: BindConfig) -> Self {
        let mut state = Self::new();
        state.configure(config);
        state
    }

    /// Apply `config`. Pending errors are kept, and so is the current
    /// default VM unless `config` names one.
    pub fn configure(&mut self, config: BindConfig) {
        self.error_handling.enable(config.error_handling);
        self.errors.set_mode(config.throw_mode);
        if let Some(vm) = config.default_vm {
            self.default_vm.set(vm);
        }
    }

    pub fn errors(&self) -> &ErrorRegistry<VmHandle> {
        &self.errors
    }

    pub fn errors_mut(&mut self) -> &mut ErrorRegistry<VmHandle> {
        &mut self.errors
    }

    // ========== Registry ==========

    pub fn occurred(&self, vm: VmHandle) -> bool {
        self.errors.occurred(vm)
    }

    /// Record `message` for `vm` without raising it in the VM.
    pub fn throw(&mut self, vm: VmHandle, message: impl Into<String>) -> bool {
        self.errors.throw(vm, message)
    }

    pub fn clear(&mut self, vm: VmHandle) {
        self.errors.clear(vm);
    }

    /// Drain the pending message for `vm`, empty if none.
    pub fn message(&mut self, vm: VmHandle) -> String {
        self.errors.message(vm)
    }

    // ========== Policy ==========

    pub fn is_error_handling_enabled(&self) -> bool {
        self.error_handling.is_enabled()
    }

    pub fn enable_error_handling(&mut self, enabled: bool) {
        self.error_handling.enable(enabled);
    }

    // ========== Default VM ==========

    pub fn default_vm(&self) -> Option<VmHandle> {
        self.default_vm.get()
    }

    pub fn set_default_vm(&mut self, vm: VmHandle) {
        self.default_vm.set(vm);
    }

    pub fn clear_default_vm(&mut self) -> Option<VmHandle> {
        self.default_vm.clear()
    }

    // ========== Reporting ==========

    /// Record `message` against `vm` and, if error handling is enabled,
    /// raise it through the interpreter as well.
    ///
    /// A message dropped because another error is already pending is not
    /// raised either. Returns true if the message was recorded.
    #[cfg_attr(feature = "profiling", profiling::function)]
    pub fn report<V>(&mut self, vm: &mut V, message: impl Into<String>) -> bool
    where
        V: ScriptVm + ?Sized,
    {
        let message = message.into();
        let handle = vm.handle();
        if !self.errors.throw(handle, message.as_str()) {
            return false;
        }
        if self.error_handling.is_enabled() {
            tracing::trace!(vm = %handle, %message, "raising error in VM");
            vm.raise_error(&message);
        }
        true
    }

    /// Report that the argument at `index` is not of the `expected` type.
    pub fn report_type_error<V>(&mut self, vm: &mut V, index: isize, expected: &str) -> bool
    where
        V: ScriptVm + ?Sized,
    {
        let message = format_type_error(&*vm, index, expected);
        self.report(vm, message)
    }

    /// Drain the pending error for `vm` into a [`BindError::Script`].
    pub fn check(&mut self, vm: VmHandle) -> BindResult<()> {
        match self.errors.take(vm) {
            Some(message) => Err(BindError::Script { message }),
            None => Ok(()),
        }
    }

    /// [`Self::check`] against the default VM.
    pub fn check_default(&mut self) -> BindResult<()> {
        let vm = self.default_vm.require()?;
        self.check(vm)
    }

    /// Forget everything held for `vm` because the host is tearing it down.
    ///
    /// Unsets the default VM if it is `vm`. Returns the error that was still
    /// pending, if any.
    pub fn close_vm(&mut self, vm: VmHandle) -> Option<String> {
        if self.default_vm.get() == Some(vm) {
            self.default_vm.clear();
        }
        self.errors.close(vm)
    }
}
