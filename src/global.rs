//! Process-wide binding state.
//!
//! A single lazily created [`BindingState`] behind a mutex, for call sites
//! that have no state of their own to pass around. Prefer an explicit
//! `BindingState` wherever one can be threaded through: independent
//! instances keep hosts (and tests) from observing each other's errors.
//!
//! The lock is never held while calling back into a VM, so a VM's
//! `raise_error` may itself use this module.

use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};

use sqbind_core::{BindConfig, BindResult, BindingState, ScriptVm, VmHandle, format_type_error};

static STATE: OnceLock<Mutex<BindingState>> = OnceLock::new();

fn lock() -> MutexGuard<'static, BindingState> {
    // Every operation leaves the state consistent, so a panic while the
    // lock was held does not invalidate it.
    STATE
        .get_or_init(|| Mutex::new(BindingState::new()))
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
}

/// Run `f` with exclusive access to the process-wide state.
///
/// `f` must not call other functions in this module.
pub fn with_state<R>(f: impl FnOnce(&mut BindingState) -> R) -> R {
    f(&mut lock())
}

/// Replace the process-wide settings. Pending errors are kept, and so is
/// the current default VM unless `config` names one.
pub fn configure(config: BindConfig) {
    lock().configure(config);
}

pub fn occurred(vm: VmHandle) -> bool {
    lock().occurred(vm)
}

/// Record `message` for `vm` unless an error is already pending.
pub fn throw(vm: VmHandle, message: impl Into<String>) -> bool {
    lock().throw(vm, message)
}

pub fn clear(vm: VmHandle) {
    lock().clear(vm);
}

/// Drain the pending message for `vm`, empty if none.
pub fn message(vm: VmHandle) -> String {
    lock().message(vm)
}

/// Record `message` against `vm` and raise it in the VM when error handling
/// is enabled. See [`BindingState::report`].
pub fn report<V>(vm: &mut V, message: impl Into<String>) -> bool
where
    V: ScriptVm + ?Sized,
{
    let message = message.into();
    let handle = vm.handle();
    let (recorded, forward) = {
        let mut state = lock();
        let recorded = state.throw(handle, message.as_str());
        (recorded, recorded && state.is_error_handling_enabled())
    };
    if forward {
        tracing::trace!(vm = %handle, %message, "raising error in VM");
        vm.raise_error(&message);
    }
    recorded
}

/// Report that the argument at `index` is not of the `expected` type.
pub fn report_type_error<V>(vm: &mut V, index: isize, expected: &str) -> bool
where
    V: ScriptVm + ?Sized,
{
    let message = format_type_error(&*vm, index, expected);
    report(vm, message)
}

/// Drain the pending error for `vm` into a `BindError::Script`.
pub fn check(vm: VmHandle) -> BindResult<()> {
    lock().check(vm)
}

/// [`check`] against the default VM.
pub fn check_default() -> BindResult<()> {
    lock().check_default()
}

pub fn is_error_handling_enabled() -> bool {
    lock().is_error_handling_enabled()
}

pub fn enable_error_handling(enabled: bool) {
    lock().enable_error_handling(enabled);
}

pub fn default_vm() -> Option<VmHandle> {
    lock().default_vm()
}

pub fn set_default_vm(vm: VmHandle) {
    lock().set_default_vm(vm);
}

pub fn clear_default_vm() -> Option<VmHandle> {
    lock().clear_default_vm()
}

/// Forget everything held for `vm`. See [`BindingState::close_vm`].
pub fn close_vm(vm: VmHandle) -> Option<String> {
    lock().close_vm(vm)
}
