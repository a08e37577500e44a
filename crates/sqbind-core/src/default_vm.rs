//! Fallback VM for call sites without one at hand.

use crate::error::{BindError, BindResult};
use crate::vm::VmHandle;

/// Slot holding the VM to use when the caller does not pass one.
///
/// The slot does not check that the VM is still alive; the host is
/// responsible for clearing it when the VM is torn down.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DefaultVm {
    vm: Option<VmHandle>,
}

impl DefaultVm {
    /// The default VM, or `None` if it was never set.
    pub fn get(&self) -> Option<VmHandle> {
        self.vm
    }

    pub fn set(&mut self, vm: VmHandle) {
        tracing::trace!(%vm, "default VM set");
        self.vm = Some(vm);
    }

    /// Unset the slot, returning the previous VM.
    pub fn clear(&mut self) -> Option<VmHandle> {
        self.vm.take()
    }

    /// The default VM, or [`BindError::NoDefaultVm`] if it was never set.
    pub fn require(&self) -> BindResult<VmHandle> {
        self.vm.ok_or(BindError::NoDefaultVm)
    }
}
