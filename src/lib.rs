//! Shared ownership and error reporting for host-to-script bindings.
//!
//! Host functions bound into a script VM cannot unwind across the
//! interpreter. They record failures in an error registry keyed by VM
//! instead, and the code driving the VM drains that registry before
//! trusting a result.
//!
//! Hosts that can hold a [`BindingState`] should do so. Code that cannot
//! thread one through may use the process-wide instance in [`global`].
//!
//! # Example
//!
//! ```ignore
//! use sqbind::prelude::*;
//!
//! fn set_name(state: &mut BindingState, vm: &mut MyVm) -> bool {
//!     if !vm.is_string(2) {
//!         state.report_type_error(vm, 2, "string");
//!         return false;
//!     }
//!     true
//! }
//! ```

pub mod global;

pub use sqbind_core::{
    BindConfig, BindError, BindResult, BindingState, DefaultVm, ErrorHandling, ErrorRegistry,
    ScriptVm, Shared, ThrowMode, VmHandle, format_type_error, last_error_string,
};

pub mod prelude {
    pub use sqbind_core::{
        BindConfig, BindError, BindResult, BindingState, ScriptVm, Shared, ThrowMode, VmHandle,
        format_type_error, last_error_string,
    };
}
