//! Core primitives for binding host code to an embedded script VM.
//!
//! ## Key Types
//!
//! - [`Shared`]: Reference-counted handle giving joint ownership of one heap object
//! - [`VmHandle`]: Opaque identifier for one running VM, owned by the host
//! - [`ErrorRegistry`]: At most one pending error message per VM
//! - [`ErrorHandling`]: Whether recorded errors are also raised inside the VM
//! - [`DefaultVm`]: Fallback VM for call sites that have none at hand
//! - [`BindingState`]: One registry, policy and default slot, owned together

mod config;
mod default_vm;
mod diagnostics;
mod error;
mod policy;
mod registry;
mod shared;
mod state;
mod vm;

pub use config::BindConfig;
pub use default_vm::DefaultVm;
pub use diagnostics::{format_type_error, last_error_string};
pub use error::{BindError, BindResult};
pub use policy::ErrorHandling;
pub use registry::{ErrorRegistry, ThrowMode};
pub use shared::Shared;
pub use state::BindingState;
pub use vm::{ScriptVm, VmHandle};

#[cfg(test)]
pub(crate) mod test_vm;
