//! VM identity and the host interpreter surface the binding layer calls into.

use std::borrow::Cow;
use std::fmt;
use std::num::NonZeroUsize;

/// Opaque identifier for one running script VM.
///
/// The embedding host creates and destroys VMs; a `VmHandle` is only ever a
/// lookup key and never keeps the VM alive. Handles compare by value, which
/// for handles built from pointers means by VM address.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VmHandle(NonZeroUsize);

impl VmHandle {
    /// Build a handle from the host's VM pointer. Returns `None` for null.
    pub fn from_ptr<T>(ptr: *const T) -> Option<Self> {
        NonZeroUsize::new(ptr as usize).map(Self)
    }

    /// Build a handle from a raw id. Returns `None` for zero.
    pub const fn from_raw(id: usize) -> Option<Self> {
        match NonZeroUsize::new(id) {
            Some(id) => Some(Self(id)),
            None => None,
        }
    }

    /// The raw id or address behind this handle.
    pub const fn as_raw(self) -> usize {
        self.0.get()
    }
}

impl fmt::Debug for VmHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VmHandle({:#x})", self.0.get())
    }
}

impl fmt::Display for VmHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0.get())
    }
}

/// The parts of an embedded interpreter the binding layer relies on.
///
/// Implemented by the host's VM wrapper. Stack indices follow the
/// interpreter's convention: positive values count from the bottom of the
/// current frame, negative values from the top.
pub trait ScriptVm {
    /// Identity of this VM, used as the error registry key.
    fn handle(&self) -> VmHandle;

    /// Name of the runtime type stored at `index`, if it can be resolved.
    fn type_name_at(&self, index: isize) -> Option<Cow<'_, str>>;

    /// Raise `message` through the interpreter's own error channel.
    fn raise_error(&mut self, message: &str);

    /// The last error the interpreter recorded, if any.
    fn last_error(&self) -> Option<String>;
}
