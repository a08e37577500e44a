//! In-memory VM used by unit tests.

use std::borrow::Cow;

use crate::vm::{ScriptVm, VmHandle};

#[derive(Debug)]
pub struct TestVm {
    handle: VmHandle,
    stack: Vec<&'static str>,
    pub raised: Vec<String>,
}

impl TestVm {
    pub fn new(id: usize) -> Self {
        Self {
            handle: VmHandle::from_raw(id).unwrap(),
            stack: Vec::new(),
            raised: Vec::new(),
        }
    }

    /// Type names of the values on the stack, bottom first.
    pub fn with_stack(mut self, types: &[&'static str]) -> Self {
        self.stack = types.to_vec();
        self
    }
}

impl ScriptVm for TestVm {
    fn handle(&self) -> VmHandle {
        self.handle
    }

    fn type_name_at(&self, index: isize) -> Option<Cow<'_, str>> {
        let slot = if index < 0 {
            self.stack.len().checked_sub(index.unsigned_abs())?
        } else {
            usize::try_from(index).ok()?.checked_sub(1)?
        };
        self.stack.get(slot).map(|name| Cow::Borrowed(*name))
    }

    fn raise_error(&mut self, message: &str) {
        self.raised.push(message.to_string());
    }

    fn last_error(&self) -> Option<String> {
        self.raised.last().cloned()
    }
}
