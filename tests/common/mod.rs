//! Mock interpreter shared by the integration tests.

#![allow(dead_code)]

use std::borrow::Cow;

use sqbind::{ScriptVm, VmHandle};

/// A value on the mock VM's stack.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Integer(i64),
    Float(f64),
    String(String),
    Table,
}

impl Value {
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Integer(_) => "integer",
            Value::Float(_) => "float",
            Value::String(_) => "string",
            Value::Table => "table",
        }
    }
}

/// Stack-based VM with a native error channel that just collects messages.
#[derive(Debug)]
pub struct MockVm {
    handle: VmHandle,
    pub stack: Vec<Value>,
    pub raised: Vec<String>,
}

impl MockVm {
    pub fn new(id: usize) -> Self {
        Self {
            handle: VmHandle::from_raw(id).expect("non-zero id"),
            stack: Vec::new(),
            raised: Vec::new(),
        }
    }

    pub fn push(&mut self, value: Value) -> &mut Self {
        self.stack.push(value);
        self
    }

    fn slot(&self, index: isize) -> Option<&Value> {
        let slot = if index < 0 {
            self.stack.len().checked_sub(index.unsigned_abs())?
        } else {
            usize::try_from(index).ok()?.checked_sub(1)?
        };
        self.stack.get(slot)
    }

    pub fn string_at(&self, index: isize) -> Option<&str> {
        match self.slot(index)? {
            Value::String(s) => Some(s),
            _ => None,
        }
    }
}

impl ScriptVm for MockVm {
    fn handle(&self) -> VmHandle {
        self.handle
    }

    fn type_name_at(&self, index: isize) -> Option<Cow<'_, str>> {
        self.slot(index).map(|value| Cow::Borrowed(value.type_name()))
    }

    fn raise_error(&mut self, message: &str) {
        self.raised.push(message.to_string());
    }

    fn last_error(&self) -> Option<String> {
        self.raised.last().cloned()
    }
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("sqbind=trace,sqbind_core=trace")
        .with_test_writer()
        .try_init();
}
