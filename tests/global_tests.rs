//! The process-wide state. Every test uses its own VM ids because the
//! state is shared by all tests in this binary.

mod common;

use common::{MockVm, Value};
use sqbind::{BindError, ScriptVm, VmHandle, global};

fn vm(id: usize) -> VmHandle {
    VmHandle::from_raw(id).unwrap()
}

#[test]
fn throw_and_drain() {
    let vm = vm(0x100);
    assert!(!global::occurred(vm));
    assert_eq!(global::message(vm), "");

    assert!(global::throw(vm, "a"));
    assert!(!global::throw(vm, "b"));
    assert!(global::occurred(vm));

    assert_eq!(global::message(vm), "a");
    assert!(!global::occurred(vm));
}

#[test]
fn clear_and_check() {
    let vm = vm(0x200);
    global::throw(vm, "gone");
    global::clear(vm);
    assert_eq!(global::check(vm), Ok(()));

    global::throw(vm, "kept");
    assert_eq!(
        global::check(vm),
        Err(BindError::Script {
            message: "kept".into()
        })
    );
}

#[test]
fn report_forwards_to_vm() {
    let mut vm = MockVm::new(0x300);
    vm.push(Value::Null);

    // Error handling is only ever left enabled in this binary.
    assert!(global::report_type_error(&mut vm, 1, "string"));

    assert_eq!(vm.raised, vec!["wrong type (string expected, got null)".to_string()]);
    assert_eq!(
        global::message(vm.handle()),
        "wrong type (string expected, got null)"
    );
}

#[test]
fn default_vm_round_trip_and_close() {
    let vm = vm(0x400);
    global::set_default_vm(vm);
    assert_eq!(global::default_vm(), Some(vm));

    global::throw(vm, "pending");
    assert!(global::check_default().is_err());

    global::throw(vm, "on close");
    assert_eq!(global::close_vm(vm), Some("on close".to_string()));
    assert_ne!(global::default_vm(), Some(vm));
}

#[test]
fn with_state_gives_direct_access() {
    let vm = vm(0x500);
    global::with_state(|state| {
        state.throw(vm, "direct");
        assert!(state.occurred(vm));
    });
    assert_eq!(global::message(vm), "direct");
}

#[test]
fn reentrant_raise_does_not_deadlock() {
    struct ReentrantVm(VmHandle);

    impl ScriptVm for ReentrantVm {
        fn handle(&self) -> VmHandle {
            self.0
        }

        fn type_name_at(&self, _index: isize) -> Option<std::borrow::Cow<'_, str>> {
            None
        }

        fn raise_error(&mut self, _message: &str) {
            assert!(global::occurred(self.0));
        }

        fn last_error(&self) -> Option<String> {
            None
        }
    }

    let mut vm = ReentrantVm(vm(0x600));
    assert!(global::report(&mut vm, "nested"));
    assert_eq!(global::message(vm.0), "nested");
}
