//! Diagnostic text built from interpreter state.

use crate::vm::ScriptVm;

/// Describe an argument of the wrong type.
///
/// Looks up the runtime type of the value at `index` on `vm`'s stack. The
/// result is `"wrong type (<expected> expected, got <actual>)"`, with
/// `unknown` standing in for a type that cannot be resolved. Nothing is
/// recorded; pass the text to [`ErrorRegistry::throw`](crate::ErrorRegistry::throw)
/// or [`BindingState::report`](crate::BindingState::report).
pub fn format_type_error<V>(vm: &V, index: isize, expected: &str) -> String
where
    V: ScriptVm + ?Sized,
{
    match vm.type_name_at(index) {
        Some(actual) => format!("wrong type ({expected} expected, got {actual})"),
        None => format!("wrong type ({expected} expected, got unknown)"),
    }
}

/// The interpreter's last error as text, or an empty string if it has none.
pub fn last_error_string<V>(vm: &V) -> String
where
    V: ScriptVm + ?Sized,
{
    vm.last_error().unwrap_or_default()
}
