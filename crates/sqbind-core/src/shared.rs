//! Reference-counted shared ownership for objects crossing the binding boundary.

use std::any::type_name;
use std::fmt;
use std::ops::Deref;
use std::ptr;
use std::rc::Rc;

/// Handle giving shared ownership of one heap-allocated object.
///
/// Any number of handles may point at the same object. The object is dropped
/// exactly once, when the last handle pointing at it is dropped, reset or
/// reassigned. A handle may also be empty and own nothing.
///
/// The count is not atomic, so `Shared` is neither `Send` nor `Sync`: every
/// handle for a given object stays on the thread that created it.
///
/// # Example
///
/// ```ignore
/// use sqbind_core::Shared;
///
/// let a = Shared::new(String::from("player"));
/// let b = a.clone();
/// assert_eq!(a.use_count(), 2);
/// assert!(a == b);
/// ```
pub struct Shared<T: ?Sized> {
    inner: Option<Rc<T>>,
}

impl<T> Shared<T> {
    /// Allocate `value` and return the first handle to it.
    pub fn new(value: T) -> Self {
        Self {
            inner: Some(Rc::new(value)),
        }
    }
}

impl<T: ?Sized> Shared<T> {
    /// Create a handle that owns nothing.
    pub const fn empty() -> Self {
        Self { inner: None }
    }

    /// Take ownership of an already boxed object.
    ///
    /// A `Box<U>` unsizes to `Box<T>` at the call site, so a concrete type
    /// can be stored straight into a `Shared<dyn Trait>`:
    ///
    /// ```ignore
    /// let shape: Shared<dyn Shape> = Shared::from_box(Box::new(Circle::default()));
    /// ```
    pub fn from_box(value: Box<T>) -> Self {
        Self {
            inner: Some(Rc::from(value)),
        }
    }

    /// Release the current object, then take ownership of `value`.
    pub fn init(&mut self, value: Box<T>) {
        self.reset();
        self.inner = Some(Rc::from(value));
    }

    /// Produce a handle of a related element type sharing this handle's count.
    ///
    /// The conversion sees the underlying `Rc`, so unsizing casts work:
    ///
    /// ```ignore
    /// let circle = Shared::new(Circle::default());
    /// let shape: Shared<dyn Shape> = circle.upcast(|rc| rc as Rc<dyn Shape>);
    /// assert_eq!(circle.use_count(), 2);
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if `convert` returns an `Rc` to a different object.
    pub fn upcast<U: ?Sized>(&self, convert: impl FnOnce(Rc<T>) -> Rc<U>) -> Shared<U> {
        let inner = self.inner.clone().map(|rc| {
            let before = Rc::as_ptr(&rc);
            let converted = convert(rc);
            assert!(
                ptr::addr_eq(before, Rc::as_ptr(&converted)),
                "upcast of Shared<{}> returned a different object",
                type_name::<T>()
            );
            converted
        });
        Shared { inner }
    }

    /// Make this handle share `other`'s object, releasing what it held before.
    ///
    /// When both already point at the same object nothing changes, so the
    /// object is never released only to be reacquired.
    pub fn assign(&mut self, other: &Shared<T>) {
        if self.ptr_eq(other) {
            return;
        }
        self.inner = other.inner.clone();
    }

    /// Release ownership and leave the handle empty.
    ///
    /// Returns true if this was the last handle and the object was dropped.
    pub fn reset(&mut self) -> bool {
        match self.inner.take() {
            Some(rc) => {
                let last = Rc::strong_count(&rc) == 1;
                drop(rc);
                last
            }
            None => false,
        }
    }

    /// Borrow the object, or `None` for an empty handle.
    pub fn get(&self) -> Option<&T> {
        self.inner.as_deref()
    }

    /// Address of the object, or null for an empty handle.
    ///
    /// Ownership is not transferred; the address stays valid only while at
    /// least one handle to the object is alive.
    pub fn as_ptr(&self) -> *const () {
        match &self.inner {
            Some(rc) => Rc::as_ptr(rc).cast(),
            None => ptr::null(),
        }
    }

    /// Whether this handle owns an object.
    pub fn is_some(&self) -> bool {
        self.inner.is_some()
    }

    /// Whether this handle is empty.
    pub fn is_none(&self) -> bool {
        self.inner.is_none()
    }

    /// Number of handles sharing this object, 0 for an empty handle.
    pub fn use_count(&self) -> usize {
        self.inner.as_ref().map_or(0, Rc::strong_count)
    }

    /// Whether both handles point at the same object (or are both empty).
    pub fn ptr_eq<U: ?Sized>(&self, other: &Shared<U>) -> bool {
        self.as_ptr() == other.as_ptr()
    }

    /// Whether this handle points at `ptr`. An empty handle matches null.
    pub fn is_ptr<U: ?Sized>(&self, ptr: *const U) -> bool {
        ptr::addr_eq(self.as_ptr(), ptr)
    }
}

impl<T: ?Sized> Clone for Shared<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.assign(source);
    }
}

impl<T: ?Sized> Default for Shared<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: ?Sized> Deref for Shared<T> {
    type Target = T;

    /// # Panics
    ///
    /// Panics if the handle is empty.
    fn deref(&self) -> &T {
        match &self.inner {
            Some(rc) => &**rc,
            None => panic!("dereferenced an empty Shared<{}>", type_name::<T>()),
        }
    }
}

impl<T: ?Sized> From<Box<T>> for Shared<T> {
    fn from(value: Box<T>) -> Self {
        Self::from_box(value)
    }
}

impl<T: ?Sized> From<Rc<T>> for Shared<T> {
    fn from(value: Rc<T>) -> Self {
        Self { inner: Some(value) }
    }
}

impl<T: ?Sized, U: ?Sized> PartialEq<Shared<U>> for Shared<T> {
    fn eq(&self, other: &Shared<U>) -> bool {
        self.ptr_eq(other)
    }
}

impl<T: ?Sized> Eq for Shared<T> {}

impl<T: ?Sized + fmt::Debug> fmt::Debug for Shared<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.inner {
            Some(rc) => f
                .debug_struct("Shared")
                .field("value", &&**rc)
                .field("use_count", &Rc::strong_count(rc))
                .finish(),
            None => f.write_str("Shared(empty)"),
        }
    }
}
