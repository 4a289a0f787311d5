//! Deferred configuration values.
//!
//! A [`Deferred`] is either known now or computed when the options are
//! resolved. A [`Property`] is a shared, settable cell holding a `Deferred`,
//! so that one field can be derived from another field's value at resolution
//! time rather than at the time it was configured.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// A value that is resolved lazily.
pub enum Deferred<T> {
    /// No value.
    Absent,
    /// A concrete value supplied up front.
    Immediate(T),
    /// A computation invoked on every resolution. `None` means absent.
    Computed(Rc<dyn Fn() -> Option<T>>),
}

impl<T: 'static> Deferred<T> {
    /// Defer a computation that always yields a value.
    pub fn computed(f: impl Fn() -> T + 'static) -> Self {
        Deferred::Computed(Rc::new(move || Some(f())))
    }

    /// Defer a computation that may yield no value.
    pub fn computed_opt(f: impl Fn() -> Option<T> + 'static) -> Self {
        Deferred::Computed(Rc::new(f))
    }
}

impl<T> Deferred<T> {
    /// Whether this is statically known to be absent.
    pub fn is_absent(&self) -> bool {
        matches!(self, Deferred::Absent)
    }
}

impl<T: Clone> Deferred<T> {
    /// Resolve to the current value.
    ///
    /// Computations run depth-first through whatever they read; cycles
    /// between computations are not detected.
    pub fn resolve(&self) -> Option<T> {
        match self {
            Deferred::Absent => None,
            Deferred::Immediate(value) => Some(value.clone()),
            Deferred::Computed(f) => f(),
        }
    }

    /// Resolve, falling back to `default` when absent.
    pub fn resolve_or(&self, default: T) -> T {
        self.resolve().unwrap_or(default)
    }
}

impl<T: Clone + 'static> Deferred<T> {
    /// Derive a new deferred value. `f` runs at resolution time.
    pub fn map<U: 'static>(self, f: impl Fn(T) -> U + 'static) -> Deferred<U> {
        match self {
            Deferred::Absent => Deferred::Absent,
            source => Deferred::computed_opt(move || source.resolve().map(&f)),
        }
    }
}

impl<T: Clone> Clone for Deferred<T> {
    fn clone(&self) -> Self {
        match self {
            Deferred::Absent => Deferred::Absent,
            Deferred::Immediate(value) => Deferred::Immediate(value.clone()),
            Deferred::Computed(f) => Deferred::Computed(Rc::clone(f)),
        }
    }
}

impl<T> Default for Deferred<T> {
    fn default() -> Self {
        Deferred::Absent
    }
}

impl<T> From<T> for Deferred<T> {
    fn from(value: T) -> Self {
        Deferred::Immediate(value)
    }
}

impl From<&str> for Deferred<String> {
    fn from(value: &str) -> Self {
        Deferred::Immediate(value.to_string())
    }
}

impl<T: fmt::Debug> fmt::Debug for Deferred<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Deferred::Absent => write!(f, "Absent"),
            Deferred::Immediate(value) => f.debug_tuple("Immediate").field(value).finish(),
            Deferred::Computed(_) => write!(f, "Computed(..)"),
        }
    }
}

/// A shared, settable deferred cell.
///
/// Clones share the same cell: setting through one handle is observed by
/// every other handle and by every [`Property::provider`] taken earlier.
pub struct Property<T> {
    cell: Rc<RefCell<Deferred<T>>>,
}

impl<T> Property<T> {
    /// A property with no value.
    pub fn absent() -> Self {
        Self::from_deferred(Deferred::Absent)
    }

    /// A property holding `value` until set otherwise.
    pub fn with_value(value: T) -> Self {
        Self::from_deferred(Deferred::Immediate(value))
    }

    fn from_deferred(deferred: Deferred<T>) -> Self {
        Self {
            cell: Rc::new(RefCell::new(deferred)),
        }
    }

    /// Set a concrete value.
    pub fn set(&self, value: T) {
        *self.cell.borrow_mut() = Deferred::Immediate(value);
    }

    /// Replace the held deferred value.
    pub fn set_deferred(&self, deferred: impl Into<Deferred<T>>) {
        *self.cell.borrow_mut() = deferred.into();
    }

    /// Remove any value.
    pub fn clear(&self) {
        *self.cell.borrow_mut() = Deferred::Absent;
    }
}

impl<T: Clone> Property<T> {
    /// Resolve the current value.
    pub fn get(&self) -> Option<T> {
        self.cell.borrow().resolve()
    }

    /// Resolve, falling back to `default` when absent.
    pub fn get_or(&self, default: T) -> T {
        self.get().unwrap_or(default)
    }
}

impl<T: 'static> Property<T> {
    /// Set a computation evaluated at resolution time.
    pub fn set_with(&self, f: impl Fn() -> T + 'static) {
        *self.cell.borrow_mut() = Deferred::computed(f);
    }
}

impl<T: Clone + 'static> Property<T> {
    /// A read-through handle that resolves whatever this property holds at
    /// resolution time.
    pub fn provider(&self) -> Deferred<T> {
        let cell = Rc::clone(&self.cell);
        Deferred::computed_opt(move || cell.borrow().resolve())
    }

    /// Derive a deferred value from this property.
    pub fn map<U: 'static>(&self, f: impl Fn(T) -> U + 'static) -> Deferred<U> {
        self.provider().map(f)
    }
}

impl<T> Clone for Property<T> {
    fn clone(&self) -> Self {
        Self {
            cell: Rc::clone(&self.cell),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Property<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Property").field(&*self.cell.borrow()).finish()
    }
}
