//! Controlled / uncontrolled values
//!
//! A `ControllableState` either owns its value (`Owned`) or mirrors a value
//! owned elsewhere (`External`). Either way the change handler only fires
//! when a new value differs from the current one.

use super::types::ChangeHandler;

/// Where the current value lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueSource<T> {
    /// Value is stored locally and updated by `set`
    Owned(T),
    /// Value belongs to the owner; `set` only requests a change
    External(T),
}

impl<T> ValueSource<T> {
    fn get(&self) -> &T {
        match self {
            Self::Owned(value) | Self::External(value) => value,
        }
    }
}

/// A value that is either locally owned or supplied by its owner
#[derive(Debug, Clone)]
pub struct ControllableState<T, H> {
    source: ValueSource<T>,
    on_change: Option<H>,
}

impl<T: PartialEq> ControllableState<T, fn(&T)> {
    /// Locally owned value starting at `default`, with no handler
    pub fn owned(default: T) -> Self {
        Self {
            source: ValueSource::Owned(default),
            on_change: None,
        }
    }

    /// Externally owned value, with no handler
    pub fn external(value: T) -> Self {
        Self {
            source: ValueSource::External(value),
            on_change: None,
        }
    }
}

impl<T: PartialEq, H: ChangeHandler<T>> ControllableState<T, H> {
    /// Locally owned value that reports changes to `handler`
    pub fn owned_with_handler(default: T, handler: H) -> Self {
        Self {
            source: ValueSource::Owned(default),
            on_change: Some(handler),
        }
    }

    /// Externally owned value that forwards change requests to `handler`
    pub fn external_with_handler(value: T, handler: H) -> Self {
        Self {
            source: ValueSource::External(value),
            on_change: Some(handler),
        }
    }

    /// Current value
    pub fn value(&self) -> &T {
        self.source.get()
    }

    /// Where the value lives
    pub fn source(&self) -> &ValueSource<T> {
        &self.source
    }

    /// Whether the value belongs to the owner
    pub fn is_controlled(&self) -> bool {
        matches!(self.source, ValueSource::External(_))
    }

    /// Request `next` as the new value
    ///
    /// Owned values are replaced. External values are left alone until the
    /// owner calls `sync`. Returns whether the handler was notified.
    pub fn set(&mut self, next: T) -> bool {
        if *self.value() == next {
            return false;
        }

        if let Some(handler) = self.on_change.as_mut() {
            handler.on_change(&next);
        }
        if let ValueSource::Owned(value) = &mut self.source {
            *value = next;
        }
        true
    }

    /// Compute the next value from the current one, then `set` it
    pub fn update(&mut self, f: impl FnOnce(&T) -> T) -> bool {
        let next = f(self.value());
        self.set(next)
    }

    /// Re-supply the owner's current value
    ///
    /// Only meaningful for `External` values; an owned value is unaffected.
    /// Syncing never notifies the handler.
    pub fn sync(&mut self, value: T) {
        if let ValueSource::External(current) = &mut self.source {
            *current = value;
        }
    }

    /// Consume the state, returning the current value
    pub fn into_value(self) -> T {
        match self.source {
            ValueSource::Owned(value) | ValueSource::External(value) => value,
        }
    }
}
