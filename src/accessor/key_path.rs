//! Accessors as values.
//!
//! A `KeyPath` is a plain function pointer, so it is `Copy`, carries no
//! captured state, and resolves without any runtime lookup.

use core::fmt;

/// Read-only path from `Root` to a `Value` it owns.
pub struct KeyPath<Root: ?Sized, Value: ?Sized> {
    get: fn(&Root) -> &Value,
}

impl<Root: ?Sized, Value: ?Sized> KeyPath<Root, Value> {
    pub const fn new(get: fn(&Root) -> &Value) -> Self {
        Self { get }
    }

    #[inline]
    pub fn get<'a>(&self, root: &'a Root) -> &'a Value {
        (self.get)(root)
    }
}

// Manual impls: derives would demand Root: Clone and Value: Clone.
impl<Root: ?Sized, Value: ?Sized> Clone for KeyPath<Root, Value> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<Root: ?Sized, Value: ?Sized> Copy for KeyPath<Root, Value> {}

impl<Root: ?Sized, Value: ?Sized> fmt::Debug for KeyPath<Root, Value> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "KeyPath<{}, {}>",
            core::any::type_name::<Root>(),
            core::any::type_name::<Value>()
        )
    }
}

/// Read-write path from `Root` to a `Value` it owns.
pub struct WritableKeyPath<Root: ?Sized, Value: ?Sized> {
    get: fn(&Root) -> &Value,
    get_mut: fn(&mut Root) -> &mut Value,
}

impl<Root: ?Sized, Value: ?Sized> WritableKeyPath<Root, Value> {
    pub const fn new(get: fn(&Root) -> &Value, get_mut: fn(&mut Root) -> &mut Value) -> Self {
        Self { get, get_mut }
    }

    #[inline]
    pub fn get<'a>(&self, root: &'a Root) -> &'a Value {
        (self.get)(root)
    }

    #[inline]
    pub fn get_mut<'a>(&self, root: &'a mut Root) -> &'a mut Value {
        (self.get_mut)(root)
    }

    /// Store `value` at the end of the path, returning what was there.
    pub fn set(&self, root: &mut Root, value: Value) -> Value
    where
        Value: Sized,
    {
        core::mem::replace(self.get_mut(root), value)
    }

    /// Forget the write half. The result reads exactly what `self` reads.
    pub const fn readable(self) -> KeyPath<Root, Value> {
        KeyPath::new(self.get)
    }
}

impl<Root: ?Sized, Value: ?Sized> Clone for WritableKeyPath<Root, Value> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<Root: ?Sized, Value: ?Sized> Copy for WritableKeyPath<Root, Value> {}

impl<Root: ?Sized, Value: ?Sized> fmt::Debug for WritableKeyPath<Root, Value> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "WritableKeyPath<{}, {}>",
            core::any::type_name::<Root>(),
            core::any::type_name::<Value>()
        )
    }
}

impl<Root: ?Sized, Value: ?Sized> From<WritableKeyPath<Root, Value>> for KeyPath<Root, Value> {
    fn from(path: WritableKeyPath<Root, Value>) -> Self {
        path.readable()
    }
}
