//! Move-vs-copy value passing.
//!
//! [`IntoValue`] lets a single construction or assignment entry point
//! accept either an owned value or a shared reference, and pick the right
//! transfer for each: an owned argument will not be reused, so it is
//! moved; a borrowed argument must stay usable at the call site, so it is
//! cloned. The choice is made from the impl that applies — there is no
//! runtime dispatch and nothing here can fail.

/// A source that can supply a value of type `T`.
///
/// Implemented for `T` itself (the value is moved) and for `&T` when `T`
/// is [`Clone`] (the value is cloned). Because those are the only impls,
/// a bound of `impl IntoValue<T>` participates exactly for the held type —
/// a value of some merely convertible type cannot slip in through this
/// path.
pub trait IntoValue<T>: Sized {
    /// Produce an owned `T`, for constructing into empty storage.
    fn into_value(self) -> T;

    /// Assign over an existing `T` in place, for storage that already
    /// holds a value.
    fn assign_value(self, target: &mut T);
}

impl<T> IntoValue<T> for T {
    fn into_value(self) -> T {
        self
    }

    fn assign_value(self, target: &mut T) {
        *target = self;
    }
}

impl<T: Clone> IntoValue<T> for &T {
    fn into_value(self) -> T {
        self.clone()
    }

    fn assign_value(self, target: &mut T) {
        target.clone_from(self);
    }
}
