//! The nullable value container.
//!
//! [`Optional<T>`] holds zero or one `T` in an inline slot: a presence
//! flag plus a `MaybeUninit<T>` sized and aligned for exactly one value.
//! No heap allocation is performed by the container itself. The slot
//! contains a live `T` if and only if the flag is set; every mutating
//! operation goes through the private construct/destroy/extract
//! primitives so that each constructed value is destroyed exactly once.
//!
//! The container is a plain value type: it is `Send`/`Sync` exactly when
//! `T` is, and concurrent mutation requires external synchronization.

use std::borrow::Borrow;
use std::fmt;
use std::mem::MaybeUninit;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Error, Result};
use crate::forward::IntoValue;
use crate::traits::ConvertibleTo;

/// Marker for an absent value.
///
/// Usable anywhere a "no value" token is needed in comparisons. The
/// marker compares from the left:
///
/// ```
/// use optslot::{Optional, NULL};
///
/// let empty: Optional<u32> = Optional::empty();
/// assert!(NULL == empty);
/// assert!(NULL != Optional::of(5));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Null;

/// Process-wide null marker constant. Immutable, no teardown.
pub const NULL: Null = Null;

/// A value that may or may not be present, stored inline.
///
/// Construction never fails and accessors report absence through
/// [`Error::NoValue`], the container's only failure mode. Fields that are
/// legitimately absent (a track language, a timeline offset) are stored in
/// an `Optional` and checked for presence — or read through [`get_or`] —
/// before use.
///
/// # Examples
///
/// ```
/// use optslot::{Error, Optional};
///
/// let mut language: Optional<String> = Optional::empty();
/// assert_eq!(language.get(), Err(Error::NoValue));
///
/// language.set("eng".to_string());
/// assert_eq!(language.get().unwrap(), "eng");
///
/// language.reset();
/// assert!(!language.has_value());
/// ```
///
/// [`get_or`]: Optional::get_or
pub struct Optional<T> {
    present: bool,
    slot: MaybeUninit<T>,
}

impl<T> Optional<T> {
    /// Create an empty container.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            present: false,
            slot: MaybeUninit::uninit(),
        }
    }

    /// Create a container holding `value`.
    ///
    /// Accepts the held type itself (moved in) or a shared reference to it
    /// (cloned in); see [`IntoValue`]. Values of other types go through the
    /// converting path, [`from_converted`].
    ///
    /// [`from_converted`]: Optional::from_converted
    #[must_use]
    pub fn of(value: impl IntoValue<T>) -> Self {
        Self {
            present: true,
            slot: MaybeUninit::new(value.into_value()),
        }
    }

    /// Create a holding container, constructing the value directly in the
    /// slot from a producer.
    ///
    /// If `init` panics, no container exists yet and nothing is dropped.
    #[must_use]
    pub fn with(init: impl FnOnce() -> T) -> Self {
        Self {
            present: true,
            slot: MaybeUninit::new(init()),
        }
    }

    /// Create a container from a container of a convertible held type.
    ///
    /// An empty source produces an empty container; a holding source
    /// produces a container holding the converted value.
    ///
    /// ```
    /// use optslot::Optional;
    ///
    /// let narrow = Optional::of(90_u32);
    /// let wide: Optional<u64> = Optional::from_converted(narrow);
    /// assert_eq!(wide, Optional::of(90_u64));
    /// ```
    pub fn from_converted<U: ConvertibleTo<T>>(other: Optional<U>) -> Self {
        match other.into_option() {
            Some(value) => Self::from(value.convert()),
            None => Self::empty(),
        }
    }

    /// True if a value is currently held.
    pub const fn has_value(&self) -> bool {
        self.present
    }

    /// True if no value is currently held. Complement of [`has_value`].
    ///
    /// [`has_value`]: Optional::has_value
    pub const fn is_empty(&self) -> bool {
        !self.present
    }

    /// Borrow the held value, or fail with [`Error::NoValue`] when empty.
    pub fn get(&self) -> Result<&T> {
        self.as_option().ok_or(Error::NoValue)
    }

    /// Mutably borrow the held value, or fail with [`Error::NoValue`] when
    /// empty.
    pub fn get_mut(&mut self) -> Result<&mut T> {
        self.as_option_mut().ok_or(Error::NoValue)
    }

    /// Consume the container and return the held value, or fail with
    /// [`Error::NoValue`] when empty.
    pub fn into_inner(mut self) -> Result<T> {
        if self.present {
            Ok(self.extract())
        } else {
            Err(Error::NoValue)
        }
    }

    /// Borrow the held value, or `default` when empty.
    ///
    /// The default is passed and returned by reference; it is never
    /// copied.
    ///
    /// ```
    /// use optslot::Optional;
    ///
    /// let offset: Optional<i64> = Optional::empty();
    /// assert_eq!(*offset.get_or(&0), 0);
    /// assert_eq!(*Optional::of(90_i64).get_or(&0), 90);
    /// ```
    pub fn get_or<'a>(&'a self, default: &'a T) -> &'a T {
        self.as_option().unwrap_or(default)
    }

    /// Mutably borrow the held value, or `default` when empty.
    pub fn get_or_mut<'a>(&'a mut self, default: &'a mut T) -> &'a mut T {
        self.as_option_mut().unwrap_or(default)
    }

    /// Borrow the held value as a standard [`Option`].
    pub fn as_option(&self) -> Option<&T> {
        if self.present {
            // SAFETY: present is true, so the slot holds a live T.
            Some(unsafe { self.slot.assume_init_ref() })
        } else {
            None
        }
    }

    /// Mutably borrow the held value as a standard [`Option`].
    pub fn as_option_mut(&mut self) -> Option<&mut T> {
        if self.present {
            // SAFETY: present is true, so the slot holds a live T.
            Some(unsafe { self.slot.assume_init_mut() })
        } else {
            None
        }
    }

    /// Consume the container into a standard [`Option`].
    pub fn into_option(mut self) -> Option<T> {
        if self.present {
            Some(self.extract())
        } else {
            None
        }
    }

    /// Assign a value.
    ///
    /// When already holding, the held value is assigned over in place
    /// using the held type's own assignment path; no destroy/reconstruct
    /// happens. When empty, the value is constructed into the slot.
    pub fn set(&mut self, value: impl IntoValue<T>) {
        if self.present {
            // SAFETY: present is true, so the slot holds a live T.
            value.assign_value(unsafe { self.slot.assume_init_mut() });
        } else {
            self.construct(value.into_value());
        }
    }

    /// Assign from a container of a convertible held type.
    ///
    /// The holding branch always destroys any held value and constructs
    /// from the converted one; a cross-type value-level assignment is
    /// never attempted. An empty source clears this container.
    pub fn set_converted<U: ConvertibleTo<T>>(&mut self, other: Optional<U>) {
        match other.into_option() {
            Some(value) => {
                self.insert(value.convert());
            }
            None => self.reset(),
        }
    }

    /// Destroy any held value, construct `value` in the slot, and return a
    /// mutable borrow of it.
    pub fn insert(&mut self, value: T) -> &mut T {
        self.reset();
        self.construct(value);
        // SAFETY: construct set the presence flag and filled the slot.
        unsafe { self.slot.assume_init_mut() }
    }

    /// Construct `value` in the slot and return the previous contents.
    pub fn replace(&mut self, value: T) -> Optional<T> {
        std::mem::replace(self, Optional::of(value))
    }

    /// Move the contents out, leaving this container empty.
    ///
    /// ```
    /// use optslot::Optional;
    ///
    /// let mut source = Optional::of(5);
    /// let moved = source.take();
    /// assert_eq!(moved, Optional::of(5));
    /// assert!(source.is_empty());
    /// ```
    pub fn take(&mut self) -> Optional<T> {
        std::mem::replace(self, Optional::empty())
    }

    /// Destroy any held value and become empty. Equivalent to assigning
    /// the null marker.
    pub fn reset(&mut self) {
        if self.present {
            self.destroy();
        }
    }

    /// Transform the held value, preserving absence.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Optional<U> {
        match self.into_option() {
            Some(value) => Optional::of(f(value)),
            None => Optional::empty(),
        }
    }

    /// Construct `value` into the empty slot. The only place the slot is
    /// written.
    fn construct(&mut self, value: T) {
        debug_assert!(!self.present);
        self.slot.write(value);
        self.present = true;
    }

    /// Destroy the held value. The only place the slot is dropped. The
    /// flag is cleared first so a panicking `Drop` of the held type cannot
    /// leave the container claiming to hold a dead value.
    fn destroy(&mut self) {
        debug_assert!(self.present);
        self.present = false;
        // SAFETY: the flag was set, so the slot holds a live T, and it has
        // been cleared, so the value cannot be dropped again.
        unsafe { self.slot.assume_init_drop() };
    }

    /// Move the held value out. The only place the slot is read by value.
    fn extract(&mut self) -> T {
        debug_assert!(self.present);
        self.present = false;
        // SAFETY: the flag was set, so the slot holds a live T, and it has
        // been cleared, so the value cannot be dropped or read again.
        unsafe { self.slot.assume_init_read() }
    }
}

impl<T> Drop for Optional<T> {
    fn drop(&mut self) {
        self.reset();
    }
}

impl<T> Default for Optional<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: Clone> Clone for Optional<T> {
    fn clone(&self) -> Self {
        match self.as_option() {
            Some(value) => Self::of(value),
            None => Self::empty(),
        }
    }

    /// Container assignment: assign in place when both sides hold a value,
    /// destroy when only this side does, construct when only the source
    /// does, and do nothing when neither does.
    fn clone_from(&mut self, other: &Self) {
        match (self.present, other.present) {
            (true, true) => {
                // SAFETY: both presence flags are set, so both slots hold
                // live values.
                unsafe {
                    self.slot
                        .assume_init_mut()
                        .clone_from(other.slot.assume_init_ref());
                }
            }
            (true, false) => self.destroy(),
            (false, true) => {
                // SAFETY: other's presence flag is set.
                let value = unsafe { other.slot.assume_init_ref() }.clone();
                self.construct(value);
            }
            (false, false) => {}
        }
    }
}

impl<T> From<T> for Optional<T> {
    fn from(value: T) -> Self {
        Self::of(value)
    }
}

impl<T> From<Option<T>> for Optional<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::of(value),
            None => Self::empty(),
        }
    }
}

impl<T> From<Optional<T>> for Option<T> {
    fn from(value: Optional<T>) -> Self {
        value.into_option()
    }
}

impl<T: PartialEq> PartialEq for Optional<T> {
    /// Two containers are equal iff both are empty, or both hold values
    /// that compare equal.
    fn eq(&self, other: &Self) -> bool {
        self.as_option() == other.as_option()
    }
}

impl<T: Eq> Eq for Optional<T> {}

impl<T: PartialEq> PartialEq<T> for Optional<T> {
    /// A container equals a bare value iff it holds an equal value.
    fn eq(&self, other: &T) -> bool {
        self.as_option() == Some(other)
    }
}

impl<T> PartialEq<Optional<T>> for Null {
    /// The null marker equals a container iff the container is empty.
    ///
    /// The marker goes on the left: a mirrored `PartialEq<Null> for
    /// Optional<T>` would conflict with the bare-value comparison at
    /// `T = Null`.
    fn eq(&self, other: &Optional<T>) -> bool {
        !other.present
    }
}

impl<T: fmt::Debug> fmt::Debug for Optional<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_option() {
            Some(value) => f.debug_tuple("Optional").field(value).finish(),
            None => f.write_str("Null"),
        }
    }
}

#[cfg(feature = "serde")]
impl<T: Serialize> Serialize for Optional<T> {
    /// Serializes with the same data model as [`Option`].
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.as_option().serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, T: Deserialize<'de>> Deserialize<'de> for Optional<T> {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(Optional::from)
    }
}

/// Build a holding container from a producer, constructing the value
/// directly in the slot. Equivalent to [`Optional::with`].
pub fn make_optional<T>(init: impl FnOnce() -> T) -> Optional<T> {
    Optional::with(init)
}

/// Report presence of any container-like argument — owned or any borrowed
/// form — without otherwise touching it.
///
/// ```
/// use optslot::{has_value, Optional};
///
/// let held = Optional::of(5);
/// assert!(has_value(&held));
/// assert!(!has_value(Optional::<u32>::empty()));
/// ```
pub fn has_value<T, O: Borrow<Optional<T>>>(opt: O) -> bool {
    opt.borrow().has_value()
}
