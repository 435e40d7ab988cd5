//! Compile-time type predicates.
//!
//! This module answers type-relationship questions (same type,
//! convertibility, numeric/pointer/enum classification, subtype
//! relationships) as traits meant to be consumed as generic bounds. Every
//! query resolves statically; nothing here has runtime state or a failure
//! mode. The container uses these bounds to decide which construction and
//! assignment paths participate for a given source type.

/// Same-type relationship.
///
/// `A: SameAs<B>` holds exactly when `A` and `B` are the same type. Useful
/// for pinning two independent type parameters to each other in a bound
/// list.
pub trait SameAs<T: ?Sized> {}

impl<T: ?Sized> SameAs<T> for T {}

/// Convertibility relationship, carrying the conversion itself.
///
/// `U: ConvertibleTo<T>` holds when a `U` can be turned into a `T`. This is
/// a blanket over [`Into`], so any `From`/`Into` pair participates. The
/// container's converting construction and assignment are bounded on this
/// trait.
pub trait ConvertibleTo<T> {
    /// Perform the conversion.
    fn convert(self) -> T;
}

impl<T, U: Into<T>> ConvertibleTo<T> for U {
    fn convert(self) -> T {
        self.into()
    }
}

/// Arithmetic types: the primitive integer and floating-point types.
pub trait Arithmetic: Copy {}

/// Integral types: the primitive integer types.
pub trait Integral: Arithmetic {}

/// Floating-point types: `f32` and `f64`.
pub trait FloatingPoint: Arithmetic {}

/// Unsigned integral types.
pub trait Unsigned: Integral {}

impl Arithmetic for i8 {}
impl Arithmetic for i16 {}
impl Arithmetic for i32 {}
impl Arithmetic for i64 {}
impl Arithmetic for i128 {}
impl Arithmetic for isize {}
impl Arithmetic for u8 {}
impl Arithmetic for u16 {}
impl Arithmetic for u32 {}
impl Arithmetic for u64 {}
impl Arithmetic for u128 {}
impl Arithmetic for usize {}
impl Arithmetic for f32 {}
impl Arithmetic for f64 {}

impl Integral for i8 {}
impl Integral for i16 {}
impl Integral for i32 {}
impl Integral for i64 {}
impl Integral for i128 {}
impl Integral for isize {}
impl Integral for u8 {}
impl Integral for u16 {}
impl Integral for u32 {}
impl Integral for u64 {}
impl Integral for u128 {}
impl Integral for usize {}

impl FloatingPoint for f32 {}
impl FloatingPoint for f64 {}

impl Unsigned for u8 {}
impl Unsigned for u16 {}
impl Unsigned for u32 {}
impl Unsigned for u64 {}
impl Unsigned for u128 {}
impl Unsigned for usize {}

/// Raw-pointer classification with pointee extraction.
///
/// Implemented for `*const T` and `*mut T`; `Pointee` names the
/// pointed-to type.
pub trait Pointer {
    /// The pointed-to type.
    type Pointee: ?Sized;
}

impl<T: ?Sized> Pointer for *const T {
    type Pointee = T;
}

impl<T: ?Sized> Pointer for *mut T {
    type Pointee = T;
}

/// Enum classification with underlying-type extraction.
///
/// Opt-in per enum: implementing types name their discriminant type and
/// expose the discriminant of a value. Rust offers no blanket way to
/// detect "is an enum", so this is the declared-membership form of that
/// query.
///
/// # Example
/// ```
/// use optslot::traits::Enumeration;
///
/// #[derive(Clone, Copy)]
/// enum TrackKind {
///     Video = 0,
///     Audio = 1,
/// }
///
/// impl Enumeration for TrackKind {
///     type Repr = u32;
///     fn repr(self) -> u32 {
///         self as u32
///     }
/// }
///
/// assert_eq!(TrackKind::Audio.repr(), 1);
/// ```
pub trait Enumeration: Copy {
    /// The underlying discriminant type.
    type Repr: Integral;

    /// The discriminant of this value.
    fn repr(self) -> Self::Repr;
}

/// Subtype relationship: `D: SubtypeOf<B>` when a `D` can be viewed as a
/// `B`. Blanket over [`AsRef`], the upcast seam Rust uses in place of
/// inheritance.
pub trait SubtypeOf<Base: ?Sized> {
    /// View this value as the base type.
    fn upcast(&self) -> &Base;
}

impl<Base: ?Sized, T: AsRef<Base> + ?Sized> SubtypeOf<Base> for T {
    fn upcast(&self) -> &Base {
        self.as_ref()
    }
}
