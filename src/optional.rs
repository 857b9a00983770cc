use core::ops::{Deref, DerefMut};

use crate::error::BadOptionalAccess;

pub mod cmp;

/// The empty marker
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NullOpt;
pub const NULLOPT: NullOpt = NullOpt;

/// Selects in-place construction of the contained value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InPlace;
pub const IN_PLACE: InPlace = InPlace;

/// A value that may or may not be present
///
/// The value is stored inline. Dropping the [`Optional`] drops the contained value if any.
///
/// Checked access goes through the `value` family and reports [`BadOptionalAccess`].
/// Dereferencing an absent instance is a contract violation and panics.
#[derive(Debug, Copy, Hash)]
pub struct Optional<T> {
    o: Option<T>,
}
impl<T> Optional<T> {
    #[must_use]
    pub const fn new() -> Self {
        Self { o: None }
    }
    #[must_use]
    pub const fn from_null(_: NullOpt) -> Self {
        Self::new()
    }
    #[must_use]
    pub const fn some(value: T) -> Self {
        Self { o: Some(value) }
    }

    /// Constructs the value from `args`
    ///
    /// Pass multiple arguments as a tuple.
    #[must_use]
    pub fn in_place<A>(_: InPlace, args: A) -> Self
    where
        T: From<A>,
    {
        Self::some(T::from(args))
    }
    #[must_use]
    pub fn in_place_with(_: InPlace, f: impl FnOnce() -> T) -> Self {
        Self::some(f())
    }
    /// Constructs the value from a list followed by the rest of the arguments
    #[must_use]
    pub fn in_place_list<U, A>(_: InPlace, list: impl IntoIterator<Item = U>, args: A) -> Self
    where
        T: From<(Vec<U>, A)>,
    {
        Self::some(T::from((list.into_iter().collect(), args)))
    }
    #[must_use]
    pub fn in_place_iter<U>(_: InPlace, iter: impl IntoIterator<Item = U>) -> Self
    where
        T: FromIterator<U>,
    {
        Self::some(iter.into_iter().collect())
    }

    #[must_use]
    pub fn from_other<U: Into<T>>(other: Optional<U>) -> Self {
        Self {
            o: other.o.map(Into::into),
        }
    }
    #[must_use]
    pub fn from_ref_of<U: Clone + Into<T>>(other: &Optional<U>) -> Self {
        Self {
            o: other.o.as_ref().map(|v| v.clone().into()),
        }
    }

    pub fn assign_null(&mut self, _: NullOpt) {
        self.reset();
    }
    /// Assigns into the contained value if present, otherwise constructs it
    pub fn assign<U: Into<T>>(&mut self, value: U) {
        let value = value.into();
        if let Some(v) = self.o.as_mut() {
            *v = value;
        } else {
            self.o = Some(value);
        }
    }
    pub fn assign_from<U: Into<T>>(&mut self, other: Optional<U>) {
        match other.o {
            Some(v) => self.assign(v),
            None => self.reset(),
        }
    }
    pub fn assign_from_ref_of<U: Clone + Into<T>>(&mut self, other: &Optional<U>) {
        match &other.o {
            Some(v) => self.assign(v.clone()),
            None => self.reset(),
        }
    }

    /// Drops the old value before constructing the new one from `args`
    pub fn emplace<A>(&mut self, args: A) -> &mut T
    where
        T: From<A>,
    {
        self.emplace_with(|| T::from(args))
    }
    pub fn emplace_with(&mut self, f: impl FnOnce() -> T) -> &mut T {
        self.o = None;
        self.o.insert(f())
    }
    pub fn emplace_list<U, A>(&mut self, list: impl IntoIterator<Item = U>, args: A) -> &mut T
    where
        T: From<(Vec<U>, A)>,
    {
        self.emplace_with(|| T::from((list.into_iter().collect(), args)))
    }
    pub fn emplace_iter<U>(&mut self, iter: impl IntoIterator<Item = U>) -> &mut T
    where
        T: FromIterator<U>,
    {
        self.emplace_with(|| iter.into_iter().collect())
    }

    pub fn reset(&mut self) {
        self.o = None;
    }
    pub fn swap(&mut self, other: &mut Self) {
        core::mem::swap(&mut self.o, &mut other.o);
    }
    #[must_use]
    pub fn take(&mut self) -> Self {
        Self { o: self.o.take() }
    }
    #[must_use]
    pub fn replace(&mut self, value: T) -> Self {
        Self {
            o: self.o.replace(value),
        }
    }

    #[must_use]
    pub const fn has_value(&self) -> bool {
        self.o.is_some()
    }
    pub fn value(&self) -> Result<&T, BadOptionalAccess> {
        self.o.as_ref().ok_or(BadOptionalAccess)
    }
    pub fn value_mut(&mut self) -> Result<&mut T, BadOptionalAccess> {
        self.o.as_mut().ok_or(BadOptionalAccess)
    }
    pub fn into_value(self) -> Result<T, BadOptionalAccess> {
        self.o.ok_or(BadOptionalAccess)
    }
    pub fn cloned_value(&self) -> Result<T, BadOptionalAccess>
    where
        T: Clone,
    {
        self.value().cloned()
    }
    #[must_use]
    pub fn value_or<U: Into<T>>(self, default: U) -> T {
        match self.o {
            Some(v) => v,
            None => default.into(),
        }
    }
    #[must_use]
    pub fn value_or_cloned<U: Into<T>>(&self, default: U) -> T
    where
        T: Clone,
    {
        match &self.o {
            Some(v) => v.clone(),
            None => default.into(),
        }
    }

    /// # Safety
    ///
    /// `self` must hold a value
    #[must_use]
    pub unsafe fn get_unchecked(&self) -> &T {
        debug_assert!(self.has_value());
        unsafe { self.o.as_ref().unwrap_unchecked() }
    }
    /// # Safety
    ///
    /// `self` must hold a value
    #[must_use]
    pub unsafe fn get_unchecked_mut(&mut self) -> &mut T {
        debug_assert!(self.has_value());
        unsafe { self.o.as_mut().unwrap_unchecked() }
    }
    /// # Safety
    ///
    /// `self` must hold a value
    #[must_use]
    pub unsafe fn into_inner_unchecked(self) -> T {
        debug_assert!(self.has_value());
        unsafe { self.o.unwrap_unchecked() }
    }

    #[must_use]
    pub const fn as_option(&self) -> &Option<T> {
        &self.o
    }
    #[must_use]
    pub fn as_mut_option(&mut self) -> &mut Option<T> {
        &mut self.o
    }
}
impl<T> Default for Optional<T> {
    fn default() -> Self {
        Self::new()
    }
}
impl<T: Clone> Clone for Optional<T> {
    fn clone(&self) -> Self {
        Self { o: self.o.clone() }
    }
    fn clone_from(&mut self, source: &Self) {
        self.o.clone_from(&source.o);
    }
}

/// # Panics
///
/// If `self` holds no value
impl<T> Deref for Optional<T> {
    type Target = T;

    #[track_caller]
    fn deref(&self) -> &Self::Target {
        match &self.o {
            Some(v) => v,
            None => panic!("{}", BadOptionalAccess),
        }
    }
}
/// # Panics
///
/// If `self` holds no value
impl<T> DerefMut for Optional<T> {
    #[track_caller]
    fn deref_mut(&mut self) -> &mut Self::Target {
        match &mut self.o {
            Some(v) => v,
            None => panic!("{}", BadOptionalAccess),
        }
    }
}

impl<T> From<T> for Optional<T> {
    fn from(value: T) -> Self {
        Self::some(value)
    }
}
impl<T> From<Option<T>> for Optional<T> {
    fn from(o: Option<T>) -> Self {
        Self { o }
    }
}
impl<T> From<Optional<T>> for Option<T> {
    fn from(value: Optional<T>) -> Self {
        value.o
    }
}
impl<T> From<&Optional<T>> for bool {
    fn from(value: &Optional<T>) -> Self {
        value.has_value()
    }
}

pub fn swap<T>(lhs: &mut Optional<T>, rhs: &mut Optional<T>) {
    lhs.swap(rhs);
}

#[must_use]
pub fn make_optional<T>(value: T) -> Optional<T> {
    Optional::some(value)
}
#[must_use]
pub fn make_optional_in_place<T, A>(args: A) -> Optional<T>
where
    T: From<A>,
{
    Optional::in_place(IN_PLACE, args)
}
#[must_use]
pub fn make_optional_list<T, U, A>(list: impl IntoIterator<Item = U>, args: A) -> Optional<T>
where
    T: From<(Vec<U>, A)>,
{
    Optional::in_place_list(IN_PLACE, list, args)
}
