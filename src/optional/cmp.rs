//! Comparisons of [`Optional`] against another [`Optional`], [`NULLOPT`](super::NULLOPT), or a bare value
//!
//! An absent instance equals only another absent instance or the empty marker, and orders
//! before every present value.

use core::cmp::Ordering;

use crate::ops::opt_cmp::{min_none_cmp, min_none_partial_cmp, none_eq};

use super::{NullOpt, Optional};

impl<T> Optional<T> {
    /// `false` if `self` is absent
    #[must_use]
    pub fn eq_value<U>(&self, value: &U) -> bool
    where
        T: PartialEq<U>,
        U: ?Sized,
    {
        none_eq(self.o.as_ref(), Some(value))
    }
    /// [`Ordering::Less`] if `self` is absent
    #[must_use]
    pub fn partial_cmp_value<U>(&self, value: &U) -> Option<Ordering>
    where
        T: PartialOrd<U>,
        U: ?Sized,
    {
        min_none_partial_cmp(self.o.as_ref(), Some(value))
    }
}

/// Comparing against an [`Optional`] whose type is not yet known needs an annotation when
/// `T` is itself an [`Optional`], e.g. `Optional::<Optional<i32>>::new()`
impl<T, U> PartialEq<Optional<U>> for Optional<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Optional<U>) -> bool {
        none_eq(self.o.as_ref(), other.o.as_ref())
    }
}
impl<T: Eq> Eq for Optional<T> {}
impl<T, U> PartialOrd<Optional<U>> for Optional<T>
where
    T: PartialOrd<U>,
{
    fn partial_cmp(&self, other: &Optional<U>) -> Option<Ordering> {
        min_none_partial_cmp(self.o.as_ref(), other.o.as_ref())
    }
}
impl<T: Ord> Ord for Optional<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        min_none_cmp(self.o.as_ref(), other.o.as_ref())
    }
}

impl<T> PartialEq<NullOpt> for Optional<T> {
    fn eq(&self, _: &NullOpt) -> bool {
        !self.has_value()
    }
}
impl<T> PartialEq<Optional<T>> for NullOpt {
    fn eq(&self, other: &Optional<T>) -> bool {
        !other.has_value()
    }
}
impl<T> PartialOrd<NullOpt> for Optional<T> {
    fn partial_cmp(&self, _: &NullOpt) -> Option<Ordering> {
        Some(match self.has_value() {
            true => Ordering::Greater,
            false => Ordering::Equal,
        })
    }
}
impl<T> PartialOrd<Optional<T>> for NullOpt {
    fn partial_cmp(&self, other: &Optional<T>) -> Option<Ordering> {
        other.partial_cmp(self).map(Ordering::reverse)
    }
}

macro_rules! impl_value_cmp {
    ($($t:ty)*) => {$(
        impl PartialEq<$t> for Optional<$t> {
            fn eq(&self, other: &$t) -> bool {
                self.eq_value(other)
            }
        }
        impl PartialEq<Optional<$t>> for $t {
            fn eq(&self, other: &Optional<$t>) -> bool {
                other.eq_value(self)
            }
        }
        impl PartialOrd<$t> for Optional<$t> {
            fn partial_cmp(&self, other: &$t) -> Option<Ordering> {
                self.partial_cmp_value(other)
            }
        }
        impl PartialOrd<Optional<$t>> for $t {
            fn partial_cmp(&self, other: &Optional<$t>) -> Option<Ordering> {
                other.partial_cmp_value(self).map(Ordering::reverse)
            }
        }
    )*};
}
// The reversed impls give these types a second `PartialEq`/`PartialOrd` impl, so a
// comparison whose operand types are both uninferred may need an annotation.
impl_value_cmp! {
    u8 u16 u32 u64 u128 usize
    i8 i16 i32 i64 i128 isize
    f32 f64
    bool char String
}

impl PartialEq<str> for Optional<String> {
    fn eq(&self, other: &str) -> bool {
        self.eq_value(other)
    }
}
impl PartialEq<&str> for Optional<String> {
    fn eq(&self, other: &&str) -> bool {
        self.eq_value(*other)
    }
}
impl PartialEq<Optional<String>> for str {
    fn eq(&self, other: &Optional<String>) -> bool {
        other.eq_value(self)
    }
}
impl PartialEq<Optional<String>> for &str {
    fn eq(&self, other: &Optional<String>) -> bool {
        other.eq_value(*self)
    }
}
impl PartialOrd<str> for Optional<String> {
    fn partial_cmp(&self, other: &str) -> Option<Ordering> {
        min_none_partial_cmp(self.o.as_deref(), Some(other))
    }
}
impl PartialOrd<&str> for Optional<String> {
    fn partial_cmp(&self, other: &&str) -> Option<Ordering> {
        min_none_partial_cmp(self.o.as_deref(), Some(*other))
    }
}
impl PartialOrd<Optional<String>> for str {
    fn partial_cmp(&self, other: &Optional<String>) -> Option<Ordering> {
        other.partial_cmp(self).map(Ordering::reverse)
    }
}
impl PartialOrd<Optional<String>> for &str {
    fn partial_cmp(&self, other: &Optional<String>) -> Option<Ordering> {
        other.partial_cmp(*self).map(Ordering::reverse)
    }
}
