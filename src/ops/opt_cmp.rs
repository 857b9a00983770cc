use core::cmp::Ordering;

/// [`None`] is the least
///
/// Two [`None`]s are equal.
#[must_use]
pub fn min_none_partial_cmp<T, U>(a: Option<&T>, b: Option<&U>) -> Option<Ordering>
where
    T: PartialOrd<U> + ?Sized,
    U: ?Sized,
{
    match (a, b) {
        (None, None) => Some(Ordering::Equal),
        (None, Some(_)) => Some(Ordering::Less),
        (Some(_), None) => Some(Ordering::Greater),
        (Some(a), Some(b)) => a.partial_cmp(b),
    }
}

/// [`None`] is the least
#[must_use]
pub fn min_none_cmp<T: Ord + ?Sized>(a: Option<&T>, b: Option<&T>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(a), Some(b)) => a.cmp(b),
    }
}

/// [`None`] only equals [`None`]
#[must_use]
pub fn none_eq<T, U>(a: Option<&T>, b: Option<&U>) -> bool
where
    T: PartialEq<U> + ?Sized,
    U: ?Sized,
{
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_min_none() {
        assert_eq!(min_none_cmp::<u8>(None, None), Ordering::Equal);
        assert_eq!(min_none_cmp(None, Some(&0_u8)), Ordering::Less);
        assert_eq!(min_none_cmp(Some(&0_u8), None), Ordering::Greater);
        assert_eq!(min_none_cmp(Some(&1_u8), Some(&2)), Ordering::Less);
    }

    #[test]
    fn test_min_none_partial() {
        let nan = f64::NAN;
        assert_eq!(
            min_none_partial_cmp::<f64, f64>(None, Some(&nan)),
            Some(Ordering::Less)
        );
        assert_eq!(min_none_partial_cmp(Some(&nan), Some(&1.)), None);
        assert_eq!(
            min_none_partial_cmp(Some(&1_i32), Some(&1)),
            Some(Ordering::Equal)
        );
    }

    #[test]
    fn test_none_eq() {
        assert!(none_eq::<u8, u8>(None, None));
        assert!(!none_eq::<u8, u8>(None, Some(&0)));
        assert!(!none_eq::<u8, u8>(Some(&0), None));
        assert!(none_eq(Some(&"a"), Some(&"a")));
    }
}
