pub const CEILING: i64 = 100;

/// Folds values above the ceiling back into (0, CEILING]. Anything at or
/// below the ceiling, negatives included, is left alone.
pub fn clamp(n: i64) -> i64 {
    if n <= CEILING {
        return n;
    }
    n - CEILING * ((n - 1) / CEILING)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_boundaries() {
        assert_eq!(clamp(97 + 5), 2);
        assert_eq!(clamp(100), 100);
        assert_eq!(clamp(101), 1);
        assert_eq!(clamp(200), 100);
        assert_eq!(clamp(201), 1);
        assert_eq!(clamp(5 - 15), -10);
        assert_eq!(clamp(0), 0);
    }

    proptest! {
        #[test]
        fn test_passthrough_at_or_below_ceiling(n in i64::MIN / 2..=CEILING) {
            prop_assert_eq!(clamp(n), n);
        }

        #[test]
        fn test_folds_above_ceiling(n in (CEILING + 1)..i64::MAX / 2) {
            let c = clamp(n);
            prop_assert!(c > 0 && c <= CEILING);
            prop_assert_eq!(c.rem_euclid(CEILING), n.rem_euclid(CEILING));
        }
    }
}
