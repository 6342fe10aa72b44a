//! Utilities functions which do not linked to domain

use std::ops::{Div, Neg, Rem};

use num_traits::Zero;

/// Split a signed value into its positive and negative magnitudes.
///
/// At most one of the pair is non-zero; zero itself belongs to the positive side.
pub(crate) fn split_signed<T>(value: T) -> (T, T)
where
    T: Zero + Neg<Output = T> + PartialOrd + Copy,
{
    if value >= T::zero() {
        (value, T::zero())
    } else {
        (T::zero(), -value)
    }
}

/// Division and remainder in one step
pub fn div_mod<T>(divider: T, divisor: T) -> (T, T)
where
    T: Copy + Div<Output = T> + Rem<Output = T>,
{
    (divider / divisor, divider % divisor)
}

/// The index following the given one on a ring of `len` items
pub(crate) const fn ring_next(index: usize, len: usize) -> usize {
    (index + 1) % len
}

/// The index preceding the given one on a ring of `len` items
pub(crate) const fn ring_prev(index: usize, len: usize) -> usize {
    (index + len - 1) % len
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signed_split() {
        assert_eq!(split_signed(7_i8), (7, 0));
        assert_eq!(split_signed(-7_i8), (0, 7));
        assert_eq!(split_signed(0_i32), (0, 0));

        assert_eq!(split_signed(12.5_f64), (12.5, 0.0));
        assert_eq!(split_signed(-12.5_f64), (0.0, 12.5));
    }

    #[test]
    fn signed_split_negative_zero_is_positive() {
        let (positive, negative) = split_signed(-0.0_f64);
        assert_eq!(positive, 0.0);
        assert_eq!(negative, 0.0);
        assert!(negative.is_sign_positive());
    }

    #[test]
    fn test_div_mod() {
        assert_eq!(div_mod(15, 4), (3, 3));
        assert_eq!(div_mod(-100, 7), (-14, -2));
        assert_eq!(div_mod(3_600_u64, 60), (60, 0));
    }

    #[test]
    fn ring() {
        assert_eq!(ring_next(0, 4), 1);
        assert_eq!(ring_next(3, 4), 0);
        assert_eq!(ring_prev(0, 4), 3);
        assert_eq!(ring_prev(2, 4), 1);
    }
}
