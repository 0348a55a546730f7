//! Small integer helpers.
//!
//! - [`min_int`]: least element of a slice
//! - [`sum()`]: wrapping sum over the fixed-width signed integers
//! - [`prime_sieve`] / [`is_prime`]: prime enumeration and testing

pub mod prime;
pub mod sum;

pub use prime::{is_prime, prime_sieve};
pub use sum::{WrappingSum, sum};

/// Return the least element of `values`, or `None` if it is empty.
pub fn min_int<T: Ord + Copy>(values: &[T]) -> Option<T> {
    values.iter().copied().min()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_min_int() {
        assert_eq!(min_int(&[3, 1, 2]), Some(1));
        assert_eq!(min_int(&[-4_i64, 0, 7]), Some(-4));
        assert_eq!(min_int(&[9usize]), Some(9));
    }

    #[test]
    fn test_min_int_empty() {
        assert_eq!(min_int::<i32>(&[]), None);
    }
}
