//! Integer summation over the fixed-width signed types.
//!
//! Overflow wraps in two's complement rather than panicking in debug builds.

mod sealed {
    pub trait Sealed {}
}

/// Signed integer type that [`sum`] accepts.
pub trait WrappingSum: sealed::Sealed + Copy {
    /// Additive identity.
    const ZERO: Self;

    /// `self + rhs`, wrapping at the type's bounds.
    #[must_use]
    fn add_wrapping(self, rhs: Self) -> Self;
}

macro_rules! impl_wrapping_sum {
    ($($t:ty),*) => {
        $(
            impl sealed::Sealed for $t {}

            impl WrappingSum for $t {
                const ZERO: Self = 0;

                fn add_wrapping(self, rhs: Self) -> Self {
                    self.wrapping_add(rhs)
                }
            }
        )*
    };
}

impl_wrapping_sum!(i8, i16, i32, i64, isize);

/// Sum `values`. An empty slice sums to zero.
pub fn sum<T: WrappingSum>(values: &[T]) -> T {
    values.iter().fold(T::ZERO, |acc, &v| acc.add_wrapping(v))
}
