/* ************************************************************************ **
** This file is part of onb, and is licensed under EITHER the MIT license   **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! The single tolerance that every comparison in onb is made against.
//!
//! All comparisons are *absolute*: two numbers are equal when they differ by
//! no more than epsilon, and a number is zero when its magnitude is no more
//! than epsilon.  There is no relative tolerance anywhere.

#[macro_use]
extern crate failure;

pub const DEFAULT_EPSILON: f64 = 1e-9;

/// A validated absolute tolerance.
///
/// This is chosen once (usually from settings) and then handed by value to
/// everything that compares floats.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct Epsilon(f64);

#[derive(Debug, Fail)]
#[fail(display = "epsilon must be finite and positive (got {})", value)]
pub struct InvalidEpsilonError {
    pub value: f64,
}

impl Epsilon {
    pub fn new(value: f64) -> Result<Self, InvalidEpsilonError> {
        match value.is_finite() && value > 0.0 {
            true => Ok(Epsilon(value)),
            false => Err(InvalidEpsilonError { value }),
        }
    }

    #[inline(always)]
    pub fn get(self) -> f64 { self.0 }

    #[inline]
    pub fn is_zero(self, x: f64) -> bool { x.abs() <= self.0 }

    #[inline]
    pub fn is_close(self, a: f64, b: f64) -> bool { (a - b).abs() <= self.0 }
}

impl Default for Epsilon {
    fn default() -> Self { Epsilon(DEFAULT_EPSILON) }
}

/// Equality up to an absolute tolerance.
///
/// Unlike `PartialEq`, this is not transitive; `a ~ b` and `b ~ c` does not
/// give `a ~ c`.  Containers built on it (see `onb-ordset`) keep whichever
/// representative arrived first.
pub trait ApproxEq<Rhs: ?Sized = Self> {
    fn approx_eq(&self, other: &Rhs, eps: Epsilon) -> bool;
}

impl ApproxEq for f64 {
    #[inline]
    fn approx_eq(&self, other: &f64, eps: Epsilon) -> bool { eps.is_close(*self, *other) }
}

impl<'a, T: ?Sized + ApproxEq> ApproxEq for &'a T {
    fn approx_eq(&self, other: &Self, eps: Epsilon) -> bool
    { ApproxEq::approx_eq(*self, *other, eps) }
}

// slices of different length are simply unequal
impl<T: ApproxEq> ApproxEq for [T] {
    fn approx_eq(&self, other: &Self, eps: Epsilon) -> bool {
        self.len() == other.len()
            && self.iter().zip(other).all(|(a, b)| a.approx_eq(b, eps))
    }
}

impl<T: ApproxEq> ApproxEq for Vec<T> {
    fn approx_eq(&self, other: &Self, eps: Epsilon) -> bool
    { self[..].approx_eq(&other[..], eps) }
}

impl<T: ApproxEq, const N: usize> ApproxEq for [T; N] {
    fn approx_eq(&self, other: &Self, eps: Epsilon) -> bool
    { self[..].approx_eq(&other[..], eps) }
}

/// Panics unless two values are `ApproxEq` under the given (or default) epsilon.
///
/// ```
/// # #[macro_use] extern crate onb_tolerance;
/// # fn main() {
/// assert_close!(1.0, 1.0 + 1e-12);
/// assert_close!(abs=1e-3, vec![1.0, 2.0], vec![1.0001, 2.0]);
/// assert_close!(abs=1e-3, 0.0, 1e-4, "residual of {}", "v");
/// # }
/// ```
#[macro_export]
macro_rules! assert_close {
    (abs=$tol:expr, $a:expr, $b:expr, $($fmt:tt)+) => {{
        let eps = match $crate::Epsilon::new($tol) {
            Ok(eps) => eps,
            Err(e) => panic!("assert_close!: {}", e),
        };
        match (&$a, &$b) {
            (a, b) => {
                if !$crate::ApproxEq::approx_eq(a, b, eps) {
                    panic!(
                        "{} (tolerance: abs={})\n left: {:?}\nright: {:?}",
                        format!($($fmt)+), eps.get(), a, b,
                    );
                }
            },
        }
    }};
    (abs=$tol:expr, $a:expr, $b:expr $(,)*) => {
        $crate::assert_close!(abs=$tol, $a, $b, "not nearly equal!")
    };
    ($a:expr, $b:expr, $($fmt:tt)+) => {
        $crate::assert_close!(abs=$crate::DEFAULT_EPSILON, $a, $b, $($fmt)+)
    };
    ($a:expr, $b:expr $(,)*) => {
        $crate::assert_close!(abs=$crate::DEFAULT_EPSILON, $a, $b)
    };
}

#[cfg(test)]
#[deny(unused)]
mod tests {
    use super::*;

    #[test]
    fn macro_output_can_compile() {
        assert_close!(1.0, 1.0);
        assert_close!(abs=1e-8, 1.0, 1.0);
        assert_close!(1.0, 1.0,);
        assert_close!(abs=1e-8, 1.0, 1.0,);
        assert_close!(abs=1e-8, 1.0, 1.0, "{}", "hello");
        assert_close!(abs=1e-8, 1.0, 1.0, "{}", "hello",);
    }

    #[test]
    #[should_panic]
    fn not_close() {
        assert_close!(abs=1e-3, 1.0, 1.1);
    }

    #[test]
    #[should_panic]
    fn bad_tolerance_in_macro() {
        assert_close!(abs=-1.0, 1.0, 1.0);
    }

    #[test]
    fn epsilon_validation() {
        assert!(Epsilon::new(1e-6).is_ok());
        assert!(Epsilon::new(0.0).is_err());
        assert!(Epsilon::new(-1e-6).is_err());
        assert!(Epsilon::new(::std::f64::NAN).is_err());
        assert!(Epsilon::new(::std::f64::INFINITY).is_err());
        assert_eq!(Epsilon::default().get(), DEFAULT_EPSILON);
    }

    #[test]
    fn boundary_is_inclusive() {
        let eps = Epsilon::new(0.5).unwrap();
        assert!(eps.is_zero(0.5));
        assert!(eps.is_zero(-0.5));
        assert!(!eps.is_zero(0.50001));
        assert!(eps.is_close(1.0, 1.5));
        assert!(!eps.is_close(1.0, 1.6));
    }

    #[test]
    fn sequences() {
        let eps = Epsilon::new(1e-6).unwrap();
        assert!(vec![1.0, 2.0].approx_eq(&vec![1.0, 2.0 + 1e-7], eps));
        assert!(!vec![1.0, 2.0].approx_eq(&vec![1.0], eps));
        assert!([0.0; 3].approx_eq(&[1e-7, -1e-7, 0.0], eps));
        assert!(!vec![0.0, 1.0].approx_eq(&vec![0.0, 1.1], eps));
    }
}
