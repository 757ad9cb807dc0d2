/* ************************************************************************ **
** This file is part of onb, and is licensed under EITHER the MIT license   **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use onb_tolerance::{ApproxEq, Epsilon};

use std::fmt;
use std::slice;
use std::vec;

/// A set that remembers the order in which its elements first arrived.
///
/// Membership is decided by `ApproxEq` under the set's epsilon, so elements
/// are never hashed.  This makes `contains` and `add` linear in the size of
/// the set, which is fine for the handful of vectors a basis holds.
#[derive(Clone)]
pub struct OrdSet<T> {
    // invariant: no two elements are approx_eq under `eps`
    items: Vec<T>,
    eps: Epsilon,
}

/// # Construction
impl<T: ApproxEq> OrdSet<T> {
    #[inline]
    pub fn new(eps: Epsilon) -> Self
    { OrdSet { items: vec![], eps } }

    /// Collect an iterator, dropping anything already seen.
    pub fn from_iter_with<I>(iter: I, eps: Epsilon) -> Self
    where I: IntoIterator<Item = T>,
    {
        let mut set = OrdSet::new(eps);
        set.extend(iter);
        set
    }
}

impl<T: ApproxEq> OrdSet<T> {
    pub fn contains(&self, value: &T) -> bool
    { self.items.iter().any(|x| x.approx_eq(value, self.eps)) }

    /// Returns `false` (and leaves the set untouched) if an equivalent value
    /// is already present.
    pub fn add(&mut self, value: T) -> bool {
        if self.contains(&value) {
            return false;
        }
        self.items.push(value);
        true
    }
}

impl<T> OrdSet<T> {
    #[inline]
    pub fn len(&self) -> usize { self.items.len() }

    #[inline]
    pub fn is_empty(&self) -> bool { self.items.is_empty() }

    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, T> { self.items.iter() }

    /// The elements, in insertion order.
    #[inline]
    pub fn as_slice(&self) -> &[T] { &self.items }

    #[inline]
    pub fn into_vec(self) -> Vec<T> { self.items }
}

impl<T: ApproxEq> Extend<T> for OrdSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for x in iter {
            self.add(x);
        }
    }
}

impl<T> IntoIterator for OrdSet<T> {
    type Item = T;
    type IntoIter = vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter { self.items.into_iter() }
}

impl<'a, T> IntoIterator for &'a OrdSet<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter { self.items.iter() }
}

impl<T: fmt::Debug> fmt::Debug for OrdSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_set().entries(&self.items).finish()
    }
}
