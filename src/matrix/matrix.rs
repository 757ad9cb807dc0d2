/* ************************************************************************ **
** This file is part of onb, and is licensed under EITHER the MIT license   **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use crate::{Dims, RaggedRowsError, ShapeMismatchError};

use onb_tolerance::{ApproxEq, Epsilon};

use std::fmt;
use std::ops::{Index, Range};

/// Owned, immutable matrix of `f64` with C layout.
///
/// A *vector* is a matrix with a single column.
// please resist the urge to go n-dimensional
#[derive(Debug, Clone)]
pub struct Matrix {
    // c-contiguous, row-contiguous data
    data: Vec<f64>,
    // invariant: height * width == data.len()
    // invariant: height == 0 implies width == 0
    height: usize,
    width: usize,
}

/// # Construction
impl Matrix {
    // every constructor funnels through here to uphold the empty-matrix invariant
    pub(crate) fn from_parts((height, width): Dims, data: Vec<f64>) -> Self {
        debug_assert_eq!(data.len(), height * width);
        let width = match height {
            0 => 0,
            _ => width,
        };
        Matrix { data, height, width }
    }

    /// Fails unless `data.len()` is `height * width`.
    ///
    /// (the error reports the data as a `len x 1` column)
    pub fn from_row_major_data((height, width): Dims, data: Vec<f64>) -> Result<Self, ShapeMismatchError> {
        if data.len() != height * width {
            let right = (data.len(), 1);
            return Err(ShapeMismatchError { op: "from_row_major_data", left: (height, width), right });
        }
        Ok(Matrix::from_parts((height, width), data))
    }

    /// Build a matrix from its rows.
    ///
    /// The width is taken from row 0; an empty list gives the `0x0` matrix.
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self, RaggedRowsError> {
        let width = rows.first().map_or(0, |row| row.as_ref().len());
        let mut data = Vec::with_capacity(rows.len() * width);
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != width {
                return Err(RaggedRowsError { row: i, len: row.len(), expected: width });
            }
            data.extend_from_slice(row);
        }
        Ok(Matrix::from_parts((rows.len(), width), data))
    }

    /// A column vector.
    pub fn column(entries: Vec<f64>) -> Self {
        let len = entries.len();
        Matrix::from_parts((len, 1), entries)
    }

    pub fn from_fn<F>((height, width): Dims, mut f: F) -> Self
    where F: FnMut(usize, usize) -> f64,
    {
        let mut data = Vec::with_capacity(height * width);
        for r in 0..height {
            for c in 0..width {
                data.push(f(r, c));
            }
        }
        Matrix::from_parts((height, width), data)
    }

    pub fn zeros(dims: Dims) -> Self
    { Matrix::from_fn(dims, |_, _| 0.0) }

    pub fn identity(n: usize) -> Self
    { Matrix::from_fn((n, n), |r, c| if r == c { 1.0 } else { 0.0 }) }
}

/// # Shape
impl Matrix {
    /// Number of rows.
    #[inline]
    pub fn codomain(&self) -> usize { self.height }

    /// Number of columns (0 for a matrix with no rows).
    #[inline]
    pub fn domain(&self) -> usize { self.width }

    #[inline]
    pub fn dims(&self) -> Dims { (self.height, self.width) }

    #[inline]
    pub fn is_vector(&self) -> bool { self.width == 1 }
}

/// # Access
impl Matrix {
    #[inline]
    pub fn row_major_data(&self) -> &[f64] { &self.data }

    pub fn row(&self, r: usize) -> &[f64] {
        assert!(r < self.height, "row {} out of bounds for {} rows", r, self.height);
        &self.data[r * self.width..(r + 1) * self.width]
    }

    // (not `chunks`, which refuses a width of zero)
    pub fn rows(&self) -> Rows<'_>
    { Rows { matrix: self, range: 0..self.height } }

    /// The entries of a column vector, or `None` if this is not a vector.
    pub fn vector_entries(&self) -> Option<&[f64]> {
        match self.is_vector() {
            true => Some(&self.data),
            false => None,
        }
    }

    /// Copy out as nested rows.
    pub fn to_rows(&self) -> Vec<Vec<f64>>
    { self.rows().map(|row| row.to_vec()).collect() }
}

/// Iterator over the rows of a `Matrix`, as slices.
#[derive(Debug, Clone)]
pub struct Rows<'a> {
    matrix: &'a Matrix,
    range: Range<usize>,
}

impl<'a> Iterator for Rows<'a> {
    type Item = &'a [f64];

    fn next(&mut self) -> Option<&'a [f64]>
    { self.range.next().map(|r| self.matrix.row(r)) }

    fn size_hint(&self) -> (usize, Option<usize>)
    { self.range.size_hint() }
}

impl<'a> ExactSizeIterator for Rows<'a> {}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    #[inline(always)] // inlining should often remove bounds checks
    fn index(&self, (r, c): (usize, usize)) -> &f64 {
        assert!(c < self.width, "column {} out of bounds for {} columns", c, self.width);
        &self.data[r * self.width + c]
    }
}

impl ApproxEq for Matrix {
    fn approx_eq(&self, other: &Matrix, eps: Epsilon) -> bool
    { self.equals(other, eps) }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[")?;
        for (r, row) in self.rows().enumerate() {
            if r > 0 {
                write!(f, ", ")?;
            }
            write!(f, "[")?;
            for (c, x) in row.iter().enumerate() {
                if c > 0 {
                    write!(f, ", ")?;
                }
                fmt::Display::fmt(x, f)?;
            }
            write!(f, "]")?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shape_of_rows() {
        let m = Matrix::from_rows(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]).unwrap();
        assert_eq!(m.codomain(), 2);
        assert_eq!(m.domain(), 3);
        assert_eq!(m[(1, 0)], 4.0);
        assert_eq!(m.row(1), &[4.0, 5.0, 6.0]);
        assert_eq!(m.to_rows(), vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]);
    }

    #[test]
    fn ragged_rows() {
        let rows = vec![vec![1.0, 2.0], vec![3.0], vec![4.0, 5.0]];
        let e = Matrix::from_rows(&rows).unwrap_err();
        assert_eq!((e.row, e.len, e.expected), (1, 1, 2));
    }

    #[test]
    fn empty_matrices() {
        let m = Matrix::from_rows::<Vec<f64>>(&[]).unwrap();
        assert_eq!(m.dims(), (0, 0));
        assert_eq!(m.rows().count(), 0);

        // no rows means no columns
        assert_eq!(Matrix::zeros((0, 4)).dims(), (0, 0));
        assert_eq!(Matrix::column(vec![]).dims(), (0, 0));

        // but the converse is allowed
        let m = Matrix::from_rows(&[[0f64; 0], [0f64; 0]]).unwrap();
        assert_eq!(m.dims(), (2, 0));
        let empty: &[f64] = &[];
        assert_eq!(m.rows().collect::<Vec<_>>(), vec![empty, empty]);
    }

    #[test]
    fn from_row_major_data_checks_length() {
        let m = Matrix::from_row_major_data((2, 2), vec![1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_eq!(m.row(1), &[3.0, 4.0]);

        let e = Matrix::from_row_major_data((2, 2), vec![1.0, 2.0, 3.0]).unwrap_err();
        assert_eq!((e.op, e.left, e.right), ("from_row_major_data", (2, 2), (3, 1)));

        // no rows is still no columns
        assert_eq!(Matrix::from_row_major_data((0, 3), vec![]).unwrap().dims(), (0, 0));
    }

    #[test]
    fn vectors() {
        let v = Matrix::column(vec![1.0, 2.0, 3.0]);
        assert!(v.is_vector());
        assert_eq!(v.dims(), (3, 1));
        assert_eq!(v[(2, 0)], 3.0);
        assert_eq!(v.vector_entries(), Some(&[1.0, 2.0, 3.0][..]));
        assert_eq!(Matrix::identity(2).vector_entries(), None);
    }

    #[test]
    #[should_panic]
    fn index_checks_columns() {
        let m = Matrix::identity(2);
        let _ = m[(0, 2)];
    }

    #[test]
    fn display() {
        let m = Matrix::from_rows(&[[1.0, 0.5], [0.0, -2.0]]).unwrap();
        assert_eq!(m.to_string(), "[[1, 0.5], [0, -2]]");
        assert_eq!(Matrix::zeros((0, 0)).to_string(), "[]");
    }
}
