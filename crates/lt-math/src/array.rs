//! `Array`: a one-dimensional vector of reals for whole-step lattice
//! arithmetic.
//!
//! A thin newtype around `nalgebra::DVector<f64>`. The vectorized pricing
//! strategies express every backward-induction step as a handful of
//! element-wise operations on `Array` values (slice the next level, scale,
//! add, mask) instead of an explicit index loop.

use lt_core::Real;
use nalgebra::DVector;
use std::ops::{Add, Index, Mul};

/// A dynamically-sized 1D vector of `Real` values.
#[derive(Debug, Clone, PartialEq)]
pub struct Array(DVector<Real>);

impl Array {
    /// Create an array from a `Vec`.
    pub fn from_vec(data: Vec<Real>) -> Self {
        Self(DVector::from_vec(data))
    }

    /// Create an array of length `n` whose `j`-th element is `f(j)`.
    pub fn from_fn<F: FnMut(usize) -> Real>(n: usize, mut f: F) -> Self {
        Self(DVector::from_fn(n, |j, _| f(j)))
    }

    /// Number of elements.
    pub fn size(&self) -> usize {
        self.0.len()
    }

    /// Return the elements as a slice.
    pub fn as_slice(&self) -> &[Real] {
        self.0.as_slice()
    }

    /// Copy of the contiguous block `[start, start + len)`.
    ///
    /// # Panics
    /// Panics if the block runs past the end of the array.
    pub fn segment(&self, start: usize, len: usize) -> Self {
        Self(self.0.rows(start, len).clone_owned())
    }

    /// Copy of every `stride`-th element starting at `start`.
    pub fn strided(&self, start: usize, stride: usize) -> Self {
        let data: Vec<Real> = self
            .0
            .iter()
            .skip(start)
            .step_by(stride.max(1))
            .copied()
            .collect();
        Self::from_vec(data)
    }

    /// Apply a function element-wise, returning a new array.
    pub fn map<F: Fn(Real) -> Real>(&self, f: F) -> Self {
        Self(self.0.map(f))
    }

    /// Set every element whose companion in `keys` satisfies `pred` to
    /// `value`.
    ///
    /// This is the boolean-mask assignment (`v[mask] = value`) used to apply
    /// knock-out conditions to a whole lattice level at once.
    ///
    /// # Panics
    /// Panics if the lengths differ.
    pub fn assign_where<P: Fn(Real) -> bool>(&mut self, keys: &Array, pred: P, value: Real) {
        assert_eq!(self.size(), keys.size(), "mask length mismatch");
        for (v, &k) in self.0.iter_mut().zip(keys.0.iter()) {
            if pred(k) {
                *v = value;
            }
        }
    }
}

// ── Index ─────────────────────────────────────────────────────────────────────

impl Index<usize> for Array {
    type Output = Real;
    fn index(&self, i: usize) -> &Real {
        &self.0[i]
    }
}

// ── Element-wise arithmetic ───────────────────────────────────────────────────

impl Add for &Array {
    type Output = Array;
    fn add(self, rhs: &Array) -> Array {
        Array(&self.0 + &rhs.0)
    }
}

impl Mul<Real> for &Array {
    type Output = Array;
    fn mul(self, rhs: Real) -> Array {
        Array(&self.0 * rhs)
    }
}

impl Mul<Real> for Array {
    type Output = Array;
    fn mul(self, rhs: Real) -> Array {
        Array(self.0 * rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_fn_and_index() {
        let a = Array::from_fn(4, |j| j as Real * 10.0);
        assert_eq!(a.size(), 4);
        assert_eq!(a[3], 30.0);
    }

    #[test]
    fn segment_copies_block() {
        let a = Array::from_vec(vec![1.0, 2.0, 3.0, 4.0]);
        assert_eq!(a.segment(1, 3).as_slice(), &[2.0, 3.0, 4.0]);
        assert_eq!(a.segment(0, 3).as_slice(), &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn strided_picks_even_and_odd() {
        let a = Array::from_vec(vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0]);
        assert_eq!(a.strided(0, 2).as_slice(), &[0.0, 2.0, 4.0]);
        assert_eq!(a.strided(1, 2).as_slice(), &[1.0, 3.0, 5.0]);
    }

    #[test]
    fn element_wise_ops() {
        let a = Array::from_vec(vec![1.0, 2.0, 3.0]);
        let b = Array::from_vec(vec![4.0, 5.0, 6.0]);
        let combined = (&(&a * 0.5) + &(&b * 0.5)) * 2.0;
        assert_eq!(combined.as_slice(), &[5.0, 7.0, 9.0]);
        assert_eq!(a.map(|x| x * x).as_slice(), &[1.0, 4.0, 9.0]);
    }

    #[test]
    fn assign_where_masks_by_keys() {
        let keys = Array::from_vec(vec![90.0, 110.0, 130.0]);
        let mut v = Array::from_vec(vec![1.0, 2.0, 3.0]);
        v.assign_where(&keys, |s| s >= 110.0, 0.0);
        assert_eq!(v.as_slice(), &[1.0, 0.0, 0.0]);
    }
}
