//! Points of the integer lattice ℕ<sup>N</sup> with pluggable monomial
//! orders, and the antichain algebra the Sakata iteration is built on.
//!
//! A point doubles as the multi-index of a monomial, so the coordinate-wise
//! partial order is exactly monomial divisibility and the total order is a
//! monomial order (a well-order compatible with addition).

use std::cmp::Ordering;
use std::fmt;
use std::marker::PhantomData;
use std::ops::{Add, AddAssign, Deref, DerefMut, Sub, SubAssign};

/// Total monomial order on ℕ<sup>N</sup> together with its successor
/// function.
///
/// Implementations must be well-orders compatible with coordinate-wise sum:
/// `a ≤ b` coordinate-wise implies `a ≤ b` totally, and `a < b` implies
/// `a + c < b + c`.
pub trait MonomialOrder<const N: usize> {
    /// Compare two coordinate vectors in the total order.
    fn total_cmp(lhs: &[u32; N], rhs: &[u32; N]) -> Ordering;

    /// Replace the coordinates with those of the next point in the total
    /// order. Starting from the origin, repeated application visits every
    /// lattice point exactly once, in strictly increasing order.
    fn advance(coords: &mut [u32; N]);
}

/// Compare reversed coordinate sequences lexicographically, the tie-break
/// shared by both graded orders.
fn antilex_cmp<const N: usize>(lhs: &[u32; N], rhs: &[u32; N]) -> Ordering {
    lhs.iter().rev().cmp(rhs.iter().rev())
}

/// Graded antilexicographic order: weight first, then the rightmost
/// differing coordinate decides, reversed.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct GradedAntilex;

impl<const N: usize> MonomialOrder<N> for GradedAntilex {
    fn total_cmp(lhs: &[u32; N], rhs: &[u32; N]) -> Ordering {
        let lw: u32 = lhs.iter().sum();
        let rw: u32 = rhs.iter().sum();
        lw.cmp(&rw).then_with(|| antilex_cmp(lhs, rhs))
    }

    fn advance(coords: &mut [u32; N]) {
        // Move one unit from the leftmost nonzero coordinate to its right
        // neighbor, dumping the remainder back into position 0; when that
        // coordinate is the last one, the weight increases by one and the
        // point wraps to (w+1, 0, …, 0)'s antilex successor chain start.
        match coords.iter().position(|&c| c != 0) {
            None => coords[0] = 1,
            Some(i) if i + 1 == N => {
                let a = coords[i] + 1;
                coords[i] = 0;
                coords[0] = a;
            }
            Some(i) => {
                coords[i + 1] += 1;
                let a = coords[i] - 1;
                coords[i] = 0;
                coords[0] = a;
            }
        }
    }
}

/// Weighted order on ℕ<sup>2</sup> comparing `A·p₀ + B·p₁`, the pole-order
/// enumeration of one-point codes with nongaps A and B.
///
/// The successor is the unique next point of strictly greater weighted value
/// with `p₀ < B`; restricted this way the weighted values are the elements
/// of the numerical semigroup ⟨A, B⟩, visited each exactly once.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct Weighted<const A: u32, const B: u32>;

impl<const A: u32, const B: u32> Weighted<A, B> {
    fn weight(coords: &[u32; 2]) -> u32 {
        A * coords[0] + B * coords[1]
    }
}

impl<const A: u32, const B: u32> MonomialOrder<2> for Weighted<A, B> {
    fn total_cmp(lhs: &[u32; 2], rhs: &[u32; 2]) -> Ordering {
        Self::weight(lhs)
            .cmp(&Self::weight(rhs))
            .then_with(|| antilex_cmp(lhs, rhs))
    }

    fn advance(coords: &mut [u32; 2]) {
        let target = Self::weight(coords) + 1;
        let mut best: Option<(u32, [u32; 2])> = None;

        for i in 0..B {
            // Least j ≥ 0 with A·i + B·j ≥ target.
            let head = A * i;
            let j = if head >= target {
                0
            } else {
                (target - head).div_ceil(B)
            };
            let value = head + B * j;

            if best.map_or(true, |(v, _)| value < v) {
                best = Some((value, [i, j]));
            }
        }

        *coords = best.expect("positive weights").1;
    }
}

/// Point in the N-dimensional integer lattice, carrying its monomial-order
/// policy the way a codeword carries its field.
pub struct Point<const N: usize, O: MonomialOrder<N> = GradedAntilex> {
    coords: [u32; N],
    order: PhantomData<O>,
}

impl<const N: usize, O: MonomialOrder<N>> Point<N, O> {
    /// Creates the point (0, 0, …, 0).
    pub fn origin() -> Self {
        Point {
            coords: [0; N],
            order: PhantomData,
        }
    }

    /// Sum of the coordinates.
    pub fn weight(&self) -> u32 {
        self.coords.iter().sum()
    }

    /// Check whether the monomial at this point divides the monomial at
    /// `other`, i.e. whether every coordinate is ≤ the corresponding
    /// coordinate of `other`. A partial order on the lattice.
    pub fn divides(&self, other: &Self) -> bool {
        self.coords.iter().zip(other.coords.iter()).all(|(a, b)| a <= b)
    }

    /// Step to the next point in the monomial order.
    pub fn advance(&mut self) {
        O::advance(&mut self.coords);
    }

    /// The next point in the monomial order.
    pub fn succ(mut self) -> Self {
        self.advance();
        self
    }

    /// All points from the origin up to, but excluding, `bound`, in
    /// monomial order.
    pub fn range_to(bound: Self) -> PointRange<N, O> {
        PointRange {
            next: Self::origin(),
            bound,
        }
    }
}

impl<const N: usize, O: MonomialOrder<N>> Clone for Point<N, O> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<const N: usize, O: MonomialOrder<N>> Copy for Point<N, O> {}

impl<const N: usize, O: MonomialOrder<N>> Default for Point<N, O> {
    fn default() -> Self {
        Self::origin()
    }
}

impl<const N: usize, O: MonomialOrder<N>> From<[u32; N]> for Point<N, O> {
    fn from(coords: [u32; N]) -> Self {
        Point {
            coords,
            order: PhantomData,
        }
    }
}

impl<const N: usize, O: MonomialOrder<N>> Deref for Point<N, O> {
    type Target = [u32; N];
    fn deref(&self) -> &Self::Target {
        &self.coords
    }
}

impl<const N: usize, O: MonomialOrder<N>> DerefMut for Point<N, O> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.coords
    }
}

/// Two points are equal iff all corresponding coordinates are equal.
impl<const N: usize, O: MonomialOrder<N>> PartialEq for Point<N, O> {
    fn eq(&self, other: &Self) -> bool {
        self.coords == other.coords
    }
}

impl<const N: usize, O: MonomialOrder<N>> Eq for Point<N, O> {}

impl<const N: usize, O: MonomialOrder<N>> PartialOrd for Point<N, O> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// The total order on points is the monomial order of the policy.
impl<const N: usize, O: MonomialOrder<N>> Ord for Point<N, O> {
    fn cmp(&self, other: &Self) -> Ordering {
        O::total_cmp(&self.coords, &other.coords)
    }
}

/// Coordinate-wise point summation.
impl<const N: usize, O: MonomialOrder<N>> AddAssign for Point<N, O> {
    fn add_assign(&mut self, rhs: Self) {
        for (a, b) in self.coords.iter_mut().zip(rhs.coords.iter()) {
            *a += b;
        }
    }
}

impl<const N: usize, O: MonomialOrder<N>> Add for Point<N, O> {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self {
        self += rhs;
        self
    }
}

/// Coordinate-wise point subtraction. Only valid when `rhs` divides `self`,
/// so the result stays inside the lattice.
impl<const N: usize, O: MonomialOrder<N>> SubAssign for Point<N, O> {
    fn sub_assign(&mut self, rhs: Self) {
        debug_assert!(rhs.divides(self));

        for (a, b) in self.coords.iter_mut().zip(rhs.coords.iter()) {
            *a -= b;
        }
    }
}

impl<const N: usize, O: MonomialOrder<N>> Sub for Point<N, O> {
    type Output = Self;

    fn sub(mut self, rhs: Self) -> Self {
        self -= rhs;
        self
    }
}

impl<const N: usize, O: MonomialOrder<N>> fmt::Display for Point<N, O> {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        if N == 1 {
            return write!(fmt, "{}", self.coords[0]);
        }

        write!(fmt, "(")?;
        for c in &self.coords[..N - 1] {
            write!(fmt, "{}, ", c)?;
        }
        write!(fmt, "{})", self.coords[N - 1])
    }
}

impl<const N: usize, O: MonomialOrder<N>> fmt::Debug for Point<N, O> {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, fmt)
    }
}

/// Iterator over an initial segment of the monomial order.
pub struct PointRange<const N: usize, O: MonomialOrder<N>> {
    next: Point<N, O>,
    bound: Point<N, O>,
}

impl<const N: usize, O: MonomialOrder<N>> Iterator for PointRange<N, O> {
    type Item = Point<N, O>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next < self.bound {
            let cur = self.next;
            self.next.advance();
            Some(cur)
        } else {
            None
        }
    }
}

/// Checks whether `pt` divides some point of `points`, i.e. whether it lies
/// under the coordinate-wise down-closure of the collection.
pub fn divides_any<const N: usize, O: MonomialOrder<N>>(
    pt: &Point<N, O>,
    points: &[Point<N, O>],
) -> bool {
    points.iter().any(|p| pt.divides(p))
}

/// Checks whether `pt` is divided by some point of `points`.
pub fn divided_by_any<const N: usize, O: MonomialOrder<N>>(
    pt: &Point<N, O>,
    points: &[Point<N, O>],
) -> bool {
    points.iter().any(|p| p.divides(pt))
}

/// Reduces a collection of points to its maximal antichain: the minimal
/// subset with the same coordinate-wise down-closure.
///
/// A candidate already dominated by the result is dropped; otherwise it
/// evicts everything it dominates and joins the result.
pub fn partial_maximums<const N: usize, O: MonomialOrder<N>>(
    points: &[Point<N, O>],
) -> Vec<Point<N, O>> {
    let mut result: Vec<Point<N, O>> = Vec::new();

    for pt in points {
        if divides_any(pt, &result) {
            continue;
        }

        result.retain(|p| !p.divides(pt));
        result.push(*pt);
    }

    result
}

/// Complementary to `partial_maximums`: the minimal antichain with the same
/// coordinate-wise up-closure.
pub fn partial_minimums<const N: usize, O: MonomialOrder<N>>(
    points: &[Point<N, O>],
) -> Vec<Point<N, O>> {
    let mut result: Vec<Point<N, O>> = Vec::new();

    for pt in points {
        if divided_by_any(pt, &result) {
            continue;
        }

        result.retain(|p| !pt.divides(p));
        result.push(*pt);
    }

    result
}

/// The conjugate (Sigma) set of a delta set: the minimal points not lying
/// under the down-closure of `points`.
///
/// The search region is every lattice point of weight up to the maximum
/// weight in `points` plus one, enumerated gradedly; minimal points of the
/// complement cannot lie beyond it.
pub fn conjugate<const N: usize, O: MonomialOrder<N>>(
    points: &[Point<N, O>],
) -> Vec<Point<N, O>> {
    if points.is_empty() {
        return vec![Point::origin()];
    }

    let max_weight = points.iter().map(Point::weight).max().unwrap();

    let mut region: Vec<Point<N, O>> = Vec::new();
    let mut coords = [0u32; N];
    while coords.iter().sum::<u32>() <= max_weight + 1 {
        let pt = Point::from(coords);
        if !divides_any(&pt, points) {
            region.push(pt);
        }
        <GradedAntilex as MonomialOrder<N>>::advance(&mut coords);
    }

    partial_minimums(&region)
}
