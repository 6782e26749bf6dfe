//! Decoding of one-point codes on the Hermitian curve
//! x<sup>r+1</sup> = y<sup>r</sup> + y over GF(r<sup>2</sup>).
//!
//! # Decoding Procedure
//!
//! 1. Enumerate the rational points P<sub>0</sub>, …, P<sub>n-1</sub> of the
//!    curve; codeword symbols are indexed by this enumeration.
//! 2. Assemble the syndrome table S<sub>b</sub> = Σ r<sub>i</sub>
//!    b(P<sub>i</sub>) over the first l basis monomials b of the weighted
//!    order with weights (r, r+1), the pole-number enumeration of the
//!    Weierstrass semigroup at the point at infinity.
//! 3. Run the Berlekamp-Massey-Sakata scan over the known syndromes, bounded
//!    by the successor of the largest basis monomial.
//! 4. Extrapolate further syndromes by majority voting: every current
//!    candidate predicts the unique value that would keep its discrepancy
//!    zero, and the most supported value is fed back before the scan step.
//! 5. The error positions are the enumeration indices where every candidate
//!    polynomial vanishes.
//!
//! Error values are not recovered here; with the locations in hand they
//! follow from ordinary linear algebra on the syndrome equations.

use std::collections::BTreeMap;

use itertools::iproduct;
use tracing::debug;

use crate::bms::BmsAlgorithm;
use crate::galois::{Field, FieldExt, Ring};
use crate::point::{Point, Weighted};
use crate::poly::{MvPoly, Sequence};

/// Affine rational point of the curve.
pub type CurvePoint<F> = [F; 2];

/// Syndrome values keyed by basis monomials of the weighted order.
///
/// Lookups outside the table yield zero, so the table can stand in for the
/// scanned array of the BMS engine.
pub struct SyndromeTable<F, const A: u32, const B: u32> {
    map: BTreeMap<Point<2, Weighted<A, B>>, F>,
}

impl<F: Field, const A: u32, const B: u32> SyndromeTable<F, A, B> {
    /// Create an empty table.
    pub fn new() -> Self {
        SyndromeTable {
            map: BTreeMap::new(),
        }
    }

    /// Record the syndrome at the given monomial.
    pub fn insert(&mut self, monomial: Point<2, Weighted<A, B>>, value: F) {
        self.map.insert(monomial, value);
    }

    /// The syndrome recorded at the given monomial, `None` if it was never
    /// computed. Distinct from the `Sequence` lookup, which folds both the
    /// never-computed and the genuinely zero cases into zero.
    pub fn get(&self, monomial: &Point<2, Weighted<A, B>>) -> Option<F> {
        self.map.get(monomial).copied()
    }

    /// Number of recorded syndromes.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Check whether no syndrome has been recorded.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl<F: Field, const A: u32, const B: u32> Default for SyndromeTable<F, A, B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: Field, const A: u32, const B: u32> Sequence<F> for SyndromeTable<F, A, B> {
    fn coef(&self, idx: &[u32]) -> F {
        debug_assert_eq!(idx.len(), 2);

        self.map
            .get(&Point::from([idx[0], idx[1]]))
            .copied()
            .unwrap_or_else(F::zero)
    }
}

/// Locates errors in received words of the one-point Hermitian code with
/// curve parameter r = `A` and pole bound l, over the field `F` = GF(r²).
///
/// `B` must be r + 1; the two weights parameterize the monomial order the
/// way the curve parameterizes the code.
pub struct BmsDecoder<F: FieldExt, const A: u32, const B: u32> {
    points: Vec<CurvePoint<F>>,
    basis: Vec<Point<2, Weighted<A, B>>>,
}

impl<F: FieldExt, const A: u32, const B: u32> BmsDecoder<F, A, B> {
    /// Construct a decoder for pole bound `l`: the code's dual is spanned by
    /// the first `l` basis monomials.
    pub fn new(l: usize) -> Self {
        assert_eq!(B, A + 1, "weights must be the Hermitian nongaps (r, r+1)");
        assert_eq!(
            F::elements().len(),
            (A * A) as usize,
            "field size must be r^2"
        );

        let mut basis = Vec::with_capacity(l);
        let mut monomial = Point::origin();
        for _ in 0..l {
            basis.push(monomial);
            monomial.advance();
        }

        BmsDecoder {
            points: Self::rational_points(),
            basis,
        }
    }

    /// Exhaustively enumerate the affine rational points of the curve, in
    /// the deterministic order the received word is indexed by: field
    /// elements run zero-first then by ascending powers of the primitive
    /// element, x outermost.
    fn rational_points() -> Vec<CurvePoint<F>> {
        let elems = F::elements();

        iproduct!(elems.iter().copied(), elems.iter().copied())
            .filter(|&(x, y)| x.pow(A + 1) == y.pow(A) + y)
            .map(|(x, y)| [x, y])
            .collect()
    }

    /// The curve points backing the code, in enumeration order.
    pub fn points(&self) -> &[CurvePoint<F>] {
        &self.points
    }

    /// The basis monomials of the code, in pole-number order.
    pub fn basis(&self) -> &[Point<2, Weighted<A, B>>] {
        &self.basis
    }

    /// Compute the syndrome table of a received word:
    /// S<sub>b</sub> = Σ r<sub>i</sub> · b(P<sub>i</sub>).
    pub fn syndromes(&self, received: &[F]) -> SyndromeTable<F, A, B> {
        let mut table = SyndromeTable::new();

        for b in &self.basis {
            let sum = received
                .iter()
                .zip(&self.points)
                .fold(F::zero(), |acc, (&r, p)| {
                    acc + r * p[0].pow(b[0]) * p[1].pow(b[1])
                });
            table.insert(*b, sum);
        }

        table
    }

    /// Locate the errors in a received word, returning the ordered indices
    /// of the positions where every error-locator polynomial vanishes.
    ///
    /// An inconclusive decode shows up as an empty or overfull position
    /// list; deciding whether to re-request the word is left to the caller.
    pub fn decode(&self, received: &[F]) -> Vec<usize> {
        assert_eq!(received.len(), self.points.len());

        let table = self.syndromes(received);
        debug!(syndromes = table.len(), "assembled syndrome table");

        let bound = match self.basis.last() {
            Some(last) => last.succ(),
            None => Point::origin(),
        };

        let mut alg = BmsAlgorithm::new(table, bound);
        alg.run();
        self.extend_syndromes(&mut alg);

        let locators: Vec<&MvPoly<F>> = alg.f().values().collect();
        debug!(locators = locators.len(), "searching for common roots");

        self.points
            .iter()
            .enumerate()
            .filter(|(_, p)| locators.iter().all(|f| f.eval(&p[..]).is_zero()))
            .map(|(i, _)| i)
            .collect()
    }

    /// Feng-Rao majority voting: push the scan past the known syndromes,
    /// at each unknown point feeding in the value most of the current
    /// candidates agree keeps their discrepancies zero.
    ///
    /// The extension stops once the pole weight exceeds the largest known
    /// pole number by twice the curve genus, after which further syndromes
    /// no longer move the locators of a correctable error pattern.
    fn extend_syndromes(
        &self,
        alg: &mut BmsAlgorithm<F, SyndromeTable<F, A, B>, 2, Weighted<A, B>>,
    ) {
        let Some(last) = self.basis.last() else {
            return;
        };

        let genus = A * (A - 1) / 2;
        let limit = A * last[0] + B * last[1] + 2 * genus;

        let mut k = last.succ();
        while A * k[0] + B * k[1] <= limit {
            let value = Self::majority_vote(alg, k);
            alg.seq_mut().insert(k, value);
            alg.step(k);
            k = k.succ();
        }
    }

    /// Tally the candidates' predictions for the unknown syndrome at `k`.
    ///
    /// A candidate with degree t dividing k predicts the unique value
    /// nulling its discrepancy; a candidate whose discrepancy reaches a
    /// syndrome that was never computed abstains. True votes come from
    /// candidates whose span k − t is covered by a delta point; when no
    /// candidate qualifies the prediction falls back to the full tally,
    /// and to zero when every candidate abstains.
    fn majority_vote(
        alg: &BmsAlgorithm<F, SyndromeTable<F, A, B>, 2, Weighted<A, B>>,
        k: Point<2, Weighted<A, B>>,
    ) -> F {
        let mut votes: Vec<(F, usize)> = Vec::new();
        let mut fallback: Vec<(F, usize)> = Vec::new();

        'candidates: for (t, f) in alg.f() {
            if !t.divides(&k) {
                continue;
            }

            let lead = f.coef(&t[..]);
            debug_assert!(!lead.is_zero());

            // The part of the discrepancy at k already determined by known
            // syndromes: every term except the top one, whose u[k] factor
            // is what the vote is about. With t dividing k no index leaves
            // the lattice.
            let mut rest = F::zero();
            let mut i = Point::origin();
            while i < *t {
                let c = f.coef(&i[..]);
                if !c.is_zero() {
                    let idx = Point::from([i[0] + k[0] - t[0], i[1] + k[1] - t[1]]);
                    match alg.seq().get(&idx) {
                        Some(v) => rest = rest + c * v,
                        None => continue 'candidates,
                    }
                }
                i.advance();
            }

            let prediction = -rest * lead.invert();

            let span = k - *t;
            let supported = alg.delta_points().iter().any(|c| span.divides(c));

            let bucket = if supported { &mut votes } else { &mut fallback };
            match bucket.iter_mut().find(|(v, _)| *v == prediction) {
                Some((_, n)) => *n += 1,
                None => bucket.push((prediction, 1)),
            }
        }

        let tally = if votes.is_empty() { fallback } else { votes };
        tally
            .into_iter()
            .max_by_key(|&(_, n)| n)
            .map(|(v, _)| v)
            .unwrap_or_else(F::zero)
    }
}
