//! The Berlekamp-Massey-Sakata algorithm.
//!
//! Scanning the lattice points of a finite region in monomial order, the
//! algorithm maintains a family F of candidate polynomials keyed by their
//! multi-degree and a family G of witness polynomials keyed by the "failed
//! span" points where candidates were caught with nonzero discrepancies.
//! The delta set of failed spans grows into an antichain whose conjugate
//! dictates the degrees F must cover; at the end of the scan F is a minimal
//! Gröbner-style basis of the polynomials whose convolution with the input
//! array vanishes on the scanned region.
//!
//! With one variable the iteration collapses to the classic
//! Berlekamp-Massey synthesis of the shortest LFSR generating a sequence of
//! syndromes.

use std::collections::BTreeMap;

use tracing::{debug, trace};

use crate::galois::{Field, Ring};
use crate::point::{conjugate, divides_any, partial_maximums, MonomialOrder, Point};
use crate::poly::{conv, MvPoly, Sequence};

/// Finds the minimal polynomial set of a finite N-dimensional array.
pub struct BmsAlgorithm<C, S, const N: usize, O>
where
    C: Field,
    S: Sequence<C>,
    O: MonomialOrder<N>,
{
    /// The scanned array u, consulted only inside the scan region.
    seq: S,
    /// Exclusive scan bound: points totally less than this are visited.
    seq_len: Point<N, O>,
    /// Candidate minimal polynomials keyed by their multi-degree. The key
    /// set is always the conjugate of the current delta set.
    f: BTreeMap<Point<N, O>, MvPoly<C>>,
    /// Witness polynomials keyed by the delta point whose failure they
    /// recorded, prenormalized by the inverse discrepancy.
    g: BTreeMap<Point<N, O>, MvPoly<C>>,
    /// Antichain of failed spans accumulated so far.
    deltas: Vec<Point<N, O>>,
}

impl<C, S, const N: usize, O> BmsAlgorithm<C, S, N, O>
where
    C: Field,
    S: Sequence<C>,
    O: MonomialOrder<N>,
{
    /// Construct a new `BmsAlgorithm` over the given array with the given
    /// exclusive scan bound.
    pub fn new(seq: S, seq_len: Point<N, O>) -> Self {
        BmsAlgorithm {
            seq,
            seq_len,
            f: BTreeMap::from([(Point::origin(), MvPoly::one(N))]),
            g: BTreeMap::new(),
            deltas: Vec::new(),
        }
    }

    /// Run the whole scan and return the minimal set, in monomial order of
    /// the multi-degrees.
    pub fn compute_minimal_set(mut self) -> Vec<MvPoly<C>> {
        self.run();
        self.f.into_values().collect()
    }

    /// Scan every point below the bound.
    pub fn run(&mut self) {
        debug!(bound = %self.seq_len, "running BMS scan");

        for k in Point::range_to(self.seq_len) {
            self.step(k);
        }

        debug!(
            polynomials = self.f.len(),
            deltas = self.deltas.len(),
            "BMS scan finished"
        );
    }

    /// Perform the update for a single scan point.
    ///
    /// The scan points must be fed in strictly increasing monomial order;
    /// `run` does so for the initial region, and the decoder continues past
    /// it with extrapolated syndromes.
    pub fn step(&mut self, k: Point<N, O>) {
        // Discrepancy pass: convolve every candidate whose degree divides k
        // against the array. A nonzero discrepancy at a span not already
        // accounted for by G becomes a fresh delta point.
        let g_keys: Vec<Point<N, O>> = self.g.keys().copied().collect();
        let mut discr: BTreeMap<Point<N, O>, C> = BTreeMap::new();
        let mut fresh: Vec<Point<N, O>> = Vec::new();

        for (s, f) in &self.f {
            if !s.divides(&k) {
                continue;
            }

            let b = conv(f, &self.seq, s, &k);
            if !b.is_zero() {
                let c = k - *s;
                if !divides_any(&c, &g_keys) {
                    fresh.push(c);
                }
            }
            discr.insert(*s, b);
        }

        // Refresh the failed-span antichain and its conjugate.
        let mut spans = fresh;
        spans.extend(self.deltas.iter().copied());
        let deltas = partial_maximums(&spans);
        let sigmas = conjugate(&deltas);

        trace!(%k, deltas = deltas.len(), sigmas = sigmas.len(), "BMS step");

        // New G: carry known witnesses, adopt the failing candidates for
        // fresh delta points after normalizing by the inverse discrepancy.
        let mut g_new = BTreeMap::new();
        for c in &deltas {
            if let Some(w) = self.g.get(c) {
                g_new.insert(*c, w.clone());
                continue;
            }

            let s = k - *c;
            let b = discr
                .get(&s)
                .copied()
                .expect("missing discrepancy for fresh delta point");
            assert!(!b.is_zero(), "zero discrepancy for fresh delta point");
            let f = self
                .f
                .get(&s)
                .expect("missing candidate for fresh delta point");

            g_new.insert(*c, f.clone() * b.invert());
        }

        // New F: every conjugate point receives a polynomial of exactly its
        // degree, built from a dominated witness. A witness that failed at k
        // is repaired with the Berlekamp correction when a G polynomial
        // covers the span; otherwise the degree bump alone must do.
        let mut f_new = BTreeMap::new();
        for t in &sigmas {
            let s = self.witness(t, &discr);
            let b = discr.get(&s).copied().unwrap_or_else(C::zero);

            let mut h = self.f[&s].clone() << &(*t - s);

            if !b.is_zero() && t.divides(&k) {
                let gap = k - *t;
                if let Some(c) = self.g.keys().find(|c| gap.divides(c)).copied() {
                    let corr = (self.g[&c].clone() << &(c - gap)) * b;
                    h -= &corr;
                }
            }

            f_new.insert(*t, h);
        }

        self.f = f_new;
        self.g = g_new;
        self.deltas = deltas;
    }

    /// Choose the witness degree for the conjugate point `t`: `t` itself
    /// when it already carries a polynomial, otherwise the largest dominated
    /// degree that passed the discrepancy test, otherwise the largest
    /// dominated degree outright.
    fn witness(&self, t: &Point<N, O>, discr: &BTreeMap<Point<N, O>, C>) -> Point<N, O> {
        if self.f.contains_key(t) {
            return *t;
        }

        self.f
            .keys()
            .rev()
            .find(|s| s.divides(t) && discr.get(*s).map_or(true, |b| b.is_zero()))
            .or_else(|| self.f.keys().rev().find(|s| s.divides(t)))
            .copied()
            .expect("no candidate degree divides a conjugate point")
    }

    /// The candidate family F, keyed by multi-degree.
    pub fn f(&self) -> &BTreeMap<Point<N, O>, MvPoly<C>> {
        &self.f
    }

    /// The current antichain of failed spans.
    pub fn delta_points(&self) -> &[Point<N, O>] {
        &self.deltas
    }

    /// The scanned array.
    pub fn seq(&self) -> &S {
        &self.seq
    }

    /// Mutable access to the scanned array, for feeding extrapolated
    /// syndromes before stepping past the initial region.
    pub fn seq_mut(&mut self) -> &mut S {
        &mut self.seq
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::galois::Gf2;
    use crate::point::GradedAntilex;

    type Pt2 = Point<2>;
    type Pt3 = Point<3>;

    fn gf2_poly(s: &str) -> MvPoly<Gf2> {
        s.parse().unwrap()
    }

    #[test]
    fn test_zero_sequence() {
        let u = gf2_poly("[[0 0] [0]]");
        let minset = BmsAlgorithm::new(&u, Pt2::from([1, 1])).compute_minimal_set();

        assert_eq!(minset, vec![MvPoly::<Gf2>::one(2)]);
    }

    // Follows Sakata's two-dimensional example.
    #[test]
    fn test_sakata_2d() {
        let u = gf2_poly("[[0 1 0 1 0] [1 1 0 0] [0 1 0] [0 0] [0] [1]]");

        let mut alg = BmsAlgorithm::new(&u, Pt2::from([4, 1]));
        alg.run();

        let minset: Vec<MvPoly<Gf2>> = alg.f().values().cloned().collect();
        let expected = [
            "[[1 0] [1 1] [0]]",
            "[[1 0 1] [1 1] [1]]",
            "[[1 1] [1 0] [0] [1]]",
        ];
        assert_eq!(minset.len(), expected.len());
        for (got, want) in minset.iter().zip(expected) {
            assert_eq!(*got, gf2_poly(want));
        }

        // The degrees carried by F are the conjugate of the final deltas.
        let degrees: Vec<Pt2> = alg.f().keys().copied().collect();
        assert_eq!(
            degrees,
            vec![Pt2::from([1, 1]), Pt2::from([0, 2]), Pt2::from([3, 0])]
        );

        let deltas = alg.delta_points();
        assert_eq!(deltas.len(), 2);
        assert!(deltas.contains(&Pt2::from([2, 0])));
        assert!(deltas.contains(&Pt2::from([0, 1])));
    }

    // Every returned polynomial convolves to zero at every scanned point
    // its degree divides.
    #[test]
    fn test_minimal_set_annihilates() {
        let u = gf2_poly("[[0 1 0 1 0] [1 1 0 0] [0 1 0] [0 0] [0] [1]]");
        let bound = Pt2::from([4, 1]);

        let mut alg = BmsAlgorithm::new(&u, bound);
        alg.run();

        for (s, f) in alg.f() {
            for k in Point::range_to(bound) {
                if s.divides(&k) {
                    assert!(
                        conv(f, &u, s, &k).is_zero(),
                        "nonzero convolution at {} for degree {}",
                        k,
                        s
                    );
                }
            }
        }
    }

    // Follows Sakata's three-dimensional example.
    #[test]
    fn test_sakata_3d() {
        let v = gf2_poly(
            "[[[1 1 1 1 0 0] [0 1 0 1 0] [1 1 0 0] [0 1 0] [0 0] [0] [1]] \
              [[1 1 0 1 1] [1 0 1 1] [0 1 1] [1 1] [1] [0]] \
              [[0 1 0 0] [0 0 1] [0 0] [1] [0]] \
              [[1 1 0] [1 0] [0] [1]] [[1 1] [0] [1]] [[1] [1]] [[0]]]",
        );

        let minset =
            BmsAlgorithm::new(&v, Pt3::from([5, 0, 1])).compute_minimal_set();

        let expected = [
            "[[[1 1] [1]] [[0]] [[1]]]",
            "[[[0 1] [0 1] [0]] [[0 0] [0]] [[1]]]",
            "[[[1 1 1] [1] [1]] [[0 0] [0]] [[1]]]",
            "[[[1 0] [0 0] [1] [1]] [[0 0] [0] [0]] [[1] [1]] [[0]]]",
        ];
        assert_eq!(minset.len(), expected.len());
        for (got, want) in minset.iter().zip(expected) {
            assert_eq!(*got, gf2_poly(want));
        }
    }

    // The candidate degrees always match the polynomials they key.
    #[test]
    fn test_degrees_match_candidates() {
        let u = gf2_poly("[[0 1 0 1 0] [1 1 0 0] [0 1 0] [0 0] [0] [1]]");

        let mut alg = BmsAlgorithm::new(&u, Pt2::from([4, 1]));
        alg.run();

        for (s, f) in alg.f() {
            let terms = f.deg_coef_map::<2, GradedAntilex>();
            let lead = terms.keys().next_back().expect("nonzero candidate");
            assert_eq!(lead, s);
            assert!(!f.coef(&s[..]).is_zero());
        }
    }
}
