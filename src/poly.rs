//! Recursive multivariate polynomials and the truncated convolution.
//!
//! A polynomial in n variables is a finite sequence of polynomials in n-1
//! variables: the outermost index is the exponent of the first variable.
//! The base of the recursion is a plain coefficient sequence with index 0
//! holding the constant term. Coefficient lookups outside the stored range
//! yield zero, so a polynomial can also serve as a finite multidimensional
//! array with implicit zero padding.

use std::collections::BTreeMap;
use std::fmt;
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Shl, ShlAssign, Sub, SubAssign};
use std::str::FromStr;

use itertools::{EitherOrBoth, Itertools};

use crate::error::ParseError;
use crate::galois::{FieldExt, PowerPrinter, Ring};
use crate::point::{MonomialOrder, Point};

/// Multivariate polynomial over the ring `C`.
#[derive(Clone, Debug)]
pub struct MvPoly<C> {
    repr: Repr<C>,
}

#[derive(Clone, Debug)]
enum Repr<C> {
    /// One variable: the coefficient sequence itself.
    Coefs(Vec<C>),
    /// More variables: coefficients are polynomials in one variable fewer.
    Polys(Vec<MvPoly<C>>),
}

impl<C: Ring> MvPoly<C> {
    /// The zero polynomial in the given number of variables, stored as a
    /// full nest of single zeros so the sequence is never empty.
    pub fn zero(vars: usize) -> Self {
        assert!(vars >= 1);

        if vars == 1 {
            MvPoly {
                repr: Repr::Coefs(vec![C::zero()]),
            }
        } else {
            MvPoly {
                repr: Repr::Polys(vec![MvPoly::zero(vars - 1)]),
            }
        }
    }

    /// The identity polynomial: a single one at multi-index (0, …, 0).
    pub fn one(vars: usize) -> Self {
        assert!(vars >= 1);

        if vars == 1 {
            MvPoly {
                repr: Repr::Coefs(vec![C::one()]),
            }
        } else {
            MvPoly {
                repr: Repr::Polys(vec![MvPoly::one(vars - 1)]),
            }
        }
    }

    /// Number of variables: the nesting depth of the representation.
    pub fn vars(&self) -> usize {
        match &self.repr {
            Repr::Coefs(_) => 1,
            Repr::Polys(ps) => 1 + ps[0].vars(),
        }
    }

    /// Retrieve the coefficient at the given multi-index, descending one
    /// nesting level per index position. Out-of-range lookups return zero.
    pub fn coef(&self, idx: &[u32]) -> C {
        match &self.repr {
            Repr::Coefs(cs) => {
                debug_assert_eq!(idx.len(), 1);
                cs.get(idx[0] as usize).copied().unwrap_or_else(C::zero)
            }
            Repr::Polys(ps) => {
                debug_assert!(idx.len() > 1);
                ps.get(idx[0] as usize)
                    .map(|p| p.coef(&idx[1..]))
                    .unwrap_or_else(C::zero)
            }
        }
    }

    /// Check whether every stored coefficient is zero.
    pub fn is_zero(&self) -> bool {
        match &self.repr {
            Repr::Coefs(cs) => cs.iter().all(C::is_zero),
            Repr::Polys(ps) => ps.iter().all(MvPoly::is_zero),
        }
    }

    /// Delete trailing zero coefficients at every nesting level, keeping at
    /// least one element so the zero polynomial stays representable.
    pub fn normalize(&mut self) {
        match &mut self.repr {
            Repr::Coefs(cs) => {
                while cs.len() > 1 && cs.last().unwrap().is_zero() {
                    cs.pop();
                }
            }
            Repr::Polys(ps) => {
                for p in ps.iter_mut() {
                    p.normalize();
                }
                while ps.len() > 1 && ps.last().unwrap().is_zero() {
                    ps.pop();
                }
            }
        }
    }

    /// Evaluate the polynomial at the given point by nested Horner: the
    /// outer variable's coefficients are evaluations of the nested
    /// polynomials at the remaining coordinates.
    pub fn eval(&self, at: &[C]) -> C {
        match &self.repr {
            Repr::Coefs(cs) => cs.iter().rev().fold(C::zero(), |s, &c| s * at[0] + c),
            Repr::Polys(ps) => ps
                .iter()
                .rev()
                .fold(C::zero(), |s, p| s * at[0] + p.eval(&at[1..])),
        }
    }

    /// Map the nonzero terms to their multi-degrees, ordered by the chosen
    /// monomial order.
    pub fn deg_coef_map<const N: usize, O: MonomialOrder<N>>(&self) -> BTreeMap<Point<N, O>, C> {
        debug_assert_eq!(self.vars(), N);

        let mut map = BTreeMap::new();
        let mut idx = [0u32; N];
        collect_terms(self, 0, &mut idx, &mut map);
        map
    }

    fn shl_slice(&mut self, m: &[u32]) {
        match &mut self.repr {
            Repr::Coefs(cs) => {
                let mut padded = vec![C::zero(); m[0] as usize];
                padded.append(cs);
                *cs = padded;
            }
            Repr::Polys(ps) => {
                for p in ps.iter_mut() {
                    p.shl_slice(&m[1..]);
                }

                let vars = ps[0].vars();
                let mut padded = vec![MvPoly::zero(vars); m[0] as usize];
                padded.append(ps);
                *ps = padded;
            }
        }
    }
}

fn collect_terms<C: Ring, const N: usize, O: MonomialOrder<N>>(
    p: &MvPoly<C>,
    depth: usize,
    idx: &mut [u32; N],
    map: &mut BTreeMap<Point<N, O>, C>,
) {
    match &p.repr {
        Repr::Coefs(cs) => {
            for (i, c) in cs.iter().enumerate() {
                if !c.is_zero() {
                    idx[depth] = i as u32;
                    map.insert(Point::from(*idx), *c);
                }
            }
        }
        Repr::Polys(ps) => {
            for (i, q) in ps.iter().enumerate() {
                idx[depth] = i as u32;
                collect_terms(q, depth + 1, idx, map);
            }
        }
    }

    idx[depth] = 0;
}

/// Polynomial comparison for equality after normalization: trailing zero
/// coefficients of one operand match absent coefficients of the other.
impl<C: Ring> PartialEq for MvPoly<C> {
    fn eq(&self, other: &Self) -> bool {
        match (&self.repr, &other.repr) {
            (Repr::Coefs(a), Repr::Coefs(b)) => {
                a.iter().zip_longest(b.iter()).all(|pair| match pair {
                    EitherOrBoth::Both(x, y) => x == y,
                    EitherOrBoth::Left(x) => x.is_zero(),
                    EitherOrBoth::Right(y) => y.is_zero(),
                })
            }
            (Repr::Polys(a), Repr::Polys(b)) => {
                a.iter().zip_longest(b.iter()).all(|pair| match pair {
                    EitherOrBoth::Both(x, y) => x == y,
                    EitherOrBoth::Left(x) => x.is_zero(),
                    EitherOrBoth::Right(y) => y.is_zero(),
                })
            }
            _ => false,
        }
    }
}

impl<C: Ring> Eq for MvPoly<C> {}

/// Multiply every coefficient by a scalar in place.
impl<C: Ring> MulAssign<C> for MvPoly<C> {
    fn mul_assign(&mut self, c: C) {
        match &mut self.repr {
            Repr::Coefs(cs) => {
                for x in cs.iter_mut() {
                    *x = *x * c;
                }
            }
            Repr::Polys(ps) => {
                for p in ps.iter_mut() {
                    *p *= c;
                }
            }
        }
    }
}

impl<C: Ring> Mul<C> for MvPoly<C> {
    type Output = MvPoly<C>;

    fn mul(mut self, c: C) -> Self::Output {
        self *= c;
        self
    }
}

/// Multiply the polynomial by the monomial x<sup>m</sup> in place: each
/// nesting level prepends its share of zeros after shifting the levels
/// below.
impl<C: Ring, const N: usize, O: MonomialOrder<N>> ShlAssign<&Point<N, O>> for MvPoly<C> {
    fn shl_assign(&mut self, m: &Point<N, O>) {
        debug_assert_eq!(self.vars(), N);
        self.shl_slice(&m[..]);
    }
}

impl<C: Ring, const N: usize, O: MonomialOrder<N>> Shl<&Point<N, O>> for MvPoly<C> {
    type Output = MvPoly<C>;

    fn shl(mut self, m: &Point<N, O>) -> Self::Output {
        self <<= m;
        self
    }
}

/// Polynomial addition: when the right operand is longer its tail is copied
/// over, then the common prefix is added elementwise.
impl<C: Ring> AddAssign<&MvPoly<C>> for MvPoly<C> {
    fn add_assign(&mut self, rhs: &MvPoly<C>) {
        match (&mut self.repr, &rhs.repr) {
            (Repr::Coefs(a), Repr::Coefs(b)) => {
                let common = a.len().min(b.len());
                for i in 0..common {
                    a[i] = a[i] + b[i];
                }
                a.extend_from_slice(&b[common..]);
            }
            (Repr::Polys(a), Repr::Polys(b)) => {
                let common = a.len().min(b.len());
                for i in 0..common {
                    a[i] += &b[i];
                }
                a.extend(b[common..].iter().cloned());
            }
            _ => panic!("adding polynomials of different variable counts"),
        }
    }
}

impl<C: Ring> Add<&MvPoly<C>> for MvPoly<C> {
    type Output = MvPoly<C>;

    fn add(mut self, rhs: &MvPoly<C>) -> Self::Output {
        self += rhs;
        self
    }
}

/// Polynomial subtraction, via the additive inverse of the multiplicative
/// identity.
impl<C: Ring> SubAssign<&MvPoly<C>> for MvPoly<C> {
    fn sub_assign(&mut self, rhs: &MvPoly<C>) {
        let mut neg = rhs.clone();
        neg *= -C::one();
        *self += &neg;
    }
}

impl<C: Ring> Sub<&MvPoly<C>> for MvPoly<C> {
    type Output = MvPoly<C>;

    fn sub(mut self, rhs: &MvPoly<C>) -> Self::Output {
        self -= rhs;
        self
    }
}

impl<C: Ring> Neg for MvPoly<C> {
    type Output = MvPoly<C>;

    fn neg(mut self) -> Self::Output {
        self *= -C::one();
        self
    }
}

/// Multi-index lookup into a finite array of ring elements.
///
/// Both polynomials and the decoder's syndrome table qualify; out-of-range
/// indices yield zero.
pub trait Sequence<C: Ring> {
    /// The element stored at the given multi-index, or zero outside the
    /// support.
    fn coef(&self, idx: &[u32]) -> C;
}

impl<C: Ring> Sequence<C> for MvPoly<C> {
    fn coef(&self, idx: &[u32]) -> C {
        MvPoly::coef(self, idx)
    }
}

impl<C: Ring, S: Sequence<C> + ?Sized> Sequence<C> for &S {
    fn coef(&self, idx: &[u32]) -> C {
        (**self).coef(idx)
    }
}

/// Convolution-like operation with immediate return of the `k`-th component
/// of the resulting virtual sequence: Σ f\[i\] · u\[i + k − deg f\] over all
/// points i up to `degf` in the monomial order.
///
/// `degf` tells the summation where to stop. Terms whose `u` index would
/// leave the lattice contribute nothing.
pub fn conv<C, S, const N: usize, O>(
    f: &MvPoly<C>,
    u: &S,
    degf: &Point<N, O>,
    k: &Point<N, O>,
) -> C
where
    C: Ring,
    S: Sequence<C>,
    O: MonomialOrder<N>,
{
    let mut acc = C::zero();
    let mut i = Point::<N, O>::origin();

    while i <= *degf {
        let mut idx = [0u32; N];
        let mut in_range = true;
        for d in 0..N {
            let v = i[d] as i64 + k[d] as i64 - degf[d] as i64;
            if v < 0 {
                in_range = false;
                break;
            }
            idx[d] = v as u32;
        }

        if in_range {
            acc = acc + f.coef(&i[..]) * u.coef(&idx);
        }

        i.advance();
    }

    acc
}

/// Generic output for mv-polynomials, format: `[[a b c] [e f]]`.
impl<C: Ring + fmt::Display> fmt::Display for MvPoly<C> {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "[")?;

        match &self.repr {
            Repr::Coefs(cs) => {
                for (i, c) in cs.iter().enumerate() {
                    if i > 0 {
                        write!(fmt, " ")?;
                    }
                    write!(fmt, "{}", c)?;
                }
            }
            Repr::Polys(ps) => {
                for (i, p) in ps.iter().enumerate() {
                    if i > 0 {
                        write!(fmt, " ")?;
                    }
                    write!(fmt, "{}", p)?;
                }
            }
        }

        write!(fmt, "]")
    }
}

/// Input polynomial from a string, format: `[[a b c] [e f]]`. An empty
/// bracket denotes the zero polynomial.
impl<C: Ring + FromStr> FromStr for MvPoly<C> {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parser = Parser {
            bytes: s.as_bytes(),
            pos: 0,
        };

        parser.skip_ws();
        let poly = parser.parse_node()?;
        parser.skip_ws();

        if parser.pos != parser.bytes.len() {
            return Err(ParseError::TrailingInput);
        }

        Ok(poly)
    }
}

struct Parser<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Parser<'a> {
    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn skip_ws(&mut self) {
        while matches!(self.peek(), Some(b) if b.is_ascii_whitespace()) {
            self.pos += 1;
        }
    }

    fn parse_node<C: Ring + FromStr>(&mut self) -> Result<MvPoly<C>, ParseError> {
        if self.peek() != Some(b'[') {
            return Err(ParseError::UnbalancedBracket);
        }
        self.pos += 1;
        self.skip_ws();

        if self.peek() == Some(b'[') {
            let mut children = Vec::new();
            while self.peek() == Some(b'[') {
                children.push(self.parse_node()?);
                self.skip_ws();
            }

            if self.peek() != Some(b']') {
                return Err(ParseError::UnbalancedBracket);
            }
            self.pos += 1;

            // Sibling zero polynomials may be written shallower than the
            // rest; promote them to the common depth.
            let vars = children.iter().map(MvPoly::vars).max().unwrap();
            let mut out = Vec::with_capacity(children.len());
            for child in children {
                if child.vars() == vars {
                    out.push(child);
                } else if child.is_zero() {
                    out.push(MvPoly::zero(vars));
                } else {
                    return Err(ParseError::RaggedNesting);
                }
            }

            Ok(MvPoly {
                repr: Repr::Polys(out),
            })
        } else {
            let mut coefs = Vec::new();
            loop {
                self.skip_ws();
                match self.peek() {
                    None => return Err(ParseError::UnbalancedBracket),
                    Some(b']') => {
                        self.pos += 1;
                        break;
                    }
                    Some(_) => {
                        let start = self.pos;
                        while matches!(
                            self.peek(),
                            Some(b) if !b.is_ascii_whitespace() && b != b']' && b != b'['
                        ) {
                            self.pos += 1;
                        }

                        let token = std::str::from_utf8(&self.bytes[start..self.pos])
                            .expect("ascii delimited token");
                        let c = token
                            .parse::<C>()
                            .map_err(|_| ParseError::Coefficient(token.to_string()))?;
                        coefs.push(c);
                    }
                }
            }

            if coefs.is_empty() {
                coefs.push(C::zero());
            }

            Ok(MvPoly {
                repr: Repr::Coefs(coefs),
            })
        }
    }
}

/// Prints a polynomial over a Galois field as powers of the primitive
/// element: `a^k X^(m, n) + …`.
pub struct PowerPolyPrinter<C, const N: usize, O: MonomialOrder<N>> {
    terms: BTreeMap<Point<N, O>, C>,
}

/// Build the power-form printer for the given polynomial under the chosen
/// monomial order.
pub fn power_printer<C: FieldExt, const N: usize, O: MonomialOrder<N>>(
    p: &MvPoly<C>,
) -> PowerPolyPrinter<C, N, O> {
    PowerPolyPrinter {
        terms: p.deg_coef_map(),
    }
}

impl<C: FieldExt, const N: usize, O: MonomialOrder<N>> fmt::Display for PowerPolyPrinter<C, N, O> {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.terms.is_empty() {
            return write!(fmt, "0");
        }

        for (i, (pt, c)) in self.terms.iter().enumerate() {
            if i > 0 {
                write!(fmt, " + ")?;
            }

            if *pt == Point::origin() {
                write!(fmt, "{}", PowerPrinter(*c))?;
            } else {
                if *c != C::one() {
                    write!(fmt, "{} ", PowerPrinter(*c))?;
                }
                write!(fmt, "X^{}", pt)?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::galois::{Gf2, Gf4};
    use crate::point::GradedAntilex;

    type Pt2 = Point<2>;

    fn poly2(s: &str) -> MvPoly<i64> {
        s.parse().unwrap()
    }

    #[test]
    fn test_io_one_variable() {
        let p: MvPoly<i64> = "[1 2 3]".parse().unwrap();
        assert_eq!(p.to_string(), "[1 2 3]");

        let empty: MvPoly<i64> = "[]".parse().unwrap();
        assert_eq!(empty.to_string(), "[0]");
        assert!(empty.is_zero());
    }

    #[test]
    fn test_io_many_variables() {
        let p = poly2("[[1 2 3] [3 2 1] [1]]");
        assert_eq!(p.to_string(), "[[1 2 3] [3 2 1] [1]]");

        let p: MvPoly<i64> = "[[[1 2] [3]] [[3] [2 1]] [[1]]]".parse().unwrap();
        assert_eq!(p.vars(), 3);
        assert_eq!(p.to_string(), "[[[1 2] [3]] [[3] [2 1]] [[1]]]");
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "[1 2".parse::<MvPoly<i64>>().unwrap_err(),
            ParseError::UnbalancedBracket
        );
        assert_eq!(
            "[1 x]".parse::<MvPoly<i64>>().unwrap_err(),
            ParseError::Coefficient("x".to_string())
        );
        assert_eq!(
            "[[1] [[1]]]".parse::<MvPoly<i64>>().unwrap_err(),
            ParseError::RaggedNesting
        );
        assert_eq!(
            "[1] junk".parse::<MvPoly<i64>>().unwrap_err(),
            ParseError::TrailingInput
        );
    }

    #[test]
    fn test_parse_promotes_zero_siblings() {
        let p: MvPoly<i64> = "[[[1]] []]".parse().unwrap();
        assert_eq!(p.vars(), 3);
        assert!(p.coef(&[1, 0, 0]) == 0);
        assert_eq!(p.coef(&[0, 0, 0]), 1);
    }

    #[test]
    fn test_subscript() {
        let p = poly2("[[3 2] [3 1] [1]]");
        assert_eq!(p.coef(&[0, 0]), 3);
        assert_eq!(p.coef(&[1, 0]), 3);
        assert_eq!(p.coef(&[0, 1]), 2);
        assert_eq!(p.coef(&[2, 0]), 1);
        assert_eq!(p.coef(&[1, 1]), 1);
        assert_eq!(p.coef(&[3, 0]), 0);
        // Far out of range in the nested position too.
        assert_eq!(p.coef(&[0, 9]), 0);
    }

    #[test]
    fn test_subscript_scan() {
        let p = poly2("[[0 1 0] [1 0] [0] [1]]");
        let got: Vec<i64> = Pt2::range_to(Pt2::from([2, 1]))
            .map(|i| p.coef(&i[..]))
            .collect();
        assert_eq!(got, [0, 1, 1, 0, 0, 0, 1]);
    }

    #[test]
    fn test_scalar_multiplication() {
        let p = poly2("[[1 0 1] [1 1]]");
        assert_eq!((p * 2).to_string(), "[[2 0 2] [2 2]]");
    }

    #[test]
    fn test_monomial_multiplication() {
        let p = poly2("[[1 0 1] [1 1]]");

        let q = p.clone() << &Pt2::from([0, 1]);
        assert_eq!(q.to_string(), "[[0 1 0 1] [0 1 1]]");

        let q = p.clone() << &Pt2::from([0, 0]);
        assert_eq!(q, p);

        let q = p.clone() << &Pt2::from([1, 0]);
        assert_eq!(q.to_string(), "[[0] [1 0 1] [1 1]]");

        // (f << m) << n == f << (m + n)
        let m = Pt2::from([1, 1]);
        let n = Pt2::from([2, 0]);
        let lhs = (p.clone() << &m) << &n;
        let rhs = p << &(m + n);
        assert_eq!(lhs, rhs);
    }

    #[test]
    fn test_summation() {
        let p = poly2("[[1 0 1] [1 1]]");
        let q = poly2("[[2 3] [0 2] [3]]");

        assert_eq!(p.clone() * 2, p.clone() + &p);
        assert_eq!((p.clone() + &q).to_string(), "[[3 3 1] [1 3] [3]]");
        // Commutativity.
        assert_eq!(p.clone() + &q, q.clone() + &p);

        // Associativity.
        let r = poly2("[[1] [0 0 5]]");
        let lhs = (p.clone() + &q) + &r;
        let rhs = p + &(q + &r);
        assert_eq!(lhs, rhs);
    }

    #[test]
    fn test_subtraction() {
        let p = poly2("[[1 0 1] [1 1]]");
        assert!((p.clone() - &p).is_zero());
        assert!((p.clone() + &(-p)).is_zero());
    }

    #[test]
    fn test_equality() {
        let zero = MvPoly::<i64>::zero(2);
        let q = poly2("[[0 0] [0]]");
        assert_eq!(zero, q);

        let p = poly2("[[1 2] [3]]");
        let padded = poly2("[[1 2 0] [3 0] [0]]");
        assert_eq!(p, padded);
        assert_ne!(p, q);
    }

    #[test]
    fn test_normalize() {
        let mut p = poly2("[[1 2 0] [3 0] [0]]");
        p.normalize();
        assert_eq!(p.to_string(), "[[1 2] [3]]");

        let mut z = poly2("[[0 0] [0]]");
        z.normalize();
        assert_eq!(z.to_string(), "[[0]]");
    }

    #[test]
    fn test_eval() {
        // 1 + 2y + 3x at (x, y) = (2, 3).
        let p = poly2("[[1 2] [3]]");
        assert_eq!(p.eval(&[2, 3]), 13);

        let p: MvPoly<i64> = "[2 0 1]".parse().unwrap();
        assert_eq!(p.eval(&[3]), 11);
    }

    // Follows Sakata's two-dimensional running example.
    #[test]
    fn test_convolution() {
        let u: MvPoly<Gf2> = "[[0 1 0 1 0] [1 1 0 0] [0 1 0] [0 0] [0] [1]]"
            .parse()
            .unwrap();
        let f: MvPoly<Gf2> = "[[1 1] [1]]".parse().unwrap();

        let degf = Pt2::from([0, 1]);
        assert!(conv(&f, &u, &degf, &Pt2::from([0, 2])).is_zero());
        assert_eq!(conv(&f, &u, &degf, &Pt2::from([2, 1])), Gf2::one());
    }

    #[test]
    fn test_deg_coef_map() {
        let p: MvPoly<i64> = "[3 2 3]".parse().unwrap();
        let map = p.deg_coef_map::<1, GradedAntilex>();
        let flat: Vec<(u32, i64)> = map.iter().map(|(pt, c)| (pt[0], *c)).collect();
        assert_eq!(flat, [(0, 3), (1, 2), (2, 3)]);

        let p = poly2("[[3 2] [3 1] [1]]");
        let map = p.deg_coef_map::<2, GradedAntilex>();
        let flat: Vec<([u32; 2], i64)> = map.iter().map(|(pt, c)| (**pt, *c)).collect();
        assert_eq!(
            flat,
            [
                ([0, 0], 3),
                ([1, 0], 3),
                ([0, 1], 2),
                ([2, 0], 1),
                ([1, 1], 1),
            ]
        );
    }

    #[test]
    fn test_power_printing() {
        // 1 + a^2 x over GF(4).
        let p: MvPoly<Gf4> = "[[1] [3]]".parse().unwrap();
        let printed = power_printer::<_, 2, GradedAntilex>(&p).to_string();
        assert_eq!(printed, "1 + a^2 X^(1, 0)");

        let zero = MvPoly::<Gf4>::zero(2);
        let printed = power_printer::<_, 2, GradedAntilex>(&zero).to_string();
        assert_eq!(printed, "0");
    }

    #[test]
    fn test_sequence_lookup_through_reference() {
        let u = poly2("[[1 2] [3]]");
        let r = &u;
        assert_eq!(Sequence::coef(&r, &[1, 0]), 3);
    }
}
