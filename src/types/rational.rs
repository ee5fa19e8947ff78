// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use num::rational::BigRational as NumRat;
use num::traits::{One, Zero};
use serde_derive::{Deserialize, Serialize};
use std::cmp::Ord;
use std::fmt;
use std::ops::{Add, Sub};
use std::str::FromStr;

use crate::parsing::{parse_rational, ParseRationalError};

use super::BigInt;

/// Exact fraction, always in lowest terms with a positive denominator.
///
/// Equality is structural: two rationals that reduce to the same
/// fraction are identical. Comparison goes through the inner bigint
/// ratio, so a value sitting exactly on a bound never drifts off it the
/// way a float would.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Rational {
    inner: NumRat,
}

impl Rational {
    pub fn one() -> Rational {
        Rational {
            inner: NumRat::one(),
        }
    }

    pub fn zero() -> Rational {
        Rational {
            inner: NumRat::zero(),
        }
    }

    /// Builds `numerator/denominator`, reduced. Fails on a zero
    /// denominator rather than approximating or panicking.
    pub fn ratio(
        numerator: impl Into<BigInt>,
        denominator: impl Into<BigInt>,
    ) -> Result<Rational, ParseRationalError> {
        let denominator = denominator.into();
        if denominator.is_zero() {
            return Err(ParseRationalError::ZeroDenominator);
        }
        Ok(Rational {
            inner: NumRat::new(numerator.into().into_inner(), denominator.into_inner()),
        })
    }

    pub fn into_inner(self) -> NumRat {
        self.inner
    }

    pub fn numer(&self) -> BigInt {
        BigInt::from(self.inner.numer().clone())
    }

    pub fn denom(&self) -> BigInt {
        BigInt::from(self.inner.denom().clone())
    }

    /// True iff the denominator is one.
    pub fn is_integer(&self) -> bool {
        self.inner.is_integer()
    }

    /// Largest integer-valued rational not greater than this one.
    pub fn floor(&self) -> Rational {
        Rational {
            inner: self.inner.floor(),
        }
    }

    /// Smallest integer-valued rational not less than this one.
    pub fn ceil(&self) -> Rational {
        Rational {
            inner: self.inner.ceil(),
        }
    }

    pub fn lte(&self, other: &Rational) -> bool {
        self <= other
    }

    pub fn gte(&self, other: &Rational) -> bool {
        self >= other
    }
}

impl From<NumRat> for Rational {
    fn from(inner: NumRat) -> Rational {
        Rational { inner }
    }
}

impl From<BigInt> for Rational {
    fn from(value: BigInt) -> Rational {
        Rational {
            inner: NumRat::from_integer(value.into_inner()),
        }
    }
}

impl From<i64> for Rational {
    fn from(value: i64) -> Rational {
        Rational::from(BigInt::from(value))
    }
}

impl FromStr for Rational {
    type Err = ParseRationalError;

    fn from_str(input: &str) -> Result<Rational, ParseRationalError> {
        parse_rational(input)
    }
}

/// Canonical minimal form: integers render bare, everything else as
/// `numer/denom` in lowest terms. Mixed numbers are accepted on input
/// but never produced here.
impl fmt::Display for Rational {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.inner.is_integer() {
            write!(fmt, "{}", self.inner.numer())
        } else {
            write!(fmt, "{}/{}", self.inner.numer(), self.inner.denom())
        }
    }
}

impl<'a> Add for &'a Rational {
    type Output = Rational;

    fn add(self, rhs: &'a Rational) -> Rational {
        Rational {
            inner: &self.inner + &rhs.inner,
        }
    }
}

impl<'a> Sub for &'a Rational {
    type Output = Rational;

    fn sub(self, rhs: &'a Rational) -> Rational {
        Rational {
            inner: &self.inner - &rhs.inner,
        }
    }
}
