// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The free-form number grammar.
//!
//! Accepts an optional leading sign followed by one of:
//!
//! - a plain integer, `42`
//! - a decimal, `12.5` or `.5`
//! - a fraction, `4/3`
//! - a mixed number, `1 1/3`
//!
//! Surrounding whitespace is tolerated. Everything else is an error;
//! in particular, garbage never parses as zero.

use num::bigint::BigInt as NumInt;
use num::rational::BigRational as NumRat;
use num::traits::Zero;
use serde_derive::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;
use std::iter::Peekable;
use std::str::Chars;

use crate::types::{BigInt, Rational};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParseRationalError {
    /// Empty or whitespace-only input.
    Empty,
    /// Input that does not match the grammar.
    Malformed(String),
    /// A fraction with a zero denominator.
    ZeroDenominator,
}

impl fmt::Display for ParseRationalError {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            ParseRationalError::Empty => write!(fmt, "Empty input"),
            ParseRationalError::Malformed(ref reason) => {
                write!(fmt, "Malformed number literal: {}", reason)
            }
            ParseRationalError::ZeroDenominator => write!(fmt, "Denominator is zero"),
        }
    }
}

impl Error for ParseRationalError {}

fn malformed(reason: &str) -> ParseRationalError {
    ParseRationalError::Malformed(reason.to_owned())
}

struct Scanner<'a> {
    iter: Peekable<Chars<'a>>,
}

impl<'a> Scanner<'a> {
    fn new(input: &'a str) -> Scanner<'a> {
        Scanner {
            iter: input.chars().peekable(),
        }
    }

    fn peek(&mut self) -> Option<char> {
        self.iter.peek().copied()
    }

    fn bump(&mut self) -> Option<char> {
        self.iter.next()
    }

    fn at_end(&mut self) -> bool {
        self.iter.peek().is_none()
    }

    fn skip_spaces(&mut self) {
        while let Some(c) = self.peek() {
            if !c.is_whitespace() {
                break;
            }
            self.bump();
        }
    }

    /// Consumes a leading `+` or `-` if present. Returns true for `-`.
    fn take_sign(&mut self) -> bool {
        match self.peek() {
            Some('-') => {
                self.bump();
                true
            }
            Some('+') => {
                self.bump();
                false
            }
            _ => false,
        }
    }

    /// Consumes a run of ASCII digits. `None` if the next character is
    /// not a digit.
    fn take_digits(&mut self) -> Option<String> {
        let mut buf = String::new();
        while let Some(c) = self.peek() {
            match c {
                '0'..='9' => {
                    buf.push(c);
                    self.bump();
                }
                _ => break,
            }
        }
        if buf.is_empty() {
            None
        } else {
            Some(buf)
        }
    }
}

fn digits(text: &str) -> Result<NumInt, ParseRationalError> {
    BigInt::from_str_radix(text, 10)
        .map(BigInt::into_inner)
        .map_err(|_err| malformed("invalid digits"))
}

/// `integer.frac` as an exact fraction over a power of ten.
fn decimal(integer: Option<&str>, frac: &str) -> Result<NumRat, ParseRationalError> {
    let whole = match integer {
        Some(text) => digits(text)?,
        None => NumInt::zero(),
    };
    let numer = digits(frac)?;
    let denom = BigInt::from(10u64).pow(frac.len() as u32).into_inner();
    Ok(NumRat::from_integer(whole) + NumRat::new(numer, denom))
}

fn fraction(numer: &str, denom: &str) -> Result<NumRat, ParseRationalError> {
    let numer = digits(numer)?;
    let denom = digits(denom)?;
    if denom.is_zero() {
        return Err(ParseRationalError::ZeroDenominator);
    }
    Ok(NumRat::new(numer, denom))
}

pub fn parse_rational(input: &str) -> Result<Rational, ParseRationalError> {
    let mut scan = Scanner::new(input);
    scan.skip_spaces();
    if scan.at_end() {
        return Err(ParseRationalError::Empty);
    }
    let negative = scan.take_sign();
    let integer = scan.take_digits();
    let value = match scan.peek() {
        Some('.') => {
            scan.bump();
            let frac = scan
                .take_digits()
                .ok_or_else(|| malformed("no digits after decimal point"))?;
            decimal(integer.as_deref(), &frac)?
        }
        Some('/') => {
            scan.bump();
            let numer = integer.ok_or_else(|| malformed("missing numerator"))?;
            let denom = scan
                .take_digits()
                .ok_or_else(|| malformed("missing denominator"))?;
            fraction(&numer, &denom)?
        }
        Some(c) if c.is_whitespace() => {
            let whole = digits(&integer.ok_or_else(|| malformed("expected digits"))?)?;
            scan.skip_spaces();
            if scan.at_end() {
                NumRat::from_integer(whole)
            } else {
                // Mixed number: "whole numer/denom".
                let numer = scan
                    .take_digits()
                    .ok_or_else(|| malformed("expected fraction after whole part"))?;
                match scan.bump() {
                    Some('/') => (),
                    _ => return Err(malformed("expected '/' in mixed number")),
                }
                let denom = scan
                    .take_digits()
                    .ok_or_else(|| malformed("missing denominator"))?;
                NumRat::from_integer(whole) + fraction(&numer, &denom)?
            }
        }
        None => {
            let whole = digits(&integer.ok_or_else(|| malformed("expected digits"))?)?;
            NumRat::from_integer(whole)
        }
        Some(_) => return Err(malformed("unexpected character")),
    };
    scan.skip_spaces();
    if !scan.at_end() {
        return Err(malformed("trailing characters"));
    }
    let value = if negative { -value } else { value };
    Ok(Rational::from(value))
}
