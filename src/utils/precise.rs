//! Precise - Exact decimal arithmetic for quantum conversion
//!
//! Human-readable amounts are kept as a scaled `BigInt` so that no precision is
//! lost between parsing, scaling by an asset resolution and rounding to an
//! integer number of quantums.

use num_bigint::BigInt;
use num_traits::{Signed, Zero};
use std::fmt;
use std::str::FromStr;

/// Base for decimal calculations (10)
fn base() -> BigInt {
    BigInt::from(10)
}

fn pow10(exponent: u32) -> BigInt {
    base().pow(exponent)
}

/// Largest accepted decimal scale, in either direction
///
/// Amounts signed by StarkEx fit in 64 to 250 bits, so anything scaled further is out of
/// range regardless of its digits. The bound also caps the size of `10^scale`.
pub const MAX_DECIMALS: u32 = 512;

fn checked_scale(decimals: Option<i32>) -> Option<i32> {
    decimals.filter(|d| d.unsigned_abs() <= MAX_DECIMALS)
}

/// Rounding policy used when converting a decimal to an integer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rounding {
    /// Fail on any fractional remainder
    Exact,
    /// Round towards negative infinity
    Floor,
    /// Round towards positive infinity
    Ceil,
}

/// Decimal number with arbitrary precision
///
/// The value is `integer * 10^(-decimals)`.
#[derive(Clone, Debug)]
pub struct Precise {
    /// The integer representation (scaled by 10^decimals)
    pub integer: BigInt,
    /// Number of decimal places (may be negative)
    pub decimals: i32,
}

impl Precise {
    /// Create a new Precise from BigInt and decimal count
    pub fn new(integer: BigInt, decimals: i32) -> Self {
        Precise { integer, decimals }
    }

    /// Parse a decimal string such as `"12.0000003"`, `"-1.5"` or `"1.5e-3"`.
    ///
    /// Returns `None` for anything that is not a plain decimal number, or whose scale
    /// exceeds [`MAX_DECIMALS`].
    pub fn parse(number: &str) -> Option<Self> {
        let number = number.trim().to_lowercase();

        // Handle scientific notation
        let (num_part, modifier) = match number.find('e') {
            Some(e_pos) => {
                let (num, exp) = number.split_at(e_pos);
                let modifier: i32 = exp[1..].parse().ok()?;
                (num.to_string(), modifier)
            },
            None => (number, 0),
        };

        let (negative, digits) = match num_part.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, num_part.strip_prefix('+').unwrap_or(&num_part)),
        };

        let (whole, fraction) = match digits.split_once('.') {
            Some((w, f)) => (w, f),
            None => (digits, ""),
        };
        if whole.is_empty() && fraction.is_empty() {
            return None;
        }
        if !whole.chars().chain(fraction.chars()).all(|c| c.is_ascii_digit()) {
            return None;
        }

        let decimals = i32::try_from(fraction.len()).ok()?;
        let mut integer = BigInt::from_str(&format!("0{whole}{fraction}")).ok()?;
        if negative {
            integer = -integer;
        }

        Some(Precise {
            integer,
            decimals: checked_scale(decimals.checked_sub(modifier))?,
        })
    }

    /// Create a Precise holding an integer value
    pub fn from_integer(integer: BigInt) -> Self {
        Precise::new(integer, 0)
    }

    /// Multiply two Precise numbers
    ///
    /// `None` when the combined scale exceeds [`MAX_DECIMALS`].
    pub fn mul(&self, other: &Precise) -> Option<Precise> {
        let decimals = checked_scale(self.decimals.checked_add(other.decimals))?;
        Some(Precise::new(&self.integer * &other.integer, decimals))
    }

    /// Multiply by `10^places` (negative places divide)
    ///
    /// `None` when the resulting scale exceeds [`MAX_DECIMALS`].
    pub fn shift(&self, places: i32) -> Option<Precise> {
        let decimals = checked_scale(self.decimals.checked_sub(places))?;
        Some(Precise::new(self.integer.clone(), decimals))
    }

    /// True for values strictly below zero
    pub fn is_negative(&self) -> bool {
        self.integer.is_negative()
    }

    /// Convert to an integer using the given rounding policy.
    ///
    /// Returns `None` only for [`Rounding::Exact`] when a fractional remainder exists.
    pub fn to_integer(&self, rounding: Rounding) -> Option<BigInt> {
        if self.decimals <= 0 {
            return Some(&self.integer * pow10(self.decimals.unsigned_abs()));
        }

        let divisor = pow10(self.decimals.unsigned_abs());
        // BigInt division truncates towards zero and the remainder takes the dividend's sign
        let quotient = &self.integer / &divisor;
        let remainder = &self.integer % &divisor;

        if remainder.is_zero() {
            return Some(quotient);
        }

        match rounding {
            Rounding::Exact => None,
            Rounding::Floor if remainder.is_negative() => Some(quotient - 1),
            Rounding::Floor => Some(quotient),
            Rounding::Ceil if remainder.is_positive() => Some(quotient + 1),
            Rounding::Ceil => Some(quotient),
        }
    }

    /// Reduce the number by removing trailing zeros
    pub fn reduce(&mut self) {
        if self.integer.is_zero() {
            self.decimals = 0;
            return;
        }

        let ten = base();
        while (&self.integer % &ten).is_zero() {
            self.integer /= &ten;
            self.decimals -= 1;
        }
    }

    /// Check equality with another Precise
    pub fn equals(&self, other: &Precise) -> bool {
        let mut a = self.clone();
        let mut b = other.clone();
        a.reduce();
        b.reduce();
        a.decimals == b.decimals && a.integer == b.integer
    }

    /// Convert to the shortest plain decimal string (no exponent)
    pub fn to_str_repr(&self) -> String {
        let mut copy = self.clone();
        copy.reduce();

        let sign = if copy.integer.is_negative() { "-" } else { "" };
        let abs_string = copy.integer.abs().to_string();

        if copy.decimals <= 0 {
            let zeros = "0".repeat(copy.decimals.unsigned_abs() as usize);
            return format!("{sign}{abs_string}{zeros}");
        }

        let decimals = copy.decimals as usize;
        let padded = format!("{:0>width$}", abs_string, width = decimals + 1);
        let (integer_part, decimal_part) = padded.split_at(padded.len() - decimals);
        format!("{sign}{integer_part}.{decimal_part}")
    }
}

impl fmt::Display for Precise {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str_repr())
    }
}

impl PartialEq for Precise {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl Eq for Precise {}
