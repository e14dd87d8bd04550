//! Double-single float: ~48-bit mantissa precision from two f32 values.
//!
//! The value is `head + tail`, where `head` is the f32 nearest to the value
//! and `tail` is the rounding error left over. Arithmetic is built on the
//! error-free transformations `two_sum` and `two_prod`, so chained operations
//! keep roughly twice the significant bits of plain f32 arithmetic.

use crate::error::ConfigError;
use dashu_base::Approximation;
use dashu_float::round::mode::HalfAway;
use dashu_float::{DBig, FBig};

/// Dekker split constant for f32 mantissas: 2^12 + 1.
pub const SPLITTER: f32 = 4097.0;

/// Bits kept when converting decimal strings before splitting.
const PARSE_PRECISION_BITS: usize = 128;

/// Double-single float. Value = head + tail.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DsFloat {
    /// Nearest f32 to the represented value
    pub head: f32,
    /// Rounding error of head, |tail| ≤ 0.5 × ulp(head)
    pub tail: f32,
}

impl DsFloat {
    /// Zero constant.
    pub const ZERO: Self = Self {
        head: 0.0,
        tail: 0.0,
    };

    /// One constant.
    pub const ONE: Self = Self {
        head: 1.0,
        tail: 0.0,
    };

    /// Build from explicit parts. Parts are renormalized so head stays the
    /// rounded sum.
    #[inline]
    pub fn new(head: f32, tail: f32) -> Self {
        let (head, tail) = quick_two_sum(head, tail);
        Self { head, tail }
    }

    /// Check if value is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.head == 0.0
    }

    /// Create from f32 value (exact, tail is zero).
    #[inline]
    pub fn from_f32(val: f32) -> Self {
        Self {
            head: val,
            tail: 0.0,
        }
    }

    /// Create from f64, splitting the 53-bit mantissa into head + tail.
    pub fn from_f64(val: f64) -> Self {
        let head = val as f32;
        if !head.is_finite() {
            return Self { head, tail: 0.0 };
        }
        let tail = (val - head as f64) as f32;
        Self::new(head, tail)
    }

    /// Parse a decimal string without passing through f64.
    ///
    /// Allows target coordinates with more digits than f64 carries; the
    /// head is the f32 nearest to the decimal value and the tail is the
    /// f32 nearest to what remains.
    pub fn from_decimal_str(val: &str) -> Result<Self, ConfigError> {
        let invalid = |reason: String| ConfigError::InvalidCoordinate {
            value: val.to_string(),
            reason,
        };

        let dbig = val
            .trim()
            .parse::<DBig>()
            .map_err(|e| invalid(format!("{}", e)))?;

        let exact: FBig<HalfAway> =
            match dbig.with_base_and_precision::<2>(PARSE_PRECISION_BITS) {
                Approximation::Exact(v) => v,
                Approximation::Inexact(v, _) => v,
            };

        let head = exact.to_f32().value();
        if !head.is_finite() {
            return Err(invalid("out of f32 range".to_string()));
        }
        if head == 0.0 {
            return Ok(Self::ZERO);
        }

        let head_big = FBig::<HalfAway>::try_from(head)
            .map_err(|e| invalid(format!("{:?}", e)))?
            .with_precision(PARSE_PRECISION_BITS)
            .value();
        let tail = (&exact - &head_big).to_f32().value();

        Ok(Self::new(head, tail))
    }

    /// Convert to f32 (drops the tail).
    #[inline]
    pub fn to_f32(&self) -> f32 {
        self.head
    }

    /// Convert to f64 (exact for normal values).
    #[inline]
    pub fn to_f64(&self) -> f64 {
        self.head as f64 + self.tail as f64
    }

    /// Negation (exact).
    #[inline]
    pub fn neg(&self) -> Self {
        Self {
            head: -self.head,
            tail: -self.tail,
        }
    }

    /// DS addition: two_sum of heads, fold in both tails, renormalize.
    #[inline]
    pub fn add(&self, other: &Self) -> Self {
        let (s, e) = two_sum(self.head, other.head);
        let e = e + (self.tail + other.tail);
        let (head, tail) = quick_two_sum(s, e);
        Self { head, tail }
    }

    /// DS subtraction, defined as addition of the negation.
    #[inline]
    pub fn sub(&self, other: &Self) -> Self {
        self.add(&other.neg())
    }

    /// DS multiplication: two_prod of heads, fold in cross terms, renormalize.
    #[inline]
    pub fn mul(&self, other: &Self) -> Self {
        let (p, e) = two_prod(self.head, other.head);
        let e = e + (self.head * other.tail + self.tail * other.head);
        let (head, tail) = quick_two_sum(p, e);
        Self { head, tail }
    }

    /// Square (saves one cross term over `mul`).
    #[inline]
    pub fn square(&self) -> Self {
        let (p, e) = two_prod(self.head, self.head);
        let e = e + 2.0 * self.head * self.tail;
        let (head, tail) = quick_two_sum(p, e);
        Self { head, tail }
    }

    /// Add a plain f32.
    #[inline]
    pub fn add_f32(&self, other: f32) -> Self {
        let (s, e) = two_sum(self.head, other);
        let (head, tail) = quick_two_sum(s, e + self.tail);
        Self { head, tail }
    }

    /// Multiply by a plain f32.
    #[inline]
    pub fn mul_f32(&self, other: f32) -> Self {
        let (p, e) = two_prod(self.head, other);
        let (head, tail) = quick_two_sum(p, e + self.tail * other);
        Self { head, tail }
    }

    /// Multiply by two (exact: scales both parts).
    #[inline]
    pub fn double(&self) -> Self {
        Self {
            head: self.head * 2.0,
            tail: self.tail * 2.0,
        }
    }
}

/// Knuth two-sum: `a + b = s + err` exactly, for any ordering of |a|, |b|.
#[inline]
pub fn two_sum(a: f32, b: f32) -> (f32, f32) {
    let s = a + b;
    let bb = s - a;
    let err = (a - (s - bb)) + (b - bb);
    (s, err)
}

/// Fast two-sum, exact when |a| ≥ |b| (or a is zero).
#[inline]
pub fn quick_two_sum(a: f32, b: f32) -> (f32, f32) {
    let s = a + b;
    let err = b - (s - a);
    (s, err)
}

/// Dekker split of an f32 into two 12-bit halves: `a = hi + lo`.
#[inline]
pub fn split(a: f32) -> (f32, f32) {
    let t = SPLITTER * a;
    let hi = t - (t - a);
    let lo = a - hi;
    (hi, lo)
}

/// Dekker two-product: `a × b = p + err` exactly (barring overflow).
#[inline]
pub fn two_prod(a: f32, b: f32) -> (f32, f32) {
    let p = a * b;
    let (a_hi, a_lo) = split(a);
    let (b_hi, b_lo) = split(b);
    let err = ((a_hi * b_hi - p) + a_hi * b_lo + a_lo * b_hi) + a_lo * b_lo;
    (p, err)
}
