//! Complex number using DsFloat components.

use crate::DsFloat;

/// Complex number using DsFloat components.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DsComplex {
    pub re: DsFloat,
    pub im: DsFloat,
}

impl DsComplex {
    /// Zero constant.
    pub const ZERO: Self = Self {
        re: DsFloat::ZERO,
        im: DsFloat::ZERO,
    };

    pub fn new(re: DsFloat, im: DsFloat) -> Self {
        Self { re, im }
    }

    /// Build from separate high and low pairs, as uploaded by a host:
    /// `high = [re.head, im.head]`, `low = [re.tail, im.tail]`.
    pub fn from_parts(high: [f32; 2], low: [f32; 2]) -> Self {
        Self {
            re: DsFloat::new(high[0], low[0]),
            im: DsFloat::new(high[1], low[1]),
        }
    }

    /// Create from f32 components (tails are zero).
    #[inline]
    pub fn from_f32_pair(re: f32, im: f32) -> Self {
        Self {
            re: DsFloat::from_f32(re),
            im: DsFloat::from_f32(im),
        }
    }

    pub fn from_f64_pair(re: f64, im: f64) -> Self {
        Self {
            re: DsFloat::from_f64(re),
            im: DsFloat::from_f64(im),
        }
    }

    /// Split back into `(high, low)` pairs.
    pub fn to_parts(&self) -> ([f32; 2], [f32; 2]) {
        (
            [self.re.head, self.im.head],
            [self.re.tail, self.im.tail],
        )
    }

    pub fn to_f64_pair(&self) -> (f64, f64) {
        (self.re.to_f64(), self.im.to_f64())
    }

    /// Add two complex numbers.
    #[inline]
    pub fn add(&self, other: &Self) -> Self {
        Self {
            re: self.re.add(&other.re),
            im: self.im.add(&other.im),
        }
    }

    /// Subtract other from self.
    #[inline]
    pub fn sub(&self, other: &Self) -> Self {
        Self {
            re: self.re.sub(&other.re),
            im: self.im.sub(&other.im),
        }
    }

    /// Add an f32 offset to each component, keeping full DS precision of self.
    #[inline]
    pub fn add_offset(&self, dx: f32, dy: f32) -> Self {
        Self {
            re: self.re.add_f32(dx),
            im: self.im.add_f32(dy),
        }
    }

    /// Multiply two complex numbers: (a + bi)(c + di) = (ac - bd) + (ad + bc)i
    #[inline]
    pub fn mul(&self, other: &Self) -> Self {
        Self {
            re: self.re.mul(&other.re).sub(&self.im.mul(&other.im)),
            im: self.re.mul(&other.im).add(&self.im.mul(&other.re)),
        }
    }

    /// Square: (a + bi)² = (a² - b²) + 2abi
    #[inline]
    pub fn square(&self) -> Self {
        Self {
            re: self.re.square().sub(&self.im.square()),
            im: self.re.mul(&self.im).double(),
        }
    }

    /// Squared magnitude from the heads only. Enough for escape tests,
    /// where the bound is many orders of magnitude above the tails.
    #[inline]
    pub fn norm_sq(&self) -> f32 {
        self.re.head * self.re.head + self.im.head * self.im.head
    }
}
