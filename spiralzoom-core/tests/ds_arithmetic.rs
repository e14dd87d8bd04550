//! Tests for double-single arithmetic against f32 and f64 references.

use spiralzoom_core::{DsComplex, DsFloat};

const SAMPLES: [f32; 8] = [0.1, -0.75, 1.5, 3.0e-4, -2.25, 7.0, 0.333_333_34, -1.0e-3];

#[test]
fn zero_tail_addition_matches_f32_head() {
    for &a in &SAMPLES {
        for &b in &SAMPLES {
            let sum = DsFloat::from_f32(a).add(&DsFloat::from_f32(b));
            assert_eq!(sum.head, a + b, "{} + {}", a, b);
        }
    }
}

#[test]
fn zero_tail_multiplication_matches_f32_head() {
    for &a in &SAMPLES {
        for &b in &SAMPLES {
            let product = DsFloat::from_f32(a).mul(&DsFloat::from_f32(b));
            assert_eq!(product.head, a * b, "{} * {}", a, b);
        }
    }
}

#[test]
fn zero_tail_operations_are_exact_in_f64() {
    // head + tail carries the exact f32 sum and product
    for &a in &SAMPLES {
        for &b in &SAMPLES {
            let sum = DsFloat::from_f32(a).add(&DsFloat::from_f32(b));
            assert_eq!(sum.to_f64(), a as f64 + b as f64);

            let product = DsFloat::from_f32(a).mul(&DsFloat::from_f32(b));
            assert_eq!(product.to_f64(), a as f64 * b as f64);
        }
    }
}

#[test]
fn tail_distinguishes_values_with_equal_heads() {
    let x = DsFloat::new(1.0, 1.0e-9);
    let y = DsFloat::ONE;
    assert_eq!(x.head, y.head);

    let diff = x.sub(&y);
    assert!(
        (diff.to_f64() - 1.0e-9).abs() < 1.0e-16,
        "difference {} should be 1e-9",
        diff.to_f64()
    );
}

#[test]
fn chained_operations_beat_f32() {
    // x ← x² + c on the attracting branch of the real axis, against f64
    let mut ds_worst = 0.0f64;
    let mut f32_worst = 0.0f64;

    for k in 1..=10 {
        let c = 0.023 * k as f64;
        let c_ds = DsFloat::from_f64(c);
        let mut exact = c;
        let mut single = c as f32;
        let mut ds = c_ds;

        for _ in 0..20 {
            exact = exact * exact + c;
            single = single * single + c as f32;
            ds = ds.square().add(&c_ds);
        }

        ds_worst = ds_worst.max((ds.to_f64() - exact).abs());
        f32_worst = f32_worst.max((single as f64 - exact).abs());
    }

    assert!(ds_worst < 1.0e-12, "DS error {} too large", ds_worst);
    assert!(
        f32_worst > 1.0e-9,
        "f32 error {} unexpectedly small",
        f32_worst
    );
}

#[test]
fn decimal_parse_keeps_digits_beyond_f32() {
    let a = DsFloat::from_decimal_str("0.1000000001").unwrap();
    let b = DsFloat::from_decimal_str("0.1").unwrap();
    assert_eq!(a.head, b.head);
    assert!((a.sub(&b).to_f64() - 1.0e-10).abs() < 1.0e-15);
}

#[test]
fn decimal_parse_rejects_garbage() {
    assert!(DsFloat::from_decimal_str("not a number").is_err());
    assert!(DsFloat::from_decimal_str("").is_err());
}

#[test]
fn complex_square_tracks_f64() {
    let mut z = DsComplex::from_f64_pair(-0.101_096_363_845_62, 0.956_286_510_809_14);
    let c = z;
    let (mut re, mut im) = z.to_f64_pair();
    let (c_re, c_im) = (re, im);

    for _ in 0..8 {
        z = z.square().add(&c);
        let next_re = re * re - im * im + c_re;
        im = 2.0 * re * im + c_im;
        re = next_re;
    }

    let (ds_re, ds_im) = z.to_f64_pair();
    assert!((ds_re - re).abs() < 1.0e-8, "re {} vs {}", ds_re, re);
    assert!((ds_im - im).abs() < 1.0e-8, "im {} vs {}", ds_im, im);
}

#[test]
fn mul_f32_folds_tail_into_product() {
    for (x, k) in [(0.1f64, 3.0f32), (1.0 / 3.0, 7.25), (-0.956_286_510_809_14, 0.001)] {
        let ds = DsFloat::from_f64(x);
        assert!(ds.tail != 0.0, "{} should carry a tail", x);

        let product = ds.mul_f32(k).to_f64();
        let exact = x * k as f64;
        assert!(
            (product - exact).abs() < 1.0e-14 * exact.abs(),
            "{} * {} = {}, expected {}",
            x,
            k,
            product,
            exact
        );
    }
}

#[test]
fn self_subtraction_is_zero() {
    for x in [0.1f64, -2.5e-3, 0.956_286_510_809_14] {
        let ds = DsFloat::from_f64(x);
        assert!(!ds.is_zero());
        assert!(ds.sub(&ds).is_zero(), "{} - {} should be zero", x, x);
    }
    assert!(DsFloat::ZERO.is_zero());
}

#[test]
fn complex_sub_tracks_f64() {
    let a = DsComplex::from_f64_pair(-0.101_096_363_845_62, 0.956_286_510_809_14);
    let b = DsComplex::from_f64_pair(-0.101_096_363_8, 0.956_286_51);
    let (re, im) = a.sub(&b).to_f64_pair();
    let (a_re, a_im) = a.to_f64_pair();
    let (b_re, b_im) = b.to_f64_pair();

    // nearby values, so the f64 differences are exact
    assert!((re - (a_re - b_re)).abs() < 1.0e-14, "re = {}", re);
    assert!((im - (a_im - b_im)).abs() < 1.0e-14, "im = {}", im);
    assert!((im - 8.0914e-10).abs() < 1.0e-13, "im = {}", im);
    assert!(a.sub(&a).re.is_zero() && a.sub(&a).im.is_zero());
}
