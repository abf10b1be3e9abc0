//! Property tests for the interpolation methods.

use approx::assert_relative_eq;
use meridian_math::interpolation::{
    CubicSpline, ExtrapolationPolicy, InterpolationMethod, Interpolator, LinearInterpolator,
};
use proptest::prelude::*;

/// Strictly increasing knots with rate-like values.
fn arb_points() -> impl Strategy<Value = (Vec<f64>, Vec<f64>)> {
    prop::collection::vec((0.05f64..2.0, -0.01f64..0.08), 1..12).prop_map(|steps| {
        let mut x = 0.0;
        let mut xs = Vec::with_capacity(steps.len());
        let mut ys = Vec::with_capacity(steps.len());
        for (dx, y) in steps {
            x += dx;
            xs.push(x);
            ys.push(y);
        }
        (xs, ys)
    })
}

proptest! {
    #[test]
    fn prop_every_method_reproduces_knots((xs, ys) in arb_points()) {
        for method in [InterpolationMethod::Linear, InterpolationMethod::CubicSpline] {
            let interp = method.build(xs.clone(), ys.clone()).unwrap();
            for (x, y) in xs.iter().zip(&ys) {
                prop_assert!((interp.interpolate(*x) - y).abs() < 1e-10);
            }
        }
    }

    #[test]
    fn prop_linear_stays_within_neighbours((xs, ys) in arb_points(), frac in 0.0f64..1.0) {
        prop_assume!(xs.len() >= 2);
        let interp = LinearInterpolator::new(xs.clone(), ys.clone()).unwrap();
        for i in 0..xs.len() - 1 {
            let x = xs[i] + frac * (xs[i + 1] - xs[i]);
            let y = interp.interpolate(x);
            let lo = ys[i].min(ys[i + 1]);
            let hi = ys[i].max(ys[i + 1]);
            prop_assert!(y >= lo - 1e-12 && y <= hi + 1e-12);
        }
    }

    #[test]
    fn prop_linear_flat_outside((xs, ys) in arb_points(), beyond in 0.01f64..50.0) {
        let interp = LinearInterpolator::new(xs.clone(), ys.clone()).unwrap();
        prop_assert_eq!(interp.interpolate(xs[0] - beyond), ys[0]);
        prop_assert_eq!(interp.interpolate(xs[xs.len() - 1] + beyond), ys[ys.len() - 1]);
    }

    #[test]
    fn prop_spline_is_c1_at_interior_knots((xs, ys) in arb_points()) {
        prop_assume!(xs.len() >= 3);
        let spline = CubicSpline::new(xs.clone(), ys).unwrap();
        let eps = 1e-9;
        for &x in &xs[1..xs.len() - 1] {
            prop_assert!((spline.interpolate(x - eps) - spline.interpolate(x + eps)).abs() < 1e-7);
            prop_assert!((spline.derivative(x - eps) - spline.derivative(x + eps)).abs() < 1e-5);
        }
    }
}

#[test]
fn test_midpoint_is_mean_of_neighbours() {
    let xs = vec![0.25, 1.0, 2.0, 5.0, 10.0];
    let ys = vec![0.040, 0.042, 0.045, 0.047, 0.050];
    let interp = LinearInterpolator::new(xs.clone(), ys.clone()).unwrap();

    for i in 0..xs.len() - 1 {
        let mid = 0.5 * (xs[i] + xs[i + 1]);
        assert_relative_eq!(interp.interpolate(mid), 0.5 * (ys[i] + ys[i + 1]), epsilon = 1e-15);
    }
}

#[test]
fn test_policies_are_reported() {
    let xs = vec![1.0, 2.0, 3.0];
    let ys = vec![0.01, 0.02, 0.015];
    assert_eq!(
        InterpolationMethod::Linear.build(xs.clone(), ys.clone()).unwrap().extrapolation(),
        ExtrapolationPolicy::Flat
    );
    assert_eq!(
        InterpolationMethod::CubicSpline.build(xs, ys).unwrap().extrapolation(),
        ExtrapolationPolicy::BoundaryPolynomial
    );
}
