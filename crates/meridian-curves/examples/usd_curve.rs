//! USD Curve Construction Example
//!
//! Builds a USD zero curve two ways:
//!
//! 1. **Interpolated Curve**: zero rates supplied directly at pillar times
//!    - No solve, useful for quick lookups
//!    - Does NOT reprice market instruments
//!
//! 2. **Bootstrapped Curve**: one knot per instrument, solved in sequence
//!    - Reprices every input instrument
//!    - Shown with linear and cubic spline interpolation
//!
//! Market Data: January 2, 2025
//!
//! | Instrument          | Quote  |
//! |---------------------|--------|
//! | Deposit 1M          | 4.30%  |
//! | Deposit 3M          | 4.32%  |
//! | Future Mar25/Jun25  | 95.75  |
//! | Future Jun25/Sep25  | 95.90  |
//! | Swap 2Y             | 3.95%  |
//! | Swap 5Y             | 3.80%  |
//! | Swap 10Y            | 3.95%  |
//! | Swap 30Y            | 4.10%  |
//!
//! Run with: cargo run --example usd_curve
//! Set RUST_LOG=meridian_curves=debug to see each solved knot.

use meridian_curves::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("===========================================");
    println!("  USD Curve Construction Example");
    println!("  Market Data: January 2, 2025");
    println!("===========================================\n");

    let today = Date::from_ymd(2025, 1, 2).unwrap();
    let date = |y, m, d| Date::from_ymd(y, m, d).unwrap();

    // =========================================================================
    // APPROACH 1: Interpolated Curve
    // =========================================================================
    println!("=========================================");
    println!("  APPROACH 1: Interpolated Curve");
    println!("=========================================\n");

    let simple = create_zero_curve(
        Currency::USD,
        today,
        vec![
            (1.0 / 12.0, 0.0430).into(),
            (0.25, 0.0432).into(),
            (2.0, 0.0392).into(),
            (5.0, 0.0376).into(),
            (10.0, 0.0392).into(),
            (30.0, 0.0410).into(),
        ],
        InterpolationMethod::Linear,
    )
    .expect("interpolated curve should build");

    println!("{:<8} {:<12} {:<12} {:<12}", "Tenor", "Zero (CC)", "Zero (SA)", "DF");
    println!("{}", "-".repeat(48));
    for years in [1, 3, 7, 15, 40] {
        let maturity = today.add_years(years).unwrap();
        let cc = simple.zero_rate(maturity).unwrap();
        let sa = simple
            .zero_rate_with(maturity, Compounding::SemiAnnual)
            .unwrap();
        let df = simple.discount_factor(maturity).unwrap();
        println!(
            "{:<8} {:<12.4} {:<12.4} {:<12.6}",
            format!("{years}Y"),
            cc * 100.0,
            sa * 100.0,
            df
        );
    }

    // =========================================================================
    // APPROACH 2: Bootstrapped Curve
    // =========================================================================
    let instruments = vec![
        MarketInstrument::deposit(today.add_months(1).unwrap(), 0.0430),
        MarketInstrument::deposit(today.add_months(3).unwrap(), 0.0432),
        MarketInstrument::future(date(2025, 3, 19), date(2025, 6, 18), 95.75),
        MarketInstrument::future(date(2025, 6, 18), date(2025, 9, 17), 95.90),
        MarketInstrument::swap(today.add_years(2).unwrap(), 0.0395),
        MarketInstrument::swap(today.add_years(5).unwrap(), 0.0380),
        MarketInstrument::swap(today.add_years(10).unwrap(), 0.0395),
        MarketInstrument::swap(today.add_years(30).unwrap(), 0.0410),
    ];

    for method in [InterpolationMethod::Linear, InterpolationMethod::CubicSpline] {
        println!("\n=========================================");
        println!("  APPROACH 2: Bootstrapped Curve ({method})");
        println!("=========================================\n");

        let result = CurveBootstrapper::new(Currency::USD, today)
            .with_interpolation(method)
            .add_instruments(instruments.clone())
            .bootstrap_validated()
            .expect("bootstrap should succeed");

        println!("{:<10} {:<12} {:<12}", "Time", "Zero (CC)", "DF");
        println!("{}", "-".repeat(34));
        for point in result.curve.points() {
            println!(
                "{:<10.4} {:<12.4} {:<12.6}",
                point.time,
                point.rate * 100.0,
                result.curve.discount_factor_at(point.time)
            );
        }

        let fwd = result
            .curve
            .forward_rate(today.add_years(5).unwrap(), today.add_years(10).unwrap())
            .unwrap();
        println!("\n5Y5Y forward (CC): {:.4}%\n", fwd * 100.0);
        println!("{result}");
    }
}
