//! Minimal end-to-end example: plan a short flight leg with mixed units.
//!
//! Run with: cargo run --example quickstart

use sipp::literals::{ft, ft_min, kts, min, nmi};
use sipp::{Distance, Feet, Kilometer, KmPerHour, Meter, Minute, NauticalMile};

fn main() {
    // Cruise and leg length in navigation units
    let cruise = kts(140);
    let leg = nmi(35) + Distance::<f64, Kilometer>::new(4.0);
    let time_en_route = leg / cruise;
    println!(
        "{} at {} takes {:.1}",
        leg,
        cruise,
        time_en_route.to::<Minute>().count()
    );

    // Same cruise speed in km/h
    let cruise_km_h: KmPerHour = cruise.into();
    println!("cruise: {:.2}", cruise_km_h.count());

    // Top of descent: lose 6000 ft at 700 ft/min
    let to_lose = ft(6_000);
    let descent = ft_min(-700);
    let descent_time = to_lose / descent.abs();
    let ground_covered = cruise * descent_time;
    println!(
        "descent takes {:.1} min and covers {:.1} NM",
        descent_time.count(),
        ground_covered.to::<NauticalMile>().count()
    );

    // Integer storage: explicit, truncating conversion
    let runway: Distance<i32, Meter> = Distance::new(2_743);
    let runway_ft = runway.cast::<i32, sipp::Foot>();
    println!("runway: {} ({})", runway, runway_ft);

    assert!(Feet::new(9_000.0) > runway);
    assert!(min(8) < descent_time);
}
