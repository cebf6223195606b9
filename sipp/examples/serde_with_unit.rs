//! Serializing quantities, with and without their unit symbol.
//!
//! Run with: cargo run --example serde_with_unit --features serde

use serde::{Deserialize, Serialize};
use sipp::{Feet, FeetPerMinute, Knots, Minutes, NauticalMiles};

#[derive(Serialize, Deserialize, Debug)]
struct Leg {
    from: String,
    to: String,

    // Written as {"value": .., "unit": ".."}
    #[serde(with = "sipp::serde_with_unit")]
    distance: NauticalMiles,
    #[serde(with = "sipp::serde_with_unit")]
    ground_speed: Knots,

    // Written as bare numbers
    altitude: Feet,
    climb_rate: FeetPerMinute,
    estimated: Minutes,
}

fn main() -> Result<(), serde_json::Error> {
    let leg = Leg {
        from: "LEBL".to_string(),
        to: "LEPA".to_string(),
        distance: NauticalMiles::new(110.0),
        ground_speed: Knots::new(220.0),
        altitude: Feet::new(15_000.0),
        climb_rate: FeetPerMinute::new(1_500.0),
        estimated: Minutes::new(30.0),
    };

    let json = serde_json::to_string_pretty(&leg)?;
    println!("Serialized:\n{}\n", json);

    let restored: Leg = serde_json::from_str(&json)?;
    println!("Restored: {} -> {}", restored.from, restored.to);
    println!("  distance: {}", restored.distance);
    println!("  ground speed: {}", restored.ground_speed);
    println!("  enroute: {}", restored.distance / restored.ground_speed);

    // A unit that does not match the field is rejected, not converted
    let wrong = json.replace("\"NM\"", "\"km\"");
    match serde_json::from_str::<Leg>(&wrong) {
        Ok(_) => println!("unexpectedly accepted"),
        Err(err) => println!("\nRejected: {}", err),
    }

    Ok(())
}
