use chrono::{DateTime, Utc};
use heliodon::{find_times_with_twilight, DayPoint, Observer};

fn utc(unix_ms: i64) -> String {
    match DateTime::<Utc>::from_timestamp_millis(unix_ms) {
        Some(dt) => dt.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
        None => "out of range".to_string(),
    }
}

fn main() -> Result<(), heliodon::Error> {
    // Greenwich Observatory.
    let observer = Observer::from_degrees(51.4769, -0.0005)?;
    let now_ms = Utc::now().timestamp_millis();
    let times = find_times_with_twilight(now_ms, &observer)?;

    println!("Solar day at {observer}");
    println!("  start of day: {}", utc(times.start_midnight));
    println!("  civil dawn:   {}", utc(times.start_dawn));
    println!("  sunrise:      {}", utc(times.start_rise));
    println!("  solar noon:   {}", utc(times.noon));
    println!("  sunset:       {}", utc(times.end_set));
    println!("  civil dusk:   {}", utc(times.end_dusk));
    println!("  end of day:   {}", utc(times.end_midnight));
    println!("  noon sits at {:.1}% of the dial", 100.0 * times.ratio_of(DayPoint::Noon));

    if times.no_rise {
        println!("  (the sun does not rise today)");
    }
    if let Some(twilight) = times.twilight {
        println!("  nautical twilight from {}", utc(twilight.start_nautical));
    }

    Ok(())
}
