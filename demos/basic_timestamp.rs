//! Basic timestamp usage
//!
//! Sets a wall-clock time, moves it around and checks expiry.

use timesphere::prelude::*;

fn main() -> Result<(), TimeError> {
    let mut ts = Timestamp::<DefaultConfig>::new();
    ts.set_time(2023, 1, 1, 0, 0, 0)?;
    println!("start:     {} ({})", ts, ts.unix_time());

    ts.add_days(45)?;
    ts.add_hours(-3)?;
    println!("moved:     {}", ts);

    let now = 1_700_000_000;
    let now_ts = Timestamp::<DefaultConfig>::from_unix_time(now);
    println!("expired at {}: {}", now_ts, ts.is_expired(now));

    // Strict configuration reports what the default one silently accepts
    let mut strict = Timestamp::<StrictConfig>::new();
    match strict.set_time(2023, 2, 29, 0, 0, 0) {
        Ok(()) => println!("accepted:  {}", strict),
        Err(error) => println!("rejected:  {} ({})", error, error.category()),
    }

    let mut lenient = Timestamp::<DefaultConfig>::new();
    lenient.set_time(2023, 2, 29, 0, 0, 0)?;
    println!("lenient:   {}", lenient);

    Ok(())
}
