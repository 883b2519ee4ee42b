//! Durations read from a millisecond tick counter
//!
//! The host's monotonic clock stands in for the board's `millis()`.

use std::thread;
use std::time::Instant;

use timesphere::prelude::*;

fn main() {
    let boot = Instant::now();
    let millis = move || boot.elapsed().as_millis() as u32;

    let duration1 = Duration::ms(1_500);
    let duration2 = Duration::ms(3_000);

    println!("Sum: {} seconds", duration1.add(duration2).get(TimeUnit::Seconds));
    println!("Difference: {} seconds", duration2.subtract(duration1).get(TimeUnit::Seconds));

    let deadline = Duration::ms(3_000);
    if deadline.after(Duration::now(&millis)) {
        println!("3 seconds have not yet passed.");
    } else {
        println!("3 seconds have passed.");
    }

    for _ in 0..3 {
        let from = millis.now_millis();
        thread::sleep(std::time::Duration::from_millis(250));
        println!("Elapsed: {} millis", Duration::since(from, &millis).get(TimeUnit::Millis));
    }
}
