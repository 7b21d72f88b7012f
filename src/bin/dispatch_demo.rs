//! Demo driver: run every lead over every train and print the records.
//!
//! Builds the default roster (one train and one lead per division) and
//! prints one line per cross-combination, demonstrating that any lead can
//! manage any train.
//!
//! # Usage
//!
//! ```sh
//! cargo run --bin dispatch_demo
//! ```

use rs_crossover::{Roster, RosterConfig};

fn main() -> anyhow::Result<()> {
    let roster = Roster::from_config(&RosterConfig::default());

    for record in roster.cross_manage() {
        println!("{record}");
    }

    Ok(())
}
