//! Radius command
//!
//! Prints the kernel radius and compositor radius for each strength.

use crate::RadiusArgs;
use anyhow::Result;
#[allow(unused_imports)]
use tracing::{debug, info, trace};

pub fn run(args: RadiusArgs) -> Result<()> {
    trace!(count = args.strength.len(), "radius::run");

    let config = super::load_config(args.config.as_deref())?;
    let mapper = config.mapper()?;

    for strength in args.strength {
        println!(
            "{} -> {} (hardware {})",
            strength,
            mapper.map(strength),
            mapper.hardware_radius(strength)
        );
    }

    Ok(())
}
