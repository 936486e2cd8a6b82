//! Paths command
//!
//! Lists blur paths for a platform API level and the one a layer would use.

use crate::PathsArgs;
use anyhow::Result;
use blur_layout::{describe_paths, select_path, Capabilities};
#[allow(unused_imports)]
use tracing::{debug, info, trace};

pub fn run(args: PathsArgs) -> Result<()> {
    trace!(api_level = args.api_level, "paths::run");

    let config = super::load_config(args.config.as_deref())?;
    let caps = Capabilities::new(args.api_level);

    print!("{}", describe_paths(&caps));
    println!("selected: {}", select_path(&caps, config.path).name());

    Ok(())
}
