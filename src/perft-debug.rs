use std::env;

use anyhow::{bail, Context, Result};
use chess_rules::utils::perf_test;

fn main() -> Result<()> {
    env_logger::init();
    let args: Vec<String> = env::args().collect();
    let depth: usize = args
        .get(1)
        .context("usage: perft-debug <depth> <expected>")?
        .parse()
        .context("depth must be a number")?;
    let expected: usize = args
        .get(2)
        .context("usage: perft-debug <depth> <expected>")?
        .parse()
        .context("expected must be a number")?;
    if !perf_test(depth, expected, true) {
        bail!("perft({depth}) did not find {expected} moves");
    }
    Ok(())
}
