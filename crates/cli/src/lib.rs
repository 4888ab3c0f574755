//! Library half of the `roicalc` binary: input parsing and report rendering.

pub mod input;
pub mod report;
mod util;
