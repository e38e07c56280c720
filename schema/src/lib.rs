// Baseball Sim Schema - Shared type definitions
// This crate contains the closed enumerations that are shared between the
// simulation engine, its configuration files and anything that consumes the
// event log.

// Re-export the main types
pub use batted_ball::*;
pub use positions::*;
pub use ratings::*;
pub use stats::*;

pub mod batted_ball;
pub mod positions;
pub mod ratings;
pub mod stats;
