//! Step definitions for task board stage gating scenarios.

pub mod given;
pub mod then;
pub mod when;
pub mod world;
