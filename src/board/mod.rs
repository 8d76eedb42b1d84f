//! Staged task board state machine for Aalto.
//!
//! This module implements the board lifecycle: creating tasks into the entry
//! stage, editing and deleting them, and advancing them towards the review
//! stage. Advancing a backlog task promotes it to review only when the
//! immediately preceding stage is fully complete; advancing a review task
//! marks it completed. The module keeps the domain separate from its
//! orchestration:
//!
//! - Domain types in [`domain`]
//! - Coordination services in [`services`]

pub mod domain;
pub mod services;

#[cfg(test)]
mod tests;
