//! Aalto: staged task board state machine.
//!
//! This crate provides the core functionality for a multi-stage task board:
//! task creation, editing, deletion, and gated stage progression, together
//! with the derived views a board presentation renders.
//!
//! # Architecture
//!
//! Aalto keeps business rules free of infrastructure concerns:
//!
//! - **Domain**: Validated types and the board state machine, with no
//!   dependencies beyond serialization
//! - **Services**: A cloneable handle serializing access to one shared board
//!
//! # Modules
//!
//! - [`board`]: Task records, stage gating, and board views

pub mod board;
