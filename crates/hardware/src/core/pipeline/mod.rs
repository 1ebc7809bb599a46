//! Instruction pipeline implementation.
//!
//! This module contains the inter-stage pipeline latches, the control
//! signals produced during decode, and the hazard detection and forwarding
//! logic. The per-stage work lives in [`crate::core::stages`].

/// Data hazard detection and operand forwarding.
pub mod hazards;

/// Inter-stage pipeline latches (IF/ID, ID/EX, EX/MEM, MEM/WB).
pub mod latches;

/// Control signals generated during instruction decode.
pub mod signals;
