//! Fixed-point helpers shared with the on-chain cost-of-attack contracts

/// Quadratic root finding in 27-decimal fixed point
pub mod quadratic;
