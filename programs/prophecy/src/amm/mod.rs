//! # Automated Market Maker (AMM) Module
//!
//! Pricing for the two sides of a stream uses a **constant-product** pool:
//!
//! ```text
//!            k = reserve_A × reserve_B
//!
//!   ┌────────────────────────────────────────┐
//!   │  reserve_B ▲                           │
//!   │            │╲                          │
//!   │            │ ╲     buy A: B grows,     │
//!   │            │  ╲    A shrinks           │
//!   │            │   ╲___                    │
//!   │            │       ‾‾‾──────           │
//!   │            └─────────────────▶ reserve_A│
//!   │                                        │
//!   │  price(A) = reserve_B / reserve_A      │
//!   └────────────────────────────────────────┘
//! ```
//!
//! The pool only drives the live quote. Final payouts are pari-mutuel and
//! live in [`crate::engine::settlement`].

pub mod constant_product;
pub mod fixed_point;

pub use constant_product::*;
