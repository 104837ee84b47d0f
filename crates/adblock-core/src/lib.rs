//! Core types and traits for syncing ad-blocking feeds into Cloudflare Gateway.
//!
//! This crate provides the foundational types used across the workspace:
//!
//! - **Types**: [`Domain`] and [`DomainSet`], plus the wire shapes of Gateway
//!   lists and rules
//! - **Gateway**: the [`Gateway`] trait the reconciler drives
//! - **Errors**: Comprehensive error handling with [`AdblockError`]
//!
//! # Example
//!
//! ```rust
//! use adblock_core::{Domain, DomainSet};
//!
//! let set: DomainSet = ["ads.example.com", "not a domain", "ads.example.com"]
//!     .iter()
//!     .filter_map(|token| Domain::parse(token))
//!     .collect();
//!
//! assert_eq!(set.len(), 1);
//! ```

#![doc(html_root_url = "https://docs.rs/adblock-core/0.3.0")]

mod error;
mod gateway;
pub mod types;

pub use error::{AdblockError, Result};
pub use gateway::Gateway;
pub use types::*;
