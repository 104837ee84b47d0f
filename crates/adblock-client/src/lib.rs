//! HTTP client for the Cloudflare Zero Trust Gateway API.
//!
//! This crate provides [`GatewayClient`], scoped to one account, with endpoint
//! groups for Gateway lists and rules. It also implements
//! [`adblock_core::Gateway`] so the reconciler can drive it.

#![doc(html_root_url = "https://docs.rs/adblock-client/0.3.0")]

mod client;
mod config;
mod gateway;
pub mod api;

pub use adblock_core::{AdblockError, Result};
pub use client::{GatewayClient, GatewayClientBuilder};
pub use config::*;
