//! Client configuration types.

use governor::Quota;
use std::num::NonZeroU32;

/// Client-side request rate limit
///
/// Cloudflare allows 1200 requests per five minutes per user, which averages
/// out to four per second.
#[derive(Debug, Clone, Copy)]
pub struct RateLimitConfig {
    /// Sustained requests per second
    pub requests_per_second: u32,

    /// Requests allowed in a burst
    pub burst_size: u32,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl RateLimitConfig {
    /// Create the default rate limit
    #[must_use]
    pub const fn new() -> Self {
        Self {
            requests_per_second: 4,
            burst_size: 4,
        }
    }

    /// Set sustained requests per second
    #[must_use]
    pub const fn requests_per_second(mut self, rps: u32) -> Self {
        self.requests_per_second = rps;
        self
    }

    /// Set burst size
    #[must_use]
    pub const fn burst_size(mut self, burst: u32) -> Self {
        self.burst_size = burst;
        self
    }

    /// Convert into a governor quota, clamping zero values to one
    #[must_use]
    pub fn quota(&self) -> Quota {
        Quota::per_second(NonZeroU32::new(self.requests_per_second).unwrap_or(NonZeroU32::MIN))
            .allow_burst(NonZeroU32::new(self.burst_size).unwrap_or(NonZeroU32::MIN))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RateLimitConfig::default();
        assert_eq!(config.requests_per_second, 4);
        assert_eq!(config.burst_size, 4);
    }

    #[test]
    fn test_zero_values_clamp() {
        let quota = RateLimitConfig::new()
            .requests_per_second(0)
            .burst_size(0)
            .quota();
        assert_eq!(quota.burst_size().get(), 1);
    }
}
