//! Permissive line parser for hosts files, plain domain lists and adblock
//! filter lists.
//!
//! Every line yields at most one [`Domain`]. Anything that does not reduce to
//! a valid hostname is dropped without error.

use adblock_core::Domain;
use std::net::IpAddr;

/// Markers of cosmetic filters (`example.com##.banner`), which hide page
/// elements and must not be read as host blocks.
const COSMETIC_MARKERS: [&str; 4] = ["##", "#@#", "#?#", "#$#"];

/// Extract the domain a single feed line refers to
///
/// Handles:
/// - `ads.example.com`
/// - `0.0.0.0 ads.example.com` (hosts file, trailing aliases ignored)
/// - `||ads.example.com^$third-party` (adblock network filter)
/// - trailing `# comments`
///
/// Blank lines, `#`/`!` comments, `[Adblock Plus 2.0]` headers and `@@`
/// exception rules yield `None`.
#[must_use]
pub fn parse_line(line: &str) -> Option<Domain> {
    let line = line.trim();

    if line.is_empty()
        || line.starts_with(['#', '!', '['])
        || line.starts_with("@@")
        || COSMETIC_MARKERS.iter().any(|m| line.contains(m))
    {
        return None;
    }

    let line = line.split('#').next().unwrap_or_default();
    let mut tokens = line.split_whitespace();
    let first = tokens.next()?;

    let candidate = if first.parse::<IpAddr>().is_ok() {
        tokens.next()?
    } else if tokens.next().is_some() {
        return None;
    } else {
        first
    };

    Domain::parse(strip_filter_syntax(candidate))
}

/// Reduce `||host^$options` to `host`
fn strip_filter_syntax(token: &str) -> &str {
    let token = token.strip_prefix("||").unwrap_or(token);
    token
        .split(['^', '$', '/'])
        .next()
        .unwrap_or(token)
}

/// Parse every line of a feed body, dropping lines that carry no domain
#[must_use]
pub fn parse_feed(body: &str) -> Vec<Domain> {
    body.lines().filter_map(parse_line).collect()
}
