//! Gateway traffic expressions.

use adblock_core::GatewayList;
use tracing::warn;

/// Build `any(dns.domains[*] in $<id>) or ...` over the given lists
///
/// List ids are interpolated as-is. Ids outside `[A-Za-z0-9-]` are logged
/// because the expression language gives them meaning. Returns `None` when no
/// list has an id.
pub fn traffic_expression(lists: &[&GatewayList]) -> Option<String> {
    let clauses: Vec<String> = lists
        .iter()
        .filter_map(|list| list.id.as_deref())
        .map(|id| {
            if !id.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
                warn!(list_id = %id, "List id contains unexpected characters");
            }
            format!("any(dns.domains[*] in ${id})")
        })
        .collect();

    if clauses.is_empty() {
        None
    } else {
        Some(clauses.join(" or "))
    }
}
