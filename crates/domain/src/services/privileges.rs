//! Privilege resolution for flag grants.
//!
//! A flag creation or update may request any list of privilege identifiers.
//! The resolved grant is the requested list filtered against the catalog:
//! identifiers that do not exist are skipped, identifiers whose privilege is
//! not assignable are skipped, everything else is kept. The requested order is
//! preserved and duplicates are not deduplicated. Requesting an unknown or
//! non-assignable identifier is not an error; callers surface the outcome only
//! through the granted list in the response.

use crate::models::Privilege;

/// Filters the requested identifiers down to the privileges that exist in
/// `catalog` and are assignable. The result replaces the flag's prior
/// privilege set.
pub fn resolve_grantable(requested: &[String], catalog: &[Privilege]) -> Vec<Privilege> {
    requested
        .iter()
        .filter_map(|identifier| catalog.iter().find(|p| &p.identifier == identifier))
        .filter(|p| p.assignable)
        .cloned()
        .collect()
}

/// Returns the identifiers of a resolved grant, for the response body.
pub fn granted_identifiers(granted: &[Privilege]) -> Vec<String> {
    granted.iter().map(|p| p.identifier.clone()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn privilege(identifier: &str, assignable: bool) -> Privilege {
        Privilege {
            identifier: identifier.to_string(),
            assignable,
            created_at: Utc::now(),
            last_updated: Utc::now(),
        }
    }

    fn idents(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_grants_existing_assignable() {
        let catalog = vec![privilege("can_edit", true), privilege("can_view", true)];
        let granted = resolve_grantable(&idents(&["can_edit", "can_view"]), &catalog);
        assert_eq!(granted_identifiers(&granted), vec!["can_edit", "can_view"]);
    }

    #[test]
    fn test_drops_unknown_and_non_assignable() {
        // POST /privileges {"identifier":"can_ban","assignable":false} then
        // POST /flags {"privileges":["can_ban","nonexistent"]} grants nothing.
        let catalog = vec![privilege("can_ban", false)];
        let granted = resolve_grantable(&idents(&["can_ban", "nonexistent"]), &catalog);
        assert!(granted.is_empty());
    }

    #[test]
    fn test_mixed_request_keeps_only_grantable() {
        let catalog = vec![
            privilege("can_ban", false),
            privilege("can_edit", true),
            privilege("can_view", true),
        ];
        let requested = idents(&["can_ban", "can_edit", "missing", "can_view"]);
        let granted = resolve_grantable(&requested, &catalog);
        assert_eq!(granted_identifiers(&granted), vec!["can_edit", "can_view"]);
    }

    #[test]
    fn test_preserves_request_order() {
        let catalog = vec![privilege("a", true), privilege("b", true)];
        let granted = resolve_grantable(&idents(&["b", "a"]), &catalog);
        assert_eq!(granted_identifiers(&granted), vec!["b", "a"]);
    }

    #[test]
    fn test_duplicates_not_deduplicated() {
        let catalog = vec![privilege("can_edit", true)];
        let granted = resolve_grantable(&idents(&["can_edit", "can_edit"]), &catalog);
        assert_eq!(granted_identifiers(&granted), vec!["can_edit", "can_edit"]);
    }

    #[test]
    fn test_empty_request_grants_nothing() {
        let catalog = vec![privilege("can_edit", true)];
        assert!(resolve_grantable(&[], &catalog).is_empty());
    }

    #[test]
    fn test_empty_catalog_grants_nothing() {
        assert!(resolve_grantable(&idents(&["can_edit"]), &[]).is_empty());
    }
}
