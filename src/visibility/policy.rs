use std::sync::Arc;

use super::aliases::RegionalAliases;
use super::normalize::normalize;
use super::region::{RegionalKey, Role};

/// The identity facts the predicate needs about a caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Requester {
    pub role: Role,
    pub regional: Option<RegionalKey>,
}

impl Requester {
    pub fn new(role: Role, regional: Option<RegionalKey>) -> Self {
        Self { role, regional }
    }
}

/// Where a row keeps its region.
///
/// `Embedded` covers legacy rows that only carry the region inside a larger
/// descriptive string; matching there is substring containment and is flagged
/// for eventual data migration.
#[derive(Debug, Clone, Copy)]
pub enum RegionSource<'a> {
    /// Dedicated region column.
    Field(&'a str),
    /// Region buried in free text (legacy fallback).
    Embedded(&'a str),
    /// No region stored at all.
    Missing,
}

/// Rows that can be admitted or rejected by region.
pub trait RegionScoped {
    fn region(&self) -> RegionSource<'_>;
}

/// Stateless visibility predicate over an injected alias table.
///
/// Pure and synchronous; safe to share across request tasks without locking.
#[derive(Debug, Clone)]
pub struct VisibilityPolicy {
    aliases: Arc<RegionalAliases>,
}

impl VisibilityPolicy {
    pub fn new(aliases: Arc<RegionalAliases>) -> Self {
        Self { aliases }
    }

    pub fn aliases(&self) -> &RegionalAliases {
        &self.aliases
    }

    /// Decide whether one row is visible to the requester.
    ///
    /// Elevated roles see everything. A requester without a resolvable region
    /// sees no regionally scoped row, and rows with missing or unmatched
    /// region data stay hidden (fail closed in both directions).
    pub fn is_visible(&self, requester: &Requester, region: RegionSource<'_>) -> bool {
        if requester.role.is_elevated() {
            return true;
        }

        let Some(key) = requester.regional else {
            return false;
        };

        let aliases = self.aliases.aliases_for(key);
        match region {
            RegionSource::Field(stored) => {
                let stored = normalize(stored);
                !stored.is_empty() && aliases.iter().any(|a| *a == stored)
            }
            RegionSource::Embedded(text) => {
                let text = normalize(text);
                !text.is_empty() && aliases.iter().any(|a| text.contains(a.as_str()))
            }
            RegionSource::Missing => false,
        }
    }

    /// Bulk form: keep only the rows the requester may read.
    pub fn filter_visible<T: RegionScoped>(&self, requester: &Requester, rows: Vec<T>) -> Vec<T> {
        rows.into_iter()
            .filter(|row| self.is_visible(requester, row.region()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn policy() -> VisibilityPolicy {
        VisibilityPolicy::new(Arc::new(RegionalAliases::builtin()))
    }

    fn member(regional: Option<RegionalKey>) -> Requester {
        Requester::new(Role::Member, regional)
    }

    #[test]
    fn test_elevated_sees_everything() {
        let policy = policy();
        let admin = Requester::new(Role::SuperAdmin, None);
        assert!(policy.is_visible(&admin, RegionSource::Field("Nordeste 2")));
        assert!(policy.is_visible(&admin, RegionSource::Field("garbage")));
        assert!(policy.is_visible(&admin, RegionSource::Missing));
    }

    #[test]
    fn test_no_region_sees_nothing() {
        let policy = policy();
        let requester = member(None);
        assert!(!policy.is_visible(&requester, RegionSource::Field("rj")));
        assert!(!policy.is_visible(&requester, RegionSource::Embedded("atividade no rj")));
        assert!(!policy.is_visible(&requester, RegionSource::Missing));
    }

    #[test]
    fn test_field_match_across_surface_forms() {
        let policy = policy();
        let requester = member(Some(RegionalKey::Rj));
        assert!(policy.is_visible(&requester, RegionSource::Field("R. Rio de Janeiro")));
        assert!(policy.is_visible(&requester, RegionSource::Field("rio de janeiro")));
        assert!(policy.is_visible(&requester, RegionSource::Field("RIO  DE  JANEIRO")));
        assert!(policy.is_visible(&requester, RegionSource::Field("rj")));
    }

    #[test]
    fn test_field_mismatch() {
        let policy = policy();
        let requester = member(Some(RegionalKey::Sp));
        assert!(!policy.is_visible(&requester, RegionSource::Field("Nordeste 2")));
        assert!(!policy.is_visible(&requester, RegionSource::Field("")));
        assert!(!policy.is_visible(&requester, RegionSource::Missing));
    }

    #[test]
    fn test_embedded_containment() {
        let policy = policy();
        let requester = member(Some(RegionalKey::Nordeste2));
        assert!(policy.is_visible(
            &requester,
            RegionSource::Embedded("Encontro de famílias - R. Nordeste 2 - Recife")
        ));
        assert!(!policy.is_visible(
            &requester,
            RegionSource::Embedded("Encontro de famílias - R. Nordeste 1 - Fortaleza")
        ));
        assert!(!policy.is_visible(&requester, RegionSource::Embedded("")));
    }

    #[test]
    fn test_accented_field_matches() {
        let policy = policy();
        let requester = member(Some(RegionalKey::Sp));
        assert!(policy.is_visible(&requester, RegionSource::Field("São Paulo")));
        assert!(policy.is_visible(&requester, RegionSource::Field("SAO PAULO")));
    }

    #[test]
    fn test_every_alias_is_visible_to_its_key() {
        let policy = policy();
        for key in RegionalKey::ALL {
            let requester = member(Some(key));
            for alias in policy.aliases().aliases_for(key) {
                assert!(
                    policy.is_visible(&requester, RegionSource::Field(alias)),
                    "alias {:?} not visible for {}",
                    alias,
                    key
                );
            }
        }
    }

    #[test]
    fn test_filter_visible() {
        struct Row(&'static str);
        impl RegionScoped for Row {
            fn region(&self) -> RegionSource<'_> {
                RegionSource::Field(self.0)
            }
        }

        let policy = policy();
        let rows = vec![Row("R. Sul"), Row("Nordeste 1"), Row("sul"), Row("")];

        let requester = member(Some(RegionalKey::Sul));
        let visible = policy.filter_visible(&requester, rows);
        assert_eq!(visible.len(), 2);

        let admin = Requester::new(Role::SuperAdmin, None);
        let rows = vec![Row("R. Sul"), Row("Nordeste 1"), Row("sul"), Row("")];
        assert_eq!(policy.filter_visible(&admin, rows).len(), 4);
    }
}
