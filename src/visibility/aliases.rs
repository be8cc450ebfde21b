use std::collections::HashMap;

use super::normalize::normalize;
use super::region::RegionalKey;

/// Static mapping from each canonical regional key to the normalized surface
/// forms accepted for it in stored data.
///
/// Built once at startup and passed explicitly into the policy (no ambient
/// global). The table is immutable after construction; every alias is stored
/// already normalized so lookups are plain string comparisons.
#[derive(Debug, Clone)]
pub struct RegionalAliases {
    map: HashMap<RegionalKey, Vec<String>>,
}

impl RegionalAliases {
    /// The built-in table covering the surface forms seen in production data:
    /// short codes, plain labels, "R. "-prefixed labels and historical
    /// misspellings. Accent variants collapse via `normalize`.
    pub fn builtin() -> Self {
        let mut builder = AliasBuilder::default();

        builder.insert(RegionalKey::Nacional, &["nacional", "R. Nacional"]);
        builder.insert(
            RegionalKey::CentroOeste,
            &[
                "centro oeste",
                "centro-oeste",
                "centroeste",
                "R. Centro-Oeste",
            ],
        );
        builder.insert(
            RegionalKey::Nordeste1,
            &["nordeste 1", "nordeste I", "R. Nordeste 1"],
        );
        builder.insert(
            RegionalKey::Nordeste2,
            &["nordeste 2", "nordeste II", "R. Nordeste 2"],
        );
        builder.insert(RegionalKey::Norte, &["norte", "R. Norte"]);
        builder.insert(
            RegionalKey::Rj,
            &["rj", "rio de janeiro", "R. Rio de Janeiro"],
        );
        builder.insert(RegionalKey::Sp, &["sp", "são paulo", "R. São Paulo"]);
        builder.insert(RegionalKey::Sul, &["sul", "R. Sul"]);
        builder.insert(
            RegionalKey::MgEs,
            &[
                "mg/es",
                "mg es",
                "minas gerais",
                "espírito santo",
                "R. MG/ES",
            ],
        );
        builder.insert(RegionalKey::Comercial, &["comercial"]);

        Self { map: builder.map }
    }

    /// Accepted surface forms for a key. Unknown keys yield an empty slice so
    /// matching fails closed.
    pub fn aliases_for(&self, key: RegionalKey) -> &[String] {
        self.map.get(&key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Map a stored free-text affiliation back to its canonical key by exact
    /// normalized equality. Used when building a requester from a member row
    /// whose `regional` column predates canonical keys.
    pub fn resolve_label(&self, label: &str) -> Option<RegionalKey> {
        let normalized = normalize(label);
        if normalized.is_empty() {
            return None;
        }
        // Canonical key strings themselves are accepted too ("mg_es" etc.)
        if let Some(key) = RegionalKey::from_key(&normalized) {
            return Some(key);
        }
        self.map.iter().find_map(|(key, aliases)| {
            aliases.iter().any(|a| *a == normalized).then_some(*key)
        })
    }
}

#[derive(Default)]
struct AliasBuilder {
    map: HashMap<RegionalKey, Vec<String>>,
}

impl AliasBuilder {
    fn insert(&mut self, key: RegionalKey, surface_forms: &[&str]) {
        let normalized = surface_forms.iter().map(|s| normalize(s)).collect();
        self.map.insert(key, normalized);
    }
}
