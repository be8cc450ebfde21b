use serde::{Deserialize, Serialize};

/// Permission level carried in JWT claims and the members table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Member,
    SuperAdmin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Member => "member",
            Role::SuperAdmin => "super_admin",
        }
    }

    /// Parse a stored role column. Anything unrecognized falls back to the
    /// non-elevated role so bad data never widens visibility.
    pub fn parse(s: &str) -> Role {
        match s {
            "super_admin" => Role::SuperAdmin,
            _ => Role::Member,
        }
    }

    pub fn is_elevated(&self) -> bool {
        matches!(self, Role::SuperAdmin)
    }
}

/// Canonical regional identifiers. This enum is the single source of truth for
/// the key set; every surface-form spelling maps into one of these via the
/// alias table, never the other way around.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RegionalKey {
    #[serde(rename = "nacional")]
    Nacional,
    #[serde(rename = "centro_oeste")]
    CentroOeste,
    #[serde(rename = "nordeste_1")]
    Nordeste1,
    #[serde(rename = "nordeste_2")]
    Nordeste2,
    #[serde(rename = "norte")]
    Norte,
    #[serde(rename = "rj")]
    Rj,
    #[serde(rename = "sp")]
    Sp,
    #[serde(rename = "sul")]
    Sul,
    #[serde(rename = "mg_es")]
    MgEs,
    #[serde(rename = "comercial")]
    Comercial,
}

impl RegionalKey {
    pub const ALL: [RegionalKey; 10] = [
        RegionalKey::Nacional,
        RegionalKey::CentroOeste,
        RegionalKey::Nordeste1,
        RegionalKey::Nordeste2,
        RegionalKey::Norte,
        RegionalKey::Rj,
        RegionalKey::Sp,
        RegionalKey::Sul,
        RegionalKey::MgEs,
        RegionalKey::Comercial,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RegionalKey::Nacional => "nacional",
            RegionalKey::CentroOeste => "centro_oeste",
            RegionalKey::Nordeste1 => "nordeste_1",
            RegionalKey::Nordeste2 => "nordeste_2",
            RegionalKey::Norte => "norte",
            RegionalKey::Rj => "rj",
            RegionalKey::Sp => "sp",
            RegionalKey::Sul => "sul",
            RegionalKey::MgEs => "mg_es",
            RegionalKey::Comercial => "comercial",
        }
    }

    /// Parse a canonical key string (as stored in JWT claims). Returns None for
    /// anything outside the closed set - callers treat that as "no region".
    pub fn from_key(s: &str) -> Option<RegionalKey> {
        match s {
            "nacional" => Some(RegionalKey::Nacional),
            "centro_oeste" => Some(RegionalKey::CentroOeste),
            "nordeste_1" => Some(RegionalKey::Nordeste1),
            "nordeste_2" => Some(RegionalKey::Nordeste2),
            "norte" => Some(RegionalKey::Norte),
            "rj" => Some(RegionalKey::Rj),
            "sp" => Some(RegionalKey::Sp),
            "sul" => Some(RegionalKey::Sul),
            "mg_es" => Some(RegionalKey::MgEs),
            "comercial" => Some(RegionalKey::Comercial),
            _ => None,
        }
    }

    /// Display label used by the dashboard.
    pub fn label(&self) -> &'static str {
        match self {
            RegionalKey::Nacional => "Nacional",
            RegionalKey::CentroOeste => "Centro-Oeste",
            RegionalKey::Nordeste1 => "Nordeste 1",
            RegionalKey::Nordeste2 => "Nordeste 2",
            RegionalKey::Norte => "Norte",
            RegionalKey::Rj => "Rio de Janeiro",
            RegionalKey::Sp => "São Paulo",
            RegionalKey::Sul => "Sul",
            RegionalKey::MgEs => "MG/ES",
            RegionalKey::Comercial => "Comercial",
        }
    }
}

impl std::fmt::Display for RegionalKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for RegionalKey {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RegionalKey::from_key(s).ok_or(())
    }
}
