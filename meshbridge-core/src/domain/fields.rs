// meshbridge-core/src/domain/fields.rs
//
// Wire vocabulary shared with the policy framework and the catalog.
// Casing must match exactly.

// --- Policy-framework side ---
pub const HOST: &str = "host";
pub const PORT: &str = "port";
pub const DATABASE: &str = "database";
pub const TABLE: &str = "table";
pub const OTHER: &str = "other";

// --- Catalog side ---
pub const HOST_PORT: &str = "hostPort";
pub const DATABASE_SCHEMA: &str = "databaseSchema";
pub const SCHEME: &str = "scheme";
pub const USERNAME: &str = "username";
pub const PASSWORD: &str = "password";

// --- Asset creation request ---
pub const ADDITIONAL_PROPERTIES: &str = "additionalProperties";
pub const DESTINATION_ASSET_ID: &str = "destinationAssetID";

/// Catalog database name used when the engine has no notion of one.
pub const DEFAULT_DATABASE: &str = "default";

/// Fields of a catalog configuration an engine knows about. Anything else is
/// opaque to the policy framework and travels under [`OTHER`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StandardFieldSet(&'static [&'static str]);

impl StandardFieldSet {
    pub const fn new(fields: &'static [&'static str]) -> Self {
        Self(fields)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains(&key)
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static str> {
        self.0.iter().copied()
    }
}

pub const MYSQL_STANDARD_FIELDS: StandardFieldSet = StandardFieldSet::new(&[
    DATABASE_SCHEMA,
    HOST_PORT,
    PASSWORD,
    SCHEME,
    USERNAME,
    TABLE,
]);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mysql_standard_fields() {
        assert!(MYSQL_STANDARD_FIELDS.contains(HOST_PORT));
        assert!(MYSQL_STANDARD_FIELDS.contains(USERNAME));
        assert!(!MYSQL_STANDARD_FIELDS.contains(HOST));
        assert!(!MYSQL_STANDARD_FIELDS.contains("HostPort"));
        assert_eq!(MYSQL_STANDARD_FIELDS.iter().count(), 6);
    }
}
