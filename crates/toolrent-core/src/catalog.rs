//! # Tool Catalog
//!
//! Immutable lookup of [`ToolSpec`]s by code.
//!
//! The catalog is built once and handed to the
//! [`CheckoutService`](crate::CheckoutService); there is no process-wide
//! table and no mutation API. Tests build their own catalogs with
//! [`ToolCatalog::from_specs`].

use std::collections::BTreeMap;

use crate::error::ValidationError;
use crate::money::Money;
use crate::types::{ChargeFlags, ToolSpec};
use crate::validation::ValidationResult;

/// Standard rental fleet: (code, type, brand, daily cents, weekday, weekend, holiday).
const STANDARD_TOOLS: &[(&str, &str, &str, i64, bool, bool, bool)] = &[
    ("CHNS", "Chainsaw", "Stihl", 149, true, false, true),
    ("LADW", "Ladder", "Werner", 199, true, true, false),
    ("JAKD", "Jackhammer", "DeWalt", 299, true, false, false),
    ("JAKR", "Jackhammer", "Ridgid", 299, true, false, false),
];

/// Read-only tool catalog keyed by exact code.
#[derive(Debug, Clone, Default)]
pub struct ToolCatalog {
    tools: BTreeMap<String, ToolSpec>,
}

impl ToolCatalog {
    /// The fleet the counter rents out.
    pub fn standard() -> Self {
        let tools = STANDARD_TOOLS
            .iter()
            .map(|&(code, tool_type, brand, cents, weekday, weekend, holiday)| {
                let spec = ToolSpec::new(
                    code,
                    tool_type,
                    brand,
                    Money::from_cents(cents),
                    ChargeFlags::new(weekday, weekend, holiday),
                );
                (spec.code.clone(), spec)
            })
            .collect();

        ToolCatalog { tools }
    }

    /// Builds a catalog from arbitrary specs.
    ///
    /// ## Errors
    /// `ValidationError::Duplicate` if two specs share a code.
    pub fn from_specs(specs: impl IntoIterator<Item = ToolSpec>) -> ValidationResult<Self> {
        let mut tools = BTreeMap::new();
        for spec in specs {
            if tools.contains_key(&spec.code) {
                return Err(ValidationError::Duplicate {
                    field: "tool code".to_string(),
                    value: spec.code,
                });
            }
            tools.insert(spec.code.clone(), spec);
        }

        Ok(ToolCatalog { tools })
    }

    /// Looks up a tool by its exact, case-sensitive code.
    pub fn lookup(&self, code: &str) -> Option<&ToolSpec> {
        self.tools.get(code)
    }

    /// Iterates the tools in code order.
    pub fn iter(&self) -> impl Iterator<Item = &ToolSpec> {
        self.tools.values()
    }

    /// Number of tools in the catalog.
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// True when the catalog holds no tools.
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_catalog_entries() {
        let catalog = ToolCatalog::standard();
        assert_eq!(catalog.len(), 4);

        let chainsaw = catalog.lookup("CHNS").unwrap();
        assert_eq!(chainsaw.tool_type, "Chainsaw");
        assert_eq!(chainsaw.brand, "Stihl");
        assert_eq!(chainsaw.daily_charge.cents(), 149);
        assert_eq!(chainsaw.charges, ChargeFlags::new(true, false, true));

        let ladder = catalog.lookup("LADW").unwrap();
        assert_eq!(ladder.charges, ChargeFlags::new(true, true, false));

        let dewalt = catalog.lookup("JAKD").unwrap();
        let ridgid = catalog.lookup("JAKR").unwrap();
        assert_eq!(dewalt.tool_type, ridgid.tool_type);
        assert_eq!(dewalt.brand, "DeWalt");
        assert_eq!(ridgid.brand, "Ridgid");
    }

    #[test]
    fn test_lookup_is_exact_and_case_sensitive() {
        let catalog = ToolCatalog::standard();
        assert!(catalog.lookup("ladw").is_none());
        assert!(catalog.lookup(" LADW").is_none());
        assert!(catalog.lookup("XXXX").is_none());
    }

    #[test]
    fn test_iter_is_in_code_order() {
        let catalog = ToolCatalog::standard();
        let codes: Vec<_> = catalog.iter().map(|t| t.code.as_str()).collect();
        assert_eq!(codes, vec!["CHNS", "JAKD", "JAKR", "LADW"]);
    }

    #[test]
    fn test_from_specs_rejects_duplicates() {
        let spec = ToolSpec::new(
            "DRLL",
            "Drill",
            "Makita",
            Money::from_cents(99),
            ChargeFlags::new(true, true, true),
        );
        let err = ToolCatalog::from_specs(vec![spec.clone(), spec]).unwrap_err();
        assert_eq!(err.to_string(), "tool code 'DRLL' already exists");
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = ToolCatalog::from_specs(Vec::new()).unwrap();
        assert!(catalog.is_empty());
        assert!(catalog.lookup("LADW").is_none());
    }
}
