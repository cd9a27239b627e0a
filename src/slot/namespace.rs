//! Namespace identifiers and the naming lints applied before registration.
//!
//! The recommended form is `erc7201:<org>.<module>`. A namespace is hashed
//! whole, tag included, so `erc7201:acme.Counter` and `acme.Counter` are two
//! namespaces with two slots. The tag only matters when reading a
//! `@custom:storage-location erc7201:<id>` annotation, where it names the
//! formula and `<id>` is what gets hashed.

use alloc::{string::String, vec::Vec};
use core::{borrow::Borrow, fmt};

/// Tag naming the derivation formula
pub const FORMULA_TAG: &str = "erc7201:";

/// Human chosen name for a group of related state. Immutable once created.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NamespaceId(String);

impl NamespaceId {
    pub fn new(namespace: impl Into<String>) -> Self {
        NamespaceId(namespace.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Identifier after the optional tag
    pub fn formula_id(&self) -> &str {
        formula_id(&self.0)
    }
}

/// Strips the `erc7201:` tag if present
pub fn formula_id(namespace: &str) -> &str {
    namespace.strip_prefix(FORMULA_TAG).unwrap_or(namespace)
}

impl From<&str> for NamespaceId {
    fn from(value: &str) -> Self {
        NamespaceId::new(value)
    }
}

impl From<String> for NamespaceId {
    fn from(value: String) -> Self {
        NamespaceId(value)
    }
}

impl Borrow<str> for NamespaceId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NamespaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for NamespaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

/// Naming problems that do not affect slot math. Reported, never rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NamespaceLint {
    /// Nothing after the optional tag
    Empty,

    /// No `erc7201:` tag
    MissingFormulaTag,

    /// Identifier is not of the form `<org>.<module>`
    MissingOrganization,
}

impl fmt::Display for NamespaceLint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NamespaceLint::Empty => f.write_str("namespace identifier is empty"),
            NamespaceLint::MissingFormulaTag => {
                write!(f, "namespace is missing the `{}` tag", FORMULA_TAG)
            }
            NamespaceLint::MissingOrganization => {
                f.write_str("namespace identifier should look like `<org>.<module>`")
            }
        }
    }
}

pub fn lint_namespace(namespace: &NamespaceId) -> Vec<NamespaceLint> {
    let mut lints = Vec::new();

    if namespace.as_str().is_empty() {
        lints.push(NamespaceLint::Empty);
        return lints;
    }

    if !namespace.as_str().starts_with(FORMULA_TAG) {
        lints.push(NamespaceLint::MissingFormulaTag);
    }

    let id = namespace.formula_id();
    if id.is_empty() {
        lints.push(NamespaceLint::Empty);
    } else if !id.contains('.') || id.split('.').any(str::is_empty) {
        lints.push(NamespaceLint::MissingOrganization);
    }

    lints
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_formula_id_strips_tag_once() {
        assert_eq!(formula_id("erc7201:acme.Counter"), "acme.Counter");
        assert_eq!(formula_id("acme.Counter"), "acme.Counter");
        assert_eq!(formula_id("erc7201:erc7201:a.b"), "erc7201:a.b");
        assert_eq!(formula_id(""), "");
    }

    #[test]
    fn test_well_formed_namespace_has_no_lints() {
        let namespace = NamespaceId::from("erc7201:acme.Counter");
        assert!(lint_namespace(&namespace).is_empty());
    }

    #[test]
    fn test_empty_namespace() {
        assert_eq!(
            lint_namespace(&NamespaceId::from("")),
            alloc::vec![NamespaceLint::Empty]
        );
        assert_eq!(
            lint_namespace(&NamespaceId::from("erc7201:")),
            alloc::vec![NamespaceLint::Empty]
        );
    }

    #[test]
    fn test_untagged_and_unqualified_namespace() {
        assert_eq!(
            lint_namespace(&NamespaceId::from("Counter")),
            alloc::vec![
                NamespaceLint::MissingFormulaTag,
                NamespaceLint::MissingOrganization
            ]
        );
        assert_eq!(
            lint_namespace(&NamespaceId::from("erc7201:acme.")),
            alloc::vec![NamespaceLint::MissingOrganization]
        );
    }
}
