//! The fixed table of fields a `.scard` document may contain.
//!
//! The registry is a `static` slice: it is built at compile time, never mutated, and can be
//! shared across threads without synchronization.

use serde::Serialize;

/// Allowed values of the `rarity` field, in declaration order.
pub const RARITY_VALUES: &[&str] = &["COMMON", "UNCOMMON", "RARE", "EPIC", "LEGENDARY"];

/// The field every document must define.
pub const MANDATORY_FIELD: &str = "id";

/// Value-shape rule attached to a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FieldKind {
    /// A non-empty `"..."` literal.
    QuotedString,
    /// A `"..."` literal whose content is one of `allowed` (case-insensitive).
    EnumQuotedString {
        /// Allowed members, in declaration order.
        allowed: &'static [&'static str],
    },
    /// A floating-point literal terminated by `suffix` (e.g. `1.5f`).
    FloatWithSuffix {
        /// Required trailing character.
        suffix: char,
    },
    /// A signed integer literal.
    Integer,
}

/// A known field and its value rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldSpec {
    /// Field name as written on the left of `=` (case-sensitive).
    pub name: &'static str,
    /// Value rule.
    pub kind: FieldKind,
}

/// Every recognized field, in registry order.
pub const FIELDS: &[FieldSpec] = &[
    FieldSpec {
        name: "id",
        kind: FieldKind::QuotedString,
    },
    FieldSpec {
        name: "rarity",
        kind: FieldKind::EnumQuotedString {
            allowed: RARITY_VALUES,
        },
    },
    FieldSpec {
        name: "npcName",
        kind: FieldKind::QuotedString,
    },
    FieldSpec {
        name: "npcSpeed",
        kind: FieldKind::FloatWithSuffix { suffix: 'f' },
    },
    FieldSpec {
        name: "npcPassing",
        kind: FieldKind::Integer,
    },
    FieldSpec {
        name: "npcShooting",
        kind: FieldKind::Integer,
    },
];

/// Look up a field by its exact name.
pub fn field(name: &str) -> Option<&'static FieldSpec> {
    FIELDS.iter().find(|spec| spec.name == name)
}

/// Field names in registry order.
pub fn field_names() -> impl Iterator<Item = &'static str> {
    FIELDS.iter().map(|spec| spec.name)
}
