//! Entity and field descriptors
//!
//! All values are 'static so descriptors can live in `const` tables.

use super::field_type::FieldKind;

// ============================================================================
// Entity-level metadata
// ============================================================================

/// UI names of a referential entity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntityUiMetadata {
    /// Singular, e.g. "Supplier"
    pub element_name: &'static str,
    /// Plural, e.g. "Suppliers"
    pub list_name: &'static str,
    /// Icon key understood by the frontend icon set
    pub icon: &'static str,
}

// ============================================================================
// Field-level metadata
// ============================================================================

/// One editable field of a DTO
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// JSON key of the field in the DTO
    pub key: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    pub placeholder: &'static str,
}

impl FieldSpec {
    pub const fn text(key: &'static str, label: &'static str) -> Self {
        Self {
            key,
            label,
            kind: FieldKind::Text,
            required: false,
            placeholder: "",
        }
    }

    pub const fn number(key: &'static str, label: &'static str) -> Self {
        Self {
            key,
            label,
            kind: FieldKind::Number,
            required: false,
            placeholder: "",
        }
    }

    pub const fn date(key: &'static str, label: &'static str) -> Self {
        Self {
            key,
            label,
            kind: FieldKind::Date,
            required: false,
            placeholder: "",
        }
    }

    pub const fn checkbox(key: &'static str, label: &'static str) -> Self {
        Self {
            key,
            label,
            kind: FieldKind::Checkbox,
            required: false,
            placeholder: "",
        }
    }

    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub const fn with_placeholder(mut self, placeholder: &'static str) -> Self {
        self.placeholder = placeholder;
        self
    }
}
