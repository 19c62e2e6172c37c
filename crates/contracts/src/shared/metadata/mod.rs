//! Static metadata describing referential entities and their editable fields
//!
//! The generic create/edit form is built from these descriptors, so a new
//! referential only has to declare its fields once.
//!
//! ```rust,ignore
//! use contracts::domain::common::ReferenceEntity;
//! use contracts::domain::a002_country::aggregate::Country;
//!
//! for field in Country::form_fields() {
//!     println!("{} ({})", field.label, field.kind.as_str());
//! }
//! ```

mod field_type;
mod types;

pub use field_type::FieldKind;
pub use types::{EntityUiMetadata, FieldSpec};
