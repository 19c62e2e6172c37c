//! Generic paginated list of a referential entity.
//!
//! Every referential screen is the same controller over a different
//! [`api::ReferenceApi`]: the entity module only declares its endpoints
//! and its table columns.
//!
//! ```rust,ignore
//! let controller = use_reference_list(supplier_api());
//! view! { <ReferenceListView controller=controller columns=columns() page_id="a001_supplier--list" /> }
//! ```

pub mod api;
pub mod controller;
pub mod form_modal;
pub mod list_view;
pub mod state;

pub use api::{EntityApi, EntityEndpoints, IdPlacement, PayloadShape, ReferenceApi, UpdateStrategy};
pub use controller::{use_reference_list, ReferenceListController};
pub use list_view::{Column, ReferenceListView};
pub use state::ListState;
