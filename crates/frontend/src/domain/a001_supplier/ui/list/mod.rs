use contracts::domain::a001_supplier::Supplier;
use leptos::prelude::*;

use crate::domain::a001_supplier::api::supplier_api;
use crate::shared::reference_list::{use_reference_list, Column, ReferenceListView};

fn columns() -> Vec<Column<Supplier>> {
    vec![
        Column::text("Code", 90.0, |s: &Supplier| s.code.clone()),
        Column::text("Name", 200.0, |s: &Supplier| s.name.clone()),
        Column::text("Country", 120.0, |s: &Supplier| s.country.clone().unwrap_or_default()),
        Column::text("E-mail", 180.0, |s: &Supplier| s.email.clone().unwrap_or_default()),
        Column::text("Phone", 120.0, |s: &Supplier| s.phone.clone().unwrap_or_default()),
        Column::status("Status"),
    ]
}

#[component]
pub fn SupplierList() -> impl IntoView {
    let controller = use_reference_list(supplier_api());

    view! {
        <ReferenceListView controller=controller columns=columns() page_id="a001_supplier--list" />
    }
}
