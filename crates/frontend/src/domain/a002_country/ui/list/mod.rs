use contracts::domain::a002_country::Country;
use leptos::prelude::*;

use crate::domain::a002_country::api::country_api;
use crate::shared::reference_list::{use_reference_list, Column, ReferenceListView};

fn columns() -> Vec<Column<Country>> {
    vec![
        Column::text("ISO code", 90.0, |c: &Country| c.code.clone()),
        Column::text("Name", 220.0, |c: &Country| c.name.clone()),
    ]
}

#[component]
pub fn CountryList() -> impl IntoView {
    let controller = use_reference_list(country_api());

    view! {
        <ReferenceListView controller=controller columns=columns() page_id="a002_country--list" />
    }
}
