use contracts::domain::a008_city::City;
use leptos::prelude::*;

use crate::domain::a008_city::api::city_api;
use crate::shared::reference_list::{use_reference_list, Column, ReferenceListView};

fn columns() -> Vec<Column<City>> {
    vec![
        Column::text("Name", 200.0, |c: &City| c.name.clone()),
        Column::text("Postal code", 110.0, |c: &City| c.postal_code.clone().unwrap_or_default()),
        Column::text("Country", 140.0, |c: &City| c.country.clone().unwrap_or_default()),
    ]
}

#[component]
pub fn CityList() -> impl IntoView {
    let controller = use_reference_list(city_api());

    view! {
        <ReferenceListView controller=controller columns=columns() page_id="a008_city--list" />
    }
}
