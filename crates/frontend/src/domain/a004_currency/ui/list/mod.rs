use contracts::domain::a004_currency::Currency;
use leptos::prelude::*;

use crate::domain::a004_currency::api::currency_api;
use crate::shared::reference_list::{use_reference_list, Column, ReferenceListView};

fn columns() -> Vec<Column<Currency>> {
    vec![
        Column::text("Code", 80.0, |c: &Currency| c.code.clone()),
        Column::text("Name", 200.0, |c: &Currency| c.name.clone()),
        Column::text("Symbol", 80.0, |c: &Currency| c.symbol.clone().unwrap_or_default()),
    ]
}

#[component]
pub fn CurrencyList() -> impl IntoView {
    let controller = use_reference_list(currency_api());

    view! {
        <ReferenceListView controller=controller columns=columns() page_id="a004_currency--list" />
    }
}
