use contracts::domain::a003_bank::Bank;
use leptos::prelude::*;

use crate::domain::a003_bank::api::bank_api;
use crate::shared::reference_list::{use_reference_list, Column, ReferenceListView};

fn columns() -> Vec<Column<Bank>> {
    vec![
        Column::text("Code", 90.0, |b: &Bank| b.code.clone()),
        Column::text("Name", 220.0, |b: &Bank| b.name.clone()),
        Column::text("SWIFT", 120.0, |b: &Bank| b.swift.clone().unwrap_or_default()),
        Column::status("Status"),
    ]
}

#[component]
pub fn BankList() -> impl IntoView {
    let controller = use_reference_list(bank_api());

    view! {
        <ReferenceListView controller=controller columns=columns() page_id="a003_bank--list" />
    }
}
