use contracts::domain::a005_contract_condition::ContractCondition;
use leptos::prelude::*;

use crate::domain::a005_contract_condition::api::contract_condition_api;
use crate::shared::reference_list::{use_reference_list, Column, ReferenceListView};

fn columns() -> Vec<Column<ContractCondition>> {
    vec![
        Column::text("Code", 90.0, |c: &ContractCondition| c.code.clone()),
        Column::text("Label", 220.0, |c: &ContractCondition| c.label.clone()),
        Column::text("Payment term", 120.0, |c: &ContractCondition| format!("{} days", c.payment_days)),
        Column::status("Status"),
    ]
}

#[component]
pub fn ContractConditionList() -> impl IntoView {
    let controller = use_reference_list(contract_condition_api());

    view! {
        <ReferenceListView controller=controller columns=columns() page_id="a005_contract_condition--list" />
    }
}
