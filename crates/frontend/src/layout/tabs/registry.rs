//! Tab content registry: maps a tab key to its view.

use crate::domain::a001_supplier::ui::list::SupplierList;
use crate::domain::a002_country::ui::list::CountryList;
use crate::domain::a003_bank::ui::list::BankList;
use crate::domain::a004_currency::ui::list::CurrencyList;
use crate::domain::a005_contract_condition::ui::list::ContractConditionList;
use crate::domain::a006_piece_type::ui::list::PieceTypeList;
use crate::domain::a007_quality::ui::list::QualityList;
use crate::domain::a008_city::ui::list::CityList;
use crate::domain::a009_arrival::ui::list::ArrivalList;
use crate::domain::a009_arrival::ui::planning::ArrivalPlanning;
use leptos::prelude::*;

/// Content of the tab `key`, or a placeholder for unknown keys.
pub fn render_tab_content(key: &str) -> AnyView {
    match key {
        "a001_supplier" => view! { <SupplierList /> }.into_any(),
        "a002_country" => view! { <CountryList /> }.into_any(),
        "a003_bank" => view! { <BankList /> }.into_any(),
        "a004_currency" => view! { <CurrencyList /> }.into_any(),
        "a005_contract_condition" => view! { <ContractConditionList /> }.into_any(),
        "a006_piece_type" => view! { <PieceTypeList /> }.into_any(),
        "a007_quality" => view! { <QualityList /> }.into_any(),
        "a008_city" => view! { <CityList /> }.into_any(),
        "a009_arrival" => view! { <ArrivalList /> }.into_any(),
        "a009_arrival_planning" => view! { <ArrivalPlanning /> }.into_any(),
        _ => {
            log::warn!("unknown tab type: {}", key);
            view! { <div class="placeholder">"Not implemented yet"</div> }.into_any()
        }
    }
}
