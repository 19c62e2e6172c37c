//! Tab titles by tab key.
//!
//! Entity tabs take `list_name` from the contracts metadata, the rest are
//! listed here.

use contracts::domain::a001_supplier::Supplier;
use contracts::domain::a002_country::Country;
use contracts::domain::a003_bank::Bank;
use contracts::domain::a004_currency::Currency;
use contracts::domain::a005_contract_condition::ContractCondition;
use contracts::domain::a006_piece_type::PieceType;
use contracts::domain::a007_quality::Quality;
use contracts::domain::a008_city::City;
use contracts::domain::a009_arrival::Arrival;
use contracts::domain::common::ReferenceEntity;

/// Readable tab title for `key`; empty for unknown keys.
pub fn tab_label_for_key(key: &str) -> &'static str {
    match key {
        // ── Referentials ──────────────────────────────────────────────────
        "a001_supplier" => Supplier::ui().list_name,
        "a002_country" => Country::ui().list_name,
        "a003_bank" => Bank::ui().list_name,
        "a004_currency" => Currency::ui().list_name,
        "a005_contract_condition" => ContractCondition::ui().list_name,
        "a006_piece_type" => PieceType::ui().list_name,
        "a007_quality" => Quality::ui().list_name,
        "a008_city" => City::ui().list_name,

        // ── Operations ────────────────────────────────────────────────────
        "a009_arrival" => Arrival::ui().list_name,
        "a009_arrival_planning" => "Planning",

        _ => "",
    }
}
