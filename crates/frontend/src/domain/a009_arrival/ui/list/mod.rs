use contracts::domain::a009_arrival::{Arrival, ArrivalStatus};
use leptos::prelude::*;
use thaw::*;

use crate::domain::a009_arrival::api::arrival_api;
use crate::shared::reference_list::{use_reference_list, Column, ReferenceListView};

fn status_badge(status: ArrivalStatus) -> AnyView {
    let color = match status {
        ArrivalStatus::Expected => BadgeColor::Informative,
        ArrivalStatus::Docked => BadgeColor::Brand,
        ArrivalStatus::Weighed => BadgeColor::Warning,
        ArrivalStatus::Closed => BadgeColor::Success,
    };
    view! {
        <Badge appearance=BadgeAppearance::Tint color=color>{status.label()}</Badge>
    }
    .into_any()
}

/// `24 500.5 kg`
pub fn format_weight(kg: f64) -> String {
    let rounded = (kg * 10.0).round() / 10.0;
    let whole = rounded.trunc() as i64;
    let tenths = ((rounded - whole as f64).abs() * 10.0).round() as i64;

    let digits = whole.abs().to_string();
    let mut grouped = String::new();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(ch);
    }
    let sign = if whole < 0 { "-" } else { "" };
    if tenths == 0 {
        format!("{}{} kg", sign, grouped)
    } else {
        format!("{}{}.{} kg", sign, grouped, tenths)
    }
}

fn columns() -> Vec<Column<Arrival>> {
    vec![
        Column::text("Reference", 130.0, |a: &Arrival| a.reference.clone()),
        Column::text("Supplier", 180.0, |a: &Arrival| a.supplier.clone()),
        Column::text("Vessel", 150.0, |a: &Arrival| a.vessel.clone().unwrap_or_default()),
        Column::text("Arrival date", 110.0, |a: &Arrival| {
            a.arrival_date
                .map(|d| d.format("%d.%m.%Y").to_string())
                .unwrap_or_default()
        }),
        Column::text("Net weight", 110.0, |a: &Arrival| format_weight(a.net_weight_kg)),
        Column::new("Status", 100.0, |a: &Arrival| status_badge(a.status)),
    ]
}

#[component]
pub fn ArrivalList() -> impl IntoView {
    let controller = use_reference_list(arrival_api());

    view! {
        <ReferenceListView
            controller=controller
            columns=columns()
            page_id="a009_arrival--list"
            empty_message="No arrivals registered"
        />
    }
}
