use contracts::domain::a007_quality::Quality;
use leptos::prelude::*;

use crate::domain::a007_quality::api::quality_api;
use crate::shared::reference_list::{use_reference_list, Column, ReferenceListView};

fn columns() -> Vec<Column<Quality>> {
    vec![
        Column::text("Name", 240.0, |q: &Quality| q.name.clone()),
        Column::status("Status"),
    ]
}

#[component]
pub fn QualityList() -> impl IntoView {
    let controller = use_reference_list(quality_api());

    view! {
        <ReferenceListView controller=controller columns=columns() page_id="a007_quality--list" />
    }
}
