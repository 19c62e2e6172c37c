use contracts::domain::a006_piece_type::PieceType;
use leptos::prelude::*;

use crate::domain::a006_piece_type::api::piece_type_api;
use crate::shared::reference_list::{use_reference_list, Column, ReferenceListView};

fn columns() -> Vec<Column<PieceType>> {
    vec![
        Column::text("Name", 260.0, |p: &PieceType| p.name.clone()),
    ]
}

#[component]
pub fn PieceTypeList() -> impl IntoView {
    let controller = use_reference_list(piece_type_api());

    view! {
        <ReferenceListView controller=controller columns=columns() page_id="a006_piece_type--list" />
    }
}
