//! Sidebar with collapsible menu groups

use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_label_for_key;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    icon: &'static str,
    items: Vec<(&'static str, &'static str, &'static str)>, // (tab key, label, icon)
}

fn get_menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "referentials",
            label: "Referentials",
            icon: "database",
            items: vec![
                ("a001_supplier", tab_label_for_key("a001_supplier"), "suppliers"),
                ("a002_country", tab_label_for_key("a002_country"), "globe"),
                ("a008_city", tab_label_for_key("a008_city"), "building"),
                ("a003_bank", tab_label_for_key("a003_bank"), "bank"),
                ("a004_currency", tab_label_for_key("a004_currency"), "coins"),
                ("a005_contract_condition", tab_label_for_key("a005_contract_condition"), "file-text"),
                ("a006_piece_type", tab_label_for_key("a006_piece_type"), "layers"),
                ("a007_quality", tab_label_for_key("a007_quality"), "tag"),
            ],
        },
        MenuGroup {
            id: "operations",
            label: "Operations",
            icon: "anchor",
            items: vec![
                ("a009_arrival", tab_label_for_key("a009_arrival"), "shipments"),
                ("a009_arrival_planning", tab_label_for_key("a009_arrival_planning"), "calendar"),
            ],
        },
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = expect_context::<AppGlobalContext>();

    let expanded_groups = RwSignal::new(vec!["referentials".to_string(), "operations".to_string()]);

    view! {
        <div class="app-sidebar__content">
            {get_menu_groups().into_iter().map(|group| {
                let group_id = group.id.to_string();
                let gid_exp = group_id.clone();
                let gid_show = group_id.clone();
                let items_stored = StoredValue::new(group.items.clone());

                view! {
                    <div>
                        <div
                            class="app-sidebar__item"
                            style:padding-left="12px"
                            on:click=move |_| {
                                let gid = group_id.clone();
                                expanded_groups.update(move |items| {
                                    if let Some(pos) = items.iter().position(|x| x == &gid) {
                                        items.remove(pos);
                                    } else {
                                        items.push(gid);
                                    }
                                });
                            }
                        >
                            <div class="app-sidebar__item-content">
                                {icon(group.icon)}
                                <span>{group.label}</span>
                            </div>
                            <div
                                class="app-sidebar__chevron"
                                class:app-sidebar__chevron--expanded=move || expanded_groups.get().contains(&gid_exp)
                            >
                                {icon("chevron-right")}
                            </div>
                        </div>

                        <Show when=move || expanded_groups.get().contains(&gid_show)>
                            <div class="app-sidebar__children">
                                {items_stored.get_value().into_iter().map(|(id, label, icon_name)| {
                                    view! {
                                        <div
                                            class="app-sidebar__item"
                                            class:app-sidebar__item--active=move || {
                                                ctx.active.with(|a| a.as_deref() == Some(id))
                                            }
                                            style:padding-left="10px"
                                            on:click=move |_| ctx.open_tab(id, label)
                                        >
                                            <div class="app-sidebar__item-content">
                                                {icon(icon_name)}
                                                <span>{label}</span>
                                            </div>
                                        </div>
                                    }
                                }).collect_view()}
                            </div>
                        </Show>
                    </div>
                }
            }).collect_view()}
        </div>
    }
}
