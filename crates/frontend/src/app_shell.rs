//! Main layout: Shell with the sidebar menu and the tab area.

use crate::layout::center::tabs::Tabs;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::left::Sidebar;
use crate::layout::Shell;
use crate::shared::notifications::NotificationHost;
use leptos::prelude::*;

/// Syncs the open tab with `?active=...` once on creation.
#[component]
pub fn MainLayout() -> impl IntoView {
    let tabs_store = expect_context::<AppGlobalContext>();
    tabs_store.init_url_sync();

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=|| view! { <Tabs /> }.into_any()
        />
        <NotificationHost />
    }
}
