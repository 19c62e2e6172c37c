use crate::app_shell::MainLayout;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::config::AppConfig;
use crate::shared::notifications::NotificationService;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::from_env();
    log::info!("API base: {}", config.api_base);

    provide_context(config);
    provide_context(NotificationService::new());
    provide_context(AppGlobalContext::new());

    view! {
        <MainLayout />
    }
}
