use dioxus::prelude::*;

use crate::{
    config::SiteConfig,
    domain::SiteState,
    infra::mock_desk::MockDesk,
    ui::{
        components::toast::{Toast, ToastMessage},
        pages::{CalculatorPage, CoveragePage, TrackingPage},
        shell::Shell,
    },
    util::assets,
};

pub const APP_NAME: &str = "GlobalShipp";
pub const APP_TAGLINE: &str = "Simplifying global logistics";

#[derive(Routable, Clone, PartialEq)]
pub enum Route {
    #[route("/")]
    #[route("/calculator")]
    Calculator {},
    #[route("/tracking")]
    Tracking {},
    #[route("/coverage")]
    Coverage {},
}

#[component]
pub fn App() -> Element {
    let config = use_hook(SiteConfig::load);
    use_context_provider(|| MockDesk::new(config.simulation_policy()));
    use_context_provider(|| config.clone());

    let state = use_signal(SiteState::default);
    use_context_provider(|| state);

    let toasts = use_signal(Vec::<ToastMessage>::new);
    use_context_provider(|| toasts);

    rsx! {
        document::Title { "{APP_NAME}" }
        document::Style { "{assets::main_css()}" }
        Router::<Route> {}
        Toast {}
    }
}

#[component]
pub fn Calculator() -> Element {
    rsx! { Shell { CalculatorPage {} } }
}

#[component]
pub fn Tracking() -> Element {
    rsx! { Shell { TrackingPage {} } }
}

#[component]
pub fn Coverage() -> Element {
    rsx! { Shell { CoveragePage {} } }
}
