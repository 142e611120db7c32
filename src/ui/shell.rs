use dioxus::prelude::*;

use crate::app::{Route, APP_NAME, APP_TAGLINE};

#[component]
pub fn Shell(children: Element) -> Element {
    let current_route = use_route::<Route>();
    let nav = use_navigator();

    rsx! {
        div { class: "site",
            header { class: "header",
                div { class: "container header-inner",
                    div { class: "brand",
                        span { class: "brand-logo", "🌍" }
                        div {
                            h1 { "{APP_NAME}" }
                            p { class: "tagline", "{APP_TAGLINE}" }
                        }
                    }
                    nav { class: "nav",
                        NavButton { active: matches!(current_route, Route::Calculator {}), onclick: move |_| { nav.push(Route::Calculator {}); }, label: "🧮 Calculator" }
                        NavButton { active: matches!(current_route, Route::Tracking {}), onclick: move |_| { nav.push(Route::Tracking {}); }, label: "🔍 Tracking" }
                        NavButton { active: matches!(current_route, Route::Coverage {}), onclick: move |_| { nav.push(Route::Coverage {}); }, label: "🗺️ Coverage" }
                    }
                }
            }
            main { class: "container",
                {children}
            }
        }
    }
}

#[component]
fn NavButton(active: bool, onclick: EventHandler<()>, label: &'static str) -> Element {
    let class = if active { "nav-link active" } else { "nav-link" };

    rsx! {
        button {
            class: "{class}",
            onclick: move |_| onclick.call(()),
            "{label}"
        }
    }
}
