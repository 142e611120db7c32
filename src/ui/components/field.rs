use dioxus::prelude::*;

/// Labelled text input with an inline error slot underneath.
#[component]
pub fn TextField(
    #[props(into)] id: String,
    #[props(into)] label: String,
    value: String,
    #[props(into)] placeholder: String,
    error: Option<String>,
    #[props(default = "text".to_string(), into)] input_type: String,
    #[props(default = false)] disabled: bool,
    oninput: EventHandler<String>,
) -> Element {
    let input_class = if error.is_some() { "input error" } else { "input" };

    rsx! {
        div { class: "form-group",
            label { r#for: "{id}", "{label}" }
            input {
                id: "{id}",
                class: "{input_class}",
                r#type: "{input_type}",
                value: "{value}",
                placeholder: "{placeholder}",
                disabled: disabled,
                oninput: move |evt| oninput.call(evt.value()),
            }
            if let Some(message) = error {
                div { class: "error-message", "{message}" }
            }
        }
    }
}
