use dioxus::prelude::*;

#[component]
pub fn DetailField(label: String, value: String) -> Element {
    rsx! {
        div { class: "detail-field",
            label { "{label}" }
            span { "{value}" }
        }
    }
}

#[component]
pub fn Loading() -> Element {
    rsx! {
        div { class: "loading", "LOADING..." }
    }
}
