use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    rsx! {
        div { class: "empty-state",
            h1 { "PAGE NOT FOUND" }
            p { "/{path}" }
            Link { class: "btn-text", to: Route::DailyRewardsManagement {}, "GO TO DAILY REWARDS" }
        }
    }
}
