use dioxus::prelude::*;
use rewards_admin::ErrorInfo;

use crate::Route;

/// Fallback shown when a page could not load its data.
#[component]
pub fn ErrorState(info: ErrorInfo, on_retry: EventHandler<()>, back: Option<Route>) -> Element {
    let show_debug = cfg!(debug_assertions) && !info.debug.is_empty();

    rsx! {
        div { class: "error-state border p-2",
            h2 { "{info.title}" }
            p { class: "error-message", "{info.message}" }

            div { class: "error-actions",
                if info.retryable {
                    button { onclick: move |_| on_retry.call(()), "TRY AGAIN" }
                }
                if let Some(route) = back {
                    Link { class: "btn-text", to: route, "GO BACK" }
                }
            }

            if show_debug {
                dl { class: "error-debug",
                    for (key, value) in info.debug.iter() {
                        dt { "{key}" }
                        dd { "{value}" }
                    }
                }
            }
        }
    }
}
