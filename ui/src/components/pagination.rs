use dioxus::prelude::*;

/// Summary line plus previous / numbered / next page buttons.
#[component]
pub fn Pagination(
    current_page: usize,
    total_pages: usize,
    pages: Vec<usize>,
    first_index: usize,
    last_index: usize,
    filtered_count: usize,
    on_page: EventHandler<usize>,
) -> Element {
    let has_previous = current_page > 1;
    let has_next = current_page < total_pages;

    rsx! {
        div { class: "pagination",
            span { class: "page-summary",
                "SHOWING {first_index}-{last_index} OF {filtered_count}"
            }
            if total_pages > 1 {
                div { class: "page-buttons",
                    button {
                        disabled: !has_previous,
                        onclick: move |_| on_page.call(current_page.saturating_sub(1)),
                        "PREV"
                    }
                    for page in pages {
                        button {
                            key: "{page}",
                            class: if page == current_page { "active" } else { "" },
                            onclick: move |_| on_page.call(page),
                            "{page}"
                        }
                    }
                    button {
                        disabled: !has_next,
                        onclick: move |_| on_page.call(current_page + 1),
                        "NEXT"
                    }
                }
            }
        }
    }
}
