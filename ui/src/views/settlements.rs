use dioxus::prelude::*;
use rewards_admin::models::Settlement;
use rewards_admin::settlements::{SETTLEMENT_STATUSES, SettlementFilters, settlement_totals};
use rewards_admin::{ListState, PageState, derive_view};

use crate::api;
use crate::components::{ErrorState, Loading, Pagination};
use crate::utils::{format_currency, format_date, now};
use crate::Route;

fn status_class(status: &str) -> &'static str {
    match status {
        "settled" => "badge active",
        "failed" => "badge danger",
        _ => "badge pending",
    }
}

#[component]
pub fn SettlementManagement() -> Element {
    let mut state = use_signal(PageState::<Vec<Settlement>>::default);
    let mut list = use_signal(ListState::<SettlementFilters>::default);
    let mut reload = use_signal(|| 0u32);

    use_effect(move || {
        reload();
        state.set(PageState::Loading);
        spawn(async move {
            let result = api::client().list_settlements().await;
            state.set(PageState::from_result(result));
        });
    });

    let settlements = match state() {
        PageState::Loading => {
            return rsx! {
                Loading {}
            }
        }
        PageState::Failed(info) => {
            return rsx! {
                ErrorState { info, on_retry: move |_| reload += 1 }
            }
        }
        PageState::Ready(settlements) => settlements,
    };

    let totals = settlement_totals(&settlements);
    let view = derive_view(&settlements, &list.read(), now());
    let search = list.read().search().to_string();
    let status = list.read().filters().status.clone().unwrap_or_default();

    rsx! {
        div { class: "content-header",
            h1 { "SETTLEMENTS" }
        }

        div { class: "summary-cards",
            div { class: "card border p-2",
                label { "COMMISSION" }
                span { "{format_currency(totals.commission)}" }
            }
            div { class: "card border p-2",
                label { "SETTLED" }
                span { "{format_currency(totals.settled)}" }
            }
            div { class: "card border p-2",
                label { "PENDING" }
                span { "{format_currency(totals.pending)}" }
            }
            div { class: "card border p-2",
                label { "NET PAYOUT" }
                span { "{format_currency(totals.net)}" }
            }
        }

        div { class: "filters",
            div { class: "filter-group",
                label { "SEARCH" }
                input {
                    r#type: "text",
                    placeholder: "Settlement, store, user, reference...",
                    value: "{search}",
                    oninput: move |e| list.write().set_search(e.value()),
                }
            }

            div { class: "filter-group",
                label { "STATUS" }
                select {
                    value: "{status}",
                    onchange: move |e| {
                        let value = e.value();
                        list.write().update_filters(|f| {
                            f.status = (!value.is_empty()).then_some(value);
                        });
                    },
                    option { value: "", "ALL" }
                    for s in SETTLEMENT_STATUSES {
                        option { value: "{s}", "{s.to_uppercase()}" }
                    }
                }
            }
        }

        if view.is_empty() {
            div { class: "empty-state", "NO SETTLEMENTS FOUND" }
        } else {
            table { class: "data-table",
                thead {
                    tr {
                        th { "SETTLEMENT" }
                        th { "STORE" }
                        th { "STATUS" }
                        th { "TXNS" }
                        th { "AMOUNT" }
                        th { "COMMISSION" }
                        th { "SETTLED" }
                        th { "PENDING" }
                        th { "CREATED" }
                    }
                }
                tbody {
                    for settlement in view.rows.iter().cloned() {
                        tr { key: "{settlement.settlement_id}",
                            td {
                                Link {
                                    to: Route::SettlementDetails { id: settlement.settlement_id.clone() },
                                    "{settlement.settlement_id}"
                                }
                            }
                            td { "{settlement.store_name}" }
                            td {
                                span {
                                    class: status_class(&settlement.settlement_status),
                                    "{settlement.settlement_status.to_uppercase()}"
                                }
                            }
                            td { "{settlement.total_transactions}" }
                            td { "{format_currency(settlement.settlement_amount)}" }
                            td { "{format_currency(settlement.commission_amount)}" }
                            td { "{format_currency(settlement.settled_amount)}" }
                            td { "{format_currency(settlement.pending_amount)}" }
                            td { "{format_date(settlement.created_at.as_deref())}" }
                        }
                    }
                }
            }

            Pagination {
                current_page: view.current_page,
                total_pages: view.total_pages,
                pages: view.pages.clone(),
                first_index: view.first_index,
                last_index: view.last_index,
                filtered_count: view.filtered_count,
                on_page: move |page| list.write().set_page(page),
            }
        }
    }
}
