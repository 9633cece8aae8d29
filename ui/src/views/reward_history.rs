use dioxus::prelude::*;
use rewards_admin::coerce::or_na;
use rewards_admin::constants::NOT_AVAILABLE;
use rewards_admin::list_view::{DateRange, filter_items};
use rewards_admin::models::{CreditDebit, RewardHistory};
use rewards_admin::reward_history::{RewardHistoryFilters, ledger_totals};
use rewards_admin::{ListState, PageState, derive_view};

use crate::api;
use crate::components::{ErrorState, Loading, Pagination};
use crate::utils::{format_currency, format_datetime, format_signed, now};
use crate::Route;

#[component]
pub fn RewardHistoryManagement() -> Element {
    let mut state = use_signal(PageState::<Vec<RewardHistory>>::default);
    let mut list = use_signal(ListState::<RewardHistoryFilters>::default);
    let mut reload = use_signal(|| 0u32);

    use_effect(move || {
        reload();
        state.set(PageState::Loading);
        spawn(async move {
            let result = api::client().list_reward_history().await;
            state.set(PageState::from_result(result));
        });
    });

    let history = match state() {
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
        PageState::Ready(history) => history,
    };

    let now = now();
    let totals = ledger_totals(filter_items(&history, &list.read(), now));
    let view = derive_view(&history, &list.read(), now);

    let search = list.read().search().to_string();
    let selected_type = list.read().filters().reward_type.clone().unwrap_or_default();
    let direction = list
        .read()
        .filters()
        .credit_debit
        .map(|cd| cd.as_str())
        .unwrap_or("");
    let range = list.read().filters().date_range.as_str();

    let mut types: Vec<String> = history.iter().map(|h| h.reward_type.clone()).collect();
    types.sort();
    types.dedup();

    rsx! {
        div { class: "content-header",
            h1 { "REWARD HISTORY" }
        }

        div { class: "summary-cards",
            div { class: "card border p-2",
                label { "CREDITED" }
                span { class: "amount income", "{format_currency(totals.credited)}" }
            }
            div { class: "card border p-2",
                label { "DEBITED" }
                span { class: "amount expense", "{format_currency(totals.debited)}" }
            }
            div { class: "card border p-2",
                label { "NET" }
                span { "{format_signed(totals.net())}" }
            }
        }

        div { class: "filters",
            div { class: "filter-group",
                label { "SEARCH" }
                input {
                    r#type: "text",
                    placeholder: "User, reward, transaction, store...",
                    value: "{search}",
                    oninput: move |e| list.write().set_search(e.value()),
                }
            }

            div { class: "filter-group",
                label { "TYPE" }
                select {
                    value: "{selected_type}",
                    onchange: move |e| {
                        let value = e.value();
                        list.write().update_filters(|f| {
                            f.reward_type = (!value.is_empty()).then_some(value);
                        });
                    },
                    option { value: "", "ALL" }
                    for kind in types {
                        option { value: "{kind}", "{kind}" }
                    }
                }
            }

            div { class: "filter-group",
                label { "DIRECTION" }
                select {
                    value: "{direction}",
                    onchange: move |e| {
                        let value = e.value();
                        let credit_debit = (!value.is_empty()).then(|| CreditDebit::parse(&value));
                        list.write().update_filters(|f| f.credit_debit = credit_debit);
                    },
                    option { value: "", "ALL" }
                    option { value: "credit", "CREDIT" }
                    option { value: "debit", "DEBIT" }
                }
            }

            div { class: "filter-group",
                label { "DATE" }
                select {
                    value: "{range}",
                    onchange: move |e| {
                        let range = DateRange::from_param(&e.value());
                        list.write().update_filters(|f| f.date_range = range);
                    },
                    option { value: "all", "ALL TIME" }
                    option { value: "today", "TODAY" }
                    option { value: "week", "LAST 7 DAYS" }
                    option { value: "month", "LAST 30 DAYS" }
                }
            }

            button { class: "btn-text", onclick: move |_| list.write().clear(), "CLEAR" }
        }

        if view.is_empty() {
            div { class: "empty-state", "NO REWARD HISTORY FOUND" }
        } else {
            table { class: "data-table",
                thead {
                    tr {
                        th { "DATE" }
                        th { "USER" }
                        th { "REWARD" }
                        th { "TYPE" }
                        th { "AMOUNT" }
                        th { "TRANSACTION" }
                        th { "STORE" }
                    }
                }
                tbody {
                    for entry in view.rows.iter().cloned() {
                        {
                            let store = or_na(entry.store_name.as_deref()).to_string();
                            let transaction_label = entry
                                .transaction_number
                                .clone()
                                .or_else(|| entry.transaction_id.clone())
                                .unwrap_or_else(|| NOT_AVAILABLE.to_string());
                            let amount_class = if entry.credit_debit == CreditDebit::Debit {
                                "amount expense"
                            } else {
                                "amount income"
                            };
                            rsx! {
                                tr { key: "{entry.id}",
                                    td {
                                        Link {
                                            to: Route::RewardHistoryDetails { id: entry.id.clone() },
                                            "{format_datetime(entry.created_at.as_deref())}"
                                        }
                                    }
                                    td {
                                        if let Some(user_id) = entry.user_id.clone() {
                                            Link { to: Route::UserDetails { id: user_id }, "{entry.user_name}" }
                                        } else {
                                            "{entry.user_name}"
                                        }
                                        if let Some(email) = entry.user_email.clone() {
                                            div { class: "subtle", "{email}" }
                                        }
                                    }
                                    td { "{entry.reward_name}" }
                                    td { "{entry.reward_type}" }
                                    td { class: amount_class, "{format_signed(entry.signed_amount())}" }
                                    td {
                                        if let Some(id) = entry.transaction_id.clone() {
                                            Link { to: Route::TransactionDetails { id }, "{transaction_label}" }
                                        } else {
                                            "{transaction_label}"
                                        }
                                    }
                                    td { "{store}" }
                                }
                            }
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
