use dioxus::prelude::*;
use rewards_admin::list_view::StatusFilter;
use rewards_admin::models::Reward;
use rewards_admin::rewards::{RewardFilters, summarize};
use rewards_admin::{ListState, PageState, derive_view};

use crate::api;
use crate::components::{ErrorState, Loading, Pagination};
use crate::utils::{active_label, format_currency, format_date, now};

#[component]
pub fn RewardManagement() -> Element {
    let mut state = use_signal(PageState::<Vec<Reward>>::default);
    let mut list = use_signal(ListState::<RewardFilters>::default);
    let mut reload = use_signal(|| 0u32);

    use_effect(move || {
        reload();
        state.set(PageState::Loading);
        spawn(async move {
            let result = api::client().list_rewards().await;
            state.set(PageState::from_result(result));
        });
    });

    let deactivate = move |id: String| {
        if !api::confirm("Are you sure you want to deactivate this reward?") {
            return;
        }
        spawn(async move {
            let client = api::client();
            if api::run_action(client.deactivate_reward(&id), "Reward deactivated successfully").await {
                reload += 1;
            }
        });
    };

    let delete = move |id: String| {
        if !api::confirm("Are you sure you want to delete this reward? This cannot be undone.") {
            return;
        }
        spawn(async move {
            let client = api::client();
            if api::run_action(client.delete_reward(&id), "Reward deleted successfully").await {
                reload += 1;
            }
        });
    };

    let rewards = match state() {
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
        PageState::Ready(rewards) => rewards,
    };

    let summary = summarize(&rewards);
    let view = derive_view(&rewards, &list.read(), now());
    let search = list.read().search().to_string();
    let status = list.read().filters().status.as_str();
    let selected_type = list.read().filters().reward_type.clone().unwrap_or_default();

    let mut types: Vec<String> = rewards.iter().map(|r| r.reward_type.clone()).collect();
    types.sort();
    types.dedup();

    rsx! {
        div { class: "content-header",
            h1 { "REWARDS" }
        }

        div { class: "summary-cards",
            div { class: "card border p-2",
                label { "TOTAL" }
                span { "{summary.total}" }
            }
            div { class: "card border p-2",
                label { "ACTIVE" }
                span { "{summary.active}" }
            }
            div { class: "card border p-2",
                label { "TIMES AWARDED" }
                span { "{summary.total_awarded}" }
            }
            div { class: "card border p-2",
                label { "CREDITS ISSUED" }
                span { "{format_currency(summary.total_credits)}" }
            }
        }

        div { class: "filters",
            div { class: "filter-group",
                label { "SEARCH" }
                input {
                    r#type: "text",
                    placeholder: "Search rewards...",
                    value: "{search}",
                    oninput: move |e| list.write().set_search(e.value()),
                }
            }

            div { class: "filter-group",
                label { "STATUS" }
                select {
                    value: "{status}",
                    onchange: move |e| {
                        let status = StatusFilter::from_param(&e.value());
                        list.write().update_filters(|f| f.status = status);
                    },
                    option { value: "all", "ALL" }
                    option { value: "active", "ACTIVE" }
                    option { value: "inactive", "INACTIVE" }
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
        }

        if view.is_empty() {
            div { class: "empty-state", "NO REWARDS FOUND" }
        } else {
            table { class: "data-table",
                thead {
                    tr {
                        th { "NAME" }
                        th { "TYPE" }
                        th { "STATUS" }
                        th { "NORMAL" }
                        th { "VIP" }
                        th { "AWARDED" }
                        th { "CREDITS" }
                        th { "CREATED" }
                        th { "" }
                    }
                }
                tbody {
                    for reward in view.rows.iter().cloned() {
                        {
                            let deactivate_id = reward.id.clone();
                            let delete_id = reward.id.clone();
                            rsx! {
                                tr { key: "{reward.id}",
                                    td { "{reward.reward_name}" }
                                    td { "{reward.reward_type}" }
                                    td {
                                        span {
                                            class: if reward.is_active { "badge active" } else { "badge inactive" },
                                            "{active_label(reward.is_active)}"
                                        }
                                    }
                                    td { "{format_currency(reward.normal_reward_value)}" }
                                    td { "{format_currency(reward.vip_reward_value)}" }
                                    td { "{reward.total_awarded}" }
                                    td { "{format_currency(reward.total_credits)}" }
                                    td { "{format_date(reward.created_at.as_deref())}" }
                                    td { class: "row-actions",
                                        if reward.is_active {
                                            button {
                                                class: "btn-text",
                                                onclick: move |_| deactivate(deactivate_id.clone()),
                                                "DEACTIVATE"
                                            }
                                        }
                                        button {
                                            class: "btn-text danger",
                                            onclick: move |_| delete(delete_id.clone()),
                                            "DELETE"
                                        }
                                    }
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
