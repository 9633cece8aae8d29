use dioxus::prelude::*;
use rewards_admin::campaigns::{CampaignFilters, campaign_types};
use rewards_admin::list_view::StatusFilter;
use rewards_admin::models::Campaign;
use rewards_admin::{ListState, PageState, derive_view};

use crate::api;
use crate::components::{ErrorState, Loading, Pagination};
use crate::utils::{active_label, format_date, now};

#[component]
pub fn DailyRewardsManagement() -> Element {
    let mut state = use_signal(PageState::<Vec<Campaign>>::default);
    let mut list = use_signal(ListState::<CampaignFilters>::default);
    let mut reload = use_signal(|| 0u32);

    use_effect(move || {
        reload();
        state.set(PageState::Loading);
        spawn(async move {
            let result = api::client().list_campaigns().await;
            state.set(PageState::from_result(result));
        });
    });

    let toggle = move |(id, active): (String, bool)| {
        let verb = if active { "activate" } else { "deactivate" };
        if !api::confirm(&format!("Are you sure you want to {} this campaign?", verb)) {
            return;
        }
        spawn(async move {
            let client = api::client();
            let done = format!("Campaign {}d successfully", verb);
            if api::run_action(client.set_campaign_active(&id, active), &done).await {
                reload += 1;
            }
        });
    };

    let delete = move |id: String| {
        if !api::confirm("Are you sure you want to delete this campaign? This cannot be undone.") {
            return;
        }
        spawn(async move {
            let client = api::client();
            if api::run_action(client.delete_campaign(&id), "Campaign deleted successfully").await {
                reload += 1;
            }
        });
    };

    let campaigns = match state() {
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
        PageState::Ready(campaigns) => campaigns,
    };

    let view = derive_view(&campaigns, &list.read(), now());
    let types = campaign_types(&campaigns);
    let search = list.read().search().to_string();
    let status = list.read().filters().status.as_str();
    let selected_type = list.read().filters().campaign_type.clone().unwrap_or_default();
    let active_count = campaigns.iter().filter(|c| c.is_active).count();

    rsx! {
        div { class: "content-header",
            h1 { "DAILY REWARDS" }
            span { class: "subtle", "{campaigns.len()} CAMPAIGNS · {active_count} ACTIVE" }
        }

        div { class: "filters",
            div { class: "filter-group",
                label { "SEARCH" }
                input {
                    r#type: "text",
                    placeholder: "Search campaigns...",
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
                            f.campaign_type = (!value.is_empty()).then_some(value);
                        });
                    },
                    option { value: "", "ALL" }
                    for kind in types {
                        option { value: "{kind}", "{kind}" }
                    }
                }
            }

            button { class: "btn-text", onclick: move |_| list.write().clear(), "CLEAR" }
        }

        if view.is_empty() {
            div { class: "empty-state", "NO CAMPAIGNS FOUND" }
        } else {
            table { class: "data-table",
                thead {
                    tr {
                        th { "TITLE" }
                        th { "TYPE" }
                        th { "STATUS" }
                        th { "REWARDS" }
                        th { "SPINS" }
                        th { "MAX / INTERVAL" }
                        th { "PERIOD" }
                        th { "" }
                    }
                }
                tbody {
                    for campaign in view.rows.iter().cloned() {
                        {
                            let toggle_id = campaign.id.clone();
                            let delete_id = campaign.id.clone();
                            let next_active = !campaign.is_active;
                            let period = format!(
                                "{} → {}",
                                format_date(campaign.start_date.as_deref()),
                                format_date(campaign.end_date.as_deref())
                            );
                            rsx! {
                                tr { key: "{campaign.id}",
                                    td { "{campaign.title}" }
                                    td { "{campaign.campaign_type}" }
                                    td {
                                        span {
                                            class: if campaign.is_active { "badge active" } else { "badge inactive" },
                                            "{active_label(campaign.is_active)}"
                                        }
                                    }
                                    td { "{campaign.reward_count}" }
                                    td { "{campaign.total_spins}" }
                                    td { "{campaign.max_attempts_per_interval}" }
                                    td { "{period}" }
                                    td { class: "row-actions",
                                        button {
                                            class: "btn-text",
                                            onclick: move |_| toggle((toggle_id.clone(), next_active)),
                                            if next_active { "ACTIVATE" } else { "DEACTIVATE" }
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
