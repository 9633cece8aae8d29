use dioxus::prelude::*;
use rewards_admin::coerce::or_na;
use rewards_admin::models::{CreditDebit, User};
use rewards_admin::users::UserTab;
use rewards_admin::PageState;

use crate::api;
use crate::components::{DetailField, ErrorState, Loading};
use crate::utils::{active_label, format_currency, format_date, format_datetime, format_signed, yes_no};
use crate::Route;

#[component]
pub fn UserDetails(id: String) -> Element {
    let mut state = use_signal(PageState::<User>::default);
    let mut reload = use_signal(|| 0u32);
    let mut tab = use_signal(UserTab::default);

    use_effect(use_reactive!(|id| {
        reload();
        tab.set(UserTab::default());
        state.set(PageState::Loading);
        spawn(async move {
            let result = api::client().get_user_details(&id).await;
            state.set(PageState::from_result(result));
        });
    }));

    let user = match state() {
        PageState::Loading => return rsx! { Loading {} },
        PageState::Failed(info) => {
            return rsx! {
                ErrorState {
                    info,
                    on_retry: move |_| reload += 1,
                    back: Route::RewardHistoryManagement {},
                }
            }
        }
        PageState::Ready(user) => user,
    };

    let current = tab();

    rsx! {
        div { class: "content-header user-header",
            div { class: "avatar", "{user.initials()}" }
            div {
                h1 { "{user.name}" }
                span { class: "subtle", "{or_na(user.email.as_deref())}" }
            }
            span {
                class: if user.is_active { "badge active" } else { "badge inactive" },
                "{active_label(user.is_active)}"
            }
            if user.is_vip {
                span { class: "badge vip", "VIP" }
            }
        }

        div { class: "section-switcher tabs",
            for t in UserTab::all() {
                button {
                    class: if *t == current { "active" } else { "" },
                    onclick: move |_| tab.set(*t),
                    "{t.label().to_uppercase()}"
                }
            }
        }

        match current {
            UserTab::Overview => rsx! { UserOverview { user: user.clone() } },
            UserTab::Transactions => rsx! { UserTransactions { user: user.clone() } },
            UserTab::Rewards => rsx! { UserRewards { user: user.clone() } },
            UserTab::Referrals => rsx! { UserReferrals { user: user.clone() } },
        }
    }
}

#[component]
fn UserOverview(user: User) -> Element {
    let location = user.location().unwrap_or_else(|| "N/A".to_string());
    let vip_period = format!(
        "{} → {}",
        format_date(user.vip_start_date.as_deref()),
        format_date(user.vip_end_date.as_deref())
    );

    rsx! {
        div { class: "detail-grid border p-2",
            h2 { "CONTACT" }
            DetailField { label: "PHONE", value: "{or_na(user.phone.as_deref())}" }
            DetailField { label: "ADDRESS", value: "{or_na(user.address.as_deref())}" }
            DetailField { label: "LOCATION", value: "{location}" }
            DetailField { label: "EMAIL VERIFIED", value: "{yes_no(user.is_email_verified)}" }
            DetailField { label: "PHONE VERIFIED", value: "{yes_no(user.is_phone_verified)}" }
            DetailField { label: "JOINED", value: "{format_date(user.created_at.as_deref())}" }
        }

        div { class: "detail-grid border p-2",
            h2 { "CASHBACK" }
            DetailField { label: "BALANCE", value: "{format_currency(user.cashback_balance)}" }
            DetailField { label: "PENDING", value: "{format_currency(user.pending_cashback)}" }
            DetailField { label: "TOTAL EARNED", value: "{format_currency(user.total_cashback_earned)}" }
            if user.is_vip {
                DetailField { label: "VIP PERIOD", value: "{vip_period}" }
            }
        }
    }
}

#[component]
fn UserTransactions(user: User) -> Element {
    if user.transactions.is_empty() {
        return rsx! {
            div { class: "empty-state", "NO TRANSACTIONS" }
        };
    }

    rsx! {
        table { class: "data-table",
            thead {
                tr {
                    th { "NUMBER" }
                    th { "STORE" }
                    th { "BILL" }
                    th { "DISCOUNT" }
                    th { "FINAL" }
                    th { "STATUS" }
                    th { "DATE" }
                }
            }
            tbody {
                for t in user.transactions.iter().cloned() {
                    tr { key: "{t.id}",
                        td {
                            Link { to: Route::TransactionDetails { id: t.id.clone() }, "{t.transaction_number}" }
                        }
                        td { "{or_na(t.store_name.as_deref())}" }
                        td { "{format_currency(t.bill_amount)}" }
                        td { "{format_currency(t.total_discount())}" }
                        td { "{format_currency(t.final_amount)}" }
                        td { "{t.payment_status}" }
                        td { "{format_datetime(t.created_at.as_deref())}" }
                    }
                }
            }
        }
    }
}

#[component]
fn UserRewards(user: User) -> Element {
    if user.rewards.is_empty() {
        return rsx! {
            div { class: "empty-state", "NO REWARDS" }
        };
    }

    rsx! {
        table { class: "data-table",
            thead {
                tr {
                    th { "REWARD" }
                    th { "TYPE" }
                    th { "AMOUNT" }
                    th { "DATE" }
                }
            }
            tbody {
                for entry in user.rewards.iter().cloned() {
                    tr { key: "{entry.id}",
                        td {
                            Link { to: Route::RewardHistoryDetails { id: entry.id.clone() }, "{entry.reward_name}" }
                        }
                        td { "{entry.reward_type}" }
                        td {
                            class: if entry.credit_debit == CreditDebit::Debit { "amount expense" } else { "amount income" },
                            "{format_signed(entry.signed_amount())}"
                        }
                        td { "{format_datetime(entry.created_at.as_deref())}" }
                    }
                }
            }
        }
    }
}

#[component]
fn UserReferrals(user: User) -> Element {
    if user.referrals.is_empty() {
        return rsx! {
            div { class: "empty-state", "NO REFERRALS" }
        };
    }

    rsx! {
        table { class: "data-table",
            thead {
                tr {
                    th { "NAME" }
                    th { "EMAIL" }
                    th { "PHONE" }
                    th { "STATUS" }
                    th { "JOINED" }
                }
            }
            tbody {
                for referral in user.referrals.iter().cloned() {
                    tr { key: "{referral.id}",
                        td {
                            Link { to: Route::UserDetails { id: referral.id.clone() }, "{referral.name}" }
                        }
                        td { "{or_na(referral.email.as_deref())}" }
                        td { "{or_na(referral.phone.as_deref())}" }
                        td { "{active_label(referral.is_active)}" }
                        td { "{format_date(referral.created_at.as_deref())}" }
                    }
                }
            }
        }
    }
}
