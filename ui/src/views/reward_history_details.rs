use dioxus::prelude::*;
use rewards_admin::coerce::or_na;
use rewards_admin::models::{CreditDebit, RewardHistory};
use rewards_admin::PageState;

use crate::api;
use crate::components::{DetailField, ErrorState, Loading};
use crate::utils::{format_datetime, format_signed};
use crate::Route;

#[component]
pub fn RewardHistoryDetails(id: String) -> Element {
    let mut state = use_signal(PageState::<RewardHistory>::default);
    let mut reload = use_signal(|| 0u32);

    use_effect(use_reactive!(|id| {
        reload();
        state.set(PageState::Loading);
        spawn(async move {
            let result = api::client().get_reward_history(&id).await;
            state.set(PageState::from_result(result));
        });
    }));

    let h = match state() {
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
        PageState::Ready(entry) => entry,
    };

    let amount_class = match h.credit_debit {
        CreditDebit::Debit => "amount expense",
        _ => "amount income",
    };

    rsx! {
        div { class: "content-header",
            Link { class: "btn-text", to: Route::RewardHistoryManagement {}, "← REWARD HISTORY" }
            h1 { "REWARD ENTRY #{h.id}" }
            span { class: amount_class, "{format_signed(h.signed_amount())}" }
        }

        div { class: "detail-grid border p-2",
            h2 { "REWARD" }
            DetailField { label: "NAME", value: "{h.reward_name}" }
            DetailField { label: "TYPE", value: "{h.reward_type}" }
            DetailField { label: "DIRECTION", value: "{h.credit_debit.as_str().to_uppercase()}" }
            DetailField { label: "DESCRIPTION", value: "{or_na(h.description.as_deref())}" }
            DetailField { label: "DATE", value: "{format_datetime(h.created_at.as_deref())}" }
        }

        div { class: "detail-grid border p-2",
            h2 { "USER" }
            div { class: "detail-field",
                label { "NAME" }
                if let Some(user_id) = h.user_id.clone() {
                    Link { to: Route::UserDetails { id: user_id }, "{h.user_name}" }
                } else {
                    span { "{h.user_name}" }
                }
            }
            DetailField { label: "EMAIL", value: "{or_na(h.user_email.as_deref())}" }
            DetailField { label: "PHONE", value: "{or_na(h.user_phone.as_deref())}" }
        }

        div { class: "detail-grid border p-2",
            h2 { "SOURCE" }
            div { class: "detail-field",
                label { "TRANSACTION" }
                if let Some(transaction_id) = h.transaction_id.clone() {
                    Link {
                        to: Route::TransactionDetails { id: transaction_id },
                        "{or_na(h.transaction_number.as_deref())}"
                    }
                } else {
                    span { "{or_na(h.transaction_number.as_deref())}" }
                }
            }
            DetailField { label: "STORE", value: "{or_na(h.store_name.as_deref())}" }
        }
    }
}
