use dioxus::prelude::*;
use rewards_admin::coerce::or_na;
use rewards_admin::models::Transaction;
use rewards_admin::PageState;

use crate::api;
use crate::components::{DetailField, ErrorState, Loading};
use crate::utils::{format_currency, format_datetime};
use crate::Route;

#[component]
pub fn TransactionDetails(id: String) -> Element {
    let mut state = use_signal(PageState::<Transaction>::default);
    let mut reload = use_signal(|| 0u32);

    use_effect(use_reactive!(|id| {
        reload();
        state.set(PageState::Loading);
        spawn(async move {
            let result = api::client().get_transaction(&id).await;
            state.set(PageState::from_result(result));
        });
    }));

    let transaction = match state() {
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
        PageState::Ready(transaction) => transaction,
    };

    let t = transaction;
    rsx! {
        div { class: "content-header",
            h1 { "TRANSACTION {t.transaction_number}" }
            span { class: "badge", "{t.payment_status.to_uppercase()}" }
        }

        div { class: "detail-grid border p-2",
            h2 { "AMOUNTS" }
            DetailField { label: "BILL AMOUNT", value: "{format_currency(t.bill_amount)}" }
            DetailField { label: "VENDOR DISCOUNT", value: "{format_currency(t.vendor_discount)}" }
            DetailField { label: "COUPON DISCOUNT", value: "{format_currency(t.coupon_discount)}" }
            DetailField { label: "CASHBACK USED", value: "{format_currency(t.cashback_used)}" }
            DetailField { label: "TOTAL DISCOUNT", value: "{format_currency(t.total_discount())}" }
            DetailField { label: "FINAL AMOUNT", value: "{format_currency(t.final_amount)}" }
        }

        div { class: "detail-grid border p-2",
            h2 { "PAYMENT" }
            DetailField { label: "METHOD", value: "{or_na(t.payment_method.as_deref())}" }
            DetailField { label: "STATUS", value: "{t.payment_status}" }
            DetailField { label: "COUPON", value: "{or_na(t.coupon_code.as_deref())}" }
            DetailField { label: "CREATED", value: "{format_datetime(t.created_at.as_deref())}" }
        }

        div { class: "detail-grid border p-2",
            h2 { "PARTIES" }
            DetailField { label: "STORE", value: "{or_na(t.store_name.as_deref())}" }
            div { class: "detail-field",
                label { "USER" }
                if let Some(user_id) = t.user_id.clone() {
                    Link { to: Route::UserDetails { id: user_id }, "{or_na(t.user_name.as_deref())}" }
                } else {
                    span { "{or_na(t.user_name.as_deref())}" }
                }
            }
            DetailField { label: "EMAIL", value: "{or_na(t.user_email.as_deref())}" }
        }
    }
}
