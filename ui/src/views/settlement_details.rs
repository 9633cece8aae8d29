use dioxus::prelude::*;
use rewards_admin::coerce::or_na;
use rewards_admin::models::Settlement;
use rewards_admin::PageState;

use crate::api;
use crate::components::{DetailField, ErrorState, Loading};
use crate::utils::{format_currency, format_date, format_datetime};
use crate::Route;

#[component]
pub fn SettlementDetails(id: String) -> Element {
    let mut state = use_signal(PageState::<Settlement>::default);
    let mut reload = use_signal(|| 0u32);

    use_effect(use_reactive!(|id| {
        reload();
        state.set(PageState::Loading);
        spawn(async move {
            let result = api::client().get_settlement(&id).await;
            state.set(PageState::from_result(result));
        });
    }));

    let s = match state() {
        PageState::Loading => return rsx! { Loading {} },
        PageState::Failed(info) => {
            return rsx! {
                ErrorState {
                    info,
                    on_retry: move |_| reload += 1,
                    back: Route::SettlementManagement {},
                }
            }
        }
        PageState::Ready(settlement) => settlement,
    };

    rsx! {
        div { class: "content-header",
            Link { class: "btn-text", to: Route::SettlementManagement {}, "← SETTLEMENTS" }
            h1 { "SETTLEMENT {s.settlement_id}" }
            span { class: "badge", "{s.settlement_status.to_uppercase()}" }
        }

        div { class: "detail-grid border p-2",
            h2 { "AMOUNTS" }
            DetailField { label: "TRANSACTIONS", value: "{s.total_transactions}" }
            DetailField { label: "SETTLEMENT AMOUNT", value: "{format_currency(s.settlement_amount)}" }
            DetailField { label: "COMMISSION", value: "{format_currency(s.commission_amount)}" }
            DetailField { label: "TAX", value: "{format_currency(s.tax_amount)}" }
            DetailField { label: "PLATFORM FEE", value: "{format_currency(s.platform_fee)}" }
            DetailField { label: "NET AMOUNT", value: "{format_currency(s.effective_net_amount())}" }
            DetailField { label: "SETTLED", value: "{format_currency(s.settled_amount)}" }
            DetailField { label: "PENDING", value: "{format_currency(s.pending_amount)}" }
        }

        div { class: "detail-grid border p-2",
            h2 { "PAYMENT" }
            DetailField { label: "METHOD", value: "{or_na(s.payment_method.as_deref())}" }
            DetailField { label: "REFERENCE", value: "{or_na(s.payment_reference.as_deref())}" }
            DetailField { label: "PAID ON", value: "{format_date(s.payment_date.as_deref())}" }
        }

        div { class: "detail-grid border p-2",
            h2 { "PARTIES" }
            DetailField { label: "STORE", value: "{s.store_name}" }
            div { class: "detail-field",
                label { "USER" }
                if let Some(user_id) = s.user_id.clone() {
                    Link { to: Route::UserDetails { id: user_id }, "{s.user_name}" }
                } else {
                    span { "{s.user_name}" }
                }
            }
            DetailField { label: "CREATED", value: "{format_datetime(s.created_at.as_deref())}" }
            DetailField { label: "UPDATED", value: "{format_datetime(s.updated_at.as_deref())}" }
        }
    }
}
