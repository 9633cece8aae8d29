mod api;
mod components;
mod utils;
mod views;

use dioxus::prelude::*;

use components::AppShell;
use views::{
    DailyRewardsManagement, NotFound, RewardHistoryDetails, RewardHistoryManagement, RewardManagement,
    SettlementDetails, SettlementManagement, TransactionDetails, UserDetails,
};

#[derive(Routable, Clone, PartialEq, Debug)]
#[rustfmt::skip]
pub enum Route {
    #[layout(AppShell)]
        #[redirect("/", || Route::DailyRewardsManagement {})]
        #[route("/daily-rewards")]
        DailyRewardsManagement {},
        #[route("/rewards")]
        RewardManagement {},
        #[route("/reward-history")]
        RewardHistoryManagement {},
        #[route("/reward-history/:id")]
        RewardHistoryDetails { id: String },
        #[route("/settlements")]
        SettlementManagement {},
        #[route("/settlements/:id")]
        SettlementDetails { id: String },
        #[route("/transactions/:id")]
        TransactionDetails { id: String },
        #[route("/users/:id")]
        UserDetails { id: String },
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

fn main() {
    dioxus::launch(App);
}

#[allow(non_snake_case)]
fn App() -> Element {
    rsx! {
        Router::<Route> {}
    }
}
