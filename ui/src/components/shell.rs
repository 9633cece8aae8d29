use dioxus::prelude::*;

use crate::Route;

#[derive(Clone, Copy, PartialEq)]
pub enum Section {
    DailyRewards,
    Rewards,
    RewardHistory,
    Settlements,
}

impl Section {
    pub fn label(&self) -> &'static str {
        match self {
            Section::DailyRewards => "DAILY REWARDS",
            Section::Rewards => "REWARDS",
            Section::RewardHistory => "REWARD HISTORY",
            Section::Settlements => "SETTLEMENTS",
        }
    }

    pub fn route(&self) -> Route {
        match self {
            Section::DailyRewards => Route::DailyRewardsManagement {},
            Section::Rewards => Route::RewardManagement {},
            Section::RewardHistory => Route::RewardHistoryManagement {},
            Section::Settlements => Route::SettlementManagement {},
        }
    }

    pub fn all() -> &'static [Section] {
        &[
            Section::DailyRewards,
            Section::Rewards,
            Section::RewardHistory,
            Section::Settlements,
        ]
    }

    /// Section that owns a route; detail pages belong to their list.
    pub fn of(route: &Route) -> Option<Section> {
        match route {
            Route::DailyRewardsManagement {} => Some(Section::DailyRewards),
            Route::RewardManagement {} => Some(Section::Rewards),
            Route::RewardHistoryManagement {} | Route::RewardHistoryDetails { .. } => {
                Some(Section::RewardHistory)
            }
            Route::SettlementManagement {} | Route::SettlementDetails { .. } => Some(Section::Settlements),
            _ => None,
        }
    }
}

#[component]
pub fn TopStrip() -> Element {
    rsx! {
        div { class: "top-strip",
            div { class: "app-name", "REWARDS ADMIN" }
        }
    }
}

#[component]
pub fn SectionSwitcher(current: Option<Section>) -> Element {
    rsx! {
        div { class: "section-switcher",
            for section in Section::all() {
                Link {
                    class: if Some(*section) == current { "active" } else { "" },
                    to: section.route(),
                    "{section.label()}"
                }
            }
        }
    }
}

/// Layout wrapped around every page.
#[component]
pub fn AppShell() -> Element {
    let route = use_route::<Route>();

    rsx! {
        div { id: "main",
            TopStrip {}
            SectionSwitcher { current: Section::of(&route) }
            div { class: "content container",
                Outlet::<Route> {}
            }
        }
    }
}
