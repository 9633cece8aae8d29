mod common;

use common::{campaign_json, history_json};
use rewards_admin::campaigns::CampaignFilters;
use rewards_admin::list_view::{
    DateRange, ListState, StatusFilter, derive_view, page_window, paginate, parse_timestamp, total_pages,
};
use rewards_admin::models::{Campaign, CreditDebit, RewardHistory};
use rewards_admin::reward_history::{RewardHistoryFilters, ledger_totals};
use time::OffsetDateTime;

fn now() -> OffsetDateTime {
    parse_timestamp("2024-06-10T12:00:00Z").expect("fixed clock")
}

fn campaigns(count: i64) -> Vec<Campaign> {
    (1..=count)
        .map(|id| {
            let kind = if id % 2 == 0 { "spin" } else { "scratch" };
            serde_json::from_value(campaign_json(id, &format!("Campaign {}", id), kind, id % 3 != 0))
                .expect("campaign fixture")
        })
        .collect()
}

fn history() -> Vec<RewardHistory> {
    [
        history_json(1, "Asha", "credit", "10.00", "2024-06-01T08:00:00Z"),
        history_json(2, "Ben", "debit", "4.50", "2024-06-10 09:30:00"),
        history_json(3, "Chen", "credit", "2.25", "not a date"),
        history_json(4, "Dana", "credit", "7", "2024-05-01T10:00:00Z"),
        history_json(5, "Asha", "debit", "1", "2024-06-09T23:00:00.123Z"),
    ]
    .into_iter()
    .map(|v| serde_json::from_value(v).expect("history fixture"))
    .collect()
}

#[test]
fn twenty_records_split_over_two_pages() {
    let items = campaigns(20);
    let mut state: ListState<CampaignFilters> = ListState::default();

    let first = derive_view(&items, &state, now());
    assert_eq!(first.rows.len(), 15);
    assert_eq!(first.total_pages, 2);
    assert_eq!(first.filtered_count, 20);
    assert_eq!((first.first_index, first.last_index), (1, 15));
    assert!(first.has_next());
    assert!(!first.has_previous());

    state.set_page(2);
    let second = derive_view(&items, &state, now());
    assert_eq!(second.rows.len(), 5);
    assert_eq!((second.first_index, second.last_index), (16, 20));
    assert!(!second.has_next());

    // pages concatenate back to the filtered list
    let ids: Vec<String> = first
        .rows
        .iter()
        .chain(second.rows.iter())
        .map(|c| c.id.clone())
        .collect();
    let expected: Vec<String> = (1..=20).map(|i| i.to_string()).collect();
    assert_eq!(ids, expected);
}

#[test]
fn search_and_filters_intersect() {
    let items = campaigns(12);
    let mut state: ListState<CampaignFilters> = ListState::default();

    state.set_search("campaign 1");
    let view = derive_view(&items, &state, now());
    // 1, 10, 11, 12
    assert_eq!(view.filtered_count, 4);

    state.update_filters(|f| f.campaign_type = Some("SPIN".to_string()));
    let view = derive_view(&items, &state, now());
    let ids: Vec<&str> = view.rows.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["10", "12"]);

    state.update_filters(|f| f.status = StatusFilter::Active);
    let view = derive_view(&items, &state, now());
    let ids: Vec<&str> = view.rows.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["10"]);
}

#[test]
fn changing_search_or_filters_resets_page() {
    let mut state: ListState<CampaignFilters> = ListState::default();
    state.set_page(3);
    state.set_search("spin");
    assert_eq!(state.current_page(), 1);

    state.set_page(2);
    state.update_filters(|f| f.status = StatusFilter::Inactive);
    assert_eq!(state.current_page(), 1);

    state.set_page(0);
    assert_eq!(state.current_page(), 1);

    state.set_page(4);
    state.clear();
    assert_eq!(state.current_page(), 1);
    assert_eq!(state.search(), "");
    assert_eq!(state.filters(), &CampaignFilters::default());
}

#[test]
fn empty_and_out_of_range_pages() {
    let items: Vec<Campaign> = Vec::new();
    let view = derive_view(&items, &ListState::<CampaignFilters>::default(), now());
    assert!(view.is_empty());
    assert_eq!(view.total_pages, 0);
    assert!(view.pages.is_empty());
    assert_eq!((view.first_index, view.last_index), (0, 0));

    let items = campaigns(3);
    let mut state: ListState<CampaignFilters> = ListState::default();
    state.set_page(9);
    let view = derive_view(&items, &state, now());
    assert_eq!(view.current_page, 1);
    assert_eq!(view.rows.len(), 3);
    assert_eq!(view.filtered_count, 3);
}

#[test]
fn shrinking_list_pulls_page_back_in_range() {
    let mut state: ListState<CampaignFilters> = ListState::default();
    state.set_page(2);

    let before = derive_view(&campaigns(16), &state, now());
    assert_eq!(before.rows.len(), 1);
    assert_eq!(before.total_pages, 2);

    // the only row on page 2 was deleted and the list refetched
    let after = derive_view(&campaigns(15), &state, now());
    assert!(!after.is_empty());
    assert_eq!(after.current_page, 1);
    assert_eq!(after.total_pages, 1);
    assert_eq!(after.rows.len(), 15);
    assert_eq!((after.first_index, after.last_index), (1, 15));
    assert_eq!(after.pages, vec![1]);
}

#[test]
fn filtered_out_list_is_empty() {
    let mut state: ListState<CampaignFilters> = ListState::default();
    state.set_search("no such campaign");
    let view = derive_view(&campaigns(5), &state, now());
    assert!(view.is_empty());
    assert_eq!(view.total_items, 5);
}

#[test]
fn pagination_helpers() {
    assert_eq!(total_pages(0, 15), 0);
    assert_eq!(total_pages(15, 15), 1);
    assert_eq!(total_pages(16, 15), 2);
    assert_eq!(total_pages(5, 0), 0);

    let items: Vec<u32> = (1..=7).collect();
    assert_eq!(paginate(&items, 1, 3), &[1, 2, 3]);
    assert_eq!(paginate(&items, 3, 3), &[7]);
    assert!(paginate(&items, 4, 3).is_empty());
}

#[test]
fn page_window_stays_within_bounds() {
    assert_eq!(page_window(1, 3), vec![1, 2, 3]);
    assert_eq!(page_window(1, 10), vec![1, 2, 3, 4, 5]);
    assert_eq!(page_window(6, 10), vec![4, 5, 6, 7, 8]);
    assert_eq!(page_window(10, 10), vec![6, 7, 8, 9, 10]);
    assert_eq!(page_window(9, 10), vec![6, 7, 8, 9, 10]);
    assert!(page_window(1, 0).is_empty());
}

#[test]
fn history_is_newest_first_with_unparseable_last() {
    let items = history();
    let view = derive_view(&items, &ListState::<RewardHistoryFilters>::default(), now());
    let ids: Vec<&str> = view.rows.iter().map(|h| h.id.as_str()).collect();
    assert_eq!(ids, vec!["2", "5", "1", "4", "3"]);
}

#[test]
fn history_date_range_and_direction() {
    let items = history();
    let mut state: ListState<RewardHistoryFilters> = ListState::default();

    state.update_filters(|f| f.date_range = DateRange::Today);
    let view = derive_view(&items, &state, now());
    let ids: Vec<&str> = view.rows.iter().map(|h| h.id.as_str()).collect();
    assert_eq!(ids, vec!["2"]);

    state.update_filters(|f| f.date_range = DateRange::Last7Days);
    let view = derive_view(&items, &state, now());
    let ids: Vec<&str> = view.rows.iter().map(|h| h.id.as_str()).collect();
    assert_eq!(ids, vec!["2", "5"]);

    state.update_filters(|f| {
        f.date_range = DateRange::Last30Days;
        f.credit_debit = Some(CreditDebit::Credit);
    });
    let view = derive_view(&items, &state, now());
    let ids: Vec<&str> = view.rows.iter().map(|h| h.id.as_str()).collect();
    assert_eq!(ids, vec!["1"]);
}

#[test]
fn history_search_covers_contact_and_store_fields() {
    let items = history();
    let mut state: ListState<RewardHistoryFilters> = ListState::default();

    state.set_search("ben@example");
    assert_eq!(derive_view(&items, &state, now()).filtered_count, 1);

    state.set_search("TXN-4");
    assert_eq!(derive_view(&items, &state, now()).filtered_count, 1);

    state.set_search("corner");
    assert_eq!(derive_view(&items, &state, now()).filtered_count, 5);
}

#[test]
fn ledger_totals_split_by_direction() {
    let items = history();
    let totals = ledger_totals(&items);
    assert_eq!(totals.credited, 19.25);
    assert_eq!(totals.debited, 5.5);
    assert_eq!(totals.net(), 13.75);
}

#[test]
fn filter_params_round_trip_through_names() {
    assert_eq!(StatusFilter::from_param("Active"), StatusFilter::Active);
    assert_eq!(StatusFilter::from_param("bogus"), StatusFilter::All);
    assert_eq!(DateRange::from_param("week"), DateRange::Last7Days);
    assert_eq!(DateRange::from_param(DateRange::Last30Days.as_str()), DateRange::Last30Days);
}

#[test]
fn timestamp_formats() {
    assert!(parse_timestamp("2024-06-10T12:00:00Z").is_some());
    assert!(parse_timestamp("2024-06-10T12:00:00+05:30").is_some());
    assert!(parse_timestamp("2024-06-10 12:00:00").is_some());
    assert!(parse_timestamp("2024-06-10T12:00:00.250").is_some());
    assert!(parse_timestamp("2024-06-10").is_some());
    assert!(parse_timestamp("yesterday").is_none());
}

#[test]
fn today_follows_the_viewer_offset() {
    let ist_morning = parse_timestamp("2024-06-10T09:00:00+05:30").expect("fixed clock");

    // 01:30 IST on the 10th, still the 9th in UTC
    assert!(DateRange::Today.matches(Some("2024-06-09T20:00:00Z"), ist_morning));
    // 23:30 IST on the 9th
    assert!(!DateRange::Today.matches(Some("2024-06-09T18:00:00Z"), ist_morning));
    assert!(DateRange::Today.matches(Some("2024-06-10T10:00:00+05:30"), ist_morning));
}
