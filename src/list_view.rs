//! Client-side search, filtering, ordering and pagination over a collection
//! that is already fully loaded.
//!
//! Derivation order is fixed: search, then filters, then (for resources that
//! ask for it) newest-first ordering, then the page slice.

use std::cmp::Reverse;

use time::format_description::BorrowedFormatItem;
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Date, Duration, OffsetDateTime, PrimitiveDateTime};

use crate::constants::{ITEMS_PER_PAGE, PAGE_WINDOW};

/// A record that can be shown in a list page.
pub trait Listable: Clone {
    /// Text fields matched by the search box.
    fn search_fields(&self) -> Vec<&str>;

    fn created_at(&self) -> Option<&str> {
        None
    }

    /// When true the filtered rows are ordered by `created_at`, newest first.
    const NEWEST_FIRST: bool = false;
}

/// Dropdown filters for one list page. `now` anchors relative date ranges,
/// and its offset decides which calendar day counts as today.
pub trait ListFilter<T> {
    fn matches(&self, item: &T, now: OffsetDateTime) -> bool;
}

impl<T> ListFilter<T> for () {
    fn matches(&self, _item: &T, _now: OffsetDateTime) -> bool {
        true
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Active,
    Inactive,
}

impl StatusFilter {
    pub fn matches(&self, is_active: bool) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Active => is_active,
            StatusFilter::Inactive => !is_active,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StatusFilter::All => "all",
            StatusFilter::Active => "active",
            StatusFilter::Inactive => "inactive",
        }
    }

    pub fn from_param(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "active" => StatusFilter::Active,
            "inactive" => StatusFilter::Inactive,
            _ => StatusFilter::All,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateRange {
    #[default]
    All,
    Today,
    Last7Days,
    Last30Days,
}

impl DateRange {
    pub fn matches(&self, created_at: Option<&str>, now: OffsetDateTime) -> bool {
        if *self == DateRange::All {
            return true;
        }
        let Some(ts) = created_at.and_then(parse_timestamp) else {
            return false;
        };
        match self {
            DateRange::All => true,
            DateRange::Today => ts.to_offset(now.offset()).date() == now.date(),
            DateRange::Last7Days => ts >= now - Duration::days(7),
            DateRange::Last30Days => ts >= now - Duration::days(30),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DateRange::All => "all",
            DateRange::Today => "today",
            DateRange::Last7Days => "week",
            DateRange::Last30Days => "month",
        }
    }

    pub fn from_param(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "today" => DateRange::Today,
            "week" | "7d" => DateRange::Last7Days,
            "month" | "30d" => DateRange::Last30Days,
            _ => DateRange::All,
        }
    }
}

/// Equality filter on a free-form category value; `None` matches everything.
pub fn matches_choice(selected: &Option<String>, value: &str) -> bool {
    selected
        .as_deref()
        .is_none_or(|s| s.eq_ignore_ascii_case(value.trim()))
}

const DATE_TIME_FORMATS: [&[BorrowedFormatItem<'static>]; 4] = [
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond]"),
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second].[subsecond]"),
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]"),
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second]"),
];

const DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// Parses the timestamp formats the backend emits. Offset-less values are
/// taken as UTC.
pub fn parse_timestamp(value: &str) -> Option<OffsetDateTime> {
    let value = value.trim();
    if let Ok(ts) = OffsetDateTime::parse(value, &Rfc3339) {
        return Some(ts);
    }

    for format in DATE_TIME_FORMATS {
        if let Ok(dt) = PrimitiveDateTime::parse(value, format) {
            return Some(dt.assume_utc());
        }
    }

    Date::parse(value.get(..10)?, DATE_FORMAT)
        .ok()
        .map(|d| d.midnight().assume_utc())
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListState<F> {
    search: String,
    filters: F,
    current_page: usize,
    items_per_page: usize,
}

impl<F: Default> Default for ListState<F> {
    fn default() -> Self {
        Self::new(F::default())
    }
}

impl<F> ListState<F> {
    pub fn new(filters: F) -> Self {
        Self {
            search: String::new(),
            filters,
            current_page: 1,
            items_per_page: ITEMS_PER_PAGE,
        }
    }

    pub fn with_page_size(mut self, items_per_page: usize) -> Self {
        self.items_per_page = items_per_page.max(1);
        self
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn filters(&self) -> &F {
        &self.filters
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn items_per_page(&self) -> usize {
        self.items_per_page
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
        self.current_page = 1;
    }

    pub fn update_filters(&mut self, update: impl FnOnce(&mut F)) {
        update(&mut self.filters);
        self.current_page = 1;
    }

    pub fn set_page(&mut self, page: usize) {
        self.current_page = page.max(1);
    }
}

impl<F: Default> ListState<F> {
    pub fn clear(&mut self) {
        self.search.clear();
        self.filters = F::default();
        self.current_page = 1;
    }
}

/// One rendered page of a list.
#[derive(Debug, Clone, PartialEq)]
pub struct ListView<T> {
    pub rows: Vec<T>,
    pub total_items: usize,
    pub filtered_count: usize,
    pub current_page: usize,
    pub total_pages: usize,
    /// Page-number buttons to show
    pub pages: Vec<usize>,
    /// 1-based position of the first row shown, 0 when empty
    pub first_index: usize,
    pub last_index: usize,
}

impl<T> ListView<T> {
    /// True when nothing matches the search and filters.
    pub fn is_empty(&self) -> bool {
        self.filtered_count == 0
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }
}

pub fn matches_search<T: Listable>(item: &T, term: &str) -> bool {
    let term = term.trim().to_lowercase();
    term.is_empty()
        || item
            .search_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(&term))
}

/// Search, filter and order `items` without paginating.
pub fn filter_items<'a, T, F>(items: &'a [T], state: &ListState<F>, now: OffsetDateTime) -> Vec<&'a T>
where
    T: Listable,
    F: ListFilter<T>,
{
    let mut rows: Vec<&T> = items
        .iter()
        .filter(|item| matches_search(*item, &state.search))
        .filter(|item| state.filters.matches(*item, now))
        .collect();

    if T::NEWEST_FIRST {
        sort_newest_first(&mut rows);
    }
    rows
}

/// Stable sort by `created_at` descending; unparseable timestamps go last.
pub fn sort_newest_first<T: Listable>(rows: &mut [&T]) {
    rows.sort_by_cached_key(|row| {
        let ts = row.created_at().and_then(parse_timestamp);
        (ts.is_none(), Reverse(ts))
    });
}

pub fn total_pages(count: usize, items_per_page: usize) -> usize {
    if items_per_page == 0 {
        return 0;
    }
    count.div_ceil(items_per_page)
}

/// Slice for 1-based `page`. Pages past the end are empty.
pub fn paginate<T>(items: &[T], page: usize, items_per_page: usize) -> &[T] {
    let start = page.saturating_sub(1).saturating_mul(items_per_page);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(items_per_page).min(items.len());
    &items[start..end]
}

/// At most [`PAGE_WINDOW`] page numbers, centred on `current` except near
/// either end.
pub fn page_window(current: usize, total: usize) -> Vec<usize> {
    if total == 0 {
        return Vec::new();
    }
    let current = current.clamp(1, total);
    let width = PAGE_WINDOW.min(total);
    let half = PAGE_WINDOW / 2;

    let start = if current <= half + 1 {
        1
    } else if current + half >= total {
        total - width + 1
    } else {
        current - half
    };
    (start..start + width).collect()
}

pub fn derive_view<T, F>(items: &[T], state: &ListState<F>, now: OffsetDateTime) -> ListView<T>
where
    T: Listable,
    F: ListFilter<T>,
{
    let filtered = filter_items(items, state, now);
    let total_pages = total_pages(filtered.len(), state.items_per_page);
    // A refetch can shrink the list below the stored page.
    let current_page = state.current_page.clamp(1, total_pages.max(1));
    let page = paginate(&filtered, current_page, state.items_per_page);

    let first_index = if page.is_empty() {
        0
    } else {
        (current_page - 1) * state.items_per_page + 1
    };
    let last_index = if page.is_empty() {
        0
    } else {
        first_index + page.len() - 1
    };

    ListView {
        rows: page.iter().map(|row| (*row).clone()).collect(),
        total_items: items.len(),
        filtered_count: filtered.len(),
        current_page,
        total_pages,
        pages: page_window(current_page, total_pages),
        first_index,
        last_index,
    }
}
