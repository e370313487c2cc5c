use chrono::{DateTime, Utc};
use log::debug;
use serde::Serialize;
use serde_with::skip_serializing_none;

use config::RegistryConfig;
use paginate::{page_count, PageWindow, PaginationQuery, Slot};
use utils::{ago, emoji};

use crate::params::{ListingParams, Routes};
use crate::response::{ListResponse, ModuleEntry, Stats};
use crate::Result;

/// Text for the search box, mentions the module count once known.
pub fn placeholder(total_count: Option<i64>) -> String {
    match total_count {
        Some(total) => format!("Search {} modules", total),
        None => String::from("Search"),
    }
}

#[skip_serializing_none]
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ModuleRow {
    pub name: String,
    pub href: String,
    // Description with emoji shortcodes replaced.
    pub description: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    // Relative form of `created_at`, eg: `3 days ago`.
    pub age: Option<String>,
    pub star_count: Option<i64>,
}

impl ModuleRow {
    pub fn new(
        routes: &Routes,
        name: &str,
        description: Option<&str>,
        created_at: Option<DateTime<Utc>>,
        star_count: Option<i64>,
        now: DateTime<Utc>,
    ) -> Self {
        let description = description
            .filter(|s| !s.is_empty())
            .map(emoji::replace);
        Self {
            name: name.to_string(),
            href: routes.module_href(name),
            description,
            age: created_at.map(|t| ago::format(t, now)),
            created_at,
            star_count,
        }
    }

    fn from_entry(routes: &Routes, entry: &ModuleEntry, now: DateTime<Utc>) -> Self {
        ModuleRow::new(
            routes,
            &entry.name,
            entry.description.as_deref(),
            None,
            entry.star_count,
            now,
        )
    }

    pub fn description_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.description.as_deref().unwrap_or(fallback)
    }
}

/// The `Showing first to last of total results` line.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResultRange {
    pub first: i64,
    pub last: i64,
    pub total: i64,
}

impl ResultRange {
    pub fn new(page: i64, per_page: i64, len: usize, total: i64) -> Option<Self> {
        if len == 0 {
            return None;
        }
        let offset = page.saturating_sub(1).saturating_mul(per_page);
        Some(Self {
            first: offset.saturating_add(1),
            last: offset.saturating_add(len as i64),
            total,
        })
    }
}

#[skip_serializing_none]
#[derive(Serialize, Debug, Clone)]
pub struct Listing {
    pub query: String,
    pub page: i64,
    pub per_page: i64,
    // Total reported to the user, capped while searching.
    pub total_count: i64,
    pub placeholder: String,
    pub rows: Vec<ModuleRow>,
    pub range: Option<ResultRange>,
    // Link to the active search, absent when browsing.
    pub search_href: Option<String>,
    // Page controls are hidden while a search is active.
    pub window: Option<PageWindow>,
    pub slots: Vec<Slot>,
    pub previous_href: Option<String>,
    pub next_href: Option<String>,
}

impl Listing {
    pub fn new(
        params: &ListingParams,
        response: ListResponse,
        config: &RegistryConfig,
        now: DateTime<Utc>,
    ) -> Result<Self> {
        let routes = Routes::from(config);
        let per_page = config.per_page;

        // Search results do not carry a reliable total so the
        // page size stands in for it.
        let total_count = if params.is_search() {
            debug!(
                "search {:?} reported {} results, capping to {}",
                params.query, response.total_count, per_page
            );
            per_page
        } else {
            response.total_count
        };

        // A bad page size is rejected even though search
        // results never show page controls.
        page_count(total_count, per_page)?;

        let rows: Vec<ModuleRow> = response
            .results
            .iter()
            .map(|entry| ModuleRow::from_entry(&routes, entry, now))
            .collect();

        let range = ResultRange::new(params.page, per_page, rows.len(), total_count);

        let mut listing = Listing {
            query: params.query.clone(),
            page: params.page,
            per_page,
            total_count,
            placeholder: placeholder(Some(total_count)),
            rows,
            range,
            search_href: None,
            window: None,
            slots: Vec::new(),
            previous_href: None,
            next_href: None,
        };

        if params.is_search() {
            listing.search_href = Some(routes.search_href(&params.query));
        } else {
            let query = PaginationQuery::new(total_count, per_page, params.page);
            let window = PageWindow::compute(&query)?;
            if window.has_previous {
                listing.previous_href = Some(routes.page_href(params.page - 1));
            }
            if window.has_next {
                listing.next_href = Some(routes.page_href(params.page + 1));
            }
            listing.slots = window.slots();
            listing.window = Some(window);
        }

        Ok(listing)
    }

    /// No modules matched, the page shows a not found message.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[derive(Serialize, Debug, Clone)]
pub struct StatsView {
    pub recently_added: Vec<ModuleRow>,
    pub recently_updated: Vec<ModuleRow>,
}

impl StatsView {
    pub fn new(stats: &Stats, config: &RegistryConfig, now: DateTime<Utc>) -> Self {
        let routes = Routes::from(config);

        let recently_added = stats
            .recently_added_modules
            .iter()
            .map(|m| {
                ModuleRow::new(
                    &routes,
                    &m.name,
                    m.description.as_deref(),
                    Some(m.created_at),
                    m.star_count,
                    now,
                )
            })
            .collect();

        // Versions have no stars and show the version in
        // place of a description.
        let recently_updated = stats
            .recently_uploaded_versions
            .iter()
            .map(|v| {
                ModuleRow::new(
                    &routes,
                    &v.name,
                    Some(v.version.as_str()),
                    Some(v.created_at),
                    None,
                    now,
                )
            })
            .collect();

        Self {
            recently_added,
            recently_updated,
        }
    }
}
