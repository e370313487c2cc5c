use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::{
    center_page, has_next, has_previous, page_count, window_decoration,
    Result, SLOT_COUNT,
};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationQuery {
    // Total number of items, may be a capped estimate.
    pub total_count: i64,
    // Number of items on each page.
    pub per_page: i64,
    // Requested page, 1-indexed.
    pub page: i64,
}

impl PaginationQuery {
    pub fn new(total_count: i64, per_page: i64, page: i64) -> Self {
        Self {
            total_count,
            per_page,
            page,
        }
    }
}

/// A single control in the page strip.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Slot {
    Page(i64),
    Ellipsis,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PageWindow {
    // The requested page.
    pub page: i64,
    // Total number of pages.
    pub page_count: i64,
    pub has_previous: bool,
    pub has_next: bool,
    // Middle of the run of three consecutive pages.
    pub center_page: i64,
    pub show_left_ellipsis: bool,
    pub show_right_ellipsis: bool,
    // Page 2 when it is shown instead of the left ellipsis.
    pub left_neighbor: Option<i64>,
    // The penultimate page when it is shown instead of
    // the right ellipsis.
    pub right_neighbor: Option<i64>,
}

impl PageWindow {
    pub fn compute(query: &PaginationQuery) -> Result<Self> {
        let count = page_count(query.total_count, query.per_page)?;
        let center = center_page(query.page, count);
        let deco = window_decoration(center, count);

        Ok(Self {
            page: query.page,
            page_count: count,
            has_previous: has_previous(query.page),
            has_next: has_next(query.page, query.total_count, query.per_page)?,
            center_page: center,
            show_left_ellipsis: deco.show_left_ellipsis,
            show_right_ellipsis: deco.show_right_ellipsis,
            left_neighbor: deco.left_neighbor,
            right_neighbor: deco.right_neighbor,
        })
    }

    pub fn is_current(&self, page: i64) -> bool {
        self.page == page
    }

    /// Controls to render, in order.
    ///
    /// Short results list every page; otherwise the fixed layout of
    /// first page, left neighbour or ellipsis, the centre run, right
    /// neighbour or ellipsis and the last page is used.
    pub fn slots(&self) -> Vec<Slot> {
        if self.page_count <= SLOT_COUNT {
            return (1..=self.page_count).map(Slot::Page).collect();
        }

        let mut slots = vec![Slot::Page(1)];
        match self.left_neighbor {
            Some(page) => slots.push(Slot::Page(page)),
            None => slots.push(Slot::Ellipsis),
        }
        for page in (self.center_page - 1)..=(self.center_page + 1) {
            slots.push(Slot::Page(page));
        }
        match self.right_neighbor {
            Some(page) => slots.push(Slot::Page(page)),
            None => slots.push(Slot::Ellipsis),
        }
        slots.push(Slot::Page(self.page_count));
        slots
    }
}
