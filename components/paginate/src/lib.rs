use std::cmp;

use thiserror::Error;

mod window;

pub use window::{PageWindow, PaginationQuery, Slot};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Pages kept between the centre run and either end of the strip.
pub const EDGE_MARGIN: i64 = 3;

/// Smallest centre page; leaves room for page 1, an ellipsis
/// (or page 2) and the page before the centre.
pub const LOWER_CENTER: i64 = EDGE_MARGIN + 1;

/// Number of controls in a full page strip.
pub const SLOT_COUNT: i64 = EDGE_MARGIN * 2 + 1;

/// Number of pages needed to show `total_count` items.
pub fn page_count(total_count: i64, per_page: i64) -> Result<i64> {
    if per_page <= 0 {
        return Err(Error::InvalidArgument(format!(
            "per page must be positive, got {}",
            per_page
        )));
    }

    if total_count <= 0 {
        return Ok(0);
    }

    let whole = total_count / per_page;
    if total_count % per_page > 0 {
        Ok(whole + 1)
    } else {
        Ok(whole)
    }
}

// Ignores the total on purpose so an out of range page
// still offers a way back.
pub fn has_previous(page: i64) -> bool {
    page > 1
}

pub fn has_next(page: i64, total_count: i64, per_page: i64) -> Result<bool> {
    Ok(page < page_count(total_count, per_page)?)
}

/// Clamp the current page so the centre run of three pages never
/// collides with the first or last page.
///
/// When there are too few pages for the full strip the lower bound
/// wins but is capped at `page_count` so the result stays inside the
/// valid range.
pub fn center_page(page: i64, page_count: i64) -> i64 {
    let lower = LOWER_CENTER;
    let upper = page_count - EDGE_MARGIN;
    if upper < lower {
        return cmp::max(cmp::min(lower, page_count), 0);
    }
    cmp::min(cmp::max(page, lower), upper)
}

/// Which side of the strip collapses into an ellipsis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decoration {
    pub show_left_ellipsis: bool,
    pub show_right_ellipsis: bool,
    pub left_neighbor: Option<i64>,
    pub right_neighbor: Option<i64>,
}

pub fn window_decoration(center_page: i64, page_count: i64) -> Decoration {
    let leading = center_page == LOWER_CENTER;
    let trailing = center_page == page_count - EDGE_MARGIN;

    Decoration {
        show_left_ellipsis: !leading,
        show_right_ellipsis: !trailing,
        left_neighbor: if leading { Some(2) } else { None },
        right_neighbor: if trailing { Some(page_count - 1) } else { None },
    }
}

#[cfg(test)]
mod tests {
    use crate::*;

    #[test]
    fn page_count_rounds_up() -> Result<()> {
        assert_eq!(0, page_count(0, 20)?);
        assert_eq!(1, page_count(1, 20)?);
        assert_eq!(1, page_count(20, 20)?);
        assert_eq!(2, page_count(21, 20)?);
        assert_eq!(10, page_count(200, 20)?);
        assert_eq!(7, page_count(7, 1)?);
        Ok(())
    }

    #[test]
    fn page_count_matches_ceil() -> Result<()> {
        for per_page in 1..=25 {
            for total in 0..=500 {
                let expected =
                    (total as f64 / per_page as f64).ceil() as i64;
                assert_eq!(expected, page_count(total, per_page)?);
            }
        }
        Ok(())
    }

    #[test]
    fn page_count_negative_total() -> Result<()> {
        assert_eq!(0, page_count(-40, 20)?);
        Ok(())
    }

    #[test]
    fn page_count_large_total() -> Result<()> {
        assert_eq!(i64::MAX, page_count(i64::MAX, 1)?);
        assert_eq!(i64::MAX / 2 + 1, page_count(i64::MAX, 2)?);
        Ok(())
    }

    #[test]
    fn page_count_invalid_per_page() {
        assert!(matches!(page_count(200, 0), Err(Error::InvalidArgument(_))));
        assert!(matches!(
            page_count(200, -5),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn previous_page() {
        for page in -5..=50 {
            assert_eq!(page > 1, has_previous(page));
        }
    }

    #[test]
    fn previous_page_out_of_range() -> Result<()> {
        // Page 9 no longer exists once the results shrink
        // to a single page but a previous page is still offered.
        assert_eq!(1, page_count(15, 20)?);
        assert!(has_previous(9));
        Ok(())
    }

    #[test]
    fn next_page() -> Result<()> {
        for total in 0..=120 {
            for page in -2..=10 {
                let expected = page < page_count(total, 20)?;
                assert_eq!(expected, has_next(page, total, 20)?);
            }
        }
        assert!(has_next(1, 200, 20)?);
        assert!(!has_next(10, 200, 20)?);
        assert!(!has_next(1, 0, 20)?);
        Ok(())
    }

    #[test]
    fn next_page_invalid_per_page() {
        assert!(matches!(has_next(1, 200, 0), Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn center_page_clamps() {
        assert_eq!(4, center_page(1, 10));
        assert_eq!(4, center_page(4, 10));
        assert_eq!(5, center_page(5, 10));
        assert_eq!(7, center_page(7, 10));
        assert_eq!(7, center_page(10, 10));
        assert_eq!(7, center_page(99, 10));
        assert_eq!(4, center_page(-3, 10));
    }

    #[test]
    fn center_page_few_pages() {
        assert_eq!(0, center_page(1, 0));
        assert_eq!(1, center_page(1, 1));
        assert_eq!(3, center_page(2, 3));
        assert_eq!(4, center_page(1, 5));
        assert_eq!(4, center_page(6, 6));
        assert_eq!(4, center_page(7, 7));
    }

    #[test]
    fn center_page_monotonic_and_bounded() {
        for count in 0..=40 {
            let low = std::cmp::min(LOWER_CENTER, count);
            let high = std::cmp::max(count - EDGE_MARGIN, LOWER_CENTER);
            let mut last = i64::MIN;
            for page in -5..=50 {
                let center = center_page(page, count);
                assert!(center >= last);
                assert!(center >= low && center <= high);
                last = center;
            }
        }
    }

    #[test]
    fn decoration_leading() {
        let deco = window_decoration(4, 10);
        assert!(!deco.show_left_ellipsis);
        assert_eq!(Some(2), deco.left_neighbor);
        assert!(deco.show_right_ellipsis);
        assert_eq!(None, deco.right_neighbor);
    }

    #[test]
    fn decoration_middle() {
        let deco = window_decoration(5, 10);
        assert!(deco.show_left_ellipsis);
        assert!(deco.show_right_ellipsis);
        assert_eq!(None, deco.left_neighbor);
        assert_eq!(None, deco.right_neighbor);
    }

    #[test]
    fn decoration_trailing() {
        let deco = window_decoration(7, 10);
        assert!(deco.show_left_ellipsis);
        assert!(!deco.show_right_ellipsis);
        assert_eq!(Some(9), deco.right_neighbor);
    }

    #[test]
    fn decoration_both_edges() {
        let deco = window_decoration(4, 7);
        assert!(!deco.show_left_ellipsis);
        assert!(!deco.show_right_ellipsis);
        assert_eq!(Some(2), deco.left_neighbor);
        assert_eq!(Some(6), deco.right_neighbor);
    }
}
