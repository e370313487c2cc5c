use log::debug;
use serde_json::json;

use paginate::{PageWindow, PaginationQuery, Slot};

use crate::Result;

#[derive(Debug)]
pub struct WindowOptions {
    pub total_count: i64,
    pub per_page: i64,
    pub page: i64,
    pub json: bool,
}

/// Plain text page strip, the current page is bracketed.
pub fn strip(window: &PageWindow) -> String {
    let mut parts: Vec<String> = Vec::new();
    if window.has_previous {
        parts.push(String::from("Previous"));
    }
    for slot in window.slots() {
        match slot {
            Slot::Page(page) if window.is_current(page) => {
                parts.push(format!("[{}]", page))
            }
            Slot::Page(page) => parts.push(page.to_string()),
            Slot::Ellipsis => parts.push(String::from("...")),
        }
    }
    if window.has_next {
        parts.push(String::from("Next"));
    }
    parts.join(" ")
}

pub fn window(options: WindowOptions) -> Result<()> {
    let query =
        PaginationQuery::new(options.total_count, options.per_page, options.page);
    let window = PageWindow::compute(&query)?;
    debug!("{:?}", window);

    if options.json {
        let doc = json!({
            "window": &window,
            "slots": window.slots(),
        });
        println!("{}", serde_json::to_string_pretty(&doc)?);
    } else {
        println!("{}/{}", window.page, window.page_count);
        println!("{}", strip(&window));
    }

    Ok(())
}
