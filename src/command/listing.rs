use std::path::PathBuf;

use chrono::Utc;
use log::info;

use registry::{ListResponse, Listing, ListingParams};

use super::{load_config, page_document, read_input, row_line, window::strip};
use crate::Result;

#[derive(Debug)]
pub struct ListingOptions {
    pub input: PathBuf,
    pub query: String,
    pub config: Option<PathBuf>,
    pub json: bool,
}

static NOT_FOUND: &str = "No modules found";

pub fn render(listing: &Listing) -> String {
    let mut out = String::new();
    out.push_str(&listing.placeholder);
    out.push('\n');

    if let Some(ref href) = listing.search_href {
        out.push_str(&format!("Results for {:?} ({})\n", listing.query, href));
    }

    if listing.is_empty() {
        out.push_str(NOT_FOUND);
        out.push('\n');
    }

    for row in listing.rows.iter() {
        out.push_str(&row_line(row));
        out.push('\n');
    }

    if let Some(ref range) = listing.range {
        out.push_str(&format!(
            "Showing {} to {} of {} results\n",
            range.first, range.last, range.total
        ));
    }

    if let Some(ref window) = listing.window {
        out.push_str(&format!("{}/{}\n", window.page, window.page_count));
        out.push_str(&strip(window));
        out.push('\n');
    }

    out
}

pub fn listing(options: ListingOptions) -> Result<()> {
    let config = load_config(options.config.as_ref())?;
    let params = ListingParams::from_query(&options.query);

    let request = params.to_request(config.registry.per_page);
    info!("{}", request.to_url(&config.api_url()?));

    let content = read_input(&options.input)?;
    let response = ListResponse::from_json(&content)?;
    let listing = Listing::new(&params, response, &config.registry, Utc::now())?;

    if options.json {
        let doc =
            page_document(&config, "listing", serde_json::to_value(&listing)?);
        println!("{}", serde_json::to_string_pretty(&doc)?);
    } else {
        print!("{}", render(&listing));
    }

    Ok(())
}
