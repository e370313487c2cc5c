use std::path::PathBuf;

use chrono::Utc;

use registry::{Stats, StatsView};

use super::{load_config, page_document, read_input, row_line};
use crate::Result;

#[derive(Debug)]
pub struct StatsOptions {
    pub input: PathBuf,
    pub config: Option<PathBuf>,
    pub json: bool,
}

pub fn render(view: &StatsView) -> String {
    let mut out = String::from("Recently added\n");
    for row in view.recently_added.iter() {
        out.push_str(&row_line(row));
        out.push('\n');
    }
    out.push_str("\nRecently updated\n");
    for row in view.recently_updated.iter() {
        out.push_str(&row_line(row));
        out.push('\n');
    }
    out
}

pub fn stats(options: StatsOptions) -> Result<()> {
    let config = load_config(options.config.as_ref())?;
    let content = read_input(&options.input)?;
    let stats = Stats::from_json(&content)?;
    let view = StatsView::new(&stats, &config.registry, Utc::now());

    if options.json {
        let doc = page_document(&config, "stats", serde_json::to_value(&view)?);
        println!("{}", serde_json::to_string_pretty(&doc)?);
    } else {
        print!("{}", render(&view));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use crate::command::stats::*;

    #[test]
    fn render_stats() -> Result<()> {
        let stats = Stats::from_json(
            r#"{
  "recently_added_modules": [
    {"name": "oak", "description": ":sauropod: middleware", "star_count": 12, "created_at": "2020-11-01T09:00:00Z"}
  ],
  "recently_uploaded_versions": [
    {"name": "std", "version": "0.76.0", "created_at": "2020-10-30T12:00:00Z"}
  ]
}"#,
        )?;
        let now = Utc.with_ymd_and_hms(2020, 11, 1, 12, 0, 0).unwrap();
        let view = StatsView::new(&stats, &Default::default(), now);
        let expected = "Recently added
oak  🦕 middleware  (3 hours ago)  ★ 12

Recently updated
std  0.76.0  (2 days ago)
";
        assert_eq!(expected, render(&view));
        Ok(())
    }
}
