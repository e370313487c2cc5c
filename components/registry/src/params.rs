use log::debug;
use url::form_urlencoded;

use config::RegistryConfig;

use crate::response::ListRequest;

static PAGE: &str = "page";
static QUERY: &str = "query";

/// Listing state carried in the query string of the page URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingParams {
    pub page: i64,
    pub query: String,
}

impl Default for ListingParams {
    fn default() -> Self {
        Self {
            page: 1,
            query: String::new(),
        }
    }
}

impl ListingParams {
    /// Read `page` and `query` from a raw query string; the leading
    /// `?` is optional and the first value wins for repeated keys.
    pub fn from_query<S: AsRef<str>>(raw: S) -> Self {
        let raw = raw.as_ref().trim_start_matches('?');
        let mut page: Option<String> = None;
        let mut query: Option<String> = None;

        for (key, value) in form_urlencoded::parse(raw.as_bytes()) {
            if key == PAGE && page.is_none() {
                page = Some(value.into_owned());
            } else if key == QUERY && query.is_none() {
                query = Some(value.into_owned());
            }
        }

        let page = match page {
            Some(value) => value.trim().parse::<i64>().unwrap_or_else(|_| {
                debug!("ignoring page parameter {:?}", value);
                1
            }),
            None => 1,
        };

        Self {
            page,
            query: query.unwrap_or_default(),
        }
    }

    pub fn is_search(&self) -> bool {
        !self.query.is_empty()
    }

    pub fn to_request(&self, per_page: i64) -> ListRequest {
        ListRequest::new(self.page, per_page, &self.query)
    }
}

/// Builds the links used by the listing page.
#[derive(Debug, Clone)]
pub struct Routes {
    base: String,
}

impl From<&RegistryConfig> for Routes {
    fn from(config: &RegistryConfig) -> Self {
        Routes::new(&config.base_path)
    }
}

impl Routes {
    pub fn new<S: AsRef<str>>(base: S) -> Self {
        Self {
            base: base.as_ref().trim_end_matches('/').to_string(),
        }
    }

    fn base(&self) -> &str {
        if self.base.is_empty() {
            "/"
        } else {
            &self.base
        }
    }

    /// Page one is the bare listing path.
    pub fn page_href(&self, page: i64) -> String {
        if page == 1 {
            return self.base().to_string();
        }
        let pairs = form_urlencoded::Serializer::new(String::new())
            .append_pair(PAGE, &page.to_string())
            .finish();
        format!("{}?{}", self.base(), pairs)
    }

    /// A new search always starts again from the first page.
    pub fn search_href(&self, text: &str) -> String {
        if text.is_empty() {
            return self.base().to_string();
        }
        let pairs = form_urlencoded::Serializer::new(String::new())
            .append_pair(QUERY, text)
            .finish();
        format!("{}?{}", self.base(), pairs)
    }

    pub fn module_href(&self, name: &str) -> String {
        format!("{}/{}", self.base, name)
    }
}

#[cfg(test)]
mod tests {
    use crate::params::*;

    #[test]
    fn empty_query() {
        assert_eq!(ListingParams::default(), ListingParams::from_query(""));
        assert_eq!(ListingParams::default(), ListingParams::from_query("?"));
    }

    #[test]
    fn page_and_query() {
        let params = ListingParams::from_query("?page=3&query=http%20server");
        assert_eq!(3, params.page);
        assert_eq!("http server", params.query);
        assert!(params.is_search());
    }

    #[test]
    fn unparsable_page() {
        assert_eq!(1, ListingParams::from_query("page=abc").page);
        assert_eq!(1, ListingParams::from_query("page=").page);
        assert_eq!(1, ListingParams::from_query("page=2.5").page);
    }

    #[test]
    fn out_of_range_page_kept() {
        assert_eq!(0, ListingParams::from_query("page=0").page);
        assert_eq!(-4, ListingParams::from_query("page=-4").page);
        assert_eq!(900, ListingParams::from_query("page=900").page);
    }

    #[test]
    fn repeated_keys() {
        let params = ListingParams::from_query("page=2&page=5&query=a&query=b");
        assert_eq!(2, params.page);
        assert_eq!("a", params.query);
    }

    #[test]
    fn plus_is_space() {
        let params = ListingParams::from_query("query=std+http");
        assert_eq!("std http", params.query);
    }

    #[test]
    fn page_links() {
        let routes = Routes::new("/x");
        assert_eq!("/x", routes.page_href(1));
        assert_eq!("/x?page=2", routes.page_href(2));
        assert_eq!("/x?page=10", routes.page_href(10));
    }

    #[test]
    fn search_links() {
        let routes = Routes::new("/x/");
        assert_eq!("/x", routes.search_href(""));
        assert_eq!("/x?query=oak", routes.search_href("oak"));
        assert_eq!("/x?query=a+b%26c", routes.search_href("a b&c"));
    }

    #[test]
    fn module_links() {
        let routes: Routes = (&RegistryConfig::default()).into();
        assert_eq!("/x/oak", routes.module_href("oak"));
        assert_eq!("/x?page=4", routes.page_href(4));
    }

    #[test]
    fn root_base() {
        let routes = Routes::new("/");
        assert_eq!("/", routes.page_href(1));
        assert_eq!("/?page=2", routes.page_href(2));
        assert_eq!("/oak", routes.module_href("oak"));
    }

    #[test]
    fn request_from_params() {
        let request = ListingParams::from_query("page=3").to_request(20);
        assert_eq!(3, request.page);
        assert_eq!(20, request.limit);
        assert_eq!(None, request.query);
    }
}
