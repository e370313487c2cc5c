use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use url::Url;

use crate::{Error, Result};

/// Parameters for one call to the module search service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListRequest {
    pub page: i64,
    pub limit: i64,
    pub query: Option<String>,
}

impl ListRequest {
    /// The service only knows about pages from one upwards so
    /// smaller page numbers are raised to the first page here.
    pub fn new(page: i64, limit: i64, query: &str) -> Self {
        let query = if query.is_empty() {
            None
        } else {
            Some(query.to_string())
        };
        Self {
            page: std::cmp::max(page, 1),
            limit,
            query,
        }
    }

    pub fn to_url(&self, api: &Url) -> Url {
        let mut url = api.clone();
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("limit", &self.limit.to_string());
            pairs.append_pair("page", &self.page.to_string());
            if let Some(ref query) = self.query {
                pairs.append_pair("query", query);
            }
        }
        url
    }
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ModuleEntry {
    pub name: String,
    pub description: Option<String>,
    pub star_count: Option<i64>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ListResponse {
    pub results: Vec<ModuleEntry>,
    #[serde(alias = "totalCount")]
    pub total_count: i64,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AddedModule {
    pub name: String,
    pub description: Option<String>,
    pub star_count: Option<i64>,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct UploadedVersion {
    pub name: String,
    pub version: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct Stats {
    pub recently_added_modules: Vec<AddedModule>,
    pub recently_uploaded_versions: Vec<UploadedVersion>,
}

// The service wraps payloads in a success envelope; saved
// payloads may also be bare.
#[derive(Deserialize)]
#[serde(untagged)]
enum Body<T> {
    Envelope {
        success: bool,
        data: Option<T>,
        error: Option<String>,
    },
    Bare(T),
}

fn parse_body<T: DeserializeOwned>(json: &str) -> Result<T> {
    match serde_json::from_str::<Body<T>>(json) {
        Ok(Body::Bare(value)) => Ok(value),
        Ok(Body::Envelope {
            success,
            data,
            error,
        }) => match (success, data) {
            (true, Some(data)) => Ok(data),
            _ => Err(Error::Api(
                error.unwrap_or_else(|| "missing data".to_string()),
            )),
        },
        // Retry strictly so the error names the offending field
        Err(_) => Ok(serde_json::from_str::<T>(json)?),
    }
}

impl ListResponse {
    pub fn from_json<S: AsRef<str>>(json: S) -> Result<Self> {
        parse_body(json.as_ref())
    }
}

impl Stats {
    pub fn from_json<S: AsRef<str>>(json: S) -> Result<Self> {
        parse_body(json.as_ref())
    }
}
