use std::convert::AsRef;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use url::Url;

use log::debug;
use unic_langid::LanguageIdentifier;

use crate::{Error, Result};

pub static REGISTRY_TOML: &str = "registry.toml";
pub static BASE_PATH: &str = "/x";
pub static API: &str = "https://api.deno.land/modules";
pub const PER_PAGE: i64 = 20;

static LANG: &str = "fa";

// Languages written right to left.
static RTL: [&str; 4] = ["ar", "fa", "he", "ur"];

pub fn parse_language<S: AsRef<str>>(lang: S) -> Result<LanguageIdentifier> {
    let id: LanguageIdentifier = lang.as_ref().parse()?;
    Ok(id)
}

#[skip_serializing_none]
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    pub lang: String,
    pub registry: RegistryConfig,

    #[serde(skip)]
    pub file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            lang: String::from(LANG),
            registry: Default::default(),
            file: None,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct RegistryConfig {
    // Path the module listing is served from.
    pub base_path: String,
    // Number of modules on each listing page.
    pub per_page: i64,
    // Search service endpoint.
    pub api: String,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            base_path: String::from(BASE_PATH),
            per_page: PER_PAGE,
            api: String::from(API),
        }
    }
}

impl Config {
    pub fn load_config<P: AsRef<Path>>(p: P) -> Result<Self> {
        let file = p.as_ref();
        debug!("load {:?}", file.display());
        if !file.exists() || !file.is_file() {
            return Err(Error::NotFile(file.to_path_buf()));
        }

        let content = fs::read_to_string(file)?;
        let mut cfg = Config::parse(&content)?;

        // Must be a canonical path
        cfg.file = Some(file.canonicalize()?);
        Ok(cfg)
    }

    pub fn parse<S: AsRef<str>>(content: S) -> Result<Self> {
        let cfg: Config = toml::from_str(content.as_ref())?;
        cfg.validate()?;
        Ok(cfg)
    }

    fn validate(&self) -> Result<()> {
        // Ensure that lang is a valid identifier
        parse_language(&self.lang)?;

        self.api_url()?;

        if self.registry.per_page <= 0 {
            return Err(Error::PageSize(self.registry.per_page));
        }

        if !self.registry.base_path.starts_with('/') {
            return Err(Error::BasePath(self.registry.base_path.clone()));
        }

        Ok(())
    }

    pub fn api_url(&self) -> Result<Url> {
        Ok(Url::parse(&self.registry.api)?)
    }

    pub fn is_rtl(&self) -> bool {
        match parse_language(&self.lang) {
            Ok(id) => RTL.contains(&id.language.as_str()),
            Err(_) => false,
        }
    }

    /// Value for the `dir` attribute of the page content.
    pub fn direction(&self) -> &'static str {
        if self.is_rtl() {
            "rtl"
        } else {
            "ltr"
        }
    }
}
