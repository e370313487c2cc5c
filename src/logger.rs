use std::env;

use crate::{Error, Result};

pub const LOG_ENV_NAME: &str = "REGISTRY_LOG";

static LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

pub fn parse_level(level: &str) -> Result<&str> {
    if LEVELS.contains(&level) {
        Ok(level)
    } else {
        Err(Error::UnknownLogLevel(level.to_string()))
    }
}

pub fn log_level(level: &str) -> Result<()> {
    match parse_level(level) {
        Ok(level) => {
            env::set_var(LOG_ENV_NAME, level);
            pretty_env_logger::init_custom_env(LOG_ENV_NAME);
            Ok(())
        }
        Err(e) => {
            // Jump a few hoops so the error is still pretty printed
            env::set_var(LOG_ENV_NAME, "error");
            pretty_env_logger::init_custom_env(LOG_ENV_NAME);
            Err(e)
        }
    }
}
