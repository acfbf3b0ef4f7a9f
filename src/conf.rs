use anyhow::Result;
use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::Deserialize;
use std::{env, path::Path};

static DEFAULT_CONF: &str = include_str!("../flortune.conf");

#[derive(Debug, Deserialize)]
pub struct Conf {
    pub quotes: QuotesConf,
}

#[derive(Clone, Debug, Deserialize)]
pub struct QuotesConf {
    pub base_url: String,
    pub timeout_secs: u64,
    pub cache_max_age: u32,
}

impl Conf {
    pub fn new() -> Result<Conf> {
        Ok(Conf::figment().extract()?)
    }

    pub fn figment() -> Figment {
        let mut figment = Figment::new().merge(Toml::string(DEFAULT_CONF));

        if let Ok(data_dir) = env::var("DATA_DIR") {
            figment = figment.merge(Toml::file(Path::new(&data_dir).join("flortune.conf")));
        }

        figment.merge(Env::prefixed("FLORTUNE_").split("__"))
    }
}
