use crate::{
    conf::QuotesConf,
    provider::{QuoteProvider, UpstreamQuotes},
};
use anyhow::{anyhow, Result};
use reqwest::{Client, StatusCode, Url};
use std::time::Duration;
use tracing::info;

pub struct AwesomeApi {
    base_url: Url,
    client: Client,
}

impl AwesomeApi {
    pub fn new(conf: &QuotesConf) -> Result<AwesomeApi> {
        let client = Client::builder()
            .timeout(Duration::from_secs(conf.timeout_secs))
            .build()?;

        Ok(AwesomeApi {
            base_url: Url::parse(&conf.base_url)?,
            client,
        })
    }
}

#[rocket::async_trait]
impl QuoteProvider for AwesomeApi {
    fn name(&self) -> String {
        "awesomeapi".into()
    }

    async fn fetch(&self, query: &str) -> Result<Option<UpstreamQuotes>> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| anyhow!("Base URL can't take a path: {}", self.base_url))?
            .pop_if_empty()
            .push(query);
        info!(provider = %self.name(), %url, "Fetching quotes");
        let res = self.client.get(url).send().await?;

        if res.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        let quotes = res.error_for_status()?.json::<UpstreamQuotes>().await?;
        Ok(Some(quotes))
    }
}
