use crate::{
    conf::{Conf, QuotesConf},
    model::QuoteRecord,
    prepare,
    provider::{QuoteProvider, UpstreamQuotes},
    service::{quotes::upstream_key, QuoteService},
};
use anyhow::{anyhow, Result};
use rocket::local::blocking::Client;
use serde_json::Map;
use std::sync::{Arc, Mutex};

/// Every query a fake provider received, in order.
pub type Queries = Arc<Mutex<Vec<String>>>;

pub enum Upstream {
    Quotes(UpstreamQuotes),
    NotFound,
    Down,
}

pub struct FakeProvider {
    upstream: Upstream,
    queries: Queries,
}

#[rocket::async_trait]
impl QuoteProvider for FakeProvider {
    fn name(&self) -> String {
        "fake".into()
    }

    async fn fetch(&self, query: &str) -> Result<Option<UpstreamQuotes>> {
        self.queries.lock().unwrap().push(query.to_string());

        match &self.upstream {
            Upstream::Quotes(quotes) => Ok(Some(quotes.clone())),
            Upstream::NotFound => Ok(None),
            Upstream::Down => Err(anyhow!("connection refused")),
        }
    }
}

pub fn fake(upstream: Upstream) -> (FakeProvider, Queries) {
    let queries = Queries::default();
    let provider = FakeProvider {
        upstream,
        queries: queries.clone(),
    };
    (provider, queries)
}

pub fn record(code: &str, codein: &str) -> QuoteRecord {
    QuoteRecord {
        code: code.into(),
        codein: codein.into(),
        name: format!("{}/{}", code, codein),
        high: "5.4321".into(),
        low: "5.3810".into(),
        var_bid: "-0.0123".into(),
        pct_change: "-0.23".into(),
        bid: "5.4012".into(),
        ask: "5.4022".into(),
        timestamp: "1718049600".into(),
        create_date: "2024-06-10 17:00:00".into(),
        extra: Map::new(),
    }
}

/// Builds a provider answer holding one record per `(code, codein)` pair.
pub fn upstream(pairs: &[(&str, &str)]) -> UpstreamQuotes {
    pairs
        .iter()
        .map(|(code, codein)| {
            let key = upstream_key(&format!("{}-{}", code, codein));
            (key, serde_json::to_value(record(code, codein)).unwrap())
        })
        .collect()
}

pub fn codes(codes: &[&str]) -> Vec<String> {
    codes.iter().map(|it| it.to_string()).collect()
}

pub fn conf() -> Conf {
    Conf {
        quotes: QuotesConf {
            base_url: "http://127.0.0.1:1/json/last".into(),
            timeout_secs: 1,
            cache_max_age: 60,
        },
    }
}

pub fn client(upstream: Upstream) -> (Client, Queries) {
    let (provider, queries) = fake(upstream);
    let figment = rocket::Config::figment().merge(("log_level", "off"));
    let rocket = prepare(
        rocket::custom(figment),
        conf(),
        QuoteService::new(Box::new(provider)),
    );
    let client = Client::untracked(rocket).unwrap();
    (client, queries)
}
