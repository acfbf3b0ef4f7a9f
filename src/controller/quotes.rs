use crate::{
    conf::Conf,
    model::ApiResult,
    service::{quotes::parse_codes, QuoteService},
};
use rocket::{get, State};

#[get("/quotes?<codes>")]
pub async fn get(codes: Vec<String>, quotes: &State<QuoteService>, conf: &State<Conf>) -> ApiResult {
    let codes: Vec<String> = codes.iter().flat_map(|it| parse_codes(it)).collect();
    ApiResult::new(quotes.fetch(&codes).await, conf.quotes.cache_max_age)
}
