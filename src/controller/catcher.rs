use crate::model::ApiResult;
use rocket::{catch, http::Status, Request};

#[catch(default)]
pub fn default(status: Status, _req: &Request) -> ApiResult {
    status.into()
}

#[cfg(test)]
mod test {
    use crate::{
        model::QuoteResponse,
        test::{client, Upstream},
    };
    use rocket::http::Status;

    #[test]
    fn unknown_route() {
        let (client, queries) = client(Upstream::Down);
        let res = client.get("/nope").dispatch();
        assert_eq!(Status::NotFound, res.status());
        assert_eq!(Some("no-store"), res.headers().get_one("Cache-Control"));
        let body = res.into_json::<QuoteResponse>().unwrap();
        assert_eq!(QuoteResponse::err("Not Found"), body);
        assert!(queries.lock().unwrap().is_empty());
    }
}
