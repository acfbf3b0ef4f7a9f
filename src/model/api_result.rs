use super::{QuoteError, QuoteRecord, QuoteResponse};
use rocket::{
    http::{ContentType, Header, Status},
    request::Request,
    response::{self, Responder, Response},
};
use std::io::Cursor;
use tracing::error;

/// A `QuoteResponse` paired with the HTTP status and cache hint it should be
/// served with.
#[derive(Debug)]
pub struct ApiResult {
    pub status: Status,
    pub body: QuoteResponse,
    pub cache_control: String,
}

impl ApiResult {
    pub fn new(result: Result<Vec<QuoteRecord>, QuoteError>, cache_max_age: u32) -> ApiResult {
        match result {
            Ok(records) => ApiResult {
                status: Status::Ok,
                body: QuoteResponse::ok(records),
                cache_control: format!("public, max-age={}", cache_max_age),
            },
            Err(e) => {
                let status = match e {
                    QuoteError::Transport(_) => Status::BadGateway,
                    QuoteError::NotFound { .. } | QuoteError::FullMiss { .. } => Status::NotFound,
                };
                ApiResult::error(status, e.to_string())
            }
        }
    }

    pub fn error(status: Status, message: impl Into<String>) -> ApiResult {
        ApiResult {
            status,
            body: QuoteResponse::err(message),
            cache_control: "no-store".into(),
        }
    }
}

impl From<Status> for ApiResult {
    fn from(s: Status) -> Self {
        ApiResult::error(s, s.reason().unwrap_or(""))
    }
}

impl<'r> Responder<'r, 'static> for ApiResult {
    fn respond_to(self, _: &'r Request<'_>) -> response::Result<'static> {
        let body = serde_json::to_string(&self.body).map_err(|e| {
            error!(%e, "Failed to serialize response body");
            Status::InternalServerError
        })?;

        Response::build()
            .header(ContentType::JSON)
            .header(Header::new("Cache-Control", self.cache_control))
            .status(self.status)
            .sized_body(body.len(), Cursor::new(body))
            .ok()
    }
}
