//! `PageSource` for `http::Request`.
//!
//! Any body type that exposes its bytes works (`Vec<u8>`, `Bytes`, `String`).

use http::header::CONTENT_TYPE;
use pagecomp::Page;

use crate::context::collect_params;
use crate::source::{form_body, PageSource};

impl<B: AsRef<[u8]>> PageSource for http::Request<B> {
    fn to_page(&self) -> Page {
        let content_type = self
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok());
        let form_body = form_body(self.method().as_str(), content_type, self.body().as_ref());
        let params = collect_params(self.uri().query(), form_body);
        Page::new(self.uri().path(), params)
    }
}
