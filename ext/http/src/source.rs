//! `PageSource`: anything that can be turned into a [`Page`].

use pagecomp::Page;

use crate::context::{collect_params, is_form_request, parse_path_only, parse_query_string};
use crate::simple::HttpRequest;

/// A request that can be viewed as a [`Page`].
///
/// Implementations take the path verbatim and collect parameters with
/// [`collect_params`].
pub trait PageSource {
    /// Build the page this request addresses.
    fn to_page(&self) -> Page;
}

impl PageSource for HttpRequest {
    fn to_page(&self) -> Page {
        let target = self.target();
        let form_body = form_body(self.method(), self.header("content-type"), self.body());
        let params = collect_params(parse_query_string(target), form_body);
        Page::new(parse_path_only(target), params)
    }
}

/// Build a page from a bare origin-form request target (`/path?query`).
///
/// Only query-string parameters are collected. A `#fragment` is dropped.
#[must_use]
pub fn page_from_target(target: &str) -> Page {
    Page::new(
        parse_path_only(target),
        collect_params(parse_query_string(target), None),
    )
}

/// The body to read form parameters from, if this request carries a form.
pub(crate) fn form_body<'a>(
    method: &str,
    content_type: Option<&str>,
    body: &'a [u8],
) -> Option<&'a [u8]> {
    if is_form_request(method, content_type) {
        Some(body)
    } else {
        if !body.is_empty() {
            tracing::trace!(method, ?content_type, len = body.len(), "body skipped, not a form");
        }
        None
    }
}
