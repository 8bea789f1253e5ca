//! pagecomp-http: HTTP domain for page comparison
//!
//! Turns inbound requests into [`Page`] values for the comparator.
//!
//! # Architecture
//!
//! ```text
//! HTTP request (HttpRequest | http::Request<B>)
//!         ↓ PageSource::to_page()
//! pagecomp::Page { path, params }
//!         ↓ Comparator::equal()
//! same page / different page
//! ```
//!
//! # Parameter collection
//!
//! - `path` is the request path without the query string, taken verbatim.
//! - `params` is the union of form-body and query-string parameters.
//!   The form body is read only for `POST`, `PUT` and `PATCH` requests with
//!   `Content-Type: application/x-www-form-urlencoded`, and comes first.
//! - Keys and values are percent-decoded; the first value seen for a key wins.
//!
//! # Example
//!
//! ```
//! use pagecomp_http::prelude::*;
//!
//! let req = HttpRequest::builder()
//!     .method("GET")
//!     .target("/a/b/c/d?q1=q1value&q2=q2value")
//!     .build();
//!
//! let page = req.to_page();
//! assert_eq!(page.path(), "/a/b/c/d");
//! assert_eq!(page.param("q1"), Some("q1value"));
//! ```

mod context;
mod simple;
mod source;

#[cfg(feature = "http")]
mod request;

pub use context::{collect_params, is_form_request, parse_path_only, parse_query_string};
pub use simple::{HttpRequest, HttpRequestBuilder};
pub use source::{page_from_target, PageSource};

/// Prelude for convenient imports.
pub mod prelude {
    pub use super::{page_from_target, HttpRequest, HttpRequestBuilder, PageSource};
    pub use pagecomp::prelude::*;
}
