//! Request parsing helpers.
//!
//! Split a request target into path and query, decide whether a body is a
//! form, and merge form and query parameters into one flat map.

use pagecomp::Params;

/// Media type of a URL-encoded form body.
const FORM_URLENCODED: &str = "application/x-www-form-urlencoded";

/// Methods whose form bodies contribute parameters.
const FORM_METHODS: [&str; 3] = ["POST", "PUT", "PATCH"];

/// Drop a trailing `#fragment`.
fn strip_fragment(target: &str) -> &str {
    target.split_once('#').map_or(target, |(t, _)| t)
}

/// Parse query string from an origin-form request target (`/path?query`).
///
/// Returns the query string portion after '?' or None if no query string.
/// A trailing `#fragment` is dropped.
#[must_use]
pub fn parse_query_string(target: &str) -> Option<&str> {
    strip_fragment(target).split_once('?').map(|(_, query)| query)
}

/// Parse path without query string from an origin-form request target.
///
/// Returns the path portion before '?' or the full target if no query string.
/// A trailing `#fragment` is dropped.
#[must_use]
pub fn parse_path_only(target: &str) -> &str {
    let target = strip_fragment(target);
    target.split_once('?').map_or(target, |(p, _)| p)
}

/// Whether a request with this method and `Content-Type` carries form parameters.
///
/// Media-type parameters (`; charset=utf-8`) are ignored; both the method and
/// the media type compare case-insensitively.
#[must_use]
pub fn is_form_request(method: &str, content_type: Option<&str>) -> bool {
    let Some(content_type) = content_type else {
        return false;
    };
    let media_type = content_type
        .split_once(';')
        .map_or(content_type, |(m, _)| m)
        .trim();

    FORM_METHODS.iter().any(|m| m.eq_ignore_ascii_case(method))
        && media_type.eq_ignore_ascii_case(FORM_URLENCODED)
}

/// Merge form-body and query-string parameters into one flat map.
///
/// The form body is read first, then the query string. Both are
/// percent-decoded (`+` decodes to a space). For a key seen more than once,
/// across or within sources, the first value wins.
#[must_use]
pub fn collect_params(query: Option<&str>, form_body: Option<&[u8]>) -> Params {
    let mut params = Params::new();
    let sources = form_body
        .into_iter()
        .chain(query.map(str::as_bytes));

    for source in sources {
        for (key, value) in url::form_urlencoded::parse(source) {
            params
                .entry(key.into_owned())
                .or_insert_with(|| value.into_owned());
        }
    }
    params
}
