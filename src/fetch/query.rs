// src/fetch/query.rs

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use url::Url;

/// Records endpoint for the student nationalities dataset on the Bahrain
/// open-data portal.
pub static DATASET_RECORDS_URL: &str =
    "https://data.gov.bh/api/explore/v2.1/catalog/datasets/01-statistics-of-students-nationalities_updated/records";

/// Proxy prefix for environments that need the request relayed. The whole
/// target URL becomes the proxy's query string.
pub static CORS_PROXY_URL: &str = "https://corsproxy.io/";

/// Characters escaped when embedding the target URL in the proxy query
/// string. Matches the `encodeURIComponent` unreserved set.
const PROXY_TARGET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// String-literal patterns for the two filtered columns.
#[derive(Debug, Clone, PartialEq)]
pub struct Filters {
    pub college: String,
    pub program: String,
}

impl Default for Filters {
    fn default() -> Self {
        Self {
            college: "IT".to_string(),
            program: "bachelor".to_string(),
        }
    }
}

impl Filters {
    /// ODSQL `where` expression, e.g.
    /// `colleges like "IT" AND the_programs like "bachelor"`.
    ///
    /// `like` is the source grammar's word-pattern match on string
    /// literals, not a regex; it is kept rather than narrowed to `=`.
    pub fn where_clause(&self) -> String {
        format!(
            r#"colleges like "{}" AND the_programs like "{}""#,
            escape_pattern(&self.college),
            escape_pattern(&self.program),
        )
    }
}

/// Escape `\` and `"` so a pattern cannot break out of the quoted ODSQL
/// string literal.
fn escape_pattern(pattern: &str) -> String {
    pattern.replace('\\', "\\\\").replace('"', "\\\"")
}

/// The unified fetch strategy. Direct and proxied requests differ only in
/// the final URL wrap, so one config drives both.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    pub endpoint: Url,
    pub use_proxy: bool,
    pub filters: Filters,
    pub limit: u32,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            endpoint: Url::parse(DATASET_RECORDS_URL)
                .expect("dataset records URL should be valid"),
            use_proxy: false,
            filters: Filters::default(),
            limit: 100,
        }
    }
}

impl FetchConfig {
    /// Final request URL: endpoint plus `where` and `limit` query
    /// parameters, optionally wrapped in the relay proxy.
    pub fn request_url(&self) -> Url {
        let mut target = self.endpoint.clone();
        target
            .query_pairs_mut()
            .append_pair("where", &self.filters.where_clause())
            .append_pair("limit", &self.limit.to_string());

        if !self.use_proxy {
            return target;
        }

        let encoded = utf8_percent_encode(target.as_str(), PROXY_TARGET).to_string();
        let mut proxied = Url::parse(CORS_PROXY_URL).expect("proxy URL should be valid");
        proxied.set_query(Some(&encoded));
        proxied
    }
}
