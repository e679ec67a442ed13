/// Percent-encode user text so it can be embedded as one query-string value.
///
/// Encodes the UTF-8 bytes of `query`; spaces become `%20`.
pub fn encode_query(query: &str) -> String {
    urlencoding::encode(query).into_owned()
}
