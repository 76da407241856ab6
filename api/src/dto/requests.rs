use serde_json::{Map, Value};

/// Body of `POST /post/{id}`.
///
/// Post-shaped: both fields are optional and unknown fields are ignored.
/// `id` is accepted so clients can send back a post they fetched, but routing
/// only ever looks at the path segment.
#[derive(Debug, Default)]
pub struct PostPayload {
    pub id: Option<i64>,
    pub body: Option<String>,
}

impl PostPayload {
    /// Parses a raw request body. A top-level `null` is an empty payload.
    ///
    /// Keys match case-insensitively (`"Body"`, `"ID"`); when a field appears
    /// under several spellings the last one read wins.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        let fields: Option<Map<String, Value>> = serde_json::from_slice(bytes)?;

        let mut payload = PostPayload::default();
        for (key, value) in fields.into_iter().flatten() {
            if key.eq_ignore_ascii_case("id") {
                payload.id = serde_json::from_value(value)?;
            } else if key.eq_ignore_ascii_case("body") {
                payload.body = serde_json::from_value(value)?;
            }
        }

        Ok(payload)
    }

    pub fn into_body(self) -> String {
        self.body.unwrap_or_default()
    }
}
