use std::borrow::Cow;

use serde_json::{Map, Value};

use crate::http::error::ElementMalformed;

/// Rendered in place of any detail field the API did not send.
pub const NOT_AVAILABLE: &str = "N/A";

/// One row of the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SongSummary {
    id: String,
    name: String,
    author: String,
}

impl SongSummary {
    pub fn new(id: impl Into<String>, name: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            author: author.into(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn author(&self) -> &str {
        &self.author
    }
}

impl TryFrom<&Value> for SongSummary {
    type Error = ElementMalformed;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        let record = value.as_object().ok_or(ElementMalformed::NotAnObject)?;
        let field = |key: &'static str| {
            record
                .get(key)
                .and_then(scalar_text)
                .ok_or(ElementMalformed::Field(key))
        };

        Ok(Self {
            id: field("id")?,
            name: field("name")?,
            author: field("author")?,
        })
    }
}

/// Full record of one song. The API does not promise any particular set of
/// keys, so this stays a plain JSON object.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SongDetail(Map<String, Value>);

impl SongDetail {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// Text for `key`, or [`NOT_AVAILABLE`] when it is absent or null.
    pub fn display(&self, key: &str) -> Cow<'_, str> {
        match self.0.get(key) {
            None | Some(Value::Null) => Cow::Borrowed(NOT_AVAILABLE),
            Some(Value::String(text)) => Cow::Borrowed(text.as_str()),
            Some(other) => Cow::Owned(other.to_string()),
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn numeric_id_becomes_string() {
        let song = SongSummary::try_from(&json!({"id": 1, "name": "Song1", "author": "X"}))
            .unwrap();
        assert_eq!(song, SongSummary::new("1", "Song1", "X"));
    }

    #[test]
    fn missing_or_null_field_is_rejected() {
        let missing = json!({"id": 3, "name": "No author"});
        assert_eq!(
            SongSummary::try_from(&missing),
            Err(ElementMalformed::Field("author"))
        );

        let null_id = json!({"id": null, "name": "a", "author": "b"});
        assert_eq!(
            SongSummary::try_from(&null_id),
            Err(ElementMalformed::Field("id"))
        );

        assert_eq!(
            SongSummary::try_from(&json!("just a string")),
            Err(ElementMalformed::NotAnObject)
        );
    }

    #[test]
    fn extra_fields_are_ignored() {
        let song = SongSummary::try_from(&json!({
            "id": "abc",
            "name": "Ave Maria",
            "author": "Schubert",
            "music_note": "Bb",
        }))
        .unwrap();
        assert_eq!(song.id(), "abc");
        assert_eq!(song.name(), "Ave Maria");
        assert_eq!(song.author(), "Schubert");
    }

    #[test]
    fn detail_display_falls_back_to_sentinel() {
        let detail = SongDetail::new(
            json!({
                "name": "Song1",
                "music_note": null,
                "id_status": 1,
            })
            .as_object()
            .cloned()
            .unwrap(),
        );

        assert_eq!(detail.display("name"), "Song1");
        assert_eq!(detail.display("music_note"), NOT_AVAILABLE);
        assert_eq!(detail.display("path_pdf"), NOT_AVAILABLE);
        assert_eq!(detail.display("id_status"), "1");
    }
}
