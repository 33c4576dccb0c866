//! Text representations of example payloads by content type

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Value;
use url::form_urlencoded;

/// Writes an example value the way a given content type would carry it
pub trait ContentWriter {
    fn handles(&self, content_type: &str) -> bool;

    fn write(&self, value: &Value) -> String;

    /// Language tag of the fenced code block
    fn language(&self) -> &'static str;
}

/// JSON with four-space indentation
pub struct JsonContentWriter;

impl ContentWriter for JsonContentWriter {
    fn handles(&self, content_type: &str) -> bool {
        content_type.to_lowercase().contains("json")
    }

    fn write(&self, value: &Value) -> String {
        let mut buffer = Vec::new();
        let mut serializer =
            serde_json::Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(b"    "));
        if value.serialize(&mut serializer).is_err() {
            return value.to_string();
        }
        String::from_utf8(buffer).unwrap_or_else(|_| value.to_string())
    }

    fn language(&self) -> &'static str {
        "json"
    }
}

/// `application/x-www-form-urlencoded` query strings
pub struct FormContentWriter;

impl ContentWriter for FormContentWriter {
    fn handles(&self, content_type: &str) -> bool {
        content_type.eq_ignore_ascii_case("application/x-www-form-urlencoded")
    }

    fn write(&self, value: &Value) -> String {
        let Value::Object(map) = value else {
            return JsonContentWriter.write(value);
        };

        let mut form = form_urlencoded::Serializer::new(String::new());
        for (key, field) in map {
            match field {
                Value::String(text) => form.append_pair(key, text),
                other => form.append_pair(key, &other.to_string()),
            };
        }
        form.finish()
    }

    fn language(&self) -> &'static str {
        ""
    }
}

const WRITERS: [&dyn ContentWriter; 2] = [&JsonContentWriter, &FormContentWriter];

/// The writer for `content_type`, JSON when none is specific to it
pub fn writer_for(content_type: &str) -> &'static dyn ContentWriter {
    WRITERS
        .into_iter()
        .find(|writer| writer.handles(content_type))
        .unwrap_or(&JsonContentWriter)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_json_uses_four_spaces() {
        let text = writer_for("application/json").write(&json!({"id": 1, "tags": ["a"]}));
        assert_eq!(text, "{\n    \"id\": 1,\n    \"tags\": [\n        \"a\"\n    ]\n}");
    }

    #[test]
    fn test_json_keeps_non_ascii() {
        let text = JsonContentWriter.write(&json!("café"));
        assert_eq!(text, "\"café\"");
    }

    #[test]
    fn test_form_urlencoded() {
        let writer = writer_for("application/x-www-form-urlencoded");
        assert_eq!(writer.language(), "");
        assert_eq!(writer.write(&json!({"name": "Foo Bar", "age": 3})), "name=Foo+Bar&age=3");
    }

    #[test]
    fn test_other_types_fall_back_to_json() {
        assert_eq!(writer_for("application/xml").language(), "json");
        assert_eq!(writer_for("multipart/form-data").language(), "json");
    }
}
