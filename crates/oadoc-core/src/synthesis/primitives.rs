//! Deterministic representative values per `(kind, format)`

use crate::schema::{PrimitiveKind, PrimitiveSchema};
use serde_json::{json, Value};

/// Representative value of a primitive schema: first enum member, then the
/// default, then the fixed table entry for its kind and format
pub fn sample(primitive: &PrimitiveSchema) -> Value {
    if let Some(first) = primitive.enum_values.as_ref().and_then(|values| values.first()) {
        return first.clone();
    }

    if let Some(default) = &primitive.default {
        return default.clone();
    }

    sample_for(&primitive.kind, primitive.format.as_deref())
}

/// Table lookup, total over every kind with an unformatted fallback
pub fn sample_for(kind: &PrimitiveKind, format: Option<&str>) -> Value {
    match kind {
        PrimitiveKind::String | PrimitiveKind::Other(_) => string_sample(format),
        PrimitiveKind::Integer => json!(0),
        PrimitiveKind::Number => json!(10.12),
        PrimitiveKind::Boolean => json!(true),
        PrimitiveKind::Null => Value::Null,
    }
}

fn string_sample(format: Option<&str>) -> Value {
    let text = match format.map(str::to_lowercase).as_deref() {
        Some("email") => "user@example.com",
        Some("uuid") => "3fa85f64-5717-4562-b3fc-2c963f66afa6",
        Some("date") => "2022-04-13",
        Some("date-time") => "2022-04-13T15:42:05.901Z",
        Some("time") => "15:42:05",
        Some("password") => "************",
        Some("byte" | "binary") => "TG9yZW0gaXBzdW0gZG9sb3Igc2l0IGFtZXQ=",
        Some("uri" | "url") => "https://example.com",
        Some("hostname") => "example.com",
        Some("ipv4") => "192.168.0.1",
        Some("ipv6") => "::1",
        _ => "string",
    };
    Value::String(text.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table() {
        assert_eq!(sample_for(&PrimitiveKind::Integer, Some("int32")), json!(0));
        assert_eq!(sample_for(&PrimitiveKind::Integer, Some("int64")), json!(0));
        assert_eq!(sample_for(&PrimitiveKind::Number, Some("double")), json!(10.12));
        assert_eq!(sample_for(&PrimitiveKind::Boolean, None), json!(true));
        assert_eq!(sample_for(&PrimitiveKind::Null, None), Value::Null);
        assert_eq!(sample_for(&PrimitiveKind::String, None), json!("string"));
        assert_eq!(sample_for(&PrimitiveKind::String, Some("made-up")), json!("string"));
        assert_eq!(
            sample_for(&PrimitiveKind::String, Some("date-time")),
            json!("2022-04-13T15:42:05.901Z")
        );
        assert_eq!(
            sample_for(&PrimitiveKind::Other("file".to_string()), Some("binary")),
            json!("TG9yZW0gaXBzdW0gZG9sb3Igc2l0IGFtZXQ=")
        );
    }

    #[test]
    fn test_enum_then_default() {
        let mut primitive = PrimitiveSchema::new(PrimitiveKind::String);
        primitive.default = Some(json!("fallback"));
        assert_eq!(sample(&primitive), json!("fallback"));

        primitive.enum_values = Some(vec![json!("admin"), json!("member")]);
        assert_eq!(sample(&primitive), json!("admin"));
    }
}
