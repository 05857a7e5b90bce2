use serde::de::Unexpected;
use serde_json::Value;

pub fn to_unexpected<'a>(value: &'a Value) -> Unexpected<'a> {
    match value {
        Value::Null => Unexpected::Other("null"),
        Value::Bool(b) => Unexpected::Bool(*b),
        Value::Number(n) => {
            if let Some(u) = n.as_u64() {
                return Unexpected::Unsigned(u);
            }

            if let Some(i) = n.as_i64() {
                return Unexpected::Signed(i);
            }

            n.as_f64()
                .map(Unexpected::Float)
                .unwrap_or(Unexpected::Other("number"))
        }
        Value::String(s) => Unexpected::Str(s),
        Value::Array(_) => Unexpected::Seq,
        Value::Object(_) => Unexpected::Map,
    }
}

// Empty strings are omitted from the wire, same as absent ones
pub fn is_blank(value: &Option<Box<str>>) -> bool {
    value.as_deref().map_or(true, str::is_empty)
}

pub fn is_false(value: &bool) -> bool {
    !*value
}
