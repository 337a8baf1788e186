use serde_json::Value;

/// Canonical classification of the JSON root returned by the API.
///
/// The payload arrives either as a mapping with the record list nested at
/// `data.domain`, or as a bare array of records. Anything else is
/// unrecognized. Absent keys normalize to an empty list, so downstream code
/// only ever deals with a record list or a rejected shape.
#[derive(Debug, Clone, PartialEq)]
pub enum RecordPayload {
    /// A record list was located (possibly empty).
    Records(Vec<Value>),
    /// The root was neither a mapping nor a list.
    Unrecognized,
}

impl RecordPayload {
    pub fn from_root(root: Value) -> Self {
        match root {
            Value::Object(mut map) => {
                // data.domain that exists but is not an array is a shape
                // violation, not an empty list
                match map
                    .get_mut("data")
                    .and_then(|data| data.get_mut("domain"))
                    .map(Value::take)
                {
                    Some(Value::Array(records)) => RecordPayload::Records(records),
                    Some(_) => RecordPayload::Unrecognized,
                    None => RecordPayload::Records(Vec::new()),
                }
            }
            Value::Array(records) => RecordPayload::Records(records),
            _ => RecordPayload::Unrecognized,
        }
    }
}
