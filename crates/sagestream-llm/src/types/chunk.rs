use bytes::Bytes;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// Key carrying the data fragment of an endpoint event
pub const PAYLOAD_PART_KEY: &str = "PayloadPart";
const BYTES_KEY: &str = "Bytes";

/// One delivery unit from the inference event stream.
///
/// Data-bearing events look like `{"PayloadPart": {"Bytes": ...}}`. Anything
/// else (errors, keep-alives, shapes added upstream later) is kept verbatim as
/// `Unknown` so the reassembler can log and skip it.
#[derive(Debug, Clone, PartialEq)]
pub enum ChunkEvent {
    PayloadPart(PayloadPart),
    Unknown(Value),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PayloadPart {
    pub bytes: Bytes,
}

impl ChunkEvent {
    /// Build a data event from raw bytes
    pub fn payload(bytes: impl AsRef<[u8]>) -> Self {
        Self::PayloadPart(PayloadPart {
            bytes: Bytes::copy_from_slice(bytes.as_ref()),
        })
    }

    /// Classify a decoded event.
    ///
    /// `Bytes` may be a UTF-8 string or an array of octets. An event without a
    /// usable `PayloadPart.Bytes` path becomes `Unknown`.
    pub fn from_value(value: Value) -> Self {
        let bytes = value
            .get(PAYLOAD_PART_KEY)
            .and_then(|part| part.get(BYTES_KEY))
            .and_then(decode_bytes);

        match bytes {
            Some(bytes) => Self::PayloadPart(PayloadPart { bytes }),
            None => Self::Unknown(value),
        }
    }

    pub fn payload_bytes(&self) -> Option<&Bytes> {
        match self {
            Self::PayloadPart(part) => Some(&part.bytes),
            Self::Unknown(_) => None,
        }
    }

    pub fn is_payload(&self) -> bool {
        matches!(self, Self::PayloadPart(_))
    }

    pub fn to_value(&self) -> Value {
        match self {
            Self::PayloadPart(part) => {
                let bytes = match std::str::from_utf8(&part.bytes) {
                    Ok(text) => Value::from(text),
                    Err(_) => Value::from(part.bytes.to_vec()),
                };
                serde_json::json!({ "PayloadPart": { "Bytes": bytes } })
            }
            Self::Unknown(value) => value.clone(),
        }
    }
}

impl From<Bytes> for ChunkEvent {
    fn from(bytes: Bytes) -> Self {
        Self::PayloadPart(PayloadPart { bytes })
    }
}

impl From<Value> for ChunkEvent {
    fn from(value: Value) -> Self {
        Self::from_value(value)
    }
}

impl Serialize for ChunkEvent {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_value().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ChunkEvent {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer).map(Self::from_value)
    }
}

fn decode_bytes(value: &Value) -> Option<Bytes> {
    match value {
        Value::String(text) => Some(Bytes::copy_from_slice(text.as_bytes())),
        Value::Array(items) => items
            .iter()
            .map(|item| item.as_u64().and_then(|octet| u8::try_from(octet).ok()))
            .collect::<Option<Vec<u8>>>()
            .map(Bytes::from),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_payload_from_string_bytes() {
        let event = ChunkEvent::from_value(json!({"PayloadPart": {"Bytes": "{\"a\":"}}));
        assert_eq!(event.payload_bytes().unwrap().as_ref(), b"{\"a\":");
    }

    #[test]
    fn test_payload_from_octet_array() {
        let event = ChunkEvent::from_value(json!({"PayloadPart": {"Bytes": [104, 105, 10]}}));
        assert_eq!(event, ChunkEvent::payload(b"hi\n"));
    }

    #[test]
    fn test_unknown_shapes() {
        for value in [
            json!({"ModelStreamError": {"Message": "boom"}}),
            json!({"PayloadPart": {}}),
            json!({"PayloadPart": {"Bytes": [256]}}),
            json!("PayloadPart"),
        ] {
            let event = ChunkEvent::from_value(value.clone());
            assert_eq!(event, ChunkEvent::Unknown(value));
            assert!(!event.is_payload());
        }
    }

    #[test]
    fn test_non_utf8_payload_serializes_as_octets() {
        let event = ChunkEvent::payload([0xffu8, 0x0a]);
        assert_eq!(event.to_value(), json!({"PayloadPart": {"Bytes": [255, 10]}}));
    }
}
