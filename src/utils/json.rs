use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::config::{NullFieldPolicy, SerializationConfig};
use crate::errors::Result;

/// 按配置将记录编码为 JSON
///
/// `Omit` 策略下会递归删除所有值为 `null` 的键，数组元素本身保留。
pub fn encode<T: Serialize>(value: &T, config: &SerializationConfig) -> Result<String> {
    let text = match config.null_fields {
        NullFieldPolicy::Explicit => to_text(value, config.pretty)?,
        NullFieldPolicy::Omit => {
            let mut json = serde_json::to_value(value)?;
            strip_nulls(&mut json);
            to_text(&json, config.pretty)?
        }
    };

    debug!(
        "Encoded {} ({} bytes, null fields: {:?})",
        std::any::type_name::<T>(),
        text.len(),
        config.null_fields
    );
    Ok(text)
}

/// 解码 JSON，缺失的键与显式 `null` 都视为未设置
pub fn decode<T: DeserializeOwned>(text: &str) -> Result<T> {
    let value = serde_json::from_str(text)?;
    debug!("Decoded {}", std::any::type_name::<T>());
    Ok(value)
}

fn to_text<T: Serialize + ?Sized>(value: &T, pretty: bool) -> Result<String> {
    if pretty {
        Ok(serde_json::to_string_pretty(value)?)
    } else {
        Ok(serde_json::to_string(value)?)
    }
}

fn strip_nulls(value: &mut Value) {
    match value {
        Value::Object(map) => {
            map.retain(|_, v| !v.is_null());
            map.values_mut().for_each(strip_nulls);
        }
        Value::Array(items) => items.iter_mut().for_each(strip_nulls),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ClassRecord, ClassRoomsResponse, OffsetTimestamp, RoomRecord};

    fn config(null_fields: NullFieldPolicy) -> SerializationConfig {
        SerializationConfig {
            null_fields,
            pretty: false,
        }
    }

    #[test]
    fn test_explicit_nulls() {
        let mut record = ClassRecord::default();
        record.set_class_id(101);
        let text = encode(&record, &config(NullFieldPolicy::Explicit)).unwrap();
        assert_eq!(
            text,
            r#"{"classId":101,"className":null,"createdAt":null}"#
        );
    }

    #[test]
    fn test_omit_nulls() {
        let mut record = ClassRecord::default();
        record.set_class_id(101);
        let text = encode(&record, &config(NullFieldPolicy::Omit)).unwrap();
        assert_eq!(text, r#"{"classId":101}"#);

        let empty = encode(&ClassRecord::default(), &config(NullFieldPolicy::Omit)).unwrap();
        assert_eq!(empty, "{}");
    }

    #[test]
    fn test_omit_nulls_nested() {
        let mut room = RoomRecord::default();
        room.set_room_id(1);
        let response = ClassRoomsResponse::new(ClassRecord::default(), vec![room]);
        let text = encode(&response, &config(NullFieldPolicy::Omit)).unwrap();
        assert_eq!(text, r#"{"classInfo":{},"rooms":[{"roomId":1}]}"#);
    }

    #[test]
    fn test_decode_both_policies() {
        let mut record = ClassRecord::default();
        record.set_class_name("Algebra I".to_string());
        record.set_created_at(OffsetTimestamp::parse("2024-01-15T09:30:00+00:00").unwrap());

        for policy in [NullFieldPolicy::Explicit, NullFieldPolicy::Omit] {
            let text = encode(&record, &config(policy)).unwrap();
            let back: ClassRecord = decode(&text).unwrap();
            assert_eq!(back, record);
        }
    }

    #[test]
    fn test_zero_offset_round_trip() {
        let mut record = ClassRecord::default();
        record.set_created_at(OffsetTimestamp::parse("2024-01-15T09:30:00+00:00").unwrap());

        let text = encode(&record, &config(NullFieldPolicy::Omit)).unwrap();
        assert_eq!(text, r#"{"createdAt":"2024-01-15T09:30:00+00:00"}"#);

        let back: ClassRecord = decode(&text).unwrap();
        assert_eq!(back, record);
        assert_eq!(
            back.created_at().map(|ts| ts.to_string()).as_deref(),
            Some("2024-01-15T09:30:00+00:00")
        );
    }

    #[test]
    fn test_pretty() {
        let mut record = ClassRecord::default();
        record.set_class_id(1);
        let text = encode(
            &record,
            &SerializationConfig {
                null_fields: NullFieldPolicy::Omit,
                pretty: true,
            },
        )
        .unwrap();
        assert_eq!(text, "{\n  \"classId\": 1\n}");
    }

    #[test]
    fn test_decode_errors() {
        let err = decode::<ClassRecord>(r#"{"classId": "abc"}"#).unwrap_err();
        assert_eq!(err.code(), "E002");

        let err = decode::<ClassRecord>(r#"{"createdAt": "yesterday"}"#).unwrap_err();
        assert_eq!(err.code(), "E002");
    }
}
