//! Serde support: both forms serialize as their canonical string.
//!
//! Because they go through `serialize_str`/`String`, TypeIDs also work as map
//! keys and inside `Option`/`Vec` without extra adapters.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{TypeId, TypeIdDecoded};

impl Serialize for TypeId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for TypeId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        TypeId::try_from(s).map_err(serde::de::Error::custom)
    }
}

impl Serialize for TypeIdDecoded {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TypeIdDecoded {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use serde::{Deserialize, Serialize};

    use super::*;

    const ID: &str = "type_01h455vb4pex5vsknk084sn02q";

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "PascalCase")]
    struct Container {
        id: Option<TypeId>,
        value: i32,
    }

    #[test]
    fn test_typeid_json_roundtrip() {
        let id = TypeId::parse(ID).unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{ID}\""));
        let parsed: TypeId = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_decoded_json_roundtrip() {
        let id: TypeIdDecoded = ID.parse().unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{ID}\""));
        let parsed: TypeIdDecoded = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_nested_and_null() {
        let with_id = Container {
            id: Some(TypeId::parse(ID).unwrap()),
            value: 42,
        };
        let json = serde_json::to_string(&with_id).unwrap();
        assert_eq!(json, format!("{{\"Id\":\"{ID}\",\"Value\":42}}"));
        assert_eq!(serde_json::from_str::<Container>(&json).unwrap(), with_id);

        let without_id = Container { id: None, value: 42 };
        let json = serde_json::to_string(&without_id).unwrap();
        assert_eq!(json, "{\"Id\":null,\"Value\":42}");
        assert_eq!(serde_json::from_str::<Container>(&json).unwrap(), without_id);
    }

    #[test]
    fn test_collection_with_null() {
        let items: Vec<Option<TypeIdDecoded>> = vec![
            Some(ID.parse().unwrap()),
            None,
            Some("prefix_0123456789abcdefghjkmnpqrs".parse().unwrap()),
        ];
        let json = serde_json::to_string(&items).unwrap();
        assert_eq!(
            json,
            format!("[\"{ID}\",null,\"prefix_0123456789abcdefghjkmnpqrs\"]")
        );
        let parsed: Vec<Option<TypeIdDecoded>> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, items);
    }

    #[test]
    fn test_map_keys() {
        let mut map = BTreeMap::new();
        map.insert(TypeId::parse(ID).unwrap(), 1);
        map.insert(TypeId::parse("prefix_0123456789abcdefghjkmnpqrs").unwrap(), 2);

        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(
            json,
            format!("{{\"prefix_0123456789abcdefghjkmnpqrs\":2,\"{ID}\":1}}")
        );
        let parsed: BTreeMap<TypeId, i32> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, map);

        let decoded: BTreeMap<TypeIdDecoded, i32> = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded.len(), 2);
    }

    #[test]
    fn test_invalid_id_reports_position() {
        let err = serde_json::from_str::<Container>(
            "{\"Id\":\"type_01h455vb4pex5vsknk084sn02L\",\"Value\":1}",
        )
        .unwrap_err();
        assert!(err.is_data());
        assert_eq!(err.line(), 1);
        assert!(err.column() > 0);
        assert!(err.to_string().contains("not valid base32"));
    }
}
