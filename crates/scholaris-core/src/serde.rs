use serde::{Deserialize, Deserializer};
use uuid::Uuid;

pub fn deserialize_optional_uuid<'de, D>(deserializer: D) -> Result<Option<Uuid>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt: Option<String> = Option::deserialize(deserializer)?;
    match opt {
        Some(s) if s.is_empty() => Ok(None),
        Some(s) => Uuid::parse_str(&s)
            .map(Some)
            .map_err(serde::de::Error::custom),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Params {
        #[serde(default, deserialize_with = "deserialize_optional_uuid")]
        branch_id: Option<Uuid>,
    }

    #[test]
    fn test_valid_uuid() {
        let id = Uuid::new_v4();
        let params: Params =
            serde_json::from_str(&format!(r#"{{"branch_id":"{}"}}"#, id)).unwrap();
        assert_eq!(params.branch_id, Some(id));
    }

    #[test]
    fn test_empty_string_is_none() {
        let params: Params = serde_json::from_str(r#"{"branch_id":""}"#).unwrap();
        assert_eq!(params.branch_id, None);
    }

    #[test]
    fn test_missing_is_none() {
        let params: Params = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(params.branch_id, None);
    }

    #[test]
    fn test_invalid_uuid_errors() {
        assert!(serde_json::from_str::<Params>(r#"{"branch_id":"nope"}"#).is_err());
    }
}
