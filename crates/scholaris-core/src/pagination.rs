use serde::{Deserialize, Deserializer, Serialize};

fn deserialize_optional_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    match s {
        Some(s) if s.is_empty() => Ok(None),
        Some(s) => s.parse::<i64>().map(Some).map_err(serde::de::Error::custom),
        None => Ok(None),
    }
}

/// Pagination metadata included in list responses.
#[derive(Debug, Serialize)]
pub struct PaginationMeta {
    pub page: i64,
    pub limit: i64,
    pub total: i64,
    pub total_pages: i64,
}

impl PaginationMeta {
    pub fn new(page: i64, limit: i64, total: i64) -> Self {
        let total_pages = if total == 0 {
            0
        } else {
            (total + limit - 1) / limit
        };
        Self {
            page,
            limit,
            total,
            total_pages,
        }
    }
}

/// Page/limit query parameters.
///
/// Query-string values arrive as strings, so both fields accept string-typed
/// numbers. Accessors clamp to the valid ranges: page >= 1 and
/// 1 <= limit <= 100.
#[derive(Debug, Default, Deserialize)]
pub struct PaginationParams {
    #[serde(default, deserialize_with = "deserialize_optional_i64")]
    pub page: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_optional_i64")]
    pub limit: Option<i64>,
}

impl PaginationParams {
    /// Page number, defaulting to 1. Zero or negative values resolve to 1.
    pub fn page(&self) -> i64 {
        self.page.unwrap_or(1).max(1)
    }

    /// Page size, defaulting to 10 and clamped to 1..=100.
    pub fn limit(&self) -> i64 {
        self.limit.unwrap_or(10).clamp(1, 100)
    }

    /// Row offset derived from page and limit: (page - 1) * limit.
    /// Saturates so an absurdly large page stays a valid non-negative
    /// offset instead of overflowing.
    pub fn offset(&self) -> i64 {
        (self.page() - 1).saturating_mul(self.limit())
    }
}

/// Generic paginated response envelope.
#[derive(Debug, Serialize)]
pub struct Paginated<T> {
    pub data: Vec<T>,
    pub meta: PaginationMeta,
}

impl<T> Paginated<T> {
    pub fn new(data: Vec<T>, params: &PaginationParams, total: i64) -> Self {
        Self {
            meta: PaginationMeta::new(params.page(), params.limit(), total),
            data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let params = PaginationParams::default();
        assert_eq!(params.page(), 1);
        assert_eq!(params.limit(), 10);
        assert_eq!(params.offset(), 0);
    }

    #[test]
    fn test_offset_derivation() {
        let params = PaginationParams {
            page: Some(2),
            limit: Some(5),
        };
        assert_eq!(params.offset(), 5);
        assert_eq!(params.limit(), 5);
    }

    #[test]
    fn test_page_clamps_to_one() {
        for page in [Some(0), Some(-3), None] {
            let params = PaginationParams {
                page,
                limit: Some(10),
            };
            assert_eq!(params.page(), 1);
            assert_eq!(params.offset(), 0);
        }
    }

    #[test]
    fn test_limit_boundary_cases() {
        let cases = vec![
            (Some(1), 1),
            (Some(50), 50),
            (Some(100), 100),
            (Some(101), 100),
            (Some(150), 100),
            (Some(0), 1),
            (Some(-1), 1),
            (None, 10),
        ];

        for (input, expected) in cases {
            let params = PaginationParams {
                page: Some(1),
                limit: input,
            };
            assert_eq!(params.limit(), expected);
        }
    }

    #[test]
    fn test_offset_saturates_on_huge_page() {
        let params = PaginationParams {
            page: Some(i64::MAX),
            limit: Some(100),
        };
        assert_eq!(params.offset(), i64::MAX);
        assert!(params.offset() >= 0);
    }

    #[test]
    fn test_deserialize_string_values() {
        let params: PaginationParams =
            serde_json::from_str(r#"{"page":"2","limit":"5"}"#).unwrap();
        assert_eq!(params.page(), 2);
        assert_eq!(params.limit(), 5);
        assert_eq!(params.offset(), 5);
    }

    #[test]
    fn test_deserialize_empty_strings() {
        let params: PaginationParams =
            serde_json::from_str(r#"{"page":"","limit":""}"#).unwrap();
        assert_eq!(params.page(), 1);
        assert_eq!(params.limit(), 10);
    }

    #[test]
    fn test_deserialize_missing_fields() {
        let params: PaginationParams = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(params.page(), 1);
        assert_eq!(params.limit(), 10);
    }

    #[test]
    fn test_meta_total_pages() {
        let meta = PaginationMeta::new(1, 10, 95);
        assert_eq!(meta.total_pages, 10);

        let meta = PaginationMeta::new(1, 10, 100);
        assert_eq!(meta.total_pages, 10);

        let meta = PaginationMeta::new(1, 10, 0);
        assert_eq!(meta.total_pages, 0);
    }

    #[test]
    fn test_meta_serialize() {
        let meta = PaginationMeta::new(3, 20, 100);
        let serialized = serde_json::to_string(&meta).unwrap();
        assert!(serialized.contains(r#""page":3"#));
        assert!(serialized.contains(r#""limit":20"#));
        assert!(serialized.contains(r#""total":100"#));
        assert!(serialized.contains(r#""total_pages":5"#));
    }
}
