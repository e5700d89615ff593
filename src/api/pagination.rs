//! Result paging for list endpoints.

/// Limit/offset setting applied to list requests.
///
/// `None` means "unset": the parameter is not sent and Redmine applies its
/// own default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Pagination {
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

impl Pagination {
    pub fn new(limit: Option<u32>, offset: Option<u32>) -> Self {
        Self { limit, offset }
    }

    /// Build from signed values, where any negative number means unset.
    pub fn from_raw(limit: i64, offset: i64) -> Self {
        Self {
            limit: u32::try_from(limit).ok(),
            offset: u32::try_from(offset).ok(),
        }
    }

    /// The query parameters for this setting, `limit` before `offset`.
    pub fn to_params(&self) -> Vec<(String, String)> {
        let mut params = Vec::with_capacity(2);
        if let Some(limit) = self.limit {
            params.push(("limit".to_string(), limit.to_string()));
        }
        if let Some(offset) = self.offset {
            params.push(("offset".to_string(), offset.to_string()));
        }
        params
    }
}
