use serde::{Deserialize, Serialize};

/// Response envelope for collection endpoints:
/// `{ success, count?, total?, data: [...] }`.
///
/// `count` is the number of records in this page, `total` the number of
/// records matching the query overall. Servers omit both on endpoints that
/// do not paginate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListEnvelope<T> {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<i64>,
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
}

impl<T> ListEnvelope<T> {
    /// The zeroed shape the repository layer hands out when the remote call
    /// did not go through.
    pub fn failed() -> Self {
        Self {
            success: false,
            count: Some(0),
            total: Some(0),
            data: Vec::new(),
        }
    }
}

/// Response envelope for single-record endpoints: `{ success, data }`.
/// `data` is absent on the failed shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ItemEnvelope<T> {
    pub success: bool,
    #[serde(default)]
    pub data: Option<T>,
}

impl<T> ItemEnvelope<T> {
    pub fn failed() -> Self {
        Self {
            success: false,
            data: None,
        }
    }
}
