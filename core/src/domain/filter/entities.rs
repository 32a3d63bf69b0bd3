use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Stringified column value -> number of matching rows carrying it.
pub type FacetCount = BTreeMap<String, u64>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryResult<T> {
    pub rows: Vec<T>,
    /// Size of the whole filtered set, independent of the page.
    pub total_count: u64,
}

impl<T> QueryResult<T> {
    pub fn empty() -> Self {
        Self {
            rows: Vec::new(),
            total_count: 0,
        }
    }
}

impl<T> Default for QueryResult<T> {
    fn default() -> Self {
        Self::empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FacetedQueryResult<T> {
    pub rows: Vec<T>,
    pub total_count: u64,
    pub facets: BTreeMap<String, FacetCount>,
}
