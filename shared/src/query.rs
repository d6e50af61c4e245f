use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::hydration::DehydratedState;
use crate::rpc::Query;

#[derive(Debug, Clone, PartialEq)]
pub struct CacheEntry {
    pub data: serde_json::Value,
    pub updated_at: DateTime<Utc>,
    pub stale: bool,
}

/// Client-side query cache. Starts from the server snapshot, then entries are
/// replaced by live fetches or marked stale by invalidation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryCache {
    entries: HashMap<String, CacheEntry>,
}

impl QueryCache {
    pub fn from_snapshot(state: &DehydratedState) -> Self {
        let entries = state
            .queries
            .iter()
            .map(|q| {
                (
                    q.key.clone(),
                    CacheEntry {
                        data: q.data.clone(),
                        updated_at: q.fetched_at,
                        stale: false,
                    },
                )
            })
            .collect();
        Self { entries }
    }

    /// `Ok(None)` when nothing is cached yet; data that does not match the
    /// query's output type is an error.
    pub fn get<Q: Query>(&self) -> Result<Option<Q::Output>, serde_json::Error> {
        self.entries
            .get(Q::key())
            .map(|entry| serde_json::from_value(entry.data.clone()))
            .transpose()
    }

    pub fn set<Q: Query>(&mut self, value: &Q::Output, at: DateTime<Utc>) -> Result<(), serde_json::Error> {
        let data = serde_json::to_value(value)?;
        self.set_raw(Q::key(), data, at);
        Ok(())
    }

    pub fn set_raw(&mut self, key: &str, data: serde_json::Value, at: DateTime<Utc>) {
        self.entries.insert(
            key.to_string(),
            CacheEntry {
                data,
                updated_at: at,
                stale: false,
            },
        );
    }

    /// Marks the entry stale but keeps its data visible until a refetch lands.
    pub fn invalidate(&mut self, key: &str) -> bool {
        match self.entries.get_mut(key) {
            Some(entry) => {
                entry.stale = true;
                true
            }
            None => false,
        }
    }

    pub fn is_stale(&self, key: &str) -> bool {
        self.entries.get(key).is_none_or(|entry| entry.stale)
    }
}
