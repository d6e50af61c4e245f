use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::rpc::Query;

/// Id of the `<script type="application/json">` element carrying the snapshot.
pub const STATE_SCRIPT_ID: &str = "__RPC_STATE__";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DehydratedQuery {
    pub key: String,
    pub data: serde_json::Value,
    pub fetched_at: DateTime<Utc>,
}

/// Immutable snapshot of the queries resolved while building a response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DehydratedState {
    pub queries: Vec<DehydratedQuery>,
}

impl DehydratedState {
    pub fn insert(&mut self, key: impl Into<String>, data: serde_json::Value, fetched_at: DateTime<Utc>) {
        let key = key.into();
        match self.queries.iter_mut().find(|q| q.key == key) {
            Some(existing) => {
                existing.data = data;
                existing.fetched_at = fetched_at;
            }
            None => self.queries.push(DehydratedQuery {
                key,
                data,
                fetched_at,
            }),
        }
    }

    pub fn get(&self, key: &str) -> Option<&DehydratedQuery> {
        self.queries.iter().find(|q| q.key == key)
    }

    pub fn decode<Q: Query>(&self) -> Result<Option<Q::Output>, serde_json::Error> {
        self.get(Q::key())
            .map(|q| serde_json::from_value(q.data.clone()))
            .transpose()
    }

    /// JSON safe to inline in HTML: no sequence in the output can close the
    /// surrounding script element or open a comment.
    pub fn to_script_json(&self) -> Result<String, serde_json::Error> {
        let json = serde_json::to_string(self)?;
        let mut escaped = String::with_capacity(json.len());
        for c in json.chars() {
            match c {
                '<' => escaped.push_str("\\u003c"),
                '>' => escaped.push_str("\\u003e"),
                '&' => escaped.push_str("\\u0026"),
                '\u{2028}' => escaped.push_str("\\u2028"),
                '\u{2029}' => escaped.push_str("\\u2029"),
                c => escaped.push(c),
            }
        }
        Ok(escaped)
    }

    pub fn from_script_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
