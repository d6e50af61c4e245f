pub mod hydration;
pub mod models;
pub mod page;
pub mod query;
pub mod rpc;
#[cfg(feature = "diesel")]
pub mod schema;

pub use hydration::{DehydratedQuery, DehydratedState, STATE_SCRIPT_ID};
pub use query::QueryCache;
pub use rpc::{Mutation, Procedure, ProcedureKind, Query, RpcError, RpcErrorCode, RpcResponse};
