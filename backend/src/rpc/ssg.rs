use std::time::Instant;

use chrono::Utc;
use shared::{DehydratedState, Query};

use super::{RpcContext, call_query};
use crate::{Error, store::InvoiceStore};

/// Resolves queries on the server and collects their results into a
/// snapshot the client can seed its cache from.
pub struct SsgHelpers<'a, S> {
    ctx: &'a RpcContext<S>,
    state: DehydratedState,
}

impl<'a, S: InvoiceStore> SsgHelpers<'a, S> {
    pub fn new(ctx: &'a RpcContext<S>) -> Self {
        Self {
            ctx,
            state: DehydratedState::default(),
        }
    }

    pub async fn prefetch<Q: Query>(&mut self) -> Result<(), Error> {
        let started = Instant::now();
        let data = call_query(self.ctx, Q::PROCEDURE).await?;
        tracing::debug!(
            "Prefetched {} in {}ms",
            Q::key(),
            started.elapsed().as_millis()
        );
        self.state.insert(Q::key(), data, Utc::now());
        Ok(())
    }

    pub fn dehydrate(self) -> DehydratedState {
        self.state
    }
}
