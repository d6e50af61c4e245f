use gloo_net::http::Request;
use shared::{Mutation, Query, RpcError, RpcResponse};

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Request failed: {0}")]
    Network(#[from] gloo_net::Error),
    #[error("{}", .0.message)]
    Rpc(#[from] RpcError),
}

pub async fn fetch_query<Q: Query>() -> Result<Q::Output, ClientError> {
    let response = Request::get(&Q::PROCEDURE.url()).send().await?;
    let envelope: RpcResponse<Q::Output> = response.json().await?;
    Ok(envelope.into_result()?)
}

pub async fn call_mutation<M: Mutation>(input: &M::Input) -> Result<M::Output, ClientError> {
    let response = Request::post(&M::PROCEDURE.url())
        .json(input)?
        .send()
        .await?;
    let envelope: RpcResponse<M::Output> = response.json().await?;
    Ok(envelope.into_result()?)
}
