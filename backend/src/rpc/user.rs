use shared::models::ThemePreference;

use super::RpcContext;
use crate::{Error, store::InvoiceStore};

pub async fn get_pref_theme<S: InvoiceStore>(ctx: &RpcContext<S>) -> Result<ThemePreference, Error> {
    ctx.store.theme_preference(ctx.user_id).await
}
