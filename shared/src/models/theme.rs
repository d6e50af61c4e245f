#[cfg(feature = "diesel")]
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

/// Display preference of a user. Users without a stored row get the default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "diesel", derive(Queryable, Selectable))]
#[cfg_attr(feature = "diesel", diesel(table_name = crate::schema::user_preferences))]
#[cfg_attr(feature = "diesel", diesel(check_for_backend(diesel::pg::Pg)))]
#[serde(rename_all = "camelCase")]
pub struct ThemePreference {
    pub dark_mode: bool,
}
