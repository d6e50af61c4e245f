use argon2::{PasswordHash, PasswordVerifier};
use async_trait::async_trait;
use axum_login::{AuthUser, AuthnBackend, UserId};
use diesel::prelude::*;
use shared::schema::users;

use crate::{
    Error,
    models::{Backend, Credentials, Users},
};

impl AuthUser for Users {
    type Id = uuid::Uuid;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn session_auth_hash(&self) -> &[u8] {
        self.password.as_bytes()
    }
}

#[async_trait]
impl AuthnBackend for Backend {
    type User = Users;
    type Error = Error;
    type Credentials = Credentials;

    async fn authenticate(
        &self,
        Credentials { username, password }: Self::Credentials,
    ) -> Result<Option<Self::User>, Self::Error> {
        let mut conn = self.get_connection()?;
        let user = users::table
            .filter(users::username.eq(username))
            .filter(users::deleted.eq(false))
            .select(Users::as_select())
            .first::<Users>(&mut conn)
            .optional()?;
        let Some(user) = user else {
            return Ok(None);
        };
        let parsed_hash = PasswordHash::new(user.password.as_str())?;
        let argon2 = argon2::Argon2::default();
        if argon2.verify_password(password.as_bytes(), &parsed_hash).is_ok() {
            Ok(Some(user))
        } else {
            Ok(None)
        }
    }

    async fn get_user(&self, user_id: &UserId<Self>) -> Result<Option<Self::User>, Self::Error> {
        let mut conn = self.get_connection()?;
        let user = users::table
            .filter(users::id.eq(user_id))
            .filter(users::deleted.eq(false))
            .select(Users::as_select())
            .first::<Users>(&mut conn)
            .optional()?;
        Ok(user)
    }
}
