use argon2::{
    Argon2, PasswordHasher,
    password_hash::{SaltString, rand_core::OsRng},
};
use diesel::prelude::*;
use shared::schema::{user_preferences, users};

use crate::{
    Error,
    models::{Backend, Signup, Users},
};

impl Backend {
    pub fn check_username_exists(&self, username: &str) -> Result<bool, Error> {
        let mut conn = self.get_connection()?;
        let exists = diesel::select(diesel::dsl::exists(
            users::table.filter(users::username.eq(username)),
        ))
        .get_result::<bool>(&mut conn)?;
        Ok(exists)
    }

    pub fn check_email_exists(&self, email: &str) -> Result<bool, Error> {
        let mut conn = self.get_connection()?;
        let exists = diesel::select(diesel::dsl::exists(
            users::table.filter(users::email.eq(email)),
        ))
        .get_result::<bool>(&mut conn)?;
        Ok(exists)
    }

    /// Stores the user with an argon2 hash and a default theme preference.
    pub fn create_user(&self, signup: Signup) -> Result<Users, Error> {
        let salt = SaltString::generate(&mut OsRng);
        let password_hash = Argon2::default()
            .hash_password(signup.password.as_bytes(), &salt)?
            .to_string();
        let mut conn = self.get_connection()?;
        conn.transaction::<_, Error, _>(|conn| {
            let user = diesel::insert_into(users::table)
                .values((
                    users::username.eq(&signup.username),
                    users::email.eq(&signup.email),
                    users::password.eq(&password_hash),
                ))
                .returning(Users::as_returning())
                .get_result::<Users>(conn)?;
            diesel::insert_into(user_preferences::table)
                .values(user_preferences::user_id.eq(user.id))
                .execute(conn)?;
            Ok(user)
        })
    }
}
