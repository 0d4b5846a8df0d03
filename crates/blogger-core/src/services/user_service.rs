use std::sync::Arc;

use bson::oid::ObjectId;

use crate::domain::{Entity, NewUser, User, fields};
use crate::error::{DomainError, FieldError};
use crate::ports::{PasswordService, UserRepository};
use crate::query::{Filter, ListParams, Paginated};

/// User accounts and credential checks.
#[derive(Clone)]
pub struct UserService {
    users: Arc<dyn UserRepository>,
    passwords: Arc<dyn PasswordService>,
}

impl UserService {
    pub fn new(users: Arc<dyn UserRepository>, passwords: Arc<dyn PasswordService>) -> Self {
        Self { users, passwords }
    }

    /// Users page. `searchLoginTerm` and `searchEmailTerm` are OR-ed when both are given.
    pub async fn list(&self, params: &ListParams) -> Result<Paginated<User>, DomainError> {
        let filter = Filter::search([
            (fields::LOGIN, params.search_login_term.as_deref()),
            (fields::EMAIL, params.search_email_term.as_deref()),
        ]);
        Ok(self.users.find_page(&params.to_query(filter)).await?)
    }

    pub async fn get(&self, id: ObjectId) -> Result<User, DomainError> {
        self.users
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found(User::KIND, id))
    }

    /// Register a user. Login and email must both be unused.
    pub async fn create(&self, new_user: NewUser) -> Result<User, DomainError> {
        let mut errors = Vec::new();
        if self.users.find_by_login(&new_user.login).await?.is_some() {
            errors.push(FieldError::new(fields::LOGIN, "login should be unique"));
        }
        if self.users.find_by_email(&new_user.email).await?.is_some() {
            errors.push(FieldError::new(fields::EMAIL, "email should be unique"));
        }
        if !errors.is_empty() {
            return Err(DomainError::Validation(errors));
        }

        let password_hash = self
            .passwords
            .hash(&new_user.password)
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        let user = self
            .users
            .insert(User::new(new_user.login, new_user.email, password_hash))
            .await?;
        tracing::info!(user_id = %user.id, "User created");
        Ok(user)
    }

    pub async fn delete(&self, id: ObjectId) -> Result<(), DomainError> {
        if !self.users.delete(id).await? {
            return Err(DomainError::not_found(User::KIND, id));
        }
        tracing::info!(user_id = %id, "User deleted");
        Ok(())
    }

    /// The user matching `login_or_email` if `password` is correct.
    pub async fn check_credentials(
        &self,
        login_or_email: &str,
        password: &str,
    ) -> Result<Option<User>, DomainError> {
        let Some(user) = self.users.find_by_login_or_email(login_or_email).await? else {
            return Ok(None);
        };

        let valid = self
            .passwords
            .verify(password, &user.password_hash)
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        Ok(valid.then_some(user))
    }
}
