use super::{Email, UserId, UserPasswordHash};

/// A persisted user. Only the store hands these out.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: UserId,
    pub email: Email,
    pub password_hash: UserPasswordHash,
}

/// Insert shape for [`User`]; ids are always assigned by the store.
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub email: Email,
    pub password_hash: UserPasswordHash,
}

impl NewUser {
    pub fn new(email: Email, password_hash: UserPasswordHash) -> Self {
        Self {
            email,
            password_hash,
        }
    }

    pub fn with_id(self, id: UserId) -> User {
        User {
            id,
            email: self.email,
            password_hash: self.password_hash,
        }
    }
}
