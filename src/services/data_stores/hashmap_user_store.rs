use crate::domain::{Email, NewUser, User, UserId, UserStore, UserStoreError};
use std::collections::HashMap;

pub struct HashmapUserStore {
    users: HashMap<Email, User>,
    next_id: i64,
}

impl Default for HashmapUserStore {
    fn default() -> Self {
        Self {
            users: HashMap::new(),
            next_id: 1,
        }
    }
}

#[async_trait::async_trait]
impl UserStore for HashmapUserStore {
    async fn save(&mut self, user: NewUser) -> Result<User, UserStoreError> {
        if self.users.contains_key(&user.email) {
            return Err(UserStoreError::UserAlreadyExists);
        }

        let user = user.with_id(UserId::new(self.next_id));
        self.next_id += 1;
        self.users.insert(user.email.clone(), user.clone());
        Ok(user)
    }

    async fn find_by_email(
        &self,
        email: &Email,
    ) -> Result<Option<User>, UserStoreError> {
        Ok(self.users.get(email).cloned())
    }
}
