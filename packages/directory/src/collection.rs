use api::{User, UserPatch};

/// Ordered users, unique by id.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UserCollection {
    users: Vec<User>,
}

impl UserCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace every entry with `users`, keeping the first occurrence of a
    /// duplicated id. Returns the number of entries kept.
    pub fn replace_all(&mut self, users: Vec<User>) -> usize {
        let mut kept: Vec<User> = Vec::with_capacity(users.len());
        for user in users {
            if kept.iter().any(|u| u.id == user.id) {
                tracing::warn!("Dropping duplicate user id {} from listing", user.id);
                continue;
            }
            kept.push(user);
        }
        self.users = kept;
        self.users.len()
    }

    /// Remove the entry with `id`, preserving the order of the rest.
    pub fn remove(&mut self, id: &str) -> Option<User> {
        let index = self.users.iter().position(|u| u.id == id)?;
        Some(self.users.remove(index))
    }

    /// Merge an update response into the entry with `id`.
    pub fn merge(&mut self, id: &str, patch: UserPatch) -> Option<&User> {
        let user = self.users.iter_mut().find(|u| u.id == id)?;
        user.merge(patch);
        Some(user)
    }

    pub fn get(&self, id: &str) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &User> {
        self.users.iter()
    }

    pub fn as_slice(&self) -> &[User] {
        &self.users
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

impl From<Vec<User>> for UserCollection {
    fn from(users: Vec<User>) -> Self {
        let mut collection = Self::new();
        collection.replace_all(users);
        collection
    }
}
