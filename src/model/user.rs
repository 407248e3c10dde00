//! User schema for the account service.

use serde::{Deserialize, Serialize};

use super::Resource;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub email: String,
}

#[derive(Debug, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
}

impl Resource for User {
    type Draft = NewUser;

    const COLLECTION: &'static str = "users";
    const KIND: &'static str = "User";
    const SERVICE: &'static str = "user-service";
    const TITLE: &'static str = "User Service";

    fn id(&self) -> u64 {
        self.id
    }

    fn assign(draft: NewUser, id: u64) -> Self {
        Self {
            id,
            name: draft.name,
            email: draft.email,
        }
    }

    fn seed() -> Vec<Self> {
        vec![
            Self {
                id: 1,
                name: "Alice".into(),
                email: "alice@example.com".into(),
            },
            Self {
                id: 2,
                name: "Bob".into(),
                email: "bob@example.com".into(),
            },
        ]
    }
}
