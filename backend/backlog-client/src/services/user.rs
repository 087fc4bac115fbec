use crate::error::BacklogError;
use crate::params::RequestParams;
use crate::transport::{RequestMethods, Transport};

use models::User;

use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct UserService<M = Transport> {
    methods: Arc<M>,
}

impl<M: RequestMethods> UserService<M> {
    pub fn new(methods: Arc<M>) -> Self {
        Self { methods }
    }

    /// `GET users`
    pub async fn all(&self) -> Result<Vec<User>, BacklogError> {
        self.methods.get("users", RequestParams::new()).await?.json()
    }

    /// `GET users/{user_id}`
    pub async fn one(&self, user_id: i64) -> Result<User, BacklogError> {
        self.methods
            .get(&format!("users/{user_id}"), RequestParams::new())
            .await?
            .json()
    }

    /// The owner of the API key. `GET users/myself`
    pub async fn myself(&self) -> Result<User, BacklogError> {
        self.methods
            .get("users/myself", RequestParams::new())
            .await?
            .json()
    }
}
