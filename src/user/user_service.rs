use std::sync::Arc;

use uuid::Uuid;

use crate::{
    error::Result,
    user::{
        password::hash_password,
        user_dto::CreateUserRequest,
        user_models::{NewUser, User},
        user_repository::UserRepository,
    },
};

#[derive(Clone)]
pub struct UserService {
    user_repository: Arc<dyn UserRepository>,
    bcrypt_cost: u32,
}

impl UserService {
    pub fn new(user_repository: Arc<dyn UserRepository>, bcrypt_cost: u32) -> Self {
        Self {
            user_repository,
            bcrypt_cost,
        }
    }

    pub async fn list_users(&self) -> Result<Vec<User>> {
        self.user_repository.find_all().await
    }

    pub async fn get_user(&self, user_id: Uuid) -> Result<Option<User>> {
        self.user_repository.find_by_id(user_id).await
    }

    pub async fn create_user(&self, payload: CreateUserRequest) -> Result<User> {
        let password_hash = hash_password(&payload.password, self.bcrypt_cost)?;

        self.user_repository
            .create(NewUser {
                id: payload.id,
                username: payload.username,
                password_hash,
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::InMemoryUserRepository;

    const TEST_COST: u32 = 4;

    #[tokio::test]
    async fn test_create_user_stores_hash_not_password() {
        let repo = Arc::new(InMemoryUserRepository::new());
        let service = UserService::new(repo.clone(), TEST_COST);

        let user = service
            .create_user(CreateUserRequest {
                id: None,
                username: "me1".to_string(),
                password: "password".to_string(),
            })
            .await
            .unwrap();

        let stored = repo.find_by_id(user.id).await.unwrap().unwrap();
        assert_ne!(stored.password_hash, "password");
        assert!(bcrypt::verify("password", &stored.password_hash).unwrap());
        assert!(stored.messages.is_empty());
    }
}
