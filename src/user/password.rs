use crate::error::{AppError, Result};

pub fn hash_password(password: &str, cost: u32) -> Result<String> {
    bcrypt::hash(password, cost).map_err(|e| {
        tracing::error!("Password hashing failed: {:?}", e);
        AppError::InternalError
    })
}
