pub mod argon2_password_hasher;
pub mod bcrypt_password_hasher;
pub mod configured_password_hasher;
