mod password;
mod token;

pub use password::Argon2PasswordHasher;
pub use token::RandomTokenGenerator;
