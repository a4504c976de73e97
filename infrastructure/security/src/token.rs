use rand::Rng;

use business::domain::user::services::TokenGenerator;

const TOKEN_BYTES: usize = 32;

/// 32 bytes from the thread-local CSPRNG, hex encoded.
pub struct RandomTokenGenerator;

impl TokenGenerator for RandomTokenGenerator {
    fn reset_token(&self) -> String {
        let mut bytes = [0u8; TOKEN_BYTES];
        rand::rng().fill(&mut bytes);
        hex::encode(bytes)
    }
}
