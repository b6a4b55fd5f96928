use crate::domain::ports::TokenGenerator;
use rand::Rng;

const TOKEN_FLOOR: u64 = 10_000_000_000;
const TOKEN_CEILING: u64 = 100_000_000_000;

/// Draws 11-digit tokens uniformly from `[10^10, 10^11)`.
///
/// Uniqueness is probabilistic only; collisions are not checked within or
/// across sessions.
#[derive(Default)]
pub struct RandomTokenGenerator;

impl RandomTokenGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl TokenGenerator for RandomTokenGenerator {
    fn next_token(&mut self) -> String {
        rand::thread_rng()
            .gen_range(TOKEN_FLOOR..TOKEN_CEILING)
            .to_string()
    }
}
