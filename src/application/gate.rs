use crate::domain::ports::{
    CredentialVerifier, CredentialVerifierBox, TokenGenerator, TokenGeneratorBox,
};
use crate::error::ReservationError;

/// Credential check gating confirmation.
///
/// One check per submission, unlimited retries. Lockout and backoff belong
/// to a decorating layer outside the state machine.
pub struct PinGate {
    verifier: CredentialVerifierBox,
}

impl PinGate {
    pub fn new(verifier: CredentialVerifierBox) -> Self {
        Self { verifier }
    }

    pub fn submit(&self, pin: &str) -> Result<(), ReservationError> {
        if self.verifier.verify(pin) {
            Ok(())
        } else {
            Err(ReservationError::InvalidPin)
        }
    }
}

/// Issues a reservation token on successful confirmation.
pub struct TokenIssuer {
    generator: TokenGeneratorBox,
}

impl TokenIssuer {
    pub fn new(generator: TokenGeneratorBox) -> Self {
        Self { generator }
    }

    pub fn issue(&mut self) -> String {
        self.generator.next_token()
    }
}
