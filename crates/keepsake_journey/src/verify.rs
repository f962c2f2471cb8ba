//! Date verification gate
//!
//! The entry gate asks for two dates. Both must match the expected strings
//! exactly; anything else fails with no state change, so the gate can be
//! retried freely.

#[derive(Clone, Debug)]
pub struct VerificationGate {
    expected_birth: String,
    expected_together: String,
}

impl VerificationGate {
    /// Expected answers as `YYYY-MM-DD` strings.
    pub fn new(expected_birth: impl Into<String>, expected_together: impl Into<String>) -> Self {
        Self {
            expected_birth: expected_birth.into(),
            expected_together: expected_together.into(),
        }
    }

    /// Exact match on both dates.
    pub fn check(&self, birth: &str, together: &str) -> bool {
        let passed = birth == self.expected_birth && together == self.expected_together;
        if passed {
            tracing::info!("verification gate passed");
        }
        passed
    }
}
