//! Mock phone/OTP login gate
//!
//! A two-step flow with no network round trip: a format-checked mobile
//! number, then a format-checked one-time code. The OTP is never actually
//! delivered or verified; any well-formed 4-digit code passes. Independent
//! of the negotiation engine.

use crate::error::{BargainError, Result};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

pub(crate) const MSG_INVALID_PHONE: &str = "Please enter a valid 10-digit mobile number.";
pub(crate) const MSG_INVALID_OTP: &str = "Please enter a valid 4-digit OTP.";

/// A validated 10-digit mobile number.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Validate a buyer-typed mobile number: exactly 10 ASCII digits.
    pub fn parse(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        if trimmed.len() == 10 && trimmed.chars().all(|c| c.is_ascii_digit()) {
            Ok(Self(trimmed.to_string()))
        } else {
            Err(BargainError::InvalidPhone(MSG_INVALID_PHONE.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Where the buyer is in the login flow.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoginStep {
    #[default]
    CollectingPhone,
    CollectingCode,
    LoggedIn,
}

/// Two-step login state: phone, then code.
///
/// Format failures leave the flow on the same step so the buyer can retry.
#[derive(Clone, Debug, Default)]
pub struct LoginFlow {
    step: LoginStep,
    phone: Option<PhoneNumber>,
}

impl LoginFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> LoginStep {
        self.step
    }

    /// The number collected in step one, if any
    pub fn phone(&self) -> Option<&PhoneNumber> {
        self.phone.as_ref()
    }

    pub fn is_logged_in(&self) -> bool {
        self.step == LoginStep::LoggedIn
    }

    /// Submit the mobile number and advance to code collection.
    ///
    /// A real deployment would send an OTP here; this flow draws one at
    /// random and logs it, and [`submit_code`](Self::submit_code) accepts
    /// any well-formed code.
    pub fn submit_phone(&mut self, raw: &str) -> Result<()> {
        if self.step != LoginStep::CollectingPhone {
            return Err(BargainError::InvalidStateTransition(
                "mobile number already collected".to_string(),
            ));
        }

        let phone = PhoneNumber::parse(raw)?;

        let mock_otp: u16 = rand::thread_rng().gen_range(0..10_000);
        tracing::debug!(mobile = %phone, "mock OTP issued: {mock_otp:04}");

        self.phone = Some(phone);
        self.step = LoginStep::CollectingCode;
        Ok(())
    }

    /// Submit the one-time code; any 4-digit code logs the buyer in.
    pub fn submit_code(&mut self, raw: &str) -> Result<PhoneNumber> {
        if self.step != LoginStep::CollectingCode {
            return Err(BargainError::InvalidStateTransition(
                "no OTP is expected right now".to_string(),
            ));
        }

        let trimmed = raw.trim();
        if trimmed.len() != 4 || !trimmed.chars().all(|c| c.is_ascii_digit()) {
            return Err(BargainError::InvalidOtp(MSG_INVALID_OTP.to_string()));
        }

        self.step = LoginStep::LoggedIn;
        let phone = self
            .phone
            .clone()
            .ok_or_else(|| BargainError::Internal("code collected without a number".to_string()))?;

        tracing::info!(mobile = %phone, "login successful");
        Ok(phone)
    }

    /// Go back to the number entry step.
    pub fn change_number(&mut self) -> Result<()> {
        if self.step != LoginStep::CollectingCode {
            return Err(BargainError::InvalidStateTransition(
                "can only change the number while entering the OTP".to_string(),
            ));
        }
        self.step = LoginStep::CollectingPhone;
        Ok(())
    }

    /// Discard all progress (dialog closed).
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_validation() {
        assert!(PhoneNumber::parse("9876543210").is_ok());
        assert!(PhoneNumber::parse(" 9876543210 ").is_ok());

        assert!(PhoneNumber::parse("12345").is_err());
        assert!(PhoneNumber::parse("98765432101").is_err());
        assert!(PhoneNumber::parse("98765abc10").is_err());
        assert!(PhoneNumber::parse("").is_err());
    }

    #[test]
    fn test_happy_path() {
        let mut flow = LoginFlow::new();
        assert_eq!(flow.step(), LoginStep::CollectingPhone);

        flow.submit_phone("9876543210").unwrap();
        assert_eq!(flow.step(), LoginStep::CollectingCode);

        let phone = flow.submit_code("1234").unwrap();
        assert_eq!(phone.as_str(), "9876543210");
        assert!(flow.is_logged_in());
    }

    #[test]
    fn test_any_four_digit_code_accepted() {
        for code in ["0000", "1234", "9999"] {
            let mut flow = LoginFlow::new();
            flow.submit_phone("9876543210").unwrap();
            assert!(flow.submit_code(code).is_ok(), "code {code} should pass");
        }
    }

    #[test]
    fn test_bad_phone_keeps_step() {
        let mut flow = LoginFlow::new();

        let err = flow.submit_phone("12345").unwrap_err();
        assert!(matches!(err, BargainError::InvalidPhone(_)));
        assert_eq!(flow.step(), LoginStep::CollectingPhone);

        // Retry succeeds from the same step.
        flow.submit_phone("9876543210").unwrap();
        assert_eq!(flow.step(), LoginStep::CollectingCode);
    }

    #[test]
    fn test_bad_code_keeps_step() {
        let mut flow = LoginFlow::new();
        flow.submit_phone("9876543210").unwrap();

        for bad in ["12", "12345", "12a4", ""] {
            let err = flow.submit_code(bad).unwrap_err();
            assert!(matches!(err, BargainError::InvalidOtp(_)), "code {bad:?}");
            assert_eq!(flow.step(), LoginStep::CollectingCode);
        }

        assert!(flow.submit_code("4321").is_ok());
    }

    #[test]
    fn test_wrong_step_errors() {
        let mut flow = LoginFlow::new();

        // Code before phone
        assert!(matches!(
            flow.submit_code("1234").unwrap_err(),
            BargainError::InvalidStateTransition(_)
        ));

        flow.submit_phone("9876543210").unwrap();

        // Phone twice
        assert!(matches!(
            flow.submit_phone("9876543210").unwrap_err(),
            BargainError::InvalidStateTransition(_)
        ));
    }

    #[test]
    fn test_change_number() {
        let mut flow = LoginFlow::new();
        flow.submit_phone("9876543210").unwrap();

        flow.change_number().unwrap();
        assert_eq!(flow.step(), LoginStep::CollectingPhone);

        flow.submit_phone("9123456789").unwrap();
        let phone = flow.submit_code("1111").unwrap();
        assert_eq!(phone.as_str(), "9123456789");
    }

    #[test]
    fn test_change_number_only_from_code_step() {
        let mut flow = LoginFlow::new();
        assert!(flow.change_number().is_err());
    }

    #[test]
    fn test_reset() {
        let mut flow = LoginFlow::new();
        flow.submit_phone("9876543210").unwrap();
        flow.submit_code("1234").unwrap();

        flow.reset();
        assert_eq!(flow.step(), LoginStep::CollectingPhone);
        assert!(flow.phone().is_none());
        assert!(!flow.is_logged_in());
    }
}
