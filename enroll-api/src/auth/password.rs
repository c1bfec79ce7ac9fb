use enroll_lib::contact::Contact;

use serde::{Serialize, Deserialize};

use crate::{Validator, ApiError, ApiErrorKind, Detail};
use crate::error::{AuthKind, GeneralKind};

/// step one of a password reset. sends a one-time code to the contact
#[derive(Debug, Serialize, Deserialize)]
pub struct ForgotPassword {
    pub contact: String,
}

impl Validator for ForgotPassword {
    fn validate(&self) -> Result<(), ApiError> {
        if Contact::parse(&self.contact).is_none() {
            Err(ApiError::from((
                ApiErrorKind::General(GeneralKind::ValidationFailed),
                Detail::with_key("contact")
            )))
        } else {
            Ok(())
        }
    }
}

/// step two. the code proves ownership of the contact and the new
/// credential replaces the old one
#[derive(Debug, Serialize, Deserialize)]
pub struct ResetPassword {
    pub contact: String,
    pub code: String,
    pub password: String,
    pub confirm_password: String,
}

impl Validator for ResetPassword {
    fn validate(&self) -> Result<(), ApiError> {
        if Contact::parse(&self.contact).is_none() {
            return Err(ApiError::from((
                ApiErrorKind::General(GeneralKind::ValidationFailed),
                Detail::with_key("contact")
            )));
        }

        if !enroll_lib::otp::code_valid(&self.code) {
            return Err(ApiError::from((
                ApiErrorKind::General(GeneralKind::ValidationFailed),
                Detail::with_key("code")
            )));
        }

        if !enroll_lib::sec::authn::password_valid(&self.password) {
            return Err(ApiError::from((
                ApiErrorKind::General(GeneralKind::ValidationFailed),
                Detail::with_key("password")
            )));
        }

        if self.password != self.confirm_password {
            return Err(ApiError::from((
                ApiErrorKind::Auth(AuthKind::PasswordMismatch),
                Detail::with_key("confirm_password")
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn forgot_password_rejects_malformed_contact() {
        let body = ForgotPassword {
            contact: String::from("12345"),
        };

        assert!(body.validate().is_err());

        let body = ForgotPassword {
            contact: String::from("asha@example.com"),
        };

        assert!(body.validate().is_ok());
    }

    #[test]
    fn reset_password_rejects_short_codes() {
        let body = ResetPassword {
            contact: String::from("9876543210"),
            code: String::from("1234"),
            password: String::from("Str0ng!Pass"),
            confirm_password: String::from("Str0ng!Pass"),
        };

        assert!(body.validate().is_err());
    }

    #[test]
    fn reset_password_rejects_mismatch() {
        let body = ResetPassword {
            contact: String::from("9876543210"),
            code: String::from("123456"),
            password: String::from("Str0ng!Pass"),
            confirm_password: String::from("Str0ng!Pass2"),
        };

        assert!(body.validate().is_err());
    }

    #[test]
    fn reset_password_accepts_valid_body() {
        let body = ResetPassword {
            contact: String::from("9876543210"),
            code: String::from("123456"),
            password: String::from("Str0ng!Pass"),
            confirm_password: String::from("Str0ng!Pass"),
        };

        assert!(body.validate().is_ok());
    }
}
