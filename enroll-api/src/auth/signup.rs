use enroll_lib::contact::Contact;
use enroll_lib::roles::{Role, Purpose};

use serde::{Serialize, Deserialize};

use crate::{Validator, ApiError, ApiErrorKind, Detail};
use crate::error::GeneralKind;

#[derive(Debug, Serialize, Deserialize)]
pub struct CheckContact {
    pub contact: String
}

impl Validator for CheckContact {
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

#[derive(Debug, Serialize, Deserialize)]
pub struct ContactExists {
    pub contact: String,
    pub exists: bool
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RequestCode {
    pub contact: String,
    pub user_type: Role,
    pub purpose: Purpose,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
}

impl Validator for RequestCode {
    fn validate(&self) -> Result<(), ApiError> {
        let mut invalid = Vec::new();

        if Contact::parse(&self.contact).is_none() {
            invalid.push("contact");
        }

        if let Some(first_name) = &self.first_name {
            if !enroll_lib::names::name_part_valid(first_name) {
                invalid.push("first_name");
            }
        }

        if let Some(last_name) = &self.last_name {
            if !enroll_lib::names::name_part_valid(last_name) {
                invalid.push("last_name");
            }
        }

        if !invalid.is_empty() {
            Err(ApiError::from((
                ApiErrorKind::General(GeneralKind::ValidationFailed),
                Detail::mult_keys(invalid)
            )))
        } else {
            Ok(())
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct VerifyCode {
    pub contact: String,
    pub code: String,
    pub purpose: Purpose,
}

impl Validator for VerifyCode {
    fn validate(&self) -> Result<(), ApiError> {
        if !enroll_lib::otp::code_valid(&self.code) {
            Err(ApiError::from((
                ApiErrorKind::General(GeneralKind::ValidationFailed),
                Detail::with_key("code")
            )))
        } else {
            Ok(())
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ResendCode {
    pub contact: String,
    pub purpose: Purpose,
}

impl Validator for ResendCode {
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

#[derive(Debug, Serialize, Deserialize)]
pub struct SetCredential {
    pub contact: String,
    pub password: String,
    pub confirm_password: String,
}

impl Validator for SetCredential {
    fn validate(&self) -> Result<(), ApiError> {
        if !enroll_lib::sec::authn::password_valid(&self.password) {
            return Err(ApiError::from((
                ApiErrorKind::General(GeneralKind::ValidationFailed),
                Detail::with_key("password")
            )));
        }

        if self.password != self.confirm_password {
            return Err(ApiError::from((
                ApiErrorKind::Auth(crate::error::AuthKind::PasswordMismatch),
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
    fn verify_code_rejects_short_codes() {
        let body = VerifyCode {
            contact: String::from("9876543210"),
            code: String::from("1234"),
            purpose: Purpose::SignupHost,
        };

        assert!(body.validate().is_err());
    }

    #[test]
    fn resend_code_rejects_malformed_contact() {
        let body = ResendCode {
            contact: String::from("12345"),
            purpose: Purpose::SignupHost,
        };

        assert!(body.validate().is_err());

        let body = ResendCode {
            contact: String::from("9876543210"),
            purpose: Purpose::SignupHost,
        };

        assert!(body.validate().is_ok());
    }

    #[test]
    fn set_credential_rejects_mismatch() {
        let body = SetCredential {
            contact: String::from("9876543210"),
            password: String::from("Str0ng!Pass"),
            confirm_password: String::from("Str0ng!Pass2"),
        };

        assert!(body.validate().is_err());
    }

    #[test]
    fn request_code_wire_form() {
        let body = RequestCode {
            contact: String::from("asha@example.com"),
            user_type: Role::Host,
            purpose: Purpose::SignupHost,
            first_name: Some(String::from("Asha")),
            last_name: None,
        };

        let json = serde_json::to_value(&body).unwrap();

        assert_eq!(json["user_type"], "host");
        assert_eq!(json["purpose"], "signup_host");
        assert!(json.get("last_name").is_none());
    }
}
