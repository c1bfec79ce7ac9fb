use crate::client::error::RequestError;
use crate::client::ApiClient;
use crate::Validator;
use crate::auth::password::{
    ForgotPassword as ForgotPasswordBody,
    ResetPassword as ResetPasswordBody,
};

pub struct ForgotPassword {
    body: ForgotPasswordBody
}

impl ForgotPassword {
    pub fn contact<C>(contact: C) -> Self
    where
        C: Into<String>
    {
        ForgotPassword {
            body: ForgotPasswordBody {
                contact: contact.into()
            }
        }
    }

    pub fn send(self, client: &ApiClient) -> Result<(), RequestError> {
        self.body.validate()?;

        let res = client.post("/api/auth/password/forgot")
            .json(&self.body)
            .send()?;

        match res.status() {
            reqwest::StatusCode::NO_CONTENT => Ok(()),
            _ => Err(RequestError::Api(res.json()?)),
        }
    }
}

pub struct ResetPassword {
    body: ResetPasswordBody
}

impl ResetPassword {
    pub fn contact<C, O, P>(contact: C, code: O, password: P, confirm_password: P) -> Self
    where
        C: Into<String>,
        O: Into<String>,
        P: Into<String>
    {
        ResetPassword {
            body: ResetPasswordBody {
                contact: contact.into(),
                code: code.into(),
                password: password.into(),
                confirm_password: confirm_password.into(),
            }
        }
    }

    pub fn send(self, client: &ApiClient) -> Result<(), RequestError> {
        self.body.validate()?;

        let res = client.post("/api/auth/password/reset")
            .json(&self.body)
            .send()?;

        match res.status() {
            reqwest::StatusCode::NO_CONTENT => Ok(()),
            _ => Err(RequestError::Api(res.json()?)),
        }
    }
}
