use enroll_lib::roles::{Role, Purpose};

use crate::client::error::RequestError;
use crate::client::ApiClient;
use crate::{Validator, Payload};
use crate::auth::signup::{
    CheckContact as CheckContactBody,
    ContactExists,
    RequestCode as RequestCodeBody,
    VerifyCode as VerifyCodeBody,
    ResendCode as ResendCodeBody,
    SetCredential as SetCredentialBody,
};
use crate::auth::session::CreatedSession;

pub struct CheckContact {
    body: CheckContactBody
}

impl CheckContact {
    pub fn contact<C>(contact: C) -> Self
    where
        C: Into<String>
    {
        CheckContact {
            body: CheckContactBody {
                contact: contact.into()
            }
        }
    }

    pub fn send(self, client: &ApiClient) -> Result<Payload<ContactExists>, RequestError> {
        self.body.validate()?;

        let res = client.post("/api/auth/contact/exists")
            .json(&self.body)
            .send()?;

        match res.status() {
            reqwest::StatusCode::OK => Ok(res.json()?),
            _ => Err(RequestError::Api(res.json()?)),
        }
    }
}

pub struct RequestCode {
    body: RequestCodeBody
}

impl RequestCode {
    pub fn contact<C>(contact: C, role: Role) -> Self
    where
        C: Into<String>
    {
        RequestCode {
            body: RequestCodeBody {
                contact: contact.into(),
                user_type: role,
                purpose: role.purpose(),
                first_name: None,
                last_name: None,
            }
        }
    }

    pub fn first_name<N>(&mut self, first_name: N) -> &mut Self
    where
        N: Into<String>
    {
        self.body.first_name = Some(first_name.into());
        self
    }

    pub fn last_name<N>(&mut self, last_name: N) -> &mut Self
    where
        N: Into<String>
    {
        self.body.last_name = Some(last_name.into());
        self
    }

    pub fn send(self, client: &ApiClient) -> Result<(), RequestError> {
        self.body.validate()?;

        let res = client.post("/api/auth/signup/request")
            .json(&self.body)
            .send()?;

        match res.status() {
            reqwest::StatusCode::NO_CONTENT => Ok(()),
            _ => Err(RequestError::Api(res.json()?)),
        }
    }
}

pub struct VerifyCode {
    body: VerifyCodeBody
}

impl VerifyCode {
    pub fn code<C, O>(contact: C, code: O, purpose: Purpose) -> Self
    where
        C: Into<String>,
        O: Into<String>
    {
        VerifyCode {
            body: VerifyCodeBody {
                contact: contact.into(),
                code: code.into(),
                purpose,
            }
        }
    }

    pub fn send(self, client: &ApiClient) -> Result<(), RequestError> {
        self.body.validate()?;

        let res = client.post("/api/auth/signup/verify")
            .json(&self.body)
            .send()?;

        match res.status() {
            reqwest::StatusCode::NO_CONTENT => Ok(()),
            _ => Err(RequestError::Api(res.json()?)),
        }
    }
}

pub struct ResendCode {
    body: ResendCodeBody
}

impl ResendCode {
    pub fn contact<C>(contact: C, purpose: Purpose) -> Self
    where
        C: Into<String>
    {
        ResendCode {
            body: ResendCodeBody {
                contact: contact.into(),
                purpose,
            }
        }
    }

    pub fn send(self, client: &ApiClient) -> Result<(), RequestError> {
        self.body.validate()?;

        let res = client.post("/api/auth/signup/resend")
            .json(&self.body)
            .send()?;

        match res.status() {
            reqwest::StatusCode::NO_CONTENT => Ok(()),
            _ => Err(RequestError::Api(res.json()?)),
        }
    }
}

pub struct SetCredential {
    body: SetCredentialBody
}

impl SetCredential {
    pub fn contact<C, P>(contact: C, password: P, confirm_password: P) -> Self
    where
        C: Into<String>,
        P: Into<String>
    {
        SetCredential {
            body: SetCredentialBody {
                contact: contact.into(),
                password: password.into(),
                confirm_password: confirm_password.into(),
            }
        }
    }

    pub fn send(self, client: &ApiClient) -> Result<Payload<CreatedSession>, RequestError> {
        self.body.validate()?;

        let res = client.post("/api/auth/signup/password")
            .json(&self.body)
            .send()?;

        match res.status() {
            reqwest::StatusCode::CREATED => Ok(res.json()?),
            _ => Err(RequestError::Api(res.json()?)),
        }
    }
}
