use crate::client::error::RequestError;
use crate::client::ApiClient;
use crate::Payload;
use crate::auth::session::{
    CreateSession as CreateSessionBody,
    CreatedSession,
};

pub struct CreateSession {
    body: CreateSessionBody
}

impl CreateSession {
    pub fn contact<C, P>(contact: C, password: P) -> Self
    where
        C: Into<String>,
        P: Into<String>
    {
        CreateSession {
            body: CreateSessionBody {
                contact: contact.into(),
                password: password.into(),
            }
        }
    }

    pub fn send(self, client: &ApiClient) -> Result<Payload<CreatedSession>, RequestError> {
        let res = client.post("/api/auth/session")
            .json(&self.body)
            .send()?;

        match res.status() {
            reqwest::StatusCode::OK => Ok(res.json()?),
            _ => Err(RequestError::Api(res.json()?)),
        }
    }
}
