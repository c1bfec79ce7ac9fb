use std::time::Duration;

use reqwest::Url;
use reqwest::blocking::RequestBuilder;

pub mod error;
pub mod auth;

use error::ApiClientError;

/// requests that never resolve would otherwise leave a driver stuck in its
/// in-flight state, so every client carries a timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

pub struct Info {
    pub url: Url
}

pub struct ApiClient {
    pub(crate) client: reqwest::blocking::Client,
    pub(crate) info: Info
}

impl ApiClient {
    pub fn builder() -> ApiClientBuilder {
        ApiClientBuilder {
            url: Url::parse("http://localhost/").unwrap(),
            timeout: DEFAULT_TIMEOUT,
            agent: None
        }
    }

    pub(crate) fn post<U>(&self, path: U) -> RequestBuilder
    where
        U: AsRef<str>
    {
        let url = self.info.url.join(path.as_ref()).unwrap();

        self.client.post(url)
    }
}

pub struct ApiClientBuilder {
    url: Url,
    timeout: Duration,
    agent: Option<String>
}

impl ApiClientBuilder {
    pub fn secure(&mut self, is_secure: bool) {
        if is_secure {
            self.url.set_scheme("https").unwrap();
        } else {
            self.url.set_scheme("http").unwrap();
        }
    }

    pub fn host<H>(&mut self, host: H) -> bool
    where
        H: AsRef<str>
    {
        self.url.set_host(Some(host.as_ref())).is_ok()
    }

    pub fn port(&mut self, port: Option<u16>) {
        self.url.set_port(port).unwrap()
    }

    pub fn timeout(&mut self, timeout: Duration) {
        self.timeout = timeout;
    }

    pub fn user_agent<U>(&mut self, user_agent: U)
    where
        U: Into<String>
    {
        self.agent = Some(user_agent.into());
    }

    pub fn build(self) -> Result<ApiClient, ApiClientError> {
        let user_agent = self.agent.unwrap_or("enroll-api-client/0.1.0".into());
        let client = reqwest::blocking::Client::builder()
            .user_agent(user_agent)
            .timeout(self.timeout)
            .build()
            .map_err(|e| ApiClientError::Reqwest(e))?;

        Ok(ApiClient {
            client,
            info: Info {
                url: self.url
            }
        })
    }
}
