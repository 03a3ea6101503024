pub mod course;
pub mod lesson;
pub mod users;

use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use ureq::{Agent, AgentBuilder};

pub type Result<T, E = Error> = std::result::Result<T, E>;

pub const SEVENEDU_BASE: &str = "https://sevenedu.store/";

/// A client for the SevenEdu admin API.
///
/// Staff tokens are issued out of band; this client never logs in or
/// refreshes anything, it just sends the token it was given as a bearer
/// header on every request.
pub struct Client {
    token: ApiToken,
    base: String,
    http: Agent,
}

#[derive(Error, Debug)]
pub enum Error {
    /// The backend rejected the request and sent back an error payload.
    #[error("api error ({}): {}", .status, .message)]
    Api { status: u16, message: String },

    #[error("http error: {}", .0)]
    HTTPError(#[from] Box<ureq::Error>),

    #[error("io error: {}", .0)]
    IOError(#[from] std::io::Error),

    #[error("serde error: {}", .0)]
    SerdeError(#[from] serde_json::Error),
}

impl Client {
    pub fn new(token: ApiToken) -> Self {
        Self::with_base(token, SEVENEDU_BASE)
    }

    /// Point the client somewhere other than production (staging, mocks).
    pub fn with_base(token: ApiToken, base: impl Into<String>) -> Self {
        let http = AgentBuilder::new().redirects(10).build();

        Client {
            token,
            base: base.into(),
            http,
        }
    }

    fn bearer(&self) -> String {
        format!("Bearer {}", self.token.as_ref())
    }

    pub(crate) fn get<T: for<'a> Deserialize<'a>>(&self, path: &str) -> Result<T, Error> {
        let resp = self
            .http
            .get(&format!("{}{}", self.base, path))
            .set("Authorization", &self.bearer())
            .call()
            .map_err(to_api_error)?;
        if log::log_enabled!(log::Level::Debug) {
            let s = resp.into_string()?;
            debug!("response: {}", s);
            Ok(serde_json::from_str(&s)?)
        } else {
            Ok(resp.into_json()?)
        }
    }

    pub(crate) fn post_json<B: Serialize>(&self, path: &str, body: &B) -> Result<(), Error> {
        self.http
            .post(&format!("{}{}", self.base, path))
            .set("Authorization", &self.bearer())
            .send_json(body)
            .map_err(to_api_error)?;
        Ok(())
    }

    pub(crate) fn patch_json<B: Serialize>(&self, path: &str, body: &B) -> Result<(), Error> {
        self.http
            .request("PATCH", &format!("{}{}", self.base, path))
            .set("Authorization", &self.bearer())
            .send_json(body)
            .map_err(to_api_error)?;
        Ok(())
    }

    pub(crate) fn patch_empty(&self, path: &str) -> Result<(), Error> {
        self.http
            .request("PATCH", &format!("{}{}", self.base, path))
            .set("Authorization", &self.bearer())
            .call()
            .map_err(to_api_error)?;
        Ok(())
    }

    pub(crate) fn delete(&self, path: &str) -> Result<(), Error> {
        self.http
            .delete(&format!("{}{}", self.base, path))
            .set("Authorization", &self.bearer())
            .call()
            .map_err(to_api_error)?;
        Ok(())
    }
}

/// Shape of the backend's error bodies.
#[derive(Deserialize)]
struct ApiMessage {
    #[serde(default)]
    message: String,
}

fn to_api_error(e: ureq::Error) -> Error {
    match e {
        ureq::Error::Status(status, resp) => {
            let message = resp
                .into_json::<ApiMessage>()
                .map(|m| m.message)
                .unwrap_or_default();
            Error::Api { status, message }
        }
        other => Error::HTTPError(Box::new(other)),
    }
}

/// A staff API token, wrapped so we don't print it by accident
#[derive(Clone, Serialize, Deserialize)]
pub struct ApiToken(String);

impl std::fmt::Debug for ApiToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ApiToken (******)")
    }
}

impl From<String> for ApiToken {
    fn from(value: String) -> Self {
        ApiToken(value)
    }
}

impl From<ApiToken> for String {
    fn from(val: ApiToken) -> Self {
        val.0
    }
}

impl AsRef<str> for ApiToken {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}
