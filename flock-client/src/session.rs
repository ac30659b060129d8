//! Session context
//!
//! Explicit, injectable session state: `login` yields a [`Session`], all
//! authenticated calls go through `client()`, `logout`/`invalidate` tear
//! the session down. Nothing here is process-global; components that need
//! the session receive the context.

use shared::models::{AccessRights, Member};
use tracing::info;

use crate::{ClientConfig, ClientError, ClientResult, HttpClient};

/// An authenticated session: the bearer token, the logged-in user, and the
/// role's navigation rights (fetched once, then served from memory).
#[derive(Debug, Clone)]
pub struct Session {
    token: String,
    user: Member,
    rights: Option<AccessRights>,
}

impl Session {
    /// The bearer token carried by every authenticated call.
    pub fn token(&self) -> &str {
        &self.token
    }

    /// The logged-in user's directory record.
    pub fn user(&self) -> &Member {
        &self.user
    }

    /// Cached navigation rights, if already fetched.
    pub fn rights(&self) -> Option<&AccessRights> {
        self.rights.as_ref()
    }
}

/// Holds at most one live session and the HTTP clients bound to it.
#[derive(Debug)]
pub struct SessionContext {
    client: HttpClient,
    authed: Option<HttpClient>,
    current: Option<Session>,
}

impl SessionContext {
    /// Create a context with no live session.
    pub fn new(config: ClientConfig) -> Self {
        Self {
            client: HttpClient::new(&config),
            authed: None,
            current: None,
        }
    }

    /// Authenticate and establish a session. Replaces any previous session.
    pub async fn login(&mut self, username: &str, password: &str) -> ClientResult<&Session> {
        let response = self.client.login(username, password).await?;
        info!(user = %response.user.display_name(), "logged in");

        self.authed = Some(self.client.clone().with_token(response.token.clone()));
        let session = Session {
            token: response.token,
            user: response.user,
            rights: None,
        };
        Ok(self.current.insert(session))
    }

    /// Drop the session and invalidate the token server-side. The local
    /// teardown happens first: even if the server call fails, no
    /// component can keep using the session, and the error is still
    /// surfaced to the caller.
    pub async fn logout(&mut self) -> ClientResult<()> {
        let client = self.authed.take();
        self.current = None;
        if let Some(client) = client {
            client.logout().await?;
            info!("logged out");
        }
        Ok(())
    }

    /// Drop the session locally without a server call. Used after an
    /// authentication failure, before routing the user to login.
    pub fn invalidate(&mut self) {
        self.authed = None;
        self.current = None;
    }

    /// The current session, if logged in.
    pub fn current(&self) -> Option<&Session> {
        self.current.as_ref()
    }

    /// Token-bearing client for authenticated calls.
    pub fn client(&self) -> Option<&HttpClient> {
        self.authed.as_ref()
    }

    /// Navigation rights for the logged-in user's role, fetched on first
    /// use and cached for the life of the session.
    pub async fn rights(&mut self) -> ClientResult<&AccessRights> {
        let (client, session) = match (&self.authed, &mut self.current) {
            (Some(client), Some(session)) => (client, session),
            _ => return Err(ClientError::Unauthorized),
        };

        match &mut session.rights {
            Some(rights) => Ok(rights),
            slot @ None => {
                let rights = client.access_rights(session.user.user_type).await?;
                Ok(slot.insert(rights))
            }
        }
    }
}
