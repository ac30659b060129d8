//! Typed endpoint methods
//!
//! One method per remote operation. All paths are relative to the base
//! URL; auth-requiring endpoints expect the client to carry a token.

use shared::models::{
    AccessRights, AttendanceUpdate, Category, Event, EventCreate, EventUpdate, Member,
    MemberCreate, MemberUpdate, UserType,
};
use shared::request::{LoginRequest, RegisterRequest};
use shared::response::{Envelope, EventReport, LoginResponse, Paginated, RosterPage};
use tracing::debug;

use crate::http::HttpClient;
use crate::{ClientError, ClientResult};

impl HttpClient {
    // ========== Auth API ==========

    /// Login with username and password.
    pub async fn login(&self, username: &str, password: &str) -> ClientResult<LoginResponse> {
        let request = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        self.post("user/login", &request).await
    }

    /// Register a new member account.
    pub async fn register(&self, request: &RegisterRequest) -> ClientResult<Member> {
        let resp: Envelope<Member> = self.post("user/register", request).await?;
        Ok(resp.data)
    }

    /// Logout, invalidating the token server-side.
    pub async fn logout(&self) -> ClientResult<()> {
        self.post_empty("user/logout").await
    }

    // ========== Directory API ==========

    /// Fetch one roster page for a category and search term.
    ///
    /// With an event id, each row carries the `isMarked` flag for that
    /// event; without one, the endpoint is a plain directory listing.
    pub async fn filter_by_type(
        &self,
        event_id: Option<i64>,
        category: Category,
        page: u32,
        search: &str,
    ) -> ClientResult<RosterPage> {
        let path = match event_id {
            Some(id) => format!("user/filterByType/{id}"),
            None => "user/filterByType".to_string(),
        };
        let mut query = vec![
            ("filter_type", category.as_str().to_string()),
            ("page", page.to_string()),
        ];
        if !search.is_empty() {
            query.push(("search", search.to_string()));
        }
        debug!(category = category.as_str(), page, search, "fetching roster page");
        self.get_query(&path, &query).await
    }

    /// Fetch a single member record.
    pub async fn member(&self, id: i64) -> ClientResult<Member> {
        let resp: Envelope<Member> = self.get(&format!("user/view/{id}")).await?;
        Ok(resp.data)
    }

    /// Add a member to the directory.
    pub async fn add_member(&self, create: &MemberCreate) -> ClientResult<Member> {
        let resp: Envelope<Member> = self.post("user/add", create).await?;
        Ok(resp.data)
    }

    /// Update a member record. `None` fields are left untouched.
    pub async fn update_member(&self, id: i64, update: &MemberUpdate) -> ClientResult<Member> {
        let resp: Envelope<Member> = self.post(&format!("user/update/{id}"), update).await?;
        Ok(resp.data)
    }

    /// Delete a member. Soft versus hard delete is server-defined.
    pub async fn delete_member(&self, id: i64) -> ClientResult<()> {
        self.delete_unit(&format!("user/delete/{id}")).await
    }

    // ========== Event API ==========

    /// Fetch a single event record.
    pub async fn view_event(&self, id: i64) -> ClientResult<Event> {
        let resp: Envelope<Event> = self.get(&format!("event/view/{id}")).await?;
        Ok(resp.data)
    }

    /// List events, newest first.
    pub async fn list_events(&self, page: u32) -> ClientResult<Paginated<Event>> {
        self.get_query("event/list", &[("page", page.to_string())])
            .await
    }

    /// Create an event.
    pub async fn create_event(&self, create: &EventCreate) -> ClientResult<Event> {
        let resp: Envelope<Event> = self.post("event/add", create).await?;
        Ok(resp.data)
    }

    /// Update an event record.
    pub async fn update_event(&self, id: i64, update: &EventUpdate) -> ClientResult<Event> {
        let resp: Envelope<Event> = self.post(&format!("event/update/{id}"), update).await?;
        Ok(resp.data)
    }

    /// Delete an event.
    pub async fn delete_event(&self, id: i64) -> ClientResult<()> {
        self.delete_unit(&format!("event/delete/{id}")).await
    }

    /// Toggle attendance marks for the listed members of an event.
    pub async fn update_attendance(
        &self,
        event_id: i64,
        update: &AttendanceUpdate,
    ) -> ClientResult<()> {
        if update.users.is_empty() {
            return Err(ClientError::InvalidState(
                "attendance update with no member ids".into(),
            ));
        }
        self.post_unit(&format!("event/updateAttendance/{event_id}"), update)
            .await
    }

    // ========== Settings API ==========

    /// Fetch the navigation rights for a role.
    pub async fn access_rights(&self, user_type: UserType) -> ClientResult<AccessRights> {
        let resp: Envelope<AccessRights> = self
            .get(&format!("settings/rights/{}", user_type.as_str()))
            .await?;
        Ok(resp.data)
    }

    /// Update the navigation rights for a role.
    pub async fn update_access_rights(&self, rights: &AccessRights) -> ClientResult<()> {
        self.post_unit("settings/rights", rights).await
    }

    // ========== Report API ==========

    /// Fetch the attendance report for an event.
    pub async fn event_report(&self, event_id: i64) -> ClientResult<EventReport> {
        let resp: Envelope<EventReport> = self.get(&format!("report/event/{event_id}")).await?;
        Ok(resp.data)
    }
}
