//! User operations.

use tracing::instrument;

use crate::api::client::Client;
use crate::api::error::Result;
use crate::api::query::Filter;
use crate::api::types::{User, UserEnvelope, UsersPage};

/// Account status used to filter the user list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserStatus {
    /// No status restriction.
    All,
    Active,
    Registered,
    Locked,
}

impl UserStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            UserStatus::All => "",
            UserStatus::Active => "1",
            UserStatus::Registered => "2",
            UserStatus::Locked => "3",
        }
    }
}

/// Filter for [`Client::users_with_filter`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UsersFilter {
    filter: Filter,
}

impl UsersFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(mut self, status: UserStatus) -> Self {
        self.filter.add_pair("status", status.as_str());
        self
    }

    /// Match login, first name, last name or mail.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.filter.add_pair("name", name);
        self
    }

    pub fn group_id(mut self, group_id: u32) -> Self {
        self.filter.add_pair("group_id", group_id.to_string());
        self
    }

    pub fn to_params(&self) -> Vec<(String, String)> {
        self.filter.to_params()
    }
}

/// Associated data that can be loaded with a single user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserInclude {
    Memberships,
    Groups,
}

impl UserInclude {
    pub fn as_str(self) -> &'static str {
        match self {
            UserInclude::Memberships => "memberships",
            UserInclude::Groups => "groups",
        }
    }
}

/// Filter for [`Client::user_with_filter`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserByIdFilter {
    includes: Vec<UserInclude>,
}

impl UserByIdFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn include(mut self, include: UserInclude) -> Self {
        if !self.includes.contains(&include) {
            self.includes.push(include);
        }
        self
    }

    pub fn to_params(&self) -> Vec<(String, String)> {
        if self.includes.is_empty() {
            return Vec::new();
        }
        let value = self
            .includes
            .iter()
            .map(|i| i.as_str())
            .collect::<Vec<_>>()
            .join(",");
        vec![("include".to_string(), value)]
    }
}

impl Client {
    /// Active users. Requires administrator privileges.
    #[instrument(skip(self))]
    pub fn users(&self) -> Result<Vec<User>> {
        self.drain::<UsersPage>("/users.json", &[], "users")
    }

    #[instrument(skip(self))]
    pub fn users_with_filter(&self, filter: &UsersFilter) -> Result<Vec<User>> {
        self.drain::<UsersPage>("/users.json", &filter.to_params(), "users")
    }

    #[instrument(skip(self))]
    pub fn user(&self, id: u32) -> Result<User> {
        self.user_with_filter(id, &UserByIdFilter::new())
    }

    #[instrument(skip(self))]
    pub fn user_with_filter(&self, id: u32, filter: &UserByIdFilter) -> Result<User> {
        let envelope: UserEnvelope<User> = self.get(
            &format!("/users/{}.json", id),
            &filter.to_params(),
            &format!("user {}", id),
        )?;
        Ok(envelope.user)
    }

    /// The user the client is authenticated as.
    #[instrument(skip(self))]
    pub fn current_user(&self) -> Result<User> {
        let envelope: UserEnvelope<User> = self.get("/users/current.json", &[], "current user")?;
        Ok(envelope.user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::client::ClientBuilder;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client(uri: &str) -> Client {
        ClientBuilder::new()
            .endpoint(uri)
            .auth_basic_with_token("admin", "tok")
            .build()
            .unwrap()
    }

    #[test]
    fn test_users_filter_params() {
        let filter = UsersFilter::new()
            .status(UserStatus::Locked)
            .name("jo")
            .group_id(7);
        assert_eq!(
            filter.to_params(),
            vec![
                ("group_id".to_string(), "7".to_string()),
                ("name".to_string(), "jo".to_string()),
                ("status".to_string(), "3".to_string()),
            ]
        );
    }

    #[test]
    fn test_user_by_id_filter_deduplicates() {
        let filter = UserByIdFilter::new()
            .include(UserInclude::Memberships)
            .include(UserInclude::Groups)
            .include(UserInclude::Memberships);
        assert_eq!(
            filter.to_params(),
            vec![("include".to_string(), "memberships,groups".to_string())]
        );
        assert!(UserByIdFilter::new().to_params().is_empty());
    }

    #[tokio::test]
    async fn test_current_user() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users/current.json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "user": {"id": 1, "login": "admin", "firstname": "Redmine", "lastname": "Admin",
                         "mail": "admin@example.net", "last_login_on": null}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let uri = server.uri();
        let user = tokio::task::spawn_blocking(move || client(&uri).current_user())
            .await
            .unwrap()
            .unwrap();

        assert_eq!(user.login, "admin");
        assert_eq!(user.full_name(), "Redmine Admin");
        assert_eq!(user.last_login_on, None);
    }

    #[tokio::test]
    async fn test_user_with_memberships() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users/3.json"))
            .and(query_param("include", "memberships"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "user": {"id": 3, "login": "jdoe", "memberships": [
                    {"id": 1, "project": {"id": 1, "name": "p"}, "roles": [{"id": 4, "name": "Developer"}]}
                ]}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let uri = server.uri();
        let user = tokio::task::spawn_blocking(move || {
            client(&uri).user_with_filter(3, &UserByIdFilter::new().include(UserInclude::Memberships))
        })
        .await
        .unwrap()
        .unwrap();

        assert_eq!(user.memberships.len(), 1);
        assert_eq!(user.memberships[0].project.name, "p");
    }
}
