use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::Method;
use serde_json::{json, Value};

use crate::client::remote::RemoteApi;
use crate::client::reply::{Invitation, Reply};
use crate::constants::{
    HONEYBADGER_API_URL, STATUS_CREATED, STATUS_NO_CONTENT, STATUS_OK, STATUS_UNPROCESSABLE,
    TEAMS_PATH,
};
use crate::error::ProvisionResult;
use crate::logging::log_debug;
use crate::models::{MemberId, TeamId, TeamRecord, TeamsPage};

/// Status and body of an HTTP exchange that completed.
struct RawReply {
    status: u16,
    body: String,
}

pub struct HoneybadgerClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl HoneybadgerClient {
    pub fn new(api_key: String) -> ProvisionResult<Self> {
        Self::with_base_url(api_key, HONEYBADGER_API_URL)
    }

    pub fn with_base_url(api_key: String, base_url: &str) -> ProvisionResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn send(&self, method: Method, path: &str, body: Option<Value>) -> Result<RawReply, String> {
        log_debug(&format!("{} {}", method, path));

        // API key as username, empty password
        let mut request = self
            .client
            .request(method, format!("{}{}", self.base_url, path))
            .basic_auth(&self.api_key, Some(""));

        if let Some(body) = body {
            request = request.json(&body);
        }

        let response = request.send().await.map_err(|e| e.to_string())?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| e.to_string())?;

        log_debug(&format!("{} -> {}", path, status));

        Ok(RawReply { status, body })
    }

    fn expect_status(raw: Result<RawReply, String>, success: u16) -> Reply<()> {
        match raw {
            Ok(raw) if raw.status == success => Reply::Ok(()),
            Ok(raw) => Reply::UnexpectedStatus {
                status: raw.status,
                body: raw.body,
            },
            Err(cause) => Reply::TransportFailure(cause),
        }
    }

    fn team_path(team: &TeamId) -> String {
        format!("{}/{}", TEAMS_PATH, team)
    }

    fn member_path(team: &TeamId, member: &MemberId) -> String {
        format!("{}/{}/team_members/{}", TEAMS_PATH, team, member)
    }
}

#[async_trait]
impl RemoteApi for HoneybadgerClient {
    async fn list_teams(&self) -> Reply<Vec<TeamRecord>> {
        match self.send(Method::GET, TEAMS_PATH, None).await {
            Ok(raw) if raw.status == STATUS_OK => match serde_json::from_str::<TeamsPage>(&raw.body) {
                Ok(page) => Reply::Ok(page.results),
                Err(e) => Reply::TransportFailure(format!("invalid teams payload: {}", e)),
            },
            Ok(raw) => Reply::UnexpectedStatus {
                status: raw.status,
                body: raw.body,
            },
            Err(cause) => Reply::TransportFailure(cause),
        }
    }

    async fn create_team(&self, name: &str) -> Reply<()> {
        let body = json!({
            "team": { "name": name }
        });
        let raw = self.send(Method::POST, TEAMS_PATH, Some(body)).await;
        Self::expect_status(raw, STATUS_CREATED)
    }

    async fn delete_team(&self, team: &TeamId) -> Reply<()> {
        let raw = self.send(Method::DELETE, &Self::team_path(team), None).await;
        Self::expect_status(raw, STATUS_NO_CONTENT)
    }

    async fn invite_member(&self, team: &TeamId, email: &str, admin: bool) -> Reply<Invitation> {
        // the invitations endpoint takes the admin flag as a string
        let body = json!({
            "team_invitation": {
                "email": email,
                "admin": if admin { "true" } else { "false" }
            }
        });
        let path = format!("{}/team_invitations", Self::team_path(team));

        match self.send(Method::POST, &path, Some(body)).await {
            Ok(raw) if raw.status == STATUS_CREATED => Reply::Ok(Invitation::Sent),
            Ok(raw) if raw.status == STATUS_UNPROCESSABLE => Reply::Ok(Invitation::AlreadyInvited),
            Ok(raw) => Reply::UnexpectedStatus {
                status: raw.status,
                body: raw.body,
            },
            Err(cause) => Reply::TransportFailure(cause),
        }
    }

    async fn update_member_role(&self, team: &TeamId, member: &MemberId, admin: bool) -> Reply<()> {
        let body = json!({
            "team_member": { "admin": admin }
        });
        let raw = self
            .send(Method::PUT, &Self::member_path(team, member), Some(body))
            .await;
        Self::expect_status(raw, STATUS_NO_CONTENT)
    }

    async fn delete_member(&self, team: &TeamId, member: &MemberId) -> Reply<()> {
        let raw = self
            .send(Method::DELETE, &Self::member_path(team, member), None)
            .await;
        Self::expect_status(raw, STATUS_NO_CONTENT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_paths() {
        let team = TeamId::new("7");
        let member = MemberId::new("31");

        assert_eq!(HoneybadgerClient::team_path(&team), "/v2/teams/7");
        assert_eq!(
            HoneybadgerClient::member_path(&team, &member),
            "/v2/teams/7/team_members/31"
        );
    }

    #[test]
    fn trims_trailing_slash() {
        let client = HoneybadgerClient::with_base_url("k".into(), "http://localhost:9/").unwrap();
        assert_eq!(client.base_url(), "http://localhost:9");
    }

    #[test]
    fn status_mapping() {
        let ok = HoneybadgerClient::expect_status(Ok(RawReply { status: 204, body: String::new() }), 204);
        assert_eq!(ok, Reply::Ok(()));

        let other = HoneybadgerClient::expect_status(
            Ok(RawReply { status: 200, body: "{}".into() }),
            204,
        );
        assert_eq!(
            other,
            Reply::UnexpectedStatus { status: 200, body: "{}".into() }
        );

        let down = HoneybadgerClient::expect_status(Err("refused".into()), 204);
        assert_eq!(down, Reply::TransportFailure("refused".into()));
    }
}
