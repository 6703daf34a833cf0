use std::fmt;
use serde::{Deserialize, Deserializer, Serialize};

/// The service hands out numeric ids; older payloads quote them.
fn opaque_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Number(u64),
        Text(String),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Number(n) => n.to_string(),
        RawId::Text(s) => s,
    })
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TeamId(#[serde(deserialize_with = "opaque_id")] String);

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MemberId(#[serde(deserialize_with = "opaque_id")] String);

impl TeamId {
    pub fn new(id: impl Into<String>) -> Self {
        TeamId(id.into())
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl MemberId {
    pub fn new(id: impl Into<String>) -> Self {
        MemberId(id.into())
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct MemberRecord {
    pub id: MemberId,
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub admin: bool,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct TeamRecord {
    pub id: TeamId,
    pub name: String,
    #[serde(default)]
    pub members: Vec<MemberRecord>,
}

impl TeamRecord {
    pub fn admin_count(&self) -> usize {
        self.members.iter().filter(|m| m.admin).count()
    }
}

/// Envelope of `GET /v2/teams`.
#[derive(Debug, Deserialize)]
pub struct TeamsPage {
    pub results: Vec<TeamRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_numeric_and_string_ids() {
        let page: TeamsPage = serde_json::from_value(json!({
            "results": [
                {
                    "id": 7,
                    "name": "alpha",
                    "created_at": "2021-01-01T00:00:00Z",
                    "members": [
                        { "id": "31", "email": "a@b.com", "name": "A", "admin": true }
                    ]
                },
                { "id": "8", "name": "beta" }
            ]
        }))
        .unwrap();

        assert_eq!(page.results[0].id, TeamId::new("7"));
        assert_eq!(page.results[0].members[0].id.as_str(), "31");
        assert!(page.results[0].members[0].admin);
        assert_eq!(page.results[1].id.as_str(), "8");
        assert!(page.results[1].members.is_empty());
    }

    #[test]
    fn counts_admins() {
        let team: TeamRecord = serde_json::from_value(json!({
            "id": 1,
            "name": "ops",
            "members": [
                { "id": 1, "email": "x@y.z", "admin": true },
                { "id": 2, "email": "u@v.w" }
            ]
        }))
        .unwrap();

        assert_eq!(team.admin_count(), 1);
        assert!(!team.members[1].admin);
    }
}
