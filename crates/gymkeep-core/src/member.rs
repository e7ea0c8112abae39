use serde::{Deserialize, Serialize};

use crate::record::{EntityKind, Record};

/// A gym member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub id: String,
    pub name: String,
    pub email: String,
    pub join_date: String,
    pub membership_type: String,
    pub created_at: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<u64>,
}

impl Member {
    /// Build a fresh member from a validated payload.
    pub fn from_payload(id: String, now: u64, payload: MemberPayload) -> Self {
        Self {
            id,
            name: payload.name,
            email: payload.email,
            join_date: payload.join_date,
            membership_type: payload.membership_type,
            created_at: now,
            updated_at: None,
        }
    }
}

impl Record for Member {
    const KIND: EntityKind = EntityKind::Member;

    fn id(&self) -> &str {
        &self.id
    }

    fn created_at(&self) -> u64 {
        self.created_at
    }

    fn updated_at(&self) -> Option<u64> {
        self.updated_at
    }
}

/// Caller-supplied data for creating a member.
///
/// Missing fields decode to empty strings so the validator reports them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MemberPayload {
    pub name: String,
    pub email: String,
    pub join_date: String,
    pub membership_type: String,
}

/// Fields of a member that a full update may overwrite.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MemberPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub join_date: Option<String>,
    pub membership_type: Option<String>,
}

impl MemberPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.join_date.is_none()
            && self.membership_type.is_none()
    }

    /// Merge into `member`, keeping its id and creation time.
    pub fn apply(self, mut member: Member, now: u64) -> Member {
        if let Some(name) = self.name {
            member.name = name;
        }
        if let Some(email) = self.email {
            member.email = email;
        }
        if let Some(join_date) = self.join_date {
            member.join_date = join_date;
        }
        if let Some(membership_type) = self.membership_type {
            member.membership_type = membership_type;
        }
        member.updated_at = Some(now);
        member
    }
}

/// The member fields that have a dedicated single-field update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberField {
    MembershipType,
    Email,
    Name,
}

impl MemberField {
    pub fn name(self) -> &'static str {
        match self {
            MemberField::MembershipType => "membership type",
            MemberField::Email => "email",
            MemberField::Name => "name",
        }
    }

    /// A patch that touches only this field.
    pub fn patch(self, value: String) -> MemberPatch {
        match self {
            MemberField::MembershipType => MemberPatch {
                membership_type: Some(value),
                ..Default::default()
            },
            MemberField::Email => MemberPatch {
                email: Some(value),
                ..Default::default()
            },
            MemberField::Name => MemberPatch {
                name: Some(value),
                ..Default::default()
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jo() -> Member {
        Member::from_payload(
            "m-1".to_string(),
            1000,
            MemberPayload {
                name: "Jo".to_string(),
                email: "jo@x.com".to_string(),
                join_date: "2024-01-01".to_string(),
                membership_type: "gold".to_string(),
            },
        )
    }

    #[test]
    fn test_from_payload() {
        let member = jo();
        assert_eq!(member.id, "m-1");
        assert_eq!(member.created_at, 1000);
        assert_eq!(member.updated_at, None);
        assert_eq!(member.membership_type, "gold");
    }

    #[test]
    fn test_patch_keeps_unspecified_fields() {
        let patch = MemberPatch {
            email: Some("jo@y.com".to_string()),
            ..Default::default()
        };
        let updated = patch.apply(jo(), 2000);

        assert_eq!(updated.id, "m-1");
        assert_eq!(updated.created_at, 1000);
        assert_eq!(updated.updated_at, Some(2000));
        assert_eq!(updated.email, "jo@y.com");
        assert_eq!(updated.name, "Jo");
        assert_eq!(updated.join_date, "2024-01-01");
    }

    #[test]
    fn test_patch_is_empty() {
        assert!(MemberPatch::default().is_empty());
        assert!(!MemberField::Name.patch("Joanna".to_string()).is_empty());
    }

    #[test]
    fn test_field_patch_touches_one_field() {
        let updated = MemberField::MembershipType
            .patch("platinum".to_string())
            .apply(jo(), 3000);
        assert_eq!(updated.membership_type, "platinum");
        assert_eq!(updated.name, "Jo");
        assert_eq!(updated.email, "jo@x.com");
    }

    #[test]
    fn test_serde_camel_case() {
        let json = serde_json::to_string(&jo()).unwrap();
        assert!(json.contains("\"joinDate\""));
        assert!(json.contains("\"membershipType\""));
        assert!(json.contains("\"createdAt\""));
        assert!(!json.contains("updatedAt"));
    }

    #[test]
    fn test_payload_missing_fields_decode_empty() {
        let payload: MemberPayload = serde_json::from_str(r#"{"name":"Jo"}"#).unwrap();
        assert_eq!(payload.name, "Jo");
        assert!(payload.email.is_empty());
        assert!(payload.membership_type.is_empty());
    }
}
