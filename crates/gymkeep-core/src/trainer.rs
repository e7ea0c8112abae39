use serde::{Deserialize, Serialize};

use crate::record::{EntityKind, Record};

/// A trainer who teaches gym classes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trainer {
    pub id: String,
    pub name: String,
    pub email: String,
    pub specializations: Vec<String>,
    pub created_at: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<u64>,
}

impl Trainer {
    pub fn from_payload(id: String, now: u64, payload: TrainerPayload) -> Self {
        Self {
            id,
            name: payload.name,
            email: payload.email,
            specializations: payload.specializations,
            created_at: now,
            updated_at: None,
        }
    }
}

impl Record for Trainer {
    const KIND: EntityKind = EntityKind::Trainer;

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

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TrainerPayload {
    pub name: String,
    pub email: String,
    pub specializations: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TrainerPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub specializations: Option<Vec<String>>,
}

impl TrainerPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.specializations.is_none()
    }

    pub fn apply(self, mut trainer: Trainer, now: u64) -> Trainer {
        if let Some(name) = self.name {
            trainer.name = name;
        }
        if let Some(email) = self.email {
            trainer.email = email;
        }
        if let Some(specializations) = self.specializations {
            trainer.specializations = specializations;
        }
        trainer.updated_at = Some(now);
        trainer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patch_replaces_specializations() {
        let trainer = Trainer::from_payload(
            "t-1".to_string(),
            10,
            TrainerPayload {
                name: "Sam".to_string(),
                email: "sam@gym.com".to_string(),
                specializations: vec!["yoga".to_string()],
            },
        );

        let patch = TrainerPatch {
            specializations: Some(vec!["spin".to_string(), "hiit".to_string()]),
            ..Default::default()
        };
        let updated = patch.apply(trainer, 20);

        assert_eq!(updated.specializations, vec!["spin", "hiit"]);
        assert_eq!(updated.name, "Sam");
        assert_eq!(updated.created_at, 10);
        assert_eq!(updated.updated_at, Some(20));
    }

    #[test]
    fn test_patch_is_empty() {
        assert!(TrainerPatch::default().is_empty());
        let patch: TrainerPatch = serde_json::from_str(r#"{"email":"x@y.z"}"#).unwrap();
        assert!(!patch.is_empty());
    }
}
