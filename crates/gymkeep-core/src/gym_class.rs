use serde::{Deserialize, Serialize};

use crate::record::{EntityKind, Record};

/// A scheduled gym class.
///
/// `start_time` and `end_time` are opaque strings, compared lexicographically.
/// `trainer_id` is not checked against the trainer collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GymClass {
    pub id: String,
    pub name: String,
    pub description: String,
    pub start_time: String,
    pub end_time: String,
    pub trainer_id: String,
    pub capacity: u32,
    pub created_at: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<u64>,
}

impl GymClass {
    pub fn from_payload(id: String, now: u64, payload: GymClassPayload) -> Self {
        Self {
            id,
            name: payload.name,
            description: payload.description,
            start_time: payload.start_time,
            end_time: payload.end_time,
            trainer_id: payload.trainer_id,
            capacity: payload.capacity,
            created_at: now,
            updated_at: None,
        }
    }
}

impl Record for GymClass {
    const KIND: EntityKind = EntityKind::GymClass;

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
pub struct GymClassPayload {
    pub name: String,
    pub description: String,
    pub start_time: String,
    pub end_time: String,
    pub trainer_id: String,
    pub capacity: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GymClassPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub trainer_id: Option<String>,
    pub capacity: Option<u32>,
}

impl GymClassPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.start_time.is_none()
            && self.end_time.is_none()
            && self.trainer_id.is_none()
            && self.capacity.is_none()
    }

    pub fn apply(self, mut class: GymClass, now: u64) -> GymClass {
        if let Some(name) = self.name {
            class.name = name;
        }
        if let Some(description) = self.description {
            class.description = description;
        }
        if let Some(start_time) = self.start_time {
            class.start_time = start_time;
        }
        if let Some(end_time) = self.end_time {
            class.end_time = end_time;
        }
        if let Some(trainer_id) = self.trainer_id {
            class.trainer_id = trainer_id;
        }
        if let Some(capacity) = self.capacity {
            class.capacity = capacity;
        }
        class.updated_at = Some(now);
        class
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spin() -> GymClass {
        GymClass::from_payload(
            "c-1".to_string(),
            5,
            GymClassPayload {
                name: "Spin".to_string(),
                description: "Indoor cycling".to_string(),
                start_time: "09:00".to_string(),
                end_time: "10:00".to_string(),
                trainer_id: "t-1".to_string(),
                capacity: 20,
            },
        )
    }

    #[test]
    fn test_patch_moves_time_window() {
        let patch = GymClassPatch {
            start_time: Some("18:00".to_string()),
            end_time: Some("19:00".to_string()),
            ..Default::default()
        };
        let updated = patch.apply(spin(), 6);

        assert_eq!(updated.start_time, "18:00");
        assert_eq!(updated.end_time, "19:00");
        assert_eq!(updated.capacity, 20);
        assert_eq!(updated.trainer_id, "t-1");
        assert_eq!(updated.id, "c-1");
        assert_eq!(updated.created_at, 5);
        assert_eq!(updated.updated_at, Some(6));
    }

    #[test]
    fn test_wire_names() {
        let json = serde_json::to_value(spin()).unwrap();
        assert_eq!(json["startTime"], "09:00");
        assert_eq!(json["trainerId"], "t-1");
        assert_eq!(json["capacity"], 20);
        assert!(json.get("updatedAt").is_none());
    }
}
