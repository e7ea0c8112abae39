use crate::error::ValidationError;
use crate::gym_class::{GymClassPatch, GymClassPayload};
use crate::member::{MemberField, MemberPatch, MemberPayload};
use crate::record::EntityKind;
use crate::trainer::{TrainerPatch, TrainerPayload};

/// Validator for inbound payloads and query arguments.
///
/// Every check runs before the store is touched.
pub struct Validator;

impl Validator {
    fn require(kind: EntityKind, field: &'static str, value: &str) -> Result<(), ValidationError> {
        if value.is_empty() {
            return Err(ValidationError::MissingField(kind, field));
        }
        Ok(())
    }

    /// Validate a record identifier.
    pub fn validate_id(kind: EntityKind, id: &str) -> Result<(), ValidationError> {
        if id.is_empty() {
            return Err(ValidationError::InvalidId(kind));
        }
        Ok(())
    }

    pub fn validate_member_payload(payload: &MemberPayload) -> Result<(), ValidationError> {
        let kind = EntityKind::Member;
        Self::require(kind, "name", &payload.name)?;
        Self::require(kind, "email", &payload.email)?;
        Self::require(kind, "joinDate", &payload.join_date)?;
        Self::require(kind, "membershipType", &payload.membership_type)?;
        Ok(())
    }

    /// Validate a new class.
    /// The description may be empty; capacity must be non-zero.
    pub fn validate_gym_class_payload(payload: &GymClassPayload) -> Result<(), ValidationError> {
        let kind = EntityKind::GymClass;
        Self::require(kind, "name", &payload.name)?;
        Self::require(kind, "startTime", &payload.start_time)?;
        Self::require(kind, "endTime", &payload.end_time)?;
        Self::require(kind, "trainerId", &payload.trainer_id)?;
        if payload.capacity == 0 {
            return Err(ValidationError::MissingField(kind, "capacity"));
        }
        Ok(())
    }

    pub fn validate_trainer_payload(payload: &TrainerPayload) -> Result<(), ValidationError> {
        let kind = EntityKind::Trainer;
        Self::require(kind, "name", &payload.name)?;
        Self::require(kind, "email", &payload.email)?;
        if payload.specializations.is_empty() {
            return Err(ValidationError::NoSpecializations(kind));
        }
        Ok(())
    }

    pub fn validate_member_patch(id: &str, patch: &MemberPatch) -> Result<(), ValidationError> {
        Self::validate_id(EntityKind::Member, id)?;
        if patch.is_empty() {
            return Err(ValidationError::EmptyPatch);
        }
        Ok(())
    }

    pub fn validate_gym_class_patch(id: &str, patch: &GymClassPatch) -> Result<(), ValidationError> {
        Self::validate_id(EntityKind::GymClass, id)?;
        if patch.is_empty() {
            return Err(ValidationError::EmptyPatch);
        }
        Ok(())
    }

    pub fn validate_trainer_patch(id: &str, patch: &TrainerPatch) -> Result<(), ValidationError> {
        Self::validate_id(EntityKind::Trainer, id)?;
        if patch.is_empty() {
            return Err(ValidationError::EmptyPatch);
        }
        Ok(())
    }

    /// Validate a single-field member update.
    pub fn validate_member_field(
        id: &str,
        field: MemberField,
        value: &str,
    ) -> Result<(), ValidationError> {
        Self::validate_id(EntityKind::Member, id)?;
        if value.is_empty() {
            return Err(ValidationError::EmptyValue(field.name()));
        }
        Ok(())
    }

    /// Validate a member search term. Whitespace-only counts as empty.
    pub fn validate_search_query(query: &str) -> Result<(), ValidationError> {
        if query.trim().is_empty() {
            return Err(ValidationError::EmptySearchQuery);
        }
        Ok(())
    }

    pub fn validate_start_time(start_time: &str) -> Result<(), ValidationError> {
        if start_time.is_empty() {
            return Err(ValidationError::EmptyValue("start time"));
        }
        Ok(())
    }

    /// Validate the arguments of an availability check.
    pub fn validate_availability(
        trainer_id: &str,
        start_time: &str,
        end_time: &str,
    ) -> Result<(), ValidationError> {
        Self::validate_id(EntityKind::Trainer, trainer_id)?;
        if start_time.is_empty() || end_time.is_empty() {
            return Err(ValidationError::InvalidTimeWindow);
        }
        Ok(())
    }
}
