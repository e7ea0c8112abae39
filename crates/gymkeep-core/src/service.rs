//! One entry point per operation, orchestrating validation, the query engine
//! and the three collections.

use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::clock::Clock;
use crate::error::CoreError;
use crate::gym_class::{GymClass, GymClassPatch, GymClassPayload};
use crate::id::IdGenerator;
use crate::member::{Member, MemberField, MemberPatch, MemberPayload};
use crate::query;
use crate::record::Record;
use crate::storage::Collection;
use crate::trainer::{Trainer, TrainerPatch, TrainerPayload};
use crate::validation::Validator;

/// A collection behind its own lock, so that the get-then-insert of an
/// update never interleaves with another operation on the same collection.
type Guarded<T> = Mutex<Box<dyn Collection<T>>>;

/// Service facade over the member, class and trainer collections.
pub struct GymService {
    members: Guarded<Member>,
    classes: Guarded<GymClass>,
    trainers: Guarded<Trainer>,
    clock: Box<dyn Clock>,
    ids: Box<dyn IdGenerator>,
}

impl GymService {
    pub fn new(
        members: impl Collection<Member> + 'static,
        classes: impl Collection<GymClass> + 'static,
        trainers: impl Collection<Trainer> + 'static,
        clock: impl Clock + 'static,
        ids: impl IdGenerator + 'static,
    ) -> Self {
        Self {
            members: Mutex::new(Box::new(members)),
            classes: Mutex::new(Box::new(classes)),
            trainers: Mutex::new(Box::new(trainers)),
            clock: Box::new(clock),
            ids: Box::new(ids),
        }
    }

    // Members

    pub fn list_members(&self) -> Result<Vec<Member>, CoreError> {
        list(&self.members)
    }

    pub fn get_member(&self, id: &str) -> Result<Member, CoreError> {
        get(&self.members, id)
    }

    pub fn add_member(&self, payload: MemberPayload) -> Result<Member, CoreError> {
        Validator::validate_member_payload(&payload)?;
        let member = Member::from_payload(self.ids.new_id(), self.clock.now(), payload);
        add(&self.members, member)
    }

    pub fn update_member(&self, id: &str, patch: MemberPatch) -> Result<Member, CoreError> {
        Validator::validate_member_patch(id, &patch)?;
        update(&self.members, id, self.clock.now(), |member, now| {
            patch.apply(member, now)
        })
    }

    /// Replace a single member field (membership type, email or name).
    pub fn update_member_field(
        &self,
        id: &str,
        field: MemberField,
        value: String,
    ) -> Result<Member, CoreError> {
        Validator::validate_member_field(id, field, &value)?;
        let patch = field.patch(value);
        update(&self.members, id, self.clock.now(), |member, now| {
            patch.apply(member, now)
        })
    }

    pub fn update_membership_type(
        &self,
        id: &str,
        membership_type: String,
    ) -> Result<Member, CoreError> {
        self.update_member_field(id, MemberField::MembershipType, membership_type)
    }

    pub fn update_member_email(&self, id: &str, email: String) -> Result<Member, CoreError> {
        self.update_member_field(id, MemberField::Email, email)
    }

    pub fn update_member_name(&self, id: &str, name: String) -> Result<Member, CoreError> {
        self.update_member_field(id, MemberField::Name, name)
    }

    pub fn delete_member(&self, id: &str) -> Result<Member, CoreError> {
        delete(&self.members, id)
    }

    pub fn search_members(&self, query: &str) -> Result<Vec<Member>, CoreError> {
        Validator::validate_search_query(query)?;
        let members = list(&self.members)?;
        Ok(query::search_members(members, query))
    }

    // Gym classes

    pub fn list_gym_classes(&self) -> Result<Vec<GymClass>, CoreError> {
        list(&self.classes)
    }

    pub fn get_gym_class(&self, id: &str) -> Result<GymClass, CoreError> {
        get(&self.classes, id)
    }

    /// Add a class. The trainer id is stored as given, without a lookup.
    pub fn add_gym_class(&self, payload: GymClassPayload) -> Result<GymClass, CoreError> {
        Validator::validate_gym_class_payload(&payload)?;
        let class = GymClass::from_payload(self.ids.new_id(), self.clock.now(), payload);
        add(&self.classes, class)
    }

    pub fn update_gym_class(&self, id: &str, patch: GymClassPatch) -> Result<GymClass, CoreError> {
        Validator::validate_gym_class_patch(id, &patch)?;
        update(&self.classes, id, self.clock.now(), |class, now| {
            patch.apply(class, now)
        })
    }

    pub fn delete_gym_class(&self, id: &str) -> Result<GymClass, CoreError> {
        delete(&self.classes, id)
    }

    pub fn filter_gym_classes_by_start_time(
        &self,
        start_time: &str,
    ) -> Result<Vec<GymClass>, CoreError> {
        Validator::validate_start_time(start_time)?;
        let classes = list(&self.classes)?;
        Ok(query::filter_classes_by_start_time(classes, start_time))
    }

    // Trainers

    pub fn list_trainers(&self) -> Result<Vec<Trainer>, CoreError> {
        list(&self.trainers)
    }

    pub fn get_trainer(&self, id: &str) -> Result<Trainer, CoreError> {
        get(&self.trainers, id)
    }

    pub fn add_trainer(&self, payload: TrainerPayload) -> Result<Trainer, CoreError> {
        Validator::validate_trainer_payload(&payload)?;
        let trainer = Trainer::from_payload(self.ids.new_id(), self.clock.now(), payload);
        add(&self.trainers, trainer)
    }

    pub fn update_trainer(&self, id: &str, patch: TrainerPatch) -> Result<Trainer, CoreError> {
        Validator::validate_trainer_patch(id, &patch)?;
        update(&self.trainers, id, self.clock.now(), |trainer, now| {
            patch.apply(trainer, now)
        })
    }

    pub fn delete_trainer(&self, id: &str) -> Result<Trainer, CoreError> {
        delete(&self.trainers, id)
    }

    /// Whether the trainer has no class with a start or end time inside
    /// `[start_time, end_time]`. Fails with `NotFound` for an unknown trainer.
    pub fn check_trainer_availability(
        &self,
        trainer_id: &str,
        start_time: &str,
        end_time: &str,
    ) -> Result<bool, CoreError> {
        Validator::validate_availability(trainer_id, start_time, end_time)?;

        // Only one collection lock is held at a time.
        get(&self.trainers, trainer_id)?;
        let classes = list(&self.classes)?;

        let available = query::is_trainer_available(&classes, trainer_id, start_time, end_time);
        tracing::debug!(
            trainer_id,
            start_time,
            end_time,
            available,
            "Checked trainer availability"
        );
        Ok(available)
    }
}

fn lock<T: Record>(collection: &Guarded<T>) -> MutexGuard<'_, Box<dyn Collection<T>>> {
    collection.lock().unwrap_or_else(PoisonError::into_inner)
}

fn list<T: Record>(collection: &Guarded<T>) -> Result<Vec<T>, CoreError> {
    let records = lock(collection).values()?;
    tracing::debug!(kind = %T::KIND, count = records.len(), "Listed records");
    Ok(records)
}

fn get<T: Record>(collection: &Guarded<T>, id: &str) -> Result<T, CoreError> {
    lock(collection)
        .get(id)?
        .ok_or_else(|| CoreError::not_found(T::KIND, id))
}

fn add<T: Record>(collection: &Guarded<T>, record: T) -> Result<T, CoreError> {
    lock(collection).insert(record.id(), &record)?;
    tracing::info!(
        kind = %T::KIND,
        id = record.id(),
        created_at = record.created_at(),
        "Record created"
    );
    Ok(record)
}

/// Read, merge and write back under one lock. The merge time is raised to
/// the record's last timestamp, since the clock only holds its floor for
/// the lifetime of the process.
fn update<T: Record>(
    collection: &Guarded<T>,
    id: &str,
    now: u64,
    merge: impl FnOnce(T, u64) -> T,
) -> Result<T, CoreError> {
    let store = lock(collection);
    let current = store
        .get(id)?
        .ok_or_else(|| CoreError::not_found(T::KIND, id))?;
    let now = now.max(current.updated_at().unwrap_or(current.created_at()));
    let updated = merge(current, now);
    store.insert(updated.id(), &updated)?;
    tracing::info!(kind = %T::KIND, id, updated_at = ?updated.updated_at(), "Record updated");
    Ok(updated)
}

fn delete<T: Record>(collection: &Guarded<T>, id: &str) -> Result<T, CoreError> {
    let removed = lock(collection)
        .remove(id)?
        .ok_or_else(|| CoreError::not_found(T::KIND, id))?;
    tracing::info!(kind = %T::KIND, id, "Record deleted");
    Ok(removed)
}

/// Service over in-memory collections with predictable ids and time.
#[cfg(any(test, feature = "test-utils"))]
pub fn in_memory_service() -> GymService {
    use crate::clock::ManualClock;
    use crate::id::SequentialIds;
    use crate::storage::memory::InMemoryCollection;

    GymService::new(
        InMemoryCollection::new(),
        InMemoryCollection::new(),
        InMemoryCollection::new(),
        ManualClock::new(1_000, 1),
        SequentialIds::new("id"),
    )
}
