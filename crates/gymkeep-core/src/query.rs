//! Read-only views over a snapshot of a collection.
//!
//! Every query is a linear scan; there are no secondary indexes.

use crate::gym_class::GymClass;
use crate::member::Member;

/// Members whose name or email contains `query`, ignoring case.
pub fn search_members(members: Vec<Member>, query: &str) -> Vec<Member> {
    let needle = query.to_lowercase();
    members
        .into_iter()
        .filter(|m| {
            m.name.to_lowercase().contains(&needle) || m.email.to_lowercase().contains(&needle)
        })
        .collect()
}

/// Classes whose start time is exactly `start_time`.
pub fn filter_classes_by_start_time(classes: Vec<GymClass>, start_time: &str) -> Vec<GymClass> {
    classes
        .into_iter()
        .filter(|c| c.start_time == start_time)
        .collect()
}

/// Whether `class` is taught by `trainer_id` and has its own start or end
/// time inside `[start_time, end_time]`.
///
/// A class that strictly contains the window is not a conflict.
pub fn has_schedule_conflict(
    class: &GymClass,
    trainer_id: &str,
    start_time: &str,
    end_time: &str,
) -> bool {
    let within = |t: &str| t >= start_time && t <= end_time;
    class.trainer_id == trainer_id && (within(&class.start_time) || within(&class.end_time))
}

/// True when none of `classes` conflicts with the window for `trainer_id`.
pub fn is_trainer_available(
    classes: &[GymClass],
    trainer_id: &str,
    start_time: &str,
    end_time: &str,
) -> bool {
    !classes
        .iter()
        .any(|c| has_schedule_conflict(c, trainer_id, start_time, end_time))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member(id: &str, name: &str, email: &str) -> Member {
        Member {
            id: id.to_string(),
            name: name.to_string(),
            email: email.to_string(),
            join_date: "2024-01-01".to_string(),
            membership_type: "basic".to_string(),
            created_at: 1,
            updated_at: None,
        }
    }

    fn class(trainer_id: &str, start: &str, end: &str) -> GymClass {
        GymClass {
            id: format!("{trainer_id}-{start}"),
            name: "Class".to_string(),
            description: String::new(),
            start_time: start.to_string(),
            end_time: end.to_string(),
            trainer_id: trainer_id.to_string(),
            capacity: 10,
            created_at: 1,
            updated_at: None,
        }
    }

    #[test]
    fn test_search_matches_name_and_email() {
        let members = vec![
            member("1", "Alice Smith", "a@x.com"),
            member("2", "Bob", "bob@alice.org"),
            member("3", "Carol", "carol@x.com"),
        ];

        let found = search_members(members, "alice");
        let ids: Vec<&str> = found.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2"]);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let members = vec![member("1", "alice", "ALICE@X.COM")];
        assert_eq!(search_members(members.clone(), "ALIce").len(), 1);
        assert_eq!(search_members(members, "x.com").len(), 1);
    }

    #[test]
    fn test_filter_by_start_time_is_exact() {
        let classes = vec![
            class("t", "09:00", "10:00"),
            class("t", "09:00:00", "10:00"),
            class("u", "09:00", "09:45"),
        ];
        let found = filter_classes_by_start_time(classes, "09:00");
        assert_eq!(found.len(), 2);
        assert!(found.iter().all(|c| c.start_time == "09:00"));
    }

    #[test]
    fn test_conflict_when_start_inside_window() {
        let classes = vec![class("t", "09:30", "10:30")];
        assert!(!is_trainer_available(&classes, "t", "09:00", "10:00"));
    }

    #[test]
    fn test_conflict_when_end_inside_window() {
        let classes = vec![class("t", "08:00", "09:15")];
        assert!(!is_trainer_available(&classes, "t", "09:00", "10:00"));
    }

    #[test]
    fn test_bounds_are_inclusive() {
        assert!(!is_trainer_available(
            &[class("t", "10:00", "11:00")],
            "t",
            "09:00",
            "10:00"
        ));
        assert!(!is_trainer_available(
            &[class("t", "08:00", "09:00")],
            "t",
            "09:00",
            "10:00"
        ));
    }

    #[test]
    fn test_enclosing_class_is_not_a_conflict() {
        let classes = vec![class("t", "08:00", "11:00")];
        assert!(is_trainer_available(&classes, "t", "09:00", "10:00"));
    }

    #[test]
    fn test_other_trainers_are_ignored() {
        let classes = vec![class("u", "09:30", "10:30")];
        assert!(is_trainer_available(&classes, "t", "09:00", "10:00"));
        assert!(is_trainer_available(&[], "t", "09:00", "10:00"));
    }
}
