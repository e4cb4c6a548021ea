//! Name validation for task creation and rename.
//!
//! Checks run in a fixed order and the first failure wins, so the user always
//! sees the most fundamental problem first: empty, then duplicate, then length.

use crate::models::Task;

/// Minimum task name length, in characters.
pub const NAME_MIN_CHARS: usize = 3;

/// Maximum task name length, in characters.
pub const NAME_MAX_CHARS: usize = 20;

/// A rejected task name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Task name is required")]
    EmptyName,

    #[error("Task already exists")]
    DuplicateName,

    #[error("Task name must be between {NAME_MIN_CHARS} and {NAME_MAX_CHARS} characters")]
    LengthOutOfRange,
}

/// Validate a task name against the current board.
///
/// `exclude_id` skips one task in the duplicate check; rename passes the
/// renamed task's own ID so keeping the same name is not a collision.
pub fn validate_name(
    name: &str,
    tasks: &[Task],
    exclude_id: Option<&str>,
) -> Result<(), ValidationError> {
    if name.is_empty() {
        return Err(ValidationError::EmptyName);
    }

    let duplicate = tasks
        .iter()
        .filter(|t| exclude_id != Some(t.id.as_str()))
        .any(|t| t.name == name);
    if duplicate {
        return Err(ValidationError::DuplicateName);
    }

    let len = name.chars().count();
    if !(NAME_MIN_CHARS..=NAME_MAX_CHARS).contains(&len) {
        return Err(ValidationError::LengthOutOfRange);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Task;

    fn board(names: &[&str]) -> Vec<Task> {
        names.iter().map(|n| Task::new(*n)).collect()
    }

    #[test]
    fn accepts_valid_names() {
        let tasks = board(&["Existing task"]);
        assert_eq!(validate_name("abc", &tasks, None), Ok(()));
        assert_eq!(validate_name("exactly twenty chars", &tasks, None), Ok(()));
    }

    #[test]
    fn rejects_empty_name() {
        assert_eq!(
            validate_name("", &[], None),
            Err(ValidationError::EmptyName)
        );
    }

    #[test]
    fn rejects_duplicate_name() {
        let tasks = board(&["Write spec"]);
        assert_eq!(
            validate_name("Write spec", &tasks, None),
            Err(ValidationError::DuplicateName)
        );
    }

    #[test]
    fn rejects_out_of_range_lengths() {
        assert_eq!(
            validate_name("ab", &[], None),
            Err(ValidationError::LengthOutOfRange)
        );
        assert_eq!(
            validate_name(&"x".repeat(21), &[], None),
            Err(ValidationError::LengthOutOfRange)
        );
        // Boundaries are inclusive
        assert_eq!(validate_name(&"x".repeat(20), &[], None), Ok(()));
    }

    #[test]
    fn length_counts_chars_not_bytes() {
        // Two chars, six bytes
        assert_eq!(
            validate_name("日本", &[], None),
            Err(ValidationError::LengthOutOfRange)
        );
        assert_eq!(validate_name("日本語あり", &[], None), Ok(()));
    }

    #[test]
    fn duplicate_check_wins_over_length() {
        // "ab" is both a duplicate and too short; duplicate is reported
        let tasks = board(&["ab"]);
        assert_eq!(
            validate_name("ab", &tasks, None),
            Err(ValidationError::DuplicateName)
        );
    }

    #[test]
    fn exclude_id_permits_keeping_own_name() {
        let tasks = board(&["Write spec", "Ship it"]);
        let own_id = tasks[0].id.clone();
        assert_eq!(validate_name("Write spec", &tasks, Some(&own_id)), Ok(()));
        // But another task's name is still a collision
        assert_eq!(
            validate_name("Ship it", &tasks, Some(&own_id)),
            Err(ValidationError::DuplicateName)
        );
    }
}
