//! The task store: the in-memory board plus its persistence discipline.
//!
//! `TaskStore` loads the task list once when opened and funnels every
//! mutation through one pattern: build the successor list, persist it, and
//! only then swap it in. Readers never observe a half-applied mutation, and
//! a failed write leaves the board exactly as it was.

use crate::models::{Status, Task};
use crate::storage::Storage;
use crate::validate::validate_name;
use crate::{Error, Result};

/// Owning handle for one board's task list.
pub struct TaskStore {
    storage: Storage,
    tasks: Vec<Task>,
}

impl TaskStore {
    /// Open the store, loading the current snapshot.
    pub fn open(storage: Storage) -> Result<Self> {
        let tasks = storage.load_tasks()?;
        Ok(Self { storage, tasks })
    }

    /// All tasks in creation order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Tasks in one column, in creation order.
    pub fn by_status(&self, status: Status) -> Vec<&Task> {
        self.tasks.iter().filter(|t| t.status == status).collect()
    }

    /// Look up a task by ID.
    pub fn get(&self, id: &str) -> Result<&Task> {
        self.tasks
            .iter()
            .find(|t| t.id == id)
            .ok_or_else(|| Error::NotFound(id.to_string()))
    }

    /// Create a task in the todo column.
    ///
    /// The name is validated first (empty, then duplicate, then length); on
    /// any failure the board is unchanged.
    pub fn create(&mut self, name: &str) -> Result<Task> {
        validate_name(name, &self.tasks, None)?;

        let task = Task::new(name);
        let mut next = self.tasks.clone();
        next.push(task.clone());
        self.commit(next)?;
        Ok(task)
    }

    /// Rename a task.
    ///
    /// Rename applies the same validation as create, with the renamed task
    /// excluded from the duplicate check so an unchanged name passes.
    pub fn rename(&mut self, id: &str, new_name: &str) -> Result<Task> {
        let index = self.index_of(id)?;
        validate_name(new_name, &self.tasks, Some(id))?;

        let mut next = self.tasks.clone();
        next[index].name = new_name.to_string();
        let task = next[index].clone();
        self.commit(next)?;
        Ok(task)
    }

    /// Move a task to another column. Only the status field changes;
    /// the task keeps its position in the underlying list.
    pub fn move_status(&mut self, id: &str, status: Status) -> Result<Task> {
        let index = self.index_of(id)?;

        let mut next = self.tasks.clone();
        next[index].status = status;
        let task = next[index].clone();
        self.commit(next)?;
        Ok(task)
    }

    /// Remove a task. Callers own any interactive confirmation; the store
    /// deletes unconditionally.
    pub fn delete(&mut self, id: &str) -> Result<Task> {
        let index = self.index_of(id)?;

        let mut next = self.tasks.clone();
        let task = next.remove(index);
        self.commit(next)?;
        Ok(task)
    }

    fn index_of(&self, id: &str) -> Result<usize> {
        self.tasks
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| Error::NotFound(id.to_string()))
    }

    /// Persist the successor list, then make it current.
    fn commit(&mut self, next: Vec<Task>) -> Result<()> {
        self.storage.save_tasks(&next)?;
        self.tasks = next;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestEnv;
    use crate::validate::ValidationError;

    #[test]
    fn create_appends_todo_task() {
        let env = TestEnv::new();
        let mut store = env.init_store();

        let task = store.create("Write spec").unwrap();
        assert_eq!(task.status, Status::Todo);

        let last = store.tasks().last().unwrap();
        assert_eq!(last.name, "Write spec");
        assert_eq!(last.status, Status::Todo);
    }

    #[test]
    fn create_rejects_invalid_names_without_mutating() {
        let env = TestEnv::new();
        let mut store = env.init_store();
        store.create("Write spec").unwrap();

        let cases = [
            ("", ValidationError::EmptyName),
            ("Write spec", ValidationError::DuplicateName),
            ("ab", ValidationError::LengthOutOfRange),
            ("a task name far too long", ValidationError::LengthOutOfRange),
        ];
        for (name, expected) in cases {
            match store.create(name) {
                Err(Error::Validation(e)) => assert_eq!(e, expected),
                other => panic!("expected validation error for {:?}, got {:?}", name, other),
            }
        }
        assert_eq!(store.tasks().len(), 1);
    }

    #[test]
    fn move_status_changes_only_that_task() {
        let env = TestEnv::new();
        let mut store = env.init_store();
        let a = store.create("task alpha").unwrap();
        let b = store.create("task beta").unwrap();

        store.move_status(&a.id, Status::Progress).unwrap();

        let moved = store.get(&a.id).unwrap();
        assert_eq!(moved.status, Status::Progress);
        assert_eq!(moved.name, a.name);
        assert_eq!(moved.id, a.id);
        assert_eq!(store.get(&b.id).unwrap().status, Status::Todo);

        // Column membership follows the status field
        assert!(store.by_status(Status::Todo).iter().all(|t| t.id != a.id));
        assert!(store
            .by_status(Status::Progress)
            .iter()
            .any(|t| t.id == a.id));
    }

    #[test]
    fn rename_revalidates() {
        let env = TestEnv::new();
        let mut store = env.init_store();
        let a = store.create("task alpha").unwrap();
        store.create("task beta").unwrap();

        assert!(matches!(
            store.rename(&a.id, "task beta"),
            Err(Error::Validation(ValidationError::DuplicateName))
        ));
        assert!(matches!(
            store.rename(&a.id, "ab"),
            Err(Error::Validation(ValidationError::LengthOutOfRange))
        ));
        // Renaming to its own current name is fine
        store.rename(&a.id, "task alpha").unwrap();

        store.rename(&a.id, "task gamma").unwrap();
        assert_eq!(store.get(&a.id).unwrap().name, "task gamma");
    }

    #[test]
    fn rename_preserves_id_and_status() {
        let env = TestEnv::new();
        let mut store = env.init_store();
        let a = store.create("task alpha").unwrap();
        store.move_status(&a.id, Status::Done).unwrap();

        let renamed = store.rename(&a.id, "task omega").unwrap();
        assert_eq!(renamed.id, a.id);
        assert_eq!(renamed.status, Status::Done);
    }

    #[test]
    fn delete_removes_exactly_one_task() {
        let env = TestEnv::new();
        let mut store = env.init_store();
        let a = store.create("task alpha").unwrap();
        let b = store.create("task beta").unwrap();

        let removed = store.delete(&a.id).unwrap();
        assert_eq!(removed.id, a.id);
        assert_eq!(store.tasks().len(), 1);
        assert_eq!(store.tasks()[0].id, b.id);
        assert!(matches!(store.get(&a.id), Err(Error::NotFound(_))));
    }

    #[test]
    fn unknown_id_is_not_found() {
        let env = TestEnv::new();
        let mut store = env.init_store();
        assert!(matches!(store.get("nope"), Err(Error::NotFound(_))));
        assert!(matches!(
            store.move_status("nope", Status::Done),
            Err(Error::NotFound(_))
        ));
        assert!(matches!(store.delete("nope"), Err(Error::NotFound(_))));
        assert!(matches!(
            store.rename("nope", "valid name"),
            Err(Error::NotFound(_))
        ));
    }

    #[test]
    fn mutations_survive_reopen() {
        let env = TestEnv::new();
        let mut store = env.init_store();
        let a = store.create("task alpha").unwrap();
        let b = store.create("task beta").unwrap();
        store.create("task gamma").unwrap();
        store.move_status(&a.id, Status::Progress).unwrap();
        store.rename(&b.id, "task delta").unwrap();
        store.delete(&b.id).unwrap();

        let before: Vec<Task> = store.tasks().to_vec();
        let reopened = TaskStore::open(env.open_storage()).unwrap();
        assert_eq!(reopened.tasks(), before.as_slice());
    }

    #[test]
    fn board_scenario_from_empty() {
        let env = TestEnv::new();
        let mut store = env.init_store();
        assert!(store.tasks().is_empty());

        let task = store.create("Write spec").unwrap();
        assert_eq!(store.tasks().len(), 1);
        assert_eq!(store.tasks()[0].name, "Write spec");
        assert_eq!(store.tasks()[0].status, Status::Todo);

        store.move_status(&task.id, Status::Progress).unwrap();
        let progress = store.by_status(Status::Progress);
        assert_eq!(progress.len(), 1);
        assert_eq!(progress[0].id, task.id);
        assert!(store.by_status(Status::Todo).is_empty());
    }
}
