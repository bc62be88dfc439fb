// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{AssignmentRepository, CoreError, IdentityDirectory, TaskRepository, WeddingRegistry};
use elegant_events_audit::{Actor, Cause};
use elegant_events_domain::{
    DirectoryUser, Identity, Role, Task, Wedding, WeddingAssignment,
};

/// In-memory collaborator store for exercising the core without a database.
#[derive(Debug, Default)]
pub struct MemoryStore {
    pub users: Vec<DirectoryUser>,
    pub weddings: Vec<Wedding>,
    pub assignments: Vec<WeddingAssignment>,
    pub tasks: Vec<Task>,
    next_id: i64,
}

impl MemoryStore {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }

    pub fn add_user(&mut self, identity: &str, role: Role) -> i64 {
        let user = DirectoryUser::new(Identity::new(identity), identity.to_uppercase(), role);
        self.insert_user(&user).unwrap().user_id.unwrap()
    }

    pub fn add_wedding(&mut self, wedding_id: i64, couple: &str) {
        self.weddings.push(Wedding {
            wedding_id: Some(wedding_id),
            couple_identity: Identity::new(couple),
            partners_name: None,
            wedding_date: None,
        });
    }
}

impl IdentityDirectory for MemoryStore {
    fn find_user_by_identity(
        &mut self,
        identity: &Identity,
    ) -> Result<Option<DirectoryUser>, CoreError> {
        Ok(self.users.iter().find(|u| &u.identity == identity).cloned())
    }

    fn find_user_by_id(&mut self, user_id: i64) -> Result<Option<DirectoryUser>, CoreError> {
        Ok(self
            .users
            .iter()
            .find(|u| u.user_id == Some(user_id))
            .cloned())
    }

    fn insert_user(&mut self, user: &DirectoryUser) -> Result<DirectoryUser, CoreError> {
        let mut stored = user.clone();
        stored.user_id = Some(self.next_id());
        self.users.push(stored.clone());
        Ok(stored)
    }
}

impl WeddingRegistry for MemoryStore {
    fn find_wedding(&mut self, wedding_id: i64) -> Result<Option<Wedding>, CoreError> {
        Ok(self
            .weddings
            .iter()
            .find(|w| w.wedding_id == Some(wedding_id))
            .cloned())
    }

    fn find_wedding_by_couple(
        &mut self,
        couple_identity: &Identity,
    ) -> Result<Option<Wedding>, CoreError> {
        Ok(self
            .weddings
            .iter()
            .find(|w| &w.couple_identity == couple_identity)
            .cloned())
    }

    fn insert_wedding(&mut self, wedding: &Wedding) -> Result<Wedding, CoreError> {
        let mut stored = wedding.clone();
        stored.wedding_id = Some(self.next_id());
        self.weddings.push(stored.clone());
        Ok(stored)
    }
}

impl AssignmentRepository for MemoryStore {
    fn find_assignment_by_wedding(
        &mut self,
        wedding_id: i64,
    ) -> Result<Option<WeddingAssignment>, CoreError> {
        Ok(self
            .assignments
            .iter()
            .find(|a| a.wedding_id == wedding_id)
            .cloned())
    }

    fn find_assignment_by_couple(
        &mut self,
        couple_identity: &Identity,
    ) -> Result<Option<WeddingAssignment>, CoreError> {
        Ok(self
            .assignments
            .iter()
            .find(|a| &a.couple_identity == couple_identity)
            .cloned())
    }

    fn list_assignments(&mut self) -> Result<Vec<WeddingAssignment>, CoreError> {
        Ok(self.assignments.clone())
    }

    fn assignments_for_manager(
        &mut self,
        manager_identity: &Identity,
    ) -> Result<Vec<WeddingAssignment>, CoreError> {
        Ok(self
            .assignments
            .iter()
            .filter(|a| a.manager_identity.as_ref() == Some(manager_identity))
            .cloned()
            .collect())
    }

    fn assignments_for_protocol(
        &mut self,
        protocol_identity: &Identity,
    ) -> Result<Vec<WeddingAssignment>, CoreError> {
        Ok(self
            .assignments
            .iter()
            .filter(|a| a.protocol_identity.as_ref() == Some(protocol_identity))
            .cloned()
            .collect())
    }

    fn save_assignment(
        &mut self,
        assignment: &WeddingAssignment,
    ) -> Result<WeddingAssignment, CoreError> {
        let mut stored = assignment.clone();
        if let Some(id) = stored.assignment_id {
            let slot = self
                .assignments
                .iter_mut()
                .find(|a| a.assignment_id == Some(id))
                .ok_or_else(|| CoreError::Storage(format!("assignment {id} vanished")))?;
            *slot = stored.clone();
        } else {
            if self.assignments.iter().any(|a| a.wedding_id == stored.wedding_id) {
                return Err(CoreError::Storage(String::from("duplicate wedding assignment")));
            }
            stored.assignment_id = Some(self.next_id());
            self.assignments.push(stored.clone());
        }
        Ok(stored)
    }
}

impl TaskRepository for MemoryStore {
    fn find_task(&mut self, task_id: i64) -> Result<Option<Task>, CoreError> {
        Ok(self.tasks.iter().find(|t| t.task_id == Some(task_id)).cloned())
    }

    fn tasks_for_wedding(&mut self, wedding_id: i64) -> Result<Vec<Task>, CoreError> {
        Ok(self
            .tasks
            .iter()
            .filter(|t| t.wedding_id == wedding_id)
            .cloned()
            .collect())
    }

    fn tasks_for_protocol(&mut self, protocol_user_id: i64) -> Result<Vec<Task>, CoreError> {
        Ok(self
            .tasks
            .iter()
            .filter(|t| t.assigned_protocol_id == Some(protocol_user_id))
            .cloned()
            .collect())
    }

    fn save_task(&mut self, task: &Task) -> Result<Task, CoreError> {
        let mut stored = task.clone();
        if let Some(id) = stored.task_id {
            self.tasks.retain(|t| t.task_id != Some(id));
        } else {
            stored.task_id = Some(self.next_id());
        }
        self.tasks.push(stored.clone());
        Ok(stored)
    }

    fn delete_task(&mut self, task_id: i64) -> Result<(), CoreError> {
        self.tasks.retain(|t| t.task_id != Some(task_id));
        Ok(())
    }
}

/// Store with admin1, mgr1, mgr2, proto1, couple1 and wedding 42.
pub fn create_seeded_store() -> MemoryStore {
    let mut store = MemoryStore {
        next_id: 100,
        ..MemoryStore::default()
    };
    store.add_user("admin1", Role::Admin);
    store.add_user("mgr1", Role::Manager);
    store.add_user("mgr2", Role::Manager);
    store.add_user("proto1", Role::Protocol);
    store.add_user("couple1", Role::User);
    store.add_wedding(42, "couple1");
    store
}

pub fn user_id(store: &MemoryStore, identity: &str) -> i64 {
    store
        .users
        .iter()
        .find(|u| u.identity.value() == identity)
        .and_then(|u| u.user_id)
        .unwrap()
}

pub fn create_test_cause() -> Cause {
    Cause::new(String::from("req-1"), String::from("Test request"))
}

pub fn create_test_actor() -> Actor {
    Actor::new(String::from("proto1"), String::from("PROTOCOL"))
}
