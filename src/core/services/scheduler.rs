//! Task scheduler
//!
//! Scheduling a task announces it through the [`NotificationService`].
//! Completing a task is silent.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use log::info;

use crate::core::models::Task;
use crate::core::ports::NotificationService;

/// Schedules tasks and announces them
#[derive(Debug)]
pub struct TaskScheduler<N> {
    notifications: N,
    tasks: BTreeMap<u64, Task>,
    next_id: u64,
}

impl<N: NotificationService> TaskScheduler<N> {
    /// Create a scheduler; the first task gets ID 0
    pub const fn new(notifications: N) -> Self {
        Self {
            notifications,
            tasks: BTreeMap::new(),
            next_id: 0,
        }
    }

    /// Add a task and send `New task scheduled: <description>`
    pub fn schedule_task(&mut self, description: &str, due_date: NaiveDate) -> u64 {
        let task_id = self.next_id;
        self.tasks.insert(task_id, Task::new(description, due_date));
        self.next_id += 1;

        self.notifications
            .notify(&format!("New task scheduled: {description}"));
        info!("Scheduled task {task_id} due {due_date}");
        task_id
    }

    /// Mark a task completed
    ///
    /// Completing an already completed task succeeds again.
    pub fn complete_task(&mut self, task_id: u64) -> bool {
        let Some(task) = self.tasks.get_mut(&task_id) else {
            return false;
        };
        task.completed = true;
        true
    }

    /// Look up a task
    #[must_use]
    pub fn task(&self, task_id: u64) -> Option<&Task> {
        self.tasks.get(&task_id)
    }

    /// All tasks keyed by ID
    pub const fn tasks(&self) -> &BTreeMap<u64, Task> {
        &self.tasks
    }

    /// The notification service
    pub const fn notifications(&self) -> &N {
        &self.notifications
    }
}
