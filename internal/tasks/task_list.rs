// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use crate::Task;

/// Error returned when a position does not address a task of the list.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum TaskListError {
    /// `position` is not in `0..len`.
    #[error("position {position} is out of range for a list of {len} task(s)")]
    OutOfRange { position: usize, len: usize },
}

/// The ordered collection of tasks of one session.
///
/// Insertion order is the only order. Positions are 0-based and contiguous, removing a task
/// shifts every following task down by one. Operations given an invalid position fail with
/// [`TaskListError::OutOfRange`] and leave the list untouched.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Appends `task` and returns its position, which is always `len() - 1` afterwards.
    pub fn add(&mut self, task: Task) -> usize {
        self.tasks.push(task);
        self.tasks.len() - 1
    }

    /// Removes the task at `position` and returns it.
    pub fn remove_at(&mut self, position: usize) -> Result<Task, TaskListError> {
        self.check_position(position)?;
        Ok(self.tasks.remove(position))
    }

    pub fn get(&self, position: usize) -> Result<&Task, TaskListError> {
        self.tasks.get(position).ok_or_else(|| self.out_of_range(position))
    }

    pub fn get_mut(&mut self, position: usize) -> Result<&mut Task, TaskListError> {
        let err = self.out_of_range(position);
        self.tasks.get_mut(position).ok_or(err)
    }

    /// Toggles the completion flag of the task at `position` and returns the new value.
    pub fn toggle_at(&mut self, position: usize) -> Result<bool, TaskListError> {
        let task = self.get_mut(position)?;
        task.toggle_completed();
        Ok(task.is_completed())
    }

    /// Snapshot of the display text of every task, in list order.
    pub fn all(&self) -> Vec<String> {
        self.tasks.iter().map(Task::describe).collect()
    }

    pub fn iter(&self) -> core::slice::Iter<'_, Task> {
        self.tasks.iter()
    }

    fn check_position(&self, position: usize) -> Result<(), TaskListError> {
        if position < self.tasks.len() { Ok(()) } else { Err(self.out_of_range(position)) }
    }

    fn out_of_range(&self, position: usize) -> TaskListError {
        TaskListError::OutOfRange { position, len: self.tasks.len() }
    }
}

impl FromIterator<Task> for TaskList {
    fn from_iter<I: IntoIterator<Item = Task>>(iter: I) -> Self {
        Self { tasks: iter.into_iter().collect() }
    }
}

impl Extend<Task> for TaskList {
    fn extend<I: IntoIterator<Item = Task>>(&mut self, iter: I) {
        self.tasks.extend(iter)
    }
}

impl<'a> IntoIterator for &'a TaskList {
    type Item = &'a Task;
    type IntoIter = core::slice::Iter<'a, Task>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
