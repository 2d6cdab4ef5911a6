// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use std::{cell::RefCell, rc::Rc};

use slint::{Model, ModelNotify, ModelTracker, SharedString};
use smart_todo_tasks::{Task, TaskList, TaskListError};

/// Exposes the session's [`TaskList`] to the view as a model of display strings.
///
/// Clones share the same list. The list is never borrowed while change notifications are sent,
/// so views may read rows back from within a notification.
#[derive(Clone, Default)]
pub struct TaskListModel {
    tasks: Rc<RefCell<TaskList>>,
    notify: Rc<ModelNotify>,
}

impl TaskListModel {
    pub fn new(tasks: TaskList) -> Self {
        Self { tasks: Rc::new(RefCell::new(tasks)), notify: Default::default() }
    }

    pub fn push_task(&self, task: Task) -> usize {
        let row = self.tasks.borrow_mut().add(task);
        self.notify.row_added(row, 1);
        row
    }

    pub fn remove_task(&self, row: usize) -> Result<Task, TaskListError> {
        let task = self.tasks.borrow_mut().remove_at(row)?;
        self.notify.row_removed(row, 1);
        Ok(task)
    }

    /// Returns whether the task is completed after the toggle.
    pub fn toggle_task(&self, row: usize) -> Result<bool, TaskListError> {
        let completed = self.tasks.borrow_mut().toggle_at(row)?;
        self.notify.row_changed(row);
        Ok(completed)
    }

    pub fn descriptions(&self) -> Vec<String> {
        self.tasks.borrow().all()
    }
}

impl Model for TaskListModel {
    type Data = SharedString;

    fn row_count(&self) -> usize {
        self.tasks.borrow().len()
    }

    fn row_data(&self, row: usize) -> Option<Self::Data> {
        self.tasks.borrow().get(row).ok().map(|task| task.describe().into())
    }

    fn model_tracker(&self) -> &dyn ModelTracker {
        self.notify.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(model: &TaskListModel) -> Vec<String> {
        model.iter().map(|row| row.to_string()).collect()
    }

    #[test]
    fn test_rows_follow_task_list() {
        let model = TaskListModel::new(["A", "B", "C"].into_iter().map(Task::new).collect());

        model.toggle_task(0).unwrap();
        model.remove_task(1).unwrap();
        model.push_task(Task::new("D"));

        assert_eq!(model.row_count(), 3);
        assert_eq!(rows(&model), model.descriptions());
        assert_eq!(rows(&model), ["[✓] A", "[ ] C", "[ ] D"]);
    }

    #[test]
    fn test_row_data_out_of_range() {
        let model = TaskListModel::default();
        assert_eq!(model.row_data(0), None);
    }

    #[test]
    fn test_clones_share_tasks() {
        let model = TaskListModel::default();
        let other = model.clone();

        assert_eq!(model.push_task(Task::new("Buy milk")), 0);
        assert_eq!(other.toggle_task(0), Ok(true));
        assert_eq!(model.descriptions(), ["[✓] Buy milk"]);
    }

    #[test]
    fn test_invalid_row_is_rejected() {
        let model = TaskListModel::new([Task::new("A")].into_iter().collect());

        assert_eq!(model.remove_task(1), Err(TaskListError::OutOfRange { position: 1, len: 1 }));
        assert_eq!(model.toggle_task(1), Err(TaskListError::OutOfRange { position: 1, len: 1 }));
        assert_eq!(model.descriptions(), ["[ ] A"]);
    }
}
