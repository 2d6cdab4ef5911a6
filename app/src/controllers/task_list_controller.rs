// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use slint::{ModelRc, SharedString};
use smart_todo_tasks::{Task, TaskList, TaskListError};
use std::rc::Rc;

use crate::models::TaskListModel;
use crate::Callback;

/// Maps each user action to one task list operation followed by one refresh.
///
/// Selection arrives as the list view's `current-item`, where `-1` means nothing is selected.
#[derive(Clone)]
pub struct TaskListController {
    model: TaskListModel,
    refresh_callback: Rc<Callback<()>>,
    clear_input_callback: Rc<Callback<()>>,
}

impl TaskListController {
    pub fn new(tasks: TaskList) -> Self {
        Self {
            model: TaskListModel::new(tasks),
            refresh_callback: Rc::new(Callback::default()),
            clear_input_callback: Rc::new(Callback::default()),
        }
    }

    pub fn tasks(&self) -> ModelRc<SharedString> {
        ModelRc::new(self.model.clone())
    }

    pub fn model(&self) -> TaskListModel {
        self.model.clone()
    }

    /// Appends a task unless `title` is empty. Returns whether a task was added.
    pub fn add_task(&self, title: &str) -> bool {
        if title.is_empty() {
            log::debug!("ignoring empty task title");
            return false;
        }

        let position = self.model.push_task(Task::new(title));
        log::debug!("added task {title:?} at position {position}");

        self.clear_input_callback.invoke(&());
        self.refresh_callback.invoke(&());
        true
    }

    pub fn remove_task(&self, index: i32) -> Result<(), TaskListError> {
        let Some(position) = selected_position(index) else {
            return Ok(());
        };

        let task = self.model.remove_task(position)?;
        log::debug!("removed task {:?} from position {position}", task.title());

        self.refresh_callback.invoke(&());
        Ok(())
    }

    pub fn toggle_task(&self, index: i32) -> Result<(), TaskListError> {
        let Some(position) = selected_position(index) else {
            return Ok(());
        };

        let completed = self.model.toggle_task(position)?;
        log::debug!("task at position {position} is now completed: {completed}");

        self.refresh_callback.invoke(&());
        Ok(())
    }

    /// Registers the handler run after every successful mutation.
    pub fn on_refresh(&self, mut callback: impl FnMut() + 'static) {
        self.refresh_callback.on(move |()| {
            callback();
        });
    }

    /// Registers the handler run after a task was added from the input field.
    pub fn on_clear_input(&self, mut callback: impl FnMut() + 'static) {
        self.clear_input_callback.on(move |()| {
            callback();
        });
    }
}

fn selected_position(index: i32) -> Option<usize> {
    usize::try_from(index).ok()
}
