// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use core::fmt;

/// Marker printed in front of the title of a completed task.
pub const COMPLETED_MARKER: &str = "[✓]";
/// Marker printed in front of the title of a task that is not completed yet.
pub const PENDING_MARKER: &str = "[ ]";

/// A single to-do item.
///
/// A task carries no identifier: two tasks with the same title and state are
/// indistinguishable, and the owning [`TaskList`](crate::TaskList) addresses them by position.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Task {
    title: String,
    completed: bool,
}

impl Task {
    /// Creates a task that is not completed.
    ///
    /// The title is not validated, empty titles are accepted. Rejecting empty input is up to
    /// the caller.
    pub fn new(title: impl Into<String>) -> Self {
        Self { title: title.into(), completed: false }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Flips the completion flag. Applying it twice restores the previous state.
    pub fn toggle_completed(&mut self) {
        self.completed = !self.completed;
    }

    /// Returns the text shown for this task in a list, e.g. `[✓] Buy milk`.
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marker = if self.completed { COMPLETED_MARKER } else { PENDING_MARKER };
        write!(f, "{marker} {}", self.title)
    }
}

impl From<&str> for Task {
    fn from(title: &str) -> Self {
        Self::new(title)
    }
}

impl From<String> for Task {
    fn from(title: String) -> Self {
        Self::new(title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_task_is_pending() {
        let task = Task::new("Buy milk");
        assert_eq!(task.title(), "Buy milk");
        assert!(!task.is_completed());
    }

    #[test]
    fn test_empty_title_is_accepted() {
        let task = Task::new("");
        assert_eq!(task.title(), "");
        assert_eq!(task.describe(), "[ ] ");
    }

    #[test]
    fn test_toggle_twice_restores_state() {
        let mut task = Task::new("Walk dog");

        task.toggle_completed();
        assert!(task.is_completed());
        task.toggle_completed();
        assert!(!task.is_completed());
    }

    #[test]
    fn test_describe() {
        let mut task = Task::new("Buy milk");
        assert_eq!(task.describe(), "[ ] Buy milk");

        task.toggle_completed();
        assert_eq!(task.describe(), "[✓] Buy milk");
        assert_eq!(format!("{task}"), task.describe());
    }

    #[test]
    fn test_set_title_keeps_completion() {
        let mut task = Task::from("Buy milk");
        task.toggle_completed();
        task.set_title(String::from("Buy oat milk"));

        assert_eq!(task.title(), "Buy oat milk");
        assert!(task.is_completed());
        assert_eq!(task.describe(), "[✓] Buy oat milk");
    }
}
