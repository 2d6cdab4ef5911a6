// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

#![doc = include_str!("README.md")]
#![deny(unsafe_code)]

mod task;
mod task_list;

pub use task::{Task, COMPLETED_MARKER, PENDING_MARKER};
pub use task_list::{TaskList, TaskListError};
