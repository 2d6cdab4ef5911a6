// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use slint::ComponentHandle;
use smart_todo_tasks::TaskList;

pub mod ui {
    slint::include_modules!();
}

mod adapters;
use adapters::*;

mod callback;
pub use callback::*;

pub mod controllers;
pub mod models;

pub fn run() -> Result<(), slint::PlatformError> {
    let main_window = init()?;
    log::info!("starting with an empty task list");

    main_window.run()
}

fn init() -> Result<ui::MainWindow, slint::PlatformError> {
    let view_handle = ui::MainWindow::new()?;

    let task_list_controller = controllers::TaskListController::new(TaskList::new());
    task_list_adapter::connect(&view_handle, task_list_controller);

    Ok(view_handle)
}
