// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use slint::*;
use std::rc::Rc;

use crate::{controllers::TaskListController, ui};

// one place to implement connection between adapter (view) and controller
pub fn connect(view_handle: &ui::MainWindow, controller: TaskListController) {
    let adapter = view_handle.global::<ui::TaskListAdapter>();

    adapter.set_tasks(Rc::new(MapModel::new(controller.tasks(), map_description_to_item)).into());

    adapter.on_add_task({
        let controller = controller.clone();

        move |title| {
            controller.add_task(title.as_str());
        }
    });

    adapter.on_remove_task({
        let controller = controller.clone();

        move |index| {
            if let Err(err) = controller.remove_task(index) {
                log::warn!("cannot remove task: {err}");
            }
        }
    });

    adapter.on_toggle_task({
        let controller = controller.clone();

        move |index| {
            if let Err(err) = controller.toggle_task(index) {
                log::warn!("cannot toggle task: {err}");
            }
        }
    });

    controller.on_clear_input({
        let view_handle = view_handle.as_weak();

        move || {
            if let Some(view) = view_handle.upgrade() {
                view.global::<ui::TaskListAdapter>().set_draft(SharedString::new());
            }
        }
    });

    // the rebuilt list starts without a selection
    controller.on_refresh({
        let view_handle = view_handle.as_weak();

        move || {
            if let Some(view) = view_handle.upgrade() {
                view.global::<ui::TaskListAdapter>().set_selected_index(-1);
            }
        }
    });
}

fn map_description_to_item(description: SharedString) -> StandardListViewItem {
    StandardListViewItem::from(description.as_str())
}
