// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use std::cell::Cell;

type Handler<Arguments> = Box<dyn FnMut(&Arguments)>;

/// A single slot a controller uses to notify the view.
///
/// Registering a new handler replaces the previous one. Invoking a callback without a handler
/// does nothing.
pub struct Callback<Arguments: ?Sized> {
    handler: Cell<Option<Handler<Arguments>>>,
}

impl<Arguments: ?Sized> Default for Callback<Arguments> {
    fn default() -> Self {
        Self { handler: Default::default() }
    }
}

impl<Arguments: ?Sized> Callback<Arguments> {
    pub fn on(&self, handler: impl FnMut(&Arguments) + 'static) {
        self.handler.set(Some(Box::new(handler)));
    }

    pub fn invoke(&self, arguments: &Arguments) {
        // taken out while running, so a handler that re-enters this callback is a no-op
        if let Some(mut handler) = self.handler.take() {
            handler(arguments);

            // keep a handler registered from within the call
            if let Some(replacement) = self.handler.take() {
                self.handler.set(Some(replacement));
            } else {
                self.handler.set(Some(handler));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    #[test]
    fn test_invoke() {
        let received = Rc::new(Cell::new(0));
        let callback: Callback<i32> = Callback::default();

        callback.on({
            let received = received.clone();
            move |value| received.set(received.get() + value)
        });
        callback.invoke(&3);
        callback.invoke(&2);

        assert_eq!(received.get(), 5);
    }

    #[test]
    fn test_invoke_without_handler() {
        let callback: Callback<()> = Callback::default();
        callback.invoke(&());
    }

    #[test]
    fn test_on_replaces_handler() {
        let received = Rc::new(Cell::new(""));
        let callback: Callback<()> = Callback::default();

        callback.on({
            let received = received.clone();
            move |()| received.set("first")
        });
        callback.on({
            let received = received.clone();
            move |()| received.set("second")
        });
        callback.invoke(&());

        assert_eq!(received.get(), "second");
    }
}
