//! Console view port: where the console state is displayed.

use crate::state::ConsoleState;

/// Receives a snapshot of the console state after every change.
pub trait ConsoleView {
    /// Display `state`. Called synchronously; must not call back into the
    /// console.
    fn render(&self, state: &ConsoleState);
}

impl<T: ConsoleView + ?Sized> ConsoleView for std::rc::Rc<T> {
    fn render(&self, state: &ConsoleState) {
        (**self).render(state);
    }
}
