//! Filter drawer visibility.

use vitrine_core::{MutableState, State};

#[derive(Clone)]
pub struct DrawerState {
    open: MutableState<bool>,
}

impl DrawerState {
    pub fn new() -> Self {
        Self {
            open: MutableState::new(false),
        }
    }

    pub fn open(&self) {
        self.open.set_value(true);
    }

    pub fn close(&self) {
        self.open.set_value(false);
    }

    pub fn toggle(&self) {
        self.open.update(|open| *open = !*open);
    }

    pub fn is_open(&self) -> bool {
        self.open.get()
    }

    pub fn state(&self) -> State<bool> {
        self.open.as_state()
    }
}

impl Default for DrawerState {
    fn default() -> Self {
        Self::new()
    }
}
