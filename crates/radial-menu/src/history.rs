use crate::button::CenterButtonSnapshot;

/// Rings and centre buttons shown before each forward transition.
///
/// The two stacks grow independently: drilling into a submenu that brings no
/// centre button of its own pushes a ring but no button. Each stack is popped
/// on its own and popping an empty stack yields `None`.
#[derive(Debug, Clone)]
pub struct History<S> {
    pies: Vec<Vec<S>>,
    buttons: Vec<CenterButtonSnapshot>,
}

impl<S> Default for History<S> {
    fn default() -> Self {
        Self {
            pies: Vec::new(),
            buttons: Vec::new(),
        }
    }
}

impl<S> History<S> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_pie(&mut self, slices: Vec<S>) {
        self.pies.push(slices);
    }

    pub fn push_button(&mut self, snapshot: CenterButtonSnapshot) {
        self.buttons.push(snapshot);
    }

    pub fn pop_pie(&mut self) -> Option<Vec<S>> {
        self.pies.pop()
    }

    pub fn pop_button(&mut self) -> Option<CenterButtonSnapshot> {
        self.buttons.pop()
    }

    pub fn peek_pie(&self) -> Option<&[S]> {
        self.pies.last().map(Vec::as_slice)
    }

    pub fn peek_button(&self) -> Option<&CenterButtonSnapshot> {
        self.buttons.last()
    }

    pub fn pie_depth(&self) -> usize {
        self.pies.len()
    }

    pub fn button_depth(&self) -> usize {
        self.buttons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pies.is_empty() && self.buttons.is_empty()
    }

    pub fn clear(&mut self) {
        self.pies.clear();
        self.buttons.clear();
    }
}
