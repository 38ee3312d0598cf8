use derive_more::Display;
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;
use strum::{EnumIter, IntoStaticStr};

/// Observable settings of a menu. One change event is raised per property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, IntoStaticStr, strum::Display)]
pub enum Property {
    CenterButtonBackground,
    CenterButtonBorder,
    CenterButtonIcon,
    CenterButtonSize,
    CenterButtonFontSize,
    CenterButtonNavigation,
    StartAngle,
    Diameter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEvent {
    PropertyChanged(Property),
    /// The ring layout was recomputed and should be repainted.
    Redraw { slices: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display("subscription#{_0}")]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&MenuEvent)>;

/// Synchronous fan-out of menu events to subscribed listeners.
///
/// Clones share the same listener list, so the ring and the centre button of
/// one menu report through a single channel. Events raised by a listener are
/// queued and delivered, in order, once the current event has reached every
/// listener.
#[derive(Clone, Default)]
pub struct Notifier {
    listeners: Rc<RefCell<Vec<(SubscriptionId, Listener)>>>,
    next_id: Rc<Cell<u64>>,
    pending: Rc<RefCell<VecDeque<MenuEvent>>>,
    dispatching: Rc<Cell<bool>>,
}

impl Notifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self, listener: impl FnMut(&MenuEvent) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.listeners.borrow_mut().push((id, Box::new(listener)));
        id
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut listeners = self.listeners.borrow_mut();
        let before = listeners.len();
        listeners.retain(|(l, _)| *l != id);
        listeners.len() != before
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    pub fn emit(&self, event: MenuEvent) {
        self.pending.borrow_mut().push_back(event);
        if self.dispatching.replace(true) {
            return;
        }

        loop {
            let Some(event) = self.pending.borrow_mut().pop_front() else {
                break;
            };
            self.dispatch(&event);
        }
        self.dispatching.set(false);
    }

    fn dispatch(&self, event: &MenuEvent) {
        // Listeners run outside the borrow so they may subscribe more listeners.
        let mut active = std::mem::take(&mut *self.listeners.borrow_mut());
        for (_, listener) in active.iter_mut() {
            listener(event);
        }

        let mut listeners = self.listeners.borrow_mut();
        let added = std::mem::take(&mut *listeners);
        active.extend(added);
        *listeners = active;
    }

    pub fn property_changed(&self, property: Property) {
        log::trace!("{} changed", property);
        self.emit(MenuEvent::PropertyChanged(property));
    }
}

impl std::fmt::Debug for Notifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Notifier")
            .field("listeners", &self.listener_count())
            .finish()
    }
}

/// Assigns `value` to `field` and raises `property` only when they differ.
pub(crate) fn set_field<T: PartialEq>(
    notifier: &Notifier,
    field: &mut T,
    value: T,
    property: Property,
) -> bool {
    if *field == value {
        return false;
    }
    *field = value;
    notifier.property_changed(property);
    true
}

#[cfg(test)]
pub(crate) fn record(notifier: &Notifier) -> Rc<RefCell<Vec<MenuEvent>>> {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = seen.clone();
    notifier.subscribe(move |e| sink.borrow_mut().push(*e));
    seen
}
