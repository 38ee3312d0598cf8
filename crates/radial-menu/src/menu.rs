use crate::brush::Brush;
use crate::button::{CenterButton, CenterButtonSnapshot, Glyph};
use crate::error::MenuError;
use crate::geometry::Point;
use crate::history::History;
use crate::notify::{MenuEvent, Notifier, SubscriptionId};
use crate::pie::Pie;
use crate::settings::Settings;
use crate::slice::Slice;
use derive_more::Display;

/// A menu that can be switched to: a ring and, optionally, the centre button
/// that goes with it. Pages without a centre button leave the live one as is.
#[derive(Debug, Clone)]
pub struct MenuPage<S> {
    pub slices: Vec<S>,
    pub center: Option<CenterButtonSnapshot>,
}

impl<S> MenuPage<S> {
    pub fn new(slices: Vec<S>, center: CenterButtonSnapshot) -> Self {
        Self {
            slices,
            center: Some(center),
        }
    }

    pub fn ring_only(slices: Vec<S>) -> Self {
        Self {
            slices,
            center: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Gesture {
    Tap,
    #[display("click({_0})")]
    Click(u32),
    Key,
}

/// A centre-button gesture as reported by the host.
#[derive(Debug, Clone, PartialEq)]
pub struct Activation {
    pub sender: String,
    pub gesture: Gesture,
    pub position: Point,
}

impl Activation {
    pub fn new(sender: impl Into<String>, gesture: Gesture, position: Point) -> Self {
        Self {
            sender: sender.into(),
            gesture,
            position,
        }
    }

    pub fn tap(sender: impl Into<String>) -> Self {
        Self::new(sender, Gesture::Tap, Point::default())
    }
}

/// What a centre-button activation did besides notifying handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Forwarded,
    Back { restored_button: bool },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display("handler#{_0}")]
pub struct HandlerId(u64);

type ActivationHandler = Box<dyn FnMut(&Activation)>;

/// Owns the live ring, the live centre button and the back-navigation history
/// of one menu instance.
pub struct RadialMenu<S: Slice> {
    pie: Pie<S>,
    button: CenterButton,
    history: History<S>,
    notifier: Notifier,
    handlers: Vec<(HandlerId, ActivationHandler)>,
    next_handler: u64,
}

impl<S: Slice> Default for RadialMenu<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Slice> RadialMenu<S> {
    pub fn new() -> Self {
        let notifier = Notifier::new();
        let mut pie = Pie::new(notifier.clone());
        let button = CenterButton::new(notifier.clone());
        pie.set_hole(f64::from(button.size()));

        Self {
            pie,
            button,
            history: History::new(),
            notifier,
            handlers: Vec::new(),
            next_handler: 0,
        }
    }

    pub fn with_settings(settings: &Settings) -> Result<Self, MenuError> {
        let mut menu = Self::new();
        menu.apply_settings(settings)?;
        Ok(menu)
    }

    /// Applies every configurable property. Dimensions are validated first so
    /// a rejected value leaves the menu untouched.
    pub fn apply_settings(&mut self, settings: &Settings) -> Result<(), MenuError> {
        crate::error::ensure_finite("diameter", settings.diameter)?;
        crate::error::ensure_finite("start angle", settings.start_angle)?;

        self.button.apply(&settings.center.snapshot());
        self.set_center_size(settings.center.size);
        self.button
            .set_navigation_enabled(settings.navigation_enabled);
        self.pie.set_start_angle(settings.start_angle)?;
        self.pie.set_diameter(settings.diameter)?;
        Ok(())
    }

    pub fn pie(&self) -> &Pie<S> {
        &self.pie
    }

    pub fn button(&self) -> &CenterButton {
        &self.button
    }

    pub fn history(&self) -> &History<S> {
        &self.history
    }

    pub fn notifier(&self) -> &Notifier {
        &self.notifier
    }

    pub fn subscribe(&self, listener: impl FnMut(&MenuEvent) + 'static) -> SubscriptionId {
        self.notifier.subscribe(listener)
    }

    pub fn add_slice(&mut self, slice: S) {
        self.pie.add(slice);
    }

    /// Switches to a whole other menu, remembering both the ring and the
    /// centre button for back-navigation.
    pub fn change_menu(&mut self, page: &MenuPage<S>) -> Result<(), MenuError> {
        let center = page.center.as_ref().ok_or(MenuError::MissingCenter)?;
        self.change_pie(&page.slices, true);
        self.change_button(center, true);
        Ok(())
    }

    /// Drills into `page`: a full menu change when it brings a centre button,
    /// otherwise only the ring changes.
    pub fn open(&mut self, page: &MenuPage<S>) {
        match &page.center {
            Some(center) => {
                self.change_pie(&page.slices, true);
                self.change_button(center, true);
            }
            None => self.change_pie(&page.slices, true),
        }
    }

    pub fn change_pie(&mut self, slices: &[S], store_previous: bool) {
        if store_previous {
            self.history.push_pie(self.pie.slices().to_vec());
        }
        log::debug!(
            "Changing ring: {} -> {} slices (stored: {})",
            self.pie.len(),
            slices.len(),
            store_previous
        );
        self.pie.replace_all(slices);
    }

    pub fn change_button(&mut self, snapshot: &CenterButtonSnapshot, store_previous: bool) {
        if store_previous {
            self.history.push_button(self.button.snapshot());
        }
        log::debug!(
            "Changing center button to '{}' (stored: {})",
            snapshot.icon,
            store_previous
        );
        self.button.apply(snapshot);
    }

    pub fn on_center_activated(&mut self, handler: impl FnMut(&Activation) + 'static) -> HandlerId {
        let id = HandlerId(self.next_handler);
        self.next_handler += 1;
        self.handlers.push((id, Box::new(handler)));
        id
    }

    pub fn remove_handler(&mut self, id: HandlerId) -> bool {
        let before = self.handlers.len();
        self.handlers.retain(|(h, _)| *h != id);
        self.handlers.len() != before
    }

    /// Handles a centre-button gesture. Registered handlers always see it
    /// first; then, if navigation is enabled and there is a ring to go back
    /// to, the previous ring (and button, if one was stored) is restored.
    pub fn activate_center(&mut self, activation: &Activation) -> Navigation {
        for (_, handler) in self.handlers.iter_mut() {
            handler(activation);
        }

        if !self.can_go_back() {
            log::trace!(
                "Center {} from {}: nothing to navigate",
                activation.gesture,
                activation.sender
            );
            return Navigation::Forwarded;
        }

        let Some(previous) = self.history.pop_pie() else {
            return Navigation::Forwarded;
        };
        self.change_pie(&previous, false);

        let restored_button = match self.history.pop_button() {
            Some(button) => {
                self.change_button(&button, false);
                true
            }
            None => false,
        };

        Navigation::Back { restored_button }
    }

    pub fn can_go_back(&self) -> bool {
        self.button.navigation_enabled() && self.history.pie_depth() > 0
    }

    /// `(rings, centre buttons)` currently stored for back-navigation.
    pub fn depth(&self) -> (usize, usize) {
        (self.history.pie_depth(), self.history.button_depth())
    }

    pub fn reset_history(&mut self) {
        self.history.clear();
    }

    pub fn set_diameter(&mut self, diameter: f64) -> Result<(), MenuError> {
        self.pie.set_diameter(diameter)
    }

    pub fn set_start_angle(&mut self, angle: f64) -> Result<(), MenuError> {
        self.pie.set_start_angle(angle)
    }

    pub fn set_navigation_enabled(&mut self, enabled: bool) {
        self.button.set_navigation_enabled(enabled);
    }

    pub fn set_center_size(&mut self, size: u32) {
        if self.button.set_size(size) {
            self.pie.set_hole(f64::from(size));
        }
    }

    pub fn set_center_background(&mut self, brush: Brush) {
        self.button.set_background(brush);
    }

    pub fn set_center_border(&mut self, brush: Brush) {
        self.button.set_border(brush);
    }

    pub fn set_center_icon(&mut self, icon: impl Into<Glyph>) {
        self.button.set_icon(icon);
    }

    pub fn set_center_font_size(&mut self, font_size: f64) {
        self.button.set_font_size(font_size);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::{Property, record};
    use crate::slice::testing::{Wedge, wedges};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn menu_with(names: &[&str]) -> RadialMenu<Wedge> {
        let mut menu = RadialMenu::new();
        for w in wedges(names) {
            menu.add_slice(w);
        }
        menu
    }

    fn look(icon: &str) -> CenterButtonSnapshot {
        CenterButtonSnapshot {
            icon: Glyph::from(icon),
            background: Brush::rgba(10, 20, 30, 255),
            ..CenterButtonSnapshot::default()
        }
    }

    fn tap() -> Activation {
        Activation::tap("test")
    }

    #[test]
    fn test_change_pie_without_storing_is_idempotent() {
        let mut menu = menu_with(&["a"]);
        let target = wedges(&["x", "y", "z"]);

        menu.change_pie(&target, false);
        assert_eq!(menu.pie().labels(), vec!["x", "y", "z"]);
        menu.change_pie(&target, false);
        assert_eq!(menu.pie().labels(), vec!["x", "y", "z"]);
        assert_eq!(menu.depth(), (0, 0));
    }

    #[test]
    fn test_round_trip_navigation() {
        let mut menu = menu_with(&["a", "b", "c"]);

        menu.change_pie(&wedges(&["s1"]), true);
        menu.change_pie(&wedges(&["s2", "s2b"]), true);
        assert_eq!(menu.depth(), (2, 0));

        assert_eq!(
            menu.activate_center(&tap()),
            Navigation::Back {
                restored_button: false
            }
        );
        assert_eq!(menu.pie().labels(), vec!["s1"]);
        menu.activate_center(&tap());
        assert_eq!(menu.pie().labels(), vec!["a", "b", "c"]);
        assert_eq!(menu.depth(), (0, 0));

        assert_eq!(menu.activate_center(&tap()), Navigation::Forwarded);
        assert_eq!(menu.pie().labels(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_independent_stack_depths() {
        let mut menu = menu_with(&["root"]);
        let original = menu.button().snapshot();

        menu.change_pie(&wedges(&["s1"]), true);
        menu.change_button(&look("b1"), true);
        menu.change_pie(&wedges(&["s2"]), true);
        assert_eq!(menu.depth(), (2, 1));

        assert_eq!(
            menu.activate_center(&tap()),
            Navigation::Back {
                restored_button: true
            }
        );
        assert_eq!(menu.pie().labels(), vec!["s1"]);
        assert_eq!(menu.button().snapshot(), original);
        assert_eq!(menu.depth(), (1, 0));

        assert_eq!(
            menu.activate_center(&tap()),
            Navigation::Back {
                restored_button: false
            }
        );
        assert_eq!(menu.pie().labels(), vec!["root"]);
        assert_eq!(menu.button().snapshot(), original);
        assert_eq!(menu.depth(), (0, 0));
    }

    #[test]
    fn test_ring_only_drill_leaves_button_untouched() {
        let mut menu = menu_with(&["root"]);
        menu.change_menu(&MenuPage::new(wedges(&["sub"]), look("sub")))
            .unwrap();
        menu.open(&MenuPage::ring_only(wedges(&["deeper"])));
        assert_eq!(menu.depth(), (2, 1));

        menu.activate_center(&tap());
        assert_eq!(menu.pie().labels(), vec!["sub"]);
        assert_eq!(menu.button().icon().as_str(), "sub");
    }

    #[test]
    fn test_disabled_navigation_only_forwards() {
        let mut menu = menu_with(&["a"]);
        menu.change_menu(&MenuPage::new(wedges(&["b"]), look("b")))
            .unwrap();
        menu.set_navigation_enabled(false);

        let calls = Rc::new(RefCell::new(0));
        let counter = calls.clone();
        menu.on_center_activated(move |_| *counter.borrow_mut() += 1);

        for _ in 0..3 {
            assert_eq!(menu.activate_center(&tap()), Navigation::Forwarded);
        }

        assert_eq!(*calls.borrow(), 3);
        assert_eq!(menu.depth(), (1, 1));
        assert_eq!(menu.pie().labels(), vec!["b"]);
        assert_eq!(menu.button().icon().as_str(), "b");
        assert!(!menu.can_go_back());
    }

    #[test]
    fn test_handlers_run_before_navigation() {
        let mut menu = menu_with(&["a"]);
        menu.change_pie(&wedges(&["b"]), true);

        let seen = Rc::new(RefCell::new(Vec::new()));
        for tag in ["first", "second"] {
            let seen = seen.clone();
            menu.on_center_activated(move |a| seen.borrow_mut().push((tag, a.sender.clone())));
        }
        let events = record(menu.notifier());

        menu.activate_center(&Activation::new(
            "pointer",
            Gesture::Click(1),
            Point::new(5.0, 5.0),
        ));

        assert_eq!(
            *seen.borrow(),
            vec![("first", "pointer".to_string()), ("second", "pointer".to_string())]
        );
        assert_eq!(*events.borrow(), vec![MenuEvent::Redraw { slices: 1 }]);
        assert_eq!(menu.pie().labels(), vec!["a"]);
    }

    #[test]
    fn test_remove_handler() {
        let mut menu: RadialMenu<Wedge> = RadialMenu::new();
        let id = menu.on_center_activated(|_| panic!("removed handler called"));
        assert!(menu.remove_handler(id));
        assert!(!menu.remove_handler(id));
        assert_eq!(menu.activate_center(&tap()), Navigation::Forwarded);
    }

    #[test]
    fn test_stored_ring_is_a_defensive_copy() {
        let mut menu = menu_with(&["a", "b", "c"]);
        menu.change_pie(&wedges(&["d", "e"]), true);
        menu.add_slice(wedges(&["f"]).remove(0));

        let stored: Vec<&str> = menu
            .history()
            .peek_pie()
            .unwrap()
            .iter()
            .map(Slice::label)
            .collect();
        assert_eq!(stored, vec!["a", "b", "c"]);
        assert_eq!(menu.pie().labels(), vec!["d", "e", "f"]);
    }

    #[test]
    fn test_stored_button_is_a_copy() {
        let mut menu: RadialMenu<Wedge> = RadialMenu::new();
        menu.change_button(&look("one"), true);
        menu.set_center_icon("edited");

        assert_eq!(menu.history().peek_button(), Some(&CenterButtonSnapshot::default()));
    }

    #[test]
    fn test_empty_ring_transition() {
        let mut menu = menu_with(&["a", "b"]);
        let events = record(menu.notifier());

        menu.change_pie(&[], false);

        assert!(menu.pie().is_empty());
        assert!(menu.pie().geometries().is_empty());
        assert_eq!(*events.borrow(), vec![MenuEvent::Redraw { slices: 0 }]);
    }

    #[test]
    fn test_change_menu_requires_center() {
        let mut menu = menu_with(&["a"]);
        let result = menu.change_menu(&MenuPage::ring_only(wedges(&["b"])));

        assert_eq!(result, Err(MenuError::MissingCenter));
        assert_eq!(menu.pie().labels(), vec!["a"]);
        assert_eq!(menu.depth(), (0, 0));
    }

    #[test]
    fn test_diameter_propagates_to_existing_slices() {
        let mut menu = menu_with(&["a", "b", "c"]);
        menu.set_diameter(200.0).unwrap();

        for slice in menu.pie().slices() {
            let geometry = slice.geometry.unwrap();
            assert_eq!(geometry.outer_radius, 100.0);
            assert_eq!(geometry.inner_radius, 30.0);
        }
    }

    #[test]
    fn test_center_size_moves_inner_edge() {
        let mut menu = menu_with(&["a", "b"]);
        menu.set_diameter(300.0).unwrap();
        let events = record(menu.notifier());

        menu.set_center_size(100);
        assert_eq!(menu.pie().geometries()[0].inner_radius, 50.0);
        assert_eq!(
            *events.borrow(),
            vec![
                MenuEvent::PropertyChanged(Property::CenterButtonSize),
                MenuEvent::Redraw { slices: 2 },
            ]
        );

        menu.set_center_size(100);
        assert_eq!(events.borrow().len(), 2);
    }

    #[test]
    fn test_settings_are_applied() {
        let mut settings = Settings::default();
        settings.diameter = 240.0;
        settings.start_angle = 0.0;
        settings.navigation_enabled = false;
        settings.center.icon = Glyph::from("menu");

        let menu: RadialMenu<Wedge> = RadialMenu::with_settings(&settings).unwrap();
        assert_eq!(menu.pie().diameter(), 240.0);
        assert_eq!(menu.pie().start_angle(), 0.0);
        assert!(!menu.button().navigation_enabled());
        assert_eq!(menu.button().icon().as_str(), "menu");

        settings.diameter = f64::NAN;
        assert!(RadialMenu::<Wedge>::with_settings(&settings).is_err());
    }
}
