use crate::catalog::{Catalog, CatalogError};
use crate::config::{self, Config, ConfigError};
use crate::events::AppEvent;
use crate::item::{Action, ExecCommand, MenuItem};
use radial_menu::{Activation, Gesture, MenuError, MenuEvent, Navigation, Point, RadialMenu};
use std::cell::Cell;
use std::path::PathBuf;
use std::rc::Rc;
use thiserror::Error;

const SENDER: &str = "shell";

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    Menu(#[from] MenuError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// What the host loop should do after an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Idle,
    Redraw,
    Run(ExecCommand),
    Quit,
}

pub struct AppModel {
    menu: RadialMenu<MenuItem>,
    catalog: Catalog,
    config_path: Option<PathBuf>,
    needs_redraw: Rc<Cell<bool>>,
    activations: Rc<Cell<u64>>,
}

impl AppModel {
    pub fn new(config: &Config, config_path: Option<PathBuf>) -> Result<Self, AppError> {
        let catalog = Catalog::from_config(config)?;
        let menu = RadialMenu::with_settings(&config.settings)?;

        let mut model = Self {
            menu,
            catalog,
            config_path,
            needs_redraw: Rc::new(Cell::new(false)),
            activations: Rc::new(Cell::new(0)),
        };
        model.connect();
        model.show_root(config);
        Ok(model)
    }

    fn connect(&mut self) {
        let needs_redraw = self.needs_redraw.clone();
        self.menu.subscribe(move |event| {
            if let MenuEvent::PropertyChanged(property) = event {
                log::debug!("{} changed", property);
            }
            needs_redraw.set(true);
        });

        let activations = self.activations.clone();
        self.menu.on_center_activated(move |activation| {
            activations.set(activations.get() + 1);
            log::debug!(
                "Center activated by {} ({})",
                activation.sender,
                activation.gesture
            );
        });
    }

    fn show_root(&mut self, config: &Config) {
        let root = self.catalog.root_page().clone();
        let center = root
            .center
            .clone()
            .unwrap_or_else(|| config.settings.center.snapshot());

        self.menu.change_pie(&root.slices, false);
        self.menu.change_button(&center, false);
    }

    pub fn menu(&self) -> &RadialMenu<MenuItem> {
        &self.menu
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn activations(&self) -> u64 {
        self.activations.get()
    }

    /// Reports and clears a pending repaint request.
    pub fn take_redraw(&self) -> bool {
        self.needs_redraw.replace(false)
    }

    pub fn update(&mut self, event: AppEvent) -> Result<Outcome, AppError> {
        match event {
            AppEvent::Show => {
                self.needs_redraw.set(false);
                return Ok(Outcome::Redraw);
            }
            AppEvent::Quit => return Ok(Outcome::Quit),
            AppEvent::Select(index) => {
                if let Some(command) = self.select(index)? {
                    return Ok(Outcome::Run(command));
                }
            }
            AppEvent::Center => {
                let activation = Activation::new(SENDER, Gesture::Key, Point::default());
                if let Navigation::Back { restored_button } =
                    self.menu.activate_center(&activation)
                {
                    log::debug!("Went back (center button restored: {})", restored_button);
                }
            }
            AppEvent::Add(label) => self.menu.add_slice(MenuItem::plain(label)),
            AppEvent::Diameter(d) => self.menu.set_diameter(d)?,
            AppEvent::Angle(a) => self.menu.set_start_angle(a)?,
            AppEvent::Navigation(enabled) => self.menu.set_navigation_enabled(enabled),
            AppEvent::Reload => self.reload()?,
        }

        Ok(if self.take_redraw() {
            Outcome::Redraw
        } else {
            Outcome::Idle
        })
    }

    fn select(&mut self, index: usize) -> Result<Option<ExecCommand>, AppError> {
        let Some(item) = self.menu.pie().slices().get(index) else {
            log::warn!(
                "No slice {} (ring has {})",
                index,
                self.menu.pie().len()
            );
            return Ok(None);
        };

        match item.action.clone() {
            Action::Open(id) => {
                let page = self.catalog.page(&id)?.clone();
                log::debug!("Opening menu '{}'", id);
                self.menu.open(&page);
                Ok(None)
            }
            Action::Run(command) => {
                log::info!("Running '{}' from slice '{}'", command, item.label);
                Ok(Some(command))
            }
            Action::Nothing => Ok(None),
        }
    }

    /// Re-reads the configuration and starts over at the root menu. Nothing
    /// changes unless the new configuration loads completely.
    fn reload(&mut self) -> Result<(), AppError> {
        let config = config::load_config(self.config_path.as_deref())?;
        let catalog = Catalog::from_config(&config)?;
        self.menu.apply_settings(&config.settings)?;

        self.catalog = catalog;
        self.menu.reset_history();
        self.show_root(&config);
        log::info!("Configuration reloaded");
        Ok(())
    }
}
