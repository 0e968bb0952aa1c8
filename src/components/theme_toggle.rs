//! Light/dark toggle wired to the body class and the toggle button.
//!
//! The stored preference is applied at load even when the page has no
//! toggle button; the click handler is only attached when it exists.

use std::cell::RefCell;
use std::rc::Rc;

use web_sys::{Document, Element, HtmlElement};

use crate::config::ThemeConfig;
use crate::error::ControllerError;
use crate::state::theme::{ThemeState, ThemeSurface, apply_theme};
use crate::util::dom;
use crate::util::storage::{PreferenceStore, browser_store};

struct DomThemeSurface {
    body: Option<HtmlElement>,
    toggle: Option<Element>,
    icon_selector: String,
    dark_class: String,
}

impl ThemeSurface for DomThemeSurface {
    fn set_page_dark(&mut self, dark: bool) -> Result<(), ControllerError> {
        let body = self.body.as_ref().ok_or(ControllerError::Unavailable("document.body"))?;
        if dark {
            body.class_list().add_1(&self.dark_class)?;
        } else {
            body.class_list().remove_1(&self.dark_class)?;
        }
        Ok(())
    }

    fn set_toggle_icon(&mut self, class: &str) -> Result<(), ControllerError> {
        let Some(toggle) = &self.toggle else {
            return Ok(());
        };
        if let Some(icon) = toggle.query_selector(&self.icon_selector)? {
            icon.set_class_name(class);
        }
        Ok(())
    }

    fn set_toggle_title(&mut self, title: &str) -> Result<(), ControllerError> {
        if let Some(toggle) = &self.toggle {
            toggle.set_attribute("title", title)?;
        }
        Ok(())
    }
}

struct ThemeController {
    theme: ThemeState,
    store: Box<dyn PreferenceStore>,
    surface: DomThemeSurface,
    storage_key: String,
}

impl ThemeController {
    fn render(&mut self) -> Result<(), ControllerError> {
        apply_theme(&mut self.surface, &self.theme.visuals())
    }

    fn on_click(&mut self) -> Result<(), ControllerError> {
        if let Err(err) = self.theme.toggle(self.store.as_mut(), &self.storage_key) {
            log::warn!("theme toggle: preference not saved: {err}");
        }
        self.render()
    }
}

pub fn install(doc: &Document, config: &ThemeConfig) -> Result<(), ControllerError> {
    let store = browser_store();
    let theme = ThemeState::load(store.as_ref(), &config.storage_key);
    let toggle = doc.get_element_by_id(&config.toggle_id);
    let mut controller = ThemeController {
        theme,
        store,
        surface: DomThemeSurface {
            body: doc.body(),
            toggle: toggle.clone(),
            icon_selector: config.icon_selector.clone(),
            dark_class: config.dark_class.clone(),
        },
        storage_key: config.storage_key.clone(),
    };
    controller.render()?;
    log::debug!("theme toggle: loaded dark={}", theme.dark);

    let Some(toggle) = toggle else {
        log::debug!("theme toggle: #{} not on this page", config.toggle_id);
        return Ok(());
    };
    let controller = Rc::new(RefCell::new(controller));
    dom::listen(&toggle, "click", move |_event| {
        if let Err(err) = controller.borrow_mut().on_click() {
            log::warn!("theme toggle: {err}");
        }
    })
}
