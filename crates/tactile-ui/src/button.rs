//! A clickable, labeled button.
use std::rc::Rc;

use tactile_core::*;

/// Elements whose interactivity can be switched off.
pub trait Disableable {
    /// Sets whether the element is disabled.
    fn disabled(self, disabled: bool) -> Self;
}

/// Configuration a button is rendered from.
///
/// The control keeps no state between renders: to change what a button
/// does, build a new configuration and render it again.
#[derive(Clone)]
pub struct ButtonConfig {
    label: String,
    enabled: bool,
    on_activate: Option<Callback>,
}

impl ButtonConfig {
    /// Returns an enabled button with the provided label and no handler.
    pub fn new(label: impl Into<String>) -> Self {
        let label = label.into();
        if label.trim().is_empty() {
            log::warn!("Button created with an empty label; it has no accessible name");
        }
        Self {
            label,
            enabled: true,
            on_activate: None,
        }
    }

    /// Sets whether the button dispatches activations.
    #[must_use]
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Sets the handler invoked once per activation while enabled.
    #[must_use]
    pub fn on_activate(mut self, f: impl Fn() + 'static) -> Self {
        self.on_activate = Some(Rc::new(f));
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Runs the handler if the button is enabled. Returns whether a handler ran.
    pub fn activate(&self) -> bool {
        if !self.enabled {
            log::debug!("Button '{}' is disabled; activation suppressed", self.label);
            return false;
        }
        match &self.on_activate {
            Some(cb) => {
                log::debug!("Button '{}' activated", self.label);
                cb();
                true
            }
            None => false,
        }
    }

    /// Produces the view for this configuration.
    pub fn render(self) -> View {
        let sem = Semantics::new(Role::Button)
            .label(self.label.clone())
            .enabled(self.enabled);
        View::new(
            0,
            ViewKind::Button {
                label: self.label,
                enabled: self.enabled,
                on_click: self.on_activate,
            },
        )
        .semantics(sem)
    }
}

impl std::fmt::Debug for ButtonConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ButtonConfig")
            .field("label", &self.label)
            .field("enabled", &self.enabled)
            .field("on_activate", &self.on_activate.as_ref().map(|_| "<callback>"))
            .finish()
    }
}

impl Disableable for ButtonConfig {
    fn disabled(self, disabled: bool) -> Self {
        self.enabled(!disabled)
    }
}

impl Disableable for View {
    fn disabled(mut self, disabled: bool) -> Self {
        if let ViewKind::Button { enabled, .. } = &mut self.kind {
            *enabled = !disabled;
            if let Some(sem) = &mut self.semantics {
                sem.enabled = !disabled;
            }
        }
        self
    }
}

pub fn Button(label: impl Into<String>, on_click: impl Fn() + 'static) -> View {
    ButtonConfig::new(label).on_activate(on_click).render()
}
