//! Open/closed state for collapsible panels: the FAQ accordion and the
//! mobile menu's dropdown sections.

use std::collections::BTreeMap;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Disclosure {
    #[default]
    Closed,
    Open,
}

impl Disclosure {
    pub fn is_open(self) -> bool {
        self == Disclosure::Open
    }

    pub fn toggled(self) -> Self {
        match self {
            Disclosure::Closed => Disclosure::Open,
            Disclosure::Open => Disclosure::Closed,
        }
    }

    pub fn toggle(&mut self) {
        *self = self.toggled();
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DisclosureMode {
    /// At most one panel open; opening a panel closes its siblings.
    Exclusive,
    /// Panels toggle freely and never affect each other.
    Independent,
}

/// A named set of disclosure panels sharing one mode.
#[derive(Clone, Debug)]
pub struct DisclosureGroup {
    mode: DisclosureMode,
    panels: BTreeMap<String, Disclosure>,
}

impl DisclosureGroup {
    pub fn new(mode: DisclosureMode) -> Self {
        Self {
            mode,
            panels: BTreeMap::new(),
        }
    }

    pub fn with_panels<I, S>(mode: DisclosureMode, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut group = Self::new(mode);
        for id in ids {
            group.register(id);
        }
        group
    }

    pub fn mode(&self) -> DisclosureMode {
        self.mode
    }

    pub fn register(&mut self, id: impl Into<String>) {
        self.panels.entry(id.into()).or_default();
    }

    pub fn is_open(&self, id: &str) -> bool {
        self.panels.get(id).copied().unwrap_or_default().is_open()
    }

    /// The open panel of an exclusive group, if any.
    pub fn open_panel(&self) -> Option<&str> {
        self.panels
            .iter()
            .find_map(|(id, state)| state.is_open().then_some(id.as_str()))
    }

    pub fn open_count(&self) -> usize {
        self.panels.values().filter(|state| state.is_open()).count()
    }

    pub fn toggle(&mut self, id: &str) {
        if self.is_open(id) {
            self.close(id);
        } else {
            self.open(id);
        }
    }

    pub fn open(&mut self, id: &str) {
        if !self.panels.contains_key(id) {
            return;
        }
        if self.mode == DisclosureMode::Exclusive {
            for state in self.panels.values_mut() {
                *state = Disclosure::Closed;
            }
        }
        if let Some(state) = self.panels.get_mut(id) {
            *state = Disclosure::Open;
        }
    }

    pub fn close(&mut self, id: &str) {
        if let Some(state) = self.panels.get_mut(id) {
            *state = Disclosure::Closed;
        }
    }

    pub fn close_all(&mut self) {
        for state in self.panels.values_mut() {
            *state = Disclosure::Closed;
        }
    }
}

/// The mobile navigation menu: a visibility flag over a set of independent
/// dropdown sections. Hiding the menu force-closes every section, so the
/// next open starts from a collapsed tree.
#[derive(Clone, Debug)]
pub struct MobileMenu {
    visibility: Disclosure,
    sections: DisclosureGroup,
}

impl MobileMenu {
    pub fn new<I, S>(section_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            visibility: Disclosure::Closed,
            sections: DisclosureGroup::with_panels(DisclosureMode::Independent, section_ids),
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visibility.is_open()
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visibility = if visible {
            Disclosure::Open
        } else {
            Disclosure::Closed
        };
        if !visible {
            self.sections.close_all();
        }
    }

    pub fn toggle_visibility(&mut self) {
        let next = !self.is_visible();
        self.set_visible(next);
    }

    pub fn toggle_section(&mut self, id: &str) {
        self.sections.toggle(id);
    }

    pub fn section_open(&self, id: &str) -> bool {
        self.sections.is_open(id)
    }

    pub fn sections(&self) -> &DisclosureGroup {
        &self.sections
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disclosure_toggle_roundtrip() {
        let mut panel = Disclosure::default();
        assert!(!panel.is_open());
        panel.toggle();
        assert!(panel.is_open());
        panel.toggle();
        assert!(!panel.is_open());
    }

    #[test]
    fn exclusive_group_keeps_at_most_one_panel_open() {
        let mut faq = DisclosureGroup::with_panels(
            DisclosureMode::Exclusive,
            ["faq-services", "faq-demo", "faq-location"],
        );

        faq.toggle("faq-services");
        assert!(faq.is_open("faq-services"));
        assert_eq!(faq.open_count(), 1);

        faq.toggle("faq-demo");
        assert!(faq.is_open("faq-demo"));
        assert!(!faq.is_open("faq-services"));
        assert_eq!(faq.open_count(), 1);

        // Toggling the open panel collapses everything.
        faq.toggle("faq-demo");
        assert_eq!(faq.open_panel(), None);
    }

    #[test]
    fn independent_group_panels_do_not_affect_each_other() {
        let mut sections =
            DisclosureGroup::with_panels(DisclosureMode::Independent, ["home", "services"]);
        sections.toggle("home");
        sections.toggle("services");
        assert!(sections.is_open("home"));
        assert!(sections.is_open("services"));
        assert_eq!(sections.open_count(), 2);
    }

    #[test]
    fn unknown_panel_ids_are_ignored() {
        let mut group = DisclosureGroup::with_panels(DisclosureMode::Exclusive, ["a"]);
        group.toggle("missing");
        assert!(!group.is_open("missing"));
        assert_eq!(group.open_count(), 0);
    }

    #[test]
    fn hiding_the_mobile_menu_closes_every_section() {
        let mut menu = MobileMenu::new(["home", "services", "trainings"]);
        menu.set_visible(true);
        menu.toggle_section("home");
        menu.toggle_section("trainings");
        assert!(menu.section_open("home"));
        assert!(menu.section_open("trainings"));

        menu.set_visible(false);
        assert!(!menu.is_visible());
        assert_eq!(menu.sections().open_count(), 0);
    }

    #[test]
    fn section_state_survives_while_menu_stays_visible() {
        let mut menu = MobileMenu::new(["home", "services"]);
        menu.set_visible(true);
        menu.toggle_section("services");
        menu.toggle_section("home");
        menu.toggle_section("home");
        assert!(menu.section_open("services"));
        assert!(!menu.section_open("home"));
    }
}
