//! Client-side navigation: the route table, the menu structure, and tab
//! strip state.

use std::collections::BTreeMap;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum PageId {
    Home,
    Portfolio,
    Objective,
    ProductDevelopment,
    ItConsulting,
    ItResourcing,
    Trainings,
    RealTimeInternship,
    CorporateTraining,
    Jobs,
    Support,
}

/// Maps paths to pages. No network contract; unresolved paths are the view
/// layer's not-found case.
#[derive(Clone, Debug)]
pub struct RouteTable {
    routes: BTreeMap<&'static str, PageId>,
}

impl RouteTable {
    /// The site's full route table.
    pub fn site() -> Self {
        let routes = BTreeMap::from([
            ("/", PageId::Home),
            ("/portfolio", PageId::Portfolio),
            ("/objective", PageId::Objective),
            ("/product-development", PageId::ProductDevelopment),
            ("/it-consulting", PageId::ItConsulting),
            ("/it-resourcing", PageId::ItResourcing),
            ("/trainings", PageId::Trainings),
            ("/real-time-internship", PageId::RealTimeInternship),
            ("/corporate-training", PageId::CorporateTraining),
            ("/jobs", PageId::Jobs),
            ("/support", PageId::Support),
        ]);
        Self { routes }
    }

    pub fn resolve(&self, path: &str) -> Option<PageId> {
        self.routes.get(normalize(path)).copied()
    }

    pub fn path_of(&self, page: PageId) -> Option<&'static str> {
        self.routes
            .iter()
            .find_map(|(path, candidate)| (*candidate == page).then_some(*path))
    }

    /// The active-link rule: a link is active when the current path resolves
    /// to its page.
    pub fn is_active(&self, current_path: &str, page: PageId) -> bool {
        self.resolve(current_path) == Some(page)
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

// Trailing slashes are not significant except for the root path.
fn normalize(path: &str) -> &str {
    if path.len() > 1 {
        path.trim_end_matches('/')
    } else {
        path
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct NavLink {
    pub label: &'static str,
    pub page: PageId,
}

/// A collapsible dropdown section of the mobile menu. The `id` doubles as
/// the section's panel id in a [`crate::disclosure::MobileMenu`].
#[derive(Clone, Debug)]
pub struct NavSection {
    pub id: &'static str,
    pub label: &'static str,
    pub links: Vec<NavLink>,
}

/// The menu structure: three dropdown sections plus two flat links.
#[derive(Clone, Debug)]
pub struct NavTree {
    pub sections: Vec<NavSection>,
    pub links: Vec<NavLink>,
}

impl NavTree {
    pub fn site() -> Self {
        Self {
            sections: vec![
                NavSection {
                    id: "home",
                    label: "Home",
                    links: vec![
                        NavLink { label: "Main Home", page: PageId::Home },
                        NavLink { label: "Portfolio", page: PageId::Portfolio },
                        NavLink { label: "Objective", page: PageId::Objective },
                    ],
                },
                NavSection {
                    id: "services",
                    label: "Services",
                    links: vec![
                        NavLink { label: "Product Development", page: PageId::ProductDevelopment },
                        NavLink { label: "IT Consulting", page: PageId::ItConsulting },
                        NavLink { label: "IT Resourcing", page: PageId::ItResourcing },
                    ],
                },
                NavSection {
                    id: "trainings",
                    label: "Trainings",
                    links: vec![
                        NavLink { label: "Trainings/Internships", page: PageId::Trainings },
                        NavLink { label: "Real-Time Internship", page: PageId::RealTimeInternship },
                        NavLink { label: "Corporate Training", page: PageId::CorporateTraining },
                    ],
                },
            ],
            links: vec![
                NavLink { label: "Jobs", page: PageId::Jobs },
                NavLink { label: "Support", page: PageId::Support },
            ],
        }
    }

    pub fn section_ids(&self) -> Vec<&'static str> {
        self.sections.iter().map(|section| section.id).collect()
    }

    /// The mobile menu state matching this tree's sections.
    pub fn mobile_menu(&self) -> crate::disclosure::MobileMenu {
        crate::disclosure::MobileMenu::new(self.section_ids())
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TabItem {
    pub id: String,
    pub label: String,
    pub content: Option<String>,
}

impl TabItem {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            content: None,
        }
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }
}

/// Shown when the active tab has no panel content.
pub const NO_TAB_CONTENT: &str = "No content available.";

/// Active-tab state over an ordered tab list. With no explicit selection the
/// first tab is active; activating an unknown id is ignored.
#[derive(Clone, Debug, Default)]
pub struct TabStrip {
    items: Vec<TabItem>,
    active: Option<String>,
}

impl TabStrip {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn item(mut self, item: TabItem) -> Self {
        self.items.push(item);
        self
    }

    pub fn items(mut self, items: impl IntoIterator<Item = TabItem>) -> Self {
        self.items.extend(items);
        self
    }

    pub fn default_tab(mut self, id: impl Into<String>) -> Self {
        let id = id.into();
        if self.items.iter().any(|item| item.id == id) {
            self.active = Some(id);
        }
        self
    }

    pub fn activate(&mut self, id: &str) -> bool {
        if self.items.iter().any(|item| item.id == id) {
            self.active = Some(id.to_string());
            true
        } else {
            false
        }
    }

    pub fn active(&self) -> Option<&str> {
        self.active
            .as_deref()
            .or_else(|| self.items.first().map(|item| item.id.as_str()))
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active() == Some(id)
    }

    /// The active tab's panel content, falling back to [`NO_TAB_CONTENT`]
    /// when the tab carries none.
    pub fn active_content(&self) -> &str {
        self.active()
            .and_then(|id| self.items.iter().find(|item| item.id == id))
            .and_then(|item| item.content.as_deref())
            .unwrap_or(NO_TAB_CONTENT)
    }

    pub fn list(&self) -> &[TabItem] {
        &self.items
    }
}
