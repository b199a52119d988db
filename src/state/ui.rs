//! Local UI chrome state (active page, sidebar collapse).

/// Pages reachable from the sidebar. The shell renders whichever page is
/// selected; there is no URL routing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ActivePage {
    #[default]
    Overview,
    Documents,
    Research,
    Analytics,
    Clients,
    Simulation,
    Integrations,
    Settings,
}

impl ActivePage {
    /// Sidebar order.
    pub const ALL: [ActivePage; 8] = [
        ActivePage::Overview,
        ActivePage::Documents,
        ActivePage::Research,
        ActivePage::Analytics,
        ActivePage::Clients,
        ActivePage::Simulation,
        ActivePage::Integrations,
        ActivePage::Settings,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ActivePage::Overview => "Dashboard",
            ActivePage::Documents => "Documents",
            ActivePage::Research => "Research",
            ActivePage::Analytics => "Analytics",
            ActivePage::Clients => "Clients",
            ActivePage::Simulation => "Simulation",
            ActivePage::Integrations => "Integrations",
            ActivePage::Settings => "Settings",
        }
    }
}

/// Shell-level presentation state shared through context.
#[derive(Clone, Copy, Debug, Default)]
pub struct UiState {
    pub active_page: ActivePage,
    pub sidebar_collapsed: bool,
}
