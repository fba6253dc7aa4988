#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    StrategicGoals,
    LiveCommandCenter,
    AiAnalytics,
    SystemDeployment,
}

impl Page {
    pub const ALL: [Page; 4] = [
        Page::StrategicGoals,
        Page::LiveCommandCenter,
        Page::AiAnalytics,
        Page::SystemDeployment,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Page::StrategicGoals => "Strategic Goals",
            Page::LiveCommandCenter => "Live Command Center",
            Page::AiAnalytics => "AI Analytics",
            Page::SystemDeployment => "System Deployment",
        }
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::StrategicGoals
    }
}

#[derive(Default)]
pub struct UiState {
    pub page: Page,
    pub show_about: bool,
    pub last_error: Option<String>,
}
