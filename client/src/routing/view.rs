//! Leaf views addressable by the route table and their loading placeholders.

#[cfg(test)]
#[path = "view_test.rs"]
mod view_test;

/// Every leaf view the switch can render.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum View {
    Dashboard,
    Pages,
    NewCommunity,
    Composer,
    Search,
    Login,
    Explore,
    DirectMessages,
    Thread,
    UserProfile,
    UserSettings,
    Notifications,
    ChannelSettings,
    PrivateChannelJoin,
    CommunitySettings,
    CommunityLogin,
    Channel,
    Community,
}

/// Loading state shown while a view suspends.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Placeholder {
    /// Render nothing.
    #[default]
    None,
    /// Small inline spinner.
    Spinner,
    /// Full-screen loading shell.
    Screen,
    Dashboard,
    DirectMessages,
    Thread,
}

impl View {
    /// Placeholder rendered while this view (or its data) is loading.
    #[must_use]
    pub fn placeholder(self) -> Placeholder {
        match self {
            Self::DirectMessages => Placeholder::DirectMessages,
            Self::Thread => Placeholder::Thread,
            Self::Dashboard => Placeholder::Dashboard,
            Self::Explore | Self::UserSettings | Self::CommunitySettings | Self::NewCommunity => Placeholder::Spinner,
            Self::UserProfile
            | Self::Community
            | Self::CommunityLogin
            | Self::Channel
            | Self::Notifications
            | Self::ChannelSettings
            | Self::Search => Placeholder::Screen,
            Self::Pages | Self::Login | Self::PrivateChannelJoin | Self::Composer => Placeholder::None,
        }
    }

    /// Stable name used in logs and `data-view` attributes.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::Pages => "pages",
            Self::NewCommunity => "new-community",
            Self::Composer => "composer",
            Self::Search => "search",
            Self::Login => "login",
            Self::Explore => "explore",
            Self::DirectMessages => "direct-messages",
            Self::Thread => "thread",
            Self::UserProfile => "user-profile",
            Self::UserSettings => "user-settings",
            Self::Notifications => "notifications",
            Self::ChannelSettings => "channel-settings",
            Self::PrivateChannelJoin => "private-channel-join",
            Self::CommunitySettings => "community-settings",
            Self::CommunityLogin => "community-login",
            Self::Channel => "channel",
            Self::Community => "community",
        }
    }
}

/// Public marketing pages served by [`View::Pages`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageKind {
    Splash,
    About,
    Contact,
    Terms,
    Privacy,
    CodeOfConduct,
    Pricing,
    Support,
    Features,
}

impl PageKind {
    /// Select the page for a pathname; `None` when the path is not a page.
    #[must_use]
    pub fn from_path(path: &str) -> Option<Self> {
        let path = super::pattern::strip_query(path);
        let first = path.trim_start_matches('/').split('/').next().unwrap_or_default();
        let page = match first.to_ascii_lowercase().as_str() {
            "" => Self::Splash,
            "about" => Self::About,
            "contact" => Self::Contact,
            "terms" | "terms.html" => Self::Terms,
            "privacy" | "privacy.html" => Self::Privacy,
            "code-of-conduct" => Self::CodeOfConduct,
            "pricing" => Self::Pricing,
            "support" => Self::Support,
            "features" => Self::Features,
            _ => return None,
        };
        Some(page)
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Splash => "Spectrum",
            Self::About => "About",
            Self::Contact => "Contact",
            Self::Terms => "Terms of Service",
            Self::Privacy => "Privacy Policy",
            Self::CodeOfConduct => "Code of Conduct",
            Self::Pricing => "Pricing",
            Self::Support => "Support",
            Self::Features => "Features",
        }
    }
}
