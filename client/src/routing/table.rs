//! Ordered route table and path resolution.
//!
//! SYSTEM CONTEXT
//! ==============
//! `Switch` resolves the current pathname through [`RouteTable::resolve`] and
//! renders exactly one leaf view, redirect, or placeholder. Resolution is a
//! pure function of (path, auth status, client URL) so it can be exercised
//! without a browser.
//!
//! DESIGN
//! ======
//! First match in declaration order wins. Literal routes come first; the
//! `:communitySlug` wildcards sit at the end so they only see paths no named
//! route claimed. Gated routes carry their signed-out fallback inline.

#[cfg(test)]
#[path = "table_test.rs"]
mod table_test;

use std::sync::LazyLock;

use super::params::RouteParams;
use super::pattern::{PathPattern, PatternError};
use super::view::{Placeholder, View};
use crate::state::auth::AuthStatus;

/// Where a redirect sends the browser.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RedirectTo {
    /// A fixed in-app path.
    Path(&'static str),
    /// `/login` carrying `?r=<client url><path>` so login returns here.
    LoginReturningTo(&'static str),
}

impl RedirectTo {
    /// Concrete location for this redirect.
    #[must_use]
    pub fn location(self, client_url: &str) -> String {
        match self {
            Self::Path(path) => path.to_owned(),
            Self::LoginReturningTo(path) => format!("/login?r={client_url}{path}"),
        }
    }
}

/// What a gated route renders for signed-out visitors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fallback {
    Public(View),
    Redirect(RedirectTo),
}

/// What a matched route does.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Target {
    View(View),
    /// Render `view` for signed-in viewers, `fallback` otherwise.
    Gated { view: View, fallback: Fallback },
    Redirect(RedirectTo),
}

/// Static route declaration.
#[derive(Clone, Copy, Debug)]
pub struct RouteDef {
    pub pattern: &'static str,
    pub exact: bool,
    pub target: Target,
}

const fn prefix(pattern: &'static str, target: Target) -> RouteDef {
    RouteDef { pattern, exact: false, target }
}

const fn exact(pattern: &'static str, target: Target) -> RouteDef {
    RouteDef { pattern, exact: true, target }
}

const fn gated(view: View, fallback: Fallback) -> Target {
    Target::Gated { view, fallback }
}

const TO_LOGIN: Fallback = Fallback::Redirect(RedirectTo::Path("/login"));
const PAGES: Target = Target::View(View::Pages);

/// The application's routes in match priority order.
pub static SPECTRUM_ROUTES: &[RouteDef] = &[
    exact("/", gated(View::Dashboard, Fallback::Public(View::Pages))),
    exact("/home", gated(View::Dashboard, Fallback::Redirect(RedirectTo::Path("/")))),
    // Public business pages
    prefix("/about", PAGES),
    prefix("/contact", PAGES),
    prefix("/terms", PAGES),
    prefix("/privacy", PAGES),
    prefix("/terms.html", PAGES),
    prefix("/privacy.html", PAGES),
    prefix("/code-of-conduct", PAGES),
    prefix("/pricing", PAGES),
    prefix("/support", PAGES),
    prefix("/features", PAGES),
    // App pages
    prefix(
        "/new/community",
        gated(View::NewCommunity, Fallback::Redirect(RedirectTo::LoginReturningTo("/new/community"))),
    ),
    prefix("/new/thread", gated(View::Composer, TO_LOGIN)),
    prefix("/new/search", Target::View(View::Search)),
    prefix("/new", Target::Redirect(RedirectTo::Path("/new/community"))),
    prefix("/login", Target::View(View::Login)),
    prefix("/explore", Target::View(View::Explore)),
    prefix("/messages/new", gated(View::DirectMessages, TO_LOGIN)),
    prefix("/messages/:threadId", gated(View::DirectMessages, TO_LOGIN)),
    prefix("/messages", gated(View::DirectMessages, TO_LOGIN)),
    prefix("/thread/:threadId", Target::View(View::Thread)),
    prefix("/thread", Target::Redirect(RedirectTo::Path("/"))),
    exact("/users", Target::Redirect(RedirectTo::Path("/"))),
    exact("/users/:username", Target::View(View::UserProfile)),
    exact("/users/:username/settings", gated(View::UserSettings, TO_LOGIN)),
    prefix("/notifications", gated(View::Notifications, TO_LOGIN)),
    // Community and channel slugs last so none of the named routes above are shadowed.
    prefix("/:communitySlug/:channelSlug/settings", gated(View::ChannelSettings, TO_LOGIN)),
    prefix("/:communitySlug/:channelSlug/join/:token", Target::View(View::PrivateChannelJoin)),
    prefix("/:communitySlug/:channelSlug/join", Target::View(View::PrivateChannelJoin)),
    prefix("/:communitySlug/settings", gated(View::CommunitySettings, TO_LOGIN)),
    prefix("/:communitySlug/login", Target::View(View::CommunityLogin)),
    prefix("/:communitySlug/:channelSlug", Target::View(View::Channel)),
    prefix("/:communitySlug", Target::View(View::Community)),
];

/// Outcome of resolving a path for a viewer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Resolution {
    Render { view: View, params: RouteParams },
    Redirect(String),
    /// Gated route while the viewer's session is still loading.
    Pending(Placeholder),
    NotFound,
}

/// A parsed route.
#[derive(Clone, Debug)]
pub struct Route {
    pattern: PathPattern,
    exact: bool,
    target: Target,
}

impl Route {
    #[must_use]
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }
}

/// The first route matching a path, with its position and captures.
#[derive(Clone, Debug)]
pub struct RouteMatch<'a> {
    pub index: usize,
    pub route: &'a Route,
    pub params: RouteParams,
}

/// Ordered, parsed route table.
#[derive(Clone, Debug)]
pub struct RouteTable {
    routes: Vec<Route>,
}

static SPECTRUM_TABLE: LazyLock<RouteTable> =
    LazyLock::new(|| RouteTable::new(SPECTRUM_ROUTES).expect("built-in route patterns are valid"));

impl RouteTable {
    /// Parse route declarations, keeping their order.
    ///
    /// # Errors
    ///
    /// Returns the first [`PatternError`] among the declarations.
    pub fn new(defs: &[RouteDef]) -> Result<Self, PatternError> {
        let routes = defs
            .iter()
            .map(|def| {
                Ok(Route { pattern: PathPattern::parse(def.pattern)?, exact: def.exact, target: def.target })
            })
            .collect::<Result<Vec<_>, PatternError>>()?;
        Ok(Self { routes })
    }

    /// The application's route table.
    #[must_use]
    pub fn spectrum() -> &'static Self {
        &SPECTRUM_TABLE
    }

    #[must_use]
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// First route matching `path` in declaration order.
    #[must_use]
    pub fn find(&self, path: &str) -> Option<RouteMatch<'_>> {
        self.routes.iter().enumerate().find_map(|(index, route)| {
            route
                .pattern
                .matches(path, route.exact)
                .map(|params| RouteMatch { index, route, params })
        })
    }

    /// Resolve `path` for a viewer into what the switch should render.
    #[must_use]
    pub fn resolve(&self, path: &str, status: AuthStatus, client_url: &str) -> Resolution {
        let Some(matched) = self.find(path) else {
            return Resolution::NotFound;
        };
        let params = matched.params;

        match matched.route.target {
            Target::View(view) => Resolution::Render { view, params },
            Target::Redirect(to) => Resolution::Redirect(to.location(client_url)),
            Target::Gated { view, fallback } => match status {
                AuthStatus::SignedIn => Resolution::Render { view, params },
                // Server renders never know the session, so gated routes
                // render their placeholder there and settle after hydration.
                AuthStatus::Loading => Resolution::Pending(view.placeholder()),
                AuthStatus::SignedOut => match fallback {
                    Fallback::Public(public) => Resolution::Render { view: public, params },
                    Fallback::Redirect(to) => Resolution::Redirect(to.location(client_url)),
                },
            },
        }
    }
}
