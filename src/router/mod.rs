//! Page router: maps navigable paths to lazily-constructed page views.
//!
//! Four static paths are routed: `/`, `/papers`, `/papers/:id` and
//! `/stats`. Matching is segment-wise; a `:param` segment binds the
//! (percent-decoded) path segment under that name. There are no guards,
//! no redirects and no nested routes. A route's page is constructed on
//! first navigation and cached for the router's lifetime, so navigating
//! straight to a detail path never builds the other pages.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, OnceLock};

use crate::pages::{HomePage, Page, PaperDetailPage, PapersPage, StatsPage};

/// Parameters bound by a matched route (e.g. `id` for `/papers/:id`)
pub type RouteParams = HashMap<String, String>;

/// Deferred page constructor; runs at most once per route
type PageLoader = fn() -> Arc<dyn Page>;

/// One entry of the route table
pub struct Route {
    pattern: &'static str,
    name: &'static str,
    loader: PageLoader,
    cell: OnceLock<Arc<dyn Page>>,
}

impl Route {
    pub fn new(pattern: &'static str, name: &'static str, loader: PageLoader) -> Self {
        Self {
            pattern,
            name,
            loader,
            cell: OnceLock::new(),
        }
    }

    /// Route name (e.g. "paper-detail")
    pub fn name(&self) -> &str {
        self.name
    }

    /// Path pattern (e.g. "/papers/:id")
    pub fn pattern(&self) -> &str {
        self.pattern
    }

    /// The route's page, constructing it on first use
    pub fn page(&self) -> Arc<dyn Page> {
        Arc::clone(self.cell.get_or_init(self.loader))
    }

    /// Whether the page has been constructed yet
    pub fn is_loaded(&self) -> bool {
        self.cell.get().is_some()
    }

    /// Match a concrete path against this route's pattern
    fn matches(&self, path: &str) -> Option<RouteParams> {
        let pattern_segments = segments(self.pattern);
        let path_segments = segments(path);
        if pattern_segments.len() != path_segments.len() {
            return None;
        }

        let mut params = RouteParams::new();
        for (pattern_segment, path_segment) in pattern_segments.iter().zip(&path_segments) {
            if let Some(name) = pattern_segment.strip_prefix(':') {
                let value = urlencoding::decode(path_segment)
                    .map(|decoded| decoded.into_owned())
                    .unwrap_or_else(|_| (*path_segment).to_string());
                params.insert(name.to_string(), value);
            } else if pattern_segment != path_segment {
                return None;
            }
        }

        Some(params)
    }
}

impl fmt::Debug for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Route")
            .field("pattern", &self.pattern)
            .field("name", &self.name)
            .field("loaded", &self.is_loaded())
            .finish()
    }
}

/// A resolved navigation target
#[derive(Debug)]
pub struct RouteMatch<'a> {
    pub route: &'a Route,
    pub params: RouteParams,
}

/// Router over the application's navigable paths.
///
/// The router owns the navigation history: `navigate` pushes the visited
/// path, `back` pops it. Nothing else is stateful beyond the per-route
/// page cells.
#[derive(Debug)]
pub struct Router {
    routes: Vec<Route>,
    history: Vec<String>,
}

impl Router {
    /// Router with the application's route table
    pub fn new() -> Self {
        Self::with_routes(vec![
            Route::new("/", "home", || Arc::new(HomePage::new())),
            Route::new("/papers", "papers", || Arc::new(PapersPage::new())),
            Route::new("/papers/:id", "paper-detail", || {
                Arc::new(PaperDetailPage::new())
            }),
            Route::new("/stats", "stats", || Arc::new(StatsPage::new())),
        ])
    }

    /// Router over a custom route table
    pub fn with_routes(routes: Vec<Route>) -> Self {
        Self {
            routes,
            history: Vec::new(),
        }
    }

    /// Resolve a path to its route without loading the page or touching
    /// the history. The first matching table entry wins.
    pub fn resolve(&self, path: &str) -> Option<RouteMatch<'_>> {
        self.routes.iter().find_map(|route| {
            route
                .matches(path)
                .map(|params| RouteMatch { route, params })
        })
    }

    /// Navigate to a path: resolve it, construct the page if this is the
    /// first visit to its route, and record the path in the history.
    /// Returns `None` when no route matches.
    pub fn navigate(&mut self, path: &str) -> Option<(Arc<dyn Page>, RouteParams)> {
        let (page, params) = {
            let matched = self.resolve(path)?;
            (matched.route.page(), matched.params)
        };
        self.history.push(path.to_string());
        Some((page, params))
    }

    /// Drop the current entry and return the previous path, if any
    pub fn back(&mut self) -> Option<String> {
        self.history.pop();
        self.history.last().cloned()
    }

    /// The most recently navigated path
    pub fn current(&self) -> Option<&str> {
        self.history.last().map(String::as_str)
    }

    /// Paths visited so far, oldest first
    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// Look up a route by name
    pub fn route(&self, name: &str) -> Option<&Route> {
        self.routes.iter().find(|route| route.name() == name)
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

/// Non-empty path segments; `/` and `""` both yield none.
fn segments(path: &str) -> Vec<&str> {
    path.trim_matches('/')
        .split('/')
        .filter(|segment| !segment.is_empty())
        .collect()
}
