// Route table - single source of truth for all paths the dummy backend serves

use axum::http::Method;
use std::collections::HashMap;

pub const REGISTRATION_CODE: &str = "/api/v1/print/printers/registration_code";
pub const PRINTER_COMMAND: &str = "/api/v1/print/printers/command/:task_id";
pub const PRINTER_STATUS: &str = "/api/v1/print/printers/status";
pub const IDENTIFY: &str = "/__identify__";
pub const REGISTER_PRINTER: &str = "/v1/user/printers";
pub const COMMAND: &str = "/command";
pub const REDIRECT: &str = "/redirect";

/// Where the redirect route points. Served as a static 302, no handler involved.
pub const FIRMWARE_UPGRADE_PACKAGE: &str = "/test_firmware_upgrade_package";

/// Handler actions reachable through the route table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    CreatePrinter,
    CommandAcknowledgement,
    StatusUpdate,
    Identify,
    RegisterPrinter,
    Command,
}

#[derive(Clone, Copy)]
enum Target {
    Action(Action),
    Redirect { location: &'static str },
}

struct Route {
    method: Method,
    pattern: &'static str,
    target: Target,
}

/// Fixed at compile time, immutable for the life of the process.
static ROUTES: &[Route] = &[
    Route {
        method: Method::POST,
        pattern: REGISTRATION_CODE,
        target: Target::Action(Action::CreatePrinter),
    },
    Route {
        method: Method::POST,
        pattern: PRINTER_COMMAND,
        target: Target::Action(Action::CommandAcknowledgement),
    },
    Route {
        method: Method::POST,
        pattern: PRINTER_STATUS,
        target: Target::Action(Action::StatusUpdate),
    },
    Route {
        method: Method::GET,
        pattern: IDENTIFY,
        target: Target::Action(Action::Identify),
    },
    Route {
        method: Method::POST,
        pattern: REGISTER_PRINTER,
        target: Target::Action(Action::RegisterPrinter),
    },
    Route {
        method: Method::POST,
        pattern: COMMAND,
        target: Target::Action(Action::Command),
    },
    Route {
        method: Method::GET,
        pattern: REDIRECT,
        target: Target::Redirect {
            location: FIRMWARE_UPGRADE_PACKAGE,
        },
    },
];

/// Path parameters captured from `:name` pattern segments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathParams(HashMap<String, String>);

impl PathParams {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn insert(&mut self, name: &str, value: &str) {
        self.0.insert(name.to_string(), value.to_string());
    }
}

/// Result of resolving a request against the route table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteMatch {
    /// A handler action, along with any captured path parameters.
    Action { action: Action, params: PathParams },
    /// A static redirect; no handler is invoked.
    Redirect { location: &'static str },
    /// No table entry for this method and path.
    NotFound,
}

/// Resolve a request's method and path against the route table.
///
/// First match wins. Matching is an exact comparison of each static path
/// segment, left to right; a `:name` pattern segment matches any single
/// non-empty request segment and binds it under `name`. The query string
/// never participates - callers pass the URI path only.
pub fn resolve(method: &Method, path: &str) -> RouteMatch {
    for route in ROUTES {
        if route.method != *method {
            continue;
        }
        if let Some(params) = match_pattern(route.pattern, path) {
            return match route.target {
                Target::Action(action) => RouteMatch::Action { action, params },
                Target::Redirect { location } => RouteMatch::Redirect { location },
            };
        }
    }
    RouteMatch::NotFound
}

fn match_pattern(pattern: &str, path: &str) -> Option<PathParams> {
    let mut pattern_segments = pattern.trim_start_matches('/').split('/');
    let mut path_segments = path.trim_start_matches('/').split('/');
    let mut params = PathParams::default();

    loop {
        match (pattern_segments.next(), path_segments.next()) {
            (Some(expected), Some(actual)) => {
                if let Some(name) = expected.strip_prefix(':') {
                    if actual.is_empty() {
                        return None;
                    }
                    params.insert(name, actual);
                } else if expected != actual {
                    return None;
                }
            }
            (None, None) => return Some(params),
            // Segment counts must agree exactly
            _ => return None,
        }
    }
}
