/// Emitted when the host's current path differs from the last one observed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathChanged {
    pub path: String,
    /// `true` for the first path ever observed (the initial mount).
    pub initial: bool,
}

/// Turns "the current path is X" notifications into change events.
///
/// Hosts may re-notify the same path (re-renders, double-mounts); only a
/// different path, or the very first one, produces an event.
#[derive(Clone, Debug, Default)]
pub struct RouteBridge {
    last: Option<String>,
}

impl RouteBridge {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_path(&self) -> Option<&str> {
        self.last.as_deref()
    }

    /// Remember `path` as current without emitting an event, for navigations
    /// the host reports directly.
    pub fn record(&mut self, path: &str) {
        self.last = Some(normalize_path(path));
    }

    pub fn observe(&mut self, path: &str) -> Option<PathChanged> {
        let key = normalize_path(path);
        if self.last.as_deref() == Some(key.as_str()) {
            return None;
        }
        let initial = self.last.is_none();
        self.last = Some(key.clone());
        Some(PathChanged { path: key, initial })
    }
}

/// Trims whitespace and a trailing `/` (the root path stays `/`). Empty maps to `/`.
pub fn normalize_path(path: &str) -> String {
    let trimmed = path.trim();
    let stripped = trimmed.trim_end_matches('/');
    if stripped.is_empty() {
        "/".to_string()
    } else {
        stripped.to_string()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/route/bridge.rs"]
mod tests;
