//! Routes
//!
//! The two views of the app and their paths.

/// Top-level view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Home,
    Tasks,
}

impl Route {
    /// Resolve a path. The empty path redirects to Home.
    pub fn from_path(path: &str) -> Option<Self> {
        match path.trim().trim_matches('/') {
            "" | "home" => Some(Route::Home),
            "tasks" => Some(Route::Tasks),
            _ => None,
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/home",
            Route::Tasks => "/tasks",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_path_redirects_home() {
        assert_eq!(Route::from_path(""), Some(Route::Home));
        assert_eq!(Route::from_path("/"), Some(Route::Home));
    }

    #[test]
    fn test_known_paths() {
        assert_eq!(Route::from_path("/home"), Some(Route::Home));
        assert_eq!(Route::from_path("/tasks"), Some(Route::Tasks));
        assert_eq!(Route::from_path("tasks/"), Some(Route::Tasks));
    }

    #[test]
    fn test_unknown_path() {
        assert_eq!(Route::from_path("/login"), None);
        assert_eq!(Route::from_path("/tasks/1"), None);
    }

    #[test]
    fn test_path_round_trip() {
        for route in [Route::Home, Route::Tasks] {
            assert_eq!(Route::from_path(route.path()), Some(route));
        }
    }
}
