//! Navigation routes shared by the navbar and the router.

/// Top-level pages of the app.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    /// Landing page.
    Home,
    /// Crop recommendation form.
    Crop,
    /// Disease detection upload.
    Diseases,
    /// Chat assistant.
    Chatbot,
}

impl Route {
    /// Navbar order.
    pub const ALL: [Route; 4] = [Route::Home, Route::Crop, Route::Diseases, Route::Chatbot];

    /// URL path of the page.
    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Crop => "/crop",
            Route::Diseases => "/diseases",
            Route::Chatbot => "/chatbot",
        }
    }

    /// Navbar label.
    pub fn label(self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::Crop => "Crop Recommendation",
            Route::Diseases => "Disease Detection",
            Route::Chatbot => "AI Chatbot",
        }
    }

    /// Page for an exact path.
    pub fn from_path(path: &str) -> Option<Route> {
        Self::ALL.into_iter().find(|r| r.path() == path)
    }

    /// Whether the navbar should highlight this route at `current_path`.
    pub fn is_active(self, current_path: &str) -> bool {
        self.path() == current_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_path() {
        assert_eq!(Route::from_path("/"), Some(Route::Home));
        assert_eq!(Route::from_path("/diseases"), Some(Route::Diseases));
        assert_eq!(Route::from_path("/crop/"), None);
        assert_eq!(Route::from_path("/login"), None);
    }

    #[test]
    fn test_only_exact_match_is_active() {
        let active: Vec<Route> = Route::ALL
            .into_iter()
            .filter(|r| r.is_active("/chatbot"))
            .collect();
        assert_eq!(active, vec![Route::Chatbot]);
        assert!(!Route::Home.is_active("/crop"));
    }
}
