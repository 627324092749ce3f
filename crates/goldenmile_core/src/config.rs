//! Form configuration: which fields exist and where requests go.

/// Cities offered when nothing else is configured.
pub const DEFAULT_CITIES: [&str; 3] = ["Hyderabad", "Bengaluru", "Pune"];

/// Endpoint paths on the advisory backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub generate: String,
    pub download: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            generate: "/generate".to_string(),
            download: "/download".to_string(),
        }
    }
}

/// The form's field set.
///
/// The metro toggle is optional so the same controller serves both the
/// plain form and the one with a metro preference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormConfig {
    pub cities: Vec<String>,
    pub metro_toggle: bool,
    pub endpoints: Endpoints,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            cities: DEFAULT_CITIES.iter().map(|c| c.to_string()).collect(),
            metro_toggle: true,
            endpoints: Endpoints::default(),
        }
    }
}

impl FormConfig {
    pub fn new(cities: Vec<String>) -> Self {
        Self {
            cities,
            ..Self::default()
        }
    }

    pub fn with_metro_toggle(mut self, enabled: bool) -> Self {
        self.metro_toggle = enabled;
        self
    }

    pub fn with_endpoints(mut self, endpoints: Endpoints) -> Self {
        self.endpoints = endpoints;
        self
    }
}

/// Join a base URL and an endpoint path with exactly one slash between them.
pub fn join_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    if base.is_empty() {
        format!("/{path}")
    } else {
        format!("{base}/{path}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = FormConfig::default();
        assert_eq!(config.cities, vec!["Hyderabad", "Bengaluru", "Pune"]);
        assert!(config.metro_toggle);
        assert_eq!(config.endpoints.generate, "/generate");
        assert_eq!(config.endpoints.download, "/download");
    }

    #[test]
    fn test_join_url() {
        assert_eq!(
            join_url("http://127.0.0.1:5001", "/generate"),
            "http://127.0.0.1:5001/generate"
        );
        assert_eq!(
            join_url("http://host/api/", "download"),
            "http://host/api/download"
        );
        assert_eq!(join_url("", "/download"), "/download");
    }
}
