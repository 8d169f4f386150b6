use shared::Session;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000";

/// Where the API lives and which token to send, fixed at build time
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    pub api_base_url: String,
    pub access_token: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            access_token: String::new(),
        }
    }
}

impl ClientConfig {
    /// Read `FINANCE_API_URL` and `FINANCE_API_TOKEN` as set when the wasm
    /// bundle was compiled
    pub fn from_build_env() -> Self {
        Self::from_values(option_env!("FINANCE_API_URL"), option_env!("FINANCE_API_TOKEN"))
    }

    pub fn from_values(api_base_url: Option<&str>, access_token: Option<&str>) -> Self {
        let api_base_url = api_base_url
            .map(|url| url.trim().trim_end_matches('/'))
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_API_BASE_URL)
            .to_string();
        let access_token = access_token.map(str::trim).unwrap_or_default().to_string();

        Self {
            api_base_url,
            access_token,
        }
    }

    pub fn session(&self) -> Session {
        Session::new(self.access_token.clone())
    }
}
