use std::time::Duration;

// Deployed worksheet backend; `ZAPPYLEARN_API_URL` at build time overrides it.
pub const DEFAULT_API_BASE_URL: &str = "https://zappylearn.onrender.com";

/// Grade band sent with every generation request.
pub const GRADE: &str = "5-10";

pub const DEFAULT_PDF_FILENAME: &str = "ZappyLearn_Worksheet.pdf";

pub const TOAST_VISIBLE_FOR: Duration = Duration::from_millis(3000);
pub const TOAST_FADE_FOR: Duration = Duration::from_millis(300);

pub const GENERATE_WORKSHEET_PATH: &str = "/generate-worksheet/";
pub const GENERATE_PDF_PATH: &str = "/generate-pdf/";
pub const HEALTH_PATH: &str = "/health/";

#[derive(Clone, Debug, PartialEq)]
pub struct ClientConfig {
    pub base_url: String,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn from_build_env() -> Self {
        match option_env!("ZAPPYLEARN_API_URL") {
            Some(url) if !url.trim().is_empty() => Self::new(url.trim()),
            _ => Self::new(DEFAULT_API_BASE_URL),
        }
    }

    /// Joins an endpoint path (always starting with `/`) onto the base address.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}
