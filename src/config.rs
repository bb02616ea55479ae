use event_core::DEFAULT_PAGE_SIZE;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub page_size: usize,
}

impl AppConfig {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        AppConfig {
            page_size: parse_page_size(std::env::var("EVENT_PAGE_SIZE").ok()),
        }
    }
}

fn parse_page_size(value: Option<String>) -> usize {
    value
        .and_then(|value| value.trim().parse().ok())
        .filter(|size| *size > 0)
        .unwrap_or(DEFAULT_PAGE_SIZE)
}
