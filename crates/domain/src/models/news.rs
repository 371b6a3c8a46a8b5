//! News domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A curated news item shown in the apps. `published_at` is kept as the
/// source-provided string, not parsed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct News {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub source: String,
    pub published_at: String,
    pub external_link: String,
    pub state_abbr: String,
    pub city_name: String,
    pub created_at: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
}

/// Request to create a news item.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateNewsRequest {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: String,
    #[validate(length(min = 1, message = "Content is required"))]
    pub content: String,
    #[validate(length(min = 1, max = 120, message = "Source must be 1-120 characters"))]
    pub source: String,
    #[validate(length(min = 1, message = "Publication date is required"))]
    pub published_at: String,
    #[validate(url(message = "External link must be a valid URL"))]
    pub external_link: String,
    #[validate(custom(function = "shared::validation::validate_state_abbr"))]
    pub state_abbr: String,
    #[validate(length(min = 1, message = "City name is required"))]
    pub city_name: String,
}

/// News wire representation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsResponse {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub source: String,
    pub published_at: String,
    pub external_link: String,
    pub state_abbr: String,
    pub city_name: String,
    pub created_at: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
}

impl From<News> for NewsResponse {
    fn from(news: News) -> Self {
        Self {
            id: news.id,
            title: news.title,
            content: news.content,
            source: news.source,
            published_at: news.published_at,
            external_link: news.external_link,
            state_abbr: news.state_abbr,
            city_name: news.city_name,
            created_at: news.created_at,
            last_updated: news.last_updated,
        }
    }
}

/// Updatable news fields, taken from query-string parameters.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct UpdateNewsParams {
    pub title: Option<String>,
    pub content: Option<String>,
    pub source: Option<String>,
    pub published_at: Option<String>,
    pub external_link: Option<String>,
    pub state_abbr: Option<String>,
    pub city_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_request() -> CreateNewsRequest {
        CreateNewsRequest {
            title: "Mutirão contra a dengue".to_string(),
            content: "Agentes visitam casas neste sábado.".to_string(),
            source: "Prefeitura de São Paulo".to_string(),
            published_at: "2020-02-11".to_string(),
            external_link: "https://noticias.example.com/mutirao".to_string(),
            state_abbr: "SP".to_string(),
            city_name: "São Paulo".to_string(),
        }
    }

    #[test]
    fn test_create_request_validation() {
        assert!(sample_request().validate().is_ok());
    }

    #[test]
    fn test_create_request_rejects_bad_link() {
        let mut request = sample_request();
        request.external_link = "not a url".to_string();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_news_response_from() {
        let news = News {
            id: 5,
            title: "Mutirão".to_string(),
            content: "Conteúdo".to_string(),
            source: "Prefeitura".to_string(),
            published_at: "2020-02-11".to_string(),
            external_link: "https://noticias.example.com/mutirao".to_string(),
            state_abbr: "SP".to_string(),
            city_name: "São Paulo".to_string(),
            created_at: Utc::now(),
            last_updated: Utc::now(),
        };
        let response: NewsResponse = news.into();
        assert_eq!(response.id, 5);
        assert_eq!(response.state_abbr, "SP");
    }
}
