use gloo_net::http::{Request, Response};
use thiserror::Error;

use shared::api::{CreateEventRequest, CreateUserRequest};
use shared::models::{Event, Notification, User};

const API_BASE_URL: &str = "http://localhost:8080/api";

/// Failure of a backend call, classified far enough for callers to pick the
/// right user-facing message.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Network(String),

    #[error("resource not found")]
    NotFound,

    #[error("HTTP error: {0}")]
    Status(u16),

    #[error("failed to parse response: {0}")]
    Parse(String),
}

pub struct ApiService;

impl ApiService {
    pub async fn user_by_username(username: &str) -> Result<User, ApiError> {
        let url = format!("{}/users/username/{}", API_BASE_URL, username);

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::check_status(&response)?;

        response
            .json()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }

    pub async fn create_user(request: &CreateUserRequest) -> Result<User, ApiError> {
        let url = format!("{}/users", API_BASE_URL);

        let response = Request::post(&url)
            .json(request)
            .map_err(|e| ApiError::Parse(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::check_status(&response)?;

        response
            .json()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }

    pub async fn events_for_user(user_id: i64) -> Result<Vec<Event>, ApiError> {
        let url = format!("{}/events/user/{}", API_BASE_URL, user_id);

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::check_status(&response)?;

        response
            .json()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }

    pub async fn create_event(request: &CreateEventRequest) -> Result<Event, ApiError> {
        let url = format!("{}/events", API_BASE_URL);

        let response = Request::post(&url)
            .json(request)
            .map_err(|e| ApiError::Parse(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::check_status(&response)?;

        response
            .json()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }

    pub async fn delete_event(event_id: i64) -> Result<(), ApiError> {
        let url = format!("{}/events/{}", API_BASE_URL, event_id);

        let response = Request::delete(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::check_status(&response)?;

        Ok(())
    }

    pub async fn notifications_for_user(user_id: i64) -> Result<Vec<Notification>, ApiError> {
        let url = format!("{}/notifications/user/{}", API_BASE_URL, user_id);

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::check_status(&response)?;

        response
            .json()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }

    fn check_status(response: &Response) -> Result<(), ApiError> {
        if response.ok() {
            Ok(())
        } else if response.status() == 404 {
            Err(ApiError::NotFound)
        } else {
            Err(ApiError::Status(response.status()))
        }
    }
}
