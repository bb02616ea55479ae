use std::sync::{Arc, Mutex};

use event_core::UserId;

use crate::{ServiceError, ServiceResult, validation::validate_email};

#[derive(Clone, Debug, PartialEq)]
pub struct SessionUser {
    pub id: UserId,
    pub email: String,
    pub display_name: String,
    pub avatar_url: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    pub user: SessionUser,
    pub access_token: String,
}

pub type ArcAuthenticationService = Arc<Box<dyn AuthenticationService + Send + Sync + 'static>>;

/// Contract of the external identity provider. The core only consumes it:
/// auth failures are opaque messages for display and are never retried.
#[async_trait::async_trait]
pub trait AuthenticationService {
    fn current_user(&self) -> Option<SessionUser>;
    fn is_loading(&self) -> bool;
    async fn sign_in(&self, email: &str, password: &str) -> ServiceResult<Session>;
    async fn sign_up(&self, email: &str, password: &str) -> ServiceResult<Session>;
    async fn sign_out(&self);
}

/// In-memory stand-in for the identity provider, used by tests and as the
/// composition default until a real provider is plugged in.
#[derive(Clone, Default)]
pub struct MockAuthenticationService {
    pub current: Arc<Mutex<Option<SessionUser>>>,
    pub loading: Arc<Mutex<bool>>,
}

#[allow(unused)]
impl MockAuthenticationService {
    pub fn signed_in(user: SessionUser) -> Self {
        let service = Self::default();
        *service.current.lock().unwrap() = Some(user);
        service
    }

    pub fn loading() -> Self {
        let service = Self::default();
        *service.loading.lock().unwrap() = true;
        service
    }

    pub fn finish_loading(&self) {
        *self.loading.lock().unwrap() = false;
    }

    fn start_session(&self, email: String) -> Session {
        let display_name = email
            .split('@')
            .next()
            .unwrap_or(email.as_str())
            .to_string();
        let user = SessionUser {
            id: email.clone(),
            email,
            display_name,
            avatar_url: String::new(),
        };
        *self.current.lock().unwrap() = Some(user.clone());
        Session {
            user,
            access_token: uuid::Uuid::new_v4().to_string(),
        }
    }
}

#[async_trait::async_trait]
impl AuthenticationService for MockAuthenticationService {
    fn current_user(&self) -> Option<SessionUser> {
        self.current.lock().unwrap().clone()
    }

    fn is_loading(&self) -> bool {
        *self.loading.lock().unwrap()
    }

    async fn sign_in(&self, email: &str, password: &str) -> ServiceResult<Session> {
        if password.is_empty() {
            return ServiceError::unauthorized("Invalid login credentials");
        }
        let email = validate_email(email)?;
        Ok(self.start_session(email))
    }

    async fn sign_up(&self, email: &str, password: &str) -> ServiceResult<Session> {
        if password.len() < 6 {
            return ServiceError::unauthorized("Password should be at least 6 characters");
        }
        let email = validate_email(email)?;
        Ok(self.start_session(email))
    }

    async fn sign_out(&self) {
        *self.current.lock().unwrap() = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_sign_in_resolves_current_user() {
        let auth = MockAuthenticationService::default();
        assert_eq!(auth.current_user(), None);

        let session = auth
            .sign_in("jane@example.com", "secret")
            .await
            .expect("Failed to sign in");
        assert_eq!(session.user.email, "jane@example.com");
        assert_eq!(session.user.display_name, "jane");
        assert_eq!(auth.current_user(), Some(session.user));

        auth.sign_out().await;
        assert_eq!(auth.current_user(), None);
    }

    #[tokio::test]
    async fn test_sign_in_rejects_bad_credentials() {
        let auth = MockAuthenticationService::default();
        assert!(auth.sign_in("jane@example.com", "").await.is_err());
        assert!(auth.sign_in("not-an-email", "secret").await.is_err());
        assert_eq!(auth.current_user(), None);
    }

    #[tokio::test]
    async fn test_sign_up_requires_a_reasonable_password() {
        let auth = MockAuthenticationService::default();
        assert!(auth.sign_up("jane@example.com", "short").await.is_err());
        assert!(auth.sign_up("jane@example.com", "longer-secret").await.is_ok());
    }

    #[test]
    fn test_loading_state_resolves() {
        let auth = MockAuthenticationService::loading();
        assert!(auth.is_loading());
        auth.finish_loading();
        assert!(!auth.is_loading());
    }
}
