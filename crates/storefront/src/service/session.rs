use crate::{
    notification::Notifier,
    store::{CartStore, UserStore},
};
use apiclient::{
    abstract_trait::DynAuthApi,
    presence::{PresenceClient, PresenceConnection, PresenceEvent},
};
use parking_lot::Mutex;
use shared::{
    domain::requests::auth::{LoginRequest, RegisterRequest},
    errors::{ClientError, ServiceError},
    model::UserProfile,
    utils::validation_messages,
};
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{error, info, warn};
use validator::Validate;

struct PresenceSession {
    connection: PresenceConnection,
    pump: JoinHandle<()>,
}

/// Owns the cookie-backed session lifecycle: sign up / sign in / logout,
/// the user store, and the presence socket that feeds online-user updates.
#[derive(Clone)]
pub struct SessionService {
    auth: DynAuthApi,
    presence: PresenceClient,
    user_store: UserStore,
    cart_store: CartStore,
    notifier: Notifier,
    live: Arc<Mutex<Option<PresenceSession>>>,
}

pub struct SessionServiceDeps {
    pub auth: DynAuthApi,
    pub presence: PresenceClient,
    pub user_store: UserStore,
    pub cart_store: CartStore,
    pub notifier: Notifier,
}

impl SessionService {
    pub fn new(deps: SessionServiceDeps) -> Self {
        let SessionServiceDeps {
            auth,
            presence,
            user_store,
            cart_store,
            notifier,
        } = deps;

        Self {
            auth,
            presence,
            user_store,
            cart_store,
            notifier,
            live: Arc::new(Mutex::new(None)),
        }
    }

    pub async fn sign_up(&self, req: &RegisterRequest) -> Result<UserProfile, ServiceError> {
        if let Err(errors) = req.validate() {
            return Err(ServiceError::Validation(validation_messages(&errors)));
        }

        match self.auth.sign_up(req).await {
            Ok(response) => {
                info!("✅ Account created for {}", req.email);
                self.notifier.success(response.message);
                Ok(response.data.into())
            }
            Err(e) => {
                error!("❌ Sign up failed: {e:?}");
                self.notifier.error(format!("Failed to sign up: {e}"));
                Err(e.into())
            }
        }
    }

    pub async fn sign_in(&self, req: &LoginRequest) -> Result<UserProfile, ServiceError> {
        if let Err(errors) = req.validate() {
            return Err(ServiceError::Validation(validation_messages(&errors)));
        }

        match self.auth.sign_in(req).await {
            Ok(response) => {
                let profile: UserProfile = response.data.into();

                info!("✅ Signed in as {}", profile.email);
                self.user_store.set_user(profile.clone());
                self.spawn_presence(profile.id.clone());
                self.notifier.success(response.message);

                Ok(profile)
            }
            Err(ClientError::Unauthorized) => {
                self.notifier.error("Invalid email or password");
                Err(ClientError::Unauthorized.into())
            }
            Err(e) => {
                error!("❌ Sign in failed: {e:?}");
                self.notifier.error("Failed to sign in. Please try again.");
                Err(e.into())
            }
        }
    }

    /// Presence is best effort; a failed socket never blocks sign-in.
    fn spawn_presence(&self, user_id: String) {
        let service = self.clone();

        tokio::spawn(async move {
            match service.presence.connect(&user_id).await {
                Ok((connection, mut events)) => {
                    let store = service.user_store.clone();
                    let pump = tokio::spawn(async move {
                        while let Some(event) = events.recv().await {
                            match event {
                                PresenceEvent::OnlineUsers(ids) => store.set_online_users(ids),
                            }
                        }
                    });

                    if let Some(previous) =
                        service.live.lock().replace(PresenceSession { connection, pump })
                    {
                        previous.pump.abort();
                        previous.connection.disconnect();
                    }
                }
                Err(e) => warn!("Failed to connect presence socket: {e}"),
            }
        });
    }

    pub async fn logout(&self) -> Result<(), ServiceError> {
        match self.auth.logout().await {
            Ok(response) => {
                if let Some(session) = self.live.lock().take() {
                    session.pump.abort();
                    session.connection.disconnect();
                }

                self.user_store.clear_user();
                self.user_store.set_online_users(Vec::new());
                self.cart_store.clear();
                self.notifier.success(response.message);

                info!("✅ Logged out");
                Ok(())
            }
            Err(e) => {
                error!("❌ Logout failed: {e:?}");
                self.notifier.error("Failed to log out. Please try again.");
                Err(e.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use shared::{
        config::Config,
        domain::responses::{ApiResponse, StatusResponse, UserProfileResponse},
        model::{CartItem, Product, Size},
    };
    use std::sync::atomic::{AtomicBool, Ordering};

    #[derive(Default)]
    struct FakeAuthApi {
        reject: AtomicBool,
    }

    #[async_trait]
    impl apiclient::abstract_trait::AuthApiTrait for FakeAuthApi {
        async fn sign_up(
            &self,
            req: &RegisterRequest,
        ) -> Result<ApiResponse<UserProfileResponse>, ClientError> {
            Ok(ApiResponse {
                status: "success".into(),
                message: "Account created".into(),
                data: UserProfileResponse {
                    id: "u-1".into(),
                    firstname: req.firstname.clone(),
                    lastname: req.lastname.clone(),
                    email: req.email.clone(),
                    avatar: None,
                },
            })
        }

        async fn sign_in(
            &self,
            req: &LoginRequest,
        ) -> Result<ApiResponse<UserProfileResponse>, ClientError> {
            if self.reject.load(Ordering::SeqCst) {
                return Err(ClientError::Unauthorized);
            }

            Ok(ApiResponse {
                status: "success".into(),
                message: "Welcome back".into(),
                data: UserProfileResponse {
                    id: "u-1".into(),
                    firstname: "Jo".into(),
                    lastname: "Knitter".into(),
                    email: req.email.clone(),
                    avatar: None,
                },
            })
        }

        async fn logout(&self) -> Result<StatusResponse, ClientError> {
            Ok(StatusResponse {
                status: "success".into(),
                message: "Logged out".into(),
            })
        }
    }

    fn test_config() -> Config {
        Config {
            dev_mode: true,
            api_local_url: "http://127.0.0.1:1".into(),
            api_production_url: "http://127.0.0.1:1".into(),
            socket_local_url: "ws://127.0.0.1:1".into(),
            socket_production_url: "ws://127.0.0.1:1".into(),
            http_timeout_secs: 1,
        }
    }

    fn session_with(auth: Arc<FakeAuthApi>) -> (SessionService, UserStore, CartStore) {
        let user_store = UserStore::new();
        let cart_store = CartStore::new();
        let service = SessionService::new(SessionServiceDeps {
            auth,
            presence: PresenceClient::new(&test_config()),
            user_store: user_store.clone(),
            cart_store: cart_store.clone(),
            notifier: Notifier::new(),
        });
        (service, user_store, cart_store)
    }

    fn cart_item() -> CartItem {
        CartItem {
            id: "c-1".into(),
            product: Product {
                id: "p-1".into(),
                brand: "Aran".into(),
                category: "men".into(),
                title: "Cable Knit".into(),
                description: String::new(),
                price: 20.0,
                discount_percentage: 0.0,
                stock: 10,
                images: vec![],
                created_at: None,
                updated_at: None,
            },
            size: Size::M,
            quantity: 1,
            user_id: "u-1".into(),
            created_at: None,
            updated_at: None,
        }
    }

    #[tokio::test]
    async fn sign_in_populates_the_user_store() {
        let (service, user_store, _) = session_with(Arc::new(FakeAuthApi::default()));

        let profile = service
            .sign_in(&LoginRequest {
                email: "jo@example.com".into(),
                password: "knitwear".into(),
            })
            .await
            .unwrap();

        assert_eq!(profile.id, "u-1");
        assert_eq!(user_store.snapshot().user, Some(profile));
    }

    #[tokio::test]
    async fn rejected_credentials_leave_the_user_store_empty() {
        let auth = Arc::new(FakeAuthApi::default());
        auth.reject.store(true, Ordering::SeqCst);
        let (service, user_store, _) = session_with(auth);

        let result = service
            .sign_in(&LoginRequest {
                email: "jo@example.com".into(),
                password: "knitwear".into(),
            })
            .await;

        assert!(result.is_err());
        assert_eq!(user_store.snapshot().user, None);
    }

    #[tokio::test]
    async fn logout_clears_both_stores() {
        let (service, user_store, cart_store) = session_with(Arc::new(FakeAuthApi::default()));

        service
            .sign_in(&LoginRequest {
                email: "jo@example.com".into(),
                password: "knitwear".into(),
            })
            .await
            .unwrap();
        cart_store.set_items(vec![cart_item()]);
        cart_store.set_total_item_count(1);
        cart_store.set_subtotal(20.0);

        service.logout().await.unwrap();

        assert_eq!(user_store.snapshot().user, None);
        let cart = cart_store.snapshot();
        assert!(cart.items.is_empty());
        assert_eq!(cart.total_items, 0);
        assert_eq!(cart.subtotal, 0.0);
    }

    #[tokio::test]
    async fn malformed_login_request_fails_validation_before_the_network() {
        let (service, _, _) = session_with(Arc::new(FakeAuthApi::default()));

        let result = service
            .sign_in(&LoginRequest {
                email: "not-an-email".into(),
                password: "short".into(),
            })
            .await;

        assert!(matches!(result, Err(ServiceError::Validation(_))));
    }
}
