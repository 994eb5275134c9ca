use crate::notification::{NotificationAction, Notifier};
use apiclient::abstract_trait::DynWishlistApi;
use shared::{
    domain::requests::wishlist::AddWishlistRequest,
    errors::{ClientError, ServiceError},
    model::Product,
    utils::validation_messages,
};
use tracing::{error, info};
use validator::Validate;

#[derive(Clone)]
pub struct WishlistService {
    api: DynWishlistApi,
    notifier: Notifier,
}

impl WishlistService {
    pub fn new(api: DynWishlistApi, notifier: Notifier) -> Self {
        Self { api, notifier }
    }

    pub async fn add(&self, product_id: &str) -> Result<(), ServiceError> {
        let req = AddWishlistRequest {
            product_id: product_id.to_string(),
        };

        if let Err(errors) = req.validate() {
            return Err(ServiceError::Validation(validation_messages(&errors)));
        }

        match self.api.add_wishlist(&req).await {
            Ok(response) => {
                info!("✅ Added product {product_id} to wishlist");
                self.notifier.success(response.message);
                Ok(())
            }
            Err(ClientError::Unauthorized) => {
                self.notifier.error_with(
                    "Unauthorized",
                    Some("Please login to add items to your wishlist".to_string()),
                    Some(NotificationAction::Login),
                );
                Err(ClientError::Unauthorized.into())
            }
            Err(e) => {
                error!("❌ Failed to add to wishlist: {e:?}");
                self.notifier.error("Failed to add to wishlist");
                Err(e.into())
            }
        }
    }

    pub async fn list(&self) -> Result<Vec<Product>, ServiceError> {
        let response = self.api.fetch_wishlist().await?;

        Ok(response
            .data
            .into_iter()
            .map(|item| item.product.into())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notification::NotificationLevel;
    use async_trait::async_trait;
    use parking_lot::Mutex;
    use shared::domain::responses::{ApiResponse, ProductResponse, WishlistItemResponse};
    use std::sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    };

    #[derive(Default)]
    struct FakeWishlistApi {
        adds: Mutex<Vec<String>>,
        unauthorized: AtomicBool,
    }

    #[async_trait]
    impl apiclient::abstract_trait::WishlistApiTrait for FakeWishlistApi {
        async fn add_wishlist(
            &self,
            req: &AddWishlistRequest,
        ) -> Result<ApiResponse<WishlistItemResponse>, ClientError> {
            if self.unauthorized.load(Ordering::SeqCst) {
                return Err(ClientError::Unauthorized);
            }

            self.adds.lock().push(req.product_id.clone());

            Ok(ApiResponse {
                status: "success".into(),
                message: "Added to wishlist".into(),
                data: WishlistItemResponse {
                    id: "w-1".into(),
                    product: ProductResponse {
                        id: req.product_id.clone(),
                        brand: "Aran".into(),
                        category: "men".into(),
                        title: "Cable Knit".into(),
                        description: String::new(),
                        price: 20.0,
                        discount_percentage: 0.0,
                        stock: 5,
                        images: vec![],
                        created_at: None,
                        updated_at: None,
                    },
                    user_id: "u-1".into(),
                    created_at: None,
                },
            })
        }

        async fn fetch_wishlist(
            &self,
        ) -> Result<ApiResponse<Vec<WishlistItemResponse>>, ClientError> {
            Ok(ApiResponse {
                status: "success".into(),
                message: "OK".into(),
                data: vec![],
            })
        }
    }

    #[tokio::test]
    async fn unauthenticated_add_prompts_for_login() {
        let api = Arc::new(FakeWishlistApi::default());
        api.unauthorized.store(true, Ordering::SeqCst);

        let notifier = Notifier::new();
        let mut rx = notifier.subscribe();
        let service = WishlistService::new(api.clone(), notifier);

        let result = service.add("p-1").await;

        assert!(result.is_err());
        assert!(api.adds.lock().is_empty());

        let notification = rx.try_recv().unwrap();
        assert_eq!(notification.level, NotificationLevel::Error);
        assert_eq!(notification.action, Some(NotificationAction::Login));
    }

    #[tokio::test]
    async fn successful_add_records_the_product_and_notifies() {
        let api = Arc::new(FakeWishlistApi::default());
        let notifier = Notifier::new();
        let mut rx = notifier.subscribe();
        let service = WishlistService::new(api.clone(), notifier);

        service.add("p-1").await.unwrap();

        assert_eq!(*api.adds.lock(), vec!["p-1".to_string()]);
        assert_eq!(rx.try_recv().unwrap().level, NotificationLevel::Success);
    }
}
