use apiclient::abstract_trait::DynProductApi;
use shared::{
    domain::{requests::product::FindAllProducts, responses::Pagination},
    errors::ServiceError,
    model::Product,
};
use tracing::info;

#[derive(Clone)]
pub struct CatalogService {
    api: DynProductApi,
}

impl CatalogService {
    pub fn new(api: DynProductApi) -> Self {
        Self { api }
    }

    pub async fn browse(
        &self,
        filters: &FindAllProducts,
    ) -> Result<(Vec<Product>, Pagination), ServiceError> {
        let response = self.api.find_all(filters).await?;
        let products = response.data.into_iter().map(Product::from).collect();

        Ok((products, response.pagination))
    }

    pub async fn product(&self, id: &str) -> Result<Product, ServiceError> {
        let response = self.api.find_by_id(id).await?;
        Ok(response.data.into())
    }

    pub async fn recents(&self) -> Result<Vec<Product>, ServiceError> {
        let response = self.api.recents().await?;
        Ok(response.data.into_iter().map(Product::from).collect())
    }

    pub fn discount_feed(&self, page_size: i32) -> DiscountFeed {
        DiscountFeed {
            api: self.api.clone(),
            next_page: 1,
            page_size,
            items: Vec::new(),
            exhausted: false,
        }
    }
}

/// Accumulates `/products/discounts` pages for an infinite-scroll view.
pub struct DiscountFeed {
    api: DynProductApi,
    next_page: i32,
    page_size: i32,
    items: Vec<Product>,
    exhausted: bool,
}

impl DiscountFeed {
    pub fn items(&self) -> &[Product] {
        &self.items
    }

    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    /// Fetches the next page; returns how many products were appended.
    pub async fn load_more(&mut self) -> Result<usize, ServiceError> {
        if self.exhausted {
            return Ok(0);
        }

        let response = self.api.discounts(self.next_page, self.page_size).await?;

        info!(
            "📄 Loaded discounts page {}/{}",
            response.pagination.page, response.pagination.total_pages
        );

        let fetched = response.data.len();
        self.items
            .extend(response.data.into_iter().map(Product::from));
        self.exhausted = !response.pagination.has_next_page();
        self.next_page = response.pagination.page + 1;

        Ok(fetched)
    }
}
