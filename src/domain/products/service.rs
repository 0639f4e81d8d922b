//! Products service.

use std::sync::Arc;

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;
use rust_decimal::Decimal;
use tracing::info;

use crate::{
    domain::products::{
        errors::ProductsServiceError,
        models::{Category, MenuGroup, MenuView, Product, ProductForm, ProductUuid},
        repository::ProductsRepository,
        sizes::{SizeOption, normalize_sizes},
    },
    money::parse_amount,
};

const REQUIRED_FIELDS_ERROR: &str = "❌ Nombre y categoría son obligatorios.";
const AGUAS_SIZES_ERROR: &str =
    "❌ Las aguas deben tener tamaños con precio (por ejemplo 1/2 L y 1 L).";

#[derive(Clone)]
pub struct ShopProductsService {
    repository: Arc<dyn ProductsRepository>,
}

impl ShopProductsService {
    #[must_use]
    pub fn new(repository: Arc<dyn ProductsRepository>) -> Self {
        Self { repository }
    }

    /// Validate a form and produce the canonical category, sizes and price.
    fn validate(
        form: &ProductForm,
    ) -> Result<(Category, Vec<SizeOption>, Decimal), ProductsServiceError> {
        if form.name.trim().is_empty() || form.category.trim().is_empty() {
            return Err(ProductsServiceError::Validation(
                REQUIRED_FIELDS_ERROR.to_string(),
            ));
        }

        let category = Category::parse_lossy(&form.category);
        let sizes = normalize_sizes(&form.sizes);

        if category.requires_sizes() && sizes.is_empty() {
            return Err(ProductsServiceError::Validation(
                AGUAS_SIZES_ERROR.to_string(),
            ));
        }

        let price = parse_amount(&form.price)
            .unwrap_or(Decimal::ZERO)
            .max(Decimal::ZERO);

        Ok((category, sizes, price))
    }
}

#[async_trait]
impl ProductsService for ShopProductsService {
    async fn list_products(&self) -> Result<Vec<Product>, ProductsServiceError> {
        Ok(self.repository.list().await?)
    }

    async fn menu(&self) -> Result<MenuView, ProductsServiceError> {
        let products = self.repository.list_active().await?;

        let groups = Category::ALL
            .into_iter()
            .map(|category| MenuGroup {
                category,
                products: products
                    .iter()
                    .filter(|p| p.category == category)
                    .cloned()
                    .collect(),
            })
            .collect();

        Ok(MenuView { groups })
    }

    async fn get_product(&self, product: ProductUuid) -> Result<Product, ProductsServiceError> {
        self.repository
            .get(product)
            .await?
            .ok_or(ProductsServiceError::NotFound)
    }

    async fn create_product(&self, form: ProductForm) -> Result<Product, ProductsServiceError> {
        let (category, sizes, price) = Self::validate(&form)?;

        let now = Timestamp::now();
        let product = Product {
            uuid: ProductUuid::new(),
            name: form.name.trim().to_string(),
            description: form.description.trim().to_string(),
            category,
            sizes,
            price,
            image: form.image,
            image_url: form.image_url,
            is_active: true,
            created_at: now,
            updated_at: now,
        };

        self.repository.create(product.clone()).await?;

        info!(product = %product.uuid, name = %product.name, "product created");

        Ok(product)
    }

    async fn update_product(
        &self,
        product: ProductUuid,
        form: ProductForm,
    ) -> Result<Product, ProductsServiceError> {
        let mut stored = self.get_product(product).await?;

        let (category, sizes, price) = Self::validate(&form)?;

        stored.name = form.name.trim().to_string();
        stored.description = form.description.trim().to_string();
        stored.category = category;
        stored.sizes = sizes;
        stored.price = price;

        // A blank filename means no new upload; keep the stored image.
        if !form.image.trim().is_empty() {
            stored.image = form.image;
        }
        if !form.image_url.trim().is_empty() {
            stored.image_url = form.image_url;
        }

        stored.updated_at = Timestamp::now();

        self.repository.save(stored.clone()).await?;

        Ok(stored)
    }

    async fn toggle_active(&self, product: ProductUuid) -> Result<Product, ProductsServiceError> {
        let mut stored = self.get_product(product).await?;

        stored.is_active = !stored.is_active;
        stored.updated_at = Timestamp::now();

        self.repository.save(stored.clone()).await?;

        Ok(stored)
    }

    async fn delete_product(&self, product: ProductUuid) -> Result<(), ProductsServiceError> {
        // Orders keep their own name/price snapshots, so deletion needs no
        // referential check against order history.
        let removed = self.repository.delete(product).await?;

        if removed == 0 {
            return Err(ProductsServiceError::NotFound);
        }

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait ProductsService: Send + Sync {
    /// Retrieves the full catalog, newest first.
    async fn list_products(&self) -> Result<Vec<Product>, ProductsServiceError>;

    /// Active products grouped by category for the public menu.
    async fn menu(&self) -> Result<MenuView, ProductsServiceError>;

    /// Retrieve a single product.
    async fn get_product(&self, product: ProductUuid) -> Result<Product, ProductsServiceError>;

    /// Creates a product from an admin form submission.
    async fn create_product(&self, form: ProductForm) -> Result<Product, ProductsServiceError>;

    /// Updates a product in place from an admin form submission.
    async fn update_product(
        &self,
        product: ProductUuid,
        form: ProductForm,
    ) -> Result<Product, ProductsServiceError>;

    /// Flips the active flag.
    async fn toggle_active(&self, product: ProductUuid) -> Result<Product, ProductsServiceError>;

    /// Deletes a product immediately and unconditionally.
    async fn delete_product(&self, product: ProductUuid) -> Result<(), ProductsServiceError>;
}
