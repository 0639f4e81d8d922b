//! Carts service.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;
use tracing::debug;

use crate::domain::{
    carts::{
        errors::CartsServiceError,
        models::{Cart, CartView, SessionUuid},
        repository::CartsRepository,
    },
    products::{models::ProductUuid, repository::ProductsRepository},
};

#[derive(Clone)]
pub struct ShopCartsService {
    carts: Arc<dyn CartsRepository>,
    products: Arc<dyn ProductsRepository>,
}

impl ShopCartsService {
    #[must_use]
    pub fn new(carts: Arc<dyn CartsRepository>, products: Arc<dyn ProductsRepository>) -> Self {
        Self { carts, products }
    }

    async fn load_or_default(&self, session: SessionUuid) -> Result<Cart, CartsServiceError> {
        Ok(self.carts.load(session).await?.unwrap_or_default())
    }
}

#[async_trait]
impl CartsService for ShopCartsService {
    async fn ensure(&self, session: SessionUuid) -> Result<(), CartsServiceError> {
        if self.carts.load(session).await?.is_none() {
            self.carts.save(session, Cart::default()).await?;
        }

        Ok(())
    }

    async fn add_item(
        &self,
        session: SessionUuid,
        product: ProductUuid,
        size_label: Option<String>,
    ) -> Result<(), CartsServiceError> {
        let Some(product) = self.products.get(product).await? else {
            debug!(%session, "add to cart ignored: product missing");
            return Ok(());
        };

        if !product.is_active {
            debug!(%session, product = %product.uuid, "add to cart ignored: product inactive");
            return Ok(());
        }

        let mut cart = self.load_or_default(session).await?;
        cart.add(&product, size_label.as_deref());

        self.carts.save(session, cart).await?;

        Ok(())
    }

    async fn remove_item(&self, session: SessionUuid, key: String) -> Result<(), CartsServiceError> {
        let mut cart = self.load_or_default(session).await?;
        cart.remove(&key);

        self.carts.save(session, cart).await?;

        Ok(())
    }

    async fn clear(&self, session: SessionUuid) -> Result<(), CartsServiceError> {
        let mut cart = self.load_or_default(session).await?;
        cart.clear();

        self.carts.save(session, cart).await?;

        Ok(())
    }

    async fn view(&self, session: SessionUuid) -> Result<CartView, CartsServiceError> {
        let cart = self.load_or_default(session).await?;
        let total = cart.total();
        let count = cart.count();

        Ok(CartView { cart, total, count })
    }
}

#[automock]
#[async_trait]
pub trait CartsService: Send + Sync {
    /// Idempotently initialize an empty cart for the session.
    async fn ensure(&self, session: SessionUuid) -> Result<(), CartsServiceError>;

    /// Add one unit of a product; missing or inactive products are a silent
    /// no-op so the caller can simply redirect back to the menu.
    async fn add_item(
        &self,
        session: SessionUuid,
        product: ProductUuid,
        size_label: Option<String>,
    ) -> Result<(), CartsServiceError>;

    /// Remove the line with the given composite key, if present.
    async fn remove_item(&self, session: SessionUuid, key: String)
    -> Result<(), CartsServiceError>;

    /// Reset the session cart to empty.
    async fn clear(&self, session: SessionUuid) -> Result<(), CartsServiceError>;

    /// Cart contents plus total and badge count.
    async fn view(&self, session: SessionUuid) -> Result<CartView, CartsServiceError>;
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use testresult::TestResult;

    use crate::{
        domain::{carts::models::cart_key, products::service::ProductsService},
        test::TestContext,
    };

    use super::*;

    #[tokio::test]
    async fn ensure_initializes_empty_cart_once() -> TestResult {
        let ctx = TestContext::new();

        ctx.carts.ensure(ctx.session).await?;
        ctx.carts.ensure(ctx.session).await?;

        let view = ctx.carts.view(ctx.session).await?;

        assert!(view.cart.is_empty());
        assert_eq!(view.count, 0);
        assert_eq!(view.total, Decimal::ZERO);

        Ok(())
    }

    #[tokio::test]
    async fn adding_same_size_twice_yields_one_line_qty_two() -> TestResult {
        let ctx = TestContext::new();
        let agua = ctx.seed_agua("Agua de Jamaica").await?;

        ctx.carts
            .add_item(ctx.session, agua.uuid, Some("1/2 Litro".to_string()))
            .await?;
        ctx.carts
            .add_item(ctx.session, agua.uuid, Some("1/2 Litro".to_string()))
            .await?;

        let view = ctx.carts.view(ctx.session).await?;

        assert_eq!(view.cart.items.len(), 1);
        assert_eq!(view.cart.items[0].qty, 2);
        assert_eq!(view.count, 2);

        Ok(())
    }

    #[tokio::test]
    async fn cart_total_sums_price_snapshots() -> TestResult {
        let ctx = TestContext::new();
        let agua = ctx.seed_agua("Agua de Jamaica").await?;

        ctx.carts
            .add_item(ctx.session, agua.uuid, Some("1/2 Litro".to_string()))
            .await?;
        ctx.carts
            .add_item(ctx.session, agua.uuid, Some("1/2 Litro".to_string()))
            .await?;
        ctx.carts
            .add_item(ctx.session, agua.uuid, Some("1 Litro".to_string()))
            .await?;

        let view = ctx.carts.view(ctx.session).await?;

        assert_eq!(view.total, Decimal::from(85));

        Ok(())
    }

    #[tokio::test]
    async fn adding_missing_or_inactive_product_is_silent_noop() -> TestResult {
        let ctx = TestContext::new();

        ctx.carts
            .add_item(ctx.session, ProductUuid::new(), None)
            .await?;

        let inactive = ctx.seed_agua("Agua de Horchata").await?;
        ctx.products.toggle_active(inactive.uuid).await?;

        ctx.carts.add_item(ctx.session, inactive.uuid, None).await?;

        let view = ctx.carts.view(ctx.session).await?;
        assert!(view.cart.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn remove_and_clear() -> TestResult {
        let ctx = TestContext::new();
        let agua = ctx.seed_agua("Agua de Jamaica").await?;

        ctx.carts
            .add_item(ctx.session, agua.uuid, Some("1/2 Litro".to_string()))
            .await?;
        ctx.carts
            .add_item(ctx.session, agua.uuid, Some("1 Litro".to_string()))
            .await?;

        ctx.carts
            .remove_item(ctx.session, cart_key(agua.uuid, "1/2 Litro"))
            .await?;

        let view = ctx.carts.view(ctx.session).await?;
        assert_eq!(view.cart.items.len(), 1);
        assert_eq!(view.cart.items[0].size_label, "1 Litro");

        ctx.carts.clear(ctx.session).await?;

        let view = ctx.carts.view(ctx.session).await?;
        assert!(view.cart.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn carts_are_isolated_per_session() -> TestResult {
        let ctx = TestContext::new();
        let agua = ctx.seed_agua("Agua de Jamaica").await?;

        let other = SessionUuid::new();

        ctx.carts.add_item(ctx.session, agua.uuid, None).await?;

        let view = ctx.carts.view(other).await?;
        assert!(view.cart.is_empty());

        Ok(())
    }
}
