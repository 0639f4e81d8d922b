//! Orders service: checkout orchestration and admin order management.

use std::sync::Arc;

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;
use rust_decimal::Decimal;
use tracing::{info, warn};

use crate::domain::{
    carts::{
        models::{Cart, SessionUuid},
        repository::CartsRepository,
    },
    orders::{
        errors::OrdersServiceError,
        message,
        models::{
            CheckoutOutcome, CheckoutRequest, DeliveryMethod, Order, OrderItem, OrderStatus,
            OrderUuid, PaymentMethod,
        },
        repository::OrdersRepository,
    },
    products::models::SINGLE_SIZE_LABEL,
};

const MISSING_PHONE_ERROR: &str = "❌ Aún no está configurado el número de WhatsApp del negocio.";
const DOMICILIO_ADDRESS_ERROR: &str =
    "❌ Para entrega a domicilio agrega dirección/referencias o un link de Google Maps.";
const INVALID_DELIVERY_ERROR: &str = "❌ Método de entrega no válido.";
const INVALID_PAYMENT_ERROR: &str = "❌ Método de pago no válido.";

const DEFAULT_ETA_MINUTES: u32 = 30;

#[derive(Clone)]
pub struct ShopOrdersService {
    orders: Arc<dyn OrdersRepository>,
    carts: Arc<dyn CartsRepository>,
    /// Business WhatsApp contact; checkout is refused while unset.
    whatsapp_phone: Option<String>,
}

impl ShopOrdersService {
    #[must_use]
    pub fn new(
        orders: Arc<dyn OrdersRepository>,
        carts: Arc<dyn CartsRepository>,
        whatsapp_phone: Option<String>,
    ) -> Self {
        Self {
            orders,
            carts,
            whatsapp_phone,
        }
    }

    fn configured_phone(&self) -> Result<&str, OrdersServiceError> {
        self.whatsapp_phone
            .as_deref()
            .map(str::trim)
            .filter(|phone| !phone.is_empty())
            .ok_or_else(|| OrdersServiceError::Configuration(MISSING_PHONE_ERROR.to_string()))
    }
}

#[async_trait]
impl OrdersService for ShopOrdersService {
    async fn checkout(
        &self,
        session: SessionUuid,
        request: CheckoutRequest,
    ) -> Result<CheckoutOutcome, OrdersServiceError> {
        let cart = self.carts.load(session).await?.unwrap_or_default();

        if cart.is_empty() {
            return Err(OrdersServiceError::EmptyCart);
        }

        let phone = self.configured_phone()?.to_string();

        let delivery_method = DeliveryMethod::parse(&request.delivery_method)
            .ok_or_else(|| OrdersServiceError::Validation(INVALID_DELIVERY_ERROR.to_string()))?;
        let payment_method = PaymentMethod::parse(&request.payment_method)
            .ok_or_else(|| OrdersServiceError::Validation(INVALID_PAYMENT_ERROR.to_string()))?;

        let address_text = request.address_text.trim().to_string();
        let maps_url = request.maps_url.trim().to_string();

        if delivery_method == DeliveryMethod::Domicilio
            && address_text.is_empty()
            && maps_url.is_empty()
        {
            return Err(OrdersServiceError::Validation(
                DOMICILIO_ADDRESS_ERROR.to_string(),
            ));
        }

        let eta_minutes = request
            .eta_minutes
            .filter(|minutes| *minutes >= 1)
            .unwrap_or(DEFAULT_ETA_MINUTES);

        let cash_amount = if payment_method == PaymentMethod::Efectivo {
            request
                .cash_amount
                .unwrap_or(Decimal::ZERO)
                .max(Decimal::ZERO)
        } else {
            Decimal::ZERO
        };

        // Total is computed server-side from the cart's price snapshots; the
        // client is never trusted with it.
        let total = cart.total();

        let items = cart
            .items
            .iter()
            .map(|item| OrderItem {
                product_uuid: item.product_uuid,
                name: item.name.clone(),
                size_label: if item.size_label.trim().is_empty() {
                    SINGLE_SIZE_LABEL.to_string()
                } else {
                    item.size_label.clone()
                },
                unit_price: item.unit_price.max(Decimal::ZERO),
                qty: item.qty.max(1),
                image_url: item.image_url.clone(),
            })
            .collect();

        let now = Timestamp::now();
        let order = Order {
            uuid: OrderUuid::new(),
            customer_name: request.customer_name.trim().to_string(),
            customer_phone: request.customer_phone.trim().to_string(),
            delivery_method,
            address_text,
            maps_url,
            eta_minutes,
            payment_method,
            cash_amount,
            items,
            total,
            status: OrderStatus::Nuevo,
            created_at: now,
            updated_at: now,
        };

        // Persist first; the cart is only cleared once the order exists, so a
        // storage failure leaves the cart intact and no order behind.
        self.orders.create(order.clone()).await?;

        self.carts.save(session, Cart::default()).await?;

        info!(order = %order.uuid, total = %order.total, "order created");

        let text = message::order_text(&order);
        let wa_url = message::deep_link(&phone, &text);

        Ok(CheckoutOutcome {
            order,
            message: text,
            wa_url,
        })
    }

    async fn get_order(&self, order: OrderUuid) -> Result<Order, OrdersServiceError> {
        self.orders
            .get(order)
            .await?
            .ok_or(OrdersServiceError::NotFound)
    }

    async fn list_orders(&self) -> Result<Vec<Order>, OrdersServiceError> {
        Ok(self.orders.list().await?)
    }

    async fn set_status(
        &self,
        order: OrderUuid,
        status: String,
    ) -> Result<(), OrdersServiceError> {
        let Some(status) = OrderStatus::parse(&status) else {
            warn!(%order, %status, "rejected unknown order status");
            return Err(OrdersServiceError::UnknownStatus(status));
        };

        let updated = self.orders.update_status(order, status).await?;

        if updated == 0 {
            return Err(OrdersServiceError::NotFound);
        }

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait OrdersService: Send + Sync {
    /// Validate the session cart and checkout form, persist an immutable
    /// order snapshot, clear the cart and produce the messaging deep link.
    ///
    /// No failure clears the cart or leaves a partial order behind.
    async fn checkout(
        &self,
        session: SessionUuid,
        request: CheckoutRequest,
    ) -> Result<CheckoutOutcome, OrdersServiceError>;

    /// Retrieve a single order.
    async fn get_order(&self, order: OrderUuid) -> Result<Order, OrdersServiceError>;

    /// All orders, newest first.
    async fn list_orders(&self) -> Result<Vec<Order>, OrdersServiceError>;

    /// Apply a status posted by an admin; values outside the five-element
    /// enumeration are rejected without touching the order.
    async fn set_status(&self, order: OrderUuid, status: String) -> Result<(), OrdersServiceError>;
}
