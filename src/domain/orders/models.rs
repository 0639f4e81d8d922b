//! Order Models

use std::fmt::{Display, Formatter, Result as FmtResult};

use jiff::Timestamp;
use rust_decimal::Decimal;

use crate::{domain::products::models::ProductUuid, uuids::TypedUuid};

/// Order UUID
pub type OrderUuid = TypedUuid<Order>;

/// Order Model
///
/// Items and total are snapshots captured at checkout; later catalog edits
/// never alter an existing order. Only `status` mutates after creation.
#[derive(Debug, Clone)]
pub struct Order {
    pub uuid: OrderUuid,
    pub customer_name: String,
    pub customer_phone: String,
    pub delivery_method: DeliveryMethod,
    pub address_text: String,
    pub maps_url: String,
    pub eta_minutes: u32,
    pub payment_method: PaymentMethod,
    /// Cash tendered; zero unless paying [`PaymentMethod::Efectivo`].
    pub cash_amount: Decimal,
    pub items: Vec<OrderItem>,
    pub total: Decimal,
    pub status: OrderStatus,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Immutable order line snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderItem {
    pub product_uuid: ProductUuid,
    pub name: String,
    pub size_label: String,
    pub unit_price: Decimal,
    pub qty: u32,
    pub image_url: String,
}

impl OrderItem {
    /// Line subtotal.
    #[must_use]
    pub fn subtotal(&self) -> Decimal {
        self.unit_price * Decimal::from(self.qty)
    }
}

/// Order lifecycle status.
///
/// The nominal flow is nuevo → en_proceso → listo → entregado, with
/// cancelado reachable from any non-terminal state. Transitions accept any
/// enumerated value from any other so admins can override freely; only
/// unknown values are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderStatus {
    Nuevo,
    EnProceso,
    Listo,
    Entregado,
    Cancelado,
}

impl OrderStatus {
    /// Reporting order.
    pub const ALL: [Self; 5] = [
        Self::Nuevo,
        Self::EnProceso,
        Self::Listo,
        Self::Entregado,
        Self::Cancelado,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Nuevo => "nuevo",
            Self::EnProceso => "en_proceso",
            Self::Listo => "listo",
            Self::Entregado => "entregado",
            Self::Cancelado => "cancelado",
        }
    }

    /// Parse one of the five enumerated statuses; anything else is `None`.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "nuevo" => Some(Self::Nuevo),
            "en_proceso" => Some(Self::EnProceso),
            "listo" => Some(Self::Listo),
            "entregado" => Some(Self::Entregado),
            "cancelado" => Some(Self::Cancelado),
            _ => None,
        }
    }
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

/// How the customer receives the order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeliveryMethod {
    #[default]
    Domicilio,
    Recoger,
}

impl DeliveryMethod {
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "" | "domicilio" => Some(Self::Domicilio),
            "recoger" => Some(Self::Recoger),
            _ => None,
        }
    }

    /// Customer-facing label for the order transcript.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Domicilio => "A domicilio",
            Self::Recoger => "Recoger en tienda",
        }
    }
}

/// Self-reported payment method; no gateway is involved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaymentMethod {
    #[default]
    Efectivo,
    Transferencia,
}

impl PaymentMethod {
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "" | "efectivo" => Some(Self::Efectivo),
            "transferencia" => Some(Self::Transferencia),
            _ => None,
        }
    }

    /// Customer-facing label for the order transcript.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Efectivo => "Efectivo",
            Self::Transferencia => "Transferencia",
        }
    }
}

/// Raw checkout form submission.
#[derive(Debug, Clone, Default)]
pub struct CheckoutRequest {
    pub customer_name: String,
    pub customer_phone: String,
    /// "domicilio" or "recoger"; blank defaults to domicilio.
    pub delivery_method: String,
    pub address_text: String,
    pub maps_url: String,
    /// Defaults to 30; values below 1 are ignored.
    pub eta_minutes: Option<u32>,
    /// "efectivo" or "transferencia"; blank defaults to efectivo.
    pub payment_method: String,
    pub cash_amount: Option<Decimal>,
}

/// Result of a successful checkout: the persisted order plus the transcript
/// and deep link the customer is redirected to.
#[derive(Debug, Clone)]
pub struct CheckoutOutcome {
    pub order: Order,
    pub message: String,
    pub wa_url: String,
}
