//! Customer-facing order transcript and messaging deep link.
//!
//! The transcript format is a contract with the business: staff read these
//! messages verbatim in WhatsApp, so structure and wording must not drift.

use rust_decimal::Decimal;

use crate::{
    domain::{
        orders::models::{DeliveryMethod, Order, PaymentMethod},
        products::models::SINGLE_SIZE_LABEL,
    },
    money::format_amount,
};

/// Render the plain-text order transcript.
#[must_use]
pub fn order_text(order: &Order) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push("Hola, quiero hacer el siguiente pedido:".to_string());
    lines.push(String::new());

    for item in &order.items {
        let size_label = if item.size_label.is_empty() {
            SINGLE_SIZE_LABEL
        } else {
            &item.size_label
        };

        lines.push(format!(
            "• {} ({}) x{} - ${}",
            item.name,
            size_label,
            item.qty,
            format_amount(item.subtotal())
        ));
    }

    lines.push(String::new());
    lines.push(format!("Total: ${}", format_amount(order.total)));
    lines.push(String::new());

    lines.push(format!("Entrega: {}", order.delivery_method.label()));
    if order.delivery_method == DeliveryMethod::Domicilio {
        if !order.address_text.is_empty() {
            lines.push(format!("Dirección/Referencias: {}", order.address_text));
        }
        if !order.maps_url.is_empty() {
            lines.push(format!("Ubicación (Maps): {}", order.maps_url));
        }
    }
    lines.push(format!("Tiempo estimado: {} min", order.eta_minutes));
    lines.push(String::new());

    lines.push(format!("Pago: {}", order.payment_method.label()));
    if order.payment_method == PaymentMethod::Efectivo && order.cash_amount > Decimal::ZERO {
        lines.push(format!(
            "Traigo para: ${} (si necesitas dar cambio)",
            format_amount(order.cash_amount)
        ));
    }

    if !order.customer_name.is_empty() {
        lines.push(format!("Nombre: {}", order.customer_name));
    }
    if !order.customer_phone.is_empty() {
        lines.push(format!("Teléfono: {}", order.customer_phone));
    }

    lines.join("\n")
}

/// Build the `wa.me` deep link with the transcript percent-encoded.
#[must_use]
pub fn deep_link(phone: &str, text: &str) -> String {
    format!("https://wa.me/{phone}?text={}", urlencoding::encode(text))
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;

    use crate::domain::{
        orders::models::{DeliveryMethod, OrderItem, OrderStatus, OrderUuid, PaymentMethod},
        products::models::ProductUuid,
    };

    use super::*;

    fn order() -> Order {
        Order {
            uuid: OrderUuid::new(),
            customer_name: "Ana".to_string(),
            customer_phone: "5551234567".to_string(),
            delivery_method: DeliveryMethod::Domicilio,
            address_text: "Calle 5 #12, portón verde".to_string(),
            maps_url: String::new(),
            eta_minutes: 30,
            payment_method: PaymentMethod::Efectivo,
            cash_amount: Decimal::ZERO,
            items: vec![
                OrderItem {
                    product_uuid: ProductUuid::new(),
                    name: "Agua de Jamaica".to_string(),
                    size_label: "1/2 Litro".to_string(),
                    unit_price: Decimal::from(25),
                    qty: 2,
                    image_url: String::new(),
                },
                OrderItem {
                    product_uuid: ProductUuid::new(),
                    name: "Chicharrones".to_string(),
                    size_label: String::new(),
                    unit_price: Decimal::from(35),
                    qty: 1,
                    image_url: String::new(),
                },
            ],
            total: Decimal::from(85),
            status: OrderStatus::Nuevo,
            created_at: Timestamp::now(),
            updated_at: Timestamp::now(),
        }
    }

    #[test]
    fn transcript_matches_expected_layout() {
        let text = order_text(&order());

        let expected = "Hola, quiero hacer el siguiente pedido:\n\
            \n\
            • Agua de Jamaica (1/2 Litro) x2 - $50.00\n\
            • Chicharrones (Único) x1 - $35.00\n\
            \n\
            Total: $85.00\n\
            \n\
            Entrega: A domicilio\n\
            Dirección/Referencias: Calle 5 #12, portón verde\n\
            Tiempo estimado: 30 min\n\
            \n\
            Pago: Efectivo\n\
            Nombre: Ana\n\
            Teléfono: 5551234567";

        assert_eq!(text, expected);
    }

    #[test]
    fn cash_line_included_only_when_positive() {
        let mut o = order();

        assert!(!order_text(&o).contains("Traigo para"));

        o.cash_amount = Decimal::from(50);
        assert!(order_text(&o).contains("Traigo para: $50.00 (si necesitas dar cambio)"));
    }

    #[test]
    fn cash_line_omitted_for_transferencia() {
        let mut o = order();
        o.payment_method = PaymentMethod::Transferencia;
        o.cash_amount = Decimal::from(50);

        let text = order_text(&o);

        assert!(text.contains("Pago: Transferencia"));
        assert!(!text.contains("Traigo para"));
    }

    #[test]
    fn recoger_omits_address_lines() {
        let mut o = order();
        o.delivery_method = DeliveryMethod::Recoger;
        o.maps_url = "https://maps.app.goo.gl/xyz".to_string();

        let text = order_text(&o);

        assert!(text.contains("Entrega: Recoger en tienda"));
        assert!(!text.contains("Dirección/Referencias"));
        assert!(!text.contains("Ubicación (Maps)"));
    }

    #[test]
    fn anonymous_order_omits_contact_lines() {
        let mut o = order();
        o.customer_name = String::new();
        o.customer_phone = String::new();

        let text = order_text(&o);

        assert!(!text.contains("Nombre:"));
        assert!(!text.contains("Teléfono:"));
    }

    #[test]
    fn deep_link_percent_encodes_the_transcript() {
        let url = deep_link("5215551234567", "Hola, quiero hacer el siguiente pedido:");

        assert!(url.starts_with("https://wa.me/5215551234567?text="));
        assert!(url.contains("Hola%2C%20quiero"));
        assert!(!url.contains(' '));
    }
}
