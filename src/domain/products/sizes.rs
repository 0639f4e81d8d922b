//! Size/price normalization for product forms.
//!
//! Admin forms have submitted size data in three shapes over time: an array
//! of `{label, price}` objects, parallel `sizeLabels[]`/`sizePrices[]`
//! arrays, and a pair of explicitly named `v1_*`/`v2_*` fields. The shapes
//! are tried in that order and the first one present wins; results are never
//! merged across shapes.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::money::parse_amount;

/// A named pricing tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeOption {
    pub label: String,
    pub price: Decimal,
}

/// Normalize a raw form payload into an ordered size list.
///
/// Candidate entries are kept only when the label trims to non-empty and the
/// price parses to a number `>= 0`; everything else is dropped silently. An
/// empty result is valid — callers decide whether that is acceptable.
#[must_use]
pub fn normalize_sizes(body: &Value) -> Vec<SizeOption> {
    // Shape 1: sizes as an array of {label, price} objects.
    if let Some(entries) = body.get("sizes").and_then(Value::as_array) {
        return entries
            .iter()
            .filter_map(|entry| candidate(entry.get("label"), entry.get("price")))
            .collect();
    }

    // Shape 2: parallel label/price arrays, paired by index. A lone scalar
    // counts as a one-element array, matching how form encoders submit a
    // single row.
    if let (Some(labels), Some(prices)) = (present(body, "sizeLabels"), present(body, "sizePrices"))
    {
        let labels = as_list(labels);
        let prices = as_list(prices);

        return labels
            .iter()
            .enumerate()
            .filter_map(|(idx, label)| candidate(Some(*label), prices.get(idx).copied()))
            .collect();
    }

    // Shape 3: up to two explicitly named variant fields.
    [("v1_label", "v1_price"), ("v2_label", "v2_price")]
        .iter()
        .filter_map(|(label_key, price_key)| candidate(body.get(*label_key), body.get(*price_key)))
        .collect()
}

fn candidate(label: Option<&Value>, price: Option<&Value>) -> Option<SizeOption> {
    let label = text(label?);
    let label = label.trim();

    if label.is_empty() {
        return None;
    }

    let price = parse_amount(price?)?;

    if price < Decimal::ZERO {
        return None;
    }

    Some(SizeOption {
        label: label.to_string(),
        price,
    })
}

fn text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        _ => String::new(),
    }
}

// Form encoders submit empty text inputs as "", which must not select this
// shape any more than an absent key would.
fn present<'a>(body: &'a Value, key: &str) -> Option<&'a Value> {
    body.get(key)
        .filter(|v| !v.is_null() && v.as_str() != Some(""))
}

fn as_list(value: &Value) -> Vec<&Value> {
    match value {
        Value::Array(items) => items.iter().collect(),
        other => vec![other],
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn size(label: &str, price: i64) -> SizeOption {
        SizeOption {
            label: label.to_string(),
            price: Decimal::from(price),
        }
    }

    #[test]
    fn object_array_keeps_well_formed_entries_in_order() {
        let body = json!({
            "sizes": [
                { "label": "1/2 Litro", "price": 25 },
                { "label": "  ", "price": 30 },
                { "label": "1 Litro", "price": "35" },
                { "label": "2 Litros", "price": "no" },
                { "label": "3 Litros", "price": -5 },
            ]
        });

        assert_eq!(
            normalize_sizes(&body),
            vec![size("1/2 Litro", 25), size("1 Litro", 35)]
        );
    }

    #[test]
    fn object_array_wins_over_parallel_arrays() {
        let body = json!({
            "sizes": [{ "label": "Chico", "price": 10 }],
            "sizeLabels": ["Grande"],
            "sizePrices": [99],
        });

        assert_eq!(normalize_sizes(&body), vec![size("Chico", 10)]);
    }

    #[test]
    fn empty_object_array_still_wins() {
        let body = json!({
            "sizes": [],
            "v1_label": "Chico",
            "v1_price": 10,
        });

        assert!(normalize_sizes(&body).is_empty());
    }

    #[test]
    fn parallel_arrays_pair_by_index() {
        let body = json!({
            "sizeLabels": ["1/2 Litro", "1 Litro", "Sin precio"],
            "sizePrices": ["25", "35"],
        });

        assert_eq!(
            normalize_sizes(&body),
            vec![size("1/2 Litro", 25), size("1 Litro", 35)]
        );
    }

    #[test]
    fn parallel_scalar_promotes_to_single_entry() {
        let body = json!({
            "sizeLabels": "1 Litro",
            "sizePrices": "35",
        });

        assert_eq!(normalize_sizes(&body), vec![size("1 Litro", 35)]);
    }

    #[test]
    fn empty_parallel_scalars_fall_through_to_named_fields() {
        let body = json!({
            "sizeLabels": "",
            "sizePrices": "",
            "v1_label": "1/2 Litro",
            "v1_price": "25",
        });

        assert_eq!(normalize_sizes(&body), vec![size("1/2 Litro", 25)]);
    }

    #[test]
    fn named_fields_keep_each_valid_variant() {
        let body = json!({
            "v1_label": "1/2 Litro",
            "v1_price": "25",
            "v2_label": "",
            "v2_price": "35",
        });

        assert_eq!(normalize_sizes(&body), vec![size("1/2 Litro", 25)]);
    }

    #[test]
    fn no_shape_yields_empty_list() {
        assert!(normalize_sizes(&json!({ "name": "Chicharrones" })).is_empty());
    }
}
