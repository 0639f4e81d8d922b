//! Product Models

use std::fmt::{Display, Formatter, Result as FmtResult};

use jiff::Timestamp;
use rust_decimal::Decimal;
use serde_json::Value;

use crate::{domain::products::sizes::SizeOption, uuids::TypedUuid};

/// Size label used when a product is sold at a single flat price.
pub const SINGLE_SIZE_LABEL: &str = "Único";

/// Product UUID
pub type ProductUuid = TypedUuid<Product>;

/// Product Model
#[derive(Debug, Clone)]
pub struct Product {
    pub uuid: ProductUuid,
    pub name: String,
    pub description: String,
    pub category: Category,
    /// Named pricing tiers; empty means the product sells at `price`.
    pub sizes: Vec<SizeOption>,
    /// Flat price, only meaningful when `sizes` is empty.
    pub price: Decimal,
    /// Stored upload filename.
    pub image: String,
    /// Direct image URL; preferred over `image` when present.
    pub image_url: String,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Product {
    /// Resolve the effective size label and unit price for a cart line.
    ///
    /// A sized product matches the requested label exactly and falls back to
    /// its first size; an unsized product sells under [`SINGLE_SIZE_LABEL`]
    /// at the flat price.
    #[must_use]
    pub fn resolve_size(&self, requested_label: Option<&str>) -> (String, Decimal) {
        match self.sizes.first() {
            Some(first) => {
                let chosen = requested_label
                    .and_then(|label| self.sizes.iter().find(|s| s.label == label))
                    .unwrap_or(first);

                (chosen.label.clone(), chosen.price)
            }
            None => (SINGLE_SIZE_LABEL.to_string(), self.price),
        }
    }

    /// Display image: direct URL wins, then the uploaded filename, then nothing.
    #[must_use]
    pub fn display_image(&self) -> String {
        if !self.image_url.trim().is_empty() {
            self.image_url.clone()
        } else if !self.image.trim().is_empty() {
            format!("/img/products/{}", self.image)
        } else {
            String::new()
        }
    }
}

/// Product category.
///
/// The catalog treats this as an open set: unrecognised values fold into
/// [`Category::Otros`] rather than being rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Aguas,
    Botanas,
    Antojitos,
    Otros,
}

impl Category {
    /// Menu display order.
    pub const ALL: [Self; 4] = [Self::Aguas, Self::Botanas, Self::Antojitos, Self::Otros];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Aguas => "aguas",
            Self::Botanas => "botanas",
            Self::Antojitos => "antojitos",
            Self::Otros => "otros",
        }
    }

    /// Parse a category, folding unknown values into [`Category::Otros`].
    #[must_use]
    pub fn parse_lossy(value: &str) -> Self {
        match value.trim() {
            "aguas" => Self::Aguas,
            "botanas" => Self::Botanas,
            "antojitos" => Self::Antojitos,
            _ => Self::Otros,
        }
    }

    /// Variant-priced categories must carry a non-empty size list.
    #[must_use]
    pub fn requires_sizes(self) -> bool {
        matches!(self, Self::Aguas)
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

/// Raw product form submission, as received from the admin UI.
#[derive(Debug, Clone, Default)]
pub struct ProductForm {
    pub name: String,
    pub description: String,
    pub category: String,
    /// Flat price field; ignored for variant-priced products.
    pub price: Value,
    /// Size/price payload in any of the historical shapes.
    pub sizes: Value,
    /// Uploaded image filename; empty when no file was sent.
    pub image: String,
    pub image_url: String,
}

/// Active products grouped for the public menu.
#[derive(Debug, Clone)]
pub struct MenuView {
    /// One group per category, in [`Category::ALL`] order; empty groups kept
    /// so the menu always renders every section.
    pub groups: Vec<MenuGroup>,
}

/// A single menu section.
#[derive(Debug, Clone)]
pub struct MenuGroup {
    pub category: Category,
    pub products: Vec<Product>,
}
