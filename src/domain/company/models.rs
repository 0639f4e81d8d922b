//! Company Info Models

use jiff::Timestamp;

/// Shop identity and copy shown on the public site.
///
/// A singleton record; when none has been saved yet the shop falls back to
/// [`CompanyInfo::default`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanyInfo {
    pub name: String,
    pub mission: String,
    pub vision: String,
    pub slogan: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Default for CompanyInfo {
    fn default() -> Self {
        Self {
            name: "CalentanaCo".to_string(),
            mission: "Llevar a cada persona el auténtico sabor calentano a través de aguas \
                      frescas, botanas y antojitos elaborados con calidad, tradición y cariño; \
                      ofreciendo una experiencia cercana, rápida y accesible para todos."
                .to_string(),
            vision: "Convertirnos en la marca líder de aguas frescas y botanas en la región, \
                     reconocida por su sabor incomparable, su servicio humano y cercano, y por \
                     la innovación constante en la experiencia del cliente tanto en tienda como \
                     en plataformas digitales."
                .to_string(),
            slogan: "El sabor que te abraza, la frescura que te inspira.".to_string(),
            created_at: Timestamp::default(),
            updated_at: Timestamp::default(),
        }
    }
}

/// Editable fields of the company record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompanyUpdate {
    pub mission: String,
    pub vision: String,
    pub slogan: String,
}
