//! App Configuration

use clap::Args;

/// Runtime settings shared by every command.
#[derive(Debug, Clone, Args)]
pub struct AppConfig {
    /// WhatsApp number orders are sent to, in international format without
    /// the leading plus. Checkout is refused until this is set.
    #[arg(long, env = "WHATSAPP_PHONE")]
    pub whatsapp_phone: Option<String>,

    /// IANA time zone used for dashboard calendar math.
    #[arg(long, env = "SHOP_TZ", default_value = "America/Mexico_City")]
    pub time_zone: String,
}

impl AppConfig {
    /// The configured phone, treating a blank value as unset.
    #[must_use]
    pub fn whatsapp_phone(&self) -> Option<String> {
        self.whatsapp_phone
            .as_deref()
            .map(str::trim)
            .filter(|phone| !phone.is_empty())
            .map(ToString::to_string)
    }
}
