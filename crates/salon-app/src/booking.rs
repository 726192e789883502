//! Outbound booking handoff: the WhatsApp chat link

use salon_core::prelude::*;
use url::Url;

use crate::config::BookingSettings;

const WHATSAPP_BASE: &str = "https://wa.me/";

/// Build `https://wa.me/<number>?text=<greeting>` from settings
pub fn booking_url(settings: &BookingSettings) -> Result<Url> {
    let number = settings.whatsapp_number.trim().trim_start_matches('+');
    if number.is_empty() || !number.chars().all(|c| c.is_ascii_digit()) {
        return Err(Error::booking_link(format!(
            "invalid WhatsApp number '{}'",
            settings.whatsapp_number
        )));
    }

    let mut url = Url::parse(WHATSAPP_BASE)
        .and_then(|base| base.join(number))
        .map_err(|e| Error::booking_link(e.to_string()))?;

    if !settings.greeting.is_empty() {
        url.query_pairs_mut().append_pair("text", &settings.greeting);
    }

    Ok(url)
}
