// File: portal-tui/src/qr.rs

use qrcode::render::unicode;
use qrcode::types::QrError;
use qrcode::QrCode;

/// Renders a QR code for the redemption code as a unicode block. The payload
/// is exactly the code, nothing else. Callers treat a failure as non-fatal.
pub fn render(payload: &str) -> Result<String, QrError> {
    let code = QrCode::new(payload.as_bytes())?;
    Ok(code
        .render::<unicode::Dense1x2>()
        .quiet_zone(true)
        .build())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_a_block_for_a_redemption_code() {
        let qr = render("RSG-2026-00042").unwrap();
        assert!(!qr.is_empty());
        assert!(qr.lines().count() > 10);
    }

    #[test]
    fn renders_even_the_placeholder_payload() {
        // A body without a code still yields the placeholder glyph as payload.
        assert!(render("—").is_ok());
    }
}
