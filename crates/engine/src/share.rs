//! Share link for the summary.

/// Base of the WhatsApp "click to chat" link. The summary goes in `text`.
pub const WHATSAPP_BASE: &str = "https://wa.me/?text=";

/// Builds the link that opens WhatsApp with `summary` as the message.
pub fn whatsapp_link(summary: &str) -> String {
    let mut link = String::with_capacity(WHATSAPP_BASE.len() + summary.len() * 3);
    link.push_str(WHATSAPP_BASE);
    link.push_str(&encode_uri_component(summary));
    link
}

/// Percent-encodes every UTF-8 byte except `A-Z a-z 0-9 - _ . ! ~ * ' ( )`.
///
/// Same output as the browser's `encodeURIComponent`.
pub fn encode_uri_component(input: &str) -> String {
    const HEX: &[u8; 16] = b"0123456789ABCDEF";

    let mut encoded = String::with_capacity(input.len());
    for &byte in input.as_bytes() {
        if is_unreserved(byte) {
            encoded.push(byte as char);
        } else {
            encoded.push('%');
            encoded.push(HEX[(byte >> 4) as usize] as char);
            encoded.push(HEX[(byte & 0x0F) as usize] as char);
        }
    }
    encoded
}

fn is_unreserved(byte: u8) -> bool {
    byte.is_ascii_alphanumeric()
        || matches!(byte, b'-' | b'_' | b'.' | b'!' | b'~' | b'*' | b'\'' | b'(' | b')')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_unreserved_characters() {
        assert_eq!(
            encode_uri_component("Az09-_.!~*'()"),
            "Az09-_.!~*'()"
        );
    }

    #[test]
    fn encodes_reserved_and_whitespace() {
        assert_eq!(encode_uri_component("a b"), "a%20b");
        assert_eq!(encode_uri_component("$10.00\n"), "%2410.00%0A");
        assert_eq!(encode_uri_component("a&b=c/d?#:"), "a%26b%3Dc%2Fd%3F%23%3A");
    }

    #[test]
    fn encodes_multibyte_characters_per_byte() {
        assert_eq!(encode_uri_component("ñ"), "%C3%B1");
        assert_eq!(encode_uri_component("🎂"), "%F0%9F%8E%82");
    }

    #[test]
    fn link_uses_whatsapp_template() {
        assert_eq!(
            whatsapp_link("*Total: $5.00*"),
            "https://wa.me/?text=*Total%3A%20%245.00*"
        );
    }
}
