//! Helpers for whoever displays the parsed card.

const LISTING_URL_PREFIXES: [&str; 2] = ["https://www.avito.ru/", "http://www.avito.ru/"];

/// Whether `url` points at an Avito page. Only such URLs should reach the parser.
pub fn is_listing_url(url: &str) -> bool {
    let url = url.trim();
    LISTING_URL_PREFIXES
        .iter()
        .any(|prefix| url.starts_with(prefix))
}

/// Appends the HTML link back to the source listing.
pub fn with_source_link(card: &str, url: &str) -> String {
    format!("{}<a href=\"{}\">🔗 Переход на объявление</a>", card, url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_only_avito_urls() {
        assert!(is_listing_url("https://www.avito.ru/ekaterinburg/kvartiry/123"));
        assert!(is_listing_url("  http://www.avito.ru/x  "));
        assert!(!is_listing_url("https://avito.ru/x"));
        assert!(!is_listing_url("https://www.avito.ru.evil.com/x"));
        assert!(!is_listing_url("https://www.cian.ru/sale/flat/1/"));
    }

    #[test]
    fn link_follows_card_text() {
        assert_eq!(
            with_source_link("card\n\n", "https://www.avito.ru/1"),
            "card\n\n<a href=\"https://www.avito.ru/1\">🔗 Переход на объявление</a>"
        );
    }
}
