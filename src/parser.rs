use crate::models::NOT_SPECIFIED;

/// Marker appended after every address part that is moved onto its own line.
const ADDRESS_LINE_MARKER: &str = "\n 📍";

/// Tokens that mark an address part as a street name.
const STREET_MARKERS: [&str; 2] = ["ул.", "пр-т"];

/// Title substring → canonical property type. Earlier entries win.
const PROPERTY_TYPES: &[(&str, &str)] = &[
    ("квартира", "Квартира"),
    ("Квартира-студия", "Студия"),
    ("Квартира", "Квартира"),
    ("Своб. планировка", "Свободная планировка"),
    ("Комната", "Комната"),
    ("Дом", "Дом"),
    ("Дача", "Дача"),
    ("Коттедж", "Коттедж"),
    ("Таунхаус", "Таунхаус"),
    ("ИЖС", "ИЖС"),
    ("СНТ, ДНП", "СНТ"),
    ("Гараж,", "Гараж"),
    ("Машиноместо", "Машиноместо"),
];

/// Maps a page title to a property type label, falling back to "Не указано".
pub fn classify_property_type(title: &str) -> String {
    PROPERTY_TYPES
        .iter()
        .find(|(trigger, _)| title.contains(trigger))
        .map(|(_, label)| label.to_string())
        .unwrap_or_else(|| NOT_SPECIFIED.to_string())
}

/// Groups the digits of a price with spaces ("8500000 ₽" → "8 500 000").
/// Anything that is not an integer once whitespace and the ruble sign are
/// removed is returned as given. There is no upper bound on the digit count.
pub fn format_price(raw: &str) -> String {
    let cleaned: String = raw
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '₽')
        .collect();

    let (sign, digits) = match cleaned.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", cleaned.strip_prefix('+').unwrap_or(&cleaned)),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return raw.to_string();
    }

    let digits = digits.trim_start_matches('0');
    if digits.is_empty() {
        return "0".to_string();
    }
    format!("{}{}", sign, group_thousands(digits))
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(digit);
    }
    grouped
}

/// Splits a comma-separated address into pin-marked lines.
///
/// "г. Екатеринбург, ул. Ленина, 10" becomes
/// "г. Екатеринбург\n 📍 ул. Ленина, 10": when the second-to-last part is a
/// street, the street and house number stay together on the last line.
/// An address without commas is returned unchanged.
pub fn normalize_address(address: &str) -> String {
    let parts: Vec<&str> = address.trim().split(',').collect();
    if parts.len() < 2 {
        return address.trim().to_string();
    }

    let street = parts[parts.len() - 2];
    let glued_tail = if is_street(street) { 2 } else { 1 };
    let split_at = parts.len() - glued_tail;

    let mut normalized = String::new();
    for part in &parts[..split_at] {
        normalized.push_str(part);
        normalized.push_str(ADDRESS_LINE_MARKER);
    }
    normalized.push_str(&parts[split_at..].join(","));

    normalized
}

fn is_street(part: &str) -> bool {
    STREET_MARKERS.iter().any(|marker| part.contains(marker))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_by_first_declared_trigger() {
        assert_eq!(classify_property_type("Дом 120 м² и Дача на участке"), "Дом");
        assert_eq!(classify_property_type("Дача 30 м², Дом рядом"), "Дом");
    }

    #[test]
    fn classifies_common_titles() {
        assert_eq!(
            classify_property_type("1-к. квартира, 40,6 м², 6/9 эт."),
            "Квартира"
        );
        assert_eq!(
            classify_property_type("1-к. Квартира, 40 м², 5/9 эт."),
            "Квартира"
        );
        assert_eq!(
            classify_property_type("Квартира-студия, 25 м², 3/16 эт."),
            "Студия"
        );
        assert_eq!(classify_property_type("Гараж, 18 м²"), "Гараж");
        assert_eq!(classify_property_type("Участок 6 сот. (СНТ, ДНП)"), "СНТ");
    }

    #[test]
    fn unknown_or_empty_title_is_not_specified() {
        assert_eq!(classify_property_type(""), NOT_SPECIFIED);
        assert_eq!(classify_property_type("Продам велосипед"), NOT_SPECIFIED);
    }

    #[test]
    fn formats_prices_with_space_groups() {
        assert_eq!(format_price("8 500 000 ₽"), "8 500 000");
        assert_eq!(format_price("5000000"), "5 000 000");
        assert_eq!(format_price("999"), "999");
        assert_eq!(format_price("1000"), "1 000");
        assert_eq!(format_price("12\u{a0}300₽"), "12 300");
        assert_eq!(format_price("-1234567"), "-1 234 567");
        assert_eq!(format_price("+1500"), "1 500");
        assert_eq!(format_price("007500"), "7 500");
        assert_eq!(format_price("-0"), "0");
    }

    #[test]
    fn groups_prices_beyond_machine_integers() {
        assert_eq!(
            format_price("123456789012345678901234 ₽"),
            "123 456 789 012 345 678 901 234"
        );
    }

    #[test]
    fn non_numeric_prices_pass_through() {
        assert_eq!(format_price(NOT_SPECIFIED), NOT_SPECIFIED);
        assert_eq!(format_price("договорная"), "договорная");
        assert_eq!(format_price(""), "");
        assert_eq!(format_price("-"), "-");
        assert_eq!(format_price("1.5"), "1.5");
        assert_eq!(format_price("--5"), "--5");
    }

    #[test]
    fn street_stays_with_house_number() {
        assert_eq!(
            normalize_address("г. Екатеринбург, ул. Ленина, 10"),
            "г. Екатеринбург\n 📍 ул. Ленина, 10"
        );
        assert_eq!(
            normalize_address("Свердловская обл., Екатеринбург, пр-т Ленина, 5"),
            "Свердловская обл.\n 📍 Екатеринбург\n 📍 пр-т Ленина, 5"
        );
    }

    #[test]
    fn non_street_address_keeps_only_last_part_inline() {
        assert_eq!(
            normalize_address("Свердловская обл., Берёзовский, мкр. Южный"),
            "Свердловская обл.\n 📍 Берёзовский\n 📍 мкр. Южный"
        );
    }

    #[test]
    fn address_without_commas_is_unchanged() {
        assert_eq!(normalize_address(NOT_SPECIFIED), NOT_SPECIFIED);
        assert_eq!(normalize_address("  Екатеринбург  "), "Екатеринбург");
    }

    #[test]
    fn normalization_depends_only_on_trimmed_input() {
        assert_eq!(
            normalize_address("  г. Екатеринбург, ул. Ленина, 10\n"),
            normalize_address("г. Екатеринбург, ул. Ленина, 10")
        );
    }
}
