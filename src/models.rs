use serde::Serialize;
use std::collections::BTreeMap;

/// Fallback text for any field the listing page does not provide.
pub const NOT_SPECIFIED: &str = "Не указано";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum AttributeKey {
    Rooms,
    TotalArea,
    Floor,
    PlotArea,
    HouseType,
    WallMaterial,
    BuildYear,
    DistanceToCenter,
    LandCategory,
    GarageType,
    ParkingType,
    RoomArea,
    RoomsInApartment,
    HouseArea,
    FloorsInHouse,
    Area,
}

/// One estate attribute: the label searched for in the parameters block and
/// the line it renders to. `display_template` has exactly one `{}` slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttributeSpec {
    pub key: AttributeKey,
    pub source_label: &'static str,
    pub display_template: &'static str,
}

impl AttributeSpec {
    const fn new(
        key: AttributeKey,
        source_label: &'static str,
        display_template: &'static str,
    ) -> Self {
        Self {
            key,
            source_label,
            display_template,
        }
    }

    pub fn render(&self, value: &str) -> String {
        self.display_template.replacen("{}", value, 1)
    }
}

/// Attribute registry. Order is both the scan order and the output order.
pub static ESTATE_ATTRIBUTES: &[AttributeSpec] = &[
    AttributeSpec::new(AttributeKey::Rooms, "Количество комнат", "🚪 Комнат: {}"),
    AttributeSpec::new(AttributeKey::TotalArea, "Общая площадь", "📐 Общая площадь: {}"),
    AttributeSpec::new(AttributeKey::Floor, "Этаж", "🪜  Этаж: {}"),
    AttributeSpec::new(AttributeKey::PlotArea, "Площадь участка", "🌳 Площадь участка: {}"),
    AttributeSpec::new(AttributeKey::HouseType, "Тип дома", "🏡 Тип дома: {}"),
    AttributeSpec::new(AttributeKey::WallMaterial, "Материал стен", "🧱 Материал стен: {}"),
    AttributeSpec::new(AttributeKey::BuildYear, "Год постройки", "📅 Год постройки: {}"),
    AttributeSpec::new(
        AttributeKey::DistanceToCenter,
        "Расстояние до центра города",
        "📍 Расстояние до центра: {}",
    ),
    AttributeSpec::new(AttributeKey::LandCategory, "Категория земель", "🏞️  Категория земель: {}"),
    AttributeSpec::new(AttributeKey::GarageType, "Тип гаража", "🚗 Тип гаража: {}"),
    AttributeSpec::new(AttributeKey::ParkingType, "Тип машиноместа", "🅿️ Тип машиноместа: {}"),
    AttributeSpec::new(AttributeKey::RoomArea, "Площадь комнаты", "🛏️  Площадь комнаты: {}"),
    AttributeSpec::new(
        AttributeKey::RoomsInApartment,
        "Комнат в квартире",
        "🏠 Комнат в квартире: {}",
    ),
    AttributeSpec::new(AttributeKey::HouseArea, "Площадь дома", "🏠 Площадь дома: {}"),
    AttributeSpec::new(AttributeKey::FloorsInHouse, "Этажей в доме", "🏠 Этажей в доме: {}"),
    AttributeSpec::new(AttributeKey::Area, "Площадь:", "📐 Площадь: {}"),
];

/// Everything extracted from one listing page. Lives for a single parse call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListingSnapshot {
    pub property_type: String,
    /// Already passed through the price formatter.
    pub price: String,
    /// Already passed through the address normalizer.
    pub address: String,
    pub attributes: BTreeMap<AttributeKey, Option<String>>,
}

impl ListingSnapshot {
    pub fn attribute(&self, key: AttributeKey) -> Option<&str> {
        self.attributes.get(&key).and_then(|value| value.as_deref())
    }

    /// Renders the card text: header, price, address, then every present
    /// attribute in registry order, then a trailing blank line.
    pub fn render(&self) -> String {
        let mut lines = vec![
            format!("🌟 <b>{}</b>", self.property_type),
            format!("💵 {}₽\n", self.price),
            format!("⛳️ {}\n", self.address),
        ];

        for spec in ESTATE_ATTRIBUTES {
            if let Some(value) = self.attribute(spec.key) {
                lines.push(spec.render(value));
            }
        }

        lines.push("\n\n".to_string());
        lines.join("\n")
    }
}
