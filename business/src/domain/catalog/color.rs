/// Color for a missing category.
pub const NEUTRAL_COLOR: &str = "#9e9e9e";

/// Fallback palette indexed by the category name hash.
pub const PALETTE: [&str; 10] = [
    "#4caf50", // green
    "#2196f3", // blue
    "#ff9800", // orange
    "#9c27b0", // purple
    "#f44336", // red
    "#00bcd4", // cyan
    "#8bc34a", // light green
    "#ff5722", // deep orange
    "#607d8b", // blue grey
    "#3f51b5", // indigo
];

const KNOWN_CATEGORIES: [(&str, &str); 9] = [
    ("Хлебобулочные", "#ffb74d"),
    ("Молочные продукты", "#ffd54f"),
    ("Мясо и птица", "#ef9a9a"),
    ("Колбасы", "#ff8a65"),
    ("Овощи", "#66bb6a"),
    ("Фрукты", "#ffa726"),
    ("Рыба и морепродукты", "#4fc3f7"),
    ("Напитки", "#4dd0e1"),
    ("Кондитерские", "#f48fb1"),
];

/// Stable display color of a category.
///
/// Known categories use their fixed color. Any other name is hashed over its
/// UTF-16 code units with `hash = hash * 31 + unit` in wrapping 32-bit signed
/// arithmetic, and `|hash| mod PALETTE.len()` selects the palette entry. The
/// result is part of the category's visual identity and must never change
/// between releases.
pub fn color_for(category: &str) -> &'static str {
    if category.is_empty() {
        return NEUTRAL_COLOR;
    }
    if let Some((_, color)) = KNOWN_CATEGORIES.iter().find(|(name, _)| *name == category) {
        return color;
    }
    let index = category_hash(category).unsigned_abs() as usize % PALETTE.len();
    PALETTE[index]
}

pub fn category_hash(category: &str) -> i32 {
    category
        .encode_utf16()
        .fold(0i32, |hash, unit| hash.wrapping_mul(31).wrapping_add(i32::from(unit)))
}
