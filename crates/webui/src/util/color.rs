use std::hash::DefaultHasher;
use std::hash::Hash as _;
use std::hash::Hasher as _;

/// Stable avatar background for a person, dark enough for white initials.
pub fn avatar_color(s: &str) -> String {
    let mut hasher = DefaultHasher::new();
    s.hash(&mut hasher);
    let hash = hasher.finish();
    avatar_color_from_hash(hash)
}

pub fn avatar_color_from_hash(hash: u64) -> String {
    // Hue: 0-360
    let h = hash % 360;
    // Saturation: 45-70%
    let s = 45 + ((hash >> 16) % 26);
    // Lightness: 35-50%
    let l = 35 + ((hash >> 32) % 16);

    format!("hsl({h}, {s}%, {l}%)")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_name_same_color() {
        assert_eq!(avatar_color("Ann"), avatar_color("Ann"));
    }

    #[test]
    fn components_stay_in_range() {
        assert_eq!("hsl(0, 45%, 35%)", avatar_color_from_hash(0));
        assert_eq!("hsl(15, 58%, 50%)", avatar_color_from_hash(u64::MAX));
    }
}
