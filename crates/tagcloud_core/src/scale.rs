use std::fmt;

use crate::count::Count;
use crate::rank::RankedSelection;

/// Font size in points, always within `FontSize::MIN..=FontSize::MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FontSize(u8);

impl FontSize {
    pub const MIN: FontSize = FontSize(11);
    pub const MAX: FontSize = FontSize(48);

    pub fn value(self) -> u8 {
        self.0
    }

    /// Stylesheet class for this size, e.g. `f23`.
    pub fn class_name(self) -> String {
        format!("f{}", self.0)
    }

    /// Every size from `MIN` to `MAX`, ascending.
    pub fn all() -> impl Iterator<Item = FontSize> {
        (Self::MIN.0..=Self::MAX.0).map(FontSize)
    }
}

impl fmt::Display for FontSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Maps `count` linearly from `min..=max` onto the font range, rounding up.
///
/// A degenerate range (`max <= min`) and counts at or below `min` give
/// `FontSize::MIN`.
pub fn scale_count(count: Count, min: Count, max: Count) -> FontSize {
    if max <= min || count <= min {
        return FontSize::MIN;
    }
    let span = u64::from(FontSize::MAX.0 - FontSize::MIN.0);
    let offset = (span * (count.min(max) - min)).div_ceil(max - min);
    // offset <= span, so it fits.
    FontSize(FontSize::MIN.0 + offset as u8)
}

/// Font sizes for `selection`, positionally matching its alphabetical order.
pub fn font_sizes(selection: &RankedSelection) -> Vec<FontSize> {
    let Some((min, max)) = selection.count_range() else {
        return Vec::new();
    };
    selection
        .iter()
        .map(|ranked| scale_count(ranked.count, min, max))
        .collect()
}
