//! Length units used by WordprocessingML.
//!
//! Font sizes are stored in half-points (`w:sz`), spacing and indents in
//! twentieths of a point (twips, `w:spacing`, `w:ind`).

/// Font size in half-points (24 = 12pt).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HalfPoints(pub u32);

impl HalfPoints {
    /// Convert a point size, rounding to the nearest half-point.
    #[inline]
    pub fn from_pt(pt: f32) -> Self {
        Self((pt * 2.0).round().max(0.0) as u32)
    }

    #[inline]
    pub fn pt(self) -> f32 {
        self.0 as f32 / 2.0
    }
}

/// Distance in twips (1/20 point, 1/1440 inch).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Twips(pub i32);

impl Twips {
    pub const PER_INCH: i32 = 1440;
    pub const PER_PT: i32 = 20;

    #[inline]
    pub fn from_pt(pt: f32) -> Self {
        Self((pt * Self::PER_PT as f32).round() as i32)
    }

    #[inline]
    pub fn from_inches(inches: f32) -> Self {
        Self((inches * Self::PER_INCH as f32).round() as i32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_half_points() {
        assert_eq!(HalfPoints::from_pt(44.0), HalfPoints(88));
        assert_eq!(HalfPoints::from_pt(10.5), HalfPoints(21));
        assert_eq!(HalfPoints(22).pt(), 11.0);
    }

    #[test]
    fn test_twips() {
        assert_eq!(Twips::from_pt(12.0), Twips(240));
        assert_eq!(Twips::from_inches(1.0), Twips(1440));
    }
}
