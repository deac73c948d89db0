// Copyright 2025 the Bookcase Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// The measured extent of one item along the scroll axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutBox {
    /// Offset of the item's leading edge from the start of the content.
    pub left: f64,
    /// Extent of the item along the scroll axis.
    pub width: f64,
}

impl LayoutBox {
    /// The box assumed for an item that has not been measured yet.
    pub const UNMEASURED: Self = Self {
        left: 0.0,
        width: 120.0,
    };

    /// Creates a box from its leading edge and extent.
    #[must_use]
    pub const fn new(left: f64, width: f64) -> Self {
        Self { left, width }
    }

    /// Offset of the trailing edge.
    #[must_use]
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    /// Offset of the center.
    #[must_use]
    pub fn center(&self) -> f64 {
        self.left + self.width / 2.0
    }

    /// Returns `true` if this box overlaps the closed span `[start, end]`.
    ///
    /// Boxes that only touch an end of the span count as overlapping.
    #[must_use]
    pub fn intersects(&self, start: f64, end: f64) -> bool {
        self.right() >= start && self.left <= end
    }

    /// Returns this box with a non-positive width replaced by the unmeasured
    /// width.
    ///
    /// Hosts report a zero width for items that have not been laid out yet.
    #[must_use]
    pub fn or_unmeasured_width(self) -> Self {
        if self.width > 0.0 {
            self
        } else {
            Self {
                left: self.left,
                width: Self::UNMEASURED.width,
            }
        }
    }

    /// Returns `true` if both fields are finite and the width is not negative.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.left.is_finite() && self.width.is_finite() && self.width >= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::LayoutBox;

    #[test]
    fn edges_and_center() {
        let b = LayoutBox::new(100.0, 40.0);
        assert_eq!(b.right(), 140.0);
        assert_eq!(b.center(), 120.0);
    }

    #[test]
    fn touching_boxes_intersect() {
        let b = LayoutBox::new(100.0, 40.0);
        assert!(b.intersects(140.0, 200.0));
        assert!(!b.intersects(141.0, 200.0));
        assert!(b.intersects(0.0, 100.0));
        assert!(!b.intersects(0.0, 99.5));
    }

    #[test]
    fn zero_width_falls_back() {
        assert_eq!(LayoutBox::new(30.0, 0.0).or_unmeasured_width().width, 120.0);
        assert_eq!(LayoutBox::new(30.0, 8.0).or_unmeasured_width().width, 8.0);
    }

    #[test]
    fn validity() {
        assert!(LayoutBox::UNMEASURED.is_valid());
        assert!(!LayoutBox::new(f64::NAN, 1.0).is_valid());
        assert!(!LayoutBox::new(0.0, -1.0).is_valid());
    }
}
