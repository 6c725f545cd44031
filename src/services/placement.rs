//! Popup placement relative to the trigger.
//!
//! Placement is computed when the popup opens and again when the height
//! preset changes while open. It is not recomputed on scroll or viewport
//! resize.

/// Trigger rectangle in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AnchorRect {
    pub top: f32,
    pub bottom: f32,
    pub left: f32,
    pub width: f32,
}

impl AnchorRect {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            top,
            bottom: top + height,
            left,
            width,
        }
    }

    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.left && x <= self.left + self.width && y >= self.top && y <= self.bottom
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopupSide {
    Above,
    Below,
}

/// Where the popup goes, plus the size it was placed with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PopupGeometry {
    pub top: f32,
    pub left: f32,
    pub width: f32,
    pub height: f32,
    pub side: PopupSide,
}

impl PopupGeometry {
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.left && x <= self.left + self.width && y >= self.top && y <= self.top + self.height
    }
}

/// Fixed inputs of the placement computation besides the anchor and viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PopupSize {
    pub width: f32,
    pub height: f32,
    pub gap: f32,
    pub margin: f32,
}

/// Place the popup below the anchor unless it does not fit there but does
/// fit above. If it fits neither way it goes below and may clip; a
/// degenerate anchor also lands below. Horizontally the popup is left
/// aligned with the anchor and pulled back when it would cross the right
/// edge.
pub fn compute_placement(anchor: AnchorRect, viewport: Viewport, size: PopupSize) -> PopupGeometry {
    let space_below = viewport.height - anchor.bottom;
    let (top, side) = if space_below < size.height && anchor.top >= size.height {
        (anchor.top - size.height - size.gap, PopupSide::Above)
    } else {
        (anchor.bottom + size.gap, PopupSide::Below)
    };

    let mut left = anchor.left;
    if left + size.width > viewport.width {
        left = viewport.width - size.width - size.margin;
    }

    log::debug!(
        "Placed popup {:?} at ({}, {}) for anchor {:?} in viewport {:?}",
        side,
        left,
        top,
        anchor,
        viewport
    );

    PopupGeometry {
        top,
        left,
        width: size.width,
        height: size.height,
        side,
    }
}
