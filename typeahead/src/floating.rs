//! Floating panel seam: placement and interaction wiring.
//!
//! The widget only knows whether its panel is shown. Where the panel lands,
//! which gestures open or dismiss it, and which accessibility roles the
//! input and panel carry are supplied by a [`FloatingAdapter`]. [`Anchored`]
//! is the default: a dropdown below the input that flips above when the
//! viewport runs out.

/// A rectangle in terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub const fn right(&self) -> u16 {
        self.x.saturating_add(self.width)
    }

    pub const fn bottom(&self) -> u16 {
        self.y.saturating_add(self.height)
    }

    pub const fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }
}

/// Width and height in terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Size {
    pub width: u16,
    pub height: u16,
}

impl Size {
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Which gestures open and dismiss the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interactions {
    /// Pressing the input while the panel is open closes it.
    pub toggle_on_press: bool,
    /// Pressing outside the widget closes the panel.
    pub dismiss_on_outside_press: bool,
    /// Escape closes the panel.
    pub dismiss_on_escape: bool,
}

impl Default for Interactions {
    fn default() -> Self {
        Self {
            toggle_on_press: true,
            dismiss_on_outside_press: true,
            dismiss_on_escape: true,
        }
    }
}

/// Accessibility wiring for the input (the reference element).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceRole {
    pub id: String,
    /// Value for `aria-haspopup`.
    pub has_popup: &'static str,
    /// Value for `aria-expanded`.
    pub expanded: bool,
    /// Value for `aria-controls`, set only while the panel is shown.
    pub controls: Option<String>,
}

/// Accessibility wiring for the panel (the floating element).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FloatingRole {
    pub id: String,
    pub role: &'static str,
}

/// Roles for both elements of one widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roles {
    pub reference: ReferenceRole,
    pub floating: FloatingRole,
}

impl Roles {
    /// Popup roles for a panel of the given kind (`"dialog"`, `"listbox"`, ...).
    pub fn popup(role: &'static str, reference_id: &str, floating_id: &str, open: bool) -> Self {
        Self {
            reference: ReferenceRole {
                id: reference_id.to_string(),
                has_popup: role,
                expanded: open,
                controls: open.then(|| floating_id.to_string()),
            },
            floating: FloatingRole {
                id: floating_id.to_string(),
                role,
            },
        }
    }
}

/// Positioning and interaction provider for the floating panel.
pub trait FloatingAdapter {
    /// Compute where the panel goes, given the input's rectangle, the
    /// panel's desired size, and the visible area.
    fn place(&self, anchor: Rect, content: Size, viewport: Rect) -> Rect;

    /// Open/dismiss gesture policy.
    fn interactions(&self) -> Interactions {
        Interactions::default()
    }

    /// Accessibility roles for the input and the panel.
    fn roles(&self, reference_id: &str, floating_id: &str, open: bool) -> Roles {
        Roles::popup("dialog", reference_id, floating_id, open)
    }
}

/// Preferred side of the anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Placement {
    /// Below the anchor. Falls back to above if there is no room below.
    #[default]
    Below,
    /// Above the anchor. Falls back to below if there is no room above.
    Above,
}

/// Default adapter: a dropdown attached to one side of the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Anchored {
    pub placement: Placement,
    /// Gap between the input and the panel, in cells.
    pub offset: u16,
    pub interactions: Interactions,
}

impl Anchored {
    pub fn new(placement: Placement) -> Self {
        Self {
            placement,
            ..Self::default()
        }
    }

    pub fn with_offset(mut self, offset: u16) -> Self {
        self.offset = offset;
        self
    }

    pub fn with_interactions(mut self, interactions: Interactions) -> Self {
        self.interactions = interactions;
        self
    }
}

impl FloatingAdapter for Anchored {
    fn place(&self, anchor: Rect, content: Size, viewport: Rect) -> Rect {
        // Constrain dimensions to the viewport
        let width = content.width.min(viewport.width);
        let height = content.height.min(viewport.height);

        let below = anchor.bottom().saturating_add(self.offset);
        let above = anchor
            .y
            .checked_sub(self.offset)
            .and_then(|y| y.checked_sub(height))
            .filter(|y| *y >= viewport.y);
        let fits_below = u32::from(below) + u32::from(height) <= u32::from(viewport.bottom());

        let y = match (self.placement, fits_below, above) {
            (Placement::Below, true, _) => below,
            (Placement::Below, false, Some(y)) => y,
            (Placement::Above, _, Some(y)) => y,
            (Placement::Above, true, None) => below,
            // Fits on neither side: keep it inside the viewport
            (_, false, None) => viewport.bottom().saturating_sub(height).min(below),
        };

        let x = constrain_x(anchor.x, width, viewport);

        log::trace!(
            "Anchored::place anchor={:?} content={:?} -> ({}, {}, {}, {})",
            anchor,
            content,
            x,
            y,
            width,
            height
        );

        Rect::new(x, y, width, height)
    }

    fn interactions(&self) -> Interactions {
        self.interactions
    }
}

fn constrain_x(x: u16, width: u16, viewport: Rect) -> u16 {
    let max_x = viewport.right().saturating_sub(width);
    x.min(max_x).max(viewport.x)
}
