//! Orientation-adaptive arrangement of the screen.
//!
//! The arrangement is recomputed from the orientation on every render pass.
//! There is no hysteresis: each flip of the viewport flips the layout.

/// Device orientation, derived from the viewport each render pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Portrait,
    Landscape,
}

impl Orientation {
    /// Landscape when strictly wider than tall; a square viewport is portrait.
    pub fn from_viewport(width: f32, height: f32) -> Self {
        if width > height {
            Orientation::Landscape
        } else {
            Orientation::Portrait
        }
    }
}

/// One placeable piece of the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Logo,
    Header,
    /// Flexible space that grows to fill the remaining height.
    Spacer,
    /// Fixed-size gap between two stacked slots.
    Gap,
    DetailCard,
    OptionRow,
}

const PORTRAIT: &[Slot] = &[
    Slot::Logo,
    Slot::Header,
    Slot::Spacer,
    Slot::DetailCard,
    Slot::Spacer,
    Slot::OptionRow,
];

// Logo is left out of landscape: drawing it at the card's position would
// cover the card.
const LANDSCAPE_LEFT: &[Slot] = &[Slot::DetailCard];
const LANDSCAPE_RIGHT: &[Slot] = &[Slot::Header, Slot::Gap, Slot::OptionRow];

/// How slots are placed for one orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arrangement {
    /// Single centered column spanning the full width.
    Column { slots: &'static [Slot] },
    /// Two regions of equal width side by side.
    Split {
        left: &'static [Slot],
        right: &'static [Slot],
    },
}

impl Arrangement {
    pub fn for_orientation(orientation: Orientation) -> Self {
        match orientation {
            Orientation::Portrait => Arrangement::Column { slots: PORTRAIT },
            Orientation::Landscape => Arrangement::Split {
                left: LANDSCAPE_LEFT,
                right: LANDSCAPE_RIGHT,
            },
        }
    }

    pub fn orientation(&self) -> Orientation {
        match self {
            Arrangement::Column { .. } => Orientation::Portrait,
            Arrangement::Split { .. } => Orientation::Landscape,
        }
    }

    /// All slots in reading order (left region before right).
    pub fn slots(&self) -> impl Iterator<Item = Slot> + '_ {
        let (first, second): (&'static [Slot], &'static [Slot]) = match *self {
            Arrangement::Column { slots } => (slots, &[]),
            Arrangement::Split { left, right } => (left, right),
        };
        first.iter().chain(second.iter()).copied()
    }

    pub fn contains(&self, slot: Slot) -> bool {
        self.slots().any(|s| s == slot)
    }
}
