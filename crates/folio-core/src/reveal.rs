//! Entrance presentation driven by viewport visibility
//!
//! Purely cosmetic: a [`Reveal`] only ever produces inline styles. It never
//! decides which cards exist or whether they can be clicked.

/// Transition length for the section heading
pub const HEADING_TRANSITION_MS: u32 = 100;

/// Transition length for the card grid
pub const GRID_TRANSITION_MS: u32 = 1000;

/// Downward offset of the hidden grid
pub const GRID_HIDDEN_OFFSET: &str = "2.5rem";

/// Hidden (transparent, offset) or shown (opaque, at rest)
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Reveal {
    #[default]
    Hidden,
    Shown,
}

impl Reveal {
    /// Map the visibility signal to a presentation state
    ///
    /// The signal may flip back to `false`; that simply hides again.
    pub fn from_visible(visible: bool) -> Self {
        if visible {
            Reveal::Shown
        } else {
            Reveal::Hidden
        }
    }

    pub fn opacity(&self) -> u8 {
        match self {
            Reveal::Hidden => 0,
            Reveal::Shown => 1,
        }
    }

    /// Inline style for the heading: fades only
    pub fn heading_style(&self) -> String {
        format!(
            "opacity: {}; transition: all {}ms ease;",
            self.opacity(),
            HEADING_TRANSITION_MS
        )
    }

    /// Inline style for the grid: fades and slides up into place
    pub fn grid_style(&self) -> String {
        let offset = match self {
            Reveal::Hidden => GRID_HIDDEN_OFFSET,
            Reveal::Shown => "0",
        };
        format!(
            "opacity: {}; transform: translateY({}); transition: all {}ms ease;",
            self.opacity(),
            offset,
            GRID_TRANSITION_MS
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_hidden() {
        assert_eq!(Reveal::default(), Reveal::Hidden);
    }

    #[test]
    fn follows_signal_both_ways() {
        assert_eq!(Reveal::from_visible(true), Reveal::Shown);
        assert_eq!(Reveal::from_visible(false), Reveal::Hidden);
    }

    #[test]
    fn hidden_grid_is_transparent_and_offset() {
        assert_eq!(
            Reveal::Hidden.grid_style(),
            "opacity: 0; transform: translateY(2.5rem); transition: all 1000ms ease;"
        );
    }

    #[test]
    fn shown_grid_is_at_rest() {
        assert_eq!(
            Reveal::Shown.grid_style(),
            "opacity: 1; transform: translateY(0); transition: all 1000ms ease;"
        );
    }

    #[test]
    fn heading_uses_faster_transition() {
        assert_eq!(Reveal::Hidden.heading_style(), "opacity: 0; transition: all 100ms ease;");
        assert_eq!(Reveal::Shown.heading_style(), "opacity: 1; transition: all 100ms ease;");
    }
}
