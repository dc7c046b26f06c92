//! Fixed color palettes and the cycling selection over them.

use embedded_graphics::pixelcolor::Rgb565;

use crate::colors::{BLACK, CORAL_RED, NAVY, PURPLE, SAFFRON, SANDY_ORANGE, STEEL_BLUE, TEAL};

/// Badge background palette, in tap order.
pub const BADGE_PALETTE: [Rgb565; 6] = [CORAL_RED, STEEL_BLUE, TEAL, SAFFRON, SANDY_ORANGE, PURPLE];

/// Name text palette, in tap order.
pub const TEXT_PALETTE: [Rgb565; 4] = [NAVY, BLACK, TEAL, PURPLE];

/// A selection from a fixed, ordered, non-empty palette.
///
/// The selected index is always in range: advancing wraps at the end.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorCycle<C: 'static> {
    palette: &'static [C],
    index: usize,
}

impl<C: Copy + 'static> ColorCycle<C> {
    /// Start at the first entry. Returns `None` for an empty palette.
    pub const fn new(palette: &'static [C]) -> Option<Self> { Self::starting_at(palette, 0) }

    /// Start at `index`, wrapped into the palette. Returns `None` for an empty palette.
    pub const fn starting_at(
        palette: &'static [C],
        index: usize,
    ) -> Option<Self> {
        if palette.is_empty() {
            return None;
        }
        Some(Self {
            palette,
            index: index % palette.len(),
        })
    }

    /// Currently selected color.
    #[inline]
    pub const fn current(&self) -> C { self.palette[self.index] }

    #[inline]
    pub const fn index(&self) -> usize { self.index }

    #[inline]
    pub const fn palette(&self) -> &'static [C] { self.palette }

    /// Move to the next entry, wrapping, and return it.
    pub fn advance(&mut self) -> C {
        self.index = (self.index + 1) % self.palette.len();
        self.current()
    }
}

impl ColorCycle<Rgb565> {
    /// Badge background cycle, starting at coral red.
    pub const fn badge() -> Self {
        Self {
            palette: &BADGE_PALETTE,
            index: 0,
        }
    }

    /// Name text cycle, starting at navy.
    pub const fn text() -> Self {
        Self {
            palette: &TEXT_PALETTE,
            index: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static EMPTY: [u8; 0] = [];
    static DIGITS: [u8; 3] = [10, 20, 30];

    #[test]
    fn test_empty_palette_rejected() {
        assert!(ColorCycle::new(&EMPTY).is_none());
    }

    #[test]
    fn test_cycle_wraps() {
        let mut cycle = ColorCycle::new(&DIGITS).unwrap();
        assert_eq!(cycle.current(), 10);
        assert_eq!(cycle.advance(), 20);
        assert_eq!(cycle.advance(), 30);
        assert_eq!(cycle.advance(), 10);
        assert_eq!(cycle.index(), 0);
    }

    #[test]
    fn test_n_advances_lands_on_n_mod_len() {
        for n in 0..20 {
            let mut cycle = ColorCycle::badge();
            for _ in 0..n {
                cycle.advance();
            }
            assert_eq!(cycle.current(), BADGE_PALETTE[n % BADGE_PALETTE.len()]);
            assert!(cycle.index() < BADGE_PALETTE.len());
        }
    }

    #[test]
    fn test_three_badge_taps_land_on_index_three() {
        let mut cycle = ColorCycle::badge();
        cycle.advance();
        cycle.advance();
        cycle.advance();
        assert_eq!(cycle.index(), 3);
        assert_eq!(cycle.current(), SAFFRON);
    }

    #[test]
    fn test_starting_index_wraps_into_range() {
        let cycle = ColorCycle::starting_at(&DIGITS, 7).unwrap();
        assert_eq!(cycle.index(), 1);
    }

    #[test]
    fn test_default_palettes_start_at_first_entry() {
        assert_eq!(ColorCycle::badge().current(), CORAL_RED);
        assert_eq!(ColorCycle::text().current(), NAVY);
    }
}
