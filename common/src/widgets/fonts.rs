//! Font selection by requested pixel size.
//!
//! Responsive metrics ask for continuous font sizes; the display only has a
//! handful of bitmap fonts. [`FontPolicy::pick`] chooses the tallest font
//! that fits the requested size. The policy is the presentation-side answer
//! to platform font weight: iOS renders headings with bold faces, other
//! platforms with ProFont.

use embedded_graphics::mono_font::MonoFont;
use embedded_graphics::mono_font::ascii::{
    FONT_6X13_BOLD,
    FONT_6X13_ITALIC,
    FONT_7X13_BOLD,
    FONT_7X13_ITALIC,
    FONT_7X14_BOLD,
    FONT_8X13_BOLD,
    FONT_8X13_ITALIC,
    FONT_9X15_BOLD,
    FONT_9X18_BOLD,
    FONT_10X20,
};
use profont::{
    PROFONT_7_POINT,
    PROFONT_9_POINT,
    PROFONT_10_POINT,
    PROFONT_12_POINT,
    PROFONT_14_POINT,
    PROFONT_18_POINT,
    PROFONT_24_POINT,
};

use crate::labels::Platform;

type Ladder = [&'static MonoFont<'static>];

static PROFONT_LADDER: [&MonoFont<'static>; 7] = [
    &PROFONT_7_POINT,
    &PROFONT_9_POINT,
    &PROFONT_10_POINT,
    &PROFONT_12_POINT,
    &PROFONT_14_POINT,
    &PROFONT_18_POINT,
    &PROFONT_24_POINT,
];

static BOLD_LADDER: [&MonoFont<'static>; 8] = [
    &PROFONT_7_POINT,
    &FONT_6X13_BOLD,
    &FONT_7X13_BOLD,
    &FONT_8X13_BOLD,
    &FONT_7X14_BOLD,
    &FONT_9X15_BOLD,
    &FONT_9X18_BOLD,
    &PROFONT_24_POINT,
];

static ITALIC_LADDER: [&MonoFont<'static>; 5] = [
    &PROFONT_7_POINT,
    &PROFONT_9_POINT,
    &FONT_6X13_ITALIC,
    &FONT_7X13_ITALIC,
    &FONT_8X13_ITALIC,
];

static MONOSPACE_LADDER: [&MonoFont<'static>; 3] = [&PROFONT_9_POINT, &PROFONT_12_POINT, &FONT_10X20];

/// Typographic role of a text element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FontRole {
    /// Hello, name and title.
    Heavy,
    /// Subtitle, pronouns, button label, indicator.
    Regular,
    /// Tagline and instructions.
    Italic,
    /// Viewport dimensions.
    Monospace,
}

/// Font ladders per role for one platform.
#[derive(Clone, Copy)]
pub struct FontPolicy {
    heavy: &'static Ladder,
    regular: &'static Ladder,
    italic: &'static Ladder,
    monospace: &'static Ladder,
}

impl FontPolicy {
    pub fn for_platform(platform: Platform) -> Self {
        let heavy: &'static Ladder = match platform {
            Platform::Ios => &BOLD_LADDER,
            Platform::Other => &PROFONT_LADDER,
        };
        Self {
            heavy,
            regular: &PROFONT_LADDER,
            italic: &ITALIC_LADDER,
            monospace: &MONOSPACE_LADDER,
        }
    }

    /// Tallest font of `role` no taller than `px`; the smallest one if none fits.
    pub fn pick(
        &self,
        role: FontRole,
        px: f32,
    ) -> &'static MonoFont<'static> {
        let ladder = match role {
            FontRole::Heavy => self.heavy,
            FontRole::Regular => self.regular,
            FontRole::Italic => self.italic,
            FontRole::Monospace => self.monospace,
        };

        let fitting = ladder
            .iter()
            .filter(|font| font.character_size.height as f32 <= px)
            .max_by_key(|font| font.character_size.height);
        let smallest = ladder.iter().min_by_key(|font| font.character_size.height);

        // Ladders are non-empty statics
        fitting.or(smallest).copied().unwrap_or(&PROFONT_7_POINT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pick_fits_requested_size() {
        let policy = FontPolicy::for_platform(Platform::Other);
        for px in [16.0, 20.0, 34.0, 56.0] {
            let font = policy.pick(FontRole::Heavy, px);
            assert!(font.character_size.height as f32 <= px, "{px}px");
        }
    }

    #[test]
    fn test_pick_grows_with_size() {
        let policy = FontPolicy::for_platform(Platform::Other);
        let small = policy.pick(FontRole::Regular, 14.0);
        let large = policy.pick(FontRole::Regular, 40.0);
        assert!(large.character_size.height > small.character_size.height);
    }

    #[test]
    fn test_pick_falls_back_to_smallest() {
        let policy = FontPolicy::for_platform(Platform::Ios);
        let font = policy.pick(FontRole::Italic, 1.0);
        let min = ITALIC_LADDER.iter().map(|f| f.character_size.height).min().unwrap();
        assert_eq!(font.character_size.height, min);
    }

    #[test]
    fn test_ios_uses_bold_headings() {
        let ios = FontPolicy::for_platform(Platform::Ios).pick(FontRole::Heavy, 18.0);
        let other = FontPolicy::for_platform(Platform::Other).pick(FontRole::Heavy, 18.0);
        assert!(!core::ptr::eq(ios, other));
    }
}
