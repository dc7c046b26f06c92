//! Fixed badge text and labels derived from state.

use heapless::String;

use crate::diagnostics::push_u32;
use crate::viewport::Viewport;

pub const TITLE: &str = "Name Badge";
pub const HELLO: &str = "HELLO";
pub const MY_NAME_IS: &str = "MY NAME IS";
pub const CHANGE_TEXT_COLOR: &str = "Change Text Color";

/// Capacity of a "W x H" label: two u32s plus the separator.
pub const DIMENSIONS_LABEL_LEN: usize = 24;

/// Host platform, resolved by the presentation surface.
///
/// Only affects wording and font weight, never the core state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Platform {
    Ios,
    #[default]
    Other,
}

impl Platform {
    /// Hint shown under the orientation indicator.
    pub const fn instruction_tip(self) -> &'static str {
        match self {
            Self::Ios => "Tip: Rotate your device or click the rotate icon above",
            Self::Other => "Tip: Rotate your device or use the rotation button",
        }
    }
}

/// Viewport size rounded to whole pixels, e.g. `"393 x 852"`.
pub fn dimensions_label(viewport: Viewport) -> String<DIMENSIONS_LABEL_LEN> {
    let (w, h) = viewport.rounded();
    let mut label = String::new();
    push_u32(&mut label, w);
    label.push_str(" x ").ok();
    push_u32(&mut label, h);
    label
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimensions_label_rounds() {
        let vp = Viewport::new(392.6, 851.4).unwrap();
        assert_eq!(dimensions_label(vp).as_str(), "393 x 851");
    }

    #[test]
    fn test_dimensions_label_fits_max_u32() {
        let vp = Viewport::new(4_000_000_000.0, 1.0).unwrap();
        assert!(dimensions_label(vp).as_str().ends_with(" x 1"));
    }

    #[test]
    fn test_tip_differs_by_platform() {
        assert_ne!(Platform::Ios.instruction_tip(), Platform::Other.instruction_tip());
        assert_eq!(Platform::default(), Platform::Other);
    }
}
