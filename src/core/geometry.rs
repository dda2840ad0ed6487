use crate::error::{Result, TelelexError};

/// Pixel margins of the headline band inside a teletext frontpage frame.
/// The band starts below the page header and ends above the footer chrome.
const BAND_LEFT: u32 = 50;
const BAND_TOP: u32 = 80;
const BAND_BOTTOM_MARGIN: u32 = 110;

/// An axis-aligned crop rectangle in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropArea {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl CropArea {
    /// The fixed region of a frontpage frame that contains only news
    /// headlines, with the broadcaster logo and footer rows removed.
    ///
    /// Fails if the frame is too small to hold the band at all.
    pub fn headline_band(width: u32, height: u32) -> Result<Self> {
        let bottom = height.saturating_sub(BAND_BOTTOM_MARGIN);
        let area = Self {
            left: BAND_LEFT,
            top: BAND_TOP,
            right: width,
            bottom,
        };
        if area.right <= area.left || area.bottom <= area.top {
            return Err(TelelexError::Geometry {
                left: area.left,
                top: area.top,
                right: area.right,
                bottom: area.bottom,
                width,
                height,
            });
        }
        Ok(area)
    }

    pub fn width(&self) -> u32 {
        self.right - self.left
    }

    pub fn height(&self) -> u32 {
        self.bottom - self.top
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn band_for_expected_frame() {
        let area = CropArea::headline_band(480, 360).unwrap();
        assert_eq!(area, CropArea { left: 50, top: 80, right: 480, bottom: 250 });
        assert_eq!(area.width(), 430);
        assert_eq!(area.height(), 170);
    }

    #[test]
    fn band_follows_frame_size() {
        let area = CropArea::headline_band(500, 400).unwrap();
        assert_eq!(area.right, 500);
        assert_eq!(area.bottom, 290);
    }

    #[test]
    fn rejects_frame_shorter_than_margins() {
        // 80 + 110 rows of chrome leave no headline rows in a 150px frame
        let err = CropArea::headline_band(480, 150).unwrap_err();
        assert!(matches!(err, TelelexError::Geometry { .. }));
    }

    #[test]
    fn rejects_frame_narrower_than_left_margin() {
        let err = CropArea::headline_band(40, 360).unwrap_err();
        assert!(matches!(err, TelelexError::Geometry { .. }));
    }
}
