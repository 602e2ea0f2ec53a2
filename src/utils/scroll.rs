use crate::utils::viewport::ViewportSource;

/// Geometry needed to map the scroll position onto a section's bands.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollGeometry {
    pub scroll_top: f64,
    pub section_top: f64,
    pub section_height: f64,
    pub viewport_height: f64,
}

impl ScrollGeometry {
    /// Reads the current geometry for the element with `section_id`.
    /// Returns `None` while the element is not mounted.
    pub fn measure(source: &dyn ViewportSource, section_id: &str) -> Option<Self> {
        let (section_top, section_height) = source.element_bounds(section_id)?;
        Some(Self {
            scroll_top: source.scroll_top(),
            section_top,
            section_height,
            viewport_height: source.viewport_height(),
        })
    }

    /// True while the scroll offset lies between half a viewport above the
    /// section's top and half a viewport above its bottom.
    pub fn in_window(&self) -> bool {
        let half = self.viewport_height / 2.0;
        self.scroll_top >= self.section_top - half
            && self.scroll_top <= self.section_top + self.section_height - half
    }

    /// Index of the band the viewport midline falls into, when it is a
    /// valid position among `count` equal bands.
    pub fn band_index(&self, count: usize) -> Option<usize> {
        if count == 0 || self.section_height <= 0.0 || !self.in_window() {
            return None;
        }
        let relative = self.scroll_top - self.section_top + self.viewport_height / 2.0;
        let band_height = self.section_height / count as f64;
        let band = (relative / band_height).floor();
        if band < 0.0 || band >= count as f64 {
            return None;
        }
        Some(band as usize)
    }
}

/// The "active item" of an ordered list, kept in step with scrolling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveIndex {
    active: usize,
    count: usize,
}

impl ActiveIndex {
    pub fn with_active(active: usize, count: usize) -> Self {
        Self { active, count }
    }

    pub fn active(&self) -> usize {
        self.active
    }

    /// Applies a new measurement. Returns whether the active index changed.
    pub fn observe(&mut self, geometry: Option<ScrollGeometry>) -> bool {
        let Some(geometry) = geometry else {
            return false;
        };
        match geometry.band_index(self.count) {
            Some(band) if band != self.active => {
                self.active = band;
                true
            }
            _ => false,
        }
    }
}
