/// Speed and constant bias of one parallax layer.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ParallaxConfig {
    pub speed: f64,
    pub offset: f64,
}

impl ParallaxConfig {
    pub const fn new(speed: f64) -> Self {
        Self { speed, offset: 0.0 }
    }

    pub const fn with_offset(self, offset: f64) -> Self {
        Self { offset, ..self }
    }
}

impl From<f64> for ParallaxConfig {
    fn from(speed: f64) -> Self {
        Self::new(speed)
    }
}

/// Vertical translation in pixels for a layer at `scroll_y`.
///
/// Disabled parallax (compact layouts) pins every layer at zero.
pub fn translation(scroll_y: f64, config: ParallaxConfig, enabled: bool) -> f64 {
    if !enabled {
        return 0.0;
    }
    scroll_y * config.speed + config.offset
}

/// Read-only parallax inputs for one render.
///
/// Every layer on the page reads the same snapshot, so they all move off the
/// same sampled offset within a frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parallax {
    pub scroll_y: f64,
    pub enabled: bool,
}

impl Default for Parallax {
    fn default() -> Self {
        Self {
            scroll_y: 0.0,
            enabled: true,
        }
    }
}

impl Parallax {
    pub fn new(scroll_y: f64, enabled: bool) -> Self {
        Self { scroll_y, enabled }
    }

    pub fn translation(&self, config: impl Into<ParallaxConfig>) -> f64 {
        translation(self.scroll_y, config.into(), self.enabled)
    }

    /// CSS `transform` value, e.g. `translateY(12.5px)`.
    pub fn transform(&self, config: impl Into<ParallaxConfig>) -> String {
        let px = self.translation(config);
        // avoid rendering "-0px"
        let px = if px == 0.0 { 0.0 } else { px };
        format!("translateY({px}px)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translation_enabled() {
        let cases = [
            (0.0, 0.06, 0.0),
            (500.0, 0.06, 0.0),
            (500.0, -0.03, 0.0),
            (1200.0, 0.1, 40.0),
            (37.5, -2.0, -10.0),
        ];
        for (scroll_y, speed, offset) in cases {
            let config = ParallaxConfig::new(speed).with_offset(offset);
            assert_eq!(
                translation(scroll_y, config, true),
                scroll_y * speed + offset
            );
        }
    }

    #[test]
    fn test_translation_disabled_is_zero() {
        for (scroll_y, speed, offset) in [(0.0, 1.0, 5.0), (900.0, -0.5, -30.0), (1e6, 3.0, 1.0)] {
            let config = ParallaxConfig::new(speed).with_offset(offset);
            assert_eq!(translation(scroll_y, config, false), 0.0);
        }
    }

    #[test]
    fn test_transform_strings() {
        let parallax = Parallax::new(200.0, true);
        assert_eq!(parallax.transform(0.1), "translateY(20px)");
        assert_eq!(parallax.transform(-0.05), "translateY(-10px)");
        assert_eq!(
            parallax.transform(ParallaxConfig::new(0.25).with_offset(2.5)),
            "translateY(52.5px)"
        );

        let compact = Parallax::new(200.0, false);
        assert_eq!(compact.transform(0.1), "translateY(0px)");
        assert_eq!(compact.transform(-0.05), "translateY(0px)");
    }

    #[test]
    fn test_transform_at_top_has_no_negative_zero() {
        let parallax = Parallax::default();
        assert_eq!(parallax.transform(-0.03), "translateY(0px)");
    }
}
