/// Accent used for highlights, the name and the floating shapes.
pub const ACCENT: &str = "#C3E41D";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

/// Tailwind class names that change with the theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToneTokens {
    pub label_text: &'static str,
    pub muted_text: &'static str,
    pub body_text: &'static str,
    pub border_tone: &'static str,
    pub border_tone_soft: &'static str,
    pub panel_bg: &'static str,
    pub panel_bg_strong: &'static str,
    pub chip_border: &'static str,
    pub bullet_tone: &'static str,
}

const DARK_TOKENS: ToneTokens = ToneTokens {
    label_text: "text-neutral-500",
    muted_text: "text-neutral-400",
    body_text: "text-neutral-300",
    border_tone: "border-neutral-800/70",
    border_tone_soft: "border-neutral-800/60",
    panel_bg: "bg-neutral-950/40",
    panel_bg_strong: "bg-neutral-950/50",
    chip_border: "border-neutral-700/80",
    bullet_tone: "bg-neutral-500",
};

const LIGHT_TOKENS: ToneTokens = ToneTokens {
    label_text: "text-neutral-700",
    muted_text: "text-neutral-600",
    body_text: "text-neutral-700",
    border_tone: "border-neutral-200",
    border_tone_soft: "border-neutral-200/70",
    panel_bg: "bg-white/80",
    panel_bg_strong: "bg-white/90",
    chip_border: "border-neutral-300",
    bullet_tone: "bg-neutral-400",
};

impl Theme {
    pub fn toggle(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    pub fn tokens(self) -> ToneTokens {
        match self {
            Self::Dark => DARK_TOKENS,
            Self::Light => LIGHT_TOKENS,
        }
    }

    pub fn background(self) -> &'static str {
        match self {
            Self::Dark => "hsl(0 0% 0%)",
            Self::Light => "hsl(60 12% 96%)",
        }
    }

    pub fn foreground(self) -> &'static str {
        match self {
            Self::Dark => "hsl(0 0% 100%)",
            Self::Light => "hsl(0 0% 10%)",
        }
    }

    pub fn menu_background(self) -> &'static str {
        match self {
            Self::Dark => "hsl(0 0% 0%)",
            Self::Light => "hsl(0 0% 98%)",
        }
    }

    pub fn switch_track(self) -> &'static str {
        match self {
            Self::Dark => "hsl(0 0% 15%)",
            Self::Light => "hsl(0 0% 90%)",
        }
    }

    pub fn switch_knob_offset(self) -> &'static str {
        match self {
            Self::Dark => "translateX(2rem)",
            Self::Light => "translateX(0)",
        }
    }

    /// Alpha of the background grid lines.
    pub fn grid_alpha(self) -> &'static str {
        match self {
            Self::Dark => "0.08",
            Self::Light => "0.18",
        }
    }

    pub fn page_style(self) -> String {
        format!(
            "background-color: {}; color: {};",
            self.background(),
            self.foreground()
        )
    }
}

/// Inline style for text drawn in the accent color.
pub fn accent_text_style(font_family: &str) -> String {
    format!("color: {ACCENT}; font-family: {font_family};")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_dark() {
        assert_eq!(Theme::default(), Theme::Dark);
        assert!(Theme::default().is_dark());
    }

    #[test]
    fn test_toggle_round_trip() {
        let start = Theme::Dark;
        let light = start.toggle();
        assert_eq!(light, Theme::Light);
        assert_ne!(light.tokens(), start.tokens());

        let back = light.toggle();
        assert_eq!(back, start);
        assert_eq!(back.tokens(), start.tokens());
        assert_eq!(back.page_style(), start.page_style());
    }

    #[test]
    fn test_accent_text_style() {
        assert_eq!(
            accent_text_style("'Fira Code', monospace"),
            "color: #C3E41D; font-family: 'Fira Code', monospace;"
        );
    }

    #[test]
    fn test_page_style() {
        assert_eq!(
            Theme::Light.page_style(),
            "background-color: hsl(60 12% 96%); color: hsl(0 0% 10%);"
        );
    }
}
