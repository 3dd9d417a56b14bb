const NBSP: char = '\u{a0}';

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SplitMode {
    #[default]
    Words,
    Letters,
}

/// Side the hidden text slides in from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Direction {
    #[default]
    Top,
    Bottom,
}

impl Direction {
    fn hidden_offset_px(self) -> i32 {
        match self {
            Self::Top => -20,
            Self::Bottom => 20,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimationUnit {
    pub content: String,
    pub index: usize,
}

impl AnimationUnit {
    pub fn delay_ms(&self, base_delay_ms: u32) -> u64 {
        self.index as u64 * u64::from(base_delay_ms)
    }

    /// Text to render for this unit. Words keep their separator as a
    /// non-breaking space so wrapped spans don't collapse it.
    pub fn display_text(&self, mode: SplitMode, total: usize) -> String {
        match mode {
            SplitMode::Words if self.index + 1 < total => {
                let mut s = self.content.clone();
                s.push(NBSP);
                s
            }
            _ => self.content.clone(),
        }
    }
}

/// Split `text` into indexed animation units.
///
/// Words split on every single space, so runs of spaces produce empty units.
/// Letters keep spaces as units of their own.
pub fn split_units(text: &str, mode: SplitMode) -> Vec<AnimationUnit> {
    if text.is_empty() {
        return Vec::new();
    }
    let unit = |(index, content): (usize, String)| AnimationUnit { content, index };
    match mode {
        SplitMode::Words => text
            .split(' ')
            .map(str::to_string)
            .enumerate()
            .map(unit)
            .collect(),
        SplitMode::Letters => text.chars().map(String::from).enumerate().map(unit).collect(),
    }
}

/// Inline style for one unit of a staggered line.
pub fn unit_style(revealed: bool, direction: Direction, delay_ms: u64) -> String {
    let (filter, opacity, translate) = if revealed {
        ("blur(0px)", 1, 0)
    } else {
        ("blur(10px)", 0, direction.hidden_offset_px())
    };
    let translate = if translate == 0 {
        "translateY(0)".to_string()
    } else {
        format!("translateY({translate}px)")
    };
    format!(
        "display: inline-block; filter: {filter}; opacity: {opacity}; transform: {translate}; transition: all 0.5s ease-out {delay_ms}ms;"
    )
}

/// A line of text split for a staggered reveal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaggeredText {
    units: Vec<AnimationUnit>,
    mode: SplitMode,
    base_delay_ms: u32,
}

impl StaggeredText {
    pub fn new(text: &str, mode: SplitMode, base_delay_ms: u32) -> Self {
        Self {
            units: split_units(text, mode),
            mode,
            base_delay_ms,
        }
    }

    pub fn units(&self) -> &[AnimationUnit] {
        &self.units
    }

    pub fn mode(&self) -> SplitMode {
        self.mode
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Units in reveal order with their transition delay.
    pub fn schedule(&self) -> impl Iterator<Item = (&AnimationUnit, u64)> + '_ {
        self.units
            .iter()
            .map(move |unit| (unit, unit.delay_ms(self.base_delay_ms)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_letters() {
        let units = split_units("Ngene Daniel", SplitMode::Letters);
        assert_eq!(units.len(), 12);
        assert_eq!(units[5].content, " ");
        assert!(units.iter().enumerate().all(|(i, u)| u.index == i));

        let text = StaggeredText::new("Ngene Daniel", SplitMode::Letters, 100);
        let delays = text.schedule().map(|(_, d)| d).collect::<Vec<_>>();
        assert_eq!(delays.first(), Some(&0));
        assert_eq!(delays.last(), Some(&1100));
        assert!(delays.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_split_words() {
        let text = StaggeredText::new("Ngene Daniel", SplitMode::Words, 150);
        let schedule = text
            .schedule()
            .map(|(u, d)| (u.content.as_str(), d))
            .collect::<Vec<_>>();
        assert_eq!(schedule, vec![("Ngene", 0), ("Daniel", 150)]);
    }

    #[test]
    fn test_split_empty() {
        assert!(split_units("", SplitMode::Words).is_empty());
        assert!(split_units("", SplitMode::Letters).is_empty());
        assert!(StaggeredText::new("", SplitMode::Words, 50).is_empty());
    }

    #[test]
    fn test_split_words_keeps_empty_units() {
        let units = split_units("a  b", SplitMode::Words);
        let words = units.iter().map(|u| u.content.as_str()).collect::<Vec<_>>();
        assert_eq!(words, vec!["a", "", "b"]);
    }

    #[test]
    fn test_split_letters_multibyte() {
        let units = split_units("héllo", SplitMode::Letters);
        assert_eq!(units.len(), 5);
        assert_eq!(units[1].content, "é");
    }

    #[test]
    fn test_display_text_separators() {
        let text = StaggeredText::new("Web3 Engineer (Solana-Focused)", SplitMode::Words, 150);
        let rendered = text
            .units()
            .iter()
            .map(|u| u.display_text(text.mode(), text.len()))
            .collect::<String>();
        assert_eq!(rendered, "Web3\u{a0}Engineer\u{a0}(Solana-Focused)");

        let letters = StaggeredText::new("ab", SplitMode::Letters, 10);
        assert_eq!(letters.units()[0].display_text(SplitMode::Letters, 2), "a");
    }

    #[test]
    fn test_unit_style() {
        assert_eq!(
            unit_style(false, Direction::Top, 200),
            "display: inline-block; filter: blur(10px); opacity: 0; transform: translateY(-20px); transition: all 0.5s ease-out 200ms;"
        );
        assert!(unit_style(false, Direction::Bottom, 0).contains("translateY(20px)"));
        assert_eq!(
            unit_style(true, Direction::Bottom, 0),
            "display: inline-block; filter: blur(0px); opacity: 1; transform: translateY(0); transition: all 0.5s ease-out 0ms;"
        );
    }
}
