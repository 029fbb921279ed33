//!
//! Line colors.
//!

///
/// The line colors, assigned cyclically.
///
pub const COLORS: [&str; 10] = [
    "#FF5733", "#33C1FF", "#75FF33", "#FFC300", "#DA33FF", "#FF33A6", "#33FFBD", "#FF6F61",
    "#B833FF", "#33A1FF",
];

///
/// Line label to color assignment.
///
/// Labels receive colors in the order they are first seen, wrapping around the palette.
///
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Palette {
    /// The labels and their colors, in first-seen order.
    entries: Vec<(u64, &'static str)>,
}

impl Palette {
    ///
    /// Assigns colors to `labels`.
    ///
    pub fn assign<I>(labels: I) -> Self
    where
        I: IntoIterator<Item = u64>,
    {
        let mut palette = Self::default();
        for label in labels {
            if palette.color(label).is_none() {
                let color = COLORS[palette.entries.len() % COLORS.len()];
                palette.entries.push((label, color));
            }
        }
        palette
    }

    ///
    /// Returns the color of a label.
    ///
    pub fn color(&self, label: u64) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(known, _)| *known == label)
            .map(|(_, color)| *color)
    }

    ///
    /// Returns the labels and their colors, in first-seen order.
    ///
    pub fn entries(&self) -> &[(u64, &'static str)] {
        self.entries.as_slice()
    }
}

#[cfg(test)]
mod tests {
    use super::Palette;
    use super::COLORS;

    #[test]
    fn first_seen_order() {
        let palette = Palette::assign([7, 3, 7, 1, 3]);

        assert_eq!(
            palette.entries(),
            &[(7, COLORS[0]), (3, COLORS[1]), (1, COLORS[2])]
        );
        assert_eq!(palette.color(1), Some(COLORS[2]));
        assert_eq!(palette.color(2), None);
    }

    #[test]
    fn colors_wrap_around() {
        let palette = Palette::assign(100..112);

        assert_eq!(palette.color(100), palette.color(110));
        assert_eq!(palette.color(101), palette.color(111));
        assert_ne!(palette.color(100), palette.color(101));
    }

    #[test]
    fn assignment_depends_on_order_only() {
        let first = Palette::assign([5, 9, 2]);
        let second = Palette::assign([5, 5, 9, 2, 9]);
        let shuffled = Palette::assign([2, 9, 5]);

        assert_eq!(first, second);
        assert_ne!(first, shuffled);
        assert_eq!(first.color(5), shuffled.color(2));
    }
}
