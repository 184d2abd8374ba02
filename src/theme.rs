//! The light/dark display mode flag.

/// The colour scheme the page is rendered with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Read the theme from a query value. Anything other than "dark" is light.
    pub fn from_query(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some(value) if value.eq_ignore_ascii_case("dark") => Self::Dark,
            _ => Self::Light,
        }
    }

    pub fn as_query_value(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// The other theme.
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    /// The label for the button that switches to the other theme.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::Light => "Toggle Dark Mode",
            Self::Dark => "Toggle Light Mode",
        }
    }

    /// The ECharts theme name to initialise charts with.
    pub fn echarts_theme(self) -> &'static str {
        match self {
            Self::Light => "default",
            Self::Dark => "dark",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Theme;

    #[test]
    fn parses_dark_and_defaults_to_light() {
        assert_eq!(Theme::from_query(Some("dark")), Theme::Dark);
        assert_eq!(Theme::from_query(Some(" DARK ")), Theme::Dark);
        assert_eq!(Theme::from_query(Some("light")), Theme::Light);
        assert_eq!(Theme::from_query(Some("neon")), Theme::Light);
        assert_eq!(Theme::from_query(None), Theme::Light);
    }

    #[test]
    fn toggling_twice_is_a_no_op() {
        for theme in [Theme::Light, Theme::Dark] {
            assert_ne!(theme.toggled(), theme);
            assert_eq!(theme.toggled().toggled(), theme);
        }
    }

    #[test]
    fn toggle_label_names_the_other_theme() {
        assert_eq!(Theme::Light.toggle_label(), "Toggle Dark Mode");
        assert_eq!(Theme::Dark.toggle_label(), "Toggle Light Mode");
    }
}
