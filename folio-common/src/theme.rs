use crate::config::IconIds;

/// Color theme of the page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

#[allow(clippy::derivable_impls)]
impl Default for Theme {
    fn default() -> Self {
        Theme::Light
    }
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Anything other than `"dark"` reads as light.
    pub fn from_stored(value: &str) -> Self {
        if value == "dark" {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

/// The two theme marker flags as they sit on the page: the dark class on the
/// body and the alternate-icon class on the theme button.
///
/// They are flipped together on every click, so after any number of clicks from
/// a consistent start they agree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ThemeMarkers {
    pub dark: bool,
    pub alt_icon: bool,
}

impl ThemeMarkers {
    /// Markers to apply at load for the stored pair. `None` when no theme was
    /// stored, an empty string included.
    pub fn from_stored(theme: Option<&str>, icon: Option<&str>, icons: &IconIds) -> Option<Self> {
        let theme = theme.filter(|t| !t.is_empty())?;
        Some(Self {
            dark: Theme::from_stored(theme) == Theme::Dark,
            alt_icon: icon == Some(icons.dark.as_str()),
        })
    }

    pub fn flipped(self) -> Self {
        Self {
            dark: !self.dark,
            alt_icon: !self.alt_icon,
        }
    }

    pub fn theme(self) -> Theme {
        if self.dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn icon_id(self, icons: &IconIds) -> &str {
        if self.alt_icon {
            &icons.dark
        } else {
            &icons.light
        }
    }
}
