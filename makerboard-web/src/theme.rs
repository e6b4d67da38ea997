//! Light/dark icon variants. The active theme is read once at startup and
//! handed to pages as a plain prop; nothing else in the app depends on it.

use makerboard_core::EditorRole;

pub const THEME_KEY: &str = "makerboard.theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Read the persisted preference; anything but `"dark"` is light.
    #[must_use]
    pub fn from_storage() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            let stored = crate::dom::local_storage()
                .ok()
                .and_then(|storage| storage.get_item(THEME_KEY).ok().flatten());
            if stored.as_deref() == Some("dark") {
                return Self::Dark;
            }
        }
        Self::Light
    }

    pub fn persist(self) {
        #[cfg(target_arch = "wasm32")]
        if let Ok(storage) = crate::dom::local_storage() {
            let _ = storage.set_item(THEME_KEY, self.storage_value());
        }
    }

    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[must_use]
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    const fn storage_value(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    const fn suffix(self) -> &'static str {
        match self {
            Self::Light => "",
            Self::Dark => "-dark",
        }
    }

    /// Icon asset for a staff role, in the variant matching the theme.
    #[must_use]
    pub fn role_icon_src(self, role: EditorRole) -> String {
        let name = match role {
            EditorRole::Owner => "crown",
            EditorRole::Admin => "user-gear",
            EditorRole::Helper => "user-shield",
            EditorRole::Dev => "code",
            EditorRole::Trial => "user-lock",
        };
        format!("assets/{name}{}.svg", self.suffix())
    }

    /// Icon marking a record played on a handheld.
    #[must_use]
    pub fn handheld_icon_src(self) -> String {
        format!("assets/phone-landscape{}.svg", self.suffix())
    }

    /// Class hook for the page root.
    #[must_use]
    pub const fn body_class(self) -> &'static str {
        match self {
            Self::Light => "theme-light",
            Self::Dark => "theme-dark",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_icons_follow_the_theme_variant() {
        assert_eq!(
            Theme::Light.role_icon_src(EditorRole::Owner),
            "assets/crown.svg"
        );
        assert_eq!(
            Theme::Dark.role_icon_src(EditorRole::Admin),
            "assets/user-gear-dark.svg"
        );
        assert_eq!(
            Theme::Dark.handheld_icon_src(),
            "assets/phone-landscape-dark.svg"
        );
    }

    #[test]
    fn toggling_flips_between_variants() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert!(Theme::Dark.is_dark());
    }
}
