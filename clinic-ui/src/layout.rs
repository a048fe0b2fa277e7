//! Shared layout state handed to pages through an explicit context.

/// Colour scheme of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn as_attr(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutAction {
    ToggleSider,
    SetSiderCollapsed(bool),
    ToggleTheme,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LayoutState {
    pub sider_collapsed: bool,
    pub theme: ThemeMode,
}

impl LayoutState {
    pub fn apply(self, action: LayoutAction) -> Self {
        match action {
            LayoutAction::ToggleSider => Self {
                sider_collapsed: !self.sider_collapsed,
                ..self
            },
            LayoutAction::SetSiderCollapsed(collapsed) => Self {
                sider_collapsed: collapsed,
                ..self
            },
            LayoutAction::ToggleTheme => Self {
                theme: self.theme.toggled(),
                ..self
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn actions_touch_only_their_field() {
        let state = LayoutState::default();
        let toggled = state.apply(LayoutAction::ToggleSider);
        assert!(toggled.sider_collapsed);
        assert_eq!(toggled.theme, ThemeMode::Light);

        let dark = toggled.apply(LayoutAction::ToggleTheme);
        assert_eq!(dark.theme, ThemeMode::Dark);
        assert!(dark.sider_collapsed);

        let expanded = dark.apply(LayoutAction::SetSiderCollapsed(false));
        assert!(!expanded.sider_collapsed);
        assert_eq!(expanded.theme.as_attr(), "dark");
    }
}
