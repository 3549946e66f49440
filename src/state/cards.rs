//! Per-card button state: challenge participation, project actions, and
//! generic call-to-action buttons.

#[cfg(test)]
#[path = "cards_test.rs"]
mod cards_test;

pub const JOIN_LABEL: &str = "Participar";
pub const JOINED_LABEL: &str = "✓ Participando";

/// Participation toggle for one challenge card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChallengeCard {
    title: String,
    participating: bool,
}

impl ChallengeCard {
    pub fn new(title: impl Into<String>, participating: bool) -> Self {
        Self { title: title.into(), participating }
    }

    /// Recover the initial state from a button label rendered by the markup.
    pub fn from_label(title: impl Into<String>, label: &str) -> Self {
        Self::new(title, label.trim() != JOIN_LABEL)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn is_participating(&self) -> bool {
        self.participating
    }

    /// Flip participation and return the notification to show.
    pub fn toggle(&mut self) -> String {
        self.participating = !self.participating;
        if self.participating {
            format!("¡Participando en: {}!", self.title)
        } else {
            "Participación cancelada".to_owned()
        }
    }

    pub fn label(&self) -> &'static str {
        if self.participating { JOINED_LABEL } else { JOIN_LABEL }
    }

    /// Button `(background, color)`.
    pub fn colors(&self) -> (&'static str, &'static str) {
        if self.participating { ("#00d9ff", "#050812") } else { ("var(--primary)", "white") }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProjectAction {
    /// Open the project's repository in a new browsing context.
    View,
    Contribute,
}

impl ProjectAction {
    pub fn from_view_class(has_view_class: bool) -> Self {
        if has_view_class { Self::View } else { Self::Contribute }
    }

    pub fn message(self, title: &str) -> String {
        match self {
            Self::View => format!("Abriendo repositorio de: {title}"),
            Self::Contribute => format!("¡Listo para contribuir a: {title}!"),
        }
    }

    pub fn opens_repository(self) -> bool {
        self == Self::View
    }
}

/// Notification for a call-to-action button with no section target.
pub fn call_to_action_message(label: &str) -> String {
    format!("Action: {}", label.trim())
}
