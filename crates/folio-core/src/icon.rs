//! Icon identifiers referenced by the static content.
//!
//! Content records name an icon; the UI layer decides how to draw it.

use serde::Serialize;

/// A named icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    Activity,
    AlertCircle,
    Bird,
    BookOpen,
    Brain,
    Building,
    Calendar,
    Camera,
    Car,
    ChevronDown,
    ChevronRight,
    Clock,
    Close,
    Cloud,
    Code,
    Compass,
    Database,
    DollarSign,
    ExternalLink,
    Fish,
    Github,
    Heart,
    Home,
    Info,
    Linkedin,
    Mail,
    MapPin,
    MonitorSpeaker,
    Mountain,
    Navigation,
    Palette,
    Phone,
    Plane,
    Settings,
    Shield,
    Sparkles,
    Star,
    Sun,
    Target,
    TreePine,
    TrendingUp,
    Users,
    Utensils,
    Wine,
}

impl Icon {
    /// Stable kebab-case name, used for CSS classes.
    pub fn name(self) -> &'static str {
        match self {
            Self::Activity => "activity",
            Self::AlertCircle => "alert-circle",
            Self::Bird => "bird",
            Self::BookOpen => "book-open",
            Self::Brain => "brain",
            Self::Building => "building",
            Self::Calendar => "calendar",
            Self::Camera => "camera",
            Self::Car => "car",
            Self::ChevronDown => "chevron-down",
            Self::ChevronRight => "chevron-right",
            Self::Clock => "clock",
            Self::Close => "close",
            Self::Cloud => "cloud",
            Self::Code => "code",
            Self::Compass => "compass",
            Self::Database => "database",
            Self::DollarSign => "dollar-sign",
            Self::ExternalLink => "external-link",
            Self::Fish => "fish",
            Self::Github => "github",
            Self::Heart => "heart",
            Self::Home => "home",
            Self::Info => "info",
            Self::Linkedin => "linkedin",
            Self::Mail => "mail",
            Self::MapPin => "map-pin",
            Self::MonitorSpeaker => "monitor-speaker",
            Self::Mountain => "mountain",
            Self::Navigation => "navigation",
            Self::Palette => "palette",
            Self::Phone => "phone",
            Self::Plane => "plane",
            Self::Settings => "settings",
            Self::Shield => "shield",
            Self::Sparkles => "sparkles",
            Self::Star => "star",
            Self::Sun => "sun",
            Self::Target => "target",
            Self::TreePine => "tree-pine",
            Self::TrendingUp => "trending-up",
            Self::Users => "users",
            Self::Utensils => "utensils",
            Self::Wine => "wine",
        }
    }

    /// Text glyph drawn inside the icon element.
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Activity => "🏓",
            Self::AlertCircle => "⚠",
            Self::Bird => "🐦",
            Self::BookOpen => "📖",
            Self::Brain => "🧠",
            Self::Building => "🏢",
            Self::Calendar => "📅",
            Self::Camera => "📷",
            Self::Car => "🚗",
            Self::ChevronDown => "⌄",
            Self::ChevronRight => "›",
            Self::Clock => "🕒",
            Self::Close => "×",
            Self::Cloud => "☁",
            Self::Code => "</>",
            Self::Compass => "🧭",
            Self::Database => "🗄",
            Self::DollarSign => "$",
            Self::ExternalLink => "↗",
            Self::Fish => "🐟",
            Self::Github => "GH",
            Self::Heart => "♥",
            Self::Home => "🏠",
            Self::Info => "ℹ",
            Self::Linkedin => "in",
            Self::Mail => "✉",
            Self::MapPin => "📍",
            Self::MonitorSpeaker => "🎮",
            Self::Mountain => "⛰",
            Self::Navigation => "🧭",
            Self::Palette => "🎨",
            Self::Phone => "☎",
            Self::Plane => "✈",
            Self::Settings => "⚙",
            Self::Shield => "🛡",
            Self::Sparkles => "✨",
            Self::Star => "★",
            Self::Sun => "☀",
            Self::Target => "🎯",
            Self::TreePine => "🌲",
            Self::TrendingUp => "📈",
            Self::Users => "👥",
            Self::Utensils => "🍴",
            Self::Wine => "🍷",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_name_is_kebab_case() {
        assert_eq!(Icon::MapPin.name(), "map-pin");
        assert_eq!(Icon::TreePine.name(), "tree-pine");
        assert_eq!(Icon::Mail.name(), "mail");
    }

    #[test]
    fn test_icon_serialization_matches_name() {
        let json = serde_json::to_string(&Icon::MonitorSpeaker).unwrap();
        assert_eq!(json, format!("\"{}\"", Icon::MonitorSpeaker.name()));
    }
}
