//! Visual Theme
//!
//! Static style table: every named element maps to a list of CSS
//! declarations, rendered as inline `style` attributes.

use crate::chrome::Platform;

const HUE: u16 = 233;
const SATURATION: u8 = 14;

pub const HEADER_HEIGHT: u32 = 60;
pub const HEADER_PADDING: u32 = 10;
pub const HEADER_TOTAL: u32 = HEADER_HEIGHT + 2 * HEADER_PADDING;

/// Lightness levels of the palette
pub mod lightness {
    pub const DARK: u8 = 13;
    pub const BG: u8 = 30;
    pub const DIV: u8 = 20;
    pub const LIGHT: u8 = 92;
}

/// `hsla()` color on the app's single hue
pub fn color(lightness: u8, alpha: f32) -> String {
    format!("hsla({}, {}%, {}%, {})", HUE, SATURATION, lightness, alpha)
}

pub fn header_alpha(platform: Platform) -> f32 {
    match platform {
        Platform::Ios => 0.55,
        Platform::Other => 0.85,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Container,
    Header,
    Backdrop,
    Logo,
    Divider,
    ScrollContainer,
    FilmContainer,
    Title,
    Subtitle,
    Content,
    Text,
    TextLight,
    Info,
    InfoTitle,
    Row,
    Character,
    Loading,
    ErrorCard,
    RetryButton,
}

impl Style {
    pub fn declarations(self, platform: Platform) -> Vec<(&'static str, String)> {
        use lightness::*;
        let px = |v: u32| format!("{}px", v);

        match self {
            Style::Container => vec![
                ("display", "flex".into()),
                ("flex-direction", "column".into()),
                ("align-items", "center".into()),
                ("justify-content", "flex-start".into()),
                ("min-height", "100vh".into()),
                ("background-color", color(BG, 1.0)),
            ],
            Style::Header => vec![
                ("position", "sticky".into()),
                ("top", "0".into()),
                ("z-index", "1".into()),
                ("box-sizing", "border-box".into()),
                ("width", "100%".into()),
                ("height", px(HEADER_TOTAL)),
                ("padding", px(HEADER_PADDING)),
                ("background-color", color(DARK, header_alpha(platform))),
            ],
            Style::Backdrop => vec![
                ("position", "absolute".into()),
                ("inset", "0".into()),
                ("z-index", "-1".into()),
                ("backdrop-filter", "blur(18px)".into()),
                ("-webkit-backdrop-filter", "blur(18px)".into()),
            ],
            Style::Logo => vec![
                ("display", "block".into()),
                ("height", px(HEADER_HEIGHT)),
                ("width", "100%".into()),
                ("object-fit", "contain".into()),
            ],
            Style::Divider => vec![
                ("background-color", color(DIV, 1.0)),
                ("width", "100%".into()),
                ("height", px(2)),
            ],
            Style::ScrollContainer => vec![
                ("display", "flex".into()),
                ("flex-direction", "column".into()),
                ("align-items", "center".into()),
                ("width", "100%".into()),
                ("margin-top", px(5)),
                ("overflow-y", "auto".into()),
            ],
            Style::FilmContainer => vec![
                ("box-sizing", "border-box".into()),
                ("background-color", color(LIGHT, 1.0)),
                ("width", "calc(100% - 10px)".into()),
                ("display", "flex".into()),
                ("flex-direction", "column".into()),
                ("align-items", "center".into()),
                ("border-radius", px(10)),
                ("padding", px(10)),
                ("margin", px(5)),
            ],
            Style::Title => vec![
                ("color", color(DARK, 1.0)),
                ("font-weight", "bold".into()),
                ("font-size", px(20)),
            ],
            Style::Subtitle => vec![
                ("color", color(DARK, 1.0)),
                ("font-style", "italic".into()),
                ("font-size", px(18)),
            ],
            Style::Content => vec![
                ("width", "100%".into()),
                ("display", "flex".into()),
                ("flex-direction", "column".into()),
                ("align-items", "flex-start".into()),
                ("justify-content", "space-between".into()),
            ],
            // pre-line keeps the paragraph breaks of the crawl text
            Style::Text => vec![("color", color(DARK, 1.0)), ("white-space", "pre-line".into())],
            Style::TextLight => vec![("color", color(LIGHT, 1.0))],
            Style::Info => vec![("margin-top", px(15)), ("flex", "1".into())],
            Style::InfoTitle => vec![("color", color(DARK, 1.0)), ("font-weight", "bold".into())],
            Style::Row => vec![
                ("display", "flex".into()),
                ("flex", "1".into()),
                ("flex-direction", "row".into()),
                ("flex-wrap", "wrap".into()),
                ("align-items", "flex-start".into()),
                ("justify-content", "flex-start".into()),
            ],
            Style::Character => vec![
                ("background-color", color(BG, 1.0)),
                ("padding", px(4)),
                ("margin", px(3)),
                ("border-radius", px(10)),
            ],
            Style::Loading => vec![
                ("margin", px(15)),
                ("width", px(28)),
                ("height", px(28)),
                ("border", format!("3px solid {}", color(LIGHT, 0.25))),
                ("border-top-color", color(LIGHT, 1.0)),
                ("border-radius", "50%".into()),
                ("animation", "spin 0.8s linear infinite".into()),
            ],
            Style::ErrorCard => vec![
                ("box-sizing", "border-box".into()),
                ("background-color", color(LIGHT, 1.0)),
                ("color", color(DARK, 1.0)),
                ("width", "calc(100% - 10px)".into()),
                ("border-radius", px(10)),
                ("padding", px(10)),
                ("margin", px(5)),
                ("text-align", "center".into()),
            ],
            Style::RetryButton => vec![
                ("margin-top", px(10)),
                ("padding", "6px 16px".into()),
                ("border", "none".into()),
                ("border-radius", px(10)),
                ("background-color", color(BG, 1.0)),
                ("color", color(LIGHT, 1.0)),
            ],
        }
    }

    pub fn to_inline(self, platform: Platform) -> String {
        self.declarations(platform)
            .into_iter()
            .map(|(name, value)| format!("{}: {};", name, value))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Inline style for the current platform
pub fn style(name: Style) -> String {
    name.to_inline(crate::chrome::current_platform())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_format() {
        assert_eq!(color(lightness::DARK, 1.0), "hsla(233, 14%, 13%, 1)");
        assert_eq!(color(lightness::DARK, 0.55), "hsla(233, 14%, 13%, 0.55)");
    }

    #[test]
    fn test_header_tint_depends_on_platform() {
        let ios = Style::Header.to_inline(Platform::Ios);
        let other = Style::Header.to_inline(Platform::Other);
        assert!(ios.contains("background-color: hsla(233, 14%, 13%, 0.55);"));
        assert!(other.contains("background-color: hsla(233, 14%, 13%, 0.85);"));
        assert!(ios.contains("height: 80px;"));
    }

    #[test]
    fn test_inline_format() {
        assert_eq!(
            Style::Info.to_inline(Platform::Other),
            "margin-top: 15px; flex: 1;"
        );
    }
}
