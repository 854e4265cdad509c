use iced::{font, widget::button, Background, Border, Color, Font, Theme};

pub const ACCENT: Color = Color::from_rgb8(0x25, 0x63, 0xeb);
pub const HEADER_BG: Color = Color::from_rgb8(0x1e, 0x29, 0x3b);
pub const HEADER_TEXT: Color = Color::from_rgb8(0xf8, 0xfa, 0xfc);
pub const GROUP_BG: Color = Color::from_rgb8(0x7e, 0x22, 0xce);
pub const TEXT_ON_ACCENT: Color = Color::from_rgb8(0xf8, 0xfa, 0xfc);
pub const TAB_TEXT_INACTIVE: Color = Color::from_rgb8(0x6b, 0x72, 0x80);

// chart series
pub const LCP: Color = Color::from_rgb8(255, 99, 132);
pub const FID: Color = Color::from_rgb8(53, 162, 235);
pub const CLS: Color = Color::from_rgb8(255, 205, 86);
pub const SNAPSHOT: Color = Color::from_rgb8(75, 192, 192);
pub const MOBILE: Color = Color::from_rgb8(59, 130, 246);
pub const DESKTOP: Color = Color::from_rgb8(16, 185, 129);
pub const JAVASCRIPT: Color = Color::from_rgb8(234, 179, 8);
pub const CSS: Color = Color::from_rgb8(139, 92, 246);

// KPI card accents
pub const KPI_GREEN: Color = Color::from_rgb8(0x16, 0xa3, 0x4a);
pub const KPI_BLUE: Color = Color::from_rgb8(0x25, 0x63, 0xeb);
pub const KPI_ORANGE: Color = Color::from_rgb8(0xea, 0x58, 0x0c);
pub const KPI_PURPLE: Color = Color::from_rgb8(0x93, 0x33, 0xea);

pub const GUIDE_ORANGE: Color = Color::from_rgb8(0xf9, 0x73, 0x16);
pub const GUIDE_GREEN: Color = Color::from_rgb8(0x22, 0xc5, 0x5e);

/// Tab strip button: filled accent when active, flat otherwise.
pub fn tab_button_style(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme, status| {
        let mut background = if active {
            ACCENT
        } else {
            theme.extended_palette().background.base.color
        };

        if matches!(status, button::Status::Hovered) {
            background.a = 0.85;
        }

        if matches!(status, button::Status::Pressed) {
            background.a = 0.7;
        }

        button::Style {
            background: Some(Background::Color(background)),
            text_color: if active { TEXT_ON_ACCENT } else { TAB_TEXT_INACTIVE },
            border: Border::default().rounded(6),
            ..Default::default()
        }
    }
}

pub const BOLD: Font = Font {
    weight: font::Weight::Bold,
    ..Font::DEFAULT
};
