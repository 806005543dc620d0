// SPDX-License-Identifier: MPL-2.0
//! Integration tests to validate style and design token coherence.

#[cfg(test)]
mod tests {
    use iced::widget::button::Status;
    use iced::{Background, Theme};
    use iced_alert::config::defaults;
    use iced_alert::ui::alert::{StyleConfig, VisualState};
    use iced_alert::ui::color::{hex_color, solid_image, to_hex, try_hex_color};
    use iced_alert::ui::design_tokens::{opacity, palette, typography};
    use iced_alert::ui::styles::{button, container};

    #[test]
    fn all_styles_are_callable() {
        let theme = Theme::Light;

        let _ = button::primary(&theme, Status::Active);
        let _ = button::alert(palette::TEXT, palette::HAIRLINE, 1.0)(&theme, Status::Hovered);
        let _ = container::scrim(palette::BLACK, opacity::SCRIM)(&theme);
        let _ = container::alert_surface(palette::WHITE, 4.0, 1.0)(&theme);
        let _ = container::accent_bar(palette::ACCENT, 4.0, 1.0)(&theme);
    }

    #[test]
    fn default_style_matches_documented_hex_values() {
        let style = StyleConfig::default();

        assert_eq!(to_hex(style.hair_color), "#1EB8F3");
        assert_eq!(to_hex(style.destructive_color), "#FF0A0A");
        assert_eq!(to_hex(style.hairline_color), "#EAEAEA");
        assert_eq!(to_hex(style.title_color), "#333333");
        assert_eq!(hex_color(defaults::DEFAULT_HAIR_COLOR), style.hair_color);
    }

    #[test]
    fn default_fonts_fit_setting_bounds() {
        let style = StyleConfig::default();
        for size in [style.title_font, style.message_font, style.button_font] {
            assert!(size >= defaults::MIN_FONT_SIZE && size <= defaults::MAX_FONT_SIZE);
        }
        assert_eq!(style.title_font, typography::TITLE);
    }

    #[test]
    fn shown_state_uses_scrim_opacity() {
        assert_eq!(VisualState::SHOWN.scrim_alpha, opacity::SCRIM);
        assert_eq!(VisualState::SHOWN.container_alpha, opacity::OPAQUE);

        let scrim = container::scrim(palette::BLACK, VisualState::SHOWN.scrim_alpha)(&Theme::Light);
        match scrim.background {
            Some(Background::Color(color)) => assert_eq!(color.a, opacity::SCRIM),
            other => panic!("unexpected scrim background {other:?}"),
        }
    }

    #[test]
    fn lenient_and_strict_parsers_agree_on_valid_input() {
        for hex in ["#1EB8F3", "333", "#eaeaea", "FF0A0A"] {
            assert_eq!(try_hex_color(hex).ok(), Some(hex_color(hex)));
        }
        assert_eq!(hex_color("#1234"), palette::SENTINEL);
        assert!(try_hex_color("#1234").is_err());
    }

    #[test]
    fn hairline_images_need_a_size() {
        assert!(solid_image(palette::HAIRLINE, 1, 1).is_some());
        assert!(solid_image(palette::HAIRLINE, 0, 0).is_none());
    }
}
