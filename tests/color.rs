mod tests {
    use myrtio_pixel_engine::color::{NamedColor, Rgb, from_wire, lookup, rainbow, to_wire, wheel};

    #[test]
    fn test_wheel_segments() {
        assert_eq!(wheel(0), Rgb::new(0, 255, 0));
        assert_eq!(wheel(84), Rgb::new(252, 3, 0));
        assert_eq!(wheel(85), Rgb::new(255, 0, 0));
        assert_eq!(wheel(170), Rgb::new(0, 0, 255));
        assert_eq!(wheel(254), Rgb::new(0, 252, 3));
        assert_eq!(wheel(255), Rgb::new(0, 255, 0));
    }

    #[test]
    fn test_rainbow_samples_wheel() {
        let colors = rainbow(4);
        assert_eq!(
            colors,
            vec![wheel(0), wheel(64), wheel(128), wheel(192)]
        );
        assert!(rainbow(0).is_empty());
    }

    #[test]
    fn test_wire_order() {
        let color = Rgb::new(1, 2, 3);
        assert_eq!(to_wire(color), [3, 2, 1]);
        assert_eq!(from_wire([3, 2, 1]), color);
    }

    #[test]
    fn test_named_colors() {
        assert_eq!(NamedColor::Orange.rgb(), Rgb::new(255, 128, 0));
        assert_eq!(NamedColor::Pink.rgb(), Rgb::new(255, 0, 128));
        assert_eq!(NamedColor::Indigo.rgb(), NamedColor::Yellow.rgb());
        for color in NamedColor::ALL {
            assert_eq!(NamedColor::parse_from_str(color.as_str()), Some(color));
        }
        assert_eq!(NamedColor::parse_from_str("teal"), None);
    }

    #[test]
    fn test_indigo_command_and_palette_values() {
        assert_eq!(NamedColor::Indigo.rgb(), Rgb::new(255, 255, 0));
        assert_eq!(NamedColor::Indigo.command_rgb(), Rgb::new(0, 255, 255));
        for color in NamedColor::ALL {
            if color != NamedColor::Indigo {
                assert_eq!(color.command_rgb(), color.rgb());
            }
        }
    }

    #[test]
    fn test_lookup_color_words() {
        // Palette names win over the CSS table
        assert_eq!(lookup("orange"), Some(Rgb::new(255, 128, 0)));
        assert_eq!(lookup("indigo"), Some(Rgb::new(0, 255, 255)));
        assert_eq!(lookup("teal"), Some(Rgb::new(0, 128, 128)));
        assert_eq!(lookup("rebeccapurple"), Some(Rgb::new(102, 51, 153)));
        assert_eq!(lookup("blurple"), None);
    }
}
