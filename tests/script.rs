mod tests {
    use std::sync::Arc;

    use image::RgbImage;
    use myrtio_pixel_engine::color::{BLACK, WHITE};
    use myrtio_pixel_engine::frame::wire_bytes;
    use myrtio_pixel_engine::{
        Commands, Duration, Engine, Interpreter, NamedColor, Recorder, Rgb, ScriptError,
    };

    const LEDS: usize = 2;

    fn interpreter() -> (Interpreter, Commands, Recorder) {
        let recorder = Recorder::new();
        let engine = Engine::with_sink(LEDS, Duration::from_millis(1), Box::new(recorder.clone()));
        let commands = Commands::new(Arc::new(engine));
        commands.start().unwrap();
        (Interpreter::new(commands.clone()), commands, recorder)
    }

    fn frame(color: Rgb) -> Vec<u8> {
        wire_bytes(&[color; LEDS])
    }

    #[test]
    fn test_color_words() {
        let (mut interpreter, commands, recorder) = interpreter();
        interpreter.run(["Red", "indigo", "off"]).unwrap();
        commands.flush().unwrap();

        assert_eq!(
            recorder.frames(),
            vec![
                frame(NamedColor::Red.rgb()),
                frame(Rgb::new(0, 255, 255)),
                frame(BLACK),
            ]
        );
    }

    #[test]
    fn test_numbers_pause_without_frames() {
        let (mut interpreter, commands, recorder) = interpreter();
        interpreter.run(["0.01", "0"]).unwrap();
        commands.flush().unwrap();
        assert!(recorder.frames().is_empty());
    }

    #[test]
    fn test_repeat() {
        let (mut interpreter, commands, recorder) = interpreter();
        interpreter.handle("2*strobe").unwrap();
        commands.flush().unwrap();

        let (on, off) = (frame(WHITE), frame(BLACK));
        assert_eq!(recorder.frames(), vec![on.clone(), off.clone(), on, off]);
    }

    #[test]
    fn test_macro_record_and_replay() {
        let (mut interpreter, commands, recorder) = interpreter();
        interpreter.run(["flash:", "blue", "black"]).unwrap();
        assert_eq!(interpreter.recording(), Some("flash"));

        interpreter.handle("flash.").unwrap();
        assert_eq!(interpreter.recording(), None);
        assert_eq!(
            interpreter.macro_words("flash"),
            Some(&["blue".to_owned(), "black".to_owned()][..])
        );

        commands.flush().unwrap();
        assert!(recorder.frames().is_empty());

        interpreter.run(["3*flash"]).unwrap();
        commands.flush().unwrap();
        let frames = recorder.frames();
        assert_eq!(frames.len(), 6);
        assert_eq!(frames[4], frame(NamedColor::Blue.rgb()));
        assert_eq!(frames[5], frame(BLACK));
    }

    #[test]
    fn test_unknown_word() {
        let (mut interpreter, _, _) = interpreter();
        let err = interpreter.run(["red", "blurple", "blue"]).unwrap_err();
        assert!(matches!(err, ScriptError::UnknownCommand(word) if word == "blurple"));
    }

    #[test]
    fn test_css_color_words() {
        let (mut interpreter, commands, recorder) = interpreter();
        interpreter.run(["purple", "Teal", "cyan"]).unwrap();
        commands.flush().unwrap();

        assert_eq!(
            recorder.frames(),
            vec![
                frame(Rgb::new(128, 0, 128)),
                frame(Rgb::new(0, 128, 128)),
                frame(Rgb::new(0, 255, 255)),
            ]
        );
    }

    #[test]
    fn test_sample_plays_image_columns() {
        let path = std::env::temp_dir().join(format!("pixels-sample-{}.png", std::process::id()));
        let image = RgbImage::from_fn(3, LEDS as u32, |x, y| {
            image::Rgb([if y == 0 { 255 } else { 0 }, x as u8 * 10, 0])
        });
        image.save(&path).unwrap();

        let (mut interpreter, commands, recorder) = interpreter();
        interpreter
            .run(["sample", path.to_str().unwrap(), "black"])
            .unwrap();
        commands.flush().unwrap();
        std::fs::remove_file(&path).ok();

        let frames = recorder.frames();
        assert_eq!(frames.len(), 4);
        for (x, frame) in frames.iter().take(3).enumerate() {
            let green = x as u8 * 10;
            assert_eq!(
                *frame,
                wire_bytes(&[Rgb::new(255, green, 0), Rgb::new(0, green, 0)])
            );
        }
        assert_eq!(frames[3], frame(BLACK));
    }

    #[test]
    fn test_sample_missing_file() {
        let (mut interpreter, _, _) = interpreter();
        interpreter.handle("sample").unwrap();
        assert!(matches!(
            interpreter.handle("/nonexistent/sample.png"),
            Err(ScriptError::Sample { .. })
        ));
        // The next word is a command again
        interpreter.handle("red").unwrap();
    }

    #[test]
    fn test_invalid_repeat() {
        let (mut interpreter, _, _) = interpreter();
        assert!(matches!(
            interpreter.handle("x*red"),
            Err(ScriptError::InvalidRepeat(_))
        ));
    }

    #[test]
    fn test_self_referencing_macro() {
        let (mut interpreter, _, _) = interpreter();
        interpreter.run(["again:", "again", "again."]).unwrap();
        assert!(matches!(
            interpreter.handle("again"),
            Err(ScriptError::RecursionLimit)
        ));
    }
}
