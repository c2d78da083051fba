mod tests {
    use myrtio_pixel_engine::frame::wire_bytes;
    use myrtio_pixel_engine::{EngineError, FrameBuffer, Rgb};

    #[test]
    fn test_new_buffer_is_black() {
        let frame = FrameBuffer::new(4);
        assert_eq!(frame.led_count(), 4);
        assert_eq!(frame.as_bytes(), &[0; 12]);
    }

    #[test]
    fn test_writes_use_wire_order() {
        let mut frame = FrameBuffer::new(2);
        frame.write_one(1, Rgb::new(10, 20, 30)).unwrap();
        assert_eq!(frame.as_bytes(), &[0, 0, 0, 30, 20, 10]);

        frame.write_all(Rgb::new(1, 2, 3));
        assert_eq!(frame.as_bytes(), &[3, 2, 1, 3, 2, 1]);

        let colors = [Rgb::new(255, 0, 0), Rgb::new(0, 0, 255)];
        frame.write_many(&colors).unwrap();
        assert_eq!(frame.as_bytes(), wire_bytes(&colors).as_slice());
        assert_eq!(frame.get(0).unwrap(), colors[0]);
    }

    #[test]
    fn test_index_out_of_range() {
        let mut frame = FrameBuffer::new(3);
        assert!(matches!(
            frame.write_one(3, Rgb::new(1, 1, 1)),
            Err(EngineError::IndexOutOfRange { index: 3, len: 3 })
        ));
        assert!(frame.get(7).is_err());
        assert_eq!(frame.as_bytes(), &[0; 9]);
    }

    #[test]
    fn test_write_many_requires_exact_length() {
        let mut frame = FrameBuffer::new(3);
        assert!(matches!(
            frame.write_many(&[Rgb::new(1, 1, 1)]),
            Err(EngineError::ColorCountMismatch {
                expected: 3,
                actual: 1
            })
        ));
    }

    #[test]
    fn test_write_head_keeps_tail() {
        let mut frame = FrameBuffer::new(3);
        frame.write_all(Rgb::new(5, 5, 5));
        frame.write_head(&[Rgb::new(1, 2, 3)]).unwrap();
        assert_eq!(frame.as_bytes(), &[3, 2, 1, 5, 5, 5, 5, 5, 5]);

        assert!(matches!(
            frame.write_head(&[Rgb::new(1, 1, 1); 4]),
            Err(EngineError::ColorCountMismatch {
                expected: 3,
                actual: 4
            })
        ));
    }

    #[test]
    fn test_full_rotation_restores_buffer() {
        let mut frame = FrameBuffer::new(5);
        for i in 0..5u8 {
            frame.write_one(usize::from(i), Rgb::new(i, i * 2, i * 3)).unwrap();
        }
        let original = frame.clone();
        for _ in 0..5 {
            frame.rotate_left();
        }
        assert_eq!(frame, original);
    }
}
