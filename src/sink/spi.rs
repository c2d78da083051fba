//! Hardware sink writing frames over a SPI bus.

#[cfg(feature = "spi")]
mod device {
    use std::io::Write;

    use log::info;
    use spidev::{SpiModeFlags, Spidev, SpidevOptions};

    use crate::sink::{DisplaySink, SinkError};

    /// Writes wire-order bytes straight to a `spidev` device
    pub struct SpiSink {
        bus: Spidev,
    }

    impl SpiSink {
        pub fn open(device: &str, speed_hz: u32) -> Result<Self, SinkError> {
            let mut bus = Spidev::open(device)?;
            let options = SpidevOptions::new()
                .bits_per_word(8)
                .max_speed_hz(speed_hz)
                .mode(SpiModeFlags::SPI_MODE_0)
                .build();
            bus.configure(&options)?;
            info!("spi sink opened {device} at {speed_hz} Hz");
            Ok(Self { bus })
        }
    }

    impl DisplaySink for SpiSink {
        fn emit(&mut self, frame: &[u8]) -> Result<(), SinkError> {
            self.bus.write_all(frame)?;
            Ok(())
        }
    }
}

#[cfg(not(feature = "spi"))]
mod device {
    use crate::sink::{DisplaySink, SinkError};

    /// Placeholder used when the crate is built without the `spi` feature
    pub struct SpiSink {
        _private: (),
    }

    impl SpiSink {
        pub fn open(_device: &str, _speed_hz: u32) -> Result<Self, SinkError> {
            Err(SinkError::Unsupported("spi"))
        }
    }

    impl DisplaySink for SpiSink {
        fn emit(&mut self, _frame: &[u8]) -> Result<(), SinkError> {
            Err(SinkError::Unsupported("spi"))
        }
    }
}

pub use device::SpiSink;
