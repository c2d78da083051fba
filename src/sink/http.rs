//! Network sink posting frames to a pixel server.

use log::debug;

use super::{DisplaySink, SinkError};
use crate::frame::CHANNELS;

const RAW_PIXELS_PATH: &str = "/pixels/raw";

/// Posts every frame as a JSON byte array
///
/// With `bgr` set the wire-order bytes are sent untouched and the server is
/// told so through the `bgr=true` query flag. Otherwise each slot is
/// reordered to red, green, blue first.
pub struct HttpSink {
    agent: ureq::Agent,
    url: String,
    bgr: bool,
}

impl HttpSink {
    pub fn new(base_url: &str, bgr: bool) -> Self {
        let base_url = base_url.trim_end_matches('/');
        let url = if bgr {
            format!("{base_url}{RAW_PIXELS_PATH}?bgr=true")
        } else {
            format!("{base_url}{RAW_PIXELS_PATH}")
        };
        debug!("http sink posting to {url}");
        Self {
            agent: ureq::AgentBuilder::new().build(),
            url,
            bgr,
        }
    }

    /// Full request URL
    pub fn url(&self) -> &str {
        &self.url
    }

    /// JSON body for a frame
    pub fn payload(&self, frame: &[u8]) -> Result<String, SinkError> {
        if self.bgr {
            return Ok(serde_json::to_string(frame)?);
        }
        let rgb: Vec<u8> = frame
            .chunks_exact(CHANNELS)
            .flat_map(|slot| [slot[2], slot[1], slot[0]])
            .collect();
        Ok(serde_json::to_string(&rgb)?)
    }
}

impl DisplaySink for HttpSink {
    fn emit(&mut self, frame: &[u8]) -> Result<(), SinkError> {
        let body = self.payload(frame)?;
        self.agent
            .post(&self.url)
            .set("Content-Type", "application/json")
            .send_string(&body)
            .map_err(|err| SinkError::Http(err.to_string()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_with_bgr_flag() {
        let sink = HttpSink::new("http://localhost:5000/", true);
        assert_eq!(sink.url(), "http://localhost:5000/pixels/raw?bgr=true");
        let sink = HttpSink::new("http://pi:8080", false);
        assert_eq!(sink.url(), "http://pi:8080/pixels/raw");
    }

    #[test]
    fn test_payload_keeps_wire_order_with_bgr() {
        let sink = HttpSink::new("http://localhost:5000", true);
        assert_eq!(sink.payload(&[1, 2, 3, 4, 5, 6]).unwrap(), "[1,2,3,4,5,6]");
    }

    #[test]
    fn test_payload_reorders_without_bgr() {
        let sink = HttpSink::new("http://localhost:5000", false);
        assert_eq!(sink.payload(&[1, 2, 3, 4, 5, 6]).unwrap(), "[3,2,1,6,5,4]");
    }
}
