//! JSON-lines map surface.
//!
//! Writes one JSON object per line so a renderer on the other end of a pipe
//! can place markers as they arrive:
//!
//! ```text
//! {"event":"marker","sequence":0,"kind":"npc","type":"npc","name":"Stormtrooper","coords":{"x":10,"y":0,"z":5}}
//! {"event":"focus","coords":{"x":10,"y":0,"z":5}}
//! ```

use std::io::Write;
use std::sync::Mutex;

use holocron_domain::AsciiCoordinate;
use serde::Serialize;

use crate::infrastructure::ports::{MapMarker, MapMarkerPort, MarkerError};

#[derive(Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
enum SinkLine<'a> {
    Marker(&'a MapMarker),
    Focus { coords: AsciiCoordinate },
}

pub struct JsonLinesMarkerSink<W> {
    writer: Mutex<W>,
}

impl<W: Write + Send> JsonLinesMarkerSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    /// Recover the writer, e.g. to inspect a buffer.
    pub fn into_inner(self) -> W {
        self.writer
            .into_inner()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write_line(&self, line: &SinkLine<'_>) -> Result<(), MarkerError> {
        let mut writer = self
            .writer
            .lock()
            .map_err(|_| MarkerError::Unavailable("marker sink lock poisoned".to_string()))?;

        serde_json::to_writer(&mut *writer, line)?;
        writer.write_all(b"\n")?;
        writer.flush()?;
        Ok(())
    }
}

impl<W: Write + Send> MapMarkerPort for JsonLinesMarkerSink<W> {
    fn place_marker(&self, marker: &MapMarker) -> Result<(), MarkerError> {
        self.write_line(&SinkLine::Marker(marker))
    }

    fn focus(&self, at: AsciiCoordinate) -> Result<(), MarkerError> {
        self.write_line(&SinkLine::Focus { coords: at })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use holocron_domain::AnnotatedEntity;

    #[test]
    fn writes_one_object_per_line() {
        let sink = JsonLinesMarkerSink::new(Vec::new());
        let marker = MapMarker::new(
            0,
            AnnotatedEntity::new(
                "npc",
                Some("Stormtrooper".to_string()),
                AsciiCoordinate::new(10, 0, 5),
            ),
        );

        sink.place_marker(&marker).expect("marker written");
        sink.focus(AsciiCoordinate::new(10, 0, 5))
            .expect("focus written");

        let output = String::from_utf8(sink.into_inner()).expect("utf8");
        let lines: Vec<serde_json::Value> = output
            .lines()
            .map(|line| serde_json::from_str(line).expect("json line"))
            .collect();

        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[0],
            serde_json::json!({
                "event": "marker",
                "sequence": 0,
                "kind": "npc",
                "type": "npc",
                "name": "Stormtrooper",
                "coords": {"x": 10, "y": 0, "z": 5}
            })
        );
        assert_eq!(
            lines[1],
            serde_json::json!({"event": "focus", "coords": {"x": 10, "y": 0, "z": 5}})
        );
    }

    #[test]
    fn marker_kind_folds_tag_aliases() {
        let sink = JsonLinesMarkerSink::new(Vec::new());
        let marker = MapMarker::new(
            3,
            AnnotatedEntity::new("starship", None, AsciiCoordinate::new(0, 0, 0)),
        );

        sink.place_marker(&marker).expect("marker written");

        let output = String::from_utf8(sink.into_inner()).expect("utf8");
        let line: serde_json::Value = serde_json::from_str(output.trim_end()).expect("json line");
        assert_eq!(line["kind"], "ship");
        assert_eq!(line["type"], "starship");
    }

    #[test]
    fn surfaces_write_failures() {
        struct BrokenPipe;

        impl Write for BrokenPipe {
            fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
                Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
            }

            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let sink = JsonLinesMarkerSink::new(BrokenPipe);
        let result = sink.focus(AsciiCoordinate::default());

        assert!(result.is_err());
    }
}
