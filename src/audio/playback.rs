use std::io::Cursor;
use std::sync::Arc;

use rodio::{Decoder, OutputStream, OutputStreamBuilder, Sink, Source};

use crate::audio::error::AudioError;

pub struct PlaybackEngine {
    _stream: OutputStream,
    sink: Arc<Sink>,
}

impl PlaybackEngine {
    pub fn new(volume: u8) -> Result<Self, AudioError> {
        let stream = OutputStreamBuilder::open_default_stream()
            .map_err(|e| AudioError::DeviceError(e.to_string()))?;
        let sink = Sink::connect_new(stream.mixer());
        sink.set_volume(f32::from(volume.min(100)) / 100.0);

        Ok(Self {
            _stream: stream,
            sink: Arc::new(sink),
        })
    }

    /// Drops whatever is playing and starts `source` from the top.
    pub fn restart<S>(&self, source: S)
    where
        S: Source<Item = f32> + Send + 'static,
    {
        self.sink.clear();
        self.sink.append(source);
        self.sink.play();
    }

    pub fn play_bytes(&self, bytes: &[u8]) -> Result<(), AudioError> {
        let decoder = Decoder::new(Cursor::new(bytes.to_vec()))
            .map_err(|e| AudioError::DecodingError(e.to_string()))?;
        self.restart(decoder);
        Ok(())
    }

    pub fn stop(&self) {
        self.sink.stop();
    }

    pub fn is_empty(&self) -> bool {
        self.sink.empty()
    }
}
