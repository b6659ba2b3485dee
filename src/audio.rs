//! Rodio-backed playback of the one looping track.
//!
//! Opening the device or decoding the track can fail (no output device,
//! missing file, platform policy); the music player treats every failure
//! the same way - log it, stay silent, retry on the next click.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use rodio::source::Source;
use rodio::{Decoder, OutputStream, Sink};

use lovenote_core::CardError;

/// One open audio device with the track queued on infinite repeat.
///
/// Created paused; the music player decides when it is allowed to start.
/// Dropping the sink releases the device.
pub struct AudioSink {
    // Keep the stream alive; the sink plays through it.
    _stream: OutputStream,
    sink: Sink,
}

impl AudioSink {
    /// Open the default output device and queue `track` on loop.
    pub fn open(track: &Path) -> Result<Self, CardError> {
        let (stream, handle) =
            OutputStream::try_default().map_err(|e| CardError::AudioDevice(e.to_string()))?;
        let sink = Sink::try_new(&handle).map_err(|e| CardError::AudioDevice(e.to_string()))?;

        let file = File::open(track)?;
        let source =
            Decoder::new(BufReader::new(file)).map_err(|e| CardError::AudioTrack(e.to_string()))?;
        sink.append(source.repeat_infinite());
        sink.pause();

        Ok(AudioSink {
            _stream: stream,
            sink,
        })
    }

    pub fn play(&self) {
        self.sink.play();
    }

    pub fn pause(&self) {
        self.sink.pause();
    }

    pub fn set_volume(&self, volume: f32) {
        self.sink.set_volume(volume);
    }

    pub fn is_paused(&self) -> bool {
        self.sink.is_paused()
    }
}
