/// Sound cues and the one-shot trigger used to debounce them.
///
/// Playback is fire-and-forget: each cue gets its own detached rodio sink,
/// and the simulation never waits on completion.  Cues are short synthesized
/// tones, so there are no asset files to load.

use std::io;
use std::time::Duration;

use rodio::source::{SineWave, Source};
use rodio::{OutputStream, OutputStreamHandle, Sink};

/// A sound that must play at most once per triggering event.
///
/// `Armed` fires exactly once, then stays `Played` until explicitly rearmed
/// (on restart).  Modeled as a tiny state machine instead of a bare bool so
/// the debounce property is testable.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum OneShot {
    Armed,
    Played,
}

impl OneShot {
    /// Consume the armed state.  Returns true only on the transition.
    pub fn fire(&mut self) -> bool {
        match self {
            OneShot::Armed => {
                *self = OneShot::Played;
                true
            }
            OneShot::Played => false,
        }
    }

    pub fn rearm(&mut self) {
        *self = OneShot::Armed;
    }
}

/// The game's three audio cues.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Cue {
    Flap,
    Score,
    Hit,
}

/// Handle to the audio device.  Construction failure is fatal at startup;
/// after that, playback errors are silently dropped (a missed blip never
/// stops the game).
pub struct Audio {
    _stream: OutputStream,
    handle: OutputStreamHandle,
}

impl Audio {
    pub fn new() -> io::Result<Self> {
        let (stream, handle) = OutputStream::try_default()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
        Ok(Audio {
            _stream: stream,
            handle,
        })
    }

    /// Start a cue and return immediately.
    pub fn play(&self, cue: Cue, volume: f32) {
        let Ok(sink) = Sink::try_new(&self.handle) else {
            return;
        };
        sink.set_volume(volume);
        match cue {
            Cue::Flap => {
                sink.append(tone(760.0, 70));
            }
            Cue::Score => {
                sink.append(tone(520.0, 90));
                sink.append(tone(680.0, 120));
            }
            Cue::Hit => {
                sink.append(tone(220.0, 150));
                sink.append(tone(160.0, 300));
            }
        }
        sink.detach();
    }
}

fn tone(freq: f32, millis: u64) -> impl Source<Item = f32> {
    SineWave::new(freq)
        .take_duration(Duration::from_millis(millis))
        .amplify(0.6)
}
