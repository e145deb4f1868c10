/// Start rule for the looping background track: it plays on the first user
/// gesture, or as soon as it finishes decoding when a gesture came first.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SoundtrackCue {
    decoded: bool,
    requested: bool,
    playing: bool,
}

impl SoundtrackCue {
    /// A click or touch. Returns `true` when playback should start now.
    pub fn on_gesture(&mut self) -> bool {
        self.requested = true;
        self.start_if_ready()
    }

    /// The track finished decoding. Returns `true` when playback should
    /// start now.
    pub fn on_decoded(&mut self) -> bool {
        self.decoded = true;
        self.start_if_ready()
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    fn start_if_ready(&mut self) -> bool {
        if self.decoded && self.requested && !self.playing {
            self.playing = true;
            return true;
        }
        false
    }
}
