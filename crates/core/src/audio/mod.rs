use std::sync::{Arc, Mutex, MutexGuard};

use serde::{Deserialize, Serialize};

use crate::{AudioConfig, Result, SortVizError};

/// Largest valid MIDI note number and velocity.
pub const MIDI_MAX: u8 = 127;

/// A musical scale: ascending MIDI note numbers addressed by position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scale {
    notes: Vec<u8>,
}

impl Scale {
    pub fn new(notes: Vec<u8>) -> Self {
        Self { notes }
    }

    /// `len` consecutive semitones starting at `base`, clamped to the MIDI
    /// range.
    pub fn chromatic(base: u8, len: usize) -> Self {
        let notes = (0..len)
            .map(|offset| {
                let note = usize::from(base) + offset;
                note.min(usize::from(MIDI_MAX)) as u8
            })
            .collect();
        Self { notes }
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn note(&self, index: usize) -> Option<u8> {
        self.notes.get(index).copied()
    }

    /// Sends the note at `index` to `sink`, louder when `emphasized`.
    /// Indices outside the scale are ignored.
    pub fn play_note(
        &self,
        index: usize,
        emphasized: bool,
        velocities: &Velocities,
        sink: &mut dyn NoteSink,
    ) -> Result<()> {
        let Some(note) = self.note(index) else {
            return Ok(());
        };
        let velocity = if emphasized {
            velocities.emphasized
        } else {
            velocities.regular
        };
        sink.note_on(NoteEvent { note, velocity })
    }
}

/// Note-on velocities for inspected and moved positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Velocities {
    pub regular: u8,
    pub emphasized: u8,
}

impl Default for Velocities {
    fn default() -> Self {
        Self {
            regular: 60,
            emphasized: 120,
        }
    }
}

impl From<&AudioConfig> for Velocities {
    fn from(config: &AudioConfig) -> Self {
        Self {
            regular: config.regular_velocity,
            emphasized: config.emphasized_velocity,
        }
    }
}

/// A single note-on message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteEvent {
    pub note: u8,
    pub velocity: u8,
}

/// Output device for note events.
///
/// Sinks are injected rather than opened globally; an unavailable device is
/// reported from [`NoteSink::open`] and left to the caller to handle.
pub trait NoteSink {
    /// Acquires the underlying device.
    fn open(&mut self) -> Result<()> {
        Ok(())
    }

    fn note_on(&mut self, event: NoteEvent) -> Result<()>;

    /// Releases the underlying device.
    fn close(&mut self) {}
}

impl<S: NoteSink + ?Sized> NoteSink for Box<S> {
    fn open(&mut self) -> Result<()> {
        (**self).open()
    }

    fn note_on(&mut self, event: NoteEvent) -> Result<()> {
        (**self).note_on(event)
    }

    fn close(&mut self) {
        (**self).close()
    }
}

/// Keeps a sink open for its own lifetime.
#[derive(Debug)]
pub struct SinkGuard<S: NoteSink> {
    sink: S,
}

impl<S: NoteSink> SinkGuard<S> {
    pub fn new(mut sink: S) -> Result<Self> {
        sink.open()?;
        tracing::debug!("note sink opened");
        Ok(Self { sink })
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }
}

impl<S: NoteSink> Drop for SinkGuard<S> {
    fn drop(&mut self) {
        self.sink.close();
        tracing::debug!("note sink closed");
    }
}

/// Sink that reports each note through `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl NoteSink for LogSink {
    fn note_on(&mut self, event: NoteEvent) -> Result<()> {
        tracing::trace!(note = event.note, velocity = event.velocity, "note on");
        Ok(())
    }
}

/// Sink that stores every event in memory.
///
/// Clones share the same buffer, so a caller can hand one clone to a
/// [`Player`](crate::Player) and inspect the events through another.
#[derive(Debug, Default, Clone)]
pub struct RecordingSink {
    events: Arc<Mutex<Vec<NoteEvent>>>,
    open: bool,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of the events recorded so far.
    pub fn events(&self) -> Result<Vec<NoteEvent>> {
        Ok(self.lock()?.clone())
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    fn lock(&self) -> Result<MutexGuard<'_, Vec<NoteEvent>>> {
        self.events
            .lock()
            .map_err(|_| SortVizError::msg("recorded note buffer has been poisoned"))
    }
}

impl NoteSink for RecordingSink {
    fn open(&mut self) -> Result<()> {
        self.open = true;
        Ok(())
    }

    fn note_on(&mut self, event: NoteEvent) -> Result<()> {
        self.lock()?.push(event);
        Ok(())
    }

    fn close(&mut self) {
        self.open = false;
    }
}
