use serde::{Deserialize, Serialize};

use crate::{
    replay_prefix, Algorithm, NoteIndices, NoteSink, Operation, Result, Scale, SinkGuard,
    SortVizError, Trace, Velocities,
};

/// What a single playback step did, for the caller's renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frame {
    /// Zero-based position of the operation within the trace.
    pub step: usize,
    pub operation: Operation<usize>,
    pub emphasized: bool,
}

/// Drives a trace against a shuffled [`NoteIndices`], highlighting and
/// sounding every affected position.
///
/// The player never sleeps: the caller decides how long each frame stays on
/// screen and may stop at any step.
#[derive(Debug)]
pub struct Player<S: NoteSink> {
    initial: Vec<usize>,
    notes: NoteIndices,
    trace: Trace<usize>,
    position: usize,
    scale: Scale,
    velocities: Velocities,
    sink: SinkGuard<S>,
}

impl<S: NoteSink> Player<S> {
    /// Records `algorithm` over the current notes and opens `sink`.
    pub fn new(
        notes: NoteIndices,
        algorithm: Algorithm,
        scale: Scale,
        velocities: Velocities,
        sink: S,
    ) -> Result<Self> {
        let trace = algorithm.trace(notes.notes());
        Self::with_trace(notes, trace, scale, velocities, sink)
    }

    /// Plays an existing trace. It must have been recorded against an array
    /// of the same length as `notes`, with every index inside it.
    pub fn with_trace(
        notes: NoteIndices,
        trace: Trace<usize>,
        scale: Scale,
        velocities: Velocities,
        sink: S,
    ) -> Result<Self> {
        if trace.array_len() != notes.len() {
            return Err(SortVizError::LengthMismatch {
                expected: trace.array_len(),
                actual: notes.len(),
            });
        }
        trace.validate()?;
        Ok(Self {
            initial: notes.notes().to_vec(),
            notes,
            trace,
            position: 0,
            scale,
            velocities,
            sink: SinkGuard::new(sink)?,
        })
    }

    /// Applies the next operation and plays its notes. Returns `None` once
    /// the trace is exhausted.
    pub fn step(&mut self) -> Result<Option<Frame>> {
        let Some(op) = self.trace.get(self.position) else {
            return Ok(None);
        };

        self.notes.clear_highlights();
        op.apply(self.notes.notes_mut());

        let emphasized = op.is_emphasized();
        for index in op.affected_indices() {
            self.notes.highlight(index);
            let value = self.notes.notes()[index];
            self.scale
                .play_note(value, emphasized, &self.velocities, self.sink.sink_mut())?;
        }

        let frame = Frame {
            step: self.position,
            operation: op.clone(),
            emphasized,
        };
        self.position += 1;
        Ok(Some(frame))
    }

    /// Restores the shuffled starting state without sounding anything.
    pub fn reset(&mut self) {
        self.notes.notes_mut().copy_from_slice(&self.initial);
        self.notes.clear_highlights();
        self.position = 0;
    }

    /// Jumps to the state after the first `step` operations, silently.
    pub fn seek(&mut self, step: usize) -> Result<()> {
        self.reset();
        replay_prefix(self.notes.notes_mut(), &self.trace, step)?;
        self.position = step.min(self.trace.len());
        Ok(())
    }

    pub fn notes(&self) -> &NoteIndices {
        &self.notes
    }

    pub fn trace(&self) -> &Trace<usize> {
        &self.trace
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn is_finished(&self) -> bool {
        self.position == self.trace.len()
    }
}
