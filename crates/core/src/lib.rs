//! Core library for the Sorting Visualiser.
//!
//! The sorts in [`sorts`] never reorder the caller's data. Each one runs
//! against a private working copy and returns a [`Trace`]: the ordered log of
//! every comparison, copy and swap it performed. Replaying a trace against a
//! copy of the original input reproduces every intermediate state, which is
//! what the remaining modules consume to draw bars and play notes.
//!
//! ```
//! use sorting_visualiser_core::{replay, Algorithm};
//!
//! let input = vec![3, 1, 2];
//! let trace = Algorithm::Quick.trace(&input);
//!
//! let mut array = input.clone();
//! replay(&mut array, &trace)?;
//! assert_eq!(array, vec![1, 2, 3]);
//! # Ok::<(), sorting_visualiser_core::SortVizError>(())
//! ```

pub mod audio;
pub mod config;
pub mod error;
pub mod notes;
pub mod operation;
pub mod playback;
pub mod render;
pub mod replay;
pub mod sorts;
pub mod trace;

pub use audio::{LogSink, NoteEvent, NoteSink, RecordingSink, Scale, SinkGuard, Velocities};
pub use config::{AppConfig, AudioConfig, PlaybackConfig, RenderConfig};
pub use error::{Result, SortVizError};
pub use notes::NoteIndices;
pub use operation::Operation;
pub use playback::{Frame, Player};
pub use render::{Bar, BarChart};
pub use replay::{replay, replay_prefix, Replayer};
pub use sorts::{
    bubble_sort, insertion_sort, merge_sort, quick_sort, selection_sort, shell_sort, Algorithm,
};
pub use trace::{Trace, TraceStats};
