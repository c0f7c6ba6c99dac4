use serde::{Deserialize, Serialize};

use crate::NoteIndices;

/// One rectangle of the bar chart, in the caller's units with the origin at
/// the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bar {
    pub x: usize,
    pub y: usize,
    pub width: usize,
    pub height: usize,
    pub highlighted: bool,
}

/// Bar chart of the array being sorted. Read-only with respect to the notes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BarChart {
    width: usize,
    height: usize,
}

impl BarChart {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    /// Lays out one bar per value. Value `v` of `n` gets a bar `(v + 1) / n`
    /// of the full height; every bar is `width / n` wide.
    pub fn layout(&self, notes: &NoteIndices) -> Vec<Bar> {
        let values = notes.notes();
        let n = values.len();
        if n == 0 {
            return Vec::new();
        }

        let bar_width = self.width / n;
        values
            .iter()
            .enumerate()
            .map(|(i, &value)| {
                let height = ((value + 1) * self.height / n).min(self.height);
                Bar {
                    x: i * bar_width,
                    y: self.height - height,
                    width: bar_width,
                    height,
                    highlighted: notes.is_highlighted(i),
                }
            })
            .collect()
    }

    /// Renders the layout as text rows, `#` for plain and `*` for highlighted
    /// bars.
    pub fn to_text(&self, notes: &NoteIndices) -> String {
        let mut grid = vec![vec![' '; self.width]; self.height];
        for bar in self.layout(notes) {
            let glyph = if bar.highlighted { '*' } else { '#' };
            for row in &mut grid[bar.y..] {
                row[bar.x..bar.x + bar.width].fill(glyph);
            }
        }

        grid.into_iter()
            .map(|row| row.into_iter().collect::<String>().trim_end().to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }
}
