use crate::error::{FixtureError, FixtureResult};
use crate::parse::parse_dimension;

/// Number of lines both swap rules require.
pub const MIN_LINES: usize = 3;

const LENGTH: usize = 0;
const WIDTH: usize = 1;
const HEIGHT: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineEnding {
    Lf,
    CrLf,
    /// Final line without a terminator.
    None,
}

impl LineEnding {
    pub fn as_str(self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
            LineEnding::None => "",
        }
    }
}

/// One line of a fixture: its text and the terminator that followed it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub content: String,
    pub ending: LineEnding,
}

/// What [`Fixture::normalize`] did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NormalizeOutcome {
    pub width_height_swapped: bool,
    pub length_width_swapped: bool,
}

/// Ordered lines of a dimension fixture.
///
/// Swaps exchange line contents only; each terminator stays at its position,
/// so a file whose last line lacks a newline keeps that shape after a swap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fixture {
    lines: Vec<Line>,
}

impl Fixture {
    /// Split `text` into lines the way a line reader does: every `\n` ends a
    /// line, and a non-empty tail without one is a final unterminated line.
    pub fn parse(text: &str) -> Self {
        let lines = text
            .split_inclusive('\n')
            .map(|raw| {
                if let Some(content) = raw.strip_suffix("\r\n") {
                    Line {
                        content: content.to_string(),
                        ending: LineEnding::CrLf,
                    }
                } else if let Some(content) = raw.strip_suffix('\n') {
                    Line {
                        content: content.to_string(),
                        ending: LineEnding::Lf,
                    }
                } else {
                    Line {
                        content: raw.to_string(),
                        ending: LineEnding::None,
                    }
                }
            })
            .collect();
        Self { lines }
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            out.push_str(&line.content);
            out.push_str(line.ending.as_str());
        }
        out
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    fn require_lines(&self) -> FixtureResult<()> {
        if self.lines.len() < MIN_LINES {
            return Err(FixtureError::TooFewLines {
                required: MIN_LINES,
                found: self.lines.len(),
            });
        }
        Ok(())
    }

    fn swap_contents(&mut self, a: usize, b: usize) {
        let tmp = std::mem::take(&mut self.lines[a].content);
        self.lines[a].content = std::mem::replace(&mut self.lines[b].content, tmp);
    }

    /// Integer value of line `index`.
    pub fn dimension(&self, index: usize) -> FixtureResult<i64> {
        let line = self.lines.get(index).ok_or(FixtureError::TooFewLines {
            required: index + 1,
            found: self.lines.len(),
        })?;
        parse_dimension(&line.content).map_err(|_| FixtureError::InvalidNumber {
            index,
            content: line.content.clone(),
        })
    }

    /// Exchange lines 1 and 2 unconditionally.
    pub fn swap_width_height(&mut self) -> FixtureResult<()> {
        self.require_lines()?;
        self.swap_contents(WIDTH, HEIGHT);
        Ok(())
    }

    /// Exchange lines 0 and 1 when line 0 is numerically smaller.
    ///
    /// Returns whether a swap happened. Afterwards line 0 >= line 1 holds.
    pub fn swap_length_width(&mut self) -> FixtureResult<bool> {
        self.require_lines()?;
        let length = self.dimension(LENGTH)?;
        let width = self.dimension(WIDTH)?;
        if length < width {
            self.swap_contents(LENGTH, WIDTH);
            return Ok(true);
        }
        Ok(false)
    }

    /// Width/height swap followed by the length/width swap.
    ///
    /// On error `self` may hold the first swap; callers that write only on
    /// success leave the file untouched.
    pub fn normalize(&mut self) -> FixtureResult<NormalizeOutcome> {
        self.swap_width_height()?;
        let length_width_swapped = self.swap_length_width()?;
        Ok(NormalizeOutcome {
            width_height_swapped: true,
            length_width_swapped,
        })
    }
}
