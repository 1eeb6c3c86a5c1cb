use std::io::BufRead;

use keysharp::imgproc::chroma_key::Threshold;

/// A single input of the line-oriented threshold control.
#[derive(Debug, PartialEq, Eq)]
pub enum ControlEvent {
    /// A new threshold value in [0, 255].
    Threshold(Threshold),
    /// A line that is not a valid threshold, with the reason.
    Invalid(String),
    /// An empty line, `q`, or the end of the input.
    Quit,
}

/// Reads threshold values, one per line, from a reader.
pub struct ThresholdControl<R> {
    reader: R,
    line: String,
}

impl<R: BufRead> ThresholdControl<R> {
    /// Create a control reading from `reader`.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: String::new(),
        }
    }

    /// Block until the next event.
    pub fn next_event(&mut self) -> std::io::Result<ControlEvent> {
        self.line.clear();
        if self.reader.read_line(&mut self.line)? == 0 {
            return Ok(ControlEvent::Quit);
        }
        Ok(parse_event(self.line.trim()))
    }
}

fn parse_event(input: &str) -> ControlEvent {
    if input.is_empty() || input.eq_ignore_ascii_case("q") {
        return ControlEvent::Quit;
    }

    match input.parse::<i64>() {
        Ok(value) => match Threshold::try_from(value) {
            Ok(threshold) => ControlEvent::Threshold(threshold),
            Err(e) => ControlEvent::Invalid(e.to_string()),
        },
        Err(e) => ControlEvent::Invalid(format!("{input:?} is not a number: {e}")),
    }
}

/// Block until a line is read or the input ends.
pub fn wait_for_key(reader: &mut impl BufRead) -> std::io::Result<()> {
    let mut line = String::new();
    reader.read_line(&mut line)?;
    Ok(())
}
