use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::Duration;
use regex::Regex;
use once_cell::sync::Lazy;
use log::{warn, debug, trace};
use crate::errors::SubtitleError;

// @module: SRT cue model, reader and writer

// @const: SRT timing line regex, trailing position coordinates are ignored
static TIMING_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d+):(\d{2}):(\d{2})[,.](\d{1,3})\s*-->\s*(\d+):(\d{2}):(\d{2})[,.](\d{1,3})").unwrap()
});

// @const: Inline markup that separates text segments within a line
static MARKUP_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)</?(?:b|i|u|s|font)(?:\s[^>]*)?>|\{\\[^}]*\}").unwrap()
});

/// One display line of a cue, made of plain-text segments
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SubtitleLine {
    pub segments: Vec<String>,
}

impl SubtitleLine {
    /// Line holding a single segment
    pub fn from_text(text: &str) -> Self {
        SubtitleLine {
            segments: vec![text.to_string()],
        }
    }

    // @parses: Raw SRT text line, dropping markup between segments
    pub fn from_markup(raw: &str) -> Self {
        let segments = MARKUP_REGEX
            .split(raw)
            .filter(|segment| !segment.is_empty())
            .map(str::to_string)
            .collect();
        SubtitleLine { segments }
    }

    /// Segments concatenated with no separator
    pub fn text(&self) -> String {
        self.segments.concat()
    }
}

// @struct: Single SRT cue
#[derive(Debug, Clone, PartialEq)]
pub struct SubtitleCue {
    // @field: 1-based sequence number
    pub index: usize,

    pub start: Duration,

    pub end: Duration,

    // @field: Display lines in order
    pub lines: Vec<SubtitleLine>,
}

impl SubtitleCue {
    pub fn new(index: usize, start: Duration, end: Duration, lines: Vec<SubtitleLine>) -> Self {
        SubtitleCue {
            index,
            start,
            end,
            lines,
        }
    }

    /// Creates a cue whose text is split on newlines into display lines
    pub fn from_text(index: usize, start: Duration, end: Duration, text: &str) -> Self {
        let lines = text
            .split('\n')
            .map(|line| SubtitleLine::from_text(line.strip_suffix('\r').unwrap_or(line)))
            .collect();
        Self::new(index, start, end, lines)
    }

    /// Text of every line, joined with newlines
    pub fn text(&self) -> String {
        self.lines
            .iter()
            .map(SubtitleLine::text)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Format a duration as an SRT timestamp (HH:MM:SS,mmm)
    pub fn format_timestamp(time: Duration) -> String {
        let ms = time.as_millis();
        let hours = ms / 3_600_000;
        let minutes = (ms % 3_600_000) / 60_000;
        let seconds = (ms % 60_000) / 1_000;
        let millis = ms % 1_000;

        format!("{:02}:{:02}:{:02},{:03}", hours, minutes, seconds, millis)
    }
}

impl fmt::Display for SubtitleCue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}", self.index)?;
        writeln!(
            f,
            "{} --> {}",
            Self::format_timestamp(self.start),
            Self::format_timestamp(self.end)
        )?;
        for line in &self.lines {
            writeln!(f, "{}", line.text())?;
        }
        writeln!(f)
    }
}

/// Builds a duration from clock fields; the fraction is read as a decimal
/// fraction of a second, so "5" means 500 ms.
pub(crate) fn timestamp_to_duration(hours: &str, minutes: &str, seconds: &str, fraction: &str) -> Option<Duration> {
    if fraction.is_empty() || fraction.len() > 3 || !fraction.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let hours: u64 = hours.parse().ok()?;
    let minutes: u64 = minutes.parse().ok()?;
    let seconds: u64 = seconds.parse().ok()?;
    let millis: u64 = format!("{:0<3}", fraction).parse().ok()?;

    if minutes >= 60 || seconds >= 60 {
        return None;
    }

    let total_secs = hours.checked_mul(3600)?.checked_add(minutes * 60 + seconds)?;
    Some(Duration::from_secs(total_secs) + Duration::from_millis(millis))
}

/// Ordered list of cues
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubtitleCollection {
    pub cues: Vec<SubtitleCue>,
}

impl SubtitleCollection {
    /// Wraps cues, renumbering them 1..N in their given order
    pub fn from_cues(cues: Vec<SubtitleCue>) -> Self {
        let mut collection = SubtitleCollection { cues };
        collection.renumber();
        collection
    }

    pub fn len(&self) -> usize {
        self.cues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cues.is_empty()
    }

    // @ensures: Sequential 1-based indices
    pub fn renumber(&mut self) {
        for (i, cue) in self.cues.iter_mut().enumerate() {
            cue.index = i + 1;
        }
    }

    /// Parse SRT format string into cues
    ///
    /// Cues keep file order. The numeric line right before a timing line is
    /// that cue's index and never text of the previous cue.
    pub fn parse_srt_string(content: &str) -> Result<Self, SubtitleError> {
        let content = content.strip_prefix('\u{feff}').unwrap_or(content);

        let mut cues = Vec::new();
        let mut current_times: Option<(Duration, Duration)> = None;
        let mut current_text: Vec<&str> = Vec::new();

        for (line_index, line) in content.lines().enumerate() {
            let line_number = line_index + 1;
            let trimmed = line.trim();

            if trimmed.contains("-->") {
                let (start, end) = Self::parse_timing_line(trimmed)
                    .ok_or_else(|| SubtitleError::InvalidTiming {
                        line: line_number,
                        content: trimmed.to_string(),
                    })?;

                // The last buffered line is the index of the cue starting here
                if current_text.last().is_some_and(|l| l.parse::<usize>().is_ok()) {
                    current_text.pop();
                }

                match current_times.take() {
                    Some((prev_start, prev_end)) => {
                        cues.push(Self::build_cue(cues.len() + 1, prev_start, prev_end, &current_text));
                    }
                    None if !current_text.is_empty() => {
                        warn!("Ignoring {} line(s) of text before the first cue", current_text.len());
                    }
                    None => {}
                }
                current_text.clear();

                current_times = Some((start, end));
                continue;
            }

            if !trimmed.is_empty() {
                current_text.push(trimmed);
            }
        }

        match current_times {
            Some((start, end)) => cues.push(Self::build_cue(cues.len() + 1, start, end, &current_text)),
            None if !current_text.is_empty() => {
                warn!("Ignoring {} line(s) of text with no timing line", current_text.len());
            }
            None => {}
        }

        if cues.is_empty() {
            warn!("No subtitle cues found in SRT content");
        } else {
            debug!("Parsed {} SRT cues", cues.len());
        }

        Ok(SubtitleCollection { cues })
    }

    fn parse_timing_line(line: &str) -> Option<(Duration, Duration)> {
        let caps = TIMING_REGEX.captures(line)?;
        let start = timestamp_to_duration(&caps[1], &caps[2], &caps[3], &caps[4])?;
        let end = timestamp_to_duration(&caps[5], &caps[6], &caps[7], &caps[8])?;
        Some((start, end))
    }

    fn build_cue(index: usize, start: Duration, end: Duration, text: &[&str]) -> SubtitleCue {
        if end < start {
            warn!(
                "Cue {} ends before it starts ({} --> {})",
                index,
                SubtitleCue::format_timestamp(start),
                SubtitleCue::format_timestamp(end)
            );
        }
        let lines = text.iter().map(|line| SubtitleLine::from_markup(line)).collect();
        let cue = SubtitleCue::new(index, start, end, lines);
        trace!("Cue {}: {:?}", index, cue.text());
        cue
    }

    /// Render all cues as SRT text
    pub fn to_srt_string(&self) -> String {
        self.to_string()
    }

    /// Write subtitles to an SRT file, truncating any existing content
    pub fn write_to_srt<P: AsRef<Path>>(&self, path: P) -> std::io::Result<()> {
        let file = File::create(path.as_ref())?;
        let mut writer = BufWriter::new(file);

        for cue in &self.cues {
            write!(writer, "{}", cue)?;
        }

        writer.flush()
    }
}

impl fmt::Display for SubtitleCollection {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for cue in &self.cues {
            write!(f, "{}", cue)?;
        }
        Ok(())
    }
}
