use std::time::Duration;
use regex::Regex;
use once_cell::sync::Lazy;
use log::{debug, warn};
use subparse::timetypes::TimePoint;
use subparse::{SsaFile, SubtitleEntry, SubtitleFileInterface};
use crate::errors::SubtitleError;
use crate::subtitle_processor::{SubtitleCollection, SubtitleCue, SubtitleLine};

// @module: ASS input through subparse, with dialogue text cleanup

// @const: Hard (\N) and soft (\n) line breaks
static LINE_BREAK_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\\[Nn]").unwrap());

// @const: Override blocks such as {\i1} or {\pos(10,20)}
static OVERRIDE_BLOCK_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\{[^}]*\}").unwrap());

/// Parse an ASS script into cues, one per dialogue event in file order
pub fn parse_ass_string(content: &str) -> Result<SubtitleCollection, SubtitleError> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);

    // subparse errors carry no Display, only Debug
    let entries = SsaFile::parse(content)
        .and_then(|file| file.get_subtitle_entries())
        .map_err(|e| SubtitleError::Ass(format!("{:?}", e)))?;

    let cues = entries
        .iter()
        .enumerate()
        .map(|(i, entry)| entry_to_cue(i + 1, entry))
        .collect::<Result<Vec<_>, _>>()?;

    if cues.is_empty() {
        warn!("No Dialogue events found in ASS content");
    } else {
        debug!("Parsed {} ASS dialogue events", cues.len());
    }

    Ok(SubtitleCollection::from_cues(cues))
}

fn entry_to_cue(index: usize, entry: &SubtitleEntry) -> Result<SubtitleCue, SubtitleError> {
    let start = time_point_to_duration(index, &entry.timespan.start)?;
    let end = time_point_to_duration(index, &entry.timespan.end)?;
    if end < start {
        warn!("Dialogue event {} ends before it starts", index);
    }

    let text = entry.line.as_deref().unwrap_or_default();
    Ok(SubtitleCue::new(index, start, end, parse_ass_text(text.trim())))
}

fn time_point_to_duration(index: usize, point: &TimePoint) -> Result<Duration, SubtitleError> {
    let msecs = point.msecs();
    u64::try_from(msecs)
        .map(Duration::from_millis)
        .map_err(|_| SubtitleError::NegativeAssTime { index, msecs })
}

// @parses: Dialogue text into display lines, dropping override blocks
fn parse_ass_text(text: &str) -> Vec<SubtitleLine> {
    LINE_BREAK_REGEX
        .split(text)
        .map(|raw| {
            let raw = raw.replace("\\h", " ");
            let segments = OVERRIDE_BLOCK_REGEX
                .split(&raw)
                .filter(|segment| !segment.is_empty())
                .map(str::to_string)
                .collect();
            SubtitleLine { segments }
        })
        .collect()
}
