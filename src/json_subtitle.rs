/*!
 * JSON subtitle codec.
 *
 * The JSON form is a flat object carrying styling attributes and an ordered
 * `body` of timed entries:
 *
 * ```json
 * {"font_size":0.4,"font_color":"#FFFFFF","background_alpha":0.5,
 *  "background_color":"#9C27B0","Stroke":"none",
 *  "body":[{"from":1.5,"to":3.0,"location":2,"content":"Hello"}]}
 * ```
 *
 * Missing fields decode to zero values. Styling is never interpreted here.
 */

use std::time::Duration;
use serde::{Deserialize, Deserializer, Serialize};
use log::trace;
use crate::app_config::StyleConfig;
use crate::errors::SubtitleError;
use crate::subtitle_processor::{SubtitleCollection, SubtitleCue};

/// A single timed entry of the JSON body
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TimedTextEvent {
    /// Start time in seconds
    pub from: f64,

    /// End time in seconds
    pub to: f64,

    /// Opaque screen-position code
    pub location: i64,

    /// Text, with `\n` between display lines
    pub content: String,
}

/// The JSON subtitle document
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SubtitleDocument {
    pub font_size: f64,
    pub font_color: String,
    pub background_alpha: f64,
    pub background_color: String,

    // Capitalized in the wire format; older producers write it lowercase
    #[serde(rename = "Stroke", alias = "stroke")]
    pub stroke: String,

    #[serde(alias = "Body", deserialize_with = "null_as_empty")]
    pub body: Vec<TimedTextEvent>,
}

// `"body": null` is what an empty document looks like from other producers
fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<TimedTextEvent>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<TimedTextEvent>>::deserialize(deserializer)?.unwrap_or_default())
}

impl SubtitleDocument {
    /// Empty document carrying the given styling attributes
    pub fn with_styling(styling: &StyleConfig) -> Self {
        SubtitleDocument {
            font_size: styling.font_size,
            font_color: styling.font_color.clone(),
            background_alpha: styling.background_alpha,
            background_color: styling.background_color.clone(),
            stroke: styling.stroke.clone(),
            body: Vec::new(),
        }
    }

    /// Decode a document from JSON bytes
    pub fn decode(bytes: &[u8]) -> Result<Self, SubtitleError> {
        let bytes = bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes);
        Ok(serde_json::from_slice(bytes)?)
    }

    /// Encode the document as JSON, compact unless `pretty` is set
    pub fn encode(&self, pretty: bool) -> Result<Vec<u8>, SubtitleError> {
        let bytes = if pretty {
            serde_json::to_vec_pretty(self)?
        } else {
            serde_json::to_vec(self)?
        };
        Ok(bytes)
    }

    /// Build a document from cues, one body entry per cue in order
    pub fn from_collection(collection: &SubtitleCollection, styling: &StyleConfig, location: i64) -> Self {
        let mut document = Self::with_styling(styling);
        document.body = collection
            .cues
            .iter()
            .map(|cue| TimedTextEvent {
                from: cue.start.as_secs_f64(),
                to: cue.end.as_secs_f64(),
                location,
                content: cue.text(),
            })
            .collect();
        document
    }

    /// Build SRT cues from the body; styling is dropped
    pub fn to_collection(&self) -> Result<SubtitleCollection, SubtitleError> {
        let mut cues = Vec::with_capacity(self.body.len());

        for (position, event) in self.body.iter().enumerate() {
            let index = position + 1;
            let start = seconds_to_duration(event.from, index)?;
            let end = seconds_to_duration(event.to, index)?;
            trace!("Body entry {}: {:.3}s --> {:.3}s", index, event.from, event.to);
            cues.push(SubtitleCue::from_text(index, start, end, &event.content));
        }

        Ok(SubtitleCollection::from_cues(cues))
    }
}

// Negative, NaN and overflowing values have no duration
fn seconds_to_duration(seconds: f64, index: usize) -> Result<Duration, SubtitleError> {
    Duration::try_from_secs_f64(seconds).map_err(|_| SubtitleError::InvalidTime {
        index,
        value: seconds,
    })
}
