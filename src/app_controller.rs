use log::{debug, info, warn};
use std::path::Path;
use crate::app_config::Config;
use crate::ass_reader;
use crate::errors::ConversionError;
use crate::file_utils::{normalized_extension, FileManager, SubtitleFormat};
use crate::json_subtitle::SubtitleDocument;
use crate::subtitle_processor::SubtitleCollection;

// @module: Application controller for subtitle conversion

/// The conversions the tool performs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversionDirection {
    /// JSON document to SRT
    JsonToSrt,
    /// SRT or ASS (the carried format) to JSON document
    SubtitleToJson(SubtitleFormat),
}

impl ConversionDirection {
    /// Pick the conversion from the input and output extensions.
    ///
    /// Nothing is read or written here, so a rejected pair never touches the
    /// output path.
    pub fn resolve<P1: AsRef<Path>, P2: AsRef<Path>>(input_path: P1, output_path: P2) -> Result<Self, ConversionError> {
        let input_format = SubtitleFormat::from_path(&input_path)?;
        let output_format = SubtitleFormat::from_path(&output_path).ok();

        match (input_format, output_format) {
            (SubtitleFormat::Json, Some(SubtitleFormat::Srt)) => Ok(Self::JsonToSrt),
            (source, Some(SubtitleFormat::Json)) if source.is_subtitle_text() => Ok(Self::SubtitleToJson(source)),
            _ => Err(ConversionError::UnsupportedFormat {
                extension: normalized_extension(output_path),
            }),
        }
    }
}

/// Main application controller for subtitle conversion
pub struct Controller {
    // @field: App configuration
    config: Config,
}

impl Controller {
    /// Controller with built-in defaults
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Self {
        Self { config }
    }

    /// Convert `input_path` into `output_path`, choosing the direction from
    /// their extensions. Returns the number of cues converted.
    pub fn run<P1: AsRef<Path>, P2: AsRef<Path>>(&self, input_path: P1, output_path: P2) -> Result<usize, ConversionError> {
        let input_path = input_path.as_ref();
        let output_path = output_path.as_ref();

        match ConversionDirection::resolve(input_path, output_path)? {
            ConversionDirection::JsonToSrt => {
                info!("Converting JSON to SRT: {} -> {}", input_path.display(), output_path.display());
                self.json_to_srt(input_path, output_path)
            }
            ConversionDirection::SubtitleToJson(format) => {
                info!("Converting {} to JSON: {} -> {}", format, input_path.display(), output_path.display());
                self.subtitle_to_json(format, input_path, output_path)
            }
        }
    }

    /// Convert a JSON subtitle document into an SRT file
    pub fn json_to_srt<P1: AsRef<Path>, P2: AsRef<Path>>(&self, input_path: P1, output_path: P2) -> Result<usize, ConversionError> {
        let input_path = input_path.as_ref();
        let output_path = output_path.as_ref();

        let bytes = FileManager::read_bytes(input_path)?;
        let parse_error = |source| ConversionError::Parse {
            path: input_path.to_path_buf(),
            source,
        };

        let document = SubtitleDocument::decode(&bytes).map_err(parse_error)?;
        debug!("Decoded JSON document with {} body entries", document.body.len());

        let collection = document.to_collection().map_err(parse_error)?;
        if collection.is_empty() {
            warn!("JSON body is empty, writing an empty SRT file");
        }

        collection
            .write_to_srt(output_path)
            .map_err(|source| ConversionError::Write {
                path: output_path.to_path_buf(),
                source,
            })?;

        info!("Wrote {} cues to {}", collection.len(), output_path.display());
        Ok(collection.len())
    }

    /// Convert an SRT or ASS file into a JSON subtitle document, picking the
    /// reader from the input extension
    pub fn srt_to_json<P1: AsRef<Path>, P2: AsRef<Path>>(&self, input_path: P1, output_path: P2) -> Result<usize, ConversionError> {
        match ConversionDirection::resolve(&input_path, &output_path)? {
            ConversionDirection::SubtitleToJson(format) => {
                self.subtitle_to_json(format, input_path.as_ref(), output_path.as_ref())
            }
            ConversionDirection::JsonToSrt => Err(ConversionError::UnsupportedFormat {
                extension: normalized_extension(input_path),
            }),
        }
    }

    // Styling and location come from the configuration since neither text
    // format carries them
    fn subtitle_to_json(&self, format: SubtitleFormat, input_path: &Path, output_path: &Path) -> Result<usize, ConversionError> {
        let content = FileManager::read_to_string(input_path)?;
        let parsed = match format {
            SubtitleFormat::Ass => ass_reader::parse_ass_string(&content),
            _ => SubtitleCollection::parse_srt_string(&content),
        };
        let collection = parsed.map_err(|source| ConversionError::Parse {
            path: input_path.to_path_buf(),
            source,
        })?;
        debug!("Read {} cues from {} input", collection.len(), format);

        let document = SubtitleDocument::from_collection(&collection, &self.config.styling, self.config.location);
        let bytes = document.encode(self.config.pretty_json).map_err(|source| ConversionError::Encode {
            path: output_path.to_path_buf(),
            source,
        })?;

        FileManager::write_to_file(output_path, &bytes)?;

        info!("Wrote {} body entries to {}", document.body.len(), output_path.display());
        Ok(document.body.len())
    }
}

impl Default for Controller {
    fn default() -> Self {
        Self::new()
    }
}
