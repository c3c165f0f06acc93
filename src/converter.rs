// Wed Oct 14 2026 - Alex

use crate::config::Config;
use crate::def::DefWriter;
use crate::error::{ConvertError, Result};
use crate::map::{LineOutcome, MapParser, SkipReason};
use crate::output::ConversionStats;
use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Length of the `.map` extension replaced when deriving the output name.
const MAP_EXTENSION_LEN: usize = 4;
const DEF_EXTENSION: &str = ".def";

#[derive(Debug, Clone)]
pub struct Conversion {
    pub output: PathBuf,
    pub stats: ConversionStats,
}

pub struct MapToDefConverter {
    output: Option<PathBuf>,
}

impl MapToDefConverter {
    pub fn new() -> Self {
        Self { output: None }
    }

    pub fn with_output(mut self, output: PathBuf) -> Self {
        self.output = Some(output);
        self
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            output: config.output.clone(),
        })
    }

    pub fn output_for(&self, input: &Path) -> PathBuf {
        self.output.clone().unwrap_or_else(|| def_path_for(input))
    }

    pub fn convert(&self, input: &Path) -> Result<Conversion> {
        let output = self.output_for(input);
        if is_same_file(input, &output) {
            return Err(ConvertError::SamePath(output));
        }

        let reader = File::open(input)
            .map(BufReader::new)
            .map_err(|source| ConvertError::OpenInput {
                path: input.to_path_buf(),
                source,
            })?;
        let writer = File::create(&output)
            .map(BufWriter::new)
            .map_err(|source| ConvertError::CreateOutput {
                path: output.clone(),
                source,
            })?;

        log::debug!("converting {:?} -> {:?}", input, output);
        let stats = pump(reader, writer, input, &output)?;
        log::info!(
            "{:?}: {} symbols exported, {} lines skipped",
            output,
            stats.symbols_written,
            stats.total_skipped()
        );

        Ok(Conversion { output, stats })
    }

    /// Runs the conversion between arbitrary streams.
    pub fn convert_streams<R: BufRead, W: Write>(
        &self,
        reader: R,
        writer: W,
    ) -> Result<ConversionStats> {
        pump(reader, writer, Path::new("<input>"), Path::new("<output>"))
    }
}

impl Default for MapToDefConverter {
    fn default() -> Self {
        Self::new()
    }
}

/// Converts `input` next to itself and returns the definition file path.
pub fn convert(input: &Path) -> Result<PathBuf> {
    MapToDefConverter::new().convert(input).map(|c| c.output)
}

/// `input` with its last four characters (normally `.map`) replaced by `.def`.
pub fn def_path_for(input: &Path) -> PathBuf {
    match input.to_str() {
        Some(text) => {
            let cut = text
                .char_indices()
                .rev()
                .nth(MAP_EXTENSION_LEN - 1)
                .map(|(index, _)| index)
                .unwrap_or(0);
            PathBuf::from(format!("{}{}", &text[..cut], DEF_EXTENSION))
        }
        None => input.with_extension(&DEF_EXTENSION[1..]),
    }
}

/// The absolute form of `input` for diagnostics, or `input` itself when
/// it cannot be resolved.
pub fn resolve_input(input: &Path) -> PathBuf {
    fs::canonicalize(input).unwrap_or_else(|_| input.to_path_buf())
}

fn is_same_file(input: &Path, output: &Path) -> bool {
    if input == output {
        return true;
    }
    match (fs::canonicalize(input), fs::canonicalize(output)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

fn pump<R: BufRead, W: Write>(
    mut reader: R,
    writer: W,
    input: &Path,
    output: &Path,
) -> Result<ConversionStats> {
    let write_err = |source: std::io::Error| ConvertError::Write {
        path: output.to_path_buf(),
        source,
    };

    let mut def = DefWriter::new(writer).map_err(write_err)?;
    let mut parser = MapParser::new();
    let mut stats = ConversionStats::new();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        let n = reader
            .read_until(b'\n', &mut buf)
            .map_err(|source| ConvertError::Read {
                path: input.to_path_buf(),
                source,
            })?;
        if n == 0 {
            break;
        }
        stats.lines_read += 1;

        let Ok(line) = std::str::from_utf8(&buf) else {
            log::trace!("skipped ({}): line {}", SkipReason::InvalidEncoding, stats.lines_read);
            stats.record_skip(SkipReason::InvalidEncoding);
            continue;
        };
        match parser.feed(line) {
            LineOutcome::Header => stats.record_skip(SkipReason::HeaderLine),
            LineOutcome::Symbol(symbol) => def.write_symbol(symbol).map_err(write_err)?,
            LineOutcome::Skipped(reason) => stats.record_skip(reason),
        }
    }

    stats.header_found = parser.header_found();
    stats.symbols_written = def.written();
    def.finish().map_err(write_err)?;

    if !stats.header_found {
        log::warn!("no publics header in {:?}, definition file has no exports", input);
    }

    Ok(stats)
}
