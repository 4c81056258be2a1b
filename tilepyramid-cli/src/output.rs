//! Output rendering for generated pyramids.

use std::collections::BTreeMap;
use std::io::Write;

use tilepyramid::TileCoord;

use crate::error::CliError;

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// One `z/x/y` tile path per line.
    Text,
    /// A JSON object keyed by zoom level, each holding `[z, x, y]` triples.
    Json,
}

/// Write the pyramid to the given writer in the selected format.
pub fn render(
    pyramid: &BTreeMap<u8, Vec<TileCoord>>,
    format: OutputFormat,
    mut out: impl Write,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Text => {
            for tiles in pyramid.values() {
                for tile in tiles {
                    writeln!(out, "{}", tile)?;
                }
            }
        }
        OutputFormat::Json => {
            let triples: BTreeMap<u8, Vec<[u32; 3]>> = pyramid
                .iter()
                .map(|(z, tiles)| {
                    let tiles = tiles.iter().map(|t| [t.z as u32, t.x, t.y]).collect();
                    (*z, tiles)
                })
                .collect();
            serde_json::to_writer_pretty(&mut out, &triples)
                .map_err(|e| CliError::Io(e.into()))?;
            writeln!(out)?;
        }
    }
    Ok(())
}
