//! Image recompression and the audio-transcription stub.

use std::fs::File;
use std::io::BufWriter;

use image::codecs::png::{CompressionType, FilterType, PngEncoder};

use crate::store::DataStore;
use crate::tasks::TaskReport;
use crate::Result;

/// Re-encode `credit_card.png` with the strongest PNG compression as
/// `compressed_credit_card.png`. Decode failures are faults.
pub(crate) fn compress_image(store: &DataStore) -> Result<TaskReport> {
    let input = store.path("credit_card.png");
    if !input.is_file() {
        return Ok(TaskReport::error("File not found"));
    }

    let img = image::open(&input)?;
    let output = File::create(store.path("compressed_credit_card.png"))?;
    let encoder = PngEncoder::new_with_quality(
        BufWriter::new(output),
        CompressionType::Best,
        FilterType::Adaptive,
    );
    img.write_with_encoder(encoder)?;

    Ok(TaskReport::success("Image compressed"))
}

/// Permanent stub. There is no transcription backend.
pub(crate) fn transcribe_audio() -> TaskReport {
    TaskReport::error("Transcription not implemented")
}
