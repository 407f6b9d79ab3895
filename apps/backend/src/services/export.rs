//! Bulk audio export as a zip archive.

use std::collections::HashSet;
use std::io::{Cursor, Write};

use chrono::Local;
use flashcard_core::{archive_name, audio_file_name, AudioLayout, FileNaming, FlashcardRecord};
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

use crate::error::{ApiError, Result};
use crate::services::speech::{speak_sequence, SpeechSynthesizer};

/// A finished archive ready for download.
#[derive(Debug)]
pub struct AudioArchive {
    pub file_name: String,
    pub bytes: Vec<u8>,
    pub files_written: usize,
    /// Cards left out because synthesis failed.
    pub skipped: usize,
}

/// Synthesize audio for every card and pack it into one archive.
pub async fn build_archive(
    synth: &dyn SpeechSynthesizer,
    cards: &[FlashcardRecord],
    layout: AudioLayout,
    naming: FileNaming,
) -> Result<AudioArchive> {
    let mut used_names = HashSet::new();
    let mut files = Vec::new();
    let mut skipped = 0;

    for (index, card) in cards.iter().enumerate() {
        let parts: Vec<_> = layout
            .languages()
            .iter()
            .map(|&language| (card.text_in(language), language))
            .collect();

        match speak_sequence(synth, &parts).await {
            Ok(audio) => {
                let name =
                    unique_name(audio_file_name(index, card, layout, naming), &mut used_names);
                files.push((name, audio));
            }
            Err(err) => {
                tracing::warn!("Skipping card {} in export: {}", index + 1, err);
                skipped += 1;
            }
        }
    }

    let files_written = files.len();
    let bytes = write_zip(&files)?;

    tracing::info!(
        "Generated {} audio files ({} skipped) for export",
        files_written,
        skipped
    );

    Ok(AudioArchive {
        file_name: archive_name(&Local::now()),
        bytes,
        files_written,
        skipped,
    })
}

fn write_zip(files: &[(String, Vec<u8>)]) -> Result<Vec<u8>> {
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    let options =
        SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    for (name, audio) in files {
        zip.start_file(name.as_str(), options)
            .map_err(|e| ApiError::Internal(format!("Failed to add {}: {}", name, e)))?;
        zip.write_all(audio)
            .map_err(|e| ApiError::Internal(format!("Failed to write {}: {}", name, e)))?;
    }

    let cursor = zip
        .finish()
        .map_err(|e| ApiError::Internal(format!("Failed to finish archive: {}", e)))?;
    Ok(cursor.into_inner())
}

/// Text names can repeat; number the later ones.
fn unique_name(name: String, used: &mut HashSet<String>) -> String {
    if used.insert(name.clone()) {
        return name;
    }
    let stem = name.strip_suffix(".mp3").unwrap_or(&name).to_string();
    let mut n = 2;
    loop {
        let candidate = format!("{}_{}.mp3", stem, n);
        if used.insert(candidate.clone()) {
            return candidate;
        }
        n += 1;
    }
}
