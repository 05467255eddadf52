//! Byte-level encoding detection.
//!
//! Protocol: BOM strip + strict UTF-8 decode, then plain strict UTF-8, then
//! statistical detection over [`CANDIDATE_CHARSETS`], then a GB18030
//! lossy fallback. Detector capability (which charsets are compiled in) is
//! resolved once at process start into an immutable record rather than
//! re-read at every call site.

use super::charset::{Charset, EncodingInfo, CANDIDATE_CHARSETS};
use crate::error::SubtitleError;
use once_cell::sync::Lazy;

/// Immutable, process-start-resolved detector capability.
pub struct DetectorCapability {
    /// Charsets tried during statistical detection, in priority order.
    pub candidates: &'static [Charset],
}

/// The process-wide detector capability record.
pub static CAPABILITY: Lazy<DetectorCapability> = Lazy::new(|| DetectorCapability {
    candidates: CANDIDATE_CHARSETS,
});

/// Decode a raw byte buffer per the encoding protocol, returning the decoded
/// text (with `\r\n` and lone `\r` normalised to `\n`) and the detection info.
pub fn detect_and_decode(data: &[u8]) -> Result<(String, EncodingInfo), SubtitleError> {
    if data.is_empty() {
        return Err(SubtitleError::encoding("empty input has no detectable encoding"));
    }

    // 1. BOM-prefixed UTF-8.
    if let Some(stripped) = data.strip_prefix(&[0xEF, 0xBB, 0xBF]) {
        return match std::str::from_utf8(stripped) {
            Ok(text) => Ok((
                normalize_newlines(text),
                EncodingInfo {
                    charset: Charset::Utf8Sig,
                    confidence: 1.0,
                    bom_detected: true,
                    used_replacement: false,
                },
            )),
            Err(_) => Err(SubtitleError::encoding(
                "BOM indicated UTF-8 but the remaining bytes are not valid UTF-8",
            )),
        };
    }

    // 2. Plain strict UTF-8.
    if let Ok(text) = std::str::from_utf8(data) {
        return Ok((
            normalize_newlines(text),
            EncodingInfo {
                charset: Charset::Utf8,
                confidence: 1.0,
                bom_detected: false,
                used_replacement: false,
            },
        ));
    }

    // 3. Statistical detection across the candidate set; keep the best clean decode.
    let mut best: Option<(Charset, String, f32)> = None;
    for &charset in CAPABILITY.candidates {
        let encoding = charset.to_encoding_rs();
        let (cow, _, had_errors) = encoding.decode(data);
        if had_errors {
            continue;
        }
        let score = byte_pattern_score(data, charset);
        if best.as_ref().map(|(_, _, s)| score > *s).unwrap_or(true) {
            best = Some((charset, cow.into_owned(), score));
        }
    }
    if let Some((charset, text, score)) = best {
        return Ok((
            normalize_newlines(&text),
            EncodingInfo {
                charset,
                confidence: score,
                bom_detected: false,
                used_replacement: false,
            },
        ));
    }

    // 4. Fallback: GB18030 with replacement characters.
    let (cow, _, _) = encoding_rs::GB18030.decode(data);
    log::warn!("falling back to GB18030 with replacement characters; no candidate decoded cleanly");
    Ok((
        normalize_newlines(&cow),
        EncodingInfo {
            charset: Charset::Gb18030,
            confidence: 0.0,
            bom_detected: false,
            used_replacement: true,
        },
    ))
}

fn normalize_newlines(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

/// Rough confidence score for a clean decode under `charset`, based on how
/// much of the multi-byte lead/trail structure looks plausible.
fn byte_pattern_score(data: &[u8], charset: Charset) -> f32 {
    let mut multibyte = 0usize;
    let mut plausible = 0usize;
    let mut i = 0;
    while i < data.len() {
        let b0 = data[i];
        if b0 < 0x80 {
            i += 1;
            continue;
        }
        multibyte += 1;
        let ok = match charset {
            Charset::Gb18030 | Charset::Gbk => {
                i + 1 < data.len() && (0x81..=0xFE).contains(&b0) && is_gbk_trail(data[i + 1])
            }
            Charset::Big5 => {
                i + 1 < data.len() && (0xA1..=0xFE).contains(&b0) && is_big5_trail(data[i + 1])
            }
            Charset::ShiftJis => {
                i + 1 < data.len()
                    && ((0x81..=0x9F).contains(&b0) || (0xE0..=0xFC).contains(&b0))
                    && is_sjis_trail(data[i + 1])
            }
            Charset::EucKr => {
                i + 1 < data.len() && (0xA1..=0xFE).contains(&b0) && (0xA1..=0xFE).contains(&data[i + 1])
            }
            Charset::Windows1252 => true,
            Charset::Utf8 | Charset::Utf8Sig => true,
        };
        if ok {
            plausible += 1;
        }
        i += 2;
    }
    if multibyte == 0 {
        // Pure-ASCII content decodes cleanly under anything; rank it lowest
        // among statistical candidates so a genuinely multibyte charset wins.
        0.3
    } else {
        plausible as f32 / multibyte as f32
    }
}

fn is_gbk_trail(b: u8) -> bool {
    (0x40..=0xFE).contains(&b) && b != 0x7F
}

fn is_big5_trail(b: u8) -> bool {
    (0x40..=0x7E).contains(&b) || (0xA1..=0xFE).contains(&b)
}

fn is_sjis_trail(b: u8) -> bool {
    (0x40..=0xFC).contains(&b) && b != 0x7F
}
