//! Character-encoding labels and detection results.

/// Character encodings the detector can recognise.
///
/// GB18030 and GBK are kept distinct (GB18030 is a strict superset with a
/// four-byte extension); the teacher's detector historically conflated the
/// two and never wired `Euckr` into its candidate list despite declaring
/// the variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Charset {
    /// UTF-8, no BOM.
    Utf8,
    /// UTF-8 with a byte-order mark (label `utf-8-sig`).
    Utf8Sig,
    /// GB18030 (Simplified Chinese, superset of GBK).
    Gb18030,
    /// GBK (Simplified Chinese).
    Gbk,
    /// Big5 (Traditional Chinese).
    Big5,
    /// Shift-JIS (Japanese).
    ShiftJis,
    /// EUC-KR (Korean).
    EucKr,
    /// Windows-1252 (Western European).
    Windows1252,
}

impl Charset {
    /// The `encoding_rs` static encoding backing this charset, where one exists.
    pub fn to_encoding_rs(self) -> &'static encoding_rs::Encoding {
        match self {
            Charset::Utf8 | Charset::Utf8Sig => encoding_rs::UTF_8,
            Charset::Gb18030 => encoding_rs::GB18030,
            Charset::Gbk => encoding_rs::GBK,
            Charset::Big5 => encoding_rs::BIG5,
            Charset::ShiftJis => encoding_rs::SHIFT_JIS,
            Charset::EucKr => encoding_rs::EUC_KR,
            Charset::Windows1252 => encoding_rs::WINDOWS_1252,
        }
    }

    /// The label this charset is reported under (matches common tool naming).
    pub fn label(self) -> &'static str {
        match self {
            Charset::Utf8 => "utf-8",
            Charset::Utf8Sig => "utf-8-sig",
            Charset::Gb18030 => "gb18030",
            Charset::Gbk => "gbk",
            Charset::Big5 => "big5",
            Charset::ShiftJis => "shift-jis",
            Charset::EucKr => "euc-kr",
            Charset::Windows1252 => "windows-1252",
        }
    }
}

/// Result of decoding a byte buffer.
#[derive(Debug, Clone)]
pub struct EncodingInfo {
    /// The charset chosen.
    pub charset: Charset,
    /// Confidence in [0.0, 1.0]; 1.0 for BOM/strict-UTF-8 matches.
    pub confidence: f32,
    /// Whether a byte-order mark was present and stripped.
    pub bom_detected: bool,
    /// Whether decoding required lossy replacement characters.
    pub used_replacement: bool,
}

/// The immutable, process-start-resolved set of charsets the detector tries.
///
/// Per the design note on mutable shared detector state: this list is fixed
/// at compile time and never mutated at a call site; [`crate::core::encoding::capability`]
/// wraps it in a [`once_cell::sync::Lazy`] so it is computed once per process.
pub const CANDIDATE_CHARSETS: &[Charset] = &[
    Charset::Gb18030,
    Charset::Gbk,
    Charset::Big5,
    Charset::ShiftJis,
    Charset::EucKr,
    Charset::Windows1252,
];
