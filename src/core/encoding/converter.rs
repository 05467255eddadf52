//! Writing subtitle text back out: UTF-8, LF line endings, no BOM except
//! where a format opts into one (ASS/SSA may emit a UTF-8 BOM for players
//! that expect it).

/// Render `text` as UTF-8 bytes ready to write to disk.
///
/// `with_bom` should be `true` only for ASS/SSA output when the caller
/// wants maximum player compatibility; every other format always writes
/// BOM-less UTF-8.
pub fn encode_for_write(text: &str, with_bom: bool) -> Vec<u8> {
    if with_bom {
        let mut bytes = vec![0xEF, 0xBB, 0xBF];
        bytes.extend_from_slice(text.as_bytes());
        bytes
    } else {
        text.as_bytes().to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_bom_by_default() {
        let bytes = encode_for_write("hello", false);
        assert_eq!(bytes, b"hello");
    }

    #[test]
    fn bom_when_requested() {
        let bytes = encode_for_write("hello", true);
        assert_eq!(&bytes[0..3], &[0xEF, 0xBB, 0xBF]);
    }
}
