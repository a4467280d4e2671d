//! Reading of small text files shipped next to the executable

use std::path::Path;

use crate::version::error::SourceError;

const UTF8_BOM: &[u8] = &[0xef, 0xbb, 0xbf];
const UTF16_LE_BOM: &[u8] = &[0xff, 0xfe];
const UTF16_BE_BOM: &[u8] = &[0xfe, 0xff];

/// Read the first line of a file, without its line terminator.
///
/// Content is UTF-8 unless a UTF-16 byte order mark says otherwise; invalid
/// sequences decode to U+FFFD. Lines end at `\n`, `\r\n` or a lone `\r`.
/// An empty file yields `SourceError::MissingLine`.
pub fn read_first_line(path: &Path) -> Result<String, SourceError> {
    let bytes = std::fs::read(path)?;
    let text = decode(&bytes);
    if text.is_empty() {
        return Err(SourceError::MissingLine);
    }
    let end = text.find(['\r', '\n']).unwrap_or(text.len());
    Ok(text[..end].to_string())
}

fn decode(bytes: &[u8]) -> String {
    if let Some(rest) = bytes.strip_prefix(UTF8_BOM) {
        String::from_utf8_lossy(rest).into_owned()
    } else if let Some(rest) = bytes.strip_prefix(UTF16_LE_BOM) {
        decode_utf16(rest, u16::from_le_bytes)
    } else if let Some(rest) = bytes.strip_prefix(UTF16_BE_BOM) {
        decode_utf16(rest, u16::from_be_bytes)
    } else {
        String::from_utf8_lossy(bytes).into_owned()
    }
}

fn decode_utf16(bytes: &[u8], unit: fn([u8; 2]) -> u16) -> String {
    let chunks = bytes.chunks_exact(2);
    let trailing = !chunks.remainder().is_empty();
    let mut text: String =
        char::decode_utf16(chunks.map(|pair| unit([pair[0], pair[1]])))
            .map(|c| c.unwrap_or(char::REPLACEMENT_CHARACTER))
            .collect();
    if trailing {
        text.push(char::REPLACEMENT_CHARACTER);
    }
    text
}
