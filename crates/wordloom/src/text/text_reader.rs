//! # Text File Reader

use std::{io::Read, path::Path};

use crate::errors::WLResult;

/// Read all text from a reader.
///
/// Invalid UTF-8 sequences are dropped rather than reported.
///
/// ## Arguments
/// * `reader` - the byte source.
///
/// ## Returns
/// The decoded text.
pub fn read_text<R: Read>(mut reader: R) -> WLResult<String> {
    let mut buf = Vec::new();
    reader.read_to_end(&mut buf)?;

    Ok(match String::from_utf8(buf) {
        Ok(text) => text,
        Err(err) => String::from_utf8_lossy(err.as_bytes())
            .chars()
            .filter(|&c| c != char::REPLACEMENT_CHARACTER)
            .collect(),
    })
}

/// Read and concatenate a sequence of text files.
///
/// ## Arguments
/// * `paths` - the files to read, in order.
///
/// ## Returns
/// The concatenated text of all files.
pub fn read_text_files<I, P>(paths: I) -> WLResult<String>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    let mut text = String::new();
    for path in paths {
        let path = path.as_ref();
        log::debug!("reading text: {}", path.display());
        text.push_str(&read_text(std::fs::File::open(path)?)?);
    }
    Ok(text)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_read_text_drops_invalid_utf8() {
        let bytes: &[u8] = b"Mr. Dursley\xff was\xfe";
        assert_eq!(read_text(bytes).unwrap(), "Mr. Dursley was");
    }

    #[test]
    fn test_read_text_files_concatenates() {
        tempdir::TempDir::new("text_test")
            .and_then(|dir| {
                let a = dir.path().join("a.txt");
                let b = dir.path().join("b.txt");
                std::fs::File::create(&a)?.write_all(b"the boy ")?;
                std::fs::File::create(&b)?.write_all(b"who lived")?;

                let text = read_text_files([&a, &b]).expect("failed to read texts");
                assert_eq!(text, "the boy who lived");

                Ok(())
            })
            .unwrap();
    }

    #[test]
    fn test_read_text_files_missing() {
        let res = read_text_files(["/definitely/not/here.txt"]);
        assert!(matches!(res, Err(crate::WordloomError::Io(_))));
    }
}
