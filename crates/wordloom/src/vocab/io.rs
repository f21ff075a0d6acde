//! # Vocabulary IO
//!
//! Vocabularies are stored one entry per line:
//! ```terminaloutput
//! {BASE64 TOKEN} {INDEX}
//! ```
//!
//! An optional oov marker line may precede the entries:
//! ```terminaloutput
//! #oov {INDEX}
//! ```

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::Path,
};

use base64::{Engine, prelude::BASE64_STANDARD};

use crate::{
    errors::{WLResult, WordloomError},
    types::TokenType,
    vocab::Vocabulary,
};

const OOV_MARKER: &str = "#oov";

fn parse_index<T: TokenType>(s: &str) -> WLResult<T> {
    let id: u64 = s
        .trim()
        .parse()
        .map_err(|e: core::num::ParseIntError| WordloomError::Parse(e.to_string()))?;
    T::from_u64(id).ok_or(WordloomError::TokenOutOfRange)
}

/// Load a [`Vocabulary`] from a vocab file.
///
/// ## Arguments
/// * `path` - the path to the vocabulary file.
pub fn load_vocab_path<T, P>(path: P) -> WLResult<Vocabulary<T>>
where
    T: TokenType,
    P: AsRef<Path>,
{
    let reader = BufReader::new(File::open(path)?);
    read_vocab(reader)
}

/// Read a [`Vocabulary`] from a vocab line reader.
///
/// ## Arguments
/// * `reader` - the line reader.
pub fn read_vocab<T, R>(reader: R) -> WLResult<Vocabulary<T>>
where
    T: TokenType,
    R: BufRead,
{
    let mut oov: Option<T> = None;
    let mut pairs: Vec<(String, T)> = Vec::new();

    for line in reader.lines() {
        let line = line?;
        if line.is_empty() {
            continue;
        }

        let (head, tail) = line
            .split_once(' ')
            .ok_or_else(|| WordloomError::Parse(format!("malformed vocab line: {line:?}")))?;

        if head == OOV_MARKER {
            oov = Some(parse_index(tail)?);
            continue;
        }

        let bytes = BASE64_STANDARD
            .decode(head)
            .map_err(|e| WordloomError::Parse(e.to_string()))?;
        let token = String::from_utf8(bytes).map_err(|e| WordloomError::Parse(e.to_string()))?;

        pairs.push((token, parse_index(tail)?));
    }

    let vocab = Vocabulary::from_pairs(pairs)?;
    match oov {
        Some(index) => {
            let token = vocab.decode_index(index)?.to_string();
            vocab.with_oov_token(&token)
        }
        None => Ok(vocab),
    }
}

/// Save a [`Vocabulary`] to a vocab file.
///
/// ## Arguments
/// * `vocab` - the vocabulary to save.
/// * `path` - the path to save the vocabulary to.
pub fn save_vocab_path<T: TokenType, P: AsRef<Path>>(
    vocab: &Vocabulary<T>,
    path: P,
) -> WLResult<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_vocab(vocab, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Write a [`Vocabulary`] to a [`Write`] writer.
///
/// Entries are written in index order.
///
/// ## Arguments
/// * `vocab` - the vocabulary to save.
/// * `writer` - the writer to target.
pub fn write_vocab<T, W>(
    vocab: &Vocabulary<T>,
    writer: &mut W,
) -> WLResult<()>
where
    T: TokenType,
    W: Write,
{
    if let Some(index) = vocab.oov_index() {
        writeln!(writer, "{OOV_MARKER} {index}")?;
    }
    for (token, index) in vocab.sorted_pairs() {
        writeln!(writer, "{} {}", BASE64_STANDARD.encode(token), index)?;
    }
    Ok(())
}
