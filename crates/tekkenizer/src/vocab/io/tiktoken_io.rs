//! # Tiktoken Vocabulary IO
//!
//! Each non-blank line is `<token> <rank>`, where `<token>` is the standard
//! base64 encoding of the raw token bytes and `<rank>` is a base-10 integer.

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::Path,
};

use base64::{Engine, prelude::BASE64_STANDARD};

use crate::{
    TKResult,
    TekkenizerError,
    types::TokenType,
    vocab::{Vocabulary, io::RankTable},
};

/// Parse a single flat-format line.
///
/// ## Arguments
/// * `line` - the line text, without the line terminator.
/// * `line_no` - the 1-based line number, for error reporting.
///
/// ## Returns
/// * `Ok(None)` - for blank lines.
/// * `Ok(Some((bytes, rank)))` - for a well-formed line.
/// * `Err(InvalidVocabLine)` - otherwise.
pub fn parse_flat_line(
    line: &str,
    line_no: usize,
) -> TKResult<Option<(Vec<u8>, i64)>> {
    let invalid = |reason: &str| TekkenizerError::InvalidVocabLine {
        line: line_no,
        reason: reason.to_string(),
    };

    let mut parts = line.split_whitespace();
    let Some(token_text) = parts.next() else {
        return Ok(None);
    };
    let rank_text = parts.next().ok_or_else(|| invalid("missing rank"))?;
    if parts.next().is_some() {
        return Err(invalid("trailing fields"));
    }

    let span = BASE64_STANDARD
        .decode(token_text)
        .map_err(|e| invalid(&format!("invalid token encoding: {e}")))?;
    let rank: i64 = rank_text
        .parse()
        .map_err(|_| invalid(&format!("non-integer rank: {rank_text:?}")))?;

    Ok(Some((span, rank)))
}

/// Read a flat-format rank table from a [`BufRead`] stream.
///
/// Blank lines are skipped; ranks are not validated here.
pub fn read_flat_rank_table<R: BufRead>(reader: R) -> TKResult<RankTable> {
    let mut table = RankTable::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        if let Some(entry) = parse_flat_line(&line, idx + 1)? {
            table.push(entry);
        }
    }
    Ok(table)
}

/// Load a [`Vocabulary`] from a flat-format [`BufRead`] stream.
pub fn load_flat_vocab<T, R>(reader: R) -> TKResult<Vocabulary<T>>
where
    T: TokenType,
    R: BufRead,
{
    Vocabulary::build(read_flat_rank_table(reader)?)
}

/// Load a [`Vocabulary`] from a flat-format file.
///
/// ## Arguments
/// * `path` - the path to the vocabulary file.
pub fn load_flat_vocab_path<T, P>(path: P) -> TKResult<Vocabulary<T>>
where
    T: TokenType,
    P: AsRef<Path>,
{
    let reader = BufReader::new(File::open(path)?);
    load_flat_vocab(reader)
}

/// Write one flat-format line.
pub fn write_flat_line<W: Write>(
    writer: &mut W,
    span: &[u8],
    rank: i64,
) -> TKResult<()> {
    writeln!(writer, "{} {}", BASE64_STANDARD.encode(span), rank)?;
    Ok(())
}

/// Save a [`Vocabulary`] to a [`Write`] writer, in ascending rank order.
pub fn write_flat_vocab<T, W>(
    vocab: &Vocabulary<T>,
    writer: &mut W,
) -> TKResult<()>
where
    T: TokenType,
    W: Write,
{
    for (span, token) in vocab.sorted_entries() {
        let rank = token
            .to_i64()
            .ok_or(TekkenizerError::TokenOutOfRange(u64::MAX))?;
        write_flat_line(writer, span, rank)?;
    }
    writer.flush()?;
    Ok(())
}

/// Save a [`Vocabulary`] to a flat-format file.
pub fn save_flat_vocab_path<T, P>(
    vocab: &Vocabulary<T>,
    path: P,
) -> TKResult<()>
where
    T: TokenType,
    P: AsRef<Path>,
{
    let mut writer = BufWriter::new(File::create(path)?);
    write_flat_vocab(vocab, &mut writer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_flat_rank_table() {
        // "ab", "a", "b"
        let data = "YWI= 5\nYQ== 0\n\nYg== 1\n";
        let table = read_flat_rank_table(data.as_bytes()).unwrap();
        assert_eq!(
            table,
            vec![(b"ab".to_vec(), 5), (b"a".to_vec(), 0), (b"b".to_vec(), 1)]
        );

        let vocab: Vocabulary<u32> = load_flat_vocab(data.as_bytes()).unwrap();
        assert_eq!(vocab.lookup(b"ab"), Some(5));
    }

    #[test]
    fn test_crlf_lines() {
        let table = read_flat_rank_table("YQ== 0\r\nYg== 1\r\n".as_bytes()).unwrap();
        assert_eq!(table, vec![(b"a".to_vec(), 0), (b"b".to_vec(), 1)]);
    }

    #[test]
    fn test_invalid_lines() {
        let check = |data: &str, expected_line: usize| match read_flat_rank_table(data.as_bytes())
        {
            Err(TekkenizerError::InvalidVocabLine { line, .. }) => {
                assert_eq!(line, expected_line, "{data:?}")
            }
            other => panic!("unexpected {other:?} for {data:?}"),
        };

        check("YQ== 0\nYg==\n", 2);
        check("YQ== zero\n", 1);
        check("YQ== 0\n\n!!!! 1\n", 3);
        check("YQ== 0 7\n", 1);
    }

    #[test]
    fn test_negative_rank_fails_build() {
        let res: TKResult<Vocabulary<u32>> = load_flat_vocab("YQ== -1\n".as_bytes());
        assert!(matches!(res, Err(TekkenizerError::MalformedVocabulary(_))));
    }

    #[test]
    fn test_save_load_flat() {
        type T = u32;

        let vocab = Vocabulary::<T>::build([
            (b"apple".to_vec(), 300),
            (b"banana".to_vec(), 301),
            (b"pear".to_vec(), 302),
            (vec![0xff, 0x00], 303),
        ])
        .unwrap();

        tempdir::TempDir::new("vocab_test")
            .and_then(|dir| {
                let path = dir.path().join("vocab.tiktoken");

                save_flat_vocab_path(&vocab, &path).expect("Failed to save vocab");

                let loaded: Vocabulary<T> =
                    load_flat_vocab_path(&path).expect("Failed to load vocab");

                assert_eq!(loaded.sorted_entries(), vocab.sorted_entries());

                Ok(())
            })
            .unwrap();
    }
}
