use crate::unwrap_or_return_some_err;
use std::{
    fs::File,
    io::{BufRead, BufReader, Read},
    path::Path,
};

/// Provides a container struct for data from a generic
/// [FASTA](https://en.wikipedia.org/wiki/FASTA_format) file.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FastaSeq {
    pub name:     String,
    pub sequence: Vec<u8>,
}

/// Structure for buffered reading of FASTA files.
#[derive(Debug)]
pub struct FastaReader<R: Read> {
    reader: BufReader<R>,
    buffer: Vec<u8>,
}

impl<R: Read> FastaReader<R> {
    /// Creates an iterator over FASTA data, wrapping the input in a buffered
    /// reader.
    pub fn new(inner: R) -> Self {
        FastaReader {
            reader: BufReader::new(inner),
            buffer: Vec::new(),
        }
    }
}

impl FastaReader<File> {
    /// Reads a FASTA file into an iterator backed by a buffered reader.
    ///
    /// ## Errors
    ///
    /// Will return `Err` if the file or permissions do not exist. A missing
    /// file propagates the underlying
    /// [`ErrorKind::NotFound`](std::io::ErrorKind::NotFound) unmodified.
    pub fn from_filename<P>(filename: P) -> std::io::Result<FastaReader<File>>
    where
        P: AsRef<Path>, {
        Ok(FastaReader::new(File::open(filename)?))
    }
}

impl<R: Read> Iterator for FastaReader<R> {
    type Item = std::io::Result<FastaSeq>;

    fn next(&mut self) -> Option<Self::Item> {
        self.buffer.clear();

        let bytes = unwrap_or_return_some_err!(self.reader.read_until(b'>', &mut self.buffer));

        match bytes {
            0 => None,
            1 => self.next(),
            _ => {
                if self.buffer.ends_with(b">") {
                    self.buffer.pop();
                }

                let mut lines = self.buffer.split(|b| *b == b'\n' || *b == b'\r');
                let name = match lines.next() {
                    Some(h) => String::from_utf8_lossy(h).into_owned(),
                    None => String::from("UNKNOWN"),
                };

                let sequence: Vec<u8> = lines.flatten().copied().collect();

                if sequence.is_empty() {
                    None
                } else {
                    Some(Ok(FastaSeq { name, sequence }))
                }
            }
        }
    }
}

impl std::fmt::Display for FastaSeq {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, ">{}\n{}\n", self.name, String::from_utf8_lossy(&self.sequence))
    }
}

/// Loads a sequence from a FASTA or raw text file as a single uppercase byte
/// string: header lines (starting with `>` or `@`) are skipped and the
/// remaining lines are concatenated.
///
/// ## Errors
///
/// Will return `Err` if the file cannot be opened or read. A missing file
/// propagates the underlying
/// [`ErrorKind::NotFound`](std::io::ErrorKind::NotFound) unmodified.
pub fn load_sequence<P>(filename: P) -> std::io::Result<Vec<u8>>
where
    P: AsRef<Path>, {
    let mut reader = BufReader::new(File::open(filename)?);
    let mut line = Vec::new();
    let mut sequence = Vec::new();

    loop {
        line.clear();
        if reader.read_until(b'\n', &mut line)? == 0 {
            break;
        }

        if line.starts_with(b">") || line.starts_with(b"@") {
            continue;
        }

        sequence.extend(
            line.iter()
                .copied()
                .filter(|b| !b.is_ascii_whitespace())
                .map(|b| b.to_ascii_uppercase()),
        );
    }

    Ok(sequence)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn reads_multiple_records() {
        let data = b">s1\nATCG\nGGCC\n>s2\nTTAA\n";
        let records: Vec<FastaSeq> = FastaReader::new(&data[..]).map(Result::unwrap).collect();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name, "s1");
        assert_eq!(records[0].sequence, b"ATCGGGCC");
        assert_eq!(records[1].name, "s2");
        assert_eq!(records[1].sequence, b"TTAA");
    }

    #[test]
    fn display_round_trips() {
        let record = FastaSeq {
            name:     "s1".to_string(),
            sequence: b"ATCG".to_vec(),
        };

        assert_eq!(record.to_string(), ">s1\nATCG\n");
    }
}
