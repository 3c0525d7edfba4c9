//! # Hash Command
//!
//! Streams the configured input through the engine in fixed-size chunks and
//! writes the digest as 64 lowercase hex characters. The digest is written
//! even in quiet mode: it is the command's result, not commentary.

use std::io::{self, Read, Write};

use anyhow::{Context, Result};

use dgst_core::{Digest, Sha256};

use crate::io::IoConfig;

/// Size of each read from the input stream.
pub const READ_CHUNK_LEN: usize = 1000;

/// Hash everything `reader` yields until EOF.
pub fn hash_reader<R: Read>(mut reader: R) -> io::Result<Digest> {
    let mut hasher = Sha256::new();
    let mut buf = [0u8; READ_CHUNK_LEN];
    loop {
        match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => hasher.update(&buf[..n]),
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    tracing::debug!(bytes = hasher.len(), "input exhausted");
    Ok(hasher.finish())
}

/// Execute the hash command.
pub fn run_hash(config: &IoConfig) -> Result<u8> {
    let input = config.open_input()?;
    let mut output = config.open_output()?;
    cmd_hash(input, &mut output, config.writes_to_stdout())
}

/// Hash `input` and write the hex digest to `output`.
///
/// A trailing newline is added only for terminal-style output so that
/// output files contain exactly the 64 digest characters.
fn cmd_hash<R: Read, W: Write + ?Sized>(input: R, output: &mut W, newline: bool) -> Result<u8> {
    let digest = hash_reader(input).context("failed to read input")?;
    tracing::info!(%digest, "computed digest");

    write!(output, "{digest}").context("failed to write digest")?;
    if newline {
        writeln!(output).context("failed to write digest")?;
    }
    output.flush().context("failed to flush output")?;
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ABC_HEX: &str = "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad";

    /// Reader that yields its data a few bytes at a time and is interrupted
    /// before every successful read.
    struct Stuttering<'a> {
        data: &'a [u8],
        interrupt: bool,
    }

    impl Read for Stuttering<'_> {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            self.interrupt = !self.interrupt;
            if self.interrupt {
                return Err(io::Error::from(io::ErrorKind::Interrupted));
            }
            let n = self.data.len().min(buf.len()).min(5);
            buf[..n].copy_from_slice(&self.data[..n]);
            self.data = &self.data[n..];
            Ok(n)
        }
    }

    struct Broken;

    impl Read for Broken {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "disk on fire"))
        }
    }

    #[test]
    fn hash_reader_matches_one_shot() {
        let data = vec![b'a'; 2000];
        let digest = hash_reader(data.as_slice()).unwrap();
        assert_eq!(
            digest.to_hex(),
            "c4a700f85b7e9e5cdbdc51170409ee2ad48bebe2f2f0957a067937531a0a3c42"
        );
    }

    #[test]
    fn hash_reader_retries_interrupted_reads() {
        let reader = Stuttering {
            data: b"abc",
            interrupt: false,
        };
        assert_eq!(hash_reader(reader).unwrap().to_hex(), ABC_HEX);
    }

    #[test]
    fn hash_reader_propagates_errors() {
        let err = hash_reader(Broken).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::Other);
    }

    #[test]
    fn cmd_hash_with_newline() {
        let mut out = Vec::new();
        let code = cmd_hash(&b"abc"[..], &mut out, true).unwrap();
        assert_eq!(code, 0);
        assert_eq!(String::from_utf8(out).unwrap(), format!("{ABC_HEX}\n"));
    }

    #[test]
    fn cmd_hash_without_newline() {
        let mut out = Vec::new();
        cmd_hash(&b""[..], &mut out, false).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn cmd_hash_read_failure() {
        let mut out = Vec::new();
        let err = cmd_hash(Broken, &mut out, true).unwrap_err();
        assert!(format!("{err:#}").contains("failed to read input"));
        assert!(out.is_empty());
    }

    #[test]
    fn run_hash_file_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.txt");
        let output = dir.path().join("out.txt");
        std::fs::write(&input, b"abc").unwrap();

        let config = IoConfig {
            input: Some(input),
            output: Some(output.clone()),
            quiet: false,
        };
        assert_eq!(run_hash(&config).unwrap(), 0);
        assert_eq!(std::fs::read_to_string(&output).unwrap(), ABC_HEX);
    }

    #[test]
    fn run_hash_ignores_quiet_for_the_digest() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.bin");
        let output = dir.path().join("out.txt");
        std::fs::write(&input, vec![0u8; 4096]).unwrap();

        let config = IoConfig {
            input: Some(input),
            output: Some(output.clone()),
            quiet: true,
        };
        run_hash(&config).unwrap();
        let written = std::fs::read_to_string(&output).unwrap();
        assert_eq!(written, dgst_core::sha256(&[0u8; 4096]).to_hex());
    }

    #[test]
    fn run_hash_missing_input() {
        let dir = tempfile::tempdir().unwrap();
        let config = IoConfig {
            input: Some(dir.path().join("nope.bin")),
            output: Some(dir.path().join("out.txt")),
            quiet: false,
        };
        let err = run_hash(&config).unwrap_err();
        assert!(err.to_string().contains("cannot open input file"));
        assert!(!dir.path().join("out.txt").exists());
    }
}
