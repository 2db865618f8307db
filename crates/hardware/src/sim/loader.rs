//! Program Loader.
//!
//! This module gets programs into memory. It performs:
//! 1. **Image loading:** Copies bytes to RAM starting at address 0.
//! 2. **Word validation:** Rejects wide words that do not fit in a byte before writing anything.
//! 3. **Text parsing:** Reads the `.ls8` format, one binary literal per line with `#` comments.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::common::{CpuError, ParseError};
use crate::core::Cpu;

/// Loads a byte image into memory at address 0.
///
/// Memory beyond the image keeps its previous contents.
///
/// # Errors
///
/// Returns `CpuError::ProgramTooLarge` if the image is longer than RAM.
pub fn load(cpu: &mut Cpu, program: &[u8]) -> Result<(), CpuError> {
    cpu.ram.load(program)?;
    debug!(bytes = program.len(), capacity = cpu.ram.len(), "program loaded");
    Ok(())
}

/// Loads a sequence of wide words, each of which must fit in a byte.
///
/// # Errors
///
/// * `ProgramTooLarge` if there are more words than memory cells.
/// * `InvalidWord` for the first word above 255.
///
/// Memory is untouched if either check fails.
pub fn load_words(cpu: &mut Cpu, words: &[u32]) -> Result<(), CpuError> {
    if words.len() > cpu.ram.len() {
        return Err(CpuError::ProgramTooLarge {
            len: words.len(),
            capacity: cpu.ram.len(),
        });
    }
    let bytes = words
        .iter()
        .enumerate()
        .map(|(index, &value)| {
            u8::try_from(value).map_err(|_| CpuError::InvalidWord { index, value })
        })
        .collect::<Result<Vec<u8>, _>>()?;
    load(cpu, &bytes)
}

/// Parses the textual program format.
///
/// Each line holds one 8-bit binary literal (an optional `0b` prefix is accepted).
/// Anything after `#` is a comment; blank and comment-only lines are skipped.
///
/// # Errors
///
/// Returns `ParseError::InvalidLiteral` for the first line that is not a binary byte.
///
/// # Examples
///
/// ```
/// use ls8_core::sim::loader::parse_program;
///
/// let src = "# print8\n10000010 # LDI R0,8\n00000000\n00001000\n\n00000001 # HLT\n";
/// assert_eq!(parse_program(src).unwrap(), vec![0b1000_0010, 0, 8, 1]);
/// ```
pub fn parse_program(source: &str) -> Result<Vec<u8>, ParseError> {
    let mut program = Vec::new();
    for (idx, line) in source.lines().enumerate() {
        let text = line.split('#').next().unwrap_or_default().trim();
        if text.is_empty() {
            continue;
        }
        let digits = text
            .strip_prefix("0b")
            .or_else(|| text.strip_prefix("0B"))
            .unwrap_or(text)
            .replace('_', "");
        let val = u8::from_str_radix(&digits, 2).map_err(|_| ParseError::InvalidLiteral {
            line: idx + 1,
            text: text.to_string(),
        })?;
        program.push(val);
    }
    Ok(program)
}

/// Reads and parses a program file.
///
/// # Errors
///
/// * `ParseError::Io` if the file cannot be read (see `ParseError::is_not_found`).
/// * `ParseError::InvalidLiteral` if a line does not parse.
pub fn load_program_file(path: impl AsRef<Path>) -> Result<Vec<u8>, ParseError> {
    let path = path.as_ref();
    let source = fs::read_to_string(path).map_err(|source| ParseError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_program(&source)
}
