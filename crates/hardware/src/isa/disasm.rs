//! Instruction Disassembler for the LS-8.
//!
//! Renders program bytes as assembler text for debug tracing and the CLI's
//! `--disassemble` listing.
//!
//! # Usage
//!
//! ```
//! use ls8_core::isa::disasm::disassemble;
//! assert_eq!(disassemble(&[0b1000_0010, 0, 8], 0), "LDI R0, 8");
//! ```

use super::decode::decode;

/// Disassembles the instruction at `pc`.
///
/// Returns the instruction text, or a `.byte` directive for bytes that do not
/// decode (unknown opcode, bad register, truncated operands).
pub fn disassemble(mem: &[u8], pc: usize) -> String {
    decode(mem, pc).map_or_else(
        |_| format!(".byte {:#010b}", mem.get(pc).copied().unwrap_or(0)),
        |inst| inst.to_string(),
    )
}

/// Disassembles a whole program image.
///
/// Walks the image from address 0, stepping by each instruction's encoded length
/// (one byte for anything that does not decode). Returns `(address, text)` pairs.
pub fn disassemble_program(image: &[u8]) -> Vec<(usize, String)> {
    let mut listing = Vec::new();
    let mut pc = 0;
    while pc < image.len() {
        let (text, step) = decode(image, pc).map_or_else(
            |_| (disassemble(image, pc), 1),
            |inst| (inst.to_string(), inst.size()),
        );
        listing.push((pc, text));
        pc += step;
    }
    listing
}
