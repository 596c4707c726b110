//! Disassembler - a structurally parallel decoder that formats
//! instructions instead of executing them. Shares `decode`/`length`
//! with the executor but carries no `Cpu` state of its own.

use crate::cpu::{decode, length, InstructionKind, Register};

const BASIC_MNEMONICS: [&str; 16] = [
    "???", "SET", "ADD", "SUB", "MUL", "DIV", "MOD", "SHL", "SHR", "AND", "BOR", "XOR", "IFE",
    "IFN", "IFG", "IFB",
];

fn nonbasic_mnemonic(op: u8) -> &'static str {
    match op {
        0x1 => "JSR",
        _ => "???",
    }
}

/// Render one operand specifier. `words` is the full word stream;
/// `next` is the index of the next not-yet-consumed word, advanced
/// past any immediate this operand consumes.
fn render_operand(spec: u8, words: &[u16], next: &mut usize) -> String {
    match spec {
        0x00..=0x07 => Register::from_index(spec).name().to_string(),
        0x08..=0x0F => format!("[{}]", Register::from_index(spec - 0x08).name()),
        0x10..=0x17 => {
            let offset = words.get(*next).copied().unwrap_or(0);
            *next += 1;
            format!("[0x{:x} + {}]", offset, Register::from_index(spec - 0x10).name())
        }
        0x18 => "POP".to_string(),
        0x19 => "PEEK".to_string(),
        0x1A => "PUSH".to_string(),
        0x1B => "SP".to_string(),
        0x1C => "PC".to_string(),
        0x1D => "O".to_string(),
        0x1E => {
            let addr = words.get(*next).copied().unwrap_or(0);
            *next += 1;
            format!("[0x{:x}]", addr)
        }
        0x1F => {
            let value = words.get(*next).copied().unwrap_or(0);
            *next += 1;
            format!("0x{:x}", value)
        }
        _ => format!("0x{:x}", spec.wrapping_sub(0x20)),
    }
}

/// Render a single decoded instruction starting at `words[offset]`.
/// Returns the rendered line (without the leading address) and the
/// instruction's width in words.
fn render_instruction(words: &[u16], offset: usize) -> (String, u16) {
    let word = words[offset];
    let decoded = decode(word);
    let mut next = offset + 1;

    match decoded.kind {
        InstructionKind::NonBasic => {
            let operand = render_operand(decoded.b_spec, words, &mut next);
            let line = format!("{} {}", nonbasic_mnemonic(decoded.op), operand);
            (line, 1 + length(decoded.b_spec))
        }
        InstructionKind::Basic => {
            let a_rendered = render_operand(decoded.a_spec, words, &mut next);
            let b_rendered = render_operand(decoded.b_spec, words, &mut next);
            let mnemonic = BASIC_MNEMONICS
                .get(decoded.op as usize)
                .copied()
                .unwrap_or("???");
            let line = format!("{} {}, {}", mnemonic, a_rendered, b_rendered);
            (line, 1 + length(decoded.a_spec) + length(decoded.b_spec))
        }
    }
}

/// Disassemble a big-endian byte stream (as loaded from a DCPU-16
/// binary), one line per instruction, starting at offset 0. Reserved
/// opcodes render as `???` rather than aborting, so a binary with one
/// bad instruction can still be inspected around it.
pub fn disassemble(bytes: &[u8]) -> Vec<String> {
    let words: Vec<u16> = bytes
        .chunks(2)
        .filter(|pair| pair.len() == 2)
        .map(|pair| ((pair[0] as u16) << 8) | pair[1] as u16)
        .collect();

    let mut lines = Vec::new();
    let mut offset = 0usize;
    while offset < words.len() {
        let (rendered, width) = render_instruction(&words, offset);
        lines.push(format!("{:04x}: {}", offset, rendered));
        offset += width.max(1) as usize;
    }
    lines
}
