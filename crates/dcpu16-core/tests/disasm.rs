//! Integration tests for the disassembler: a short multi-instruction
//! program rather than single-opcode checks (those live in the unit
//! tests alongside `disasm::render_instruction`).

use dcpu16_core::disasm::disassemble;

fn be_bytes(words: &[u16]) -> Vec<u8> {
    words.iter().flat_map(|w| w.to_be_bytes()).collect()
}

#[test]
fn disassembles_a_call_and_return_sequence() {
    let set_a = (0x24u16 << 10) | (0x00u16 << 4) | 0x1; // SET A, 0x4
    let jsr_a = (0x01u16 << 4) | 0x00; // JSR A
    let set_x = (0x1Fu16 << 10) | (0x03u16 << 4) | 0x1; // SET X, [next word]
    let ret = (0x18u16 << 10) | (0x1Cu16 << 4) | 0x1; // SET PC, POP

    let bytes = be_bytes(&[set_a, jsr_a, set_x, 0x1234, ret]);
    let lines = disassemble(&bytes);

    assert_eq!(
        lines,
        vec![
            "0000: SET A, 0x4",
            "0001: JSR A",
            "0002: SET X, 0x1234",
            "0004: SET PC, POP",
        ]
    );
}

#[test]
fn a_truncated_trailing_byte_does_not_panic() {
    let mut bytes = be_bytes(&[0x0403]); // SUB A, B
    bytes.push(0xFF); // dangling odd byte
    let lines = disassemble(&bytes);
    assert_eq!(lines, vec!["0000: SUB A, B"]);
}
