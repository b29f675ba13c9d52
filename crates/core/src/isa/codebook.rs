//! Signed-value codebook.
//!
//! Replayed sequences are written as small signed integers, each of which
//! stands for one 4-bit opcode. The map covers ±1, ±2 and ±4 through ±8 and is
//! a bijection onto fourteen of the sixteen opcodes; `0000` and `1111` have no
//! value.

use crate::isa::opcode::Opcode;

/// Codebook entries as `(value, opcode)` pairs.
const ENTRIES: [(i8, u8); 14] = [
    (6, 0b0110),
    (-6, 0b1001),
    (5, 0b1010),
    (-5, 0b0101),
    (1, 0b0100),
    (-1, 0b1011),
    (4, 0b1101),
    (-4, 0b0010),
    (2, 0b1100),
    (-2, 0b0011),
    (8, 0b1110),
    (-8, 0b0001),
    (7, 0b0111),
    (-7, 0b1000),
];

/// The demonstration sequence replayed by default.
pub const DEMO_SEQUENCE: [i8; 37] = [
    6, 7, -5, 1, -4, 2, -8, 5, -7, -6, //
    -7, 5, -1, 4, -2, 8, -5, 7, 6, //
    7, -5, 1, -4, 2, -8, 5, -7, -6, -7, //
    5, -1, 4, -2, 8, -5, 7, 6,
];

/// [`DEMO_SEQUENCE`] encoded through the codebook.
///
/// Built at compile time; a demo value without an entry fails the build.
pub const DEMO_PROGRAM: [Opcode; DEMO_SEQUENCE.len()] = {
    let mut out = [Opcode::NOP; DEMO_SEQUENCE.len()];
    let mut i = 0;
    while i < DEMO_SEQUENCE.len() {
        out[i] = match encode(DEMO_SEQUENCE[i]) {
            Some(op) => op,
            None => panic!("demo value has no codebook entry"),
        };
        i += 1;
    }
    out
};

/// Returns the opcode a signed value stands for, if it has one.
///
/// # Examples
///
/// ```
/// use nibblealu_core::isa::codebook;
///
/// assert_eq!(codebook::encode(-1).map(|op| op.to_string()), Some("1011".into()));
/// assert!(codebook::encode(3).is_none());
/// ```
pub const fn encode(value: i8) -> Option<Opcode> {
    let mut i = 0;
    while i < ENTRIES.len() {
        let (v, code) = ENTRIES[i];
        if v == value {
            return Opcode::new(code);
        }
        i += 1;
    }
    None
}

/// Returns the signed value an opcode stands for, if any.
pub fn decode_value(opcode: Opcode) -> Option<i8> {
    ENTRIES
        .iter()
        .find(|&&(_, code)| code == opcode.value())
        .map(|&(v, _)| v)
}

/// Iterates over every `(value, opcode)` pair in the codebook.
pub fn entries() -> impl Iterator<Item = (i8, Opcode)> {
    ENTRIES
        .iter()
        .filter_map(|&(v, code)| Opcode::new(code).map(|op| (v, op)))
}
