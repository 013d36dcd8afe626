//! Alpha expansion lookup tables shared by the palette and BC2 decoders.
//!
//! Both tables are plain constants, so decoding threads read them without
//! any synchronisation.

/// 1-bit alpha to 8-bit alpha
pub const ALPHA_1BIT: [u8; 2] = [0x00, 0xFF];

/// 4-bit alpha to 8-bit alpha (`v * 17`)
pub const ALPHA_4BIT: [u8; 16] = build_alpha_4bit();

const fn build_alpha_4bit() -> [u8; 16] {
    let mut table = [0u8; 16];
    let mut v = 0;
    while v < 16 {
        table[v] = (v * 17) as u8;
        v += 1;
    }
    table
}
