use clap::ValueEnum;

/// CLC, clear the carry flag.
const CLC: u8 = 0x18;
/// SEC, set the carry flag.
const SEC: u8 = 0x38;
/// CLD, clear decimal mode.
const CLD: u8 = 0xD8;
/// LDA #imm, load an immediate value into the accumulator.
const LDA_IMM: u8 = 0xA9;
/// LDA abs, load the accumulator from memory.
const LDA_ABS: u8 = 0xAD;
/// STA abs, store the accumulator to memory.
const STA_ABS: u8 = 0x8D;
/// ADC abs, add memory to the accumulator with carry.
const ADC_ABS: u8 = 0x6D;

#[rustfmt::skip]
const SET_CLEAR_CARRY: [u8; 2] = [
    SEC,
    CLC,
];

/// Adds 1 and 2 using scratch memory at 0x6100..=0x6102.
#[rustfmt::skip]
const ADD_ONE_PLUS_TWO: [u8; 21] = [
    CLC,
    CLD,
    LDA_IMM, 0x01,
    STA_ABS, 0x00, 0x61,
    LDA_IMM, 0x02,
    STA_ABS, 0x01, 0x61,
    LDA_ABS, 0x00, 0x61,
    ADC_ABS, 0x01, 0x61,
    STA_ABS, 0x02, 0x61,
];

/// Hand-assembled programs that can be placed at the start of the ROM.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Program {
    /// Set and then clear the carry flag.
    SetClearCarry,
    /// Store 1 and 2 in memory, add them, and store the result.
    #[default]
    AddOnePlusTwo,
}

impl Program {
    /// Machine code of the program.
    pub fn bytes(self) -> &'static [u8] {
        match self {
            Self::SetClearCarry => &SET_CLEAR_CARRY,
            Self::AddOnePlusTwo => &ADD_ONE_PLUS_TWO,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::SetClearCarry => "set-clear-carry",
            Self::AddOnePlusTwo => "add-one-plus-two",
        }
    }
}
