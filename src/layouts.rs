use crate::keymap::{Rule, RuleValue, KEY_DOWN, KEY_UP};
use strum_macros::{Display, EnumIter, EnumString};

#[derive(Debug, Clone, Copy, EnumIter, EnumString, Display, PartialEq, Eq, Hash)]
#[strum(serialize_all = "snake_case")]
pub enum KnownLayout {
    Azerty,
    Qwerty,
}

// Top-row and punctuation entries carry an authored shift value; letter
// entries derive theirs as ASCII uppercase and are never authored.
struct LayoutData {
    top_row: &'static [(u8, char, char)],
    letters: &'static [(u8, char)],
    punctuation: &'static [(u8, char, char)],
}

const AZERTY: LayoutData = LayoutData {
    top_row: &[
        (0x02, '&', '1'),
        (0x03, 'é', '2'),
        (0x04, '"', '3'),
        (0x05, '\'', '4'),
        (0x06, '(', '5'),
        (0x07, '-', '6'),
        (0x08, 'è', '7'),
        (0x09, '_', '8'),
        (0x0A, 'ç', '9'),
        (0x0B, 'à', '0'),
        (0x0C, ')', '°'),
    ],
    letters: &[
        (0x10, 'a'),
        (0x11, 'z'),
        (0x12, 'e'),
        (0x13, 'r'),
        (0x14, 't'),
        (0x15, 'y'),
        (0x16, 'u'),
        (0x17, 'i'),
        (0x18, 'o'),
        (0x19, 'p'),
        (0x1E, 'q'),
        (0x1F, 's'),
        (0x20, 'd'),
        (0x21, 'f'),
        (0x22, 'g'),
        (0x23, 'h'),
        (0x24, 'j'),
        (0x25, 'k'),
        (0x26, 'l'),
        (0x27, 'm'),
        (0x2C, 'w'),
        (0x2D, 'x'),
        (0x2E, 'c'),
        (0x2F, 'v'),
        (0x30, 'b'),
        (0x31, 'n'),
    ],
    punctuation: &[
        (0x32, ',', '?'),
        (0x33, ';', '.'),
        (0x34, ':', '/'),
        (0x35, '!', '§'),
        (0x39, ' ', ' '),
    ],
};

const QWERTY: LayoutData = LayoutData {
    top_row: &[
        (0x02, '1', '!'),
        (0x03, '2', '@'),
        (0x04, '3', '#'),
        (0x05, '4', '$'),
        (0x06, '5', '%'),
        (0x07, '6', '^'),
        (0x08, '7', '&'),
        (0x09, '8', '*'),
        (0x0A, '9', '('),
        (0x0B, '0', ')'),
        (0x0C, '-', '_'),
        (0x0D, '=', '+'),
    ],
    letters: &[
        (0x10, 'q'),
        (0x11, 'w'),
        (0x12, 'e'),
        (0x13, 'r'),
        (0x14, 't'),
        (0x15, 'y'),
        (0x16, 'u'),
        (0x17, 'i'),
        (0x18, 'o'),
        (0x19, 'p'),
        (0x1E, 'a'),
        (0x1F, 's'),
        (0x20, 'd'),
        (0x21, 'f'),
        (0x22, 'g'),
        (0x23, 'h'),
        (0x24, 'j'),
        (0x25, 'k'),
        (0x26, 'l'),
        (0x2C, 'z'),
        (0x2D, 'x'),
        (0x2E, 'c'),
        (0x2F, 'v'),
        (0x30, 'b'),
        (0x31, 'n'),
        (0x32, 'm'),
    ],
    punctuation: &[
        (0x27, ';', ':'),
        (0x28, '\'', '"'),
        (0x33, ',', '<'),
        (0x34, '.', '>'),
        (0x35, '/', '?'),
        (0x39, ' ', ' '),
    ],
};

// The numeric pad is identical on both layouts. 0x48/0x50 carry the cursor
// control codes in the special layer for the driver's 0xE0-escaped path.
const NUMPAD: &[(u8, char, Option<u8>)] = &[
    (0x47, '7', None),
    (0x48, '8', Some(KEY_UP)),
    (0x49, '9', None),
    (0x4B, '4', None),
    (0x4C, '5', None),
    (0x4D, '6', None),
    (0x4F, '1', None),
    (0x50, '2', Some(KEY_DOWN)),
    (0x51, '3', None),
    (0x52, '0', None),
    (0x53, '.', None),
];

impl KnownLayout {
    fn data(&self) -> &'static LayoutData {
        match self {
            Self::Azerty => &AZERTY,
            Self::Qwerty => &QWERTY,
        }
    }

    /// The full rule set in application order: top row, letters, numeric
    /// pad, punctuation. The order is fixed so repeated runs stay
    /// byte-identical.
    pub fn rules(&self) -> Vec<Rule> {
        let data = self.data();
        let mut rules = Vec::new();

        for &(scancode, normal, shift) in data.top_row {
            rules.push(Rule {
                scancode,
                normal: RuleValue::Char(normal),
                shift: RuleValue::Char(shift),
                special: None,
            });
        }

        for &(scancode, ch) in data.letters {
            rules.push(Rule {
                scancode,
                normal: RuleValue::Char(ch),
                shift: RuleValue::Char(ch.to_ascii_uppercase()),
                special: None,
            });
        }

        for &(scancode, ch, special) in NUMPAD {
            rules.push(Rule {
                scancode,
                normal: RuleValue::Char(ch),
                shift: RuleValue::Char(ch),
                special: special.map(RuleValue::Byte),
            });
        }

        for &(scancode, normal, shift) in data.punctuation {
            rules.push(Rule {
                scancode,
                normal: RuleValue::Char(normal),
                shift: RuleValue::Char(shift),
                special: None,
            });
        }

        rules
    }

    /// Scancodes whose shift cell must be the uppercase of the normal cell.
    pub fn letter_scancodes(&self) -> Vec<u8> {
        self.data().letters.iter().map(|&(s, _)| s).collect()
    }
}
