// File: src/core/inventory.rs
//! Per-script symbol inventories.
//!
//! Each script gets the shared IPA tables plus the artifacts its
//! transliteration model is known to emit. "Syllabic" is an enumerated list
//! of vowel symbols, not a Unicode property, so some entries are Cyrillic or
//! Devanagari letters that leak through transliteration as vowels.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The writing system a corpus was transliterated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Script {
    Latin,
    Cyrillic,
    Devanagari,
    Han,
    Thai,
}

impl fmt::Display for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Script::Latin => write!(f, "Latin"),
            Script::Cyrillic => write!(f, "Cyrillic"),
            Script::Devanagari => write!(f, "Devanagari"),
            Script::Han => write!(f, "Han"),
            Script::Thai => write!(f, "Thai"),
        }
    }
}

/// Raw classification tables. Disjointness is checked when a
/// [`SymbolClassifier`](crate::core::classifier::SymbolClassifier) is built
/// from it, not here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Inventory {
    pub syllabic: Vec<char>,
    /// Known consonants. Code points outside every table still classify as
    /// non-syllabic but are reported as unclassified.
    pub non_syllabic: Vec<char>,
    pub diacritics: Vec<char>,
    pub tones: Vec<char>,
    pub junk: Vec<char>,
}

const IPA_VOWELS: &[char] = &[
    'a', 'æ', 'ã', 'â', 'à', 'ä', 'ā', 'å', 'ą', 'ậ', 'á', 'ɑ', 'ả', 'ạ', 'ă',
    'e', 'ẽ', 'è', 'ë', 'ễ', 'é', 'ɛ', 'ε',
    'i', 'ĩ', 'î', 'ï', 'ĭ', 'ɪ', 'ı', 'ī', 'í', 'ɨ',
    'o', 'õ', 'ɔ', 'ò', 'ô', 'ö', 'œ', 'ø',
    'u', 'û', 'ù', 'ü', 'ū', 'ʊ', 'ʌ', 'ũ',
    'ɤ', 'ə',
];

const IPA_CONSONANTS: &[char] = &[
    'p', 'b', 't', 'd', 'ʈ', 'ɖ', 'c', 'ɟ', 'k', 'g', 'ɡ', 'q', 'ɢ', 'ʔ',
    'm', 'ɱ', 'n', 'ɳ', 'ɲ', 'ŋ', 'ɴ',
    'ʙ', 'r', 'ʀ', 'ⱱ', 'ɾ', 'ɽ',
    'ɸ', 'β', 'f', 'v', 'θ', 'ð', 's', 'z', 'ʃ', 'ʒ', 'ʂ', 'ʐ', 'ç', 'ʝ',
    'x', 'ɣ', 'χ', 'ʁ', 'ħ', 'ʕ', 'h', 'ɦ', 'ɬ', 'ɮ',
    'ʋ', 'ɹ', 'ɻ', 'j', 'ɰ', 'l', 'ɭ', 'ʎ', 'ʟ', 'w', 'ʍ', 'ɥ',
    'ɕ', 'ʑ', 'ɧ', 'ɓ', 'ɗ', 'ʄ', 'ɠ', 'ʛ', 'ɺ',
    'ʦ', 'ʧ', 'ʨ', 'ʣ', 'ʤ', 'ʥ',
];

const IPA_DIACRITICS: &[char] = &[
    'ː', '\'', 'ʰ', 'ʲ', '_', '、', '‧', '°', ':', '·', '-', '`', '^', '|',
    '\u{0300}', // grave
    '\u{0303}', // tilde
    '\u{0304}', // macron
    '\u{0306}', // breve
    '\u{0307}', // dot above
    '\u{0324}', // diaeresis below
    '\u{0325}', // ring below
    '\u{0327}', // cedilla
    '\u{0328}', // ogonek
    '\u{0329}', // syllabic
    '\u{032F}', // inverted breve below
];

const COMMON_JUNK: &[char] = &[
    '~', '・', '─', ',', '.', '/', '$', '<', '>',
    '\u{200B}', '\u{200D}',
    'N', 'W', 'C', 'Z', 'X', 'K', 'Y', 'S', 'D', 'G', 'H', 'J', 'R', 'L', 'O',
    'E', 'M', 'F', 'U', 'V', 'I',
    'ō', 'ǩ', 'ʿ', '²', '±', '†', '′', '—', '−', 'º',
    '\u{0301}', '\u{0302}', '\u{0308}', '\u{0309}', '\u{031B}', '\u{0361}',
];

const CYRILLIC_VOWELS: &[char] = &['е', 'ё', 'з', 'ш'];
const CYRILLIC_DIACRITICS: &[char] = &['т'];
const CYRILLIC_JUNK: &[char] = &['п', 'ч', 'л', 'о', 'д', 'ъ', 'њ', 'џ', 'љ'];

const DEVANAGARI_VOWELS: &[char] = &['\u{093C}', '\u{0945}'];
const DEVANAGARI_JUNK: &[char] = &[
    'ऑ', 'ن', 'د', 'ك', 'ا', 'ج', 'م', 'ش', 'ر', 'ذ', 'ل',
];

const HAN_VOWELS: &[char] = &['³'];
const HAN_TONES: &[char] = &['「', '」', '『', '』'];
const HAN_JUNK: &[char] = &[
    '曧', '袥', '卧', '坮', '撘', '彝', '鱂', '痹', '脱', '鍝', '洒', '櫾',
    '宿', '芦', '慎', '호', '大', '楽', '園', '伎', '火', '箭', '上', '성',
    '則', '部', '胡', '征', '介', '义', '乙', '粉', '田', '中', '济', '安',
    '藩', '号', '长', '강', '四', '玄', '临', '規', '町', '井', '宮',
];

impl Script {
    pub const ALL: [Script; 5] = [
        Script::Latin,
        Script::Cyrillic,
        Script::Devanagari,
        Script::Han,
        Script::Thai,
    ];

    /// Builds the inventory for this script: shared IPA tables plus
    /// script-specific transliteration artifacts.
    pub fn inventory(self) -> Inventory {
        let mut inventory = Inventory {
            syllabic: IPA_VOWELS.to_vec(),
            non_syllabic: IPA_CONSONANTS.to_vec(),
            diacritics: IPA_DIACRITICS.to_vec(),
            tones: Vec::new(),
            junk: COMMON_JUNK.to_vec(),
        };

        match self {
            Script::Latin | Script::Thai => {}
            Script::Cyrillic => {
                inventory.syllabic.extend_from_slice(CYRILLIC_VOWELS);
                inventory.diacritics.extend_from_slice(CYRILLIC_DIACRITICS);
                inventory.junk.extend_from_slice(CYRILLIC_JUNK);
            }
            Script::Devanagari => {
                inventory.syllabic.extend_from_slice(DEVANAGARI_VOWELS);
                inventory.junk.extend_from_slice(DEVANAGARI_JUNK);
            }
            Script::Han => {
                inventory.syllabic.extend_from_slice(HAN_VOWELS);
                inventory.tones.extend_from_slice(HAN_TONES);
                inventory.junk.extend_from_slice(HAN_JUNK);
            }
        }

        inventory
    }
}
