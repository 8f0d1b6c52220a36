//! Arabic orthographic normalization chain.
//!
//! Applied in this order:
//!
//! 1. underscores become spaces (hashtags such as `#يوم_الجمعة`)
//! 2. honorific signs and ligatures are spelled out as words
//! 3. tatweel and diacritics are removed
//! 4. letter variants are unified: hamza and madda carriers to bare alef,
//!    teh marbuta to heh, and the extended Arabic, Persian and Urdu letter
//!    shapes to their Arabic base letter
//! 5. elongated character runs are collapsed
//! 6. everything outside the Arabic letter block and whitespace is dropped
//!
//! Alef maqsura (`ى`) is kept as written.

use std::ops::RangeInclusive;
use std::sync::Arc;

use super::{
    CharFilter, MappingCharFilter, PatternReplaceCharFilter, RepeatedCharFilter, apply_char_filters,
};
use crate::error::Result;

// Hamza above and below (U+0654, U+0655) are left for the alef family.
const TATWEEL_AND_DIACRITICS: &str = "[\u{0640}\u{064B}-\u{0653}\u{0656}-\u{065F}\u{0670}]";

const NON_ARABIC: &str = "[^\u{0621}-\u{064A}\\s]";

/// Signs and presentation-form ligatures that stand for whole words.
const LIGATURE_WORDS: &[(&str, &str)] = &[
    ("\u{0603}", "صفحة"),
    ("\u{0610}", "صلى الله عليه وسلم"),
    ("\u{0611}", "عليه السلام"),
    ("\u{0612}", "رحمة الله عليه"),
    ("\u{0613}", "رضي الله عنه"),
    ("\u{FDF3}", "اكبر"),
    ("\u{FDF4}", "محمد"),
    ("\u{FDF5}", "صلى الله عليه وسلم"),
    ("\u{FDF6}", "رسول"),
    ("\u{FDF7}", "عليه"),
    ("\u{FDF8}", "وسلم"),
    ("\u{FDF9}", "صلى"),
    ("\u{FDFA}", "صلى الله عليه وسلم"),
    ("\u{FDFB}", "جل جلاله"),
    ("\u{FDFC}", "ريال"),
    ("\u{FDFD}", "بسم الله الرحمن الرحيم"),
];

type LetterFamily = (char, &'static [RangeInclusive<char>]);

/// Base letter and the code points written in its place.
const LETTER_FAMILIES: &[LetterFamily] = &[
    ('ا', &[
        '\u{0621}'..='\u{0626}',
        '\u{0654}'..='\u{0655}',
        '\u{0671}'..='\u{0678}',
        '\u{0773}'..='\u{0774}',
    ]),
    ('ب', &[
        '\u{066E}'..='\u{066E}',
        '\u{067B}'..='\u{067B}',
        '\u{067E}'..='\u{067E}',
        '\u{0680}'..='\u{0680}',
        '\u{0750}'..='\u{0756}',
        '\u{08A0}'..='\u{08A1}',
        '\u{08B6}'..='\u{08B7}',
    ]),
    ('ت', &[
        '\u{0679}'..='\u{067A}',
        '\u{067C}'..='\u{067D}',
        '\u{067F}'..='\u{067F}',
        '\u{08B8}'..='\u{08B8}',
    ]),
    ('ج', &[
        '\u{0683}'..='\u{0684}',
        '\u{0686}'..='\u{0687}',
        '\u{0758}'..='\u{0758}',
        '\u{08A2}'..='\u{08A2}',
    ]),
    ('ح', &[
        '\u{0681}'..='\u{0682}',
        '\u{0685}'..='\u{0685}',
        '\u{0757}'..='\u{0757}',
        '\u{076E}'..='\u{076F}',
        '\u{0772}'..='\u{0772}',
        '\u{077C}'..='\u{077C}',
    ]),
    ('خ', &['\u{06BF}'..='\u{06BF}']),
    ('د', &[
        '\u{0688}'..='\u{0690}',
        '\u{06EE}'..='\u{06EE}',
        '\u{0759}'..='\u{075A}',
        '\u{08AE}'..='\u{08AE}',
    ]),
    ('ر', &[
        '\u{0691}'..='\u{0699}',
        '\u{06EF}'..='\u{06EF}',
        '\u{075B}'..='\u{075B}',
        '\u{076B}'..='\u{076C}',
        '\u{0771}'..='\u{0771}',
        '\u{08AA}'..='\u{08AA}',
        '\u{08B9}'..='\u{08B9}',
    ]),
    ('ز', &['\u{08B2}'..='\u{08B2}']),
    ('س', &[
        '\u{069A}'..='\u{069C}',
        '\u{075C}'..='\u{075C}',
        '\u{076D}'..='\u{076D}',
        '\u{0770}'..='\u{0770}',
        '\u{077D}'..='\u{077E}',
    ]),
    ('ش', &['\u{06FA}'..='\u{06FA}']),
    ('ص', &['\u{069D}'..='\u{069E}', '\u{08AF}'..='\u{08AF}']),
    ('ض', &['\u{06FB}'..='\u{06FB}']),
    ('ط', &['\u{069F}'..='\u{069F}', '\u{08A3}'..='\u{08A3}']),
    ('ع', &[
        '\u{060F}'..='\u{060F}',
        '\u{06A0}'..='\u{06A0}',
        '\u{075D}'..='\u{075F}',
        '\u{08B3}'..='\u{08B3}',
    ]),
    ('غ', &['\u{06FC}'..='\u{06FC}']),
    ('ف', &[
        '\u{06A1}'..='\u{06A6}',
        '\u{0760}'..='\u{0761}',
        '\u{08A4}'..='\u{08A4}',
        '\u{08BB}'..='\u{08BB}',
    ]),
    ('ق', &[
        '\u{066F}'..='\u{066F}',
        '\u{06A7}'..='\u{06A8}',
        '\u{08A5}'..='\u{08A5}',
        '\u{08BC}'..='\u{08BC}',
    ]),
    ('ك', &[
        '\u{063B}'..='\u{063C}',
        '\u{06A9}'..='\u{06B4}',
        '\u{0762}'..='\u{0764}',
        '\u{077F}'..='\u{077F}',
        '\u{08B0}'..='\u{08B0}',
        '\u{08B4}'..='\u{08B4}',
    ]),
    ('ل', &['\u{06B5}'..='\u{06B8}', '\u{076A}'..='\u{076A}', '\u{08A6}'..='\u{08A6}']),
    ('م', &['\u{0765}'..='\u{0766}', '\u{08A7}'..='\u{08A7}']),
    ('ن', &['\u{06B9}'..='\u{06BD}', '\u{0767}'..='\u{0769}', '\u{08BD}'..='\u{08BD}']),
    ('ه', &[
        '\u{0629}'..='\u{0629}',
        '\u{06BE}'..='\u{06BE}',
        '\u{06C0}'..='\u{06C3}',
        '\u{06FF}'..='\u{06FF}',
    ]),
    ('و', &[
        '\u{06C4}'..='\u{06CB}',
        '\u{06CF}'..='\u{06CF}',
        '\u{0778}'..='\u{0779}',
        '\u{08AB}'..='\u{08AB}',
        '\u{08B1}'..='\u{08B1}',
    ]),
    ('ي', &[
        '\u{0620}'..='\u{0620}',
        '\u{063D}'..='\u{063F}',
        '\u{06CC}'..='\u{06CE}',
        '\u{06D0}'..='\u{06D3}',
        '\u{0775}'..='\u{0777}',
        '\u{077A}'..='\u{077B}',
        '\u{08A8}'..='\u{08A9}',
        '\u{08AC}'..='\u{08AC}',
        '\u{08BA}'..='\u{08BA}',
    ]),
];

/// Every `(variant, base letter)` pair of [`LETTER_FAMILIES`].
fn letter_variants() -> impl Iterator<Item = (String, String)> {
    LETTER_FAMILIES.iter().flat_map(|(base, ranges)| {
        ranges
            .iter()
            .cloned()
            .flatten()
            .map(move |variant| (variant.to_string(), base.to_string()))
    })
}

/// Build the char filter chain normalizing Arabic orthography.
pub fn arabic_char_filters(max_repeated_chars: usize) -> Result<Vec<Arc<dyn CharFilter>>> {
    Ok(vec![
        Arc::new(MappingCharFilter::from_pairs([("_", " ")])?),
        Arc::new(MappingCharFilter::from_pairs(LIGATURE_WORDS.iter().copied())?),
        Arc::new(PatternReplaceCharFilter::new(TATWEEL_AND_DIACRITICS, "")?),
        Arc::new(MappingCharFilter::from_pairs(letter_variants())?),
        Arc::new(RepeatedCharFilter::new(max_repeated_chars)),
        Arc::new(PatternReplaceCharFilter::new(NON_ARABIC, "")?),
    ])
}
