use super::TableRules;

/// Build the authored halfwidth -> fullwidth rules
///
/// Block references:
/// - Halfwidth and Fullwidth Forms (U+FF00-U+FFEF)
/// - CJK Symbols and Punctuation (U+3000-U+303F)
/// - Katakana (U+30A0-U+30FF)
/// - Hangul Compatibility Jamo (U+3130-U+318F)
pub fn build_rules() -> TableRules {
    let mut rules = TableRules::new();

    // Space
    rules.pair(' ', '\u{3000}'); // IDEOGRAPHIC SPACE

    // Fullwidth ASCII variants
    rules.range('\u{21}', '\u{7E}', '\u{FF01}', '\u{FF5E}');

    // Fullwidth brackets
    rules.pair('\u{2985}', '\u{FF5F}'); // ⦅ -> ｟
    rules.pair('\u{2986}', '\u{FF60}'); // ⦆ -> ｠

    // Halfwidth CJK punctuation
    rules.pair('｡', '。');
    rules.pair('｢', '「');
    rules.pair('｣', '」');
    rules.pair('､', '、');

    // Halfwidth Katakana variants
    rules.pair('･', '・');
    rules.pair('ｦ', 'ヲ');
    rules.pair('ｧ', 'ァ');
    rules.pair('ｨ', 'ィ');
    rules.pair('ｩ', 'ゥ');
    rules.pair('ｪ', 'ェ');
    rules.pair('ｫ', 'ォ');
    rules.pair('ｬ', 'ャ');
    rules.pair('ｭ', 'ュ');
    rules.pair('ｮ', 'ョ');
    rules.pair('ｯ', 'ッ');
    rules.pair('ｰ', 'ー');

    // A-row .. O-row
    rules.pair('ｱ', 'ア');
    rules.pair('ｲ', 'イ');
    rules.pair('ｳ', 'ウ');
    rules.pair('ｴ', 'エ');
    rules.pair('ｵ', 'オ');

    // K-row
    rules.pair('ｶ', 'カ');
    rules.pair('ｷ', 'キ');
    rules.pair('ｸ', 'ク');
    rules.pair('ｹ', 'ケ');
    rules.pair('ｺ', 'コ');

    // S-row
    rules.pair('ｻ', 'サ');
    rules.pair('ｼ', 'シ');
    rules.pair('ｽ', 'ス');
    rules.pair('ｾ', 'セ');
    rules.pair('ｿ', 'ソ');

    // T-row
    rules.pair('ﾀ', 'タ');
    rules.pair('ﾁ', 'チ');
    rules.pair('ﾂ', 'ツ');
    rules.pair('ﾃ', 'テ');
    rules.pair('ﾄ', 'ト');

    // N-row
    rules.pair('ﾅ', 'ナ');
    rules.pair('ﾆ', 'ニ');
    rules.pair('ﾇ', 'ヌ');
    rules.pair('ﾈ', 'ネ');
    rules.pair('ﾉ', 'ノ');

    // H-row
    rules.pair('ﾊ', 'ハ');
    rules.pair('ﾋ', 'ヒ');
    rules.pair('ﾌ', 'フ');
    rules.pair('ﾍ', 'ヘ');
    rules.pair('ﾎ', 'ホ');

    // M-row
    rules.pair('ﾏ', 'マ');
    rules.pair('ﾐ', 'ミ');
    rules.pair('ﾑ', 'ム');
    rules.pair('ﾒ', 'メ');
    rules.pair('ﾓ', 'モ');

    // Y-row
    rules.pair('ﾔ', 'ヤ');
    rules.pair('ﾕ', 'ユ');
    rules.pair('ﾖ', 'ヨ');

    // R-row
    rules.pair('ﾗ', 'ラ');
    rules.pair('ﾘ', 'リ');
    rules.pair('ﾙ', 'ル');
    rules.pair('ﾚ', 'レ');
    rules.pair('ﾛ', 'ロ');

    // W-row and ん
    rules.pair('ﾜ', 'ワ');
    rules.pair('ﾝ', 'ン');

    // Voicing marks map to the *combining* forms so NFC can compose them
    rules.pair('ﾞ', '\u{3099}'); // COMBINING KATAKANA-HIRAGANA VOICED SOUND MARK
    rules.pair('ﾟ', '\u{309A}'); // COMBINING KATAKANA-HIRAGANA SEMI-VOICED SOUND MARK

    // Halfwidth Hangul variants
    rules.pair('\u{FFA0}', '\u{3164}'); // HANGUL FILLER
    rules.range('\u{FFA1}', '\u{FFBE}', '\u{3131}', '\u{314E}'); // ㄱ .. ㅎ
    rules.range('\u{FFC2}', '\u{FFC7}', '\u{314F}', '\u{3154}'); // ㅏ .. ㅔ
    rules.range('\u{FFCA}', '\u{FFCF}', '\u{3155}', '\u{315A}'); // ㅕ .. ㅚ
    rules.range('\u{FFD2}', '\u{FFD7}', '\u{315B}', '\u{3160}'); // ㅛ .. ㅠ
    rules.range('\u{FFDA}', '\u{FFDC}', '\u{3161}', '\u{3163}'); // ㅡ .. ㅣ

    // Fullwidth symbol variants
    rules.pair('¢', '\u{FFE0}');
    rules.pair('£', '\u{FFE1}');
    rules.pair('¬', '\u{FFE2}');
    rules.pair('¯', '\u{FFE3}');
    rules.pair('¦', '\u{FFE4}');
    rules.pair('¥', '\u{FFE5}');
    rules.pair('₩', '\u{FFE6}');

    // Halfwidth symbol variants
    rules.pair('\u{FFE8}', '\u{2502}'); // │ BOX DRAWINGS LIGHT VERTICAL
    rules.pair('\u{FFE9}', '\u{2190}'); // ←
    rules.pair('\u{FFEA}', '\u{2191}'); // ↑
    rules.pair('\u{FFEB}', '\u{2192}'); // →
    rules.pair('\u{FFEC}', '\u{2193}'); // ↓
    rules.pair('\u{FFED}', '\u{25A0}'); // ■
    rules.pair('\u{FFEE}', '\u{25CB}'); // ○

    rules
}
