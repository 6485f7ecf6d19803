//! Curated Unicode break characters
//!
//! 1277 code points collected by scanning a mixed-language corpus for
//! characters that a default tokenizer glues to adjacent alphanumeric runs.
//! Each one splits a span wherever it appears, exactly like the ASCII infix
//! punctuation.
//!
//! The table is a literal list, not a Unicode category rule; widening it
//! to one (say, "all CJK ideographs") would silently change tokenization
//! on the corpora it was collected from. Entries are sorted by code point
//! and grouped by block; invisible, combining, and spacing characters are
//! kept in escaped form.

/// Unicode code points that act as infix break characters.
pub const UNICODE_CHARS: &[char] = &[
    // Latin-1 Supplement
    '¡', '¢', '£', '¥', '§', '°', '±', '²', '´', 'µ', '¶', '·', '¼', '½', '¿', 'Á', 'Â', 'Ä',
    'Å', 'Æ', 'Ç', 'É', 'Í', 'Î', 'Ó', 'Ô', 'Õ', 'Ö', '×', 'Ø', 'Ú', 'Ü', 'ß', 'à', 'á', 'â',
    'ã', 'ä', 'å', 'æ', 'ç', 'è', 'é', 'ê', 'ë', 'ì', 'í', 'î', 'ï', 'ð', 'ñ', 'ò', 'ó', 'ô',
    'õ', 'ö', '÷', 'ø', 'ù', 'ú', 'û', 'ü', 'ý', 'þ', 'ÿ',
    // Latin Extended-A
    'Ā', 'ā', 'ă', 'ą', 'Ć', 'ć', 'ċ', 'Č', 'č', 'Ď', 'ď', 'Đ', 'đ', 'Ē', 'ē', 'ė', 'ę', 'ě',
    'ĝ', 'ğ', 'Ġ', 'ġ', 'Ħ', 'ħ', 'ī', 'ĭ', 'İ', 'ı', 'ļ', 'Ł', 'ł', 'ń', 'ņ', 'ň', 'ŋ', 'Ō',
    'ō', 'ŏ', 'ő', 'Œ', 'œ', 'ř', 'Ś', 'ś', 'Ş', 'ş', 'Š', 'š', 'ţ', 'ť', 'ũ', 'ū', 'ŭ', 'ů',
    'ŵ', 'ź', 'Ż', 'ż', 'Ž', 'ž',
    // Latin Extended-B
    'ơ', 'ư', 'ƿ', 'ǀ', 'ǁ', 'ǂ', 'ǃ', 'ǎ', 'ǐ', 'ǒ', 'ǔ', 'ǚ', 'ǜ', 'ǥ', 'ǵ', 'ș', 'ț',
    // IPA Extensions
    'ɐ', 'ɑ', 'ɒ', 'ɔ', 'ɕ', 'ɖ', 'ə', 'ɛ', 'ɜ', 'ɡ', 'ɢ', 'ɣ', 'ɤ', 'ɥ', 'ɦ', 'ɨ', 'ɪ', 'ɫ',
    'ɭ', 'ɯ', 'ɳ', 'ɵ', 'ɸ', 'ɹ', 'ɾ', 'ʀ', 'ʁ', 'ʂ', 'ʃ', 'ʈ', 'ʊ', 'ʌ', 'ʎ', 'ʏ', 'ʒ', 'ʔ',
    'ʕ', 'ʘ',
    // Spacing Modifier Letters
    'ʰ', 'ʱ', 'ʲ', 'ʷ', 'ʻ', 'ʼ', 'ʾ', 'ʿ', 'ˀ', 'ˇ', 'ˈ', 'ˌ', 'ː', 'ˑ', '˚', 'ˤ', '˥', '˧',
    '˨', '˩', '˭',
    // Combining Diacritical Marks
    '\u{0300}', '\u{0301}', '\u{0303}', '\u{0304}', '\u{030c}', '\u{030d}', '\u{031e}',
    '\u{0320}', '\u{0324}', '\u{0325}', '\u{0327}', '\u{0329}', '\u{032a}', '\u{032f}',
    '\u{0361}',
    // Greek and Coptic
    'Α', 'Β', 'Γ', 'Δ', 'Ε', 'Η', 'Θ', 'Ι', 'Κ', 'Λ', 'Μ', 'Ν', 'Π', 'Ρ', 'Σ', 'Τ', 'Υ', 'Φ',
    'Χ', 'Ψ', 'ά', 'έ', 'ή', 'ί', 'α', 'β', 'γ', 'δ', 'ε', 'ζ', 'η', 'θ', 'ι', 'κ', 'λ', 'μ',
    'ν', 'ξ', 'ο', 'π', 'ρ', 'ς', 'σ', 'τ', 'υ', 'φ', 'χ', 'ψ', 'ω', 'ό', 'ύ', 'ώ',
    // Cyrillic
    'Є', 'Ј', 'А', 'Б', 'В', 'Г', 'Д', 'Е', 'З', 'И', 'К', 'Л', 'М', 'Н', 'О', 'П', 'Р', 'С',
    'Т', 'Ф', 'Х', 'а', 'б', 'в', 'г', 'д', 'е', 'ж', 'з', 'и', 'й', 'к', 'л', 'м', 'н', 'о',
    'п', 'р', 'с', 'т', 'у', 'ф', 'х', 'ц', 'ч', 'ш', 'щ', 'ъ', 'ы', 'ь', 'э', 'ю', 'я', 'ё',
    'і', 'ї', 'ў', 'ѣ', 'ѧ', 'ѩ', 'ѫ', 'ѭ', 'ѳ', 'ѵ', 'ҳ', 'Ҷ', 'ҷ',
    // Armenian
    'Լ', 'Հ', 'Պ', 'ա', 'բ', 'ի', 'կ', 'հ', 'յ', 'ն', 'ս', 'տ', 'ր', 'ց',
    // Hebrew
    '\u{05b0}', '\u{05b4}', '\u{05b5}', '\u{05b7}', '\u{05b8}', '\u{05b9}', '\u{05bc}',
    '\u{05bf}', '\u{05c1}', '\u{05c2}', 'א', 'ב', 'ג', 'ד', 'ה', 'ו', 'ז', 'ח', 'ט', 'י', 'ך',
    'ל', 'ם', 'מ', 'ן', 'נ', 'ס', 'ע', 'פ', 'ץ', 'צ', 'ק', 'ר', 'ש', 'ת', 'ײ',
    // Arabic
    'ء', 'أ', 'إ', 'ئ', 'ا', 'ب', 'ة', 'ت', 'ث', 'ج', 'ح', 'خ', 'د', 'ذ', 'ر', 'س', 'ش', 'ص',
    'ض', 'ظ', 'ع', 'ـ', 'ف', 'ق', 'ك', 'ل', 'م', 'ن', 'ه', 'و', 'ى', 'ي', '\u{064d}',
    '\u{064e}', '\u{064f}', '\u{0650}', '\u{0651}', '\u{0652}', '\u{0654}', 'پ', 'گ', 'ی',
    // Syriac
    'ܐ', 'ܝ', 'ܢ', 'ܩ', 'ܪ',
    // Devanagari
    '\u{0903}', 'आ', 'ई', 'क', 'ख', 'ग', 'ठ', 'ड', 'ण', 'त', 'द', 'ध', 'न', 'प', 'ब', 'म', 'य',
    'र', 'ष', 'स', '\u{093e}', '\u{093f}', '\u{0941}', '\u{094a}', '\u{094d}',
    // Bengali
    'জ', 'প', 'ম', 'য', 'র', 'ল', 'স', '\u{09be}', '\u{09cd}',
    // Kannada
    'ಕ', 'ಚ', 'ಜ', 'ಪ', 'ಮ', 'ಯ', 'ರ', 'ಲ', 'ಶ', 'ಸ', '\u{0cbe}', '\u{0cbf}', '\u{0cc1}',
    '\u{0ccd}',
    // Thai
    'ข', 'ง', 'ด', 'น', 'ม', 'ย', 'ร', 'ล', 'ว', 'ศ', 'ส', 'อ', 'า', '\u{0e34}', '\u{0e35}',
    'เ', 'แ', 'โ', 'ใ', 'ไ',
    // Tibetan
    '་', 'ད', 'བ', '\u{0f7c}',
    // Myanmar
    'န', 'သ', '\u{102c}', '\u{1038}',
    // Ethiopic
    'ሂ', 'ላ', 'ሪ', 'ሻ', 'ቡ', 'ታ', 'ን',
    // Cherokee
    'Ꭰ', 'Ꭳ', 'Ꭶ', 'Ꭸ', 'Ꭹ', 'Ꮀ', 'Ꮃ', 'Ꮉ', 'Ꮎ', 'Ꮝ', 'Ꮟ', 'Ꮤ', 'Ꮿ', 'Ᏹ',
    // Phonetic Extensions
    'ᵻ', 'ᶢ',
    // Latin Extended Additional
    'Ḍ', 'ḍ', 'ḗ', 'Ḥ', 'ḥ', 'ḱ', 'ḷ', 'ṃ', 'ṅ', 'ṇ', 'ṛ', 'Ṣ', 'ṣ', 'ṭ', 'Ẓ', 'ẓ', 'ả', 'ấ',
    'ế', 'ề', 'ễ', 'ỉ', 'ố', 'ồ', 'ớ', 'ờ', 'ụ', 'ử', 'ữ',
    // Greek Extended
    'ἀ', 'ἁ', 'ἄ', 'Ἀ', 'Ἄ', 'ἐ', 'ἑ', 'ἔ', 'Ἐ', 'Ἑ', 'ἡ', 'Ἥ', 'ἰ', 'ἱ', 'ἴ', 'ἵ', 'ἶ', 'Ἰ',
    'ὀ', 'ὐ', 'ὑ', 'ὠ', 'ὰ', 'ὲ', 'ὶ', 'ὸ', 'ῆ', 'ῖ', 'ῦ', 'ῶ',
    // General Punctuation
    '\u{2009}', '\u{200b}', '\u{200c}', '\u{200d}', '\u{200e}', '‑', '–', '—', '‘', '’', '‚',
    '“', '”', '•', '…', '\u{202f}', '′', '″', '›', '⁄', '⁊',
    // Superscripts and Subscripts
    '₂',
    // Currency Symbols
    '₤', '₥', '€', '₯', '₹',
    // Letterlike Symbols
    '№', 'ℛ',
    // Number Forms
    '⅓',
    // Arrows
    '→',
    // Mathematical Operators
    '∅', '∈', '−', '∖', '∗', '√', '∝', '≈', '≡', '≥', '⋅',
    // Geometric Shapes
    '◌',
    // Miscellaneous Symbols
    '♆', '♠', '♯',
    // Dingbats
    '❤',
    // Miscellaneous Mathematical Symbols-A
    '⟨', '⟩',
    // Coptic
    'ⲏ', 'ⲓ', 'ⲙ', 'Ⲭ',
    // CJK Symbols and Punctuation
    '\u{3000}', '。', '《', '》', '〜',
    // Hiragana
    'い', 'さ', 'た', 'つ', 'て', 'の', 'は', 'ひ', 'ふ', 'ぶ', 'む', 'ら', 'り', 'る', 'ろ',
    // Katakana
    'ァ', 'イ', 'カ', 'キ', 'ク', 'グ', 'コ', 'シ', 'ジ', 'ス', 'セ', 'ゼ', 'タ', 'ダ', 'チ', 'ッ', 'デ', 'ト',
    'パ', 'ピ', 'フ', 'プ', 'マ', 'ミ', 'メ', 'モ', 'ャ', 'ュ', 'ラ', 'リ', 'ル', 'レ', 'ロ', 'ワ', 'ン', 'ー',
    // CJK Unified Ideographs Extension A
    '㓾',
    // CJK Unified Ideographs
    '丁', '七', '三', '上', '下', '不', '业', '东', '中', '丹', '主', '义', '之', '书', '争', '事', '二', '云',
    '五', '亜', '产', '京', '人', '今', '介', '仔', '仕', '他', '代', '仪', '伐', '会', '伝', '伯', '佐', '体',
    '何', '佬', '來', '侍', '俄', '信', '候', '像', '元', '先', '光', '克', '免', '入', '八', '公', '兵', '典',
    '冶', '凹', '分', '切', '刘', '利', '制', '前', '剎', '剑', '劇', '劉', '力', '动', '包', '北', '匠', '区',
    '十', '千', '卅', '卌', '南', '博', '卫', '印', '厘', '又', '双', '发', '受', '叠', '口', '古', '只', '可',
    '司', '合', '吉', '后', '吐', '呣', '呷', '咊', '和', '唐', '唔', '問', '喜', '囍', '四', '団', '国', '图',
    '國', '圕', '圖', '土', '地', '块', '坤', '坪', '城', '域', '埠', '基', '堂', '塊', '境', '士', '変', '复',
    '大', '天', '夷', '奉', '奐', '女', '奴', '她', '妹', '婎', '媠', '子', '字', '学', '宁', '它', '宇', '守',
    '安', '宗', '家', '寧', '審', '对', '导', '将', '尉', '導', '小', '島', '川', '州', '巡', '工', '巴', '布',
    '帝', '帥', '師', '常', '平', '庁', '庆', '库', '府', '庫', '康', '廚', '廷', '建', '廿', '开', '弘', '張',
    '当', '征', '後', '徒', '從', '御', '忒', '思', '总', '恢', '息', '惡', '惰', '愛', '憂', '懸', '成', '战',
    '戦', '戰', '手', '才', '批', '技', '把', '抗', '折', '拉', '拿', '按', '挑', '捨', '提', '援', '撫', '支',
    '政', '教', '文', '斗', '斬', '斯', '新', '方', '於', '族', '日', '旧', '昇', '明', '星', '時', '普', '曲',
    '書', '曹', '替', '月', '有', '朝', '木', '术', '朱', '李', '杜', '来', '杭', '東', '杷', '松', '枇', '林',
    '校', '案', '桓', '楊', '業', '槐', '様', '樂', '標', '檀', '次', '歌', '武', '毋', '比', '民', '水', '氵',
    '汉', '江', '汶', '沐', '沖', '河', '泉', '法', '泥', '洞', '洲', '流', '济', '浙', '浦', '海', '淨', '淮',
    '清', '済', '渣', '渤', '湖', '準', '滑', '漢', '漳', '潮', '澄', '火', '灾', '炉', '烏', '爭', '爱', '父',
    '片', '牠', '特', '献', '獻', '王', '现', '珊', '理', '琵', '琶', '瑚', '瓦', '瓩', '用', '甫', '田', '番',
    '異', '白', '的', '皆', '皇', '盛', '督', '知', '石', '礻', '社', '祂', '祐', '神', '禅', '福', '秀', '秣',
    '程', '竜', '章', '竹', '節', '篆', '籲', '米', '粁', '糎', '系', '約', '紅', '紐', '紫', '紹', '統', '綠',
    '維', '総', '緑', '緣', '緩', '縣', '總', '織', '红', '绍', '经', '统', '维', '美', '義', '羽', '習', '考',
    '耶', '耿', '肉', '胡', '腐', '腹', '膺', '臣', '臨', '興', '舍', '航', '船', '良', '节', '苏', '苗', '英',
    '草', '菩', '華', '萨', '蒲', '蕃', '薩', '藍', '藏', '藩', '虫', '蜀', '蝴', '蝶', '衛', '表', '西', '覆',
    '見', '親', '言', '詞', '試', '話', '語', '説', '議', '讀', '让', '试', '话', '语', '豆', '豊', '豔', '起',
    '越', '趙', '軍', '通', '逸', '過', '道', '邑', '那', '郎', '部', '都', '鄴', '釁', '重', '金', '針', '銖',
    '鋪', '铺', '長', '长', '門', '閏', '閩', '關', '门', '问', '闽', '陋', '院', '陳', '陵', '陽', '隶', '隸',
    '集', '雍', '雙', '雨', '雲', '震', '青', '韓', '韩', '音', '頓', '題', '顯', '顿', '题', '风', '食', '館',
    '騷', '驗', '验', '體', '高', '鬱', '魂', '魄', '魏', '鮮', '鱻', '鲁', '鲜', '齉', '龍', '龘', '龢',
    // Yi Syllables
    'ꀕ',
    // Latin Extended-D
    'ꜣ',
    // Hangul Syllables
    '고', '교', '국', '그', '기', '나', '대', '도', '독', '동', '라', '람', '래', '려', '로', '름', '리', '물',
    '방', '보', '부', '비', '사', '선', '소', '수', '슈', '스', '신', '아', '예', '을', '이', '인', '작', '장',
    '쟁', '전', '조', '족', '컴', '큰', '통', '파', '퍼', '하', '한', '합', '해', '현', '회',
    // Alphabetic Presentation Forms
    'ﬁ', 'ﬂ',
    // Vertical Forms
    '︘',
    // Arabic Presentation Forms-B
    '\u{feff}',
    // Halfwidth and Fullwidth Forms
    '，', '～',
    // Specials
    '�',
    // Linear B Syllabary
    '𐀊', '𐀍', '𐀚', '𐀞',
    // Cuneiform
    '𒂵', '𒄑', '𒆳', '𒈪', '𒊒', '𒊕', '𒌦',
    // CJK Unified Ideographs Extension B
    '𠔻', '𪚥',
    // CJK Unified Ideographs Extension C
    '𪜶',
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_sorted_and_deduplicated() {
        for pair in UNICODE_CHARS.windows(2) {
            assert!(
                pair[0] < pair[1],
                "table must stay sorted and unique near {:?}",
                pair
            );
        }
    }

    #[test]
    fn test_table_span() {
        assert_eq!(UNICODE_CHARS.len(), 1277);
        assert_eq!(UNICODE_CHARS[0], '\u{00a1}');
        assert_eq!(*UNICODE_CHARS.last().unwrap(), '\u{2a736}');
    }

    #[test]
    fn test_no_ascii_entries() {
        assert!(UNICODE_CHARS.iter().all(|ch| !ch.is_ascii()));
    }

    #[test]
    fn test_known_members_across_scripts() {
        // Latin-1 diacritics, Greek, Cyrillic, Hebrew, Arabic, CJK, Hangul,
        // currency, and an astral-plane entry
        let samples = [
            '\u{e9}', '\u{ef}', '\u{3b1}', '\u{439}', '\u{5d0}', '\u{627}',
            '\u{6771}', '\u{4eac}', '\u{ace0}', '\u{20ac}', '\u{1000a}',
        ];
        for ch in samples {
            assert!(
                UNICODE_CHARS.binary_search(&ch).is_ok(),
                "expected {ch:?} in the table"
            );
        }
    }

    #[test]
    fn test_curation_gaps_preserved() {
        // Characters a category rule would include but the curated scan
        // never saw
        for ch in ['\u{3042}', '\u{30a2}', '\u{ac00}', '\u{e04}'] {
            assert!(
                UNICODE_CHARS.binary_search(&ch).is_err(),
                "{ch:?} must stay out of the literal table"
            );
        }
    }
}
