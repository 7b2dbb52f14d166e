pub const DOCUMENT_EXTENSION: &str = "txt";

const EMPTY_SLUG_STEM: &str = "untitled";
/// Stems taken by the navigation artifacts (`index.txt`, `TOC.txt`).
const RESERVED_STEMS: &[&str] = &["index", "toc"];
const RESERVED_STEM_SUFFIX: &str = "_article";

/// Normalize a document title into its on-disk filename.
///
/// Lower-cases, folds common Latin diacritics, drops everything that is not a
/// letter, digit, whitespace, hyphen or underscore, then collapses each run of
/// separators into one `_`. Leading and trailing separators are dropped. A
/// stem that would shadow a navigation artifact gets an `_article` suffix. The
/// result always carries [`DOCUMENT_EXTENSION`].
pub fn normalize(title: &str) -> String {
    format!("{}.{DOCUMENT_EXTENSION}", normalize_stem(title))
}

pub fn normalize_stem(title: &str) -> String {
    let mut output = String::with_capacity(title.len());
    let mut pending_separator = false;

    for ch in title.chars().flat_map(char::to_lowercase) {
        if is_separator(ch) {
            pending_separator = true;
            continue;
        }
        let mut push = |value: char| {
            if pending_separator && !output.is_empty() {
                output.push('_');
            }
            pending_separator = false;
            output.push(value);
        };
        if let Some(folded) = fold_diacritic(ch) {
            for value in folded.chars() {
                push(value);
            }
        } else if ch.is_alphanumeric() {
            push(ch);
        }
    }

    if output.is_empty() {
        return EMPTY_SLUG_STEM.to_string();
    }
    if RESERVED_STEMS.contains(&output.as_str()) {
        output.push_str(RESERVED_STEM_SUFFIX);
    }
    output
}

/// Best-effort reverse of [`normalize`]: `python_programming.txt` becomes
/// `Python Programming`. Lossy by construction.
pub fn display_title(filename: &str) -> String {
    let basename = filename.rsplit('/').next().unwrap_or(filename);
    let stem = basename
        .strip_suffix(&format!(".{DOCUMENT_EXTENSION}"))
        .unwrap_or(basename);
    title_case(&stem.replace('_', " "))
}

/// Capitalize the first letter after every non-letter, lower-case the rest.
pub fn title_case(value: &str) -> String {
    let mut output = String::with_capacity(value.len());
    let mut previous_is_letter = false;
    for ch in value.chars() {
        if ch.is_alphabetic() {
            if previous_is_letter {
                output.extend(ch.to_lowercase());
            } else {
                output.extend(ch.to_uppercase());
            }
            previous_is_letter = true;
        } else {
            output.push(ch);
            previous_is_letter = false;
        }
    }
    output
}

fn is_separator(ch: char) -> bool {
    ch.is_whitespace() || ch == '-' || ch == '_'
}

fn fold_diacritic(ch: char) -> Option<&'static str> {
    let folded = match ch {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' | 'ā' | 'ă' | 'ą' => "a",
        'æ' => "ae",
        'ç' | 'ć' | 'ĉ' | 'ċ' | 'č' => "c",
        'ď' | 'đ' | 'ð' => "d",
        'è' | 'é' | 'ê' | 'ë' | 'ē' | 'ĕ' | 'ė' | 'ę' | 'ě' => "e",
        'ĝ' | 'ğ' | 'ġ' | 'ģ' => "g",
        'ĥ' | 'ħ' => "h",
        'ì' | 'í' | 'î' | 'ï' | 'ĩ' | 'ī' | 'ĭ' | 'į' | 'ı' => "i",
        'ĵ' => "j",
        'ķ' => "k",
        'ĺ' | 'ļ' | 'ľ' | 'ŀ' | 'ł' => "l",
        'ñ' | 'ń' | 'ņ' | 'ň' => "n",
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' | 'ō' | 'ŏ' | 'ő' => "o",
        'œ' => "oe",
        'ŕ' | 'ŗ' | 'ř' => "r",
        'ś' | 'ŝ' | 'ş' | 'š' => "s",
        'ß' => "ss",
        'ţ' | 'ť' | 'ŧ' => "t",
        'þ' => "th",
        'ù' | 'ú' | 'û' | 'ü' | 'ũ' | 'ū' | 'ŭ' | 'ů' | 'ű' | 'ų' => "u",
        'ŵ' => "w",
        'ý' | 'ÿ' | 'ŷ' => "y",
        'ź' | 'ż' | 'ž' => "z",
        _ => return None,
    };
    Some(folded)
}
