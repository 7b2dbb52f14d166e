/// Greedy word wrap that keeps paragraph breaks.
///
/// Consecutive non-blank lines form one paragraph and are re-flowed together;
/// every blank input line is emitted as one blank output line. A word wider
/// than `width` sits alone on its own line and is never split.
pub fn wrap_text(text: &str, width: usize) -> String {
    let width = width.max(1);
    let mut lines: Vec<String> = Vec::new();
    let mut paragraph: Vec<&str> = Vec::new();

    for line in text.split('\n') {
        if line.trim().is_empty() {
            flush_paragraph(&mut paragraph, width, &mut lines);
            lines.push(String::new());
            continue;
        }
        paragraph.extend(line.split_whitespace());
    }
    flush_paragraph(&mut paragraph, width, &mut lines);

    lines.join("\n")
}

/// Wrap `text` and prefix every produced line, using `first` for the first
/// line and `rest` for continuations. The prefix width is taken out of `width`.
pub fn wrap_with_prefix(text: &str, width: usize, first: &str, rest: &str) -> Vec<String> {
    let prefix_width = first.chars().count().max(rest.chars().count());
    let wrapped = wrap_text(text, width.saturating_sub(prefix_width).max(1));
    wrapped
        .split('\n')
        .enumerate()
        .map(|(index, line)| {
            let prefix = if index == 0 { first } else { rest };
            if line.is_empty() {
                String::new()
            } else {
                format!("{prefix}{line}")
            }
        })
        .collect()
}

fn flush_paragraph(words: &mut Vec<&str>, width: usize, out: &mut Vec<String>) {
    let mut current = String::new();
    let mut current_width = 0usize;
    for word in words.drain(..) {
        let word_width = word.chars().count();
        if current.is_empty() {
            current.push_str(word);
            current_width = word_width;
        } else if current_width + 1 + word_width <= width {
            current.push(' ');
            current.push_str(word);
            current_width += 1 + word_width;
        } else {
            out.push(std::mem::take(&mut current));
            current.push_str(word);
            current_width = word_width;
        }
    }
    if !current.is_empty() {
        out.push(current);
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::{wrap_text, wrap_with_prefix};

    #[test]
    fn packs_words_greedily() {
        let wrapped = wrap_text("the quick brown fox jumps over the lazy dog", 10);
        assert_eq!(wrapped, "the quick\nbrown fox\njumps over\nthe lazy\ndog");
    }

    #[test]
    fn preserves_blank_lines_between_paragraphs() {
        let wrapped = wrap_text("Title\n\nfirst para\nstill first\n\nsecond", 39);
        assert_eq!(wrapped, "Title\n\nfirst para still first\n\nsecond");
    }

    #[test]
    fn long_word_is_left_whole_on_its_own_line() {
        let wrapped = wrap_text("a supercalifragilistic b", 8);
        assert_eq!(wrapped, "a\nsupercalifragilistic\nb");
    }

    #[test]
    fn measures_width_in_characters() {
        let wrapped = wrap_text("café café café", 9);
        assert_eq!(wrapped, "café café\ncafé");
    }

    #[test]
    fn prefixed_wrap_indents_every_line() {
        let lines = wrap_with_prefix("Farming, crops, animals, soil health", 20, "  ", "  ");
        assert_eq!(lines, vec!["  Farming, crops,", "  animals, soil", "  health"]);
        assert!(lines.iter().all(|line| line.chars().count() <= 20));
    }

    proptest! {
        #[test]
        fn wrap_is_idempotent_and_bounded(text in "[a-z ]{0,12}(\n{0,2}[a-zA-Z0-9 .,]{0,60}){0,5}", width in 1usize..50) {
            let once = wrap_text(&text, width);
            prop_assert_eq!(wrap_text(&once, width), once.clone());
            for line in once.split('\n') {
                let is_single_word = !line.contains(' ');
                prop_assert!(line.chars().count() <= width || is_single_word);
            }
        }
    }
}
