//! Paragraph reflow for chat display.
//!
//! Splits a block of text into display paragraphs bounded by a soft maximum
//! length, breaking only at sentence boundaries. The cap keeps chat bubbles
//! readable; a single sentence longer than the cap is emitted whole, since a
//! mid-sentence break reads worse than an oversized paragraph.

/// Soft cap on paragraph length, in characters.
pub const DEFAULT_MAX_PARAGRAPH_LEN: usize = 500;

/// Reflow `text` into paragraphs of at most `max_len` characters.
///
/// Sentence boundaries are the only split points: a boundary exists after any
/// period followed by whitespace. The period stays with its sentence, the
/// separating whitespace is consumed. Sentences are packed greedily into
/// paragraphs, joined by a single space; a sentence that would overflow the
/// current paragraph starts a new one, even when it alone exceeds `max_len`.
///
/// Pure and deterministic; empty input yields an empty sequence.
pub fn reflow(text: &str, max_len: usize) -> Vec<String> {
    let mut paragraphs = Vec::new();
    let mut buffer = String::new();
    let mut buffer_chars = 0usize;

    for sentence in split_sentences(text) {
        let sentence_chars = sentence.chars().count();
        let projected = if buffer.is_empty() {
            sentence_chars
        } else {
            buffer_chars + 1 + sentence_chars
        };

        if projected <= max_len {
            if !buffer.is_empty() {
                buffer.push(' ');
            }
            buffer.push_str(sentence);
            buffer_chars = projected;
        } else {
            flush(&mut paragraphs, &mut buffer);
            buffer.push_str(sentence);
            buffer_chars = sentence_chars;
        }
    }

    flush(&mut paragraphs, &mut buffer);
    paragraphs
}

/// Reflow with the default cap.
pub fn reflow_default(text: &str) -> Vec<String> {
    reflow(text, DEFAULT_MAX_PARAGRAPH_LEN)
}

fn flush(paragraphs: &mut Vec<String>, buffer: &mut String) {
    let trimmed = buffer.trim();
    if !trimmed.is_empty() {
        paragraphs.push(trimmed.to_string());
    }
    buffer.clear();
}

/// Split at every period that is followed by at least one whitespace
/// character. The whitespace run is the separator and appears in neither
/// output slice.
fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut iter = text.char_indices().peekable();

    while let Some((i, c)) = iter.next() {
        if c != '.' {
            continue;
        }
        let sep_start = i + 1;
        let mut sep_end = sep_start;
        while let Some(&(j, next)) = iter.peek() {
            if !next.is_whitespace() {
                break;
            }
            sep_end = j + next.len_utf8();
            iter.next();
        }
        if sep_end > sep_start {
            sentences.push(&text[start..sep_start]);
            start = sep_end;
        }
    }

    if start < text.len() {
        sentences.push(&text[start..]);
    }
    sentences
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_input_yields_no_paragraphs() {
        assert_eq!(reflow("", 500), Vec::<String>::new());
    }

    #[test]
    fn whitespace_only_input_yields_no_paragraphs() {
        assert_eq!(reflow("   \n\t ", 500), Vec::<String>::new());
    }

    #[test]
    fn short_text_stays_in_one_paragraph() {
        assert_eq!(
            reflow("Hello world. This is a test.", 500),
            vec!["Hello world. This is a test."]
        );
    }

    #[test]
    fn tiny_cap_forces_one_sentence_per_paragraph() {
        // "A." fits in 3; "A. B." (with the joining space) is 5, so every
        // sentence flushes the previous one.
        assert_eq!(reflow("A. B. C.", 3), vec!["A.", "B.", "C."]);
    }

    #[test]
    fn oversized_sentence_is_emitted_whole() {
        let long = "This single sentence is far longer than the cap.";
        assert_eq!(reflow(long, 10), vec![long]);
    }

    #[test]
    fn oversized_sentence_between_short_ones() {
        let text = "Hi. This middle sentence will not fit at all. Bye.";
        let got = reflow(text, 8);
        assert_eq!(
            got,
            vec!["Hi.", "This middle sentence will not fit at all.", "Bye."]
        );
    }

    #[test]
    fn period_without_following_whitespace_is_not_a_boundary() {
        // "3.14" and "e.g.x" contain no split points.
        assert_eq!(reflow("Pi is 3.14 roughly.", 500), vec!["Pi is 3.14 roughly."]);
    }

    #[test]
    fn multiple_whitespace_after_period_is_consumed() {
        assert_eq!(reflow("One.   Two.\n\nThree.", 4), vec!["One.", "Two.", "Three."]);
    }

    #[test]
    fn text_without_periods_is_one_paragraph() {
        assert_eq!(reflow("no sentence end here", 5), vec!["no sentence end here"]);
    }

    #[test]
    fn rejoining_paragraphs_is_lossless() {
        // Reflow is a re-partitioning of sentences: joining the paragraphs
        // with single spaces reproduces the sentence-joined original.
        let text = "First sentence here. Second one follows. Third ends it.";
        let paragraphs = reflow(text, 25);
        assert!(paragraphs.len() > 1);
        assert_eq!(paragraphs.join(" "), text);
    }

    #[test]
    fn no_paragraph_breaks_mid_sentence() {
        let text = "Alpha beta gamma. Delta epsilon zeta. Eta theta iota kappa.";
        let paragraphs = reflow(text, 20);
        assert!(paragraphs.len() > 1);
        // Every sentence in the input ends with a period, so every paragraph
        // boundary must land on one.
        for paragraph in &paragraphs {
            assert!(
                paragraph.ends_with('.'),
                "paragraph broke mid-sentence: {paragraph:?}"
            );
        }
    }

    #[test]
    fn packing_is_greedy_in_order() {
        let text = "aa. bb. cc. dd.";
        // "aa. bb." is 7 chars; adding " cc." would make 11 > 10.
        assert_eq!(reflow(text, 10), vec!["aa. bb.", "cc. dd."]);
    }

    #[test]
    fn cap_counts_characters_not_bytes() {
        // Five two-byte characters plus a period fit a cap of 6.
        let text = "ééééé. ûûûûû.";
        assert_eq!(reflow(text, 6), vec!["ééééé.", "ûûûûû."]);
    }

    #[test]
    fn leading_whitespace_is_trimmed_from_output() {
        assert_eq!(reflow("  Padded start. And end.  ", 500), vec!["Padded start. And end."]);
    }
}
