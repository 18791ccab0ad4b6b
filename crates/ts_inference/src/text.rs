//! Sentence and term splitting shared by the extractive models.

const TERMINATORS: [char; 4] = ['.', '!', '?', '…'];

/// Splits `text` into trimmed sentences, keeping their terminators.
/// Fragments without any alphanumeric character are dropped.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((idx, c)) = chars.next() {
        if !TERMINATORS.contains(&c) {
            continue;
        }
        // Keep runs like "?!" or "..." together.
        let mut end = idx + c.len_utf8();
        while let Some(&(next_idx, next)) = chars.peek() {
            if !TERMINATORS.contains(&next) {
                break;
            }
            end = next_idx + next.len_utf8();
            chars.next();
        }
        push_sentence(&mut sentences, &text[start..end]);
        start = end;
    }
    push_sentence(&mut sentences, &text[start..]);

    sentences
}

fn push_sentence<'a>(sentences: &mut Vec<&'a str>, fragment: &'a str) {
    let fragment = fragment.trim();
    if fragment.chars().any(char::is_alphanumeric) {
        sentences.push(fragment);
    }
}

/// Lowercased alphanumeric terms of `text`.
pub fn terms(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|term| !term.is_empty())
        .map(str::to_lowercase)
}

/// Keeps the `limit` best-scoring sentences in their original order.
/// Ties go to the earlier sentence.
pub fn select_top(sentences: &[&str], scores: &[f64], limit: usize) -> String {
    let mut ranked: Vec<usize> = (0..sentences.len()).collect();
    ranked.sort_by(|&a, &b| scores[b].total_cmp(&scores[a]).then(a.cmp(&b)));
    ranked.truncate(limit);
    ranked.sort_unstable();

    ranked
        .into_iter()
        .map(|idx| sentences[idx])
        .collect::<Vec<_>>()
        .join(" ")
}
