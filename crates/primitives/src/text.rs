/// Counts whitespace-separated words.
///
/// Any run of Unicode whitespace separates words and leading or trailing
/// whitespace is ignored, so `"  a\n\tb  "` has two words.
pub fn word_count(text: &str) -> usize {
	text.split_whitespace().count()
}

/// Normalizes text to LF (`\n`) newlines.
///
/// Converts both CRLF (`\r\n`) and bare CR (`\r`) into LF.
/// If the input contains no carriage returns, the original string is returned.
pub fn normalize_to_lf(mut s: String) -> String {
	if !s.contains('\r') {
		return s;
	}

	let mut out = String::with_capacity(s.len());
	let mut chars = s.drain(..).peekable();
	while let Some(ch) = chars.next() {
		if ch == '\r' {
			if chars.peek() == Some(&'\n') {
				chars.next();
			}
			out.push('\n');
		} else {
			out.push(ch);
		}
	}

	out
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn counts_words_across_mixed_whitespace() {
		assert_eq!(word_count("  one two\n\tthree  "), 3);
	}

	#[test]
	fn empty_and_blank_have_no_words() {
		assert_eq!(word_count(""), 0);
		assert_eq!(word_count(" \n\t "), 0);
	}

	#[test]
	fn punctuation_stays_attached() {
		assert_eq!(word_count("hello, world!"), 2);
	}

	#[test]
	fn crlf_to_lf() {
		assert_eq!(normalize_to_lf("a\r\nb\r\n".to_string()), "a\nb\n");
	}

	#[test]
	fn cr_to_lf() {
		assert_eq!(normalize_to_lf("a\rb\rc".to_string()), "a\nb\nc");
	}

	#[test]
	fn mixed_sequences() {
		assert_eq!(normalize_to_lf("a\r\nb\rc\n".to_string()), "a\nb\nc\n");
	}
}
