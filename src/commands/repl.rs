//! Interactive query loop
//!
//! Blocking read-eval-print loop over whitespace-separated query tokens.
//! A line may carry several tokens; each is answered separately with its
//! own prompt, so the transcript matches token-at-a-time input exactly.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

use crate::index::PermutermIndex;
use crate::output::{
    QUERY_PROMPT, exact_hit_line, exact_miss_line, match_line, unsupported_line,
};
use crate::query::{QueryOutcome, run_query};

/// Run the query REPL until `input` is exhausted.
///
/// The prompt is written and flushed before every token read, including
/// the final one answered by end-of-input.
///
/// # Errors
///
/// Returns an error if reading a line of input or writing a result line
/// fails.
pub fn run_repl<R, W>(index: &PermutermIndex, input: R, mut out: W) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    let mut pending = VecDeque::new();
    let mut lines = input.lines();

    loop {
        out.write_all(QUERY_PROMPT.as_bytes())?;
        out.flush()?;

        let Some(token) = next_token(&mut pending, &mut lines)? else {
            break;
        };
        write_outcome(&mut out, &token, &run_query(index, &token))?;
    }
    Ok(())
}

/// Pull the next whitespace-separated token, refilling from `lines` as
/// needed. `None` means end of input.
fn next_token<R: BufRead>(
    pending: &mut VecDeque<String>,
    lines: &mut io::Lines<R>,
) -> io::Result<Option<String>> {
    while pending.is_empty() {
        match lines.next() {
            Some(line) => pending.extend(line?.split_whitespace().map(str::to_string)),
            None => return Ok(None),
        }
    }
    Ok(pending.pop_front())
}

fn write_outcome<W: Write>(out: &mut W, token: &str, outcome: &QueryOutcome<'_>) -> io::Result<()> {
    match outcome {
        QueryOutcome::ExactHit(word) => out.write_all(exact_hit_line(word).as_bytes()),
        QueryOutcome::ExactMiss => out.write_all(exact_miss_line(token).as_bytes()),
        QueryOutcome::Matches(words) => {
            for (position, word) in words.iter().enumerate() {
                out.write_all(match_line(position + 1, word).as_bytes())?;
            }
            Ok(())
        }
        QueryOutcome::Unsupported => out.write_all(unsupported_line(token).as_bytes()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transcript(words: &[&str], input: &str) -> String {
        let index = PermutermIndex::from_words(words);
        let mut out = Vec::new();
        run_repl(&index, input.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn exact_hit_and_miss_transcript() {
        let output = transcript(&["cat", "car", "dog"], "cat\nbird\n");
        assert_eq!(
            output,
            "\nQuery: [cat] found!\n\nQuery: [bird] not found!\n\nQuery: "
        );
    }

    #[test]
    fn wildcard_results_are_ranked_lines() {
        let output = transcript(&["cat", "car", "dog"], "ca*\n");
        assert_eq!(output, "\nQuery: [1] car\n[2] cat\n\nQuery: ");
    }

    #[test]
    fn several_tokens_on_one_line_each_get_a_prompt() {
        let output = transcript(&["cat", "car", "dog"], "cat *at\n");
        assert_eq!(
            output,
            "\nQuery: [cat] found!\n\nQuery: [1] cat\n\nQuery: "
        );
    }

    #[test]
    fn empty_result_set_prints_nothing_between_prompts() {
        let output = transcript(&["cat"], "zz*\n");
        assert_eq!(output, "\nQuery: \nQuery: ");
    }

    #[test]
    fn unsupported_pattern_transcript() {
        let output = transcript(&["cat"], "*\n");
        assert_eq!(output, "\nQuery: [*] unsupported pattern!\n\nQuery: ");
    }

    #[test]
    fn blank_lines_are_skipped() {
        let output = transcript(&["cat"], "\n\ncat\n");
        assert_eq!(output, "\nQuery: [cat] found!\n\nQuery: ");
    }

    #[test]
    fn empty_input_prints_one_prompt() {
        let output = transcript(&["cat"], "");
        assert_eq!(output, "\nQuery: ");
    }
}
