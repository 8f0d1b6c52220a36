//! Collapsing of elongated character runs.

use super::CharFilter;

/// A char filter that collapses runs of one repeated character.
///
/// A run longer than `max_run` characters is replaced by a single
/// occurrence; shorter runs are kept as they are. This undoes emphatic
/// elongation such as "جمييييل" without touching legitimate doubled letters.
#[derive(Clone, Debug)]
pub struct RepeatedCharFilter {
    max_run: usize,
}

impl RepeatedCharFilter {
    /// Create a new filter keeping runs of at most `max_run` characters.
    pub fn new(max_run: usize) -> Self {
        RepeatedCharFilter { max_run }
    }

    /// Get the longest run that is kept unchanged.
    pub fn max_run(&self) -> usize {
        self.max_run
    }

    fn flush(&self, output: &mut String, c: char, count: usize) {
        let kept = if count > self.max_run { 1 } else { count };
        output.extend(std::iter::repeat_n(c, kept));
    }
}

impl CharFilter for RepeatedCharFilter {
    fn filter(&self, input: &str) -> String {
        let mut output = String::with_capacity(input.len());
        let mut run: Option<(char, usize)> = None;

        for c in input.chars() {
            run = match run {
                Some((prev, count)) if prev == c => Some((prev, count + 1)),
                Some((prev, count)) => {
                    self.flush(&mut output, prev, count);
                    Some((c, 1))
                }
                None => Some((c, 1)),
            };
        }

        if let Some((prev, count)) = run {
            self.flush(&mut output, prev, count);
        }

        output
    }

    fn name(&self) -> &'static str {
        "repeated"
    }
}
