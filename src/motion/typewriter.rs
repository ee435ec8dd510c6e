use std::time::Duration;

/// Delay before the first character appears.
pub const BOOT_DELAY: Duration = Duration::from_millis(1000);
/// Delay between revealed characters.
pub const CHAR_INTERVAL: Duration = Duration::from_millis(50);
/// Pause after a completed line before the next one starts.
pub const LINE_INTERVAL: Duration = Duration::from_millis(500);

/// Reveals a fixed sequence of lines character by character, terminal-style.
///
/// The accumulated text is always the fully revealed prior lines (each
/// followed by `'\n'`) plus a prefix of the current line. Lines are indexed
/// by `char`, not byte, so multi-byte glyphs reveal in one tick.
pub struct Typewriter {
    lines: Vec<Vec<char>>,
    line: usize,
    ch: usize,
    text: String,
    running: bool,
}

impl Typewriter {
    /// An empty sequence constructs an already-completed revealer with empty
    /// output.
    pub fn new(lines: impl IntoIterator<Item = String>) -> Self {
        let lines: Vec<Vec<char>> = lines.into_iter().map(|l| l.chars().collect()).collect();
        let running = !lines.is_empty();
        Self {
            lines,
            line: 0,
            ch: 0,
            text: String::new(),
            running,
        }
    }

    /// Discard progress and begin again with a new sequence.
    pub fn restart(&mut self, lines: impl IntoIterator<Item = String>) {
        *self = Self::new(lines);
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Reveal one character (or close out a line) and return the delay until
    /// the next tick. `None` means the sequence is fully revealed; once that
    /// happens nothing mutates until `restart`.
    pub fn step(&mut self) -> Option<Duration> {
        if self.line >= self.lines.len() {
            self.running = false;
            return None;
        }
        let line = &self.lines[self.line];
        if self.ch < line.len() {
            self.text.push(line[self.ch]);
            self.ch += 1;
        }
        if self.ch >= line.len() {
            // zero-length lines land here immediately
            self.text.push('\n');
            self.line += 1;
            self.ch = 0;
            if self.line == self.lines.len() {
                self.running = false;
                return None;
            }
            return Some(LINE_INTERVAL);
        }
        Some(CHAR_INTERVAL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_to_end(tw: &mut Typewriter) -> Vec<String> {
        let mut snapshots = Vec::new();
        while tw.step().is_some() {
            snapshots.push(tw.text().to_string());
        }
        snapshots.push(tw.text().to_string());
        snapshots
    }

    #[test]
    fn reveals_all_lines_joined_by_newlines() {
        let mut tw = Typewriter::new(["> Init".to_string(), "> Ready".to_string()]);
        assert!(tw.is_running());
        run_to_end(&mut tw);
        assert_eq!(tw.text(), "> Init\n> Ready\n");
        assert!(!tw.is_running());
    }

    #[test]
    fn growth_is_monotonic_prefix_of_final_text() {
        let mut tw = Typewriter::new(["hello".to_string(), "world 🚀".to_string()]);
        let snapshots = run_to_end(&mut tw);
        let full = tw.text().to_string();
        let mut prev_len = 0;
        for snap in snapshots {
            assert!(full.starts_with(&snap), "{snap:?} is not a prefix of {full:?}");
            assert!(snap.len() >= prev_len, "accumulated text shrank");
            prev_len = snap.len();
        }
    }

    #[test]
    fn completion_happens_once_and_sticks() {
        let mut tw = Typewriter::new(["ok".to_string()]);
        while tw.step().is_some() {}
        assert!(!tw.is_running());
        let settled = tw.text().to_string();
        for _ in 0..5 {
            assert!(tw.step().is_none());
            assert!(!tw.is_running());
            assert_eq!(tw.text(), settled);
        }
    }

    #[test]
    fn empty_sequence_is_immediately_complete() {
        let mut tw = Typewriter::new(Vec::<String>::new());
        assert!(!tw.is_running());
        assert_eq!(tw.text(), "");
        assert!(tw.step().is_none());
        assert_eq!(tw.text(), "");
    }

    #[test]
    fn zero_length_line_advances_in_one_tick() {
        let mut tw = Typewriter::new(["a".to_string(), String::new(), "b".to_string()]);
        run_to_end(&mut tw);
        assert_eq!(tw.text(), "a\n\nb\n");
    }

    #[test]
    fn line_pause_is_longer_than_char_interval() {
        let mut tw = Typewriter::new(["ab".to_string(), "c".to_string()]);
        assert_eq!(tw.step(), Some(CHAR_INTERVAL)); // 'a'
        assert_eq!(tw.step(), Some(LINE_INTERVAL)); // 'b' + line break
        assert_eq!(tw.step(), None); // 'c' + final break
        assert_eq!(tw.text(), "ab\nc\n");
    }

    #[test]
    fn restart_resets_progress() {
        let mut tw = Typewriter::new(["first".to_string()]);
        tw.step();
        tw.step();
        tw.restart(vec!["second".to_string()]);
        assert!(tw.is_running());
        assert_eq!(tw.text(), "");
        run_to_end(&mut tw);
        assert_eq!(tw.text(), "second\n");
    }
}
