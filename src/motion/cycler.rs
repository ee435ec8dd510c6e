use std::time::Duration;

/// Delay between typed characters while growing.
pub const TYPE_INTERVAL: Duration = Duration::from_millis(90);
/// Delay between deleted characters while shrinking.
pub const DELETE_INTERVAL: Duration = Duration::from_millis(45);
/// Pause with the full label on screen before deletion starts.
pub const HOLD_INTERVAL: Duration = Duration::from_millis(1600);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CyclePhase {
    Growing,
    Holding,
    Shrinking,
}

/// Perpetually types, holds, and deletes a list of short labels in order,
/// wrapping forever. The displayed text is always a prefix of the active
/// label.
///
/// An empty label list is a permanent no-op: `step` returns `None` and the
/// displayed text stays empty.
pub struct RoleCycler {
    labels: Vec<Vec<char>>,
    index: usize,
    shown: usize,
    phase: CyclePhase,
}

impl RoleCycler {
    pub fn new(labels: impl IntoIterator<Item = String>) -> Self {
        Self {
            labels: labels.into_iter().map(|l| l.chars().collect()).collect(),
            index: 0,
            shown: 0,
            phase: CyclePhase::Growing,
        }
    }

    pub fn text(&self) -> String {
        match self.labels.get(self.index) {
            Some(label) => label[..self.shown].iter().collect(),
            None => String::new(),
        }
    }

    pub fn active_index(&self) -> usize {
        self.index
    }

    pub fn phase(&self) -> CyclePhase {
        self.phase
    }

    /// Advance one tick and return the delay until the next. This machine has
    /// no terminal state; `None` only signals the empty-label no-op.
    pub fn step(&mut self) -> Option<Duration> {
        let count = self.labels.len();
        if count == 0 {
            return None;
        }
        match self.phase {
            CyclePhase::Growing => {
                let len = self.labels[self.index].len();
                if self.shown < len {
                    self.shown += 1;
                }
                if self.shown >= len {
                    self.phase = CyclePhase::Holding;
                    Some(HOLD_INTERVAL)
                } else {
                    Some(TYPE_INTERVAL)
                }
            }
            CyclePhase::Holding => {
                self.phase = CyclePhase::Shrinking;
                Some(DELETE_INTERVAL)
            }
            CyclePhase::Shrinking => {
                if self.shown > 0 {
                    self.shown -= 1;
                }
                if self.shown == 0 {
                    self.index = (self.index + 1) % count;
                    self.phase = CyclePhase::Growing;
                    Some(TYPE_INTERVAL)
                } else {
                    Some(DELETE_INTERVAL)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn displayed_text_is_always_a_prefix_of_active_label() {
        let source = labels(&["Developer", "Data Analyst", "Teacher"]);
        let mut cycler = RoleCycler::new(source.clone());
        for _ in 0..500 {
            cycler.step().expect("non-empty list never stops");
            let active = &source[cycler.active_index()];
            let shown = cycler.text();
            assert!(
                active.starts_with(&shown),
                "{shown:?} is not a prefix of {active:?}"
            );
        }
    }

    #[test]
    fn indices_wrap_in_order_after_full_cycles() {
        let source = labels(&["one", "two", "three"]);
        let mut cycler = RoleCycler::new(source.clone());
        let mut seen = vec![cycler.active_index()];
        for _ in 0..1000 {
            cycler.step();
            if *seen.last().expect("seeded") != cycler.active_index() {
                seen.push(cycler.active_index());
            }
        }
        // strictly advances modulo len: 0, 1, 2, 0, 1, 2, ...
        for (i, idx) in seen.iter().enumerate() {
            assert_eq!(*idx, i % source.len());
        }
        assert!(seen.len() > source.len(), "expected at least one wrap");
    }

    #[test]
    fn single_label_full_cycle_returns_to_start() {
        let mut cycler = RoleCycler::new(labels(&["Engineer"]));
        // grow to full
        for _ in 0.."Engineer".len() {
            cycler.step();
        }
        assert_eq!(cycler.text(), "Engineer");
        assert_eq!(cycler.phase(), CyclePhase::Holding);
        // hold, then shrink to empty
        cycler.step();
        for _ in 0.."Engineer".len() {
            cycler.step();
        }
        assert_eq!(cycler.text(), "");
        assert_eq!(cycler.active_index(), 0);
        assert_eq!(cycler.phase(), CyclePhase::Growing);
    }

    #[test]
    fn grow_hold_shrink_delays() {
        let mut cycler = RoleCycler::new(labels(&["ab"]));
        assert_eq!(cycler.step(), Some(TYPE_INTERVAL)); // 'a'
        assert_eq!(cycler.step(), Some(HOLD_INTERVAL)); // 'b', label complete
        assert_eq!(cycler.step(), Some(DELETE_INTERVAL)); // hold elapsed
        assert_eq!(cycler.step(), Some(DELETE_INTERVAL)); // remove 'b'
        assert_eq!(cycler.step(), Some(TYPE_INTERVAL)); // remove 'a', wrap
        assert_eq!(cycler.text(), "");
    }

    #[test]
    fn empty_label_list_is_a_no_op() {
        let mut cycler = RoleCycler::new(Vec::<String>::new());
        assert_eq!(cycler.step(), None);
        assert_eq!(cycler.text(), "");
        assert_eq!(cycler.active_index(), 0);
    }
}
