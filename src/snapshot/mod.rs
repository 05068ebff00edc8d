// Snapshots of sorting progress

/// Adjacent pair of indices `(left, left + 1)` under comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComparingPair {
    left: usize,
}

impl ComparingPair {
    pub fn new(left: usize) -> Self {
        ComparingPair { left }
    }

    pub fn left(&self) -> usize {
        self.left
    }

    pub fn right(&self) -> usize {
        self.left + 1
    }

    /// Whether `index` is one of the two compared positions
    pub fn contains(&self, index: usize) -> bool {
        index == self.left || index == self.right()
    }

    pub fn as_tuple(&self) -> (usize, usize) {
        (self.left, self.right())
    }
}

/// How a single element should be highlighted for a given step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementState {
    Idle,
    Comparing,
    Swapped,
}

/// One observable moment of the sort
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    /// Full copy of the array at this instant
    pub sequence: Vec<u8>,
    /// Pair under comparison; `None` once sorting has finished
    pub comparing: Option<ComparingPair>,
    /// True when this step shows the array right after swapping the pair
    pub swapped: bool,
}

impl Step {
    /// The "about to compare" observation for `(left, left + 1)`
    pub fn comparison(sequence: Vec<u8>, left: usize) -> Self {
        Step {
            sequence,
            comparing: Some(ComparingPair::new(left)),
            swapped: false,
        }
    }

    /// The state right after swapping `(left, left + 1)`
    pub fn swap(sequence: Vec<u8>, left: usize) -> Self {
        Step {
            sequence,
            comparing: Some(ComparingPair::new(left)),
            swapped: true,
        }
    }

    /// The final, fully sorted state
    pub fn terminal(sequence: Vec<u8>) -> Self {
        Step {
            sequence,
            comparing: None,
            swapped: false,
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.comparing.is_none()
    }

    /// Highlight for the element at `index`
    pub fn element_state(&self, index: usize) -> ElementState {
        match self.comparing {
            Some(pair) if pair.contains(index) => {
                if self.swapped {
                    ElementState::Swapped
                } else {
                    ElementState::Comparing
                }
            }
            _ => ElementState::Idle,
        }
    }
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let values: Vec<String> = self.sequence.iter().map(|v| v.to_string()).collect();
        write!(f, "[{}]", values.join(","))?;
        match self.comparing {
            Some(pair) => {
                let (l, r) = pair.as_tuple();
                let action = if self.swapped { "swapped" } else { "compare" };
                write!(f, " {} ({}, {})", action, l, r)
            }
            None => write!(f, " sorted"),
        }
    }
}

/// What [`crate::sorter::BubbleSort::advance`] hands back
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Progress {
    /// A comparison or swap snapshot; more will follow
    Step(Step),
    /// The absorbing final state
    Terminal(Step),
}

impl Progress {
    pub fn into_step(self) -> Step {
        match self {
            Progress::Step(step) | Progress::Terminal(step) => step,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Progress::Terminal(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_state_follows_pair() {
        let compare = Step::comparison(vec![3, 1, 2], 1);
        assert_eq!(compare.element_state(0), ElementState::Idle);
        assert_eq!(compare.element_state(1), ElementState::Comparing);
        assert_eq!(compare.element_state(2), ElementState::Comparing);

        let swap = Step::swap(vec![1, 3, 2], 0);
        assert_eq!(swap.element_state(0), ElementState::Swapped);
        assert_eq!(swap.element_state(1), ElementState::Swapped);
        assert_eq!(swap.element_state(2), ElementState::Idle);
    }

    #[test]
    fn test_terminal_has_no_highlight() {
        let done = Step::terminal(vec![1, 2, 3]);
        assert!(done.is_terminal());
        assert!((0..3).all(|i| done.element_state(i) == ElementState::Idle));
    }

    #[test]
    fn test_progress_unwraps_either_variant() {
        let step = Step::comparison(vec![2, 1], 0);
        let progress = Progress::Step(step.clone());
        assert!(!progress.is_terminal());
        assert_eq!(progress.into_step(), step);

        let done = Progress::Terminal(Step::terminal(vec![1, 2]));
        assert!(done.is_terminal());
        assert_eq!(done.into_step(), Step::terminal(vec![1, 2]));
    }

    #[test]
    fn test_display() {
        assert_eq!(Step::comparison(vec![2, 1], 0).to_string(), "[2,1] compare (0, 1)");
        assert_eq!(Step::swap(vec![1, 2], 0).to_string(), "[1,2] swapped (0, 1)");
        assert_eq!(Step::terminal(vec![1, 2]).to_string(), "[1,2] sorted");
    }
}
