// Integration tests for the bubble sort step generator

use bubbletty::sequence::{generate_random_with, parse_user_input, Sequence};
use bubbletty::snapshot::{ComparingPair, Progress, Step};
use bubbletty::sorter::BubbleSort;
use rand::{rngs::StdRng, Rng, SeedableRng};

/// Drive the generator with `advance` until it reports Terminal
fn run_to_end(sequence: &Sequence) -> (Vec<Step>, Step) {
    let mut sorter = BubbleSort::new(sequence);
    let mut steps = Vec::new();
    // Generous cap so a broken generator fails instead of hanging
    for _ in 0..10_000 {
        match sorter.advance() {
            Progress::Step(step) => steps.push(step),
            Progress::Terminal(step) => return (steps, step),
        }
    }
    panic!("generator did not terminate");
}

fn sorted_copy(values: &[u8]) -> Vec<u8> {
    let mut v = values.to_vec();
    v.sort_unstable();
    v
}

fn random_sequences(seed: u64, count: usize) -> Vec<Sequence> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let len = rng.random_range(2..=30);
            generate_random_with(&mut rng, len)
        })
        .collect()
}

#[test]
fn test_already_sorted_single_pass() {
    let seq = parse_user_input("1,2,3,4,5").unwrap();
    let (steps, terminal) = run_to_end(&seq);

    let pairs: Vec<_> = steps
        .iter()
        .map(|s| s.comparing.map(|p| p.as_tuple()))
        .collect();
    assert_eq!(
        pairs,
        vec![Some((0, 1)), Some((1, 2)), Some((2, 3)), Some((3, 4))]
    );
    assert!(steps.iter().all(|s| !s.swapped));
    assert!(steps.iter().all(|s| s.sequence == vec![1, 2, 3, 4, 5]));
    assert_eq!(terminal, Step::terminal(vec![1, 2, 3, 4, 5]));
}

#[test]
fn test_single_swap() {
    let seq = parse_user_input("2,1").unwrap();
    let mut sorter = BubbleSort::new(&seq);

    assert_eq!(
        sorter.advance(),
        Progress::Step(Step {
            sequence: vec![2, 1],
            comparing: Some(ComparingPair::new(0)),
            swapped: false,
        })
    );
    assert_eq!(
        sorter.advance(),
        Progress::Step(Step {
            sequence: vec![1, 2],
            comparing: Some(ComparingPair::new(0)),
            swapped: true,
        })
    );

    // The dirty pass forces one more clean pass before terminating
    assert_eq!(
        sorter.advance(),
        Progress::Step(Step::comparison(vec![1, 2], 0))
    );
    assert_eq!(
        sorter.advance(),
        Progress::Terminal(Step {
            sequence: vec![1, 2],
            comparing: None,
            swapped: false,
        })
    );
}

#[test]
fn test_reverse_sorted_counts() {
    let seq = parse_user_input("5,4,3,2,1").unwrap();
    let mut sorter = BubbleSort::new(&seq);
    while !sorter.advance().is_terminal() {}

    let stats = sorter.stats();
    // Four dirty passes plus one clean pass, each rescanning all four pairs
    assert_eq!(stats.passes, 5);
    assert_eq!(stats.comparisons, 20);
    assert_eq!(stats.swaps, 10);
}

#[test]
fn test_duplicates_never_swap() {
    let seq = parse_user_input("3,3").unwrap();
    let (steps, terminal) = run_to_end(&seq);
    assert_eq!(steps, vec![Step::comparison(vec![3, 3], 0)]);
    assert_eq!(terminal.sequence, vec![3, 3]);

    let seq = parse_user_input("2,7,7,1").unwrap();
    let (steps, _) = run_to_end(&seq);
    for step in steps.iter().filter(|s| s.swapped) {
        let pair = step.comparing.unwrap();
        // After a swap the left value is strictly smaller
        assert!(step.sequence[pair.left()] < step.sequence[pair.right()]);
    }
}

#[test]
fn test_terminal_is_absorbing() {
    let seq = parse_user_input("3,1,2").unwrap();
    let mut sorter = BubbleSort::new(&seq);
    while !sorter.advance().is_terminal() {}
    assert!(sorter.is_finished());

    let stats = sorter.stats();
    for _ in 0..3 {
        assert_eq!(sorter.advance(), Progress::Terminal(Step::terminal(vec![1, 2, 3])));
    }
    assert_eq!(sorter.stats(), stats);
}

#[test]
fn test_iterator_ends_with_terminal_step() {
    let seq = parse_user_input("4,1,3").unwrap();
    let mut sorter = BubbleSort::new(&seq);
    let steps: Vec<Step> = sorter.by_ref().collect();

    let last = steps.last().unwrap();
    assert!(last.is_terminal());
    assert_eq!(last.sequence, vec![1, 3, 4]);
    assert_eq!(steps.iter().filter(|s| s.is_terminal()).count(), 1);
    assert_eq!(sorter.next(), None);
}

#[test]
fn test_input_sequence_is_not_mutated() {
    let seq = parse_user_input("9,8,7").unwrap();
    let _ = run_to_end(&seq);
    assert_eq!(seq.values(), &[9, 8, 7]);
}

#[test]
fn test_random_sequences_properties() {
    for seq in random_sequences(0xB0BB1E, 200) {
        let len = seq.len();
        let expected = sorted_copy(seq.values());
        let (steps, terminal) = run_to_end(&seq);

        let comparisons = steps.iter().filter(|s| !s.swapped).count();
        assert!(comparisons <= len * (len - 1), "too many comparisons for {}", seq);

        let mut previous: Option<&Step> = None;
        for step in &steps {
            // Only ever a permutation of the input
            assert_eq!(step.sequence.len(), len);
            assert_eq!(sorted_copy(&step.sequence), expected);

            let pair = step.comparing.expect("non-terminal steps carry a pair");
            assert!(pair.left() < len - 1);
            assert_eq!(pair.right(), pair.left() + 1);

            if step.swapped {
                // A swap follows the comparison of the same pair
                let prev = previous.expect("swap cannot be the first step");
                assert!(!prev.swapped);
                assert_eq!(prev.comparing, step.comparing);
                let mut unswapped = step.sequence.clone();
                unswapped.swap(pair.left(), pair.right());
                assert_eq!(unswapped, prev.sequence);
            }
            previous = Some(step);
        }

        assert!(terminal.is_terminal());
        assert!(!terminal.swapped);
        assert_eq!(terminal.sequence, expected);
    }
}

#[test]
fn test_deterministic() {
    for seq in random_sequences(7, 50) {
        let first: Vec<Step> = BubbleSort::new(&seq).collect();
        let second: Vec<Step> = BubbleSort::new(&seq).collect();
        assert_eq!(first, second);
    }
}

#[test]
fn test_last_pass_is_clean() {
    let seq = parse_user_input("4,2,5,1,3").unwrap();
    let (steps, _) = run_to_end(&seq);
    let len = seq.len();

    // The final len - 1 steps are the comparisons of the clean pass
    let tail = &steps[steps.len() - (len - 1)..];
    for (i, step) in tail.iter().enumerate() {
        assert!(!step.swapped);
        assert_eq!(step.comparing, Some(ComparingPair::new(i)));
    }
}
