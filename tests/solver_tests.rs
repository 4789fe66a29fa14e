use std::collections::{BTreeSet, HashMap, HashSet, VecDeque};
use word_ladder::word::substitutions;
use word_ladder::{
    find_all_shortest_ladders, load_dictionary, Dictionary, FrontierState, Ladder, LadderSolver,
    Lexicon,
};

fn get_test_words() -> HashSet<String> {
    ["hot", "dot", "dog", "lot", "log", "cog"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn ladder(words: &[&str]) -> Ladder {
    Ladder::new(words.iter().map(|s| s.to_string()).collect())
}

/// Independent reference: plain BFS distances from the start, then every
/// path that increases the distance by one per step and lands on the end.
fn reference_ladders<L: Lexicon>(start: &str, end: &str, lexicon: &L) -> BTreeSet<Ladder> {
    let neighbors = |word: &str| -> Vec<String> {
        substitutions(word)
            .filter(|w| w == end || lexicon.contains(w))
            .collect()
    };

    let mut distance: HashMap<String, usize> = HashMap::from([(start.to_string(), 0)]);
    let mut queue = VecDeque::from([start.to_string()]);
    while let Some(word) = queue.pop_front() {
        if word == end {
            continue;
        }
        let d = distance[&word];
        for next in neighbors(&word) {
            if !distance.contains_key(&next) {
                distance.insert(next.clone(), d + 1);
                queue.push_back(next);
            }
        }
    }

    let mut ladders = BTreeSet::new();
    let Some(&target) = distance.get(end) else {
        return ladders;
    };

    let mut stack = vec![vec![start.to_string()]];
    while let Some(path) = stack.pop() {
        let last = path.last().unwrap();
        if path.len() - 1 == target {
            if last == end {
                ladders.insert(Ladder::new(path));
            }
            continue;
        }
        for next in neighbors(last) {
            if distance.get(&next) == Some(&path.len()) {
                let mut extended = path.clone();
                extended.push(next);
                stack.push(extended);
            }
        }
    }
    ladders
}

#[test]
fn test_classic_example() {
    let words = get_test_words();
    let ladders = find_all_shortest_ladders("hit", "cog", &words);

    let expected: BTreeSet<Ladder> = [
        ladder(&["hit", "hot", "dot", "dog", "cog"]),
        ladder(&["hit", "hot", "lot", "log", "cog"]),
    ]
    .into_iter()
    .collect();
    assert_eq!(ladders, expected);
}

#[test]
fn test_disjoint_dictionary() {
    let words: HashSet<String> = ["foo", "bar", "baz"].iter().map(|s| s.to_string()).collect();
    assert!(find_all_shortest_ladders("abc", "xyz", &words).is_empty());
}

#[test]
fn test_dead_end_chain() {
    let words: HashSet<String> = ["hot", "dot"].iter().map(|s| s.to_string()).collect();
    assert!(find_all_shortest_ladders("hit", "cog", &words).is_empty());
}

#[test]
fn test_identical_words() {
    let words = get_test_words();
    let ladders = find_all_shortest_ladders("dog", "dog", &words);
    assert_eq!(ladders.len(), 1);
    assert_eq!(ladders.first(), Some(&ladder(&["dog"])));
}

#[test]
fn test_length_mismatch() {
    let words = get_test_words();
    assert!(find_all_shortest_ladders("hot", "hots", &words).is_empty());
}

#[test]
fn test_end_outside_dictionary() {
    let words: HashSet<String> = ["hot", "dot", "dog"].iter().map(|s| s.to_string()).collect();
    let ladders = find_all_shortest_ladders("hit", "cog", &words);
    assert_eq!(ladders.len(), 1);
    assert!(ladders.contains(&ladder(&["hit", "hot", "dot", "dog", "cog"])));
}

#[test]
fn test_start_outside_dictionary() {
    let words = get_test_words();
    assert!(!Lexicon::contains(&words, "hit"));
    assert!(!find_all_shortest_ladders("hit", "cog", &words).is_empty());
}

#[test]
fn test_single_step() {
    let words = get_test_words();
    let ladders = find_all_shortest_ladders("dog", "log", &words);
    assert_eq!(ladders.len(), 1);
    assert!(ladders.contains(&ladder(&["dog", "log"])));
}

#[test]
fn test_with_full_dictionary() {
    let dictionary = load_dictionary();
    let ladders = find_all_shortest_ladders("cold", "warm", &dictionary);

    assert_eq!(ladders.len(), 6);
    assert!(ladders.contains(&ladder(&["cold", "cord", "card", "ward", "warm"])));
    for found in &ladders {
        assert_eq!(found.steps(), 4);
        assert!(found.is_valid(&dictionary));
    }
}

#[test]
fn test_matches_reference() {
    let dictionary = load_dictionary();
    let pairs = [
        ("cold", "warm"),
        ("hit", "cog"),
        ("cat", "dog"),
        ("head", "tail"),
        ("lead", "gold"),
        ("ape", "man"),
        ("bake", "cold"),
        ("zoo", "ink"),
    ];

    for (start, end) in pairs {
        let ladders = find_all_shortest_ladders(start, end, &dictionary);
        let expected = reference_ladders(start, end, &dictionary);
        assert_eq!(ladders, expected, "{} -> {}", start, end);
    }
}

#[test]
fn test_ladder_invariants() {
    let dictionary = load_dictionary();
    let ladders = find_all_shortest_ladders("head", "tail", &dictionary);
    assert!(!ladders.is_empty());

    let steps: HashSet<usize> = ladders.iter().map(Ladder::steps).collect();
    assert_eq!(steps.len(), 1, "ladders of different lengths: {:?}", steps);

    for found in &ladders {
        assert_eq!(found.first(), Some("head"));
        assert_eq!(found.last(), Some("tail"));
        assert!(found.is_valid(&dictionary), "invalid ladder: {}", found);
    }
}

#[test]
fn test_solver_report() {
    let mut solver = LadderSolver::new(get_test_words());
    assert!(solver.is_parallel());

    let report = solver.solve("hit", "cog");
    assert!(report.is_found());
    assert_eq!(report.state, FrontierState::Found);
    assert_eq!(report.layers, 4);
    assert_eq!(report.edges, 7);
    assert_eq!(report.visited, 7);
    assert_eq!(report.shortest_length(), Some(5));

    solver.set_parallel(false);
    assert!(!solver.is_parallel());
    assert_eq!(solver.find_ladders("hit", "cog"), report.ladders);
}

#[test]
fn test_solver_report_not_found() {
    let solver = LadderSolver::new(get_test_words());
    let report = solver.solve("abc", "xyz");
    assert!(!report.is_found());
    assert_eq!(report.state, FrontierState::Exhausted);
    assert_eq!(report.shortest_length(), None);
}

#[test]
fn test_solver_with_borrowed_dictionary() {
    let dictionary = Dictionary::from_words(["hot", "dot", "dog", "lot", "log", "cog"]);
    let solver = LadderSolver::new(&dictionary);
    assert_eq!(solver.lexicon().len(), 6);
    assert_eq!(solver.find_ladders("hit", "cog").len(), 2);
}
