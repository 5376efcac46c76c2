use std::collections::HashSet;

use proptest::prelude::*;
use trivia_core::filter::by_category;
use trivia_core::quiz::choose;
use trivia_core::{paginate, CategorySelector, Page, Question, SearchTerm, SeededRandom};

fn arb_question() -> impl Strategy<Value = (String, i64)> {
    ("[a-zA-Z ]{0,24}", 1i64..=6)
}

// Questions with ascending, unique ids
fn arb_questions() -> impl Strategy<Value = Vec<Question>> {
    prop::collection::vec(arb_question(), 0..40).prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (text, category))| Question {
                id: i as i64 * 2 + 1,
                question: text,
                answer: "answer".to_string(),
                difficulty: 1,
                category,
            })
            .collect()
    })
}

proptest! {
    /// Property: page 1 is the first min(10, len) items
    #[test]
    fn prop_first_page_is_prefix(items in prop::collection::vec(any::<u32>(), 0..60)) {
        let page = paginate(&items, Page::new(1));
        let expected = items.len().min(10);
        prop_assert_eq!(page.as_slice(), &items[..expected]);
    }

    /// Property: any page past the last one is empty
    #[test]
    fn prop_page_past_end_is_empty(
        items in prop::collection::vec(any::<u32>(), 0..60),
        extra in 1i64..50,
    ) {
        let last_page = (items.len() as i64 + 9) / 10;
        prop_assert!(paginate(&items, Page::new(last_page + extra)).is_empty());
    }

    /// Property: concatenating all pages reproduces the input
    #[test]
    fn prop_pages_partition_input(items in prop::collection::vec(any::<u32>(), 0..60)) {
        let mut rebuilt = Vec::new();
        let mut number = 1;
        loop {
            let page = paginate(&items, Page::new(number));
            if page.is_empty() {
                break;
            }
            prop_assert!(page.len() <= 10);
            rebuilt.extend(page);
            number += 1;
        }
        prop_assert_eq!(rebuilt, items);
    }

    /// Property: search does not depend on the case of the term
    #[test]
    fn prop_search_case_insensitive(questions in arb_questions(), term in "[a-zA-Z]{1,4}") {
        let lower = SearchTerm::from(term.to_lowercase().as_str());
        let upper = SearchTerm::from(term.to_uppercase().as_str());
        let a: Vec<_> = questions.iter().filter(|q| lower.matches(q)).map(|q| q.id).collect();
        let b: Vec<_> = questions.iter().filter(|q| upper.matches(q)).map(|q| q.id).collect();
        prop_assert_eq!(a, b);
    }

    /// Property: the category filter never lets another category through
    #[test]
    fn prop_category_filter_exact(questions in arb_questions(), category in 1i64..=6) {
        let keep = by_category(category);
        prop_assert!(questions.iter().filter(|q| keep(q)).all(|q| q.category == category));
    }

    /// Property: the picked question is never one already shown
    #[test]
    fn prop_quiz_excludes_previous(
        questions in arb_questions(),
        previous in prop::collection::hash_set(0i64..80, 0..40),
        seed in any::<u64>(),
    ) {
        let random = SeededRandom::new(seed);
        let remaining = questions.iter().filter(|q| !previous.contains(&q.id)).count();
        match choose(questions, &previous, &random) {
            Some(q) => prop_assert!(!previous.contains(&q.id)),
            None => prop_assert_eq!(remaining, 0),
        }
    }

    /// Property: with a concrete category every pick belongs to it
    #[test]
    fn prop_quiz_confined_to_category(
        questions in arb_questions(),
        category in 1i64..=6,
        seed in any::<u64>(),
    ) {
        let selector = CategorySelector::from_id(category);
        let candidates: Vec<_> = questions.into_iter().filter(|q| selector.allows(q)).collect();
        let random = SeededRandom::new(seed);
        if let Some(q) = choose(candidates, &HashSet::new(), &random) {
            prop_assert_eq!(q.category, category);
        }
    }
}
