//! The question catalog and its default contents.
//!
//! # Decision graph
//!
//! | idx | question            | routes                                      |
//! |-----|---------------------|---------------------------------------------|
//! | 0   | owned vs shared     | both choices -> 1                           |
//! | 1   | interior mutability | Yes: shared ? 3 : (sync=false, 4); No: shared ? 3 : 2 |
//! | 2   | stack vs heap       | terminal                                    |
//! | 3   | single vs multi     | Single: interior_mut ? 4 : terminal; Multi: interior_mut ? 5 : terminal |
//! | 4   | borrow vs copy/move | terminal                                    |
//! | 5   | read vs write       | terminal                                    |
//!
//! The graph is forward-only: every route target is strictly past the
//! question it leaves, so any traversal terminates within the catalog's
//! length. `Catalog::new` enforces this.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use super::answer_state::Flag;
use super::errors::CatalogError;
use super::question::{Choice, FlagAssignment, Question, Route};

/// A validated, immutable sequence of questions.
///
/// Constructed once at startup and shared by every session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    questions: Vec<Question>,
}

impl Catalog {
    /// Validates and wraps a question list.
    ///
    /// # Errors
    ///
    /// - `Empty` if there are no questions
    /// - `NoChoices` if a question has no choices
    /// - `RouteOutOfRange` / `BackwardRoute` if any route target is not a
    ///   strictly higher in-bounds index
    pub fn new(questions: Vec<Question>) -> Result<Self, CatalogError> {
        if questions.is_empty() {
            return Err(CatalogError::Empty);
        }

        let len = questions.len();
        for (index, question) in questions.iter().enumerate() {
            if question.choices.is_empty() {
                return Err(CatalogError::NoChoices { question: index });
            }

            for choice in &question.choices {
                for target in choice.route.reachable_indices() {
                    if target >= len {
                        return Err(CatalogError::RouteOutOfRange {
                            question: index,
                            target,
                            len,
                        });
                    }
                    if target <= index {
                        return Err(CatalogError::BackwardRoute {
                            question: index,
                            target,
                        });
                    }
                }
            }
        }

        Ok(Self { questions })
    }

    /// Returns the question at `index`, if it exists.
    pub fn question(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    /// Number of questions in the catalog.
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Returns true if the catalog has no questions.
    ///
    /// Always false for a constructed catalog; present for completeness.
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// All questions, in order.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }
}

/// The default six-question catalog.
pub static DEFAULT_CATALOG: Lazy<Catalog> =
    Lazy::new(|| Catalog::new(default_questions()).expect("default catalog must validate"));

fn default_questions() -> Vec<Question> {
    vec![
        // 0: ownership
        Question::new(
            "Do you need an owned or shared container?",
            vec![
                Choice::new(
                    "Owned",
                    Some(FlagAssignment::new(Flag::Shared, false)),
                    Route::Next(1),
                )
                .with_hint(
                    "The data is owned by exactly one instance of the container. \
                     You will still need to borrow the container to access the inner data.",
                ),
                Choice::new(
                    "Shared",
                    Some(FlagAssignment::new(Flag::Shared, true)),
                    Route::Next(1),
                )
                .with_hint(
                    "The container shares ownership of a single instance of your data \
                     across multiple locations. The data's lifetime is managed internally.",
                ),
            ],
        ),
        // 1: interior mutability
        Question::new(
            "Do you need interior mutability?",
            vec![
                Choice::new(
                    "Yes",
                    Some(FlagAssignment::new(Flag::InteriorMut, true)),
                    Route::Branch {
                        on: Flag::Shared,
                        if_true: Box::new(Route::Next(3)),
                        // A single-owner mutable container never crosses
                        // threads, so the threading question is settled
                        // here rather than asked.
                        if_false: Box::new(Route::Assign {
                            flag: Flag::Sync,
                            value: false,
                            then: Box::new(Route::Next(4)),
                        }),
                    },
                ),
                Choice::new(
                    "No",
                    Some(FlagAssignment::new(Flag::InteriorMut, false)),
                    Route::Branch {
                        on: Flag::Shared,
                        if_true: Box::new(Route::Next(3)),
                        if_false: Box::new(Route::Next(2)),
                    },
                ),
            ],
        )
        .with_hint(
            "Interior mutability means you can modify the contained data without \
             needing mutable access, such as via an owned `mut` binding or a \
             `&mut` borrow.",
        ),
        // 2: allocation
        Question::new(
            "Stack or heap allocated?",
            vec![
                Choice::new(
                    "Stack",
                    Some(FlagAssignment::new(Flag::Heap, false)),
                    Route::Terminal,
                ),
                Choice::new(
                    "Heap",
                    Some(FlagAssignment::new(Flag::Heap, true)),
                    Route::Terminal,
                ),
            ],
        ),
        // 3: threading
        Question::new(
            "Single- or multi-threaded?",
            vec![
                Choice::new(
                    "Single-threaded",
                    Some(FlagAssignment::new(Flag::Sync, false)),
                    Route::Branch {
                        on: Flag::InteriorMut,
                        if_true: Box::new(Route::Next(4)),
                        if_false: Box::new(Route::Terminal),
                    },
                ),
                Choice::new(
                    "Multi-threaded",
                    Some(FlagAssignment::new(Flag::Sync, true)),
                    Route::Branch {
                        on: Flag::InteriorMut,
                        if_true: Box::new(Route::Next(5)),
                        if_false: Box::new(Route::Terminal),
                    },
                ),
            ],
        ),
        // 4: access style
        Question::new(
            "Do you need to borrow the contained data, or is copying/moving sufficient?",
            vec![
                Choice::new(
                    "Borrow",
                    Some(FlagAssignment::new(Flag::Borrow, true)),
                    Route::Terminal,
                ),
                Choice::new(
                    "Copy/Move",
                    Some(FlagAssignment::new(Flag::Borrow, false)),
                    Route::Terminal,
                ),
            ],
        ),
        // 5: access frequency
        Question::new(
            "Which will happen more frequently, reading the data or modifying the data?",
            vec![
                Choice::new(
                    "Reading",
                    Some(FlagAssignment::new(Flag::MainlyRead, true)),
                    Route::Terminal,
                ),
                Choice::new(
                    "Modifying",
                    Some(FlagAssignment::new(Flag::MainlyRead, false)),
                    Route::Terminal,
                ),
            ],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_catalog_has_six_questions() {
        assert_eq!(DEFAULT_CATALOG.len(), 6);
        assert!(!DEFAULT_CATALOG.is_empty());
    }

    #[test]
    fn default_catalog_every_question_has_two_choices() {
        for question in DEFAULT_CATALOG.questions() {
            assert_eq!(question.choices.len(), 2);
        }
    }

    #[test]
    fn question_returns_none_past_the_end() {
        assert!(DEFAULT_CATALOG.question(6).is_none());
        assert!(DEFAULT_CATALOG.question(0).is_some());
    }

    #[test]
    fn empty_catalog_is_rejected() {
        assert_eq!(Catalog::new(Vec::new()), Err(CatalogError::Empty));
    }

    #[test]
    fn question_without_choices_is_rejected() {
        let result = Catalog::new(vec![Question::new("Anything?", Vec::new())]);
        assert_eq!(result, Err(CatalogError::NoChoices { question: 0 }));
    }

    #[test]
    fn out_of_range_route_is_rejected() {
        let result = Catalog::new(vec![Question::new(
            "Anything?",
            vec![Choice::new("Go", None, Route::Next(7))],
        )]);
        assert_eq!(
            result,
            Err(CatalogError::RouteOutOfRange {
                question: 0,
                target: 7,
                len: 1,
            })
        );
    }

    #[test]
    fn backward_route_is_rejected() {
        let questions = vec![
            Question::new("First?", vec![Choice::new("On", None, Route::Next(1))]),
            Question::new("Second?", vec![Choice::new("Back", None, Route::Next(0))]),
        ];
        assert_eq!(
            Catalog::new(questions),
            Err(CatalogError::BackwardRoute {
                question: 1,
                target: 0,
            })
        );
    }

    #[test]
    fn self_route_is_rejected() {
        let questions = vec![
            Question::new("First?", vec![Choice::new("On", None, Route::Next(1))]),
            Question::new("Loop?", vec![Choice::new("Again", None, Route::Next(1))]),
        ];
        assert_eq!(
            Catalog::new(questions),
            Err(CatalogError::BackwardRoute {
                question: 1,
                target: 1,
            })
        );
    }

    #[test]
    fn branch_arms_are_validated_too() {
        let questions = vec![Question::new(
            "Branchy?",
            vec![Choice::new(
                "Pick",
                None,
                Route::Branch {
                    on: Flag::Shared,
                    if_true: Box::new(Route::Terminal),
                    if_false: Box::new(Route::Next(9)),
                },
            )],
        )];
        assert!(matches!(
            Catalog::new(questions),
            Err(CatalogError::RouteOutOfRange { target: 9, .. })
        ));
    }

    #[test]
    fn default_catalog_round_trips_through_json() {
        let json = serde_json::to_string(&*DEFAULT_CATALOG).unwrap();
        let back: Catalog = serde_json::from_str(&json).unwrap();
        assert_eq!(*DEFAULT_CATALOG, back);
    }
}
