//! Question and choice records.
//!
//! Choices carry no behavior. Each one is plain data: an optional flag
//! assignment plus a routing rule, both interpreted by the traversal
//! session's step function. This keeps the catalog serializable and lets
//! tests construct arbitrary graphs.

use serde::{Deserialize, Serialize};

use super::answer_state::{AnswerState, Flag};

/// An explicit flag write performed when a choice is selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlagAssignment {
    pub flag: Flag,
    pub value: bool,
}

impl FlagAssignment {
    pub fn new(flag: Flag, value: bool) -> Self {
        Self { flag, value }
    }

    /// Writes the assignment into the answer state.
    pub fn apply(&self, state: &mut AnswerState) {
        state.set(self.flag, self.value);
    }
}

/// Where the traversal goes after a choice is applied.
///
/// Interpreted against the answer state accumulated so far. `Branch`
/// takes its `if_false` arm for both `False` and `Unset`, mirroring a
/// truthiness test on a flag that may never have been answered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Route {
    /// Continue to the question at this index.
    Next(usize),
    /// No further question; the session resolves.
    Terminal,
    /// Pick an arm based on a previously answered flag.
    Branch {
        on: Flag,
        if_true: Box<Route>,
        if_false: Box<Route>,
    },
    /// Set a flag as part of routing, then keep following.
    ///
    /// Some paths settle a later question implicitly; the write must
    /// happen here, not in the choice's own assignment, so that the
    /// answer state seen by resolution matches the path taken.
    Assign {
        flag: Flag,
        value: bool,
        then: Box<Route>,
    },
}

impl Route {
    /// Follows the route to a concrete destination, performing any
    /// routing-coupled flag writes along the way.
    pub fn follow(&self, state: &mut AnswerState) -> Destination {
        match self {
            Route::Next(index) => Destination::Question(*index),
            Route::Terminal => Destination::Terminal,
            Route::Branch { on, if_true, if_false } => {
                if state.get(*on).is_true() {
                    if_true.follow(state)
                } else {
                    if_false.follow(state)
                }
            }
            Route::Assign { flag, value, then } => {
                state.set(*flag, *value);
                then.follow(state)
            }
        }
    }

    /// All question indices this route can reach, across every branch arm.
    pub fn reachable_indices(&self) -> Vec<usize> {
        match self {
            Route::Next(index) => vec![*index],
            Route::Terminal => Vec::new(),
            Route::Branch { if_true, if_false, .. } => {
                let mut indices = if_true.reachable_indices();
                indices.extend(if_false.reachable_indices());
                indices
            }
            Route::Assign { then, .. } => then.reachable_indices(),
        }
    }
}

/// Concrete routing outcome after all branches are evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    Question(usize),
    Terminal,
}

/// One selectable answer to a question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    /// Button label shown to the user.
    pub label: String,

    /// Optional elaboration on what picking this choice implies.
    pub hint: Option<String>,

    /// Flag written when this choice is selected, if any.
    pub effect: Option<FlagAssignment>,

    /// Routing rule evaluated after the effect is applied.
    pub route: Route,
}

impl Choice {
    pub fn new(label: impl Into<String>, effect: Option<FlagAssignment>, route: Route) -> Self {
        Self {
            label: label.into(),
            hint: None,
            effect,
            route,
        }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

/// A single questionnaire step, identified by its catalog index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// The prompt shown to the user.
    pub prompt: String,

    /// Optional elaboration on the prompt.
    pub hint: Option<String>,

    /// Selectable answers, in display order.
    pub choices: Vec<Choice>,
}

impl Question {
    pub fn new(prompt: impl Into<String>, choices: Vec<Choice>) -> Self {
        Self {
            prompt: prompt.into(),
            hint: None,
            choices,
        }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::TriState;

    #[test]
    fn next_route_resolves_to_question() {
        let mut state = AnswerState::new();
        assert_eq!(Route::Next(3).follow(&mut state), Destination::Question(3));
    }

    #[test]
    fn terminal_route_resolves_to_terminal() {
        let mut state = AnswerState::new();
        assert_eq!(Route::Terminal.follow(&mut state), Destination::Terminal);
    }

    #[test]
    fn branch_takes_true_arm_for_explicit_true() {
        let mut state = AnswerState::new();
        state.set(Flag::Shared, true);

        let route = Route::Branch {
            on: Flag::Shared,
            if_true: Box::new(Route::Next(3)),
            if_false: Box::new(Route::Next(2)),
        };
        assert_eq!(route.follow(&mut state), Destination::Question(3));
    }

    #[test]
    fn branch_takes_false_arm_for_explicit_false() {
        let mut state = AnswerState::new();
        state.set(Flag::Shared, false);

        let route = Route::Branch {
            on: Flag::Shared,
            if_true: Box::new(Route::Next(3)),
            if_false: Box::new(Route::Next(2)),
        };
        assert_eq!(route.follow(&mut state), Destination::Question(2));
    }

    #[test]
    fn branch_takes_false_arm_for_unset() {
        let mut state = AnswerState::new();

        let route = Route::Branch {
            on: Flag::Shared,
            if_true: Box::new(Route::Next(3)),
            if_false: Box::new(Route::Terminal),
        };
        assert_eq!(route.follow(&mut state), Destination::Terminal);
    }

    #[test]
    fn assign_writes_flag_before_continuing() {
        let mut state = AnswerState::new();

        let route = Route::Assign {
            flag: Flag::Sync,
            value: false,
            then: Box::new(Route::Next(4)),
        };
        assert_eq!(route.follow(&mut state), Destination::Question(4));
        assert_eq!(state.get(Flag::Sync), TriState::False);
    }

    #[test]
    fn reachable_indices_collects_all_arms() {
        let route = Route::Branch {
            on: Flag::Shared,
            if_true: Box::new(Route::Next(3)),
            if_false: Box::new(Route::Assign {
                flag: Flag::Sync,
                value: false,
                then: Box::new(Route::Next(4)),
            }),
        };
        let mut indices = route.reachable_indices();
        indices.sort_unstable();
        assert_eq!(indices, vec![3, 4]);
    }

    #[test]
    fn flag_assignment_applies_to_state() {
        let mut state = AnswerState::new();
        FlagAssignment::new(Flag::Heap, true).apply(&mut state);
        assert_eq!(state.get(Flag::Heap), TriState::True);
    }

    #[test]
    fn catalog_records_are_serializable() {
        let question = Question::new(
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
        );

        let json = serde_json::to_string(&question).unwrap();
        let back: Question = serde_json::from_str(&json).unwrap();
        assert_eq!(question, back);
    }
}
