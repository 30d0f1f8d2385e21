//! Static explanation blocks for each wrapper kind.
//!
//! Presentation content, deliberately outside the domain: resolution
//! only names which blocks apply, this module owns the words.

use crate::domain::flow::{ExplanationKey, InnerWrapper, OuterWrapper};

/// Returns the explanation text for one key.
pub fn explanation_text(key: ExplanationKey) -> &'static str {
    match key {
        ExplanationKey::PlainValue => {
            "A plain value is all you need. Mutate it through a `mut` binding \
             or a `&mut` borrow; the borrow checker handles the rest at \
             compile time, with no runtime cost."
        }
        ExplanationKey::Outer(outer) => match outer {
            OuterWrapper::Plain => "",
            OuterWrapper::Box => {
                "`Box` moves the value to the heap while keeping exactly one \
                 owner. Useful for large values, trait objects, or types whose \
                 size is not known at compile time."
            }
            OuterWrapper::Rc => {
                "`Rc` is a reference-counted pointer for sharing one value \
                 across several owners on a single thread. The value is \
                 dropped when the last `Rc` handle goes away."
            }
            OuterWrapper::Arc => {
                "`Arc` is an atomically reference-counted pointer, so handles \
                 can be sent across threads. The value is dropped when the \
                 last `Arc` handle goes away."
            }
        },
        ExplanationKey::Inner(inner) => match inner {
            InnerWrapper::Plain => "",
            InnerWrapper::Cell => {
                "`Cell` provides interior mutability by moving or copying \
                 values in and out. There is no way to borrow the contents, \
                 which is what makes it zero-cost."
            }
            InnerWrapper::RefCell => {
                "`RefCell` provides interior mutability with borrows checked \
                 at runtime. Overlapping mutable borrows panic, so keep the \
                 borrow scopes short."
            }
            InnerWrapper::Mutex => {
                "`Mutex` gives exclusive access to the data across threads. \
                 Every lock blocks all other threads, whether they want to \
                 read or write."
            }
            InnerWrapper::RwLock => {
                "`RwLock` lets any number of readers or a single writer lock \
                 the data, which beats `Mutex` when reads dominate."
            }
        },
    }
}
