//! Filtered views on the depth-first traversal.
//!
//! Each view wraps a [DepthFirst] and only lets through certain steps:
//!
//! | View | Steps |
//! |------|-------|
//! | [PreOrder] | [Visit::Enter] |
//! | [InOrder] | [Visit::Between] |
//! | [PostOrder] | [Visit::Leave] |
//! | [EulerTour] | all steps of nodes with children, the [Visit::Between] step of childless nodes |

use crate::traversal::dfs::{DepthFirst, Step, Visit};

macro_rules! visit_filter {
    ($(#[$doc:meta])* $name:ident, $visit:path) => {
        $(#[$doc])*
        #[derive(Debug, Clone)]
        pub struct $name<'a, T> {
            walk: DepthFirst<'a, T>,
        }

        impl<'a, T> $name<'a, T> {
            /// Creates the view on the given traversal.
            pub fn new(walk: DepthFirst<'a, T>) -> Self {
                $name { walk }
            }

            /// Skips the remaining children of the most recently yielded node.
            ///
            /// See [DepthFirst::skip_children].
            pub fn skip_children(&mut self) {
                self.walk.skip_children();
            }
        }

        impl<T> Iterator for $name<'_, T> {
            type Item = Step;

            fn next(&mut self) -> Option<Self::Item> {
                self.walk.by_ref().find(|step| step.visit == $visit)
            }
        }

        impl<T> std::iter::FusedIterator for $name<'_, T> {}
    };
}

visit_filter!(
    /// Pre-order view: each node before its descendants.
    PreOrder,
    Visit::Enter
);

visit_filter!(
    /// In-order view: each childless node once, and each other node between
    /// any two consecutive children.
    InOrder,
    Visit::Between
);

visit_filter!(
    /// Post-order view: each node after its descendants.
    PostOrder,
    Visit::Leave
);

// =#========================================================================#=
// EULER TOUR
// =#========================================================================#=
/// Euler tour view: each node on arrival, between any two children and on
/// departure; a childless node exactly once.
///
/// A node with `k` children appears `k + 1` times, so the tour over a subtree
/// with `e` edges has `2e + 1` entries. Together with the depth of each
/// [Step] this is the usual input of range-minimum based lowest common
/// ancestor queries.
#[derive(Debug, Clone)]
pub struct EulerTour<'a, T> {
    walk: DepthFirst<'a, T>,
}

impl<'a, T> EulerTour<'a, T> {
    /// Creates the view on the given traversal.
    pub fn new(walk: DepthFirst<'a, T>) -> Self {
        EulerTour { walk }
    }

    /// Skips the remaining children of the most recently yielded node.
    ///
    /// Whether a node is childless is fixed when the walk arrives at it.
    /// A node with children whose subtree is skipped right after its arrival
    /// still appears three times: on arrival, once in between and on
    /// departure.
    ///
    /// See [DepthFirst::skip_children].
    pub fn skip_children(&mut self) {
        self.walk.skip_children();
    }
}

impl<T> Iterator for EulerTour<'_, T> {
    type Item = Step;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let step = self.walk.next()?;
            if !self.walk.at_childless() || step.visit == Visit::Between {
                return Some(step);
            }
        }
    }
}

impl<T> std::iter::FusedIterator for EulerTour<'_, T> {}
