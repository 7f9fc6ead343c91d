//! Depth-first traversal engine.
//!
//! [DepthFirst] walks a tree with an explicit stack of frames and emits one
//! [Step] per call to `next`. Each node is visited
//! - once on [Visit::Enter], when the walk arrives at the node,
//! - once on [Visit::Between] if it has no children, otherwise once between
//!   any two consecutive children,
//! - once on [Visit::Leave], after its last child.
//!
//! Children of a node are its neighbors without the node it was reached
//! from, see [Children](crate::model::Children).

use crate::model::adjacency::ChildrenIter;
use crate::model::{NO_NODE, NodeId, Tree};

/// Kind of visit of a [Step].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Visit {
    /// Arrived at the node, before its first child (pre-order)
    Enter,
    /// Between two consecutive children, or once for a node without children (in-order)
    Between,
    /// After the last child, before returning to the parent (post-order)
    Leave,
}

/// One step of a depth-first traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    /// Visited node
    pub node: NodeId,
    /// Node the walk came from, `None` at the start node without parent
    pub parent: Option<NodeId>,
    /// Distance from the start node
    pub depth: usize,
    /// Kind of visit
    pub visit: Visit,
}

/// Stack frame of a node on the current path.
#[derive(Debug, Clone)]
struct Frame<'a> {
    node: NodeId,
    parent: NodeId,
    /// Child currently descended into or next to descend into; `None` once
    /// all children are done (or skipped).
    pending: Option<NodeId>,
    remaining: ChildrenIter<'a>,
    childless: bool,
}

impl<'a> Frame<'a> {
    fn new<T>(tree: &'a Tree<T>, node: NodeId, parent: NodeId) -> Self {
        let mut remaining = tree.children(node, parent).iter();
        let pending = remaining.next();
        Frame {
            node,
            parent,
            pending,
            remaining,
            childless: pending.is_none(),
        }
    }
}

// =#========================================================================#=
// DEPTH FIRST
// =#========================================================================#=
/// Lazy depth-first traversal emitting every [Step].
///
/// The traversal borrows the tree, so the tree cannot be changed while the
/// traversal is alive. It is single-pass; create a new one to walk again.
#[derive(Debug, Clone)]
pub struct DepthFirst<'a, T> {
    tree: &'a Tree<T>,
    stack: Vec<Frame<'a>>,
    current: Option<Step>,
    started: bool,
}

impl<'a, T> DepthFirst<'a, T> {
    /// Creates a traversal of the subtree at `start`, entered from `parent`.
    ///
    /// Use [NO_NODE] as `parent` to treat all neighbors of `start` as children.
    ///
    /// # Panics
    /// Panics if `start` is out of bounds.
    pub fn new(tree: &'a Tree<T>, start: NodeId, parent: NodeId) -> Self {
        let frame = Frame::new(tree, start, parent);
        DepthFirst {
            tree,
            stack: vec![frame],
            current: Some(Step {
                node: start,
                parent: (parent != NO_NODE).then_some(parent),
                depth: 0,
                visit: Visit::Enter,
            }),
            started: false,
        }
    }

    /// Creates a traversal that yields nothing.
    pub fn empty(tree: &'a Tree<T>) -> Self {
        DepthFirst {
            tree,
            stack: Vec::new(),
            current: None,
            started: true,
        }
    }

    /// Returns the most recently emitted step.
    pub fn current(&self) -> Option<Step> {
        if self.started { self.current } else { None }
    }

    /// Skips the remaining children of the current node.
    ///
    /// After a [Visit::Enter] step, the subtree below the current node is not
    /// visited; the node still gets its [Visit::Between] and [Visit::Leave]
    /// steps. The tree itself is not changed, and neither is
    /// [at_childless](DepthFirst::at_childless) for the current node.
    pub fn skip_children(&mut self) {
        if let Some(frame) = self.stack.last_mut() {
            frame.pending = None;
        }
    }

    /// Returns `true` if the current node has no children in this traversal.
    pub fn at_childless(&self) -> bool {
        self.stack.last().is_some_and(|frame| frame.childless)
    }

    fn advance(&mut self) {
        let Some(step) = self.current else {
            return;
        };

        match step.visit {
            Visit::Enter | Visit::Between => {
                let pending = self.top().pending;
                match pending {
                    Some(child) => self.descend(step, child),
                    None => {
                        // no (more) children: a childless node gets its single
                        // in-order visit, otherwise the node is left
                        let visit = match step.visit {
                            Visit::Enter => Visit::Between,
                            _ => Visit::Leave,
                        };
                        self.current = Some(Step { visit, ..step });
                    }
                }
            }
            Visit::Leave => {
                self.stack.pop();
                let Some(frame) = self.stack.last_mut() else {
                    self.current = None;
                    return;
                };
                frame.pending = frame.remaining.next();
                self.current = Some(Step {
                    node: frame.node,
                    parent: (frame.parent != NO_NODE).then_some(frame.parent),
                    depth: step.depth - 1,
                    visit: if frame.pending.is_some() {
                        Visit::Between
                    } else {
                        Visit::Leave
                    },
                });
            }
        }
    }

    fn descend(&mut self, step: Step, child: NodeId) {
        self.stack.push(Frame::new(self.tree, child, step.node));
        self.current = Some(Step {
            node: child,
            parent: Some(step.node),
            depth: step.depth + 1,
            visit: Visit::Enter,
        });
    }

    fn top(&self) -> &Frame<'a> {
        self.stack
            .last()
            .unwrap_or_else(|| panic!("broken traversal: step {:?} without frame", self.current))
    }
}

impl<T> Iterator for DepthFirst<'_, T> {
    type Item = Step;

    fn next(&mut self) -> Option<Self::Item> {
        if self.started {
            self.advance();
        } else {
            self.started = true;
        }
        self.current
    }
}

impl<T> std::iter::FusedIterator for DepthFirst<'_, T> {}
