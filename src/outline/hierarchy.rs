//! Folding a flat candidate list into the outline forest.

use crate::model::{HeadingCandidate, HeadingLevel, OutlineNode};

/// Where the most recent H2 was placed.
#[derive(Debug, Clone, Copy)]
enum H2Slot {
    /// Orphan H2 at the top level
    Root(usize),
    /// `roots[parent].children[child]`
    UnderH1 { parent: usize, child: usize },
}

/// Single-pass assembler state. Scoped to one [`assemble`] call.
#[derive(Debug, Default)]
struct Assembler {
    roots: Vec<OutlineNode>,
    current_h1: Option<usize>,
    current_h2: Option<H2Slot>,
}

impl Assembler {
    fn push(&mut self, candidate: HeadingCandidate) {
        let level = candidate.level;
        let node = OutlineNode::from(candidate);

        match level {
            HeadingLevel::H1 => {
                self.current_h1 = Some(self.push_root(node));
                self.current_h2 = None;
            }
            HeadingLevel::H2 => {
                let slot = match self.current_h1 {
                    Some(parent) => {
                        let children = &mut self.roots[parent].children;
                        children.push(node);
                        H2Slot::UnderH1 {
                            parent,
                            child: children.len() - 1,
                        }
                    }
                    None => H2Slot::Root(self.push_root(node)),
                };
                self.current_h2 = Some(slot);
            }
            HeadingLevel::H3 => match (self.current_h2, self.current_h1) {
                (Some(slot), _) => self.h2_node(slot).add_child(node),
                (None, Some(parent)) => self.roots[parent].add_child(node),
                (None, None) => {
                    self.push_root(node);
                }
            },
        }
    }

    fn push_root(&mut self, node: OutlineNode) -> usize {
        self.roots.push(node);
        self.roots.len() - 1
    }

    fn h2_node(&mut self, slot: H2Slot) -> &mut OutlineNode {
        match slot {
            H2Slot::Root(index) => &mut self.roots[index],
            H2Slot::UnderH1 { parent, child } => &mut self.roots[parent].children[child],
        }
    }
}

/// Nest candidates by level transitions, preserving their order.
///
/// - H1 starts a new root and closes the current H2.
/// - H2 goes under the current H1, or becomes a root if there is none.
/// - H3 goes under the current H2, else the current H1, else the roots.
///
/// Every candidate ends up in the forest exactly once.
pub fn assemble<I>(candidates: I) -> Vec<OutlineNode>
where
    I: IntoIterator<Item = HeadingCandidate>,
{
    let mut assembler = Assembler::default();
    for candidate in candidates {
        assembler.push(candidate);
    }
    assembler.roots
}
