//! # Priority-merge [`SpanEncoder`].
//!
//! Uses a binary min-heap over a doubly-linked list for O(n log n) BPE merging,
//! in place of the O(n^2) rescan of [`super::MergeScanSpanEncoder`].

use std::{cmp::Reverse, collections::BinaryHeap};

use crate::{
    TKResult,
    encoders::token_span_encoder::span_encoders::{SpanEncoder, append_byte_tokens},
    types::TokenType,
    vocab::Vocabulary,
};

const NONE: u32 = u32::MAX;

#[derive(Debug, Clone, Copy)]
struct Node<T> {
    token: T,
    prev: u32,
    next: u32,
}

/// Heap entry representing a potential merge.
///
/// Ordered by (rank, `left_idx`) so the lowest-rank, leftmost pair is popped first.
/// `left_tok` and `right_tok` are kept for stale-entry detection.
#[derive(Debug, Eq)]
struct MergeEntry<T: Ord> {
    rank: T,
    left_idx: u32,
    left_tok: T,
    right_tok: T,
}

impl<T: Ord> PartialEq for MergeEntry<T> {
    fn eq(
        &self,
        other: &Self,
    ) -> bool {
        self.rank == other.rank && self.left_idx == other.left_idx
    }
}

impl<T: Ord> Ord for MergeEntry<T> {
    fn cmp(
        &self,
        other: &Self,
    ) -> std::cmp::Ordering {
        self.rank
            .cmp(&other.rank)
            .then(self.left_idx.cmp(&other.left_idx))
    }
}

impl<T: Ord> PartialOrd for MergeEntry<T> {
    fn partial_cmp(
        &self,
        other: &Self,
    ) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// A [`SpanEncoder`] using a binary min-heap with a doubly-linked list.
///
/// Node indices never move, so a surviving left node keeps its original
/// position; ordering ties by `left_idx` is therefore leftmost-first.
pub struct PriorityMergeSpanEncoder<T: TokenType> {
    nodes: Vec<Node<T>>,
    heap: BinaryHeap<Reverse<MergeEntry<T>>>,
    scratch: Vec<T>,
}

impl<T: TokenType> Default for PriorityMergeSpanEncoder<T> {
    fn default() -> Self {
        Self {
            nodes: Vec::new(),
            heap: BinaryHeap::new(),
            scratch: Vec::new(),
        }
    }
}

impl<T: TokenType> std::fmt::Debug for PriorityMergeSpanEncoder<T> {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        f.debug_struct("PriorityMergeSpanEncoder").finish()
    }
}

impl<T: TokenType> Clone for PriorityMergeSpanEncoder<T> {
    fn clone(&self) -> Self {
        Self::default()
    }
}

impl<T: TokenType> PriorityMergeSpanEncoder<T> {
    fn push_candidate(
        &mut self,
        vocab: &Vocabulary<T>,
        left_idx: u32,
        left_tok: T,
        right_tok: T,
    ) {
        if let Some(rank) = vocab.lookup_pair(&(left_tok, right_tok)) {
            self.heap.push(Reverse(MergeEntry {
                rank,
                left_idx,
                left_tok,
                right_tok,
            }));
        }
    }
}

impl<T: TokenType> SpanEncoder<T> for PriorityMergeSpanEncoder<T> {
    fn encode_append_compound_span(
        &mut self,
        vocab: &Vocabulary<T>,
        span: &[u8],
        tokens: &mut Vec<T>,
    ) -> TKResult<()> {
        let n = span.len();
        if n < 2 {
            return append_byte_tokens(vocab, span, tokens);
        }

        self.scratch.clear();
        append_byte_tokens(vocab, span, &mut self.scratch)?;

        self.nodes.clear();
        self.nodes.reserve(n);
        for (i, &token) in self.scratch.iter().enumerate() {
            self.nodes.push(Node {
                token,
                prev: if i == 0 { NONE } else { (i - 1) as u32 },
                next: if i + 1 < n { (i + 1) as u32 } else { NONE },
            });
        }

        self.heap.clear();
        for i in 0..(n - 1) {
            let (left_tok, right_tok) = (self.nodes[i].token, self.nodes[i + 1].token);
            self.push_candidate(vocab, i as u32, left_tok, right_tok);
        }

        while let Some(Reverse(entry)) = self.heap.pop() {
            let li = entry.left_idx as usize;

            let ri_u32 = self.nodes[li].next;
            if ri_u32 == NONE {
                continue;
            }
            let ri = ri_u32 as usize;

            // Stale: the pair was split or either side already merged.
            if self.nodes[ri].prev != entry.left_idx
                || self.nodes[li].token != entry.left_tok
                || self.nodes[ri].token != entry.right_tok
            {
                continue;
            }

            // Left absorbs right.
            let new_token = entry.rank;
            self.nodes[li].token = new_token;
            let right_next = self.nodes[ri].next;
            self.nodes[li].next = right_next;
            self.nodes[ri].prev = NONE;
            self.nodes[ri].next = NONE;
            if right_next != NONE {
                self.nodes[right_next as usize].prev = entry.left_idx;
            }

            let left_prev = self.nodes[li].prev;
            if left_prev != NONE {
                let prev_tok = self.nodes[left_prev as usize].token;
                self.push_candidate(vocab, left_prev, prev_tok, new_token);
            }
            if right_next != NONE {
                let next_tok = self.nodes[right_next as usize].token;
                self.push_candidate(vocab, entry.left_idx, new_token, next_tok);
            }
        }

        let mut idx = 0u32;
        while idx != NONE {
            tokens.push(self.nodes[idx as usize].token);
            idx = self.nodes[idx as usize].next;
        }
        Ok(())
    }
}
