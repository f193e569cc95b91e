// Boggler – A solver for word-search dice puzzles
// Copyright (C) 2026  The Boggler authors
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <http://www.gnu.org/licenses/>.

// The trie is stored as a list of nodes. Each node knows the face of
// the edge leading to it, whether the faces from the root up to it
// spell a word, the index of its first child and the index of its
// next sibling. The first node in the list is the root and has no
// face. The children of a node are always kept in face order.

use std::num::NonZeroUsize;
use super::face::Face;
use super::lexer::{self, Faces, WordError};

#[derive(Debug, Clone)]
struct Node {
    face: Option<Face>,
    terminal: bool,
    // Index of the first child if there is one
    first_child: Option<NonZeroUsize>,
    // Index of the next sibling if there is one
    next_sibling: Option<NonZeroUsize>,
}

impl Node {
    fn new(face: Option<Face>) -> Node {
        Node {
            face,
            terminal: false,
            first_child: None,
            next_sibling: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Trie {
    nodes: Vec<Node>,
    n_words: usize,
}

/// A borrowed position in a trie.
#[derive(Debug, Clone, Copy)]
pub struct NodeRef<'a> {
    trie: &'a Trie,
    index: usize,
}

impl Trie {
    pub fn new() -> Trie {
        Trie {
            nodes: vec![Node::new(None)],
            n_words: 0,
        }
    }

    pub fn from_words<I, S>(words: I) -> Result<Trie, WordError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut trie = Trie::new();

        for word in words {
            trie.add_word(word.as_ref())?;
        }

        Ok(trie)
    }

    /// Adds a word to the trie. Adding a word twice has no effect and
    /// neither does adding the empty word. If the word contains a
    /// character that isn’t on any face then the trie is left
    /// untouched.
    pub fn add_word(&mut self, word: &str) -> Result<(), WordError> {
        let faces = lexer::word_faces(word)?;
        self.add_faces(&faces);
        Ok(())
    }

    pub fn add_faces(&mut self, faces: &[Face]) {
        if faces.is_empty() {
            return;
        }

        let mut node = 0;

        for &face in faces {
            node = self.find_or_add_child(node, face);
        }

        self.mark_terminal(node);
    }

    pub(crate) fn mark_terminal(&mut self, node: usize) {
        let node = &mut self.nodes[node];

        if !node.terminal {
            node.terminal = true;
            self.n_words += 1;
        }
    }

    pub(crate) fn find_child(&self, node: usize, face: Face) -> Option<usize> {
        let mut child = self.nodes[node].first_child;

        while let Some(this_child) = child {
            let this_node = &self.nodes[this_child.get()];

            match this_node.face.cmp(&Some(face)) {
                std::cmp::Ordering::Less => child = this_node.next_sibling,
                std::cmp::Ordering::Equal => return Some(this_child.get()),
                std::cmp::Ordering::Greater => break,
            }
        }

        None
    }

    pub(crate) fn find_or_add_child(&mut self, node: usize, face: Face) -> usize {
        let mut previous = None;
        let mut child = self.nodes[node].first_child;

        while let Some(this_child) = child {
            let this_node = &self.nodes[this_child.get()];

            if this_node.face == Some(face) {
                return this_child.get();
            }

            if this_node.face > Some(face) {
                break;
            }

            previous = Some(this_child.get());
            child = this_node.next_sibling;
        }

        let new_node_pos = self.nodes.len();
        let mut new_node = Node::new(Some(face));
        new_node.next_sibling = child;

        // The nodes list is never empty, so the new_node_pos
        // shouldn’t be zero
        let link = NonZeroUsize::new(new_node_pos);
        assert!(link.is_some());

        match previous {
            Some(previous) => self.nodes[previous].next_sibling = link,
            None => self.nodes[node].first_child = link,
        }

        self.nodes.push(new_node);

        new_node_pos
    }

    /// Returns whether the word is in the trie. Words that are only a
    /// prefix of another word don’t count.
    pub fn contains(&self, word: &str) -> bool {
        let mut node = self.root();

        for face in Faces::new(word) {
            let Ok(face) = face
            else {
                return false;
            };

            match node.child(face) {
                Some(child) => node = child,
                None => return false,
            }
        }

        node.is_terminal()
    }

    pub fn root(&self) -> NodeRef<'_> {
        NodeRef { trie: self, index: 0 }
    }

    /// Number of words in the trie
    pub fn len(&self) -> usize {
        self.n_words
    }

    pub fn is_empty(&self) -> bool {
        self.n_words == 0
    }

    pub fn words(&self) -> WordIterator<'_> {
        WordIterator::new(self)
    }
}

impl Default for Trie {
    fn default() -> Trie {
        Trie::new()
    }
}

impl<'a> NodeRef<'a> {
    /// The face of the edge leading to this node. This is `None` only
    /// for the root.
    pub fn face(&self) -> Option<Face> {
        self.trie.nodes[self.index].face
    }

    pub fn is_terminal(&self) -> bool {
        self.trie.nodes[self.index].terminal
    }

    pub fn child(&self, face: Face) -> Option<NodeRef<'a>> {
        self.trie.find_child(self.index, face).map(|index| NodeRef {
            trie: self.trie,
            index,
        })
    }

    pub fn first_child(&self) -> Option<NodeRef<'a>> {
        self.trie.nodes[self.index].first_child.map(|index| NodeRef {
            trie: self.trie,
            index: index.get(),
        })
    }

    pub fn next_sibling(&self) -> Option<NodeRef<'a>> {
        self.trie.nodes[self.index].next_sibling.map(|index| NodeRef {
            trie: self.trie,
            index: index.get(),
        })
    }

    pub fn children(&self) -> Children<'a> {
        Children { next: self.first_child() }
    }
}

pub struct Children<'a> {
    next: Option<NodeRef<'a>>,
}

impl<'a> Iterator for Children<'a> {
    type Item = NodeRef<'a>;

    fn next(&mut self) -> Option<NodeRef<'a>> {
        let node = self.next?;
        self.next = node.next_sibling();
        Some(node)
    }
}

struct StackEntry {
    node: usize,
    word_length: usize,
}

/// Iterates all of the words in a trie in face order.
pub struct WordIterator<'a> {
    trie: &'a Trie,
    stack: Vec<StackEntry>,
    buf: String,
}

impl<'a> WordIterator<'a> {
    pub fn new(trie: &'a Trie) -> WordIterator<'a> {
        let stack = trie.nodes[0].first_child
            .map(|child| StackEntry { node: child.get(), word_length: 0 })
            .into_iter()
            .collect();

        WordIterator {
            trie,
            stack,
            buf: String::new(),
        }
    }

    pub fn next(&mut self) -> Option<&str> {
        let trie = self.trie;

        while let Some(entry) = self.stack.pop() {
            let node = &trie.nodes[entry.node];
            let face = node.face.map(Face::as_str).unwrap_or("");

            if let Some(sibling) = node.next_sibling {
                self.stack.push(StackEntry {
                    node: sibling.get(),
                    word_length: entry.word_length,
                });
            }

            if let Some(child) = node.first_child {
                self.stack.push(StackEntry {
                    node: child.get(),
                    word_length: entry.word_length + face.len(),
                });
            }

            self.buf.truncate(entry.word_length);
            self.buf.push_str(face);

            if node.terminal {
                return Some(&self.buf);
            }
        }

        None
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn make_test_trie() -> Trie {
        Trie::from_words(["a", "b", "c", "apple", "app", "quiet", "quick"])
            .unwrap()
    }

    #[test]
    fn contains() {
        let trie = make_test_trie();

        assert!(trie.contains("a"));
        assert!(trie.contains("b"));
        assert!(trie.contains("c"));
        assert!(trie.contains("apple"));
        assert!(trie.contains("app"));
        assert!(trie.contains("quick"));
        assert!(trie.contains("quiet"));

        assert!(!trie.contains(""));
        assert!(!trie.contains("d"));
        assert!(!trie.contains("appl"));
        assert!(!trie.contains("apples"));
        assert!(!trie.contains("qui"));
        assert!(!trie.contains("quickest"));
        assert!(!trie.contains("q"));
        assert!(!trie.contains("ap-ple"));

        assert!(trie.contains("APPLE"));
    }

    #[test]
    fn prefix_is_not_a_match() {
        let trie = Trie::from_words(["how", "howl"]).unwrap();

        assert!(!trie.contains("ho"));
        assert!(trie.contains("how"));
        assert!(trie.contains("howl"));
    }

    #[test]
    fn qu_edges() {
        let trie = Trie::from_words(["quiz", "qat"]).unwrap();
        let root = trie.root();

        let qu = root.child(Face::Qu).unwrap();
        assert_eq!(qu.face(), Some(Face::Qu));
        assert!(qu.child(Face::I).is_some());
        assert!(qu.child(Face::U).is_none());

        let q = root.child(Face::Q).unwrap();
        assert!(q.child(Face::A).is_some());
        assert!(root.child(Face::U).is_none());
    }

    #[test]
    fn idempotent() {
        let mut trie = Trie::new();

        trie.add_word("bar").unwrap();
        let n_nodes = trie.nodes.len();
        trie.add_word("bar").unwrap();
        trie.add_word("").unwrap();

        assert_eq!(trie.nodes.len(), n_nodes);
        assert_eq!(trie.len(), 1);
        assert!(trie.contains("bar"));
    }

    #[test]
    fn bad_word_leaves_trie_untouched() {
        let mut trie = Trie::new();

        assert_eq!(
            trie.add_word("ab1"),
            Err(WordError::UnexpectedCharacter(2, '1')),
        );
        assert!(trie.is_empty());
        assert_eq!(trie.nodes.len(), 1);
        assert!(trie.root().first_child().is_none());
    }

    #[test]
    fn children_are_sorted() {
        let trie = Trie::from_words(["z", "r", "qu", "q", "a"]).unwrap();

        assert_eq!(
            trie.root().children().map(|c| c.face().unwrap()).collect::<Vec<_>>(),
            &[Face::A, Face::Q, Face::Qu, Face::R, Face::Z],
        );
    }

    #[test]
    fn iterate_test_trie() {
        let trie = make_test_trie();
        let mut iter = trie.words();

        assert_eq!(iter.next(), Some("a"));
        assert_eq!(iter.next(), Some("app"));
        assert_eq!(iter.next(), Some("apple"));
        assert_eq!(iter.next(), Some("b"));
        assert_eq!(iter.next(), Some("c"));
        assert_eq!(iter.next(), Some("quick"));
        assert_eq!(iter.next(), Some("quiet"));
        assert_eq!(iter.next(), None);

        assert_eq!(trie.len(), 7);
    }

    #[test]
    fn iterate_empty_trie() {
        let trie = Trie::new();
        let mut iter = trie.words();
        assert_eq!(iter.next(), None);
    }
}
