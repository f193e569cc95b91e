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

// On disk a trie is a JSON object for the root node. Each node is an
// object whose keys are the faces of its children, mapping to the
// child’s own object. A node that ends a word also has the key “_”
// set to true. “_” is never the text of a face so it can’t clash.
//
//   ["quiz", "qat"] → {"q":{"a":{"t":{"_":true}}},"qu":{"i":{"z":{"_":true}}}}

use std::fmt;
use std::io::{Read, Write};
use serde::{Serialize, Serializer, Deserialize, Deserializer};
use serde::de::{self, DeserializeSeed, MapAccess, Visitor};
use serde::ser::SerializeMap;
use super::face::Face;
use super::trie::{Trie, NodeRef};

pub const TERMINAL_KEY: &str = "_";

struct SerializeNode<'a>(NodeRef<'a>);

impl<'a> Serialize for SerializeNode<'a> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let node = self.0;
        let n_entries = node.children().count() + node.is_terminal() as usize;
        let mut map = serializer.serialize_map(Some(n_entries))?;

        if node.is_terminal() {
            map.serialize_entry(TERMINAL_KEY, &true)?;
        }

        for child in node.children() {
            if let Some(face) = child.face() {
                map.serialize_entry(face.as_str(), &SerializeNode(child))?;
            }
        }

        map.end()
    }
}

impl Serialize for Trie {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        SerializeNode(self.root()).serialize(serializer)
    }
}

enum Key {
    Terminal,
    Child(Face),
}

struct KeyVisitor;

impl<'de> Visitor<'de> for KeyVisitor {
    type Value = Key;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "a die face or “{}”", TERMINAL_KEY)
    }

    fn visit_str<E: de::Error>(self, s: &str) -> Result<Key, E> {
        if s == TERMINAL_KEY {
            Ok(Key::Terminal)
        } else {
            s.parse::<Face>().map(Key::Child).map_err(E::custom)
        }
    }
}

impl<'de> Deserialize<'de> for Key {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Key, D::Error> {
        deserializer.deserialize_str(KeyVisitor)
    }
}

// Fills in the children of one node of the trie being built
struct NodeSeed<'t> {
    trie: &'t mut Trie,
    node: usize,
}

impl<'de, 't> DeserializeSeed<'de> for NodeSeed<'t> {
    type Value = ();

    fn deserialize<D: Deserializer<'de>>(self, deserializer: D) -> Result<(), D::Error> {
        deserializer.deserialize_map(self)
    }
}

impl<'de, 't> Visitor<'de> for NodeSeed<'t> {
    type Value = ();

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "a trie node")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<(), A::Error> {
        let NodeSeed { trie, node } = self;
        let mut seen_terminal = false;

        while let Some(key) = map.next_key::<Key>()? {
            match key {
                Key::Terminal => {
                    if seen_terminal {
                        return Err(de::Error::duplicate_field(TERMINAL_KEY));
                    }

                    seen_terminal = true;

                    // The empty word is never a member so a terminal
                    // marker on the root is ignored
                    if map.next_value::<bool>()? && node != 0 {
                        trie.mark_terminal(node);
                    }
                },
                Key::Child(face) => {
                    if trie.find_child(node, face).is_some() {
                        return Err(de::Error::custom(format_args!(
                            "duplicate face “{}”",
                            face,
                        )));
                    }

                    let child = trie.find_or_add_child(node, face);

                    map.next_value_seed(NodeSeed {
                        trie: &mut *trie,
                        node: child,
                    })?;
                },
            }
        }

        Ok(())
    }
}

impl<'de> Deserialize<'de> for Trie {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Trie, D::Error> {
        let mut trie = Trie::new();

        NodeSeed { trie: &mut trie, node: 0 }.deserialize(deserializer)?;

        Ok(trie)
    }
}

pub fn read_trie<R: Read>(reader: R) -> Result<Trie, serde_json::Error> {
    serde_json::from_reader(reader)
}

pub fn write_trie<W: Write>(
    trie: &Trie,
    writer: W,
) -> Result<(), serde_json::Error> {
    serde_json::to_writer(writer, trie)
}
