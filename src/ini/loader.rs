//! Document loading
//!
//! [IniLoader] owns the tree root and the current section, and drives the line parser over an
//! input. Section lines move the current section, assignment lines append a value to a node
//! below it, everything else is skipped.
//!
//! The current section is kept as a path of segment names from the root rather than a
//! reference into the tree, and is resolved again whenever it is used. Nodes are never removed
//! except by [IniLoader::clear], so the path always points at an existing node.
//!
//! # Example
//!
//! ```text
//! let mut loader = IniLoader::new();
//! loader.load_str("[server]\nport = 8080\nport = 8081\n", false);
//!
//! assert_eq!(loader.get::<u16>("server.port"), 8080);
//!
//! let mut ports = Vec::new();
//! loader.dump_to_vec("server.port", &mut ports, false);
//! assert_eq!(ports, vec![8080u16, 8081]);
//! ```

use crate::ini::convert::FromValue;
use crate::ini::error::{LoadError, Result};
use crate::ini::parsing::{parse_path, parse_statement, Statement};
use crate::ini::tree::ConfigNode;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::{debug, trace};

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Counters of a single load, reported at debug level
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadStats {
    pub lines: usize,
    pub sections: usize,
    pub assignments: usize,
    pub malformed: usize,
}

#[derive(Debug, Clone, Default)]
pub struct IniLoader {
    root: ConfigNode,
    section: Vec<String>,
}

impl IniLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a document from a string.
    ///
    /// Without `append` all previous content is discarded first. A leading U+FEFF is ignored.
    pub fn load_str(&mut self, source: &str, append: bool) -> LoadStats {
        if !append {
            self.clear();
        }
        let source = source.strip_prefix('\u{feff}').unwrap_or(source);
        self.load_lines(source)
    }

    /// Load a document from a byte stream.
    ///
    /// The stream is read to the end before anything changes, so a read error leaves the
    /// current content untouched even without `append`. A leading UTF-8 byte order mark is
    /// dropped and invalid UTF-8 is replaced.
    pub fn load_reader<R: Read>(&mut self, mut reader: R, append: bool) -> Result<LoadStats> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;

        let body = bytes.strip_prefix(UTF8_BOM).unwrap_or(&bytes[..]);
        let source = String::from_utf8_lossy(body);
        Ok(self.load_str(&source, append))
    }

    /// Load a document from a file. See [IniLoader::load_reader].
    pub fn load_file<P: AsRef<Path>>(&mut self, path: P, append: bool) -> Result<LoadStats> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| LoadError::Open {
            path: path.to_path_buf(),
            source,
        })?;

        debug!(path = %path.display(), append, "loading ini file");
        self.load_reader(BufReader::new(file), append)
    }

    fn load_lines(&mut self, source: &str) -> LoadStats {
        let mut stats = LoadStats::default();

        for (index, line) in source.lines().enumerate() {
            stats.lines += 1;
            match parse_statement(line) {
                Statement::Section(path) => {
                    self.root.resolve_mut(path.iter().copied());
                    self.section = path.into_iter().map(str::to_owned).collect();
                    stats.sections += 1;
                }
                Statement::Assignment(assignment) => {
                    self.section_mut()
                        .resolve_mut(assignment.key)
                        .add(assignment.value);
                    stats.assignments += 1;
                }
                Statement::Malformed => {
                    trace!(line = index + 1, text = line, "skipping malformed line");
                    stats.malformed += 1;
                }
                Statement::Empty | Statement::Comment => {}
            }
        }

        debug!(
            lines = stats.lines,
            sections = stats.sections,
            assignments = stats.assignments,
            malformed = stats.malformed,
            "loaded ini document"
        );
        stats
    }

    /// Drop the whole tree and move the current section back to the root
    pub fn clear(&mut self) {
        self.root.clear();
        self.section.clear();
    }

    pub fn root(&self) -> &ConfigNode {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut ConfigNode {
        &mut self.root
    }

    /// Move the current section to a dotted path from the root, creating it if needed
    pub fn set_section(&mut self, path: &str) {
        let segments = parse_path(path);
        self.root.resolve_mut(segments.iter().copied());
        self.section = segments.into_iter().map(str::to_owned).collect();
    }

    /// Segments of the current section, root first. Empty at the root.
    pub fn section_path(&self) -> &[String] {
        &self.section
    }

    /// The node of the current section.
    ///
    /// If that node was removed through [IniLoader::root_mut], this is the root, while
    /// [IniLoader::section_mut] and the next assignment recreate the node.
    pub fn section(&self) -> &ConfigNode {
        self.root
            .descend(self.section.iter().map(String::as_str))
            .unwrap_or(&self.root)
    }

    pub fn section_mut(&mut self) -> &mut ConfigNode {
        self.root.resolve_mut(self.section.iter().map(String::as_str))
    }

    /// Resolve a dotted path from the root, creating missing nodes.
    ///
    /// Use [ConfigNode::get_node] to resolve from any other node.
    pub fn get_node(&mut self, path: &str) -> &mut ConfigNode {
        self.root.get_node(path)
    }

    /// Direct child of the root by exact name, created if missing
    pub fn get_child_node(&mut self, name: &str) -> &mut ConfigNode {
        self.root.child_mut(name)
    }

    /// Resolve a dotted path from the root without creating anything
    pub fn find(&self, path: &str) -> Option<&ConfigNode> {
        self.root.find(path)
    }

    /// First value of `path` converted to `T`, or `T`'s zero value
    pub fn get<T: FromValue>(&mut self, path: &str) -> T {
        self.get_node(path).value(0)
    }

    /// Store value `index` of `path` into `target`.
    ///
    /// `target` is only written when the node has at least one value, or when `force` is set.
    /// Forcing a node without values writes the zero value.
    pub fn dump_to<T: FromValue>(&mut self, path: &str, target: &mut T, force: bool, index: usize) {
        let node = self.get_node(path);
        if node.has_data() {
            *target = node.value(index);
        } else if force {
            *target = T::default();
        }
    }

    /// Copy value `index` of `path` into a fixed-size byte buffer.
    ///
    /// Copies at most `buffer.len()` bytes and zero-fills the rest. Same write condition as
    /// [IniLoader::dump_to].
    pub fn dump_to_bytes(&mut self, path: &str, buffer: &mut [u8], force: bool, index: usize) {
        let node = self.get_node(path);
        if !node.has_data() && !force {
            return;
        }

        let bytes = node.as_str(index).as_bytes();
        let copied = bytes.len().min(buffer.len());
        buffer[..copied].copy_from_slice(&bytes[..copied]);
        buffer[copied..].fill(0);
    }

    /// Append every value of `path`, converted, to `target`.
    ///
    /// With `force` the vector is cleared first.
    pub fn dump_to_vec<T: FromValue>(&mut self, path: &str, target: &mut Vec<T>, force: bool) {
        if force {
            target.clear();
        }
        let node = self.get_node(path);
        target.extend((0..node.len()).map(|index| node.value(index)));
    }

    /// Convert values of `path` into `target` in place, up to whichever runs out first.
    ///
    /// Slots past the stored values are left alone.
    pub fn dump_to_slice<T: FromValue>(&mut self, path: &str, target: &mut [T]) {
        let node = self.get_node(path);
        for (index, slot) in target.iter_mut().take(node.len()).enumerate() {
            *slot = node.value(index);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    const SAMPLE: &str = "\
; sample
name = demo
[server]
host = localhost
port = 8080
port = 8081
tls.enabled = yes

[server.limits]
max = 100

[child : parent]
key = nested
";

    fn loaded() -> IniLoader {
        let mut loader = IniLoader::new();
        loader.load_str(SAMPLE, false);
        loader
    }

    #[test]
    fn test_load_stats() {
        let mut loader = IniLoader::new();
        let stats = loader.load_str("[a]\nk = v\n= broken\n\n# c\n", false);
        assert_eq!(
            stats,
            LoadStats {
                lines: 5,
                sections: 1,
                assignments: 1,
                malformed: 1,
            }
        );
    }

    #[test]
    fn test_sections_and_assignments() {
        let mut loader = loaded();
        assert_eq!(loader.get::<String>("name"), "demo");
        assert_eq!(loader.get::<String>("server.host"), "localhost");
        assert_eq!(loader.get::<u16>("server.port"), 8080);
        assert!(loader.get::<bool>("server.tls.enabled"));
        assert_eq!(loader.get::<i32>("server.limits.max"), 100);
        assert_eq!(loader.get::<String>("parent.child.key"), "nested");
    }

    #[test]
    fn test_current_section_after_load() {
        let loader = loaded();
        assert_eq!(loader.section_path(), ["parent", "child"]);
        assert_eq!(loader.section().as_str(0), "");
        assert!(loader.section().child("key").is_some());
    }

    #[test]
    fn test_empty_section_returns_to_root() {
        let mut loader = IniLoader::new();
        loader.load_str("[a]\nx = 1\n[]\ny = 2\n", false);
        assert_eq!(loader.get::<i32>("a.x"), 1);
        assert_eq!(loader.get::<i32>("y"), 2);
        assert!(loader.section_path().is_empty());
    }

    #[test]
    fn test_set_section() {
        let mut loader = loaded();
        loader.set_section("server . limits");
        assert_eq!(loader.section_path(), ["server", "limits"]);
        assert_eq!(loader.section().value::<i32>(0), 0);
        assert_eq!(loader.section().child("max").map(|n| n.as_str(0)), Some("100"));

        loader.set_section("brand.new");
        assert!(loader.find("brand.new").is_some());
        loader.section_mut().add("here");
        assert_eq!(loader.find("brand.new").map(|n| n.as_str(0)), Some("here"));

        // Later assignments land under the new section
        loader.load_str("extra = 1\n", true);
        assert_eq!(loader.get::<i32>("brand.new.extra"), 1);
    }

    #[test]
    fn test_root_mut_edits_are_visible() {
        let mut loader = loaded();
        loader.root_mut().get_node("added.by.hand").add("42");
        loader.root_mut().children_mut().remove("name");

        assert_eq!(loader.get::<u8>("added.by.hand"), 42);
        assert!(loader.find("name").is_none());
    }

    #[test]
    fn test_section_falls_back_to_root_when_removed() {
        let mut loader = IniLoader::new();
        loader.load_str("top = 1\n[gone]\nk = v\n", false);
        loader.root_mut().children_mut().remove("gone");

        assert_eq!(loader.section_path(), ["gone"]);
        assert!(loader.section().child("top").is_some());

        loader.load_str("k = again\n", true);
        assert_eq!(loader.find("gone.k").map(|n| n.as_str(0)), Some("again"));
        assert!(loader.section().child("k").is_some());
    }

    #[test]
    fn test_key_without_equals_stores_empty_value() {
        let mut loader = IniLoader::new();
        let stats = loader.load_str("[s]\nflag\na:b = 1\n", false);
        assert_eq!(stats.assignments, 2);
        assert_eq!(stats.malformed, 0);

        let empty = [String::new()];
        assert_eq!(
            loader.find("s.flag").map(ConfigNode::values),
            Some(&empty[..])
        );
        assert_eq!(
            loader.find("s.a").map(ConfigNode::values),
            Some(&empty[..])
        );
        assert!(loader.find("s.a.b").is_none());

        let mut target = 5i32;
        loader.dump_to("s.flag", &mut target, false, 0);
        assert_eq!(target, 0);
    }

    #[test]
    fn test_clear() {
        let mut loader = loaded();
        loader.clear();
        assert!(loader.root().is_empty());
        assert!(loader.section_path().is_empty());
    }

    #[test]
    fn test_get_node_materializes_find_does_not() {
        let mut loader = loaded();
        assert!(loader.find("nope.nothing").is_none());
        assert_eq!(loader.get::<i64>("nope.nothing"), 0);
        assert!(loader.find("nope.nothing").is_some());
    }

    #[test]
    fn test_get_child_node_uses_exact_name() {
        let mut loader = IniLoader::new();
        loader.get_child_node("a.b").add("literal");
        assert!(loader.root().child("a.b").is_some());
        assert!(loader.find("a.b").is_none());
    }

    #[test]
    fn test_dump_to_respects_force() {
        let mut loader = loaded();

        let mut port = 1u16;
        loader.dump_to("server.port", &mut port, false, 1);
        assert_eq!(port, 8081);

        let mut missing = 42i32;
        loader.dump_to("server.missing", &mut missing, false, 0);
        assert_eq!(missing, 42);
        loader.dump_to("server.missing", &mut missing, true, 0);
        assert_eq!(missing, 0);

        let mut flag = true;
        loader.dump_to("server.missing", &mut flag, true, 0);
        assert!(!flag);

        let mut text = String::from("keep");
        loader.dump_to("server.missing", &mut text, false, 0);
        assert_eq!(text, "keep");
        loader.dump_to("server.missing", &mut text, true, 0);
        assert_eq!(text, "");
    }

    #[test]
    fn test_dump_to_out_of_range_index() {
        let mut loader = loaded();
        let mut port = 7u16;
        loader.dump_to("server.port", &mut port, false, 2);
        assert_eq!(port, 0);
    }

    #[test]
    fn test_dump_to_bytes() {
        let mut loader = loaded();

        let mut buffer = [0xffu8; 12];
        loader.dump_to_bytes("server.host", &mut buffer, false, 0);
        assert_eq!(&buffer, b"localhost\0\0\0");

        let mut short = [0u8; 4];
        loader.dump_to_bytes("server.host", &mut short, false, 0);
        assert_eq!(&short, b"loca");

        let mut untouched = [1u8; 3];
        loader.dump_to_bytes("server.none", &mut untouched, false, 0);
        assert_eq!(untouched, [1, 1, 1]);
        loader.dump_to_bytes("server.none", &mut untouched, true, 0);
        assert_eq!(untouched, [0, 0, 0]);
    }

    #[test]
    fn test_dump_to_vec() {
        let mut loader = loaded();

        let mut ports = vec![1u16];
        loader.dump_to_vec("server.port", &mut ports, false);
        assert_eq!(ports, vec![1, 8080, 8081]);

        loader.dump_to_vec("server.port", &mut ports, true);
        assert_eq!(ports, vec![8080, 8081]);

        let mut none: Vec<String> = vec!["x".to_string()];
        loader.dump_to_vec("server.none", &mut none, true);
        assert!(none.is_empty());
    }

    #[test]
    fn test_dump_to_slice() {
        let mut loader = loaded();

        let mut one = [0u16; 1];
        loader.dump_to_slice("server.port", &mut one);
        assert_eq!(one, [8080]);

        let mut three = [9u16; 3];
        loader.dump_to_slice("server.port", &mut three);
        assert_eq!(three, [8080, 8081, 9]);
    }

    #[test]
    fn test_append_and_replace() {
        let mut loader = IniLoader::new();
        loader.load_str("a = 1\nb = 2\n", false);
        loader.load_str("b = 3\nc = 4\n", true);
        assert_eq!(loader.get::<i32>("a"), 1);
        assert_eq!(
            loader.find("b").map(|n| n.values().to_vec()),
            Some(vec!["2".to_string(), "3".to_string()])
        );
        assert_eq!(loader.get::<i32>("c"), 4);

        loader.load_str("z = 26\n", false);
        assert!(loader.find("a").is_none());
        assert_eq!(loader.get::<i32>("z"), 26);
    }

    #[test]
    fn test_bom_is_dropped() {
        let mut plain = IniLoader::new();
        plain.load_str("k = v\n", false);

        let mut from_str = IniLoader::new();
        from_str.load_str("\u{feff}k = v\n", false);
        assert_eq!(from_str.root(), plain.root());

        let mut from_bytes = IniLoader::new();
        let bytes = b"\xEF\xBB\xBFk = v\n";
        from_bytes
            .load_reader(&bytes[..], false)
            .expect("in-memory read");
        assert_eq!(from_bytes.root(), plain.root());
    }

    #[test]
    fn test_partial_bom_is_kept() {
        let mut loader = IniLoader::new();
        loader
            .load_reader(&b"\xEF\xBBk = v\n"[..], false)
            .expect("in-memory read");
        // The two stray bytes become a replacement character glued to the key
        assert!(loader.find("k").is_none());
        assert_eq!(loader.root().children().len(), 1);
    }

    #[test]
    fn test_crlf_lines() {
        let mut loader = IniLoader::new();
        loader.load_str("[s]\r\nk = v\r\nq = \"x \"\r\n", false);
        assert_eq!(loader.get::<String>("s.k"), "v");
        assert_eq!(loader.get::<String>("s.q"), "x ");
    }

    struct FailingReader;

    impl Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "boom"))
        }
    }

    #[test]
    fn test_read_error_keeps_state() {
        let mut loader = loaded();
        let err = loader
            .load_reader(FailingReader, false)
            .expect_err("reader fails");
        assert!(matches!(err, LoadError::Read(_)));
        assert_eq!(loader.get::<String>("name"), "demo");
    }

    #[test]
    fn test_missing_file_keeps_state() {
        let mut loader = loaded();
        let err = loader
            .load_file("/definitely/not/here.ini", false)
            .expect_err("file is missing");
        assert!(matches!(err, LoadError::Open { .. }));
        assert_eq!(loader.get::<String>("name"), "demo");
    }
}
