//! Friends file loading.
//!
//! One friend per line, fields separated by `%`, each field `key=value`:
//!
//! ```text
//! # handle=...%hosts=...%globflags=...%chanflags=...%password=...%comment=...
//! handle=alice%hosts=*!*@example.com%globflags=ao%chanflags=#ops,aov,10
//! ```
//!
//! Bad lines are logged and skipped; the rest of the file still loads.

use std::collections::{BTreeMap, HashMap};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, error, warn};

use super::record::Friend;
use crate::error::DirectoryError;

/// Immutable snapshot of the friends file.
#[derive(Debug, Clone, Default)]
pub struct Directory {
    friends: HashMap<String, Friend>,
}

impl Directory {
    /// Read a friends file from disk.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, DirectoryError> {
        let path = path.as_ref();
        let io_err = |source| DirectoryError::Io {
            path: path.to_path_buf(),
            source,
        };
        let file = File::open(path).map_err(io_err)?;
        let directory = Self::from_reader(BufReader::new(file)).map_err(io_err)?;
        debug!(path = %path.display(), friends = directory.len(), "Loaded friends file");
        Ok(directory)
    }

    /// Like [`Directory::load`], but an unreadable file yields an empty
    /// directory, which authorizes nobody.
    pub fn load_or_empty<P: AsRef<Path>>(path: P) -> Self {
        Self::load(path).unwrap_or_else(|e| {
            error!(error = %e, "Parsing of friends file failed");
            Self::default()
        })
    }

    /// Parse friends from any line source. A read error discards everything.
    pub fn from_reader<R: BufRead>(reader: R) -> std::io::Result<Self> {
        let mut friends = HashMap::new();
        for line in reader.lines() {
            let line = line?;
            if line.starts_with('#') {
                debug!(line = %line, "Friends line is a comment");
                continue;
            }
            if line.trim().is_empty() {
                debug!("Skipping blank friends line");
                continue;
            }

            match Friend::from_fields(parse_fields(&line), &line) {
                Ok(friend) => {
                    if let Some(previous) = friends.insert(friend.handle.clone(), friend) {
                        warn!(
                            handle = %previous.handle,
                            "Duplicate friend handle, later entry wins"
                        );
                    }
                }
                Err(e) => error!(error = %e, "Failed to parse friends line"),
            }
        }
        Ok(Self { friends })
    }

    /// Look up a friend by handle.
    pub fn get(&self, handle: &str) -> Option<&Friend> {
        self.friends.get(handle)
    }

    /// Number of friends loaded.
    pub fn len(&self) -> usize {
        self.friends.len()
    }

    /// Whether no friend was loaded.
    pub fn is_empty(&self) -> bool {
        self.friends.is_empty()
    }

    /// All friends, in no particular order.
    pub fn friends(&self) -> impl Iterator<Item = &Friend> {
        self.friends.values()
    }
}

/// Split a friends line into its `key=value` fields.
///
/// A field without `=` has an empty value, a field with an empty key is
/// dropped and a repeated key keeps its last value.
pub fn parse_fields(line: &str) -> BTreeMap<String, String> {
    line.trim()
        .split('%')
        .filter_map(|field| {
            let (key, value) = field.split_once('=').unwrap_or((field, ""));
            (!key.is_empty()).then(|| (key.to_string(), value.to_string()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const FRIENDS: &str = "\
# handle=...%hosts=...
handle=alice%hosts=*!*@example.com%globflags=ao
handle=bob%hosts=*!bob@*%globflags=av%chanflags=#ops,ao,5

hosts=*!*@nohandle.example.com%globflags=ao
handle=%hosts=*
handle=alice%hosts=*!alice@new.example.com%globflags=v
";

    fn load(text: &str) -> Directory {
        Directory::from_reader(Cursor::new(text)).unwrap()
    }

    #[test]
    fn test_parse_fields() {
        let fields = parse_fields("handle=a%hosts=x y%flag%=orphan%comment=a=b\n");
        assert_eq!(fields.get("handle").map(String::as_str), Some("a"));
        assert_eq!(fields.get("hosts").map(String::as_str), Some("x y"));
        assert_eq!(fields.get("flag").map(String::as_str), Some(""));
        assert_eq!(fields.get("comment").map(String::as_str), Some("a=b"));
        assert!(!fields.contains_key(""));
    }

    #[test]
    fn test_parse_fields_repeated_key() {
        let fields = parse_fields("handle=a%handle=b");
        assert_eq!(fields.get("handle").map(String::as_str), Some("b"));
    }

    #[test]
    fn test_bad_lines_skipped() {
        let directory = load(FRIENDS);
        assert_eq!(directory.len(), 2);
        assert!(directory.get("bob").is_some());
    }

    #[test]
    fn test_last_handle_wins() {
        let directory = load(FRIENDS);
        let alice = directory.get("alice").unwrap();
        assert_eq!(alice.hosts, vec!["*!alice@new.example.com"]);
    }

    #[test]
    fn test_blank_lines_skipped() {
        let directory = load("\n   \nhandle=alice%hosts=*!*@example.com\n\t\n");
        assert_eq!(directory.len(), 1);
        assert!(directory.get("alice").is_some());
    }

    #[test]
    fn test_comment_only_file() {
        assert!(load("# nothing here\n#handle=x\n").is_empty());
    }

    #[test]
    fn test_missing_file_is_empty_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("friends.txt");
        assert!(Directory::load(&path).is_err());
        assert!(Directory::load_or_empty(&path).is_empty());
    }

    #[test]
    fn test_unreadable_content_is_error() {
        // Invalid UTF-8 makes the line reader fail.
        let bytes: &[u8] = b"handle=a\n\xff\xfe\n";
        assert!(Directory::from_reader(Cursor::new(bytes)).is_err());
    }
}
