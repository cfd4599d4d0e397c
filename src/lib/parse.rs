use std::{collections::HashMap, fmt};

#[cfg(feature = "tracing")]
use tracing::{debug, trace};

const COMMENT_PREFIX: &str = "#";
const ASSIGNMENT_OPERATOR: &str = "=";

/// A single line of an env file, classified by shape only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvLine<'a> {
  Comment(&'a str),
  Assignment(&'a str),
  Blank,
  /// Non-empty, not a comment, and no usable key.
  Other,
}

impl<'a> From<&'a str> for EnvLine<'a> {
  fn from(s: &'a str) -> Self {
    let trimmed = s.trim();

    if trimmed.is_empty() {
      EnvLine::Blank
    } else if trimmed.starts_with(COMMENT_PREFIX) {
      EnvLine::Comment(trimmed)
    } else if let Some((key, _)) = trimmed.split_once(ASSIGNMENT_OPERATOR)
      && !key.trim().is_empty()
    {
      EnvLine::Assignment(key.trim())
    } else {
      EnvLine::Other
    }
  }
}

/// Consecutive comment lines sitting directly above a key.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommentBlock<'a>(Vec<&'a str>);

impl<'a> CommentBlock<'a> {
  pub fn lines(&self) -> &[&'a str] {
    &self.0
  }
}

impl<'a> fmt::Display for CommentBlock<'a> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for (i, line) in self.0.iter().enumerate() {
      if i > 0 {
        writeln!(f)?;
      }
      write!(f, "{}", line)?;
    }
    Ok(())
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyEntry<'a> {
  pub key: &'a str,
  pub comment: Option<CommentBlock<'a>>,
}

/// Keys of an env file in order of first appearance.
///
/// A key that appears again keeps its original position but takes the
/// comment (or lack of one) of its latest occurrence.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KeyTable<'a> {
  entries: Vec<KeyEntry<'a>>,
  index: HashMap<&'a str, usize>,
}

/// Comment tracking while scanning lines.
#[derive(Debug)]
enum CommentState<'a> {
  Idle,
  Pending(Vec<&'a str>),
}

impl<'a> CommentState<'a> {
  fn push(self, line: &'a str) -> Self {
    match self {
      CommentState::Idle => CommentState::Pending(vec![line]),
      CommentState::Pending(mut lines) => {
        lines.push(line);
        CommentState::Pending(lines)
      }
    }
  }

  fn into_block(self) -> Option<CommentBlock<'a>> {
    match self {
      CommentState::Idle => None,
      CommentState::Pending(lines) => Some(CommentBlock(lines)),
    }
  }
}

impl<'a> KeyTable<'a> {
  /// Builds the table for `text`.
  ///
  /// With `strip_comments` set, comment lines are skipped as if absent: they
  /// neither attach to the next key nor interrupt a pending block. Otherwise a
  /// run of comments attaches to the key on the line right after it, and any
  /// other line (blank or not) drops it.
  pub fn parse(text: &'a str, strip_comments: bool) -> Self {
    #[cfg(feature = "tracing")]
    debug!(
      "Parsing {} lines (strip_comments={})",
      text.lines().count(),
      strip_comments
    );

    let (table, _) = text.lines().map(EnvLine::from).fold(
      (KeyTable::default(), CommentState::Idle),
      |(mut table, state), line| {
        #[cfg(feature = "tracing")]
        trace!("Line: {:?}", line);

        match line {
          EnvLine::Comment(_) if strip_comments => (table, state),
          EnvLine::Comment(text) => (table, state.push(text)),
          EnvLine::Assignment(key) => {
            table.insert(key, state.into_block());
            (table, CommentState::Idle)
          }
          EnvLine::Blank | EnvLine::Other => (table, CommentState::Idle),
        }
      },
    );

    #[cfg(feature = "tracing")]
    debug!("Parsed {} keys", table.len());

    table
  }

  fn insert(&mut self, key: &'a str, comment: Option<CommentBlock<'a>>) {
    if let Some(&pos) = self.index.get(key) {
      #[cfg(feature = "tracing")]
      debug!("Duplicate key {}, keeping the latest comment", key);

      self.entries[pos].comment = comment;
    } else {
      self.index.insert(key, self.entries.len());
      self.entries.push(KeyEntry { key, comment });
    }
  }

  pub fn contains_key(&self, key: &str) -> bool {
    self.index.contains_key(key)
  }

  pub fn keys(&self) -> impl Iterator<Item = &'a str> + '_ {
    self.entries.iter().map(|entry| entry.key)
  }

  pub fn iter(&self) -> impl Iterator<Item = &KeyEntry<'a>> {
    self.entries.iter()
  }

  pub fn len(&self) -> usize {
    self.entries.len()
  }

  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }
}
