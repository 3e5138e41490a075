//! JSON persistence for value tables
//!
//! A table is stored as one flat, indented JSON object. Each key is the
//! state and action joined by `_`, each value is the estimate:
//!
//! ```json
//! {
//!   "x.o......_4": 0.1,
//!   "x.o......_5": -0.02
//! }
//! ```
//!
//! Keys are split at their last `_` when reading, so state encodings may
//! contain the separator but action encodings may not.

use std::collections::BTreeMap;
use std::fmt::Display;
use std::fs::File;
use std::hash::Hash;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::Path;
use std::str::FromStr;

use serde::ser::Error as _;
use tracing::{info, warn};

use qtab_core::{QTabError, Result};

use crate::agent::QLearningAgent;
use crate::table::ValueTable;

/// Separator between the state and action parts of a persisted key
pub const KEY_SEPARATOR: char = '_';

/// Encode a (state, action) pair as a persisted key
pub fn encode_key<S: Display, A: Display>(state: &S, action: &A) -> Result<String> {
    let action = action.to_string();
    if action.contains(KEY_SEPARATOR) {
        return Err(QTabError::KeyEncoding(format!(
            "action {action:?} contains the separator {KEY_SEPARATOR:?}"
        )));
    }
    Ok(format!("{state}{KEY_SEPARATOR}{action}"))
}

/// Decode a persisted key back into its (state, action) pair
pub fn decode_key<S: FromStr, A: FromStr>(key: &str) -> Result<(S, A)> {
    let (state, action) = key
        .rsplit_once(KEY_SEPARATOR)
        .ok_or_else(|| QTabError::KeyDecoding(format!("no separator in {key:?}")))?;

    let state = state
        .parse()
        .map_err(|_| QTabError::KeyDecoding(format!("invalid state {state:?} in {key:?}")))?;
    let action = action
        .parse()
        .map_err(|_| QTabError::KeyDecoding(format!("invalid action {action:?} in {key:?}")))?;

    Ok((state, action))
}

/// Write the whole table to `path`, replacing any existing file
pub fn write_table<S, A>(table: &ValueTable<S, A>, path: &Path) -> Result<()>
where
    S: Eq + Hash + Display,
    A: Eq + Hash + Display,
{
    let mut entries = BTreeMap::new();
    for (state, action, value) in table.iter() {
        if !value.is_finite() {
            return Err(QTabError::Serialization(serde_json::Error::custom(format!(
                "non-finite value {value} for state {state} action {action}"
            ))));
        }
        entries.insert(encode_key(state, action)?, value);
    }

    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, &entries)?;
    writer.flush()?;

    Ok(())
}

/// Read a table from `path`
///
/// Returns `Ok(None)` when nothing exists at `path`. Any other failure to
/// open the file is an I/O error. Content that is present but malformed,
/// including two keys that decode to the same pair, is an error.
pub fn read_table<S, A>(path: &Path) -> Result<Option<ValueTable<S, A>>>
where
    S: Eq + Hash + FromStr,
    A: Eq + Hash + FromStr,
{
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };
    let entries: BTreeMap<String, f64> = serde_json::from_reader(BufReader::new(file))?;

    let mut table = ValueTable::new();
    for (key, value) in entries {
        let (state, action) = decode_key(&key)?;
        if table.contains(&state, &action) {
            return Err(QTabError::KeyDecoding(format!(
                "{key:?} decodes to a pair already read from another key"
            )));
        }
        table.set(state, action, value);
    }

    Ok(Some(table))
}

impl<S, A, R> QLearningAgent<S, A, R>
where
    S: Eq + Hash + Clone + Display + FromStr,
    A: Eq + Hash + Clone + Display + FromStr,
{
    /// Save the value table to `path`
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        write_table(&self.table, path)?;
        info!(
            "Model for player {} saved to {} ({} values)",
            self.player(),
            path.display(),
            self.table.len()
        );
        Ok(())
    }

    /// Replace the value table with the one stored at `path`
    ///
    /// Returns `Ok(false)` and keeps the current table when `path` does
    /// not exist. On any error the current table is kept as well.
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<bool> {
        let path = path.as_ref();
        match read_table(path)? {
            Some(table) => {
                self.table = table;
                info!(
                    "Model for player {} loaded from {} ({} values)",
                    self.player(),
                    path.display(),
                    self.table.len()
                );
                Ok(true)
            }
            None => {
                warn!("No model found at {}", path.display());
                Ok(false)
            }
        }
    }
}
