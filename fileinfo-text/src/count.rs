//! Line and word counting handlers

use fileinfo_plugin::prelude::*;
use std::fs;
use std::path::Path;

fn read_contents(path: &Path) -> Result<String, HandlerError> {
    fs::read_to_string(path).map_err(|source| HandlerError::io(path, source))
}

// ============ LineCount ============

pub struct LineCount;

impl FileHandler for LineCount {
    fn meta(&self) -> HandlerMeta {
        HandlerMeta {
            name: "line_count",
            description: "Count the lines in a text file",
        }
    }

    fn inspect(&self, path: &Path) -> Result<Vec<String>, HandlerError> {
        let contents = read_contents(path)?;
        Ok(vec![format!("Lines {}", contents.lines().count())])
    }
}

// ============ WordCount ============

pub struct WordCount;

impl FileHandler for WordCount {
    fn meta(&self) -> HandlerMeta {
        HandlerMeta {
            name: "word_count",
            description: "Count whitespace-separated words in a text file",
        }
    }

    fn inspect(&self, path: &Path) -> Result<Vec<String>, HandlerError> {
        let contents = read_contents(path)?;
        Ok(vec![format!(
            "Words {}",
            contents.split_whitespace().count()
        )])
    }
}
