use std::collections::HashMap;

use super::entry::MetadataEntry;
use super::MetadataSchema;

/// Rendering knobs shared by the plain and interchange modes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Pad labels to the longest registered label
    pub justify: bool,
    /// Cut interchange lines longer than this (0 disables)
    pub max_line_length: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            justify: true,
            max_line_length: 80,
        }
    }
}

/// Update phase of a metadata registry.
///
/// Entries keep their registration order. Values may be replaced freely,
/// flags never change after an entry exists.
#[derive(Debug, Clone)]
pub struct Metadata {
    entries: Vec<MetadataEntry>,
    index: HashMap<String, usize>,
}

impl Default for Metadata {
    fn default() -> Self {
        MetadataSchema::interchange().build()
    }
}

impl Metadata {
    pub(crate) fn from_entries(entries: Vec<MetadataEntry>) -> Self {
        let index = entries
            .iter()
            .enumerate()
            .map(|(i, e)| (e.label().to_string(), i))
            .collect();
        Self { entries, index }
    }

    /// Registry pre-seeded with the interchange header layout
    pub fn new() -> Self {
        Self::default()
    }

    /// Upsert a value.
    ///
    /// Unknown keys are appended as user-defined (not reserved, not
    /// required) entries.
    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        let key = key.trim();
        let value = value.into();
        match self.index.get(key) {
            Some(&i) => self.entries[i].set_value(value),
            None => {
                self.index.insert(key.to_string(), self.entries.len());
                self.entries
                    .push(MetadataEntry::new(key, value, false, false));
            }
        }
    }

    /// Set a value only if `value` is non-blank
    pub fn set_if_present(&mut self, key: &str, value: &str) {
        if !value.trim().is_empty() {
            self.set(key, value.trim());
        }
    }

    /// Current value of a key, if registered
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entry(key).map(MetadataEntry::value)
    }

    /// Full entry of a key, if registered
    pub fn entry(&self, key: &str) -> Option<&MetadataEntry> {
        self.index.get(key.trim()).map(|&i| &self.entries[i])
    }

    /// Entries in registration order
    pub fn iter(&self) -> impl Iterator<Item = &MetadataEntry> {
        self.entries.iter()
    }

    /// Number of entries (empty ones included)
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the registry has no entries at all
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn label_width(&self, options: &RenderOptions) -> usize {
        if !options.justify {
            return 0;
        }
        self.entries
            .iter()
            .map(|e| e.label().chars().count())
            .max()
            .unwrap_or(0)
    }

    /// `label = value` lines for every non-empty entry
    pub fn render_plain(&self, options: &RenderOptions) -> String {
        self.render_plain_except(options, &[])
    }

    /// Like [`Metadata::render_plain`], skipping the listed labels
    pub fn render_plain_except(&self, options: &RenderOptions, exclude: &[&str]) -> String {
        let width = self.label_width(options);
        let mut out = String::new();
        for entry in &self.entries {
            if entry.is_empty() || exclude.contains(&entry.label()) {
                continue;
            }
            out.push_str(&entry.to_plain_line(width));
            out.push('\n');
        }
        out
    }

    /// `##LABEL= value` lines for non-empty entries and all required ones
    pub fn render_interchange(&self, options: &RenderOptions) -> String {
        let width = self.label_width(options);
        let mut out = String::new();
        for entry in &self.entries {
            if entry.is_empty() && !entry.is_required() {
                continue;
            }
            out.push_str(&entry.to_interchange_line(width, options.max_line_length));
            out.push('\n');
        }
        out
    }
}
