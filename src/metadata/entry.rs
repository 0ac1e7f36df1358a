/// One header record: a value plus flags that are fixed at registration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataEntry {
    label: String,
    value: String,
    reserved: bool,
    required: bool,
}

impl MetadataEntry {
    pub(crate) fn new(label: &str, value: impl Into<String>, reserved: bool, required: bool) -> Self {
        Self {
            label: label.trim().to_string(),
            value: value.into(),
            reserved,
            required,
        }
    }

    /// Label as registered (trimmed, original case)
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Current value
    pub fn value(&self) -> &str {
        &self.value
    }

    /// True for labels defined by the interchange standard
    pub fn is_reserved(&self) -> bool {
        self.reserved
    }

    /// True for labels the interchange standard requires
    pub fn is_required(&self) -> bool {
        self.required
    }

    /// True if the value is blank
    pub fn is_empty(&self) -> bool {
        self.value.trim().is_empty()
    }

    pub(crate) fn set_value(&mut self, value: String) {
        self.value = value;
    }

    /// `label = value`, with the label padded to `width` columns
    pub fn to_plain_line(&self, width: usize) -> String {
        format!("{:<width$} = {}", self.label, self.value, width = width)
    }

    /// `##LABEL= value` or `##$LABEL= value`
    ///
    /// The label field is padded to `width + 4` columns and the line is cut
    /// to `max_len` characters (ending in `...`) when `max_len` is non-zero.
    pub fn to_interchange_line(&self, width: usize, max_len: usize) -> String {
        let marker = if self.reserved { "##" } else { "##$" };
        let label = format!("{}{}=", marker, self.label.to_uppercase());
        let line = if width > 0 {
            format!("{:<width$} {}", label, self.value, width = width + 4)
        } else {
            format!("{} {}", label, self.value)
        };
        truncate_line(line.trim_end(), max_len)
    }
}

pub(crate) fn truncate_line(line: &str, max_len: usize) -> String {
    if max_len == 0 || line.chars().count() <= max_len {
        return line.to_string();
    }
    let keep = max_len.saturating_sub(3);
    let mut cut: String = line.chars().take(keep).collect();
    cut.push_str("...");
    cut
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interchange_line_reserved_and_user() {
        let reserved = MetadataEntry::new("Data Type", "UV/VIS SPECTRUM", true, true);
        assert_eq!(reserved.to_interchange_line(0, 0), "##DATA TYPE= UV/VIS SPECTRUM");

        let user = MetadataEntry::new(" SPName ", "sample 1", false, false);
        assert_eq!(user.label(), "SPName");
        assert_eq!(user.to_interchange_line(0, 0), "##$SPNAME= sample 1");
    }

    #[test]
    fn test_empty_required_line_has_no_trailing_space() {
        let entry = MetadataEntry::new("Owner", "", true, true);
        assert!(entry.is_empty());
        assert_eq!(entry.to_interchange_line(0, 0), "##OWNER=");
    }

    #[test]
    fn test_justified_lines() {
        let entry = MetadataEntry::new("Owner", "jdoe", true, true);
        assert_eq!(entry.to_plain_line(8), "Owner    = jdoe");
        // "##OWNER=" padded to 8 + 4 columns
        assert_eq!(entry.to_interchange_line(8, 0), "##OWNER=     jdoe");
    }

    #[test]
    fn test_truncation_adds_ellipsis() {
        let entry = MetadataEntry::new("Title", "x".repeat(100), true, true);
        let line = entry.to_interchange_line(0, 20);
        assert_eq!(line.chars().count(), 20);
        assert!(line.ends_with("..."));
        assert!(line.starts_with("##TITLE= "));
    }
}
