use crate::sources::RawSourceEntry;

/// Parses the contents of a deb822-style `.sources` file.
///
/// Stanzas are separated by blank lines and consist of `Key: value` pairs, where
/// indented lines continue the preceding value and full-line `#` comments are
/// ignored. Disablement and required-field checks happen at normalization, so
/// every non-empty stanza yields a raw record.
pub(crate) fn parse_sources(contents: &str) -> Vec<RawSourceEntry> {
    let mut records = Vec::new();
    let mut fields: Vec<(String, String)> = Vec::new();

    for line in contents.lines() {
        if line.trim().is_empty() {
            records.extend(stanza_record(&fields));
            fields.clear();
        } else if line.trim_start().starts_with('#') {
            continue;
        } else if line.starts_with([' ', '\t']) {
            if let Some((_, value)) = fields.last_mut() {
                value.push(' ');
                value.push_str(line.trim());
            }
        } else if let Some((key, value)) = line.split_once(':') {
            fields.push((key.to_string(), value.trim().to_string()));
        }
        // lines with no colon and no indentation are malformed, skipped
    }
    records.extend(stanza_record(&fields));

    records
}

fn stanza_record(fields: &[(String, String)]) -> Option<RawSourceEntry> {
    if fields.is_empty() {
        return None;
    }

    let mut types = Vec::new();
    let mut uris = Vec::new();
    let mut suites = Vec::new();
    let mut components = Vec::new();
    let mut architectures = Vec::new();
    let mut enabled = true;

    // Known key names are case-sensitive, matching the documented format.
    for (key, value) in fields {
        match key.as_str() {
            "Types" => types = split_list(value),
            "URIs" => uris = split_list(value),
            "Suites" => suites = split_list(value),
            "Components" => components = split_list(value),
            "Architectures" => architectures = split_list(value),
            "Enabled" => enabled = !is_false(value),
            "Disabled" => {
                if is_true(value) {
                    enabled = false;
                }
            }
            _ => {}
        }
    }

    Some(RawSourceEntry::Deb822 {
        types,
        uris,
        suites,
        components,
        architectures,
        enabled,
    })
}

fn split_list(value: &str) -> Vec<String> {
    value.split_whitespace().map(str::to_string).collect()
}

// apt accepts several spellings for boolean field values
fn is_false(value: &str) -> bool {
    matches!(
        value.to_ascii_lowercase().as_str(),
        "no" | "false" | "0" | "off"
    )
}

fn is_true(value: &str) -> bool {
    matches!(
        value.to_ascii_lowercase().as_str(),
        "yes" | "true" | "1" | "on"
    )
}
