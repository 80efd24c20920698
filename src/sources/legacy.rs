use crate::sources::RawSourceEntry;

/// Parses the contents of a one-line-style `sources.list` file.
///
/// Commented-out source lines are kept as disabled records so that normalization
/// can filter them; prose comments, blank lines, and lines that don't match the
/// `<type> [options] <uri> <suite> [component ...]` shape produce nothing.
pub(crate) fn parse_list(contents: &str) -> Vec<RawSourceEntry> {
    contents.lines().filter_map(parse_line).collect()
}

fn parse_line(line: &str) -> Option<RawSourceEntry> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }

    let disabled = trimmed.starts_with('#');
    let body = trimmed.trim_start_matches('#').trim_start();

    let mut tokens = body.split_whitespace().peekable();
    let source_type = tokens.next()?;
    if !matches!(source_type, "deb" | "deb-src") {
        return None;
    }

    let mut architectures = Vec::new();
    if tokens.peek().is_some_and(|token| token.starts_with('[')) {
        architectures = parse_options_clause(&mut tokens)?;
    }

    let uri = tokens.next()?;
    let dist = tokens.next()?;
    let components = tokens.map(str::to_string).collect();

    Some(RawSourceEntry::Legacy {
        source_type: source_type.to_string(),
        uri: uri.to_string(),
        dist: dist.to_string(),
        components,
        architectures,
        disabled,
    })
}

// Consumes the bracketed `[key=value ...]` clause and extracts the `arch=`
// restriction if one is present. Returns `None` when the clause is never closed.
fn parse_options_clause<'a, I>(tokens: &mut I) -> Option<Vec<String>>
where
    I: Iterator<Item = &'a str>,
{
    let mut options = Vec::new();
    loop {
        let token = tokens.next()?;
        let closing = token.ends_with(']');
        options.push(token.trim_start_matches('[').trim_end_matches(']'));
        if closing {
            break;
        }
    }

    Some(
        options
            .iter()
            .find_map(|option| option.strip_prefix("arch="))
            .map(|archs| {
                archs
                    .split(',')
                    .filter(|arch| !arch.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    #[test]
    fn parse_plain_source_line() {
        let records =
            parse_list("deb http://deb.debian.org/debian bookworm main non-free-firmware");
        assert_eq!(
            records,
            vec![RawSourceEntry::Legacy {
                source_type: "deb".to_string(),
                uri: "http://deb.debian.org/debian".to_string(),
                dist: "bookworm".to_string(),
                components: vec!["main".to_string(), "non-free-firmware".to_string()],
                architectures: vec![],
                disabled: false,
            }]
        );
    }

    #[test]
    fn parse_deb_src_line() {
        let records = parse_list("deb-src http://deb.debian.org/debian bookworm main");
        match &records[..] {
            [RawSourceEntry::Legacy {
                source_type,
                disabled,
                ..
            }] => {
                assert_eq!(source_type, "deb-src");
                assert!(!disabled);
            }
            other => panic!("unexpected records - {other:?}"),
        }
    }

    #[test]
    fn commented_source_line_is_disabled() {
        let records = parse_list("# deb http://deb.debian.org/debian bookworm main");
        match &records[..] {
            [RawSourceEntry::Legacy { disabled, uri, .. }] => {
                assert!(disabled);
                assert_eq!(uri, "http://deb.debian.org/debian");
            }
            other => panic!("unexpected records - {other:?}"),
        }
    }

    #[test]
    fn prose_comments_and_blank_lines_produce_nothing() {
        let records = parse_list(indoc! { "
            # See sources.list(5) for more information.

            \t
            ## Mirrors are listed at https://www.debian.org/mirror/list
        " });
        assert_eq!(records, vec![]);
    }

    #[test]
    fn options_clause_with_arch_restriction() {
        let records = parse_list(
            "deb [arch=amd64,arm64 signed-by=/usr/share/keyrings/docker.gpg] https://download.docker.com/linux/debian bookworm stable",
        );
        match &records[..] {
            [RawSourceEntry::Legacy {
                architectures,
                uri,
                dist,
                components,
                ..
            }] => {
                assert_eq!(architectures, &["amd64", "arm64"]);
                assert_eq!(uri, "https://download.docker.com/linux/debian");
                assert_eq!(dist, "bookworm");
                assert_eq!(components, &["stable"]);
            }
            other => panic!("unexpected records - {other:?}"),
        }
    }

    #[test]
    fn spaced_options_clause_is_consumed() {
        let records =
            parse_list("deb [ arch=amd64 ] http://deb.debian.org/debian bookworm main");
        match &records[..] {
            [RawSourceEntry::Legacy {
                architectures, uri, ..
            }] => {
                assert_eq!(architectures, &["amd64"]);
                assert_eq!(uri, "http://deb.debian.org/debian");
            }
            other => panic!("unexpected records - {other:?}"),
        }
    }

    #[test]
    fn options_clause_without_arch_leaves_architectures_empty() {
        let records = parse_list(
            "deb [signed-by=/usr/share/keyrings/docker.gpg] https://download.docker.com/linux/debian bookworm stable",
        );
        match &records[..] {
            [RawSourceEntry::Legacy { architectures, .. }] => assert!(architectures.is_empty()),
            other => panic!("unexpected records - {other:?}"),
        }
    }

    #[test]
    fn malformed_lines_are_skipped() {
        let records = parse_list(indoc! { "
            deb http://deb.debian.org/debian
            rpm http://example.com/fedora rawhide
            deb [arch=amd64 http://unterminated.example.com/debian bookworm main
            cdrom:[Debian GNU/Linux 12]/ bookworm main
        " });
        assert_eq!(records, vec![]);
    }

    #[test]
    fn suite_without_components_is_allowed() {
        let records = parse_list("deb http://example.com/debian ./");
        match &records[..] {
            [RawSourceEntry::Legacy {
                dist, components, ..
            }] => {
                assert_eq!(dist, "./");
                assert!(components.is_empty());
            }
            other => panic!("unexpected records - {other:?}"),
        }
    }
}
