use std::cmp::Ordering;

/// One run of a natural-order comparison key. Identifiers split into
/// alternating non-digit and digit runs; digit runs compare by numeric value,
/// text runs compare lowercased.
#[derive(Debug)]
enum Run<'a> {
    Digits(&'a str),
    Text(String),
}

impl Run<'_> {
    fn cmp_runs(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Run::Digits(a), Run::Digits(b)) => {
                // Leading zeros carry no value; longer trimmed runs are larger
                // numbers, so no integer parse is needed.
                let a = a.trim_start_matches('0');
                let b = b.trim_start_matches('0');
                a.len().cmp(&b.len()).then_with(|| a.cmp(b))
            }
            (Run::Text(a), Run::Text(b)) => a.cmp(b),
            (Run::Digits(_), Run::Text(_)) => Ordering::Less,
            (Run::Text(_), Run::Digits(_)) => Ordering::Greater,
        }
    }
}

impl PartialEq for Run<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp_runs(other) == Ordering::Equal
    }
}

impl Eq for Run<'_> {}

impl PartialOrd for Run<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp_runs(other))
    }
}

impl Ord for Run<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cmp_runs(other)
    }
}

fn natural_key(s: &str) -> Vec<Run<'_>> {
    let mut runs = Vec::new();
    let mut rest = s;

    while !rest.is_empty() {
        let digits = rest.starts_with(|c: char| c.is_ascii_digit());
        let end = rest
            .find(|c: char| c.is_ascii_digit() != digits)
            .unwrap_or(rest.len());
        let (run, tail) = rest.split_at(end);
        runs.push(if digits {
            Run::Digits(run)
        } else {
            Run::Text(run.to_lowercase())
        });
        rest = tail;
    }

    runs
}

/// Human ordering: `qemu-10-1` sorts after `qemu-9-1`, text compares
/// case-insensitively, everything else matches plain lexicographic order.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    natural_key(a).cmp(&natural_key(b))
}

/// Picks the latest published build for `name_prefix` out of `catalog` and
/// returns its version-release suffix (the identifier with everything up to
/// and including the first `-` stripped).
///
/// RHEL rebuilds (any identifier containing `.el`) are ignored regardless of
/// recency; this container always tracks the Fedora builds. `None` means no
/// usable build exists for the prefix.
pub fn latest_version(catalog: &[String], name_prefix: &str) -> Option<String> {
    let mut names: Vec<&str> = catalog
        .iter()
        .map(String::as_str)
        .filter(|name| name.starts_with(name_prefix))
        .collect();
    names.sort_by(|a, b| natural_cmp(a, b));

    for name in names.into_iter().rev() {
        if name.contains(".el") {
            continue;
        }
        if let Some((_, verrel)) = name.split_once('-') {
            return Some(verrel.to_string());
        }
    }

    None
}
