//! Host platform version comparison.
//!
//! The override-registry step of the upgrade only applies on platform
//! versions 1.7 and newer. Versions are dotted numeric strings
//! (`"1.7.8.2"`); comparison is segment-wise numeric with missing
//! segments treated as zero.

/// `true` when `version` is at least `minimum`.
///
/// Non-numeric segments compare as zero, matching how lenient the host
/// platform itself is about version strings.
pub fn version_at_least(version: &str, minimum: &str) -> bool {
    let parse = |s: &str| -> Vec<u64> {
        s.split('.')
            .map(|seg| seg.trim().parse::<u64>().unwrap_or(0))
            .collect()
    };
    let a = parse(version);
    let b = parse(minimum);
    let len = a.len().max(b.len());
    for i in 0..len {
        let x = a.get(i).copied().unwrap_or(0);
        let y = b.get(i).copied().unwrap_or(0);
        if x != y {
            return x > y;
        }
    }
    true
}
