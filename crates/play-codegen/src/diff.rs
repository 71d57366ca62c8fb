//! Line diff for the code panel's changed-line highlight

/// Indices (into `new`) of lines that differ from the same line in `old`.
///
/// Pointwise comparison is all the highlight needs: a regeneration usually
/// touches one value in place, so insertions shifting everything below them
/// simply highlight the shifted tail.
pub fn changed_lines(old: &str, new: &str) -> Vec<usize> {
    let old_lines: Vec<&str> = old.lines().collect();
    new.lines()
        .enumerate()
        .filter(|(i, line)| old_lines.get(*i).is_none_or(|o| o != line))
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_input_has_no_changes() {
        let code = "a\nb\nc";
        assert!(changed_lines(code, code).is_empty());
    }

    #[test]
    fn test_single_line_edit() {
        let old = "a\nb\nc";
        let new = "a\nB\nc";
        assert_eq!(changed_lines(old, new), vec![1]);
    }

    #[test]
    fn test_appended_lines_are_changed() {
        let old = "a";
        let new = "a\nb\nc";
        assert_eq!(changed_lines(old, new), vec![1, 2]);
    }

    #[test]
    fn test_shortened_input_reports_nothing_extra() {
        let old = "a\nb\nc";
        let new = "a";
        assert!(changed_lines(old, new).is_empty());
    }

    #[test]
    fn test_empty_old_marks_everything() {
        assert_eq!(changed_lines("", "a\nb"), vec![0, 1]);
    }
}
