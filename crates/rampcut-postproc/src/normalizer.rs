//! Removes consecutive duplicate commands from a shape's command list.

/// Collapses runs of textually identical commands to a single occurrence.
///
/// Each command is compared against the last command that was *kept*, not
/// merely its immediate predecessor in the input, so a run of any length
/// collapses to one element. Order and first occurrences are preserved,
/// and the operation is idempotent.
pub fn dedup_consecutive(commands: &[String]) -> Vec<String> {
    let mut result = Vec::with_capacity(commands.len());
    let mut last_kept: Option<&str> = None;

    for command in commands {
        if last_kept != Some(command.as_str()) {
            result.push(command.clone());
            last_kept = Some(command.as_str());
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn commands(lines: &[&str]) -> Vec<String> {
        lines.iter().map(|line| line.to_string()).collect()
    }

    #[test]
    fn test_collapses_runs() {
        let input = commands(&["G1 X1 Y1", "G1 X1 Y1", "G1 X1 Y1", "G1 X2 Y2"]);
        assert_eq!(
            dedup_consecutive(&input),
            commands(&["G1 X1 Y1", "G1 X2 Y2"])
        );
    }

    #[test]
    fn test_keeps_non_adjacent_duplicates() {
        let input = commands(&["G1 X1 Y1", "G1 X2 Y2", "G1 X1 Y1"]);
        assert_eq!(dedup_consecutive(&input), input);
    }

    #[test]
    fn test_idempotent() {
        let input = commands(&["a", "a", "b", "b", "b", "a", "c", "c"]);
        let once = dedup_consecutive(&input);
        let twice = dedup_consecutive(&once);
        assert_eq!(once, twice);
        assert_eq!(once, commands(&["a", "b", "a", "c"]));
    }

    #[test]
    fn test_empty_input() {
        assert!(dedup_consecutive(&[]).is_empty());
    }
}
