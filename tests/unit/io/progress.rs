//! Tests for the solver attempt progress bar

#[cfg(test)]
mod tests {
    use tilewave::io::progress::AttemptProgress;

    // Tests attempts move the bar position
    #[test]
    fn test_start_attempt_sets_position() {
        let progress = AttemptProgress::new(400, true);
        assert_eq!(progress.position(), 0);
        progress.start_attempt(1);
        progress.start_attempt(3);
        assert_eq!(progress.position(), 3);
    }

    // Tests finishing works for both outcomes
    #[test]
    fn test_finish() {
        let solved = AttemptProgress::new(10, true);
        solved.start_attempt(2);
        solved.finish(true);
        assert_eq!(solved.position(), 2);

        let unsolved = AttemptProgress::new(10, true);
        unsolved.start_attempt(10);
        unsolved.finish(false);
        assert_eq!(unsolved.position(), 10);
    }
}
