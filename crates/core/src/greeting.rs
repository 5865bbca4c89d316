/// Format a fixed greeting sentence for `name`.
///
/// Demonstration utility only; performs no I/O and cannot fail.
pub fn greet(name: &str) -> String {
    format!("Hello, {name}. Good morning!")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greet_interpolates_name() {
        assert_eq!(greet("Ada"), "Hello, Ada. Good morning!");
    }

    #[test]
    fn test_greet_empty_name() {
        assert_eq!(greet(""), "Hello, . Good morning!");
    }
}
