//! Randomized greeting selection
//!
//! Pure and stateless; never touches the record store. Selection is
//! non-deterministic by design, there is no seeding contract. Tests assert
//! membership in the template set, never an exact value.

use rand::Rng;

/// Fixed greeting templates; `{name}` marks the interpolation point.
const GREETING_TEMPLATES: [&str; 3] = [
    "Hello {name}! Welcome to the Agent Wallboard",
    "Hi {name}! Ready to take calls today?",
    "Good to see you, {name}. Have a great shift!",
];

/// Pick one greeting template uniformly at random and interpolate the name.
pub fn random_greeting(name: &str) -> String {
    let index = rand::rng().random_range(0..GREETING_TEMPLATES.len());
    GREETING_TEMPLATES[index].replace("{name}", name)
}

/// Every rendered greeting for the given name.
///
/// Exists so callers and tests can check a greeting for membership in the
/// fixed template set without depending on the selection being repeatable.
pub fn all_greetings(name: &str) -> Vec<String> {
    GREETING_TEMPLATES
        .iter()
        .map(|template| template.replace("{name}", name))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greeting_contains_name() {
        let greeting = random_greeting("Sam");
        assert!(greeting.contains("Sam"));
    }

    #[test]
    fn test_greeting_drawn_from_template_set() {
        let expected = all_greetings("Sam");
        for _ in 0..50 {
            let greeting = random_greeting("Sam");
            assert!(
                expected.contains(&greeting),
                "Unexpected greeting: {}",
                greeting
            );
        }
    }

    #[test]
    fn test_all_greetings_one_per_template() {
        let rendered = all_greetings("Sam");
        assert_eq!(rendered.len(), GREETING_TEMPLATES.len());
        assert!(rendered.iter().all(|g| g.contains("Sam")));
    }
}
