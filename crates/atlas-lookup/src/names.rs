use std::collections::HashMap;

/// Case-insensitive index from a name to its canonical spelling.
///
/// The first spelling inserted for a key wins.
#[derive(Debug, Clone, Default)]
pub struct CaseInsensitiveNames {
    map: HashMap<String, String>,
}

impl CaseInsensitiveNames {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut map = HashMap::new();
        for name in names {
            let name = name.as_ref();
            map.entry(fold(name)).or_insert_with(|| name.to_string());
        }
        Self { map }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.map.get(&fold(name)).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.map.contains_key(&fold(name))
    }
}

fn fold(name: &str) -> String {
    name.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_any_casing_to_first_spelling() {
        let names = CaseInsensitiveNames::new(["United Kingdom", "UNITED KINGDOM", "India"]);
        assert_eq!(names.get("united kingdom"), Some("United Kingdom"));
        assert_eq!(names.get(" INDIA "), Some("India"));
        assert!(names.contains("india"));
        assert!(!names.contains("UK"));
    }
}
