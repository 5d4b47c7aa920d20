#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(i64);

impl UserId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }
}

impl AsRef<i64> for UserId {
    fn as_ref(&self) -> &i64 {
        &self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[test]
fn test_display_matches_inner_value() {
    let id = UserId::new(42);
    assert_eq!(id.to_string(), "42");
    assert_eq!(*id.as_ref(), 42);
}
