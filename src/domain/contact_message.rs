use crate::domain::bounded_text::parse_bounded;

#[derive(Debug, Clone)]
pub struct ContactMessage(String);

impl ContactMessage {
    pub const MIN_LEN: usize = 10;
    pub const MAX_LEN: usize = 1000;

    pub fn parse(s: impl AsRef<str>) -> Result<Self, String> {
        parse_bounded("message", s.as_ref(), Self::MIN_LEN, Self::MAX_LEN).map(Self)
    }
}

impl AsRef<str> for ContactMessage {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
