use crate::domain::bounded_text::parse_bounded;

#[derive(Debug, Clone)]
pub struct ContactName(String);

impl ContactName {
    pub const MIN_LEN: usize = 2;
    pub const MAX_LEN: usize = 50;

    pub fn parse(s: impl AsRef<str>) -> Result<Self, String> {
        parse_bounded("name", s.as_ref(), Self::MIN_LEN, Self::MAX_LEN).map(Self)
    }
}

impl AsRef<str> for ContactName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
