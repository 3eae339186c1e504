use crate::domain::bounded_text::parse_bounded;

#[derive(Debug, Clone)]
pub struct ContactSubject(String);

impl ContactSubject {
    pub const MIN_LEN: usize = 5;
    pub const MAX_LEN: usize = 100;

    pub fn parse(s: impl AsRef<str>) -> Result<Self, String> {
        parse_bounded("subject", s.as_ref(), Self::MIN_LEN, Self::MAX_LEN).map(Self)
    }
}

impl AsRef<str> for ContactSubject {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
