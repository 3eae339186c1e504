use validator::validate_email;

#[derive(Debug, Clone)]
pub struct ContactEmail(String);

impl ContactEmail {
    pub fn parse(s: impl AsRef<str>) -> Result<Self, String> {
        let s = s.as_ref().trim();
        if validate_email(s) && has_dotted_domain(s) {
            Ok(Self(s.to_string()))
        } else {
            Err("\"email\" must be a valid email".to_string())
        }
    }
}

// At least two non-empty labels after the `@`, e.g. `example.com`.
fn has_dotted_domain(s: &str) -> bool {
    match s.rsplit_once('@') {
        Some((_, domain)) => {
            domain.contains('.') && domain.split('.').all(|label| !label.is_empty())
        }
        None => false,
    }
}

impl AsRef<str> for ContactEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ContactEmail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
