use std::cmp::Ordering;
use std::fmt;

/// An entry in the contact book demo.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Contact {
    pub name: String,
    pub phone: String,
    pub email: String,
}

impl Contact {
    pub fn new(name: &str, phone: &str, email: &str) -> Self {
        Self {
            name: name.to_string(),
            phone: phone.to_string(),
            email: email.to_string(),
        }
    }

    /// A lookup key carrying only a name.
    pub fn named(name: &str) -> Self {
        Self::new(name, "", "")
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {} ({})", self.name, self.phone, self.email)
    }
}

/// Orders contacts by name, ignoring case.
pub fn by_name(a: &Contact, b: &Contact) -> Ordering {
    cmp_ignore_case(&a.name, &b.name)
}

/// Orders contacts by phone number, ignoring case.
pub fn by_phone(a: &Contact, b: &Contact) -> Ordering {
    cmp_ignore_case(&a.phone, &b.phone)
}

fn cmp_ignore_case(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
}
