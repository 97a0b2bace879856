//! Built-in credential pairs for the prototype deployment. Real user
//! management is out of scope; login is a literal match against this list.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Admin,
    FieldManager,
}

const CREDENTIALS: [(&str, &str, Role); 2] = [
    ("admin", "admin#2024", Role::Admin),
    ("manager", "field#2024", Role::FieldManager),
];

/// Role of the matching credential pair, `None` on any mismatch.
pub fn verify(username: &str, password: &str) -> Option<Role> {
    CREDENTIALS
        .iter()
        .find(|(user, pass, _)| *user == username && *pass == password)
        .map(|(_, _, role)| *role)
}
