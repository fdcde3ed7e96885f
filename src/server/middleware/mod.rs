pub mod auth;
pub mod json;
pub mod language;

#[cfg(test)]
mod test;
