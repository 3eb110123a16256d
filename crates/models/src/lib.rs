pub mod errors;
pub mod validate;
pub mod db;
pub mod category;
pub mod location;
pub mod user;
pub mod user_location;
pub mod ad;

#[cfg(test)]
mod tests;
