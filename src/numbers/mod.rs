pub mod prime;

pub use prime::is_prime;
