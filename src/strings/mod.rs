pub mod count;
pub mod greetings;
pub mod reverse;

pub use count::count;
pub use greetings::WELCOME;
pub use reverse::reverse;
