/// Fixed greeting printed by the driver.
pub const WELCOME: &str = "Hello, welcome to the world of packages";
