// src/macros.rs
#[macro_export]
macro_rules! s {
    // String shorthand!

    // Zero-arg → String::new()
    () => {
        ::std::string::String::new()
    };
    // Single expression: literal, const, or var
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}
