// src/macros.rs
#[macro_export]
macro_rules! s {
    // String shorthand!

    // Zero-arg → String::new()
    () => {
        ::std::string::String::new()
    };
    // Any single expression: works for literals, consts, or vars
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

#[macro_export]
macro_rules! finding {
    // Scoped finding line: "[<scope>] <message>"
    // Scope is anything Display: a Side, or a literal like "score" / "meta".
    ($scope:expr, $($arg:tt)+) => {
        ::std::format!("[{}] {}", $scope, ::std::format!($($arg)+))
    };
}
