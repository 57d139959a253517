// src/macros.rs
#[macro_export]
macro_rules! s {
    // String shorthand!

    // Zero-arg → String::new()
    () => {
        ::std::string::String::new()
    };
    // Any single expression: literals, consts, vars
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

#[macro_export]
macro_rules! join {
    // String-type concatenation shorthand!
    ($first:expr $(, $rest:expr)+ $(,)?) => {{
        let mut s = ::std::string::String::from($first);
        $(
            s.push_str($rest);
        )+
        s
    }};
}

#[macro_export]
macro_rules! form {
    // Owned form-field pairs: form!["key" => value, ...]
    // Values go through ToString so numeric params read naturally.
    ($($key:expr => $val:expr),* $(,)?) => {
        ::std::vec![
            $( (::std::string::String::from($key), ::std::string::ToString::to_string(&$val)) ),*
        ]
    };
}
